use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::domain::YearMonth;

const HEADER: &str = "# budget notification preferences";
const DISABLED_KEY: &str = "disabled";
const NOTIFIED_PREFIX: &str = "notified.";
const DISMISSED_PREFIX: &str = "dismissed.";

/// In-memory image of the preferences file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    pub(crate) disabled: BTreeSet<i64>,
    pub(crate) notified: BTreeMap<YearMonth, BTreeSet<i64>>,
    pub(crate) dismissed: BTreeMap<YearMonth, BTreeMap<i64, f64>>,
}

/// Result of parsing a preferences file.
#[derive(Debug, Default)]
pub struct ParsedState {
    pub state: NotificationState,
    /// Month-scoped lines dropped because their month key did not parse.
    pub malformed_months: usize,
}

impl NotificationState {
    pub fn disabled(&self) -> &BTreeSet<i64> {
        &self.disabled
    }

    pub fn notified_in(&self, month: YearMonth) -> Option<&BTreeSet<i64>> {
        self.notified.get(&month)
    }

    pub fn dismissed_in(&self, month: YearMonth) -> Option<&BTreeMap<i64, f64>> {
        self.dismissed.get(&month)
    }

    /// Every month that still holds notified or dismissed entries.
    pub fn months(&self) -> BTreeSet<YearMonth> {
        self.notified
            .keys()
            .chain(self.dismissed.keys())
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty() && self.notified.is_empty() && self.dismissed.is_empty()
    }

    /// Drops month groups older than `cutoff`, returning how many were removed.
    pub(crate) fn retain_from(&mut self, cutoff: YearMonth) -> usize {
        let before = self.notified.len() + self.dismissed.len();
        self.notified.retain(|month, _| *month >= cutoff);
        self.dismissed.retain(|month, _| *month >= cutoff);
        before - (self.notified.len() + self.dismissed.len())
    }

    /// Parses the line format. Bad lines and bad entries are skipped one by one.
    pub fn parse(text: &str) -> ParsedState {
        let mut parsed = ParsedState::default();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                warn!(line = number + 1, "skipping notification line without `=`");
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            if key == DISABLED_KEY {
                parsed.state.disabled.extend(parse_ids(value));
            } else if let Some(month) = key.strip_prefix(NOTIFIED_PREFIX) {
                let Some(month) = parse_month(month, &mut parsed.malformed_months) else {
                    continue;
                };
                let ids: BTreeSet<i64> = parse_ids(value).collect();
                if !ids.is_empty() {
                    parsed.state.notified.entry(month).or_default().extend(ids);
                }
            } else if let Some(month) = key.strip_prefix(DISMISSED_PREFIX) {
                let Some(month) = parse_month(month, &mut parsed.malformed_months) else {
                    continue;
                };
                let entries: BTreeMap<i64, f64> = parse_dismissals(value).collect();
                if !entries.is_empty() {
                    parsed.state.dismissed.entry(month).or_default().extend(entries);
                }
            } else {
                debug!(key, "ignoring unknown notification key");
            }
        }
        parsed
    }

    /// Renders the full file. Empty groups produce no line.
    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');

        if !self.disabled.is_empty() {
            out.push_str(&format!("{}={}\n", DISABLED_KEY, join_ids(&self.disabled)));
        }
        for (month, ids) in self.notified.iter().filter(|(_, ids)| !ids.is_empty()) {
            out.push_str(&format!("{}{}={}\n", NOTIFIED_PREFIX, month, join_ids(ids)));
        }
        for (month, entries) in self.dismissed.iter().filter(|(_, e)| !e.is_empty()) {
            let joined = entries
                .iter()
                .map(|(id, limit)| format!("{id}:{limit}"))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&format!("{}{}={}\n", DISMISSED_PREFIX, month, joined));
        }
        out
    }
}

fn parse_month(raw: &str, malformed: &mut usize) -> Option<YearMonth> {
    match raw.parse::<YearMonth>() {
        Ok(month) => Some(month),
        Err(err) => {
            warn!(%err, "dropping notification entries with malformed month");
            *malformed += 1;
            None
        }
    }
}

fn parse_ids(value: &str) -> impl Iterator<Item = i64> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match part.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(entry = part, "skipping unparsable category id");
                None
            }
        })
}

fn parse_dismissals(value: &str) -> impl Iterator<Item = (i64, f64)> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let parsed = part.split_once(':').and_then(|(id, limit)| {
                let id = id.trim().parse::<i64>().ok()?;
                let limit = limit.trim().parse::<f64>().ok()?;
                limit.is_finite().then_some((id, limit))
            });
            if parsed.is_none() {
                warn!(entry = part, "skipping unparsable dismissal");
            }
            parsed
        })
}

fn join_ids(ids: &BTreeSet<i64>) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
