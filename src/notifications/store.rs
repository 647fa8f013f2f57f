use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info, warn};

use super::format::NotificationState;
use crate::{
    config::Config,
    domain::YearMonth,
    utils::{
        clock::{Clock, SystemClock},
        persistence::write_atomic,
    },
};

/// File-backed record of shown, dismissed and muted budget alerts.
///
/// Month-scoped operations always apply to the clock's current month. Every
/// mutation rewrites the whole file; write failures are logged and the
/// in-memory state stays authoritative.
pub struct NotificationStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
    retention_months: u32,
    state: NotificationState,
}

impl fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationStore")
            .field("path", &self.path)
            .field("retention_months", &self.retention_months)
            .field("state", &self.state)
            .finish()
    }
}

impl NotificationStore {
    /// Opens the store at `path` using the system clock.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, Arc::new(SystemClock))
    }

    pub fn open_with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self::open_with(path, clock, Config::default_retention_months())
    }

    /// Opens the store configured by `config`.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::open_with(
            config.resolve_notification_file(),
            clock,
            config.retention_months,
        )
    }

    pub fn open_with(
        path: impl Into<PathBuf>,
        clock: Arc<dyn Clock>,
        retention_months: u32,
    ) -> Self {
        let mut store = Self {
            path: path.into(),
            clock,
            retention_months,
            state: NotificationState::default(),
        };
        store.reload();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn current_month(&self) -> YearMonth {
        YearMonth::from_date(self.clock.today())
    }

    /// Replaces the in-memory state with the file contents, then applies the
    /// retention policy. A missing or unreadable file yields an empty store.
    pub fn reload(&mut self) {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no notification file yet");
                String::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read notification file");
                String::new()
            }
        };

        let parsed = NotificationState::parse(&text);
        self.state = parsed.state;
        debug!(
            path = %self.path.display(),
            months = self.state.months().len(),
            disabled = self.state.disabled.len(),
            "loaded notification state"
        );

        let dropped = self.clean_old_months();
        if dropped == 0 && parsed.malformed_months > 0 {
            self.persist();
        }
    }

    /// Records that the alert for `category_id` was dismissed while its limit
    /// was `current_limit`.
    pub fn dismiss(&mut self, category_id: i64, current_limit: f64) {
        let month = self.current_month();
        self.state
            .dismissed
            .entry(month)
            .or_default()
            .insert(category_id, current_limit);
        self.persist();
    }

    /// True only when dismissed this month at exactly `current_limit`.
    ///
    /// A dismissal recorded at another limit is stale: it is removed here and
    /// stays removed even if the old limit comes back.
    pub fn is_dismissed(&mut self, category_id: i64, current_limit: f64) -> bool {
        let month = self.current_month();
        let Some(entries) = self.state.dismissed.get_mut(&month) else {
            return false;
        };
        match entries.get(&category_id).copied() {
            None => false,
            Some(stored) if stored == current_limit => true,
            Some(stored) => {
                info!(
                    category_id,
                    stored,
                    current_limit,
                    "budget limit changed, dropping stale dismissal"
                );
                entries.remove(&category_id);
                if entries.is_empty() {
                    self.state.dismissed.remove(&month);
                }
                self.persist();
                false
            }
        }
    }

    pub fn mark_notified(&mut self, category_id: i64) {
        let month = self.current_month();
        self.state
            .notified
            .entry(month)
            .or_default()
            .insert(category_id);
        self.persist();
    }

    /// Removes the notified flag; a month left without entries disappears.
    pub fn unmark_notified(&mut self, category_id: i64) {
        let month = self.current_month();
        if let Some(ids) = self.state.notified.get_mut(&month) {
            ids.remove(&category_id);
            if ids.is_empty() {
                self.state.notified.remove(&month);
            }
        }
        self.persist();
    }

    pub fn was_already_notified_this_month(&self, category_id: i64) -> bool {
        self.state
            .notified
            .get(&self.current_month())
            .is_some_and(|ids| ids.contains(&category_id))
    }

    /// Mutes alerts for `category_id` in every month.
    pub fn disable_category(&mut self, category_id: i64) {
        self.state.disabled.insert(category_id);
        self.persist();
    }

    pub fn enable_category(&mut self, category_id: i64) {
        self.state.disabled.remove(&category_id);
        self.persist();
    }

    pub fn is_disabled(&self, category_id: i64) -> bool {
        self.state.disabled.contains(&category_id)
    }

    /// Drops months strictly older than `current month - retention_months`
    /// and rewrites the file when anything went. Returns the number of month
    /// groups removed.
    pub fn clean_old_months(&mut self) -> usize {
        let cutoff = self.current_month().minus_months(self.retention_months);
        let dropped = self.state.retain_from(cutoff);
        if dropped > 0 {
            info!(%cutoff, dropped, "pruned old notification months");
            self.persist();
        }
        dropped
    }

    fn persist(&self) {
        match write_atomic(&self.path, &self.state.render()) {
            Ok(()) => debug!(path = %self.path.display(), "saved notification state"),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to save notification state");
            }
        }
    }
}
