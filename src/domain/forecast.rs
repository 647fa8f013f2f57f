use std::fmt;

use serde::{Deserialize, Serialize};

/// Health of the projected month-end balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastStatus {
    Stable,
    Warning,
    Critical,
}

impl fmt::Display for ForecastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ForecastStatus::Stable => "stable",
            ForecastStatus::Warning => "warning",
            ForecastStatus::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Why a forecast could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InsufficientReason {
    TooFewDays { required: u32, found: i32 },
    InvalidCurrentDay(i32),
    InvalidDaysInMonth(i32),
    NegativeValues,
}

impl fmt::Display for InsufficientReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsufficientReason::TooFewDays { required, found } => write!(
                f,
                "need at least {required} days of data (found {found})"
            ),
            InsufficientReason::InvalidCurrentDay(day) => {
                write!(f, "invalid current day: {day}")
            }
            InsufficientReason::InvalidDaysInMonth(days) => {
                write!(f, "invalid days in month: {days}")
            }
            InsufficientReason::NegativeValues => {
                f.write_str("invalid values: totals cannot be negative")
            }
        }
    }
}

/// Month-end projection built from partial-month totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub current_day: i32,
    pub remaining_days: i32,
    pub daily_expense_avg: f64,
    pub daily_income_avg: f64,
    pub projected_expenses: f64,
    pub projected_income: f64,
    pub estimated_balance: f64,
    pub status: ForecastStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForecastResult {
    Insufficient { reason: InsufficientReason },
    Valid(Forecast),
}

impl ForecastResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ForecastResult::Valid(_))
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        match self {
            ForecastResult::Valid(forecast) => Some(forecast),
            ForecastResult::Insufficient { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&InsufficientReason> {
        match self {
            ForecastResult::Insufficient { reason } => Some(reason),
            ForecastResult::Valid(_) => None,
        }
    }
}
