//! Plain data records exchanged between the core and its callers.

pub mod budget;
pub mod forecast;
pub mod snapshot;
pub mod summary;
pub mod transaction;
pub mod year_month;

pub use budget::Budget;
pub use forecast::{Forecast, ForecastResult, ForecastStatus, InsufficientReason};
pub use snapshot::MonthSnapshot;
pub use summary::{MonthlySummary, PeriodAggregate};
pub use transaction::{MovementKind, Transaction};
pub use year_month::YearMonth;
