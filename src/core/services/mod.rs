//! Stateless computations over caller-supplied rows.
//!
//! None of these services fail: malformed input produces zero-valued or
//! insufficient results.

pub mod alert_service;
pub mod budget_service;
pub mod forecast_service;
pub mod period_service;
pub mod summary_service;

pub use alert_service::{AlertService, BudgetAlert};
pub use budget_service::{BudgetService, RESERVED_INCOME_CATEGORY_ID};
pub use forecast_service::ForecastService;
pub use period_service::PeriodService;
pub use summary_service::SummaryService;

#[cfg(test)]
mod tests;
