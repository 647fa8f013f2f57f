//! Month-end extrapolation from partial-month totals.

use tracing::debug;

use crate::{
    config::ForecastSettings,
    domain::{Forecast, ForecastResult, ForecastStatus, InsufficientReason},
};

const MAX_DAYS_IN_MONTH: i32 = 31;

pub struct ForecastService;

impl ForecastService {
    /// Projects month-end totals with the default thresholds.
    pub fn project(
        total_income: f64,
        total_expenses: f64,
        days_with_movements: i32,
        current_day: i32,
        days_in_month: i32,
    ) -> ForecastResult {
        Self::project_with(
            &ForecastSettings::default(),
            total_income,
            total_expenses,
            days_with_movements,
            current_day,
            days_in_month,
        )
    }

    /// Projects month-end totals. Averages are taken over `current_day`, not
    /// over the number of days with movements.
    pub fn project_with(
        settings: &ForecastSettings,
        total_income: f64,
        total_expenses: f64,
        days_with_movements: i32,
        current_day: i32,
        days_in_month: i32,
    ) -> ForecastResult {
        if let Some(reason) = Self::validate(
            settings,
            total_income,
            total_expenses,
            days_with_movements,
            current_day,
            days_in_month,
        ) {
            debug!(%reason, "forecast not available");
            return ForecastResult::Insufficient { reason };
        }

        let remaining_days = days_in_month - current_day;
        let daily_income_avg = daily_average(total_income, current_day);
        let daily_expense_avg = daily_average(total_expenses, current_day);
        let projected_income = projected_total(total_income, daily_income_avg, remaining_days);
        let projected_expenses =
            projected_total(total_expenses, daily_expense_avg, remaining_days);
        let estimated_balance = projected_income - projected_expenses;

        ForecastResult::Valid(Forecast {
            current_day,
            remaining_days,
            daily_expense_avg,
            daily_income_avg,
            projected_expenses,
            projected_income,
            estimated_balance,
            status: Self::classify(settings, estimated_balance),
        })
    }

    /// Step function over the projected balance; both bounds fall in `Warning`.
    pub fn classify(settings: &ForecastSettings, estimated_balance: f64) -> ForecastStatus {
        if estimated_balance > settings.stable_above {
            ForecastStatus::Stable
        } else if estimated_balance >= settings.critical_below {
            ForecastStatus::Warning
        } else {
            ForecastStatus::Critical
        }
    }

    fn validate(
        settings: &ForecastSettings,
        total_income: f64,
        total_expenses: f64,
        days_with_movements: i32,
        current_day: i32,
        days_in_month: i32,
    ) -> Option<InsufficientReason> {
        if days_with_movements < settings.min_days_with_movements as i32 {
            return Some(InsufficientReason::TooFewDays {
                required: settings.min_days_with_movements,
                found: days_with_movements,
            });
        }
        if current_day <= 0 || current_day > days_in_month {
            return Some(InsufficientReason::InvalidCurrentDay(current_day));
        }
        if days_in_month <= 0 || days_in_month > MAX_DAYS_IN_MONTH {
            return Some(InsufficientReason::InvalidDaysInMonth(days_in_month));
        }
        if total_income < 0.0 || total_expenses < 0.0 {
            return Some(InsufficientReason::NegativeValues);
        }
        None
    }
}

fn daily_average(total: f64, days: i32) -> f64 {
    if days <= 0 {
        0.0
    } else {
        total / days as f64
    }
}

fn projected_total(current: f64, daily_avg: f64, remaining_days: i32) -> f64 {
    if remaining_days < 0 {
        current
    } else {
        current + daily_avg * remaining_days as f64
    }
}
