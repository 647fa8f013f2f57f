use crate::config::ForecastSettings;
use crate::core::services::ForecastService;
use crate::domain::{ForecastResult, ForecastStatus, InsufficientReason};

#[test]
fn projects_mid_month_totals() {
    let result = ForecastService::project(1500.0, 400.0, 5, 10, 30);
    let forecast = result.forecast().expect("valid forecast");

    assert_eq!(forecast.current_day, 10);
    assert_eq!(forecast.remaining_days, 20);
    assert_eq!(forecast.daily_income_avg, 150.0);
    assert_eq!(forecast.daily_expense_avg, 40.0);
    assert_eq!(forecast.projected_income, 4500.0);
    assert_eq!(forecast.projected_expenses, 1200.0);
    assert_eq!(forecast.estimated_balance, 3300.0);
    assert_eq!(forecast.status, ForecastStatus::Stable);
}

#[test]
fn too_few_days_is_insufficient() {
    let result = ForecastService::project(1500.0, 400.0, 2, 10, 30);
    assert_eq!(
        result,
        ForecastResult::Insufficient {
            reason: InsufficientReason::TooFewDays {
                required: 3,
                found: 2
            }
        }
    );
    assert!(result.reason().unwrap().to_string().contains("at least 3 days"));
}

#[test]
fn first_failing_check_wins() {
    let result = ForecastService::project(-1.0, 0.0, 1, 0, 40);
    assert!(matches!(
        result.reason(),
        Some(InsufficientReason::TooFewDays { .. })
    ));

    let result = ForecastService::project(-1.0, 0.0, 3, 0, 40);
    assert_eq!(result.reason(), Some(&InsufficientReason::InvalidCurrentDay(0)));

    let result = ForecastService::project(-1.0, 0.0, 3, 35, 40);
    assert_eq!(result.reason(), Some(&InsufficientReason::InvalidDaysInMonth(40)));
}

#[test]
fn current_day_past_month_end_is_insufficient() {
    let result = ForecastService::project(100.0, 50.0, 3, 31, 30);
    assert_eq!(result.reason(), Some(&InsufficientReason::InvalidCurrentDay(31)));
}

#[test]
fn negative_totals_are_insufficient() {
    for (income, expenses) in [(-10.0, 5.0), (10.0, -5.0)] {
        let result = ForecastService::project(income, expenses, 5, 10, 30);
        assert!(!result.is_valid());
        assert!(result.reason().unwrap().to_string().contains("values"));
    }
}

#[test]
fn last_day_of_month_projects_current_totals() {
    let result = ForecastService::project(300.0, 450.0, 10, 30, 30);
    let forecast = result.forecast().expect("valid forecast");
    assert_eq!(forecast.remaining_days, 0);
    assert_eq!(forecast.projected_income, 300.0);
    assert_eq!(forecast.projected_expenses, 450.0);
    assert_eq!(forecast.estimated_balance, -150.0);
    assert_eq!(forecast.status, ForecastStatus::Critical);
}

#[test]
fn status_boundaries_are_inclusive_for_warning() {
    let settings = ForecastSettings::default();
    assert_eq!(ForecastService::classify(&settings, 200.01), ForecastStatus::Stable);
    assert_eq!(ForecastService::classify(&settings, 200.0), ForecastStatus::Warning);
    assert_eq!(ForecastService::classify(&settings, 0.0), ForecastStatus::Warning);
    assert_eq!(ForecastService::classify(&settings, -100.0), ForecastStatus::Warning);
    assert_eq!(ForecastService::classify(&settings, -100.01), ForecastStatus::Critical);
}

#[test]
fn custom_settings_shift_thresholds() {
    let settings = ForecastSettings {
        min_days_with_movements: 1,
        stable_above: 1000.0,
        critical_below: 0.0,
    };
    let result = ForecastService::project_with(&settings, 600.0, 300.0, 1, 15, 30);
    let forecast = result.forecast().expect("valid forecast");
    assert_eq!(forecast.estimated_balance, 600.0);
    assert_eq!(forecast.status, ForecastStatus::Warning);
}
