use std::{env, path::PathBuf, process::ExitCode, sync::Arc};

use finance_core::{
    config::{Config, ConfigManager},
    core::services::{AlertService, ForecastService, PeriodService, SummaryService},
    domain::{ForecastResult, MonthSnapshot},
    errors::FinanceError,
    notifications::NotificationStore,
    utils::clock::SystemClock,
};

const USAGE: &str = "\
usage: finance_core_cli <command> <snapshot.json> [options]

commands:
  summary                 totals and per-category breakdown
  periods [--days N]      income and expenses per day range
  balances                daily and cumulative balance
  forecast                projected month-end balance
  alerts [--store PATH]   exceeded budgets not yet dismissed";

enum Command {
    Summary,
    Periods,
    Balances,
    Forecast,
    Alerts,
}

impl Command {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "summary" => Some(Command::Summary),
            "periods" => Some(Command::Periods),
            "balances" => Some(Command::Balances),
            "forecast" => Some(Command::Forecast),
            "alerts" => Some(Command::Alerts),
            _ => None,
        }
    }
}

struct Invocation {
    command: Command,
    snapshot: PathBuf,
    period_days: Option<i32>,
    store: Option<PathBuf>,
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Invocation>, String> {
    let command = args.next().ok_or("missing command")?;
    if command == "help" || command == "--help" {
        return Ok(None);
    }
    let command =
        Command::parse(&command).ok_or_else(|| format!("unknown command `{command}`"))?;
    let snapshot = args.next().ok_or("missing snapshot path")?.into();
    let mut invocation = Invocation {
        command,
        snapshot,
        period_days: None,
        store: None,
    };
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--days" => {
                let days = value
                    .parse()
                    .map_err(|_| format!("invalid --days value `{value}`"))?;
                invocation.period_days = Some(days);
            }
            "--store" => invocation.store = Some(value.into()),
            other => return Err(format!("unknown option `{other}`")),
        }
    }
    Ok(Some(invocation))
}

fn run(invocation: Invocation, config: Config) -> Result<(), FinanceError> {
    let snapshot = MonthSnapshot::load(&invocation.snapshot)?;
    let days_in_month = snapshot.days_in_month();

    match invocation.command {
        Command::Summary => {
            let summary = SummaryService::summarize(&snapshot.transactions);
            println!("Month: {}", snapshot.year_month()?);
            println!("Transactions: {}", summary.transaction_count);
            println!("Income: {:.2}", summary.total_income);
            println!("Expenses: {:.2}", summary.total_expenses);
            println!("Balance: {:.2}", summary.balance);
            println!("Savings rate: {:.1}%", summary.savings_rate() * 100.0);
            for (category, amount) in &summary.income_by_category {
                println!("  + {category}: {amount:.2}");
            }
            for (category, amount) in &summary.expenses_by_category {
                println!("  - {category}: {amount:.2}");
            }
        }
        Command::Periods => {
            let period_days = invocation
                .period_days
                .unwrap_or(config.default_period_days);
            let buckets = PeriodService::aggregate_by_period(
                &snapshot.transactions,
                period_days,
                days_in_month,
            );
            for bucket in buckets {
                println!(
                    "Days {}: income {:.2}, expenses {:.2}, balance {:.2}",
                    bucket.label(),
                    bucket.income,
                    bucket.expenses,
                    bucket.balance
                );
            }
        }
        Command::Balances => {
            let daily = PeriodService::daily_balances(&snapshot.transactions, days_in_month);
            let cumulative = PeriodService::cumulative_balance(&daily);
            for (day, (value, running)) in daily.iter().zip(&cumulative).enumerate() {
                println!("Day {:>2}: {:>10.2} {:>10.2}", day + 1, value, running);
            }
        }
        Command::Forecast => {
            let current_day = snapshot.current_day();
            let elapsed: Vec<_> = snapshot
                .transactions
                .iter()
                .filter(|txn| txn.day_of_month <= current_day)
                .cloned()
                .collect();
            let summary = SummaryService::summarize(&elapsed);
            let days_with_movements = PeriodService::days_with_movements(&elapsed, days_in_month);
            let result = ForecastService::project_with(
                &config.forecast,
                summary.total_income,
                summary.total_expenses,
                days_with_movements as i32,
                current_day,
                days_in_month,
            );
            match result {
                ForecastResult::Insufficient { reason } => {
                    println!("Forecast unavailable: {reason}");
                }
                ForecastResult::Valid(forecast) => {
                    println!("Status: {}", forecast.status);
                    println!("Remaining days: {}", forecast.remaining_days);
                    println!("Projected income: {:.2}", forecast.projected_income);
                    println!("Projected expenses: {:.2}", forecast.projected_expenses);
                    println!("Estimated balance: {:.2}", forecast.estimated_balance);
                }
            }
        }
        Command::Alerts => {
            let path = invocation
                .store
                .unwrap_or_else(|| config.resolve_notification_file());
            let mut store =
                NotificationStore::open_with(path, Arc::new(SystemClock), config.retention_months);
            let alerts = AlertService::pending_alerts(&snapshot.budgets, &mut store);
            if alerts.is_empty() {
                println!("No budget alerts.");
            }
            for alert in alerts {
                println!(
                    "{} (category {}): spent {:.2} of {:.2}, over by {:.2}",
                    alert.category_name,
                    alert.category_id,
                    alert.spent_amount,
                    alert.limit_amount,
                    alert.overspend()
                );
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    finance_core::init();

    let invocation = match parse_args(env::args().skip(1)) {
        Ok(Some(invocation)) => invocation,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let config = match ConfigManager::new_default().load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "falling back to default configuration");
            Config::default()
        }
    };

    match run(invocation, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
