use std::collections::BTreeSet;

use crate::domain::{PeriodAggregate, Transaction};

pub struct PeriodService;

impl PeriodService {
    /// Groups movements into consecutive `period_days`-wide buckets covering
    /// `[1, days_in_month]`. The last bucket may be shorter.
    pub fn aggregate_by_period(
        transactions: &[Transaction],
        period_days: i32,
        days_in_month: i32,
    ) -> Vec<PeriodAggregate> {
        if period_days <= 0 || days_in_month <= 0 {
            return Vec::new();
        }

        // A width past the month end is one whole-month bucket.
        let period_days = period_days.min(days_in_month);
        let bucket_count = (days_in_month - 1) / period_days + 1;
        let mut buckets: Vec<PeriodAggregate> = (0..bucket_count)
            .map(|i| {
                let start = i * period_days + 1;
                let end = start.saturating_add(period_days - 1).min(days_in_month);
                PeriodAggregate::empty(i as usize, start, end)
            })
            .collect();

        for txn in transactions.iter().filter(|t| t.falls_within(days_in_month)) {
            let bucket = &mut buckets[((txn.day_of_month - 1) / period_days) as usize];
            if txn.is_income() {
                bucket.income += txn.amount;
            } else if txn.is_expense() {
                bucket.expenses += txn.amount;
            }
        }
        for bucket in &mut buckets {
            bucket.balance = bucket.income - bucket.expenses;
        }
        buckets
    }

    /// Net balance per day; index `0` is day 1.
    pub fn daily_balances(transactions: &[Transaction], days_in_month: i32) -> Vec<f64> {
        if days_in_month <= 0 {
            return Vec::new();
        }
        let mut daily = vec![0.0; days_in_month as usize];
        for txn in transactions.iter().filter(|t| t.falls_within(days_in_month)) {
            daily[(txn.day_of_month - 1) as usize] += txn.signed_amount();
        }
        daily
    }

    /// Running sum of `daily`, same length.
    pub fn cumulative_balance(daily: &[f64]) -> Vec<f64> {
        daily
            .iter()
            .scan(0.0, |running, value| {
                *running += value;
                Some(*running)
            })
            .collect()
    }

    /// Distinct in-range days carrying at least one income or expense.
    pub fn days_with_movements(transactions: &[Transaction], days_in_month: i32) -> usize {
        transactions
            .iter()
            .filter(|t| t.falls_within(days_in_month) && (t.is_income() || t.is_expense()))
            .map(|t| t.day_of_month)
            .collect::<BTreeSet<_>>()
            .len()
    }
}
