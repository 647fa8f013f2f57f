use super::txn;
use crate::core::services::PeriodService;

#[test]
fn buckets_partition_month_with_short_tail() {
    let buckets = PeriodService::aggregate_by_period(&[], 7, 31);

    assert_eq!(buckets.len(), 5);
    let ranges: Vec<(i32, i32)> = buckets.iter().map(|b| (b.start_day, b.end_day)).collect();
    assert_eq!(ranges, vec![(1, 7), (8, 14), (15, 21), (22, 28), (29, 31)]);
    for (i, bucket) in buckets.iter().enumerate() {
        assert_eq!(bucket.index, i);
        assert!(bucket.len_days() <= 7);
    }
}

#[test]
fn non_positive_sizes_yield_no_buckets() {
    let transactions = vec![txn("Income", 10.0, "Salary", 1)];
    assert!(PeriodService::aggregate_by_period(&transactions, 0, 30).is_empty());
    assert!(PeriodService::aggregate_by_period(&transactions, 7, 0).is_empty());
    assert!(PeriodService::aggregate_by_period(&transactions, -3, 30).is_empty());
    assert!(PeriodService::daily_balances(&transactions, 0).is_empty());
}

#[test]
fn width_beyond_month_end_yields_single_bucket() {
    let transactions = vec![txn("Income", 10.0, "Salary", 1)];

    for period_days in [31, i32::MAX] {
        let buckets = PeriodService::aggregate_by_period(&transactions, period_days, 30);

        assert_eq!(buckets.len(), 1);
        assert_eq!((buckets[0].start_day, buckets[0].end_day), (1, 30));
        assert_eq!(buckets[0].income, 10.0);
        assert_eq!(buckets[0].balance, 10.0);
    }
}

#[test]
fn widest_month_with_widest_period_does_not_overflow() {
    let transactions = vec![txn("Expense", 4.0, "Rent", i32::MAX)];

    let buckets = PeriodService::aggregate_by_period(&transactions, i32::MAX, i32::MAX);

    assert_eq!(buckets.len(), 1);
    assert_eq!((buckets[0].start_day, buckets[0].end_day), (1, i32::MAX));
    assert_eq!(buckets[0].expenses, 4.0);
}

#[test]
fn transactions_land_in_their_bucket_and_out_of_range_days_drop() {
    let transactions = vec![
        txn("Income", 1000.0, "Salary", 1),
        txn("Expense", 200.0, "Rent", 7),
        txn("Expense", 50.0, "Food", 18),
        txn("Income", 30.0, "Gifts", 30),
        txn("Expense", 999.0, "Broken", 0),
        txn("Expense", 999.0, "Broken", 31),
        txn("Transfer", 500.0, "Savings", 10),
    ];

    let buckets = PeriodService::aggregate_by_period(&transactions, 10, 30);

    assert_eq!(buckets.len(), 3);
    assert_eq!((buckets[0].income, buckets[0].expenses), (1000.0, 200.0));
    assert_eq!(buckets[0].balance, 800.0);
    assert_eq!((buckets[1].income, buckets[1].expenses), (0.0, 50.0));
    assert_eq!((buckets[2].income, buckets[2].expenses), (30.0, 0.0));
    assert!(buckets[2].contains(30));
}

#[test]
fn single_day_buckets_match_total_income() {
    let transactions = vec![
        txn("Income", 10.0, "A", 3),
        txn("Income", 20.0, "B", 3),
        txn("Income", 5.0, "C", 28),
        txn("Expense", 7.0, "D", 12),
    ];

    let buckets = PeriodService::aggregate_by_period(&transactions, 1, 28);

    assert_eq!(buckets.len(), 28);
    let income: f64 = buckets.iter().map(|b| b.income).sum();
    assert_eq!(income, 35.0);
    assert_eq!(buckets[2].income, 30.0);
}

#[test]
fn daily_and_cumulative_balances_follow_prefix_sum() {
    let transactions = vec![
        txn("Income", 100.0, "Salary", 1),
        txn("Expense", 30.0, "Food", 1),
        txn("Expense", 20.0, "Food", 3),
        txn("Income", 5.0, "Gifts", 5),
        txn("Expense", 1.0, "Ignored", 6),
    ];

    let daily = PeriodService::daily_balances(&transactions, 5);
    assert_eq!(daily, vec![70.0, 0.0, -20.0, 0.0, 5.0]);

    let cumulative = PeriodService::cumulative_balance(&daily);
    assert_eq!(cumulative.len(), daily.len());
    assert_eq!(cumulative[0], daily[0]);
    for i in 1..cumulative.len() {
        assert_eq!(cumulative[i], cumulative[i - 1] + daily[i]);
    }
    assert_eq!(cumulative, vec![70.0, 70.0, 50.0, 50.0, 55.0]);
}

#[test]
fn cumulative_of_empty_is_empty() {
    assert!(PeriodService::cumulative_balance(&[]).is_empty());
}

#[test]
fn days_with_movements_counts_distinct_classified_days() {
    let transactions = vec![
        txn("Income", 1.0, "A", 2),
        txn("Expense", 1.0, "B", 2),
        txn("Expense", 1.0, "B", 9),
        txn("Transfer", 1.0, "C", 11),
        txn("Expense", 1.0, "B", 40),
    ];
    assert_eq!(PeriodService::days_with_movements(&transactions, 30), 2);
}
