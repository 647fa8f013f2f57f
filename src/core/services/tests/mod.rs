mod forecast_service_tests;
mod period_service_tests;

use crate::domain::{Budget, Transaction};

pub(super) fn txn(label: &str, amount: f64, category: &str, day: i32) -> Transaction {
    Transaction::from_label(label, amount, category, day)
}

pub(super) fn budget(category_id: i64, limit: f64, spent: f64) -> Budget {
    Budget {
        budget_id: category_id * 10,
        category_id,
        user_id: 1,
        month: 3,
        year: 2024,
        limit_amount: limit,
        category_name: format!("Category {category_id}"),
        spent_amount: spent,
    }
}
