#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use finance_core::{
    domain::{Budget, Transaction},
    notifications::NotificationStore,
    utils::clock::{Clock, FixedClock},
};
use tempfile::TempDir;

pub fn clock_on(year: i32, month: u32, day: u32) -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
    ))
}

pub fn prefs_path(dir: &TempDir) -> PathBuf {
    dir.path().join("budget_notifications.json")
}

/// Opens a store in `dir` as seen on the given day.
pub fn store_on(dir: &TempDir, year: i32, month: u32, day: u32) -> NotificationStore {
    NotificationStore::open_with_clock(prefs_path(dir), clock_on(year, month, day))
}

pub fn txn(label: &str, amount: f64, category: &str, day: i32) -> Transaction {
    Transaction::from_label(label, amount, category, day)
}

pub fn budget(category_id: i64, limit: f64, spent: f64) -> Budget {
    Budget {
        budget_id: category_id,
        category_id,
        user_id: 7,
        month: 3,
        year: 2024,
        limit_amount: limit,
        category_name: format!("Category {category_id}"),
        spent_amount: spent,
    }
}
