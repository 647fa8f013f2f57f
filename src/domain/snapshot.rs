use std::{fs, path::Path};

use serde::Deserialize;

use super::{Budget, Transaction, YearMonth};
use crate::errors::FinanceError;

/// One month of rows as exported by the data layer.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthSnapshot {
    pub year: i32,
    pub month: u32,
    /// Day the data was captured; a closed month when absent.
    #[serde(default)]
    pub current_day: Option<i32>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl MonthSnapshot {
    pub fn load(path: &Path) -> Result<Self, FinanceError> {
        let data = fs::read_to_string(path)?;
        let snapshot: MonthSnapshot = serde_json::from_str(&data)?;
        snapshot.year_month()?;
        Ok(snapshot)
    }

    pub fn year_month(&self) -> Result<YearMonth, FinanceError> {
        YearMonth::new(self.year, self.month).ok_or_else(|| {
            FinanceError::InvalidSnapshot(format!("month {} is out of range", self.month))
        })
    }

    pub fn days_in_month(&self) -> i32 {
        self.year_month()
            .map(|ym| ym.days_in_month() as i32)
            .unwrap_or(0)
    }

    pub fn current_day(&self) -> i32 {
        self.current_day.unwrap_or_else(|| self.days_in_month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_snapshot_with_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("march.json");
        fs::write(
            &path,
            r#"{ "year": 2024, "month": 2,
                 "transactions": [ { "kind": "Entrata", "amount": 10, "category": "Gift", "day": 3 } ] }"#,
        )
        .unwrap();

        let snapshot = MonthSnapshot::load(&path).expect("load snapshot");
        assert_eq!(snapshot.days_in_month(), 29);
        assert_eq!(snapshot.current_day(), 29);
        assert!(snapshot.transactions[0].is_income());
        assert!(snapshot.budgets.is_empty());
    }

    #[test]
    fn rejects_out_of_range_month() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "year": 2024, "month": 13 }"#).unwrap();
        let err = MonthSnapshot::load(&path).expect_err("invalid month");
        assert!(matches!(err, FinanceError::InvalidSnapshot(_)));
    }
}
