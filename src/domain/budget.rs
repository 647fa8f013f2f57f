use serde::{Deserialize, Serialize};

use crate::core::services::BudgetService;

/// A monthly spending limit for one category, already annotated with the
/// amount spent so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub budget_id: i64,
    pub category_id: i64,
    pub user_id: i64,
    pub month: u32,
    pub year: i32,
    pub limit_amount: f64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub spent_amount: f64,
}

impl Budget {
    /// Fraction of the limit already spent; `0` when no limit is set.
    pub fn progress(&self) -> f64 {
        if self.limit_amount == 0.0 {
            0.0
        } else {
            self.spent_amount / self.limit_amount
        }
    }

    pub fn remaining(&self) -> f64 {
        self.limit_amount - self.spent_amount
    }

    pub fn is_exceeded(&self) -> bool {
        BudgetService::is_exceeded(Some(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(limit: f64, spent: f64) -> Budget {
        Budget {
            budget_id: 1,
            category_id: 2,
            user_id: 1,
            month: 3,
            year: 2024,
            limit_amount: limit,
            category_name: "Groceries".into(),
            spent_amount: spent,
        }
    }

    #[test]
    fn progress_is_zero_without_limit() {
        assert_eq!(budget(0.0, 50.0).progress(), 0.0);
        assert_eq!(budget(200.0, 50.0).progress(), 0.25);
    }

    #[test]
    fn remaining_goes_negative_when_overspent() {
        assert_eq!(budget(100.0, 130.0).remaining(), -30.0);
    }
}
