use crate::domain::Budget;

/// Category reserved for salary/income; its budgets never count as exceeded.
pub const RESERVED_INCOME_CATEGORY_ID: i64 = 6;

pub struct BudgetService;

impl BudgetService {
    /// The single exceed predicate shared by badges and notifications.
    ///
    /// Spending exactly the limit is not an exceed, and a zero or negative
    /// limit can never be exceeded.
    pub fn is_exceeded(budget: Option<&Budget>) -> bool {
        let Some(budget) = budget else {
            return false;
        };
        if budget.category_id == RESERVED_INCOME_CATEGORY_ID {
            return false;
        }
        if budget.limit_amount <= 0.0 {
            return false;
        }
        budget.spent_amount > budget.limit_amount
    }

    /// Exceeded budgets, in input order.
    pub fn exceeded(budgets: &[Budget]) -> Vec<&Budget> {
        budgets
            .iter()
            .filter(|budget| Self::is_exceeded(Some(budget)))
            .collect()
    }
}
