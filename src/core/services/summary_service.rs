use tracing::trace;

use crate::domain::{MonthlySummary, Transaction};

pub struct SummaryService;

impl SummaryService {
    /// Totals a month of movements by direction and category.
    ///
    /// Unclassified movements contribute to `transaction_count` only.
    pub fn summarize(transactions: &[Transaction]) -> MonthlySummary {
        let mut summary = MonthlySummary {
            transaction_count: transactions.len(),
            ..MonthlySummary::default()
        };

        for txn in transactions {
            if txn.is_income() {
                summary.total_income += txn.amount;
                *summary
                    .income_by_category
                    .entry(txn.category.clone())
                    .or_insert(0.0) += txn.amount;
            } else if txn.is_expense() {
                summary.total_expenses += txn.amount;
                *summary
                    .expenses_by_category
                    .entry(txn.category.clone())
                    .or_insert(0.0) += txn.amount;
            }
        }
        summary.balance = summary.total_income - summary.total_expenses;

        trace!(
            count = summary.transaction_count,
            income = summary.total_income,
            expenses = summary.total_expenses,
            "summarized month"
        );
        summary
    }
}
