use std::collections::BTreeMap;

use serde::Serialize;

/// Totals and per-category breakdowns for one month of movements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub expenses_by_category: BTreeMap<String, f64>,
    pub income_by_category: BTreeMap<String, f64>,
    /// Length of the input list, classified or not.
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// A zero balance counts as positive.
    pub fn is_positive(&self) -> bool {
        self.balance >= 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.balance < 0.0
    }

    /// Share of income left after expenses; `0` when there is no income.
    pub fn savings_rate(&self) -> f64 {
        if self.total_income <= 0.0 {
            0.0
        } else {
            self.balance / self.total_income
        }
    }

    pub fn expense_share(&self, category: &str) -> f64 {
        if self.total_expenses <= 0.0 {
            return 0.0;
        }
        self.expenses_by_category
            .get(category)
            .map(|amount| amount / self.total_expenses)
            .unwrap_or(0.0)
    }

    /// Category with the largest expense total. Ties resolve to the
    /// alphabetically first name.
    pub fn top_expense_category(&self) -> Option<(&str, f64)> {
        self.expenses_by_category
            .iter()
            .fold(None, |best: Option<(&str, f64)>, (name, amount)| match best {
                Some((_, top)) if top >= *amount => best,
                _ => Some((name.as_str(), *amount)),
            })
    }
}

/// Income and expenses falling inside one contiguous day range of a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAggregate {
    pub index: usize,
    pub start_day: i32,
    pub end_day: i32,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl PeriodAggregate {
    pub(crate) fn empty(index: usize, start_day: i32, end_day: i32) -> Self {
        Self {
            index,
            start_day,
            end_day,
            income: 0.0,
            expenses: 0.0,
            balance: 0.0,
        }
    }

    pub fn contains(&self, day: i32) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }

    pub fn len_days(&self) -> i32 {
        self.end_day - self.start_day + 1
    }

    /// Short label such as `1-7` for chart axes.
    pub fn label(&self) -> String {
        if self.start_day == self.end_day {
            self.start_day.to_string()
        } else {
            format!("{}-{}", self.start_day, self.end_day)
        }
    }
}
