//! Decides which exceeded budgets should surface to the user.

use serde::Serialize;
use tracing::debug;

use super::BudgetService;
use crate::{domain::Budget, notifications::NotificationStore};

/// An exceeded budget that still needs the user's attention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category_id: i64,
    pub category_name: String,
    pub limit_amount: f64,
    pub spent_amount: f64,
}

impl BudgetAlert {
    fn from_budget(budget: &Budget) -> Self {
        Self {
            category_id: budget.category_id,
            category_name: budget.category_name.clone(),
            limit_amount: budget.limit_amount,
            spent_amount: budget.spent_amount,
        }
    }

    pub fn overspend(&self) -> f64 {
        self.spent_amount - self.limit_amount
    }
}

pub struct AlertService;

impl AlertService {
    /// Exceeded budgets whose category is neither muted nor dismissed at its
    /// current limit. Checking a dismissal may drop it if the limit changed.
    pub fn pending_alerts(budgets: &[Budget], store: &mut NotificationStore) -> Vec<BudgetAlert> {
        let mut alerts = Vec::new();
        for budget in BudgetService::exceeded(budgets) {
            if store.is_disabled(budget.category_id) {
                continue;
            }
            if store.is_dismissed(budget.category_id, budget.limit_amount) {
                continue;
            }
            alerts.push(BudgetAlert::from_budget(budget));
        }
        alerts
    }

    pub fn dismiss_alert(alert: &BudgetAlert, store: &mut NotificationStore) {
        store.dismiss(alert.category_id, alert.limit_amount);
    }

    /// True when some pending alert was not announced yet this month. All
    /// pending categories are marked notified as a side effect.
    pub fn take_generic_notice(budgets: &[Budget], store: &mut NotificationStore) -> bool {
        let mut fresh = false;
        for alert in Self::pending_alerts(budgets, store) {
            if !store.was_already_notified_this_month(alert.category_id) {
                store.mark_notified(alert.category_id);
                fresh = true;
            }
        }
        debug!(fresh, "evaluated generic budget notice");
        fresh
    }
}
