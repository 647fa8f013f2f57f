use serde::{de::Deserializer, Deserialize, Serialize, Serializer};
use std::fmt;

const INCOME_LABELS: [&str; 2] = ["entrata", "income"];
const EXPENSE_LABELS: [&str; 2] = ["uscita", "expense"];

/// Direction of a movement, derived from its locale-specific label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    Income,
    Expense,
    Unclassified,
}

impl MovementKind {
    /// Classifies a label case-insensitively. `Entrata`/`Income` map to income,
    /// `Uscita`/`Expense` to expense; anything else stays unclassified.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if INCOME_LABELS.contains(&normalized.as_str()) {
            MovementKind::Income
        } else if EXPENSE_LABELS.contains(&normalized.as_str()) {
            MovementKind::Expense
        } else {
            MovementKind::Unclassified
        }
    }

    pub fn is_income(self) -> bool {
        matches!(self, MovementKind::Income)
    }

    pub fn is_expense(self) -> bool {
        matches!(self, MovementKind::Expense)
    }
}

impl Default for MovementKind {
    fn default() -> Self {
        MovementKind::Unclassified
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MovementKind::Income => "Income",
            MovementKind::Expense => "Expense",
            MovementKind::Unclassified => "Unclassified",
        };
        f.write_str(label)
    }
}

impl Serialize for MovementKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MovementKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .map(MovementKind::from_label)
            .unwrap_or(MovementKind::Unclassified))
    }
}

/// A single dated movement within one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub kind: MovementKind,
    pub amount: f64,
    pub category: String,
    #[serde(alias = "day")]
    pub day_of_month: i32,
}

impl Transaction {
    pub fn new(kind: MovementKind, amount: f64, category: impl Into<String>, day_of_month: i32) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            day_of_month,
        }
    }

    /// Builds a transaction from a raw row whose type column carries a label.
    pub fn from_label(
        label: &str,
        amount: f64,
        category: impl Into<String>,
        day_of_month: i32,
    ) -> Self {
        Self::new(MovementKind::from_label(label), amount, category, day_of_month)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Signed contribution to a balance: income adds, expense subtracts.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            MovementKind::Income => self.amount,
            MovementKind::Expense => -self.amount,
            MovementKind::Unclassified => 0.0,
        }
    }

    pub fn falls_within(&self, days_in_month: i32) -> bool {
        (1..=days_in_month).contains(&self.day_of_month)
    }
}
