// 💸 Expense Entity - Recurring cost records
//
// Every expense carries a billing frequency; all reporting happens on the
// annualized amount (monthly ×12, quarterly ×4, annual ×1).

use serde::{Deserialize, Serialize};

// ============================================================================
// EXPENSE FREQUENCY
// ============================================================================

/// How often an expense recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseFrequency {
    Monthly,
    Quarterly,
    Annually,
}

impl ExpenseFrequency {
    /// All frequencies, in form-select order.
    pub const ALL: [ExpenseFrequency; 3] = [
        ExpenseFrequency::Monthly,
        ExpenseFrequency::Quarterly,
        ExpenseFrequency::Annually,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseFrequency::Monthly => "Monthly",
            ExpenseFrequency::Quarterly => "Quarterly",
            ExpenseFrequency::Annually => "Annually",
        }
    }

    /// Multiplier that converts one billing amount into an annual figure.
    pub fn annual_factor(&self) -> f64 {
        match self {
            ExpenseFrequency::Monthly => 12.0,
            ExpenseFrequency::Quarterly => 4.0,
            ExpenseFrequency::Annually => 1.0,
        }
    }
}

// ============================================================================
// EXPENSE CATEGORY
// ============================================================================

/// Closed set of expense categories. Free text that matches none of the
/// named categories parses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Utilities,
    Marketing,
    Insurance,
    Software,
    Equipment,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories, in form-select order.
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::Marketing,
        ExpenseCategory::Insurance,
        ExpenseCategory::Software,
        ExpenseCategory::Equipment,
        ExpenseCategory::Travel,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Software => "Software",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Parse a category name (case-insensitive). Unknown names fall back
    /// to `Other`.
    pub fn parse(name: &str) -> ExpenseCategory {
        let name = name.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(ExpenseCategory::Other)
    }
}

// ============================================================================
// EXPENSE ENTITY
// ============================================================================

/// A single recurring cost record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identity (UUID) - generated at creation, never changes
    pub id: String,

    /// Cost category
    pub category: ExpenseCategory,

    /// Amount per billing period, non-negative
    pub amount: f64,

    /// Free-text description
    pub description: String,

    /// Billing frequency
    pub frequency: ExpenseFrequency,
}

impl Expense {
    /// Create a new expense with a fresh UUID. Description defaults to
    /// empty; frequency defaults to monthly.
    pub fn new(category: ExpenseCategory, amount: f64) -> Self {
        Expense {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            amount,
            description: String::new(),
            frequency: ExpenseFrequency::Monthly,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    pub fn with_frequency(mut self, frequency: ExpenseFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Amount normalized to one year of billing.
    ///
    /// Example: $4,500 monthly rent → $54,000 annual cost.
    pub fn annual_amount(&self) -> f64 {
        self.amount * self.frequency.annual_factor()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_factors() {
        assert_eq!(ExpenseFrequency::Monthly.annual_factor(), 12.0);
        assert_eq!(ExpenseFrequency::Quarterly.annual_factor(), 4.0);
        assert_eq!(ExpenseFrequency::Annually.annual_factor(), 1.0);
    }

    #[test]
    fn test_annual_amount_per_frequency() {
        let monthly = Expense::new(ExpenseCategory::Rent, 100.0);
        assert_eq!(monthly.annual_amount(), 1_200.0);

        let quarterly = Expense::new(ExpenseCategory::Insurance, 100.0)
            .with_frequency(ExpenseFrequency::Quarterly);
        assert_eq!(quarterly.annual_amount(), 400.0);

        let annual = Expense::new(ExpenseCategory::Equipment, 100.0)
            .with_frequency(ExpenseFrequency::Annually);
        assert_eq!(annual.annual_amount(), 100.0);
    }

    #[test]
    fn test_category_parse_known_names() {
        assert_eq!(ExpenseCategory::parse("Rent"), ExpenseCategory::Rent);
        assert_eq!(ExpenseCategory::parse("marketing"), ExpenseCategory::Marketing);
        assert_eq!(ExpenseCategory::parse("  SOFTWARE "), ExpenseCategory::Software);
    }

    #[test]
    fn test_category_parse_unknown_falls_back_to_other() {
        assert_eq!(ExpenseCategory::parse("Snacks"), ExpenseCategory::Other);
        assert_eq!(ExpenseCategory::parse(""), ExpenseCategory::Other);
    }

    #[test]
    fn test_expense_creation_defaults() {
        let expense = Expense::new(ExpenseCategory::Utilities, 250.0);

        assert!(!expense.id.is_empty());
        assert_eq!(expense.category, ExpenseCategory::Utilities);
        assert_eq!(expense.amount, 250.0);
        assert_eq!(expense.description, "");
        assert_eq!(expense.frequency, ExpenseFrequency::Monthly);
    }
}
