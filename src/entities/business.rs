// 🏢 Business Aggregate - The one value every page reads
//
// BusinessData is created once at startup and replaced wholesale whenever a
// page submits a change. Nothing edits it in place; see `state::BusinessState`.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::employee::Employee;
use super::expense::{Expense, ExpenseCategory, ExpenseFrequency};

// ============================================================================
// INDUSTRY
// ============================================================================

/// Industry sectors offered by the projections page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Retail,
    Manufacturing,
    ProfessionalServices,
    Healthcare,
}

impl Industry {
    /// All industries, in form-select order.
    pub const ALL: [Industry; 5] = [
        Industry::Technology,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::ProfessionalServices,
        Industry::Healthcare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Retail => "Retail",
            Industry::Manufacturing => "Manufacturing",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Healthcare => "Healthcare",
        }
    }
}

// ============================================================================
// REVENUE HISTORY
// ============================================================================

/// One year of historical revenue. Modeled for future use; no calculator
/// reads it and no update populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    pub year: i32,
    pub revenue: f64,
}

// ============================================================================
// BUSINESS DATA
// ============================================================================

/// The aggregate root: company profile plus the employee, expense, and
/// revenue-history collections. All collections keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessData {
    pub company_name: String,
    pub industry: Option<Industry>,
    pub founded_year: i32,

    /// Current annual revenue. May be 0 (fresh session); the projection
    /// page substitutes a default base in that case.
    pub current_revenue: f64,

    pub employees: Vec<Employee>,
    pub expenses: Vec<Expense>,
    pub revenue_history: Vec<RevenueRecord>,
}

impl BusinessData {
    /// Fresh session: blank profile, current calendar year, empty
    /// collections.
    pub fn new() -> Self {
        BusinessData {
            company_name: String::new(),
            industry: None,
            founded_year: Utc::now().year(),
            current_revenue: 0.0,
            employees: Vec::new(),
            expenses: Vec::new(),
            revenue_history: Vec::new(),
        }
    }

    /// Seeded demo company for the `demo` and `report` run modes.
    ///
    /// The roster covers every market-comparison branch: above market,
    /// below market, exactly at market, within the ±10% band, and a title
    /// the reference table does not know.
    pub fn sample() -> Self {
        let employees = vec![
            Employee::new("Maya Chen".to_string(), "Software Developer".to_string(), 92_000.0)
                .with_department("Engineering")
                .with_hire_date(date(2021, 3, 15))
                .with_performance(5),
            Employee::new("Luis Ortega".to_string(), "Sales Manager".to_string(), 61_000.0)
                .with_department("Sales")
                .with_hire_date(date(2019, 8, 1))
                .with_performance(4),
            Employee::new("Priya Nair".to_string(), "Accountant".to_string(), 60_000.0)
                .with_department("Finance")
                .with_hire_date(date(2022, 1, 10))
                .with_performance(3),
            Employee::new("Tom Becker".to_string(), "Customer Service".to_string(), 46_000.0)
                .with_department("Support")
                .with_hire_date(date(2023, 6, 5))
                .with_performance(4),
            Employee::new("Derek Hull".to_string(), "Operations Manager".to_string(), 78_000.0)
                .with_department("Operations")
                .with_hire_date(date(2020, 11, 30))
                .with_performance(3),
            Employee::new("Ana Sofia Ruiz".to_string(), "Founder".to_string(), 110_000.0)
                .with_hire_date(date(2017, 4, 3))
                .with_performance(5),
        ];

        let expenses = vec![
            Expense::new(ExpenseCategory::Rent, 4_500.0).with_description("Storefront lease"),
            Expense::new(ExpenseCategory::Software, 850.0)
                .with_description("POS and accounting seats"),
            Expense::new(ExpenseCategory::Insurance, 1_200.0)
                .with_description("General liability")
                .with_frequency(ExpenseFrequency::Quarterly),
            Expense::new(ExpenseCategory::Marketing, 2_000.0)
                .with_description("Local ads and social"),
            Expense::new(ExpenseCategory::Equipment, 8_000.0)
                .with_description("Warehouse forklift service")
                .with_frequency(ExpenseFrequency::Annually),
            Expense::new(ExpenseCategory::Travel, 900.0)
                .with_description("Trade shows")
                .with_frequency(ExpenseFrequency::Quarterly),
        ];

        BusinessData {
            company_name: "Harbor Lane Goods".to_string(),
            industry: Some(Industry::Retail),
            founded_year: 2017,
            current_revenue: 620_000.0,
            employees,
            expenses,
            revenue_history: Vec::new(),
        }
    }
}

impl Default for BusinessData {
    fn default() -> Self {
        Self::new()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_blank() {
        let data = BusinessData::new();

        assert_eq!(data.company_name, "");
        assert_eq!(data.industry, None);
        assert_eq!(data.founded_year, Utc::now().year());
        assert_eq!(data.current_revenue, 0.0);
        assert!(data.employees.is_empty());
        assert!(data.expenses.is_empty());
        assert!(data.revenue_history.is_empty());
    }

    #[test]
    fn test_sample_company_shape() {
        let data = BusinessData::sample();

        assert_eq!(data.company_name, "Harbor Lane Goods");
        assert_eq!(data.industry, Some(Industry::Retail));
        assert_eq!(data.employees.len(), 6);
        assert_eq!(data.expenses.len(), 6);
        // Revenue history stays unpopulated (reserved field).
        assert!(data.revenue_history.is_empty());
    }

    #[test]
    fn test_sample_covers_unknown_position() {
        let data = BusinessData::sample();
        let founder = data
            .employees
            .iter()
            .find(|e| e.position == "Founder")
            .expect("sample roster includes an unbenchmarked title");
        assert_eq!(founder.department, "General");
    }

    #[test]
    fn test_industry_labels() {
        assert_eq!(Industry::ProfessionalServices.as_str(), "Professional Services");
        assert_eq!(Industry::ALL.len(), 5);
    }
}
