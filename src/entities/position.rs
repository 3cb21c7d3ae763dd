// 📋 Position Reference - Market-salary benchmark table
//
// Closed set of job titles with a fixed market salary each. Employee
// positions stay free text; turning "is this title in the table?" into a
// typed parse keeps the unknown-title fallback an explicit branch instead
// of a silent dictionary miss.

use serde::{Deserialize, Serialize};

/// Job titles the market-rate table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    SoftwareDeveloper,
    SalesManager,
    MarketingSpecialist,
    Accountant,
    HrManager,
    CustomerService,
    OperationsManager,
}

impl Position {
    /// All known positions, in form-select order.
    pub const ALL: [Position; 7] = [
        Position::SoftwareDeveloper,
        Position::SalesManager,
        Position::MarketingSpecialist,
        Position::Accountant,
        Position::HrManager,
        Position::CustomerService,
        Position::OperationsManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::SoftwareDeveloper => "Software Developer",
            Position::SalesManager => "Sales Manager",
            Position::MarketingSpecialist => "Marketing Specialist",
            Position::Accountant => "Accountant",
            Position::HrManager => "HR Manager",
            Position::CustomerService => "Customer Service",
            Position::OperationsManager => "Operations Manager",
        }
    }

    /// Reference market salary for this title.
    pub fn market_salary(&self) -> f64 {
        match self {
            Position::SoftwareDeveloper => 85_000.0,
            Position::SalesManager => 75_000.0,
            Position::MarketingSpecialist => 55_000.0,
            Position::Accountant => 60_000.0,
            Position::HrManager => 70_000.0,
            Position::CustomerService => 40_000.0,
            Position::OperationsManager => 80_000.0,
        }
    }

    /// Parse a free-text title (case-insensitive exact match).
    pub fn parse(title: &str) -> Option<Position> {
        let title = title.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(title))
    }
}

/// Market salary for a free-text title, or `None` when the title is not in
/// the reference table.
pub fn market_salary_for(title: &str) -> Option<f64> {
    Position::parse(title).map(|p| p.market_salary())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_titles() {
        assert_eq!(Position::parse("Software Developer"), Some(Position::SoftwareDeveloper));
        assert_eq!(Position::parse("hr manager"), Some(Position::HrManager));
        assert_eq!(Position::parse("  Sales Manager  "), Some(Position::SalesManager));
    }

    #[test]
    fn test_parse_unknown_title() {
        assert_eq!(Position::parse("Founder"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn test_market_salary_table() {
        assert_eq!(market_salary_for("Software Developer"), Some(85_000.0));
        assert_eq!(market_salary_for("Sales Manager"), Some(75_000.0));
        assert_eq!(market_salary_for("Marketing Specialist"), Some(55_000.0));
        assert_eq!(market_salary_for("Accountant"), Some(60_000.0));
        assert_eq!(market_salary_for("HR Manager"), Some(70_000.0));
        assert_eq!(market_salary_for("Customer Service"), Some(40_000.0));
        assert_eq!(market_salary_for("Operations Manager"), Some(80_000.0));
        assert_eq!(market_salary_for("Wizard"), None);
    }
}
