// 👤 Employee Entity - Payroll records
//
// An employee is a plain value record: created once through the
// add-employee form, appended to the aggregate, never edited or deleted
// afterwards. Corrections happen by replacing the whole aggregate.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Department assigned when the form leaves the field blank.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Performance rating assigned when the form leaves the field blank or 0.
pub const DEFAULT_PERFORMANCE: u8 = 3;

/// A single payroll record.
///
/// `position` stays free text: the form suggests the titles the market-rate
/// table knows, but any title is storable. Unknown titles simply get no
/// market benchmark (see `payroll::MarketComparison`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable identity (UUID) - generated at creation, never changes
    pub id: String,

    /// Full name
    pub name: String,

    /// Job title (free text, drawn from a fixed suggested set)
    pub position: String,

    /// Annual salary, non-negative
    pub salary: f64,

    /// Department, defaults to "General"
    pub department: String,

    /// Hire date, defaults to the creation date
    pub hire_date: NaiveDate,

    /// Performance rating on a 1-5 scale, defaults to 3
    pub performance: u8,
}

impl Employee {
    /// Create a new employee with a fresh UUID and field defaults.
    pub fn new(name: String, position: String, salary: f64) -> Self {
        Employee {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            position,
            salary,
            department: DEFAULT_DEPARTMENT.to_string(),
            hire_date: Utc::now().date_naive(),
            performance: DEFAULT_PERFORMANCE,
        }
    }

    /// Set the department. Blank input keeps the "General" default.
    pub fn with_department(mut self, department: &str) -> Self {
        let department = department.trim();
        if !department.is_empty() {
            self.department = department.to_string();
        }
        self
    }

    /// Set the hire date.
    pub fn with_hire_date(mut self, hire_date: NaiveDate) -> Self {
        self.hire_date = hire_date;
        self
    }

    /// Set the performance rating. 0 means "not entered" and keeps the
    /// default; anything else is clamped into the 1-5 scale.
    pub fn with_performance(mut self, rating: u8) -> Self {
        self.performance = if rating == 0 {
            DEFAULT_PERFORMANCE
        } else {
            rating.clamp(1, 5)
        };
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_creation_defaults() {
        let employee = Employee::new("Maya Chen".to_string(), "Accountant".to_string(), 60_000.0);

        assert!(!employee.id.is_empty());
        assert_eq!(employee.name, "Maya Chen");
        assert_eq!(employee.position, "Accountant");
        assert_eq!(employee.salary, 60_000.0);
        assert_eq!(employee.department, DEFAULT_DEPARTMENT);
        assert_eq!(employee.performance, DEFAULT_PERFORMANCE);
        assert_eq!(employee.hire_date, Utc::now().date_naive());
    }

    #[test]
    fn test_unique_identifiers() {
        let a = Employee::new("A".to_string(), "Accountant".to_string(), 1.0);
        let b = Employee::new("B".to_string(), "Accountant".to_string(), 1.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_blank_department_keeps_default() {
        let employee = Employee::new("A".to_string(), "Accountant".to_string(), 1.0)
            .with_department("   ");
        assert_eq!(employee.department, DEFAULT_DEPARTMENT);

        let employee = employee.with_department("Finance");
        assert_eq!(employee.department, "Finance");
    }

    #[test]
    fn test_performance_clamped_to_scale() {
        let base = Employee::new("A".to_string(), "Accountant".to_string(), 1.0);

        assert_eq!(base.clone().with_performance(0).performance, 3);
        assert_eq!(base.clone().with_performance(1).performance, 1);
        assert_eq!(base.clone().with_performance(5).performance, 5);
        assert_eq!(base.clone().with_performance(9).performance, 5);
    }
}
