// 📐 Shape Layer - Form Drafts & Validation
// Validates add-employee / add-expense drafts before they touch the aggregate

use chrono::{NaiveDate, Utc};

use crate::entities::{
    Employee, Expense, ExpenseCategory, ExpenseFrequency, DEFAULT_PERFORMANCE,
};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// NUMERIC TEXT PARSING
// ============================================================================

/// Parse free-typed numeric text. Anything unparseable is 0, never an error.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse a free-typed performance rating. Unparseable or 0 means
/// "not entered" and yields the default 3.
pub fn parse_performance(text: &str) -> u8 {
    let raw = text.trim().parse::<u8>().unwrap_or(0);
    if raw == 0 {
        DEFAULT_PERFORMANCE
    } else {
        raw
    }
}

// ============================================================================
// EMPLOYEE DRAFT
// ============================================================================

/// What the add-employee form collects before anything is committed.
/// Every field is raw text except salary/performance which the form
/// already ran through the numeric parsers.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: Option<NaiveDate>,
    pub performance: u8,
}

impl EmployeeDraft {
    /// Required fields: name, position, non-zero salary. Mirrors the
    /// add-employee gate; a negative salary also fails (salary ≥ 0
    /// invariant).
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError {
                field: "name".to_string(),
                message: "Required field is empty".to_string(),
                context: "Employee".to_string(),
            });
        }

        if self.position.trim().is_empty() {
            errors.push(ValidationError {
                field: "position".to_string(),
                message: "Required field is empty".to_string(),
                context: "Employee".to_string(),
            });
        }

        if self.salary == 0.0 {
            errors.push(ValidationError {
                field: "salary".to_string(),
                message: "Required field is zero".to_string(),
                context: "Employee".to_string(),
            });
        } else if self.salary < 0.0 {
            errors.push(ValidationError {
                field: "salary".to_string(),
                message: format!("Must be non-negative, got {}", self.salary),
                context: "Employee".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the entity, applying defaults: department "General", hire
    /// date today, performance 3 when absent (clamped into 1-5).
    pub fn build(&self) -> Result<Employee, Vec<ValidationError>> {
        self.validate()?;

        let employee = Employee::new(
            self.name.trim().to_string(),
            self.position.trim().to_string(),
            self.salary,
        )
        .with_department(&self.department)
        .with_hire_date(self.hire_date.unwrap_or_else(|| Utc::now().date_naive()))
        .with_performance(self.performance);

        Ok(employee)
    }
}

// ============================================================================
// EXPENSE DRAFT
// ============================================================================

/// What the add-expense form collects. `category` is `None` until the
/// user picks one (the form's "Select Category" placeholder).
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub category: Option<ExpenseCategory>,
    pub amount: f64,
    pub description: String,
    pub frequency: Option<ExpenseFrequency>,
}

impl ExpenseDraft {
    /// Required fields: a selected category and a non-zero amount.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.category.is_none() {
            errors.push(ValidationError {
                field: "category".to_string(),
                message: "No category selected".to_string(),
                context: "Expense".to_string(),
            });
        }

        if self.amount == 0.0 {
            errors.push(ValidationError {
                field: "amount".to_string(),
                message: "Required field is zero".to_string(),
                context: "Expense".to_string(),
            });
        } else if self.amount < 0.0 {
            errors.push(ValidationError {
                field: "amount".to_string(),
                message: format!("Must be non-negative, got {}", self.amount),
                context: "Expense".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the entity. Description defaults to empty, frequency to
    /// monthly.
    pub fn build(&self) -> Result<Expense, Vec<ValidationError>> {
        self.validate()?;

        // validate() guarantees the category is present
        let category = self.category.unwrap_or(ExpenseCategory::Other);

        let expense = Expense::new(category, self.amount)
            .with_description(&self.description)
            .with_frequency(self.frequency.unwrap_or(ExpenseFrequency::Monthly));

        Ok(expense)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Maya Chen".to_string(),
            position: "Accountant".to_string(),
            department: "Finance".to_string(),
            salary: 60_000.0,
            hire_date: None,
            performance: 4,
        }
    }

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount("125.50"), 125.50);
        assert_eq!(parse_amount("  80000 "), 80_000.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_parse_performance_defaults_to_three() {
        assert_eq!(parse_performance("4"), 4);
        assert_eq!(parse_performance("0"), 3);
        assert_eq!(parse_performance("abc"), 3);
        assert_eq!(parse_performance(""), 3);
    }

    #[test]
    fn test_employee_draft_valid() {
        assert!(valid_employee_draft().validate().is_ok());
    }

    #[test]
    fn test_employee_draft_empty_name() {
        let mut draft = valid_employee_draft();
        draft.name = "   ".to_string();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_employee_draft_missing_everything() {
        let errors = EmployeeDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_employee_draft_negative_salary() {
        let mut draft = valid_employee_draft();
        draft.salary = -1.0;

        let errors = draft.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "salary"));
    }

    #[test]
    fn test_employee_build_applies_defaults() {
        let draft = EmployeeDraft {
            name: "Tom Becker".to_string(),
            position: "Customer Service".to_string(),
            department: String::new(),
            salary: 46_000.0,
            hire_date: None,
            performance: 0,
        };

        let employee = draft.build().unwrap();
        assert_eq!(employee.department, "General");
        assert_eq!(employee.hire_date, Utc::now().date_naive());
        assert_eq!(employee.performance, 3);
    }

    #[test]
    fn test_expense_draft_valid() {
        let draft = ExpenseDraft {
            category: Some(ExpenseCategory::Rent),
            amount: 4_500.0,
            description: "Storefront lease".to_string(),
            frequency: Some(ExpenseFrequency::Monthly),
        };

        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_expense_draft_no_category() {
        let draft = ExpenseDraft {
            category: None,
            amount: 100.0,
            ..Default::default()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "category");
    }

    #[test]
    fn test_expense_draft_zero_amount() {
        let draft = ExpenseDraft {
            category: Some(ExpenseCategory::Software),
            amount: 0.0,
            ..Default::default()
        };

        let errors = draft.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "amount"));
    }

    #[test]
    fn test_expense_build_defaults_to_monthly() {
        let draft = ExpenseDraft {
            category: Some(ExpenseCategory::Software),
            amount: 850.0,
            description: "  POS seats  ".to_string(),
            frequency: None,
        };

        let expense = draft.build().unwrap();
        assert_eq!(expense.frequency, ExpenseFrequency::Monthly);
        assert_eq!(expense.description, "POS seats");
    }
}
