// 🗃️ Application State - The one BusinessData value, replaced-not-mutated
//
// Every page reads the same aggregate; every change goes through
// `submit`, which builds a complete replacement value and swaps it in.
// Invalid drafts decline silently: nothing changes, nothing is surfaced.

use crate::entities::{BusinessData, Industry};
use crate::schema::{EmployeeDraft, ExpenseDraft};

/// One requested change to the aggregate.
#[derive(Debug, Clone)]
pub enum Update {
    SetCompanyName(String),
    SetIndustry(Option<Industry>),
    SetCurrentRevenue(f64),
    AddEmployee(EmployeeDraft),
    AddExpense(ExpenseDraft),
}

/// Whether a submitted update took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Declined,
}

/// Owns the aggregate for the session. The revision counter bumps on
/// every applied update, so renders can tell whether anything changed.
pub struct BusinessState {
    data: BusinessData,
    revision: u64,
}

impl BusinessState {
    pub fn new(data: BusinessData) -> Self {
        BusinessState { data, revision: 0 }
    }

    pub fn data(&self) -> &BusinessData {
        &self.data
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one update by replacement. A draft that fails validation
    /// declines; the aggregate and revision stay untouched.
    pub fn submit(&mut self, update: Update) -> Outcome {
        let next = match update {
            Update::SetCompanyName(name) => BusinessData {
                company_name: name,
                ..self.data.clone()
            },
            Update::SetIndustry(industry) => BusinessData {
                industry,
                ..self.data.clone()
            },
            Update::SetCurrentRevenue(revenue) => BusinessData {
                current_revenue: revenue,
                ..self.data.clone()
            },
            Update::AddEmployee(draft) => {
                let employee = match draft.build() {
                    Ok(employee) => employee,
                    Err(_) => return Outcome::Declined,
                };
                let mut employees = self.data.employees.clone();
                employees.push(employee);
                BusinessData {
                    employees,
                    ..self.data.clone()
                }
            }
            Update::AddExpense(draft) => {
                let expense = match draft.build() {
                    Ok(expense) => expense,
                    Err(_) => return Outcome::Declined,
                };
                let mut expenses = self.data.expenses.clone();
                expenses.push(expense);
                BusinessData {
                    expenses,
                    ..self.data.clone()
                }
            }
        };

        self.data = next;
        self.revision += 1;
        Outcome::Applied
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ExpenseCategory, ExpenseFrequency};

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
    fn test_add_employee_applies() {
        let mut state = BusinessState::new(BusinessData::new());

        let outcome = state.submit(Update::AddEmployee(valid_employee_draft()));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(state.data().employees.len(), 1);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn test_add_employee_empty_name_declines_silently() {
        let mut state = BusinessState::new(BusinessData::new());
        let mut draft = valid_employee_draft();
        draft.name = String::new();

        let outcome = state.submit(Update::AddEmployee(draft));
        assert_eq!(outcome, Outcome::Declined);
        assert!(state.data().employees.is_empty());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_add_expense_applies() {
        let mut state = BusinessState::new(BusinessData::new());
        let draft = ExpenseDraft {
            category: Some(ExpenseCategory::Rent),
            amount: 4_500.0,
            description: "Lease".to_string(),
            frequency: Some(ExpenseFrequency::Monthly),
        };

        assert_eq!(state.submit(Update::AddExpense(draft)), Outcome::Applied);
        assert_eq!(state.data().expenses.len(), 1);
    }

    #[test]
    fn test_add_expense_zero_amount_declines() {
        let mut state = BusinessState::new(BusinessData::new());
        let draft = ExpenseDraft {
            category: Some(ExpenseCategory::Rent),
            amount: 0.0,
            ..Default::default()
        };

        assert_eq!(state.submit(Update::AddExpense(draft)), Outcome::Declined);
        assert!(state.data().expenses.is_empty());
    }

    #[test]
    fn test_set_revenue_replaces_value() {
        let mut state = BusinessState::new(BusinessData::new());

        state.submit(Update::SetCurrentRevenue(620_000.0));
        assert_eq!(state.data().current_revenue, 620_000.0);

        // The rest of the aggregate is untouched
        assert!(state.data().employees.is_empty());
        assert_eq!(state.data().company_name, "");
    }

    #[test]
    fn test_updates_do_not_disturb_collections() {
        let mut state = BusinessState::new(BusinessData::sample());
        let before = state.data().employees.clone();

        state.submit(Update::SetCompanyName("Renamed Co".to_string()));
        state.submit(Update::SetIndustry(Some(Industry::Technology)));

        assert_eq!(state.data().employees, before);
        assert_eq!(state.data().company_name, "Renamed Co");
        assert_eq!(state.revision(), 2);
    }
}
