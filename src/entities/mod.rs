// Entity Models - The domain records every page reads
//
// Plain value records plus the typed enumerations behind the form
// selects. Entities are created through the drafts in `schema` and
// never edited afterwards; corrections replace the whole aggregate.

pub mod business;
pub mod employee;
pub mod expense;
pub mod position;

pub use business::{BusinessData, Industry, RevenueRecord};
pub use employee::{Employee, DEFAULT_DEPARTMENT, DEFAULT_PERFORMANCE};
pub use expense::{Expense, ExpenseCategory, ExpenseFrequency};
pub use position::{market_salary_for, Position};
