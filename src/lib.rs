// BizVision - Core Library
// Exposes the domain model, metrics calculators, and state container
// for use in the TUI binary and tests

pub mod dashboard;
pub mod entities; // Domain records + typed enumerations
pub mod innovation; // Static opportunity catalog
pub mod payroll; // Payroll aggregation + market benchmarks
pub mod pricing; // Expense annualization + pricing scenarios
pub mod projection; // Compound revenue projection
pub mod schema; // Form drafts + validation
pub mod state; // The replaced-not-mutated aggregate

// Re-export commonly used types
pub use entities::{
    market_salary_for, BusinessData, Employee, Expense, ExpenseCategory, ExpenseFrequency,
    Industry, Position, RevenueRecord,
};
pub use schema::{
    parse_amount, parse_performance, EmployeeDraft, ExpenseDraft, ValidationError,
    ValidationResult,
};
pub use payroll::{
    department_rollup, DepartmentRollup, MarketBand, MarketComparison, PayrollSummary,
};
pub use pricing::{
    expenses_by_category, profit_margin, total_annual_expenses, CategoryBreakdown,
    MarketPosition, PricingAnalysis, PricingInputs, PricingScenario,
};
pub use projection::{
    effective_base, project, GrowthAssumptions, KeyProjections, ProjectionHorizon,
    ProjectionPoint,
};
pub use innovation::{
    CategoryFilter, InnovationCatalog, InnovationCategory, Opportunity, Rating,
};
pub use dashboard::{KpiCard, MonthlyFigure, Trend, KPI_CARDS, MONTHLY_FIGURES};
pub use state::{BusinessState, Outcome, Update};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
