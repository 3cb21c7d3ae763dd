// 💼 Payroll Aggregator - Headcount, payroll totals, market benchmarks
//
// Pure reads over the employee collection. Recomputed on every render;
// nothing here holds state.

use serde::Serialize;

use crate::entities::{market_salary_for, Employee, DEFAULT_DEPARTMENT};

/// Variance threshold (percent, strict) past which a salary is flagged
/// for review.
pub const REVIEW_THRESHOLD: f64 = 10.0;

// ============================================================================
// PAYROLL SUMMARY
// ============================================================================

/// Top-line payroll figures for the KPI cards.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollSummary {
    pub headcount: usize,
    pub total_payroll: f64,
    /// 0 when there are no employees.
    pub average_salary: f64,
    /// 0 when there are no employees or revenue is 0.
    pub revenue_per_employee: f64,
}

impl PayrollSummary {
    pub fn compute(employees: &[Employee], current_revenue: f64) -> Self {
        let headcount = employees.len();
        let total_payroll: f64 = employees.iter().map(|e| e.salary).sum();

        let average_salary = if headcount > 0 {
            total_payroll / headcount as f64
        } else {
            0.0
        };

        let revenue_per_employee = if headcount > 0 && current_revenue > 0.0 {
            current_revenue / headcount as f64
        } else {
            0.0
        };

        PayrollSummary {
            headcount,
            total_payroll,
            average_salary,
            revenue_per_employee,
        }
    }
}

// ============================================================================
// DEPARTMENT ROLLUP
// ============================================================================

/// One department's slice of the payroll chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRollup {
    pub department: String,
    pub employees: usize,
    pub total_salary: f64,
}

/// Group employees by department, first-seen order. Blank departments
/// count as "General" (entity construction already defaults them, so the
/// fallback here only matters for hand-built records).
pub fn department_rollup(employees: &[Employee]) -> Vec<DepartmentRollup> {
    let mut rollup: Vec<DepartmentRollup> = Vec::new();

    for employee in employees {
        let dept = if employee.department.trim().is_empty() {
            DEFAULT_DEPARTMENT
        } else {
            employee.department.as_str()
        };

        match rollup.iter_mut().find(|r| r.department == dept) {
            Some(entry) => {
                entry.employees += 1;
                entry.total_salary += employee.salary;
            }
            None => rollup.push(DepartmentRollup {
                department: dept.to_string(),
                employees: 1,
                total_salary: employee.salary,
            }),
        }
    }

    rollup
}

// ============================================================================
// MARKET COMPARISON
// ============================================================================

/// Where a salary sits relative to the market figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketBand {
    AboveMarket,
    BelowMarket,
    WithinBand,
}

impl MarketBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketBand::AboveMarket => "Above Market",
            MarketBand::BelowMarket => "Below Market",
            MarketBand::WithinBand => "Within Band",
        }
    }
}

/// One employee's salary measured against the reference table.
#[derive(Debug, Clone, Serialize)]
pub enum MarketComparison {
    /// Known title: variance percent against the table figure.
    Benchmarked {
        market_salary: f64,
        variance_pct: f64,
        band: MarketBand,
        needs_review: bool,
    },
    /// Title not in the reference table. Variance is defined as 0%.
    NoBenchmark,
}

impl MarketComparison {
    /// Look the employee's title up in the reference table. Unknown
    /// titles take the explicit `NoBenchmark` branch rather than a
    /// silent dictionary miss.
    pub fn compute(employee: &Employee) -> Self {
        let market_salary = match market_salary_for(&employee.position) {
            Some(market) => market,
            None => return MarketComparison::NoBenchmark,
        };

        let variance_pct = (employee.salary - market_salary) / market_salary * 100.0;

        let band = if variance_pct > REVIEW_THRESHOLD {
            MarketBand::AboveMarket
        } else if variance_pct < -REVIEW_THRESHOLD {
            MarketBand::BelowMarket
        } else {
            MarketBand::WithinBand
        };

        MarketComparison::Benchmarked {
            market_salary,
            variance_pct,
            band,
            needs_review: variance_pct.abs() > REVIEW_THRESHOLD,
        }
    }

    /// Variance percent for display. 0 for unbenchmarked titles.
    pub fn variance_pct(&self) -> f64 {
        match self {
            MarketComparison::Benchmarked { variance_pct, .. } => *variance_pct,
            MarketComparison::NoBenchmark => 0.0,
        }
    }

    pub fn needs_review(&self) -> bool {
        match self {
            MarketComparison::Benchmarked { needs_review, .. } => *needs_review,
            MarketComparison::NoBenchmark => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, position: &str, salary: f64, department: &str) -> Employee {
        Employee::new(name.to_string(), position.to_string(), salary).with_department(department)
    }

    #[test]
    fn test_summary_two_employees() {
        let employees = vec![
            employee("A", "Accountant", 80_000.0, "Finance"),
            employee("B", "Sales Manager", 100_000.0, "Sales"),
        ];

        let summary = PayrollSummary::compute(&employees, 500_000.0);
        assert_eq!(summary.headcount, 2);
        assert_eq!(summary.total_payroll, 180_000.0);
        assert_eq!(summary.average_salary, 90_000.0);
        assert_eq!(summary.revenue_per_employee, 250_000.0);
    }

    #[test]
    fn test_summary_empty_collection() {
        let summary = PayrollSummary::compute(&[], 500_000.0);
        assert_eq!(summary.headcount, 0);
        assert_eq!(summary.total_payroll, 0.0);
        assert_eq!(summary.average_salary, 0.0);
        assert_eq!(summary.revenue_per_employee, 0.0);
    }

    #[test]
    fn test_summary_zero_revenue() {
        let employees = vec![employee("A", "Accountant", 60_000.0, "Finance")];
        let summary = PayrollSummary::compute(&employees, 0.0);
        assert_eq!(summary.revenue_per_employee, 0.0);
    }

    #[test]
    fn test_average_times_headcount_equals_total() {
        let employees = vec![
            employee("A", "Accountant", 61_337.0, "Finance"),
            employee("B", "Sales Manager", 74_201.0, "Sales"),
            employee("C", "Customer Service", 39_950.0, "Support"),
        ];

        let summary = PayrollSummary::compute(&employees, 0.0);
        let reconstructed = summary.average_salary * summary.headcount as f64;
        assert!((reconstructed - summary.total_payroll).abs() < 1e-6);
    }

    #[test]
    fn test_rollup_first_seen_order() {
        let employees = vec![
            employee("A", "Accountant", 60_000.0, "Finance"),
            employee("B", "Sales Manager", 75_000.0, "Sales"),
            employee("C", "Accountant", 62_000.0, "Finance"),
        ];

        let rollup = department_rollup(&employees);
        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].department, "Finance");
        assert_eq!(rollup[0].employees, 2);
        assert_eq!(rollup[0].total_salary, 122_000.0);
        assert_eq!(rollup[1].department, "Sales");
        assert_eq!(rollup[1].employees, 1);
    }

    #[test]
    fn test_rollup_blank_department_counts_as_general() {
        let mut stray = employee("A", "Accountant", 60_000.0, "x");
        stray.department = String::new();

        let rollup = department_rollup(&[stray]);
        assert_eq!(rollup[0].department, "General");
    }

    #[test]
    fn test_market_comparison_above_market() {
        // Software Developer market = 85,000
        let dev = employee("A", "Software Developer", 102_000.0, "Eng");

        match MarketComparison::compute(&dev) {
            MarketComparison::Benchmarked {
                market_salary,
                variance_pct,
                band,
                needs_review,
            } => {
                assert_eq!(market_salary, 85_000.0);
                assert!((variance_pct - 20.0).abs() < 1e-6);
                assert_eq!(band, MarketBand::AboveMarket);
                assert!(needs_review);
            }
            MarketComparison::NoBenchmark => panic!("known title must be benchmarked"),
        }
    }

    #[test]
    fn test_market_comparison_within_band() {
        // Accountant market = 60,000; +5% is inside the ±10 band
        let acct = employee("A", "Accountant", 63_000.0, "Finance");
        let comparison = MarketComparison::compute(&acct);

        assert!((comparison.variance_pct() - 5.0).abs() < 1e-6);
        assert!(!comparison.needs_review());
    }

    #[test]
    fn test_market_comparison_exactly_at_threshold_not_flagged() {
        // |variance| must exceed 10, not equal it
        let acct = employee("A", "Accountant", 66_000.0, "Finance");
        assert!(!MarketComparison::compute(&acct).needs_review());
    }

    #[test]
    fn test_unknown_position_zero_variance() {
        let founder = employee("A", "Founder", 110_000.0, "General");
        let comparison = MarketComparison::compute(&founder);

        assert!(matches!(comparison, MarketComparison::NoBenchmark));
        assert_eq!(comparison.variance_pct(), 0.0);
        assert!(!comparison.needs_review());
    }
}
