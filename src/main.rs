// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use bizvision::entities::BusinessData;
#[cfg(feature = "tui")]
use bizvision::state::BusinessState;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("demo") => run_ui_mode(BusinessData::sample())?,
        Some("report") => run_report()?,
        _ => run_ui_mode(BusinessData::new())?,
    }

    Ok(())
}

/// Print the full metrics snapshot for the sample company as JSON.
/// Useful for piping into jq or diffing between versions.
fn run_report() -> Result<()> {
    use bizvision::{
        department_rollup, expenses_by_category, profit_margin, total_annual_expenses,
        GrowthAssumptions, MarketComparison, PayrollSummary, PricingAnalysis, PricingInputs,
        ProjectionHorizon,
    };
    use chrono::Datelike;
    use serde::Serialize;

    #[derive(Serialize)]
    struct EmployeeReport {
        name: String,
        position: String,
        department: String,
        salary: f64,
        market_variance_pct: f64,
        needs_review: bool,
    }

    #[derive(Serialize)]
    struct Report {
        company_name: String,
        industry: Option<bizvision::Industry>,
        current_revenue: f64,
        payroll: PayrollSummary,
        departments: Vec<bizvision::DepartmentRollup>,
        employees: Vec<EmployeeReport>,
        total_annual_expenses: f64,
        profit_margin_pct: f64,
        expenses_by_category: Vec<bizvision::CategoryBreakdown>,
        pricing: PricingAnalysis,
        projections: Vec<bizvision::ProjectionPoint>,
    }

    println!("📊 BizVision Report - sample company metrics");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let data = BusinessData::sample();
    let summary = PayrollSummary::compute(&data.employees, data.current_revenue);
    let total_expenses = total_annual_expenses(&data.expenses);

    let employees = data
        .employees
        .iter()
        .map(|e| {
            let comparison = MarketComparison::compute(e);
            EmployeeReport {
                name: e.name.clone(),
                position: e.position.clone(),
                department: e.department.clone(),
                salary: e.salary,
                market_variance_pct: comparison.variance_pct(),
                needs_review: comparison.needs_review(),
            }
        })
        .collect();

    let report = Report {
        company_name: data.company_name.clone(),
        industry: data.industry,
        current_revenue: data.current_revenue,
        payroll: summary,
        departments: department_rollup(&data.employees),
        employees,
        total_annual_expenses: total_expenses,
        profit_margin_pct: profit_margin(data.current_revenue, total_expenses),
        expenses_by_category: expenses_by_category(&data.expenses),
        pricing: PricingAnalysis::compute(&PricingInputs::default()),
        projections: bizvision::project(
            data.current_revenue,
            ProjectionHorizon::FiveYears,
            &GrowthAssumptions::default(),
            chrono::Utc::now().year(),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(data: BusinessData) -> Result<()> {
    println!("🖥️  Loading BizVision...\n");
    println!(
        "✓ {} employees, {} expenses loaded",
        data.employees.len(),
        data.expenses.len()
    );
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(BusinessState::new(data));
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_data: BusinessData) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the sample metrics: cargo run report");
    std::process::exit(1);
}
