// 💲 Pricing & Expense Calculator - Annualized costs and scenario analysis
//
// Two independent pieces: expense reporting over the aggregate's expense
// collection, and the pricing calculator over four free-typed inputs.

use serde::Serialize;

use crate::entities::{Expense, ExpenseCategory};

// ============================================================================
// EXPENSE REPORTING
// ============================================================================

/// Sum of all expenses normalized to an annual figure.
pub fn total_annual_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.annual_amount()).sum()
}

/// Profit margin percent. 0 when revenue is 0 (never NaN).
pub fn profit_margin(current_revenue: f64, total_expenses: f64) -> f64 {
    if current_revenue == 0.0 {
        0.0
    } else {
        (current_revenue - total_expenses) / current_revenue * 100.0
    }
}

/// One category's slice of the expense chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: ExpenseCategory,
    pub annual_total: f64,
}

/// Group annualized amounts by category, first-seen order.
pub fn expenses_by_category(expenses: &[Expense]) -> Vec<CategoryBreakdown> {
    let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

    for expense in expenses {
        let annual = expense.annual_amount();
        match breakdown.iter_mut().find(|b| b.category == expense.category) {
            Some(entry) => entry.annual_total += annual,
            None => breakdown.push(CategoryBreakdown {
                category: expense.category,
                annual_total: annual,
            }),
        }
    }

    breakdown
}

// ============================================================================
// PRICING CALCULATOR
// ============================================================================

/// The four calculator inputs, with the form's starting values.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricingInputs {
    pub current_price: f64,
    pub cost_of_goods: f64,
    pub inflation_rate: f64,
    pub competitor_price: f64,
}

impl Default for PricingInputs {
    fn default() -> Self {
        PricingInputs {
            current_price: 100.0,
            cost_of_goods: 40.0,
            inflation_rate: 3.2,
            competitor_price: 110.0,
        }
    }
}

/// Scenario flag for the pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketPosition {
    Baseline,
    AboveMarket,
    BelowMarket,
    MarketRate,
}

impl MarketPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPosition::Baseline => "Baseline",
            MarketPosition::AboveMarket => "Above Market",
            MarketPosition::BelowMarket => "Below Market",
            MarketPosition::MarketRate => "Market Rate",
        }
    }
}

/// One row of the scenario table.
#[derive(Debug, Clone, Serialize)]
pub struct PricingScenario {
    pub name: &'static str,
    pub price: f64,
    pub margin_pct: f64,
    pub position: MarketPosition,
    pub recommended: bool,
}

/// Everything the pricing page derives from the four inputs.
///
/// Degenerate inputs propagate IEEE non-finite values rather than being
/// corrected: price 0 or competitor 0 gives non-finite margins, and a
/// 100% margin gives an infinite recommended price. Callers test
/// `is_finite()` before formatting.
#[derive(Debug, Clone, Serialize)]
pub struct PricingAnalysis {
    pub current_margin_pct: f64,
    pub inflation_adjusted_cost: f64,
    pub recommended_price: f64,
    pub market_match_margin_pct: f64,
    pub competitor_comparison_pct: f64,
    pub scenarios: Vec<PricingScenario>,
}

impl PricingAnalysis {
    pub fn compute(inputs: &PricingInputs) -> Self {
        let current_margin_pct =
            (inputs.current_price - inputs.cost_of_goods) / inputs.current_price * 100.0;
        let inflation_adjusted_cost =
            inputs.cost_of_goods * (1.0 + inputs.inflation_rate / 100.0);

        // Preserving the current margin at the inflated cost. A margin of
        // exactly 100% makes the divisor 0; the result is then infinite,
        // which is detectable rather than silently wrong. Margins above
        // 100% produce a negative price, surfaced as-is.
        let divisor = 1.0 - current_margin_pct / 100.0;
        let recommended_price = if divisor == 0.0 {
            f64::INFINITY
        } else {
            inflation_adjusted_cost / divisor
        };

        let market_match_margin_pct = (inputs.competitor_price - inflation_adjusted_cost)
            / inputs.competitor_price
            * 100.0;
        let competitor_comparison_pct = (inputs.current_price - inputs.competitor_price)
            / inputs.competitor_price
            * 100.0;

        let scenarios = vec![
            PricingScenario {
                name: "Current",
                price: inputs.current_price,
                margin_pct: current_margin_pct,
                position: MarketPosition::Baseline,
                recommended: false,
            },
            PricingScenario {
                name: "Inflation Adjusted",
                price: recommended_price,
                margin_pct: current_margin_pct,
                position: if recommended_price > inputs.competitor_price {
                    MarketPosition::AboveMarket
                } else {
                    MarketPosition::BelowMarket
                },
                recommended: true,
            },
            PricingScenario {
                name: "Market Match",
                price: inputs.competitor_price,
                margin_pct: market_match_margin_pct,
                position: MarketPosition::MarketRate,
                recommended: false,
            },
        ];

        PricingAnalysis {
            current_margin_pct,
            inflation_adjusted_cost,
            recommended_price,
            market_match_margin_pct,
            competitor_comparison_pct,
            scenarios,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ExpenseFrequency;

    fn expense(category: ExpenseCategory, amount: f64, frequency: ExpenseFrequency) -> Expense {
        Expense::new(category, amount).with_frequency(frequency)
    }

    #[test]
    fn test_total_annual_expenses_mixed_frequencies() {
        let expenses = vec![
            expense(ExpenseCategory::Rent, 1_000.0, ExpenseFrequency::Monthly),
            expense(ExpenseCategory::Insurance, 500.0, ExpenseFrequency::Quarterly),
            expense(ExpenseCategory::Equipment, 3_000.0, ExpenseFrequency::Annually),
        ];

        // 12,000 + 2,000 + 3,000
        assert_eq!(total_annual_expenses(&expenses), 17_000.0);
    }

    #[test]
    fn test_total_annual_expenses_empty() {
        assert_eq!(total_annual_expenses(&[]), 0.0);
    }

    #[test]
    fn test_profit_margin() {
        let margin = profit_margin(500_000.0, 125_000.0);
        assert!((margin - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_profit_margin_zero_revenue_is_zero_not_nan() {
        let margin = profit_margin(0.0, 50_000.0);
        assert_eq!(margin, 0.0);
        assert!(!margin.is_nan());
    }

    #[test]
    fn test_category_breakdown_first_seen_order() {
        let expenses = vec![
            expense(ExpenseCategory::Rent, 1_000.0, ExpenseFrequency::Monthly),
            expense(ExpenseCategory::Software, 100.0, ExpenseFrequency::Monthly),
            expense(ExpenseCategory::Rent, 500.0, ExpenseFrequency::Annually),
        ];

        let breakdown = expenses_by_category(&expenses);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, ExpenseCategory::Rent);
        assert_eq!(breakdown[0].annual_total, 12_500.0);
        assert_eq!(breakdown[1].category, ExpenseCategory::Software);
        assert_eq!(breakdown[1].annual_total, 1_200.0);
    }

    #[test]
    fn test_analysis_default_inputs() {
        // 100 / 40 / 3.2 / 110
        let analysis = PricingAnalysis::compute(&PricingInputs::default());

        assert!((analysis.current_margin_pct - 60.0).abs() < 1e-9);
        assert!((analysis.inflation_adjusted_cost - 41.28).abs() < 1e-9);
        assert!((analysis.recommended_price - 103.2).abs() < 1e-9);
        assert!((analysis.competitor_comparison_pct - (-100.0 / 11.0)).abs() < 1e-6);
    }

    #[test]
    fn test_analysis_scenario_rows() {
        let analysis = PricingAnalysis::compute(&PricingInputs::default());
        assert_eq!(analysis.scenarios.len(), 3);

        let current = &analysis.scenarios[0];
        assert_eq!(current.name, "Current");
        assert_eq!(current.position, MarketPosition::Baseline);
        assert!(!current.recommended);

        // Recommended 103.2 < competitor 110
        let adjusted = &analysis.scenarios[1];
        assert_eq!(adjusted.position, MarketPosition::BelowMarket);
        assert!(adjusted.recommended);

        let market = &analysis.scenarios[2];
        assert_eq!(market.price, 110.0);
        assert_eq!(market.position, MarketPosition::MarketRate);
        // (110 - 41.28) / 110 * 100
        assert!((market.margin_pct - 62.47272727272727).abs() < 1e-9);
    }

    #[test]
    fn test_recommended_price_at_full_margin_is_infinite() {
        let inputs = PricingInputs {
            current_price: 100.0,
            cost_of_goods: 0.0,
            inflation_rate: 0.0,
            competitor_price: 110.0,
        };

        let analysis = PricingAnalysis::compute(&inputs);
        assert_eq!(analysis.current_margin_pct, 100.0);
        assert!(analysis.recommended_price.is_infinite());
        assert!(!analysis.recommended_price.is_finite());
    }

    #[test]
    fn test_margin_above_hundred_yields_negative_price() {
        // Negative cost pushes the margin past 100%; no validation is
        // applied, the negative price is surfaced unchanged.
        let inputs = PricingInputs {
            current_price: 100.0,
            cost_of_goods: -50.0,
            inflation_rate: 0.0,
            competitor_price: 110.0,
        };

        let analysis = PricingAnalysis::compute(&inputs);
        assert!(analysis.current_margin_pct > 100.0);
        assert!(analysis.recommended_price < 0.0);
    }

    #[test]
    fn test_zero_price_propagates_non_finite() {
        let inputs = PricingInputs {
            current_price: 0.0,
            cost_of_goods: 40.0,
            inflation_rate: 3.2,
            competitor_price: 110.0,
        };

        let analysis = PricingAnalysis::compute(&inputs);
        assert!(!analysis.current_margin_pct.is_finite());
    }
}
