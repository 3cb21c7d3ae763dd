// 📊 Dashboard Overview - Mock KPI cards and monthly series
//
// Static display content for the overview page. The monthly figures are
// illustrative, not derived from the aggregate.

use serde::Serialize;

/// One month of the revenue-vs-expenses chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthlyFigure {
    pub month: &'static str,
    pub revenue: f64,
    pub expenses: f64,
}

impl MonthlyFigure {
    pub fn profit(&self) -> f64 {
        self.revenue - self.expenses
    }
}

/// Six months of mock revenue/expense figures.
pub const MONTHLY_FIGURES: [MonthlyFigure; 6] = [
    MonthlyFigure { month: "Jan", revenue: 45_000.0, expenses: 32_000.0 },
    MonthlyFigure { month: "Feb", revenue: 52_000.0, expenses: 34_000.0 },
    MonthlyFigure { month: "Mar", revenue: 48_000.0, expenses: 31_000.0 },
    MonthlyFigure { month: "Apr", revenue: 61_000.0, expenses: 35_000.0 },
    MonthlyFigure { month: "May", revenue: 55_000.0, expenses: 33_000.0 },
    MonthlyFigure { month: "Jun", revenue: 67_000.0, expenses: 38_000.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

/// One KPI card on the overview page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub const KPI_CARDS: [KpiCard; 4] = [
    KpiCard { title: "Monthly Revenue", value: "$67,000", change: "+12.5%", trend: Trend::Up },
    KpiCard { title: "Active Employees", value: "24", change: "+2", trend: Trend::Up },
    KpiCard { title: "Profit Margin", value: "43.2%", change: "+3.1%", trend: Trend::Up },
    KpiCard { title: "Growth Rate", value: "18.7%", change: "-1.2%", trend: Trend::Down },
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_profit_is_revenue_minus_expenses() {
        for figure in MONTHLY_FIGURES {
            assert_eq!(figure.profit(), figure.revenue - figure.expenses);
        }
        assert_eq!(MONTHLY_FIGURES[5].profit(), 29_000.0);
    }

    #[test]
    fn test_card_shape() {
        assert_eq!(KPI_CARDS.len(), 4);
        assert_eq!(KPI_CARDS[0].title, "Monthly Revenue");
        assert_eq!(KPI_CARDS[3].trend, Trend::Down);
    }
}
