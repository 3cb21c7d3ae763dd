// 📈 Revenue Projector - Compound growth over three scenarios
//
// Pure function of (base revenue, horizon, growth rates, start year).
// The start year comes from the caller so the math stays deterministic
// under test; the shell passes the current calendar year.

use serde::Serialize;

/// Base revenue assumed when the company has not entered one yet.
pub const DEFAULT_BASE_REVENUE: f64 = 500_000.0;

// ============================================================================
// INPUTS
// ============================================================================

/// Annual growth percentages for the three scenarios.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GrowthAssumptions {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

impl Default for GrowthAssumptions {
    fn default() -> Self {
        GrowthAssumptions {
            conservative: 5.0,
            moderate: 12.0,
            aggressive: 20.0,
        }
    }
}

/// How far out to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectionHorizon {
    FiveYears,
    TenYears,
    FifteenYears,
}

impl ProjectionHorizon {
    pub fn years(&self) -> u32 {
        match self {
            ProjectionHorizon::FiveYears => 5,
            ProjectionHorizon::TenYears => 10,
            ProjectionHorizon::FifteenYears => 15,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ProjectionHorizon::FiveYears => ProjectionHorizon::TenYears,
            ProjectionHorizon::TenYears => ProjectionHorizon::FifteenYears,
            ProjectionHorizon::FifteenYears => ProjectionHorizon::FiveYears,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            ProjectionHorizon::FiveYears => ProjectionHorizon::FifteenYears,
            ProjectionHorizon::TenYears => ProjectionHorizon::FiveYears,
            ProjectionHorizon::FifteenYears => ProjectionHorizon::TenYears,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProjectionHorizon::FiveYears => "5 Years",
            ProjectionHorizon::TenYears => "10 Years",
            ProjectionHorizon::FifteenYears => "15 Years",
        }
    }
}

impl Default for ProjectionHorizon {
    fn default() -> Self {
        ProjectionHorizon::FiveYears
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// One projected year, all three scenarios, rounded to whole units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

/// Effective projection base: the entered revenue, or the 500,000
/// default when none has been entered yet.
pub fn effective_base(current_revenue: f64) -> f64 {
    if current_revenue == 0.0 {
        DEFAULT_BASE_REVENUE
    } else {
        current_revenue
    }
}

/// Project revenue for offsets 0..=horizon. Offset 0 is the base itself
/// for every scenario.
pub fn project(
    current_revenue: f64,
    horizon: ProjectionHorizon,
    assumptions: &GrowthAssumptions,
    start_year: i32,
) -> Vec<ProjectionPoint> {
    let base = effective_base(current_revenue);

    (0..=horizon.years())
        .map(|offset| ProjectionPoint {
            year: start_year + offset as i32,
            conservative: compound(base, assumptions.conservative, offset),
            moderate: compound(base, assumptions.moderate, offset),
            aggressive: compound(base, assumptions.aggressive, offset),
        })
        .collect()
}

fn compound(base: f64, rate_pct: f64, offset: u32) -> f64 {
    (base * (1.0 + rate_pct / 100.0).powi(offset as i32)).round()
}

// ============================================================================
// KEY PROJECTIONS
// ============================================================================

/// Summary figures for the insights panel: moderate value at year 5,
/// moderate value at year min(10, horizon), and the moderate CAGR
/// (the rate itself under constant compounding).
#[derive(Debug, Clone, Serialize)]
pub struct KeyProjections {
    pub five_year_moderate: f64,
    pub ten_year_moderate: f64,
    pub moderate_cagr_pct: f64,
}

impl KeyProjections {
    pub fn from_points(points: &[ProjectionPoint], assumptions: &GrowthAssumptions) -> Self {
        let last = points.len().saturating_sub(1);
        let at = |offset: usize| points.get(offset.min(last)).map(|p| p.moderate).unwrap_or(0.0);

        KeyProjections {
            five_year_moderate: at(5),
            ten_year_moderate: at(10),
            moderate_cagr_pct: assumptions.moderate,
        }
    }
}

/// Static caveats shown beside the projection chart.
pub const RISK_FACTORS: [&str; 3] = [
    "Market volatility may impact growth rates",
    "Economic downturns could reduce projections by 15-30%",
    "Industry disruption may require strategy pivots",
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_zero_equals_base() {
        let points = project(
            620_000.0,
            ProjectionHorizon::FiveYears,
            &GrowthAssumptions::default(),
            2026,
        );

        assert_eq!(points[0].year, 2026);
        assert_eq!(points[0].conservative, 620_000.0);
        assert_eq!(points[0].moderate, 620_000.0);
        assert_eq!(points[0].aggressive, 620_000.0);
    }

    #[test]
    fn test_point_count_is_horizon_plus_one() {
        let assumptions = GrowthAssumptions::default();
        assert_eq!(project(1.0, ProjectionHorizon::FiveYears, &assumptions, 2026).len(), 6);
        assert_eq!(project(1.0, ProjectionHorizon::TenYears, &assumptions, 2026).len(), 11);
        assert_eq!(project(1.0, ProjectionHorizon::FifteenYears, &assumptions, 2026).len(), 16);
    }

    #[test]
    fn test_moderate_five_year_example() {
        // 500,000 × 1.12^5 = 881,170.57 → 881,171
        let points = project(
            500_000.0,
            ProjectionHorizon::FiveYears,
            &GrowthAssumptions::default(),
            2026,
        );

        assert_eq!(points[5].moderate, 881_171.0);
    }

    #[test]
    fn test_final_offset_matches_formula() {
        let assumptions = GrowthAssumptions {
            conservative: 3.0,
            moderate: 8.5,
            aggressive: 17.0,
        };
        let base = 240_000.0;
        let points = project(base, ProjectionHorizon::TenYears, &assumptions, 2026);

        let expected = (base * (1.0_f64 + 0.085).powi(10)).round();
        assert_eq!(points[10].moderate, expected);
    }

    #[test]
    fn test_zero_revenue_uses_default_base() {
        let points = project(
            0.0,
            ProjectionHorizon::FiveYears,
            &GrowthAssumptions::default(),
            2026,
        );

        assert_eq!(points[0].moderate, DEFAULT_BASE_REVENUE);
    }

    #[test]
    fn test_horizon_cycling() {
        assert_eq!(ProjectionHorizon::FiveYears.next(), ProjectionHorizon::TenYears);
        assert_eq!(ProjectionHorizon::FifteenYears.next(), ProjectionHorizon::FiveYears);
        assert_eq!(ProjectionHorizon::FiveYears.previous(), ProjectionHorizon::FifteenYears);
    }

    #[test]
    fn test_key_projections_clamp_to_horizon() {
        let assumptions = GrowthAssumptions::default();
        let points = project(500_000.0, ProjectionHorizon::FiveYears, &assumptions, 2026);
        let key = KeyProjections::from_points(&points, &assumptions);

        assert_eq!(key.five_year_moderate, 881_171.0);
        // Horizon is 5, so the "10-year" figure clamps to the last point
        assert_eq!(key.ten_year_moderate, 881_171.0);
        assert_eq!(key.moderate_cagr_pct, 12.0);
    }

    #[test]
    fn test_key_projections_ten_year_horizon() {
        let assumptions = GrowthAssumptions::default();
        let points = project(500_000.0, ProjectionHorizon::TenYears, &assumptions, 2026);
        let key = KeyProjections::from_points(&points, &assumptions);

        assert_eq!(key.five_year_moderate, 881_171.0);
        assert_eq!(key.ten_year_moderate, points[10].moderate);
    }
}
