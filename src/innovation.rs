// 💡 Innovation Catalog - Static opportunity reference data
//
// A fixed set of growth opportunities plus category filtering. Nothing
// here is computed from the aggregate; it is curated display content.

use serde::Serialize;

// ============================================================================
// RATINGS & CATEGORIES
// ============================================================================

/// Qualitative impact/effort rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InnovationCategory {
    Technology,
    BusinessModel,
    Operations,
    Sustainability,
    HumanResources,
}

impl InnovationCategory {
    /// All categories, in filter-bar order.
    pub const ALL: [InnovationCategory; 5] = [
        InnovationCategory::Technology,
        InnovationCategory::BusinessModel,
        InnovationCategory::Operations,
        InnovationCategory::Sustainability,
        InnovationCategory::HumanResources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InnovationCategory::Technology => "Technology",
            InnovationCategory::BusinessModel => "Business Model",
            InnovationCategory::Operations => "Operations",
            InnovationCategory::Sustainability => "Sustainability",
            InnovationCategory::HumanResources => "Human Resources",
        }
    }
}

/// The filter bar: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(InnovationCategory),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Cycle forward through All + each category.
    pub fn next(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(InnovationCategory::ALL[0]),
            CategoryFilter::Only(category) => {
                let idx = InnovationCategory::ALL.iter().position(|c| c == category);
                match idx {
                    Some(i) if i + 1 < InnovationCategory::ALL.len() => {
                        CategoryFilter::Only(InnovationCategory::ALL[i + 1])
                    }
                    _ => CategoryFilter::All,
                }
            }
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            CategoryFilter::All => {
                CategoryFilter::Only(InnovationCategory::ALL[InnovationCategory::ALL.len() - 1])
            }
            CategoryFilter::Only(category) => {
                let idx = InnovationCategory::ALL.iter().position(|c| c == category);
                match idx {
                    Some(0) | None => CategoryFilter::All,
                    Some(i) => CategoryFilter::Only(InnovationCategory::ALL[i - 1]),
                }
            }
        }
    }
}

// ============================================================================
// OPPORTUNITY RECORDS
// ============================================================================

/// One curated growth opportunity.
#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub title: &'static str,
    pub category: InnovationCategory,
    pub description: &'static str,
    pub impact: Rating,
    pub effort: Rating,
    pub roi_pct: u32,
    pub timeframe: &'static str,
    pub tags: &'static [&'static str],
    pub trend: &'static str,
}

/// The catalog, seeded with the fixed opportunity set.
pub struct InnovationCatalog {
    opportunities: Vec<Opportunity>,
}

impl InnovationCatalog {
    pub fn new() -> Self {
        let mut catalog = InnovationCatalog {
            opportunities: Vec::new(),
        };
        catalog.register_default_opportunities();
        catalog
    }

    fn register_default_opportunities(&mut self) {
        self.opportunities = vec![
            Opportunity {
                title: "AI-Powered Customer Analytics",
                category: InnovationCategory::Technology,
                description: "Implement machine learning to analyze customer behavior patterns and predict purchasing decisions.",
                impact: Rating::High,
                effort: Rating::Medium,
                roi_pct: 250,
                timeframe: "3-6 months",
                tags: &["AI", "Analytics", "Customer Experience"],
                trend: "Growing 45% YoY in your industry",
            },
            Opportunity {
                title: "Subscription Revenue Model",
                category: InnovationCategory::BusinessModel,
                description: "Transform one-time purchases into recurring revenue streams through subscription offerings.",
                impact: Rating::High,
                effort: Rating::High,
                roi_pct: 180,
                timeframe: "6-12 months",
                tags: &["Recurring Revenue", "Customer Retention", "Scalability"],
                trend: "Subscription businesses grow 5x faster",
            },
            Opportunity {
                title: "Automated Inventory Management",
                category: InnovationCategory::Operations,
                description: "Deploy IoT sensors and predictive algorithms to optimize inventory levels and reduce waste.",
                impact: Rating::Medium,
                effort: Rating::Medium,
                roi_pct: 120,
                timeframe: "2-4 months",
                tags: &["IoT", "Automation", "Cost Reduction"],
                trend: "Reduces inventory costs by 20-30%",
            },
            Opportunity {
                title: "Sustainable Packaging Initiative",
                category: InnovationCategory::Sustainability,
                description: "Switch to eco-friendly packaging materials to appeal to environmentally conscious consumers.",
                impact: Rating::Medium,
                effort: Rating::Low,
                roi_pct: 95,
                timeframe: "1-3 months",
                tags: &["Sustainability", "Brand Image", "Cost Savings"],
                trend: "73% of consumers prefer sustainable brands",
            },
            Opportunity {
                title: "Virtual Reality Product Demos",
                category: InnovationCategory::Technology,
                description: "Create immersive VR experiences to showcase products and increase conversion rates.",
                impact: Rating::High,
                effort: Rating::High,
                roi_pct: 200,
                timeframe: "4-8 months",
                tags: &["VR", "Sales", "Innovation"],
                trend: "VR commerce market growing 30% annually",
            },
            Opportunity {
                title: "Employee Wellness Program",
                category: InnovationCategory::HumanResources,
                description: "Implement comprehensive wellness initiatives to boost productivity and reduce turnover.",
                impact: Rating::Medium,
                effort: Rating::Low,
                roi_pct: 150,
                timeframe: "1-2 months",
                tags: &["Employee Satisfaction", "Productivity", "Retention"],
                trend: "Reduces healthcare costs by 25%",
            },
        ];
    }

    pub fn all(&self) -> &[Opportunity] {
        &self.opportunities
    }

    /// Filter the catalog. `All` returns everything in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Opportunity> {
        self.opportunities
            .iter()
            .filter(|o| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => o.category == category,
            })
            .collect()
    }
}

impl Default for InnovationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// STATIC DISPLAY CONTENT
// ============================================================================

/// Industry-insight blurbs for the banner.
pub const INDUSTRY_INSIGHTS: [(&str, &str); 3] = [
    (
        "R&D Investment Trend",
        "Companies in your sector increased R&D spending by 23% this year",
    ),
    (
        "Digital Transformation",
        "85% of businesses are adopting AI-powered solutions",
    ),
    (
        "Sustainability Focus",
        "Green initiatives show 15% higher customer loyalty",
    ),
];

/// Three-phase implementation roadmap.
pub const ROADMAP: [(&str, &str); 3] = [
    (
        "Quick Wins (1-3 months)",
        "Start with low-effort, high-impact initiatives like sustainable packaging and employee wellness programs.",
    ),
    (
        "Medium-term Projects (3-6 months)",
        "Implement AI-powered analytics and automated inventory management systems.",
    ),
    (
        "Long-term Transformation (6+ months)",
        "Launch subscription models and VR product demonstrations for competitive advantage.",
    ),
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_opportunities() {
        let catalog = InnovationCatalog::new();
        assert_eq!(catalog.all().len(), 6);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = InnovationCatalog::new();
        assert_eq!(catalog.filtered(CategoryFilter::All).len(), 6);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = InnovationCatalog::new();

        let tech = catalog.filtered(CategoryFilter::Only(InnovationCategory::Technology));
        assert_eq!(tech.len(), 2);
        assert!(tech.iter().all(|o| o.category == InnovationCategory::Technology));

        let hr = catalog.filtered(CategoryFilter::Only(InnovationCategory::HumanResources));
        assert_eq!(hr.len(), 1);
        assert_eq!(hr[0].title, "Employee Wellness Program");
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = InnovationCatalog::new();
        let tech = catalog.filtered(CategoryFilter::Only(InnovationCategory::Technology));

        assert_eq!(tech[0].title, "AI-Powered Customer Analytics");
        assert_eq!(tech[1].title, "Virtual Reality Product Demos");
    }

    #[test]
    fn test_every_category_is_covered() {
        let catalog = InnovationCatalog::new();
        for category in InnovationCategory::ALL {
            assert!(
                !catalog.filtered(CategoryFilter::Only(category)).is_empty(),
                "no opportunity for {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_filter_cycling_round_trip() {
        // All → each category → back to All
        let mut filter = CategoryFilter::All;
        for _ in 0..=InnovationCategory::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);

        assert_eq!(
            CategoryFilter::All.previous(),
            CategoryFilter::Only(InnovationCategory::HumanResources)
        );
    }
}
