//! Page-level helpers shared by the site's pages

use bykorp_common::{CATEGORY_ALL, PortfolioItem, Review, ServiceInfo, split_list};

/// Options of the contact form's service selector
pub const SERVICE_TYPES: &[&str] = &[
    "Digital Marketing (Meta Ads)",
    "Social Media Management",
    "Website Building",
    "AI Automations",
    "Consultation",
    "Other",
];

const HOME_SERVICES: usize = 4;
const HOME_PORTFOLIO_ITEMS: usize = 4;
const HOME_REVIEWS: usize = 6;

/// What the home page shows
#[derive(Clone, Debug, PartialEq)]
pub struct HomeContent {
    pub services: Vec<ServiceInfo>,
    pub featured_portfolio: Vec<PortfolioItem>,
    pub featured_reviews: Vec<Review>,
}

impl HomeContent {
    /// Cut each list down to what the home page displays
    pub fn new(
        mut services: Vec<ServiceInfo>,
        mut featured_portfolio: Vec<PortfolioItem>,
        mut featured_reviews: Vec<Review>,
    ) -> Self {
        services.truncate(HOME_SERVICES);
        featured_portfolio.truncate(HOME_PORTFOLIO_ITEMS);
        featured_reviews.truncate(HOME_REVIEWS);
        Self {
            services,
            featured_portfolio,
            featured_reviews,
        }
    }
}

/// `"All"` followed by each distinct category in first-seen order
pub fn portfolio_categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut categories = vec![CATEGORY_ALL.to_string()];
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Items in `category`; `"All"` keeps everything
pub fn filter_by_category<'a>(items: &'a [PortfolioItem], category: &str) -> Vec<&'a PortfolioItem> {
    items
        .iter()
        .filter(|item| category == CATEGORY_ALL || item.category == category)
        .collect()
}

pub fn service_features(service: &ServiceInfo) -> Vec<String> {
    service.features.as_deref().map(split_list).unwrap_or_default()
}

pub fn technologies(item: &PortfolioItem) -> Vec<String> {
    item.technologies.as_deref().map(split_list).unwrap_or_default()
}
