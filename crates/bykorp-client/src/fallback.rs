//! Sample content shown while the API is unreachable
//!
//! Featured variants are derived from the full lists by `is_featured`.

use bykorp_common::{PortfolioItem, RecordId, Review, ServiceInfo};

const SAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";
const CDN_BASE: &str = "https://mocha-cdn.com/0199802e-9d4f-7614-ab21-0bfecd80f05c";

pub fn services() -> Vec<ServiceInfo> {
    let service = |id: i64, name: &str, description: &str, features: &str, price: &str| {
        ServiceInfo {
            id: RecordId::Int(id),
            name: name.to_string(),
            description: description.to_string(),
            price_starting: Some(price.to_string()),
            features: Some(features.to_string()),
            is_active: true,
            created_at: SAMPLE_TIMESTAMP.to_string(),
            updated_at: SAMPLE_TIMESTAMP.to_string(),
        }
    };

    vec![
        service(
            1,
            "Digital Marketing (Meta Ads)",
            "Boost your brand with targeted Meta advertising campaigns that drive real results.",
            "Campaign Strategy, Ad Creation, Performance Analytics, A/B Testing",
            "$800/month",
        ),
        service(
            2,
            "Social Media Management",
            "Grow your online presence with strategic content creation and community management.",
            "Content Planning, Daily Posting, Engagement Management, Analytics Reports",
            "$500/month",
        ),
        service(
            3,
            "Website Building",
            "Create stunning, responsive websites that convert visitors into customers.",
            "Custom Design, Mobile Optimization, SEO Setup, Analytics Integration",
            "$1,200",
        ),
        service(
            4,
            "AI Automations",
            "Streamline your business processes with intelligent automation solutions.",
            "Workflow Automation, Chatbot Integration, Process Optimization, Custom AI Solutions",
            "$600/month",
        ),
    ]
}

pub fn portfolio() -> Vec<PortfolioItem> {
    let item = |id: i64,
                title: &str,
                description: &str,
                category: &str,
                client: &str,
                completed: &str,
                technologies: &str,
                is_featured: bool| PortfolioItem {
        id: RecordId::Int(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        category: category.to_string(),
        image_url: Some(format!("{}/portfolio{}.jpg", CDN_BASE, id)),
        client_name: Some(client.to_string()),
        completion_date: Some(completed.to_string()),
        technologies: Some(technologies.to_string()),
        is_featured,
        created_at: SAMPLE_TIMESTAMP.to_string(),
        updated_at: SAMPLE_TIMESTAMP.to_string(),
    };

    vec![
        item(
            1,
            "E-commerce Platform Redesign",
            "Complete redesign and development of a modern e-commerce platform",
            "Website Building",
            "TechCorp Inc.",
            "2024-09-15",
            "React, Node.js, PostgreSQL",
            true,
        ),
        item(
            2,
            "Social Media Campaign - Fashion Brand",
            "Comprehensive social media campaign that increased engagement by 300%",
            "Social Media Management",
            "StyleHub",
            "2024-08-20",
            "Meta Business, Instagram, Facebook",
            true,
        ),
        item(
            3,
            "AI Chatbot Integration",
            "Custom AI chatbot solution for customer service automation",
            "AI Automations",
            "ServiceFirst",
            "2024-07-10",
            "OpenAI, Python, Flask",
            false,
        ),
    ]
}

pub fn featured_portfolio() -> Vec<PortfolioItem> {
    portfolio().into_iter().filter(|p| p.is_featured).collect()
}

pub fn reviews() -> Vec<Review> {
    let review = |id: i64, name: &str, company: &str, role: &str, text: &str| Review {
        id: RecordId::Int(id),
        name: name.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        review: text.to_string(),
        rating: 5,
        photo_url: Some(format!("{}/review{}.jpg", CDN_BASE, id)),
        is_featured: true,
        created_at: SAMPLE_TIMESTAMP.to_string(),
        updated_at: SAMPLE_TIMESTAMP.to_string(),
    };

    vec![
        review(
            1,
            "Sarah Johnson",
            "TechCorp Inc.",
            "Marketing Director",
            "Bykorp transformed our online presence completely. The team was professional, creative, and delivered beyond our expectations.",
        ),
        review(
            2,
            "Mike Chen",
            "StyleHub",
            "CEO",
            "The social media campaign they created for us increased our engagement by 300%. Highly recommended!",
        ),
    ]
}

pub fn featured_reviews() -> Vec<Review> {
    reviews().into_iter().filter(|r| r.is_featured).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(services().len(), 4);
        assert_eq!(portfolio().len(), 3);
        assert_eq!(reviews().len(), 2);
    }

    #[test]
    fn test_featured_filters() {
        let featured = featured_portfolio();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.is_featured));
        assert_eq!(featured_reviews().len(), 2);
    }

    #[test]
    fn test_image_urls() {
        assert_eq!(
            portfolio()[2].image_url.as_deref(),
            Some("https://mocha-cdn.com/0199802e-9d4f-7614-ab21-0bfecd80f05c/portfolio3.jpg")
        );
    }
}
