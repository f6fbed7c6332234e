//! Sample catalogue inserted into an empty store
//!
//! Every backend is seeded with the same services, portfolio items, and
//! reviews. Seeding is keyed on the services collection: if it holds any row,
//! nothing is inserted.

use bykorp_common::{NewPortfolioItem, NewReview, NewService};
use chrono::NaiveDate;
use tracing::info;

use crate::traits::PersistenceService;

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Services offered by the agency
pub fn sample_services() -> Vec<NewService> {
    vec![
        NewService {
            name: "Digital Marketing (Meta Ads)".to_string(),
            description: "Comprehensive digital marketing campaigns with Facebook and Instagram advertising to boost your brand visibility and drive conversions.".to_string(),
            price_starting: Some("Starting at $1,500/month".to_string()),
            features: list(&[
                "Campaign Strategy",
                "Ad Creation",
                "Audience Targeting",
                "Performance Analytics",
                "Monthly Reports",
            ]),
            is_active: true,
        },
        NewService {
            name: "Social Media Management".to_string(),
            description: "Complete social media presence management across all platforms with content creation, scheduling, and community engagement.".to_string(),
            price_starting: Some("Starting at $800/month".to_string()),
            features: list(&[
                "Content Creation",
                "Post Scheduling",
                "Community Management",
                "Analytics",
                "Brand Voice Development",
            ]),
            is_active: true,
        },
        NewService {
            name: "Website Building".to_string(),
            description: "Custom website development with modern design principles, responsive layouts, and optimized performance.".to_string(),
            price_starting: Some("Starting at $3,000".to_string()),
            features: list(&[
                "Custom Design",
                "Responsive Layout",
                "SEO Optimization",
                "Content Management",
                "Analytics Integration",
            ]),
            is_active: true,
        },
        NewService {
            name: "AI Automations".to_string(),
            description: "Cutting-edge AI solutions to streamline your business processes and enhance customer experience.".to_string(),
            price_starting: Some("Starting at $2,000".to_string()),
            features: list(&[
                "Process Automation",
                "Chatbot Development",
                "Data Analysis",
                "Custom AI Solutions",
                "Integration Support",
            ]),
            is_active: true,
        },
    ]
}

/// Showcased client projects
pub fn sample_portfolio_items() -> Vec<NewPortfolioItem> {
    let item = |title: &str,
                description: &str,
                category: &str,
                client: &str,
                date: (i32, u32, u32),
                technologies: &[&str]| NewPortfolioItem {
        title: title.to_string(),
        description: Some(description.to_string()),
        category: category.to_string(),
        image_url: None,
        client_name: Some(client.to_string()),
        completion_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        technologies: list(technologies),
        is_featured: true,
    };

    vec![
        item(
            "E-commerce Growth Campaign",
            "Increased online sales by 340% through targeted Meta advertising and conversion optimization.",
            "Digital Marketing",
            "TechStyle Co.",
            (2024, 8, 15),
            &["Meta Ads", "Google Analytics", "Conversion Tracking"],
        ),
        item(
            "Brand Social Media Transformation",
            "Complete brand overhaul across social platforms resulting in 500% follower growth.",
            "Social Media",
            "GreenLife Foods",
            (2024, 7, 22),
            &["Instagram", "TikTok", "LinkedIn", "Canva"],
        ),
        item(
            "SaaS Platform Website",
            "Modern, conversion-focused website for B2B SaaS company with integrated dashboard.",
            "Website Building",
            "CloudSync Solutions",
            (2024, 9, 10),
            &["React", "Tailwind", "TypeScript", "Cloudflare"],
        ),
        item(
            "Customer Service AI Bot",
            "AI-powered customer service automation reducing response time by 80%.",
            "AI Automation",
            "RetailMax",
            (2024, 6, 30),
            &["OpenAI API", "Webhooks", "CRM Integration"],
        ),
    ]
}

/// Client testimonials
pub fn sample_reviews() -> Vec<NewReview> {
    let review = |name: &str, company: &str, role: &str, text: &str, photo: &str| NewReview {
        name: name.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        review: text.to_string(),
        rating: 5,
        photo_url: Some(format!(
            "https://images.unsplash.com/{}?w=150&h=150&fit=crop&crop=face",
            photo
        )),
        is_featured: true,
    };

    vec![
        review(
            "Sarah Johnson",
            "TechFlow Solutions",
            "Marketing Director",
            "Bykorp transformed our digital presence completely. Our sales increased by 340% in just 6 months! Their team is incredibly professional and results-driven.",
            "photo-1494790108755-2616b612b8da",
        ),
        review(
            "Michael Chen",
            "GreenLife Foods",
            "CEO & Founder",
            "Their social media strategy helped us reach a whole new audience. Professional, creative, and results-driven. I couldn't be happier with the outcome.",
            "photo-1472099645785-5658abf4ff4e",
        ),
        review(
            "Emily Rodriguez",
            "CloudSync Solutions",
            "Chief Technology Officer",
            "The website they built for us perfectly captures our brand and converts visitors into customers. The attention to detail is exceptional.",
            "photo-1438761681033-6461ffad8d80",
        ),
        review(
            "David Park",
            "InnovateLab",
            "Head of Operations",
            "Working with Bykorp was a game-changer for our business. Their AI automation solutions saved us countless hours and improved our efficiency dramatically.",
            "photo-1507003211169-0a1dd7228f2d",
        ),
        review(
            "Lisa Thompson",
            "MarketPro Agency",
            "Creative Director",
            "The team at Bykorp delivered beyond our expectations. Their creative approach and strategic thinking helped us stand out in a crowded market.",
            "photo-1534528741775-53994a69daeb",
        ),
        review(
            "James Wilson",
            "DigitalFirst",
            "VP of Marketing",
            "Outstanding results! Our Meta ads performance improved by 280% within the first quarter. Bykorp truly understands digital marketing.",
            "photo-1500648767791-00dcc994a43e",
        ),
    ]
}

/// Insert the sample catalogue when the store has no services yet.
///
/// Returns `true` when data was inserted.
pub async fn seed_sample_data(persistence: &dyn PersistenceService) -> anyhow::Result<bool> {
    if persistence.service_count().await? > 0 {
        info!("Database already contains data, skipping sample data insertion");
        return Ok(false);
    }

    for service in sample_services() {
        persistence.service_create(&service).await?;
    }
    for item in sample_portfolio_items() {
        persistence.portfolio_create(&item).await?;
    }
    for review in sample_reviews() {
        persistence.review_create(&review).await?;
    }

    info!(
        "Sample data inserted into {} storage",
        persistence.storage_mode()
    );
    Ok(true)
}
