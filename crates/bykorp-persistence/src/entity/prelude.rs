//! `SeaORM` entity prelude

pub use super::portfolio_item::Entity as PortfolioItem;
pub use super::reservation::Entity as Reservation;
pub use super::review::Entity as Review;
pub use super::service::Entity as Service;
