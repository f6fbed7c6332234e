//! `SeaORM` entity definitions

pub mod prelude;

pub mod portfolio_item;
pub mod reservation;
pub mod review;
pub mod service;
