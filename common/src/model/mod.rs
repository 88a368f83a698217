pub mod card;
pub mod config;
pub mod page;
