//! HTTP client for the digital cards REST API.

mod cards;
mod error;

pub use cards::CardsApi;
pub use error::ApiError;
