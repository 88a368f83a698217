use serde::{Deserialize, Serialize};

use crate::model::card::DigitalCard;

/// One page of the card listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPage {
    pub data: Vec<DigitalCard>,
    pub meta: PageMeta,
}

/// Pagination metadata returned next to a page of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of cards matching the query, across all pages.
    pub total: u64,
    /// Index of the last page (1-based); `0` when there are no results.
    pub last_page: u32,
}
