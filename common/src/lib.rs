//! Wire model shared by the admin frontend and the host backend.

pub mod model;
pub mod requests;
