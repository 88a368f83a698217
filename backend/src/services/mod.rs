//! HTTP endpoints served next to the embedded frontend.

pub mod config;
