//! Brave Search API: request parameters and the HTTP client.

mod client;
mod types;

pub use client::{BRAVE_API_BASE, BraveApi, WEB_SEARCH_PATH};
pub use types::{DEFAULT_COUNT, WebSearchRequest};
