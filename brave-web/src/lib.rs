//! Web search acquisition and presentation.
//!
//! - Brave Search API client and request parameters (`brave`)
//! - Normalization of the upstream body into a stable shape (`normalize`)
//! - Text / JSON / raw rendering (`render`)

pub mod brave;
pub mod normalize;
pub mod render;
