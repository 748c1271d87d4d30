//! NHL web API access: HTTP client and response payloads

pub mod http;
pub mod types;

pub use http::NhlClient;
pub use types::{PlayerLanding, TeamRoster};
