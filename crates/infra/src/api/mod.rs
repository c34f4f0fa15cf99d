//! HTTP adapters for the officer directory, tappal store and movement trail

pub mod client;
pub mod errors;
pub mod movements;
pub mod officers;
mod shape;
pub mod tappals;

pub use client::ApiClient;
pub use errors::{ApiError, ApiErrorCategory};
pub use movements::{ForwardRequest, HttpMovementLog};
pub use officers::HttpOfficerDirectory;
pub use tappals::HttpTappalStore;

/// Append percent-encoded path segments to `base`.
pub(crate) fn resource_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}
