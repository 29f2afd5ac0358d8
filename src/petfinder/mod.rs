//! Petfinder API pipeline: query URL construction, token exchange and listing retrieval.
//!
//! The main entry points are [`QueryUrlBuilder`], [`authenticate`] and [`fetch_listings`].
//! The access token is always passed explicitly; nothing here holds state between calls.

mod auth;
mod listings;
mod query_url;

// Re-export public API
pub use auth::{authenticate, parse_token_response};
pub use listings::{fetch_listings, parse_listings_response};
pub use query_url::{format_timestamp, window_start, QueryUrlBuilder};
