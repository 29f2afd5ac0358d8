//! rescue-dogs library
//!
//! This crate provides the core functionality for the `rescue-dogs` binary.
//! The crate root only declares modules; each module carries its own tests.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different parts of the listing pipeline:
//!
//! - [`petfinder`] - Builds query URLs, exchanges credentials for a token and fetches listings
//! - [`cli`] - Command-line interface for selecting queries and running them
//! - [`config`] - Endpoint settings and credential resolution (TOML file and environment)
//! - [`models`] - Date windows, filter selections, credentials and listing records
//! - [`ui`] - Console rendering of listings
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! Authenticate once, build a URL for the query you want, then fetch and print:
//!
//! ```no_run
//! use rescue_dogs::{config::ResolvedConfig, errors::AppResult, models::DateWindow, petfinder, ui};
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let credentials = config.credentials()?;
//!
//! let client = reqwest::Client::new();
//! let token = petfinder::authenticate(&client, &config.token_url, &credentials).await?;
//!
//! let url = config.query_builder().build_window_url(Some(DateWindow::Today));
//! let listings = petfinder::fetch_listings(&client, &url, &token).await?;
//! ui::print_listings(&listings, "No new dogs today :(")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod petfinder;
pub mod ui;
pub mod utils;
