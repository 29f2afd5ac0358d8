use crate::errors::{AppError, AppResult, RequestError};
use crate::models::{AccessToken, Listing, ListingCollection};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Deserialize)]
struct ListingsResponse {
    animals: Vec<Listing>,
}

/// Fetches and decodes the listings at `url`.
///
/// Sends one GET with `Authorization: Bearer <token>`. An empty `animals`
/// array is a successful, empty collection.
///
/// # Errors
///
/// Returns `FetchError` wrapping:
/// - `Transport` if no response arrives
/// - `HttpStatus` for any status other than 200
/// - `Decode` if the body lacks a top-level `animals` array or does not decode
///
/// Returns `UrlError` if `url` does not parse.
pub async fn fetch_listings(
    client: &reqwest::Client,
    url: &str,
    token: &AccessToken,
) -> AppResult<ListingCollection> {
    let url = Url::parse(url)?;

    debug!(url = %url, "Fetching listings");
    let response = client
        .get(url)
        .bearer_auth(token.as_str())
        .send()
        .await
        .map_err(|e| AppError::FetchError(e.into()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AppError::FetchError(RequestError::HttpStatus {
            status: status.as_u16(),
        }));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::FetchError(e.into()))?;
    let listings = parse_listings_response(&body).map_err(AppError::FetchError)?;

    info!(listings = listings.len(), "Listings fetched");
    Ok(listings)
}

/// Decodes a listing endpoint body into a [`ListingCollection`].
pub fn parse_listings_response(body: &str) -> Result<ListingCollection, RequestError> {
    let response: ListingsResponse = serde_json::from_str(body)?;
    Ok(response.animals)
}
