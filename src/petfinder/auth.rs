use crate::errors::{AppError, AppResult, RequestError};
use crate::models::{AccessToken, Credentials};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges client credentials for a bearer token.
///
/// Sends a single form-encoded `client_credentials` grant to `token_url`.
///
/// # Errors
///
/// Returns `AuthError` wrapping:
/// - `Transport` if no response arrives
/// - `HttpStatus` for any status other than 200
/// - `Decode` if the body has no string `access_token`
///
/// Returns `UrlError` if `token_url` does not parse.
pub async fn authenticate(
    client: &reqwest::Client,
    token_url: &str,
    credentials: &Credentials,
) -> AppResult<AccessToken> {
    let token_url = Url::parse(token_url)?;

    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
    ];

    info!(endpoint = %token_url, "Requesting access token");
    let response = client
        .post(token_url)
        .form(&form)
        .send()
        .await
        .map_err(|e| AppError::AuthError(e.into()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AppError::AuthError(RequestError::HttpStatus {
            status: status.as_u16(),
        }));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::AuthError(e.into()))?;
    let token = parse_token_response(&body).map_err(AppError::AuthError)?;

    debug!("Access token received");
    Ok(token)
}

/// Decodes a token endpoint body into an [`AccessToken`].
pub fn parse_token_response(body: &str) -> Result<AccessToken, RequestError> {
    let response: TokenResponse = serde_json::from_str(body)?;
    if response.access_token.is_empty() {
        return Err(RequestError::Decode("empty access_token".to_string()));
    }
    Ok(AccessToken::new(response.access_token))
}
