use crate::constants::{
    CLIENT_ID_ENV, CLIENT_SECRET_ENV, LISTING_URL, ORGANIZATION_ID, TOKEN_URL,
};
use crate::errors::{AppError, AppResult};
use crate::models::Credentials;
use crate::petfinder::QueryUrlBuilder;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

/// Resolved configuration with all values filled in.
///
/// Every key is optional in the TOML file; missing keys fall back to the
/// public Petfinder endpoints. Credentials may live here or in the
/// environment (see [`ResolvedConfig::credentials`]).
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// OAuth2 token endpoint
    pub token_url: String,
    /// Animal listing endpoint, without query parameters
    pub listing_url: String,
    /// Petfinder organization identifier the queries are restricted to
    pub organization: String,
    /// OAuth2 client id; overridden by `PETFINDER_CLIENT_ID`
    pub client_id: Option<String>,
    /// OAuth2 client secret; overridden by `PETFINDER_CLIENT_SECRET`
    pub client_secret: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            token_url: TOKEN_URL.to_string(),
            listing_url: LISTING_URL.to_string(),
            organization: ORGANIZATION_ID.to_string(),
            client_id: None,
            client_secret: None,
        }
    }
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("token_url", &self.token_url)
            .field("listing_url", &self.listing_url)
            .field("organization", &self.organization)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `ConfigError` if the
    /// TOML is malformed, contains unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that both endpoints are absolute URLs and the organization is set.
    pub fn validate(&self) -> AppResult<()> {
        for (key, value) in [("token_url", &self.token_url), ("listing_url", &self.listing_url)] {
            Url::parse(value)
                .map_err(|e| AppError::ConfigError(format!("{key} is not a valid URL: {e}")))?;
        }
        if self.organization.trim().is_empty() {
            return Err(AppError::ConfigError(
                "organization must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// URL builder for the configured endpoint and organization.
    pub fn query_builder(&self) -> QueryUrlBuilder {
        QueryUrlBuilder::new(self.listing_url.as_str(), self.organization.as_str())
    }

    /// Resolves credentials from the process environment, falling back to the file.
    pub fn credentials(&self) -> AppResult<Credentials> {
        self.credentials_with(|key| std::env::var(key).ok())
    }

    /// Resolves credentials using `lookup` for environment values.
    ///
    /// Environment values win over file values. Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` naming the first value that is absent.
    pub fn credentials_with<F>(&self, lookup: F) -> AppResult<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = resolve_value(&lookup, CLIENT_ID_ENV, self.client_id.as_deref())
            .ok_or_else(|| {
                AppError::MissingCredentials(format!(
                    "set {CLIENT_ID_ENV} or client_id in the config file"
                ))
            })?;
        let client_secret =
            resolve_value(&lookup, CLIENT_SECRET_ENV, self.client_secret.as_deref()).ok_or_else(
                || {
                    AppError::MissingCredentials(format!(
                        "set {CLIENT_SECRET_ENV} or client_secret in the config file"
                    ))
                },
            )?;

        Ok(Credentials::new(client_id, client_secret))
    }
}

fn resolve_value<F>(lookup: &F, env_key: &str, file_value: Option<&str>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(env_key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            file_value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}
