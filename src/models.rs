use crate::constants::*;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Relative posting-date window for a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Today,
    Last3Days,
}

impl DateWindow {
    /// Parses a window name, ignoring case and surrounding whitespace.
    ///
    /// Unknown names yield `None`; callers treat that as "no window" rather
    /// than an error.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();

        if TODAY_ALIASES.contains(&lower.as_str()) {
            Some(Self::Today)
        } else if LAST_3_DAYS_ALIASES.contains(&lower.as_str()) {
            Some(Self::Last3Days)
        } else {
            None
        }
    }

    /// Number of calendar days to step back from today.
    pub fn offset_days(&self) -> u64 {
        match self {
            Self::Today => 0,
            Self::Last3Days => 2,
        }
    }
}

/// One of the three filterable listing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Age,
    Size,
    Gender,
}

impl FilterCategory {
    /// Tokens the API accepts for this category.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Age => AGE_OPTIONS,
            Self::Size => SIZE_OPTIONS,
            Self::Gender => GENDER_OPTIONS,
        }
    }

    /// Query parameter name.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Size => "size",
            Self::Gender => "gender",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Size => "Size",
            Self::Gender => "Gender",
        }
    }

    /// Splits comma-separated input and keeps the tokens valid for this category.
    ///
    /// Tokens are trimmed and matched case-insensitively, then stored in their
    /// canonical lowercase form. Invalid tokens and repeats are dropped
    /// without error; order of first appearance is kept.
    pub fn select(&self, input: &str) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        for token in input.split(',').map(str::trim) {
            if let Some(option) = self
                .options()
                .iter()
                .find(|option| option.eq_ignore_ascii_case(token))
            {
                if !selected.iter().any(|s| s == option) {
                    selected.push((*option).to_string());
                }
            }
        }
        selected
    }
}

/// Caller-chosen age/size/gender values narrowing a listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub ages: Vec<String>,
    pub sizes: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterSelection {
    /// Builds a selection from raw comma-separated input for each category.
    pub fn from_input(ages: &str, sizes: &str, genders: &str) -> Self {
        Self {
            ages: FilterCategory::Age.select(ages),
            sizes: FilterCategory::Size.select(sizes),
            genders: FilterCategory::Gender.select(genders),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty() && self.sizes.is_empty() && self.genders.is_empty()
    }

    /// Comma-joined values for one category (empty string when none selected).
    pub fn joined(&self, category: FilterCategory) -> String {
        match category {
            FilterCategory::Age => self.ages.join(","),
            FilterCategory::Size => self.sizes.join(","),
            FilterCategory::Gender => self.genders.join(","),
        }
    }
}

/// OAuth2 client id and secret used for a single token exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token returned by the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Decodes `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Primary and secondary breed of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Breeds {
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary: String,
    pub secondary: Option<String>,
}

/// One adoptable-animal record. Unknown fields in the response are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breeds: Breeds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// Listings in the order the API returned them.
pub type ListingCollection = Vec<Listing>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_window_aliases() {
        assert_eq!(DateWindow::parse("today"), Some(DateWindow::Today));
        assert_eq!(DateWindow::parse("TODAY"), Some(DateWindow::Today));
        assert_eq!(DateWindow::parse("3days"), Some(DateWindow::Last3Days));
        assert_eq!(DateWindow::parse("3DAYS"), Some(DateWindow::Last3Days));
        assert_eq!(
            DateWindow::parse(" last-3-days "),
            Some(DateWindow::Last3Days)
        );
    }

    #[test]
    fn test_date_window_unknown_is_none() {
        assert_eq!(DateWindow::parse("yesterday"), None);
        assert_eq!(DateWindow::parse(""), None);
    }

    #[test]
    fn test_date_window_offsets() {
        assert_eq!(DateWindow::Today.offset_days(), 0);
        assert_eq!(DateWindow::Last3Days.offset_days(), 2);
    }

    #[test]
    fn test_select_drops_invalid_tokens() {
        let ages = FilterCategory::Age.select("baby, puppy ,senior");
        assert_eq!(ages, vec!["baby", "senior"]);
    }

    #[test]
    fn test_select_is_case_insensitive_and_canonical() {
        let sizes = FilterCategory::Size.select("Small,XLARGE");
        assert_eq!(sizes, vec!["small", "xlarge"]);
    }

    #[test]
    fn test_select_removes_duplicates_keeping_first() {
        let genders = FilterCategory::Gender.select("female,male,FEMALE");
        assert_eq!(genders, vec!["female", "male"]);
    }

    #[test]
    fn test_select_empty_input() {
        assert!(FilterCategory::Age.select("").is_empty());
        assert!(FilterCategory::Age.select(" , ,").is_empty());
    }

    #[test]
    fn test_filter_selection_from_input() {
        let selection = FilterSelection::from_input("adult", "large,giant", "male");
        assert_eq!(selection.ages, vec!["adult"]);
        assert_eq!(selection.sizes, vec!["large"]);
        assert_eq!(selection.genders, vec!["male"]);
        assert!(!selection.is_empty());
        assert_eq!(selection.joined(FilterCategory::Size), "large");
    }

    #[test]
    fn test_filter_selection_empty() {
        let selection = FilterSelection::from_input("", "nope", "");
        assert!(selection.is_empty());
        assert_eq!(selection.joined(FilterCategory::Age), "");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("my-id", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("my-id"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_access_token_debug_redacts_value() {
        let token = AccessToken::new("tok123");
        assert_eq!(token.as_str(), "tok123");
        assert!(!format!("{token:?}").contains("tok123"));
    }

    #[test]
    fn test_listing_decodes_partial_record() {
        let listing: Listing = serde_json::from_str(r#"{"id": 1, "name": "Dog"}"#).unwrap();
        assert_eq!(listing.id, 1);
        assert_eq!(listing.name, "Dog");
        assert!(listing.url.is_empty());
        assert!(listing.breeds.secondary.is_none());
    }

    #[test]
    fn test_listing_null_fields_decode_as_empty() {
        let json =
            r#"{"id":1,"name":"Dog","size":null,"breeds":{"primary":null,"secondary":null}}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.name, "Dog");
        assert_eq!(listing.size, "");
        assert_eq!(listing.breeds.primary, "");
        assert_eq!(listing.breeds.secondary, None);
    }

    #[test]
    fn test_listing_null_breeds_and_id() {
        let json = r#"{"id":null,"name":null,"age":"Senior","breeds":null,"url":null}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, 0);
        assert_eq!(listing.age, "Senior");
        assert_eq!(listing.breeds, Breeds::default());
        assert!(listing.url.is_empty());
    }

    #[test]
    fn test_listing_ignores_unknown_fields_and_null_secondary() {
        let json = r#"{
            "id": 71234,
            "organization_id": "OR208",
            "name": "Biscuit",
            "age": "Young",
            "gender": "Female",
            "size": "Medium",
            "breeds": {"primary": "Labrador Retriever", "secondary": null, "mixed": true},
            "url": "https://www.petfinder.com/dog/biscuit-71234",
            "photos": []
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.name, "Biscuit");
        assert_eq!(listing.breeds.primary, "Labrador Retriever");
        assert_eq!(listing.breeds.secondary, None);
    }
}
