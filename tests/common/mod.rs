//! Common test utilities for integration tests

use mockito::{Mock, Server};

#[allow(dead_code)]
pub const TOKEN_PATH: &str = "/v2/oauth2/token";
#[allow(dead_code)]
pub const LISTING_PATH: &str = "/v2/animals";

/// Token endpoint body with a usable token
#[allow(dead_code)]
pub const TOKEN_BODY: &str =
    r#"{"token_type":"Bearer","expires_in":3600,"access_token":"tok123"}"#;

/// Listing response with two full records and a pagination block
#[allow(dead_code)]
pub const TWO_DOGS_BODY: &str = r#"{
  "animals": [
    {
      "id": 70001,
      "organization_id": "OR208",
      "type": "Dog",
      "name": "Biscuit",
      "age": "Young",
      "gender": "Female",
      "size": "Medium",
      "breeds": {"primary": "Labrador Retriever", "secondary": "Pit Bull Terrier", "mixed": true},
      "url": "https://www.petfinder.com/dog/biscuit-70001/or/portland/example-rescue-or208/"
    },
    {
      "id": 70002,
      "name": "Moose",
      "age": "Adult",
      "gender": "Male",
      "size": "Extra Large",
      "breeds": {"primary": "Great Dane", "secondary": null, "mixed": false},
      "url": "https://www.petfinder.com/dog/moose-70002/or/portland/example-rescue-or208/"
    }
  ],
  "pagination": {"count_per_page": 20, "total_count": 2, "current_page": 1, "total_pages": 1}
}"#;

/// Registers a token endpoint mock answering `status` with `body`.
#[allow(dead_code)]
pub async fn mock_token(server: &mut Server, status: usize, body: &str) -> Mock {
    server
        .mock("POST", TOKEN_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Registers a listing endpoint mock answering `status` with `body` for any query.
#[allow(dead_code)]
pub async fn mock_listings(server: &mut Server, status: usize, body: &str) -> Mock {
    server
        .mock("GET", LISTING_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
