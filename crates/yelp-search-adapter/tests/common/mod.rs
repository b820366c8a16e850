/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for yelp-search-adapter tests

use serde_json::{Value, json};
use wiremock::MockServer;
use yelp_search_adapter::{ClientConfig, Oauth1Authenticator, YelpClient};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Authenticator with fixed fake tokens
pub fn test_authenticator() -> Oauth1Authenticator {
    Oauth1Authenticator::from_tokens(
        "test-consumer-key",
        "test-consumer-secret",
        "test-token",
        "test-token-secret",
    )
    .expect("test credentials")
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> YelpClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    YelpClient::with_config(test_authenticator(), config).expect("client init")
}

/// Minimal business record at the given coordinate
pub fn business_json(id: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "id": id,
        "name": "Test Business",
        "phone": "4158267000",
        "display_phone": "+1-415-826-7000",
        "rating": 4.5,
        "review_count": 12,
        "categories": [["Italian", "italian"]],
        "location": {
            "address": ["2401 Harrison St"],
            "display_address": ["2401 Harrison St", "San Francisco, CA 94110"],
            "city": "San Francisco",
            "state_code": "CA",
            "postal_code": "94110",
            "country_code": "US",
            "coordinate": { "latitude": latitude, "longitude": longitude }
        }
    })
}

/// Search body around San Francisco
pub fn search_json(businesses: Vec<Value>) -> Value {
    json!({
        "total": businesses.len(),
        "businesses": businesses,
        "region": {
            "span": { "latitude_delta": 0.1, "longitude_delta": 0.1 },
            "center": { "latitude": 37.78, "longitude": -122.40 }
        }
    })
}

/// Body of an API error response
pub fn error_json(code: &str, text: &str) -> Value {
    json!({ "error": { "id": code, "text": text } })
}
