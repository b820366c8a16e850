/*
[INPUT]:  Parsed JSON bodies of successful API calls
[OUTPUT]: Read-only response wrappers per endpoint
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new endpoints added
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::models::{Business, Region};

/// Response of the business lookup endpoint.
///
/// Accepts both `{"business": {...}}` and the bare business object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessResponse {
    pub business: Business,
}

impl<'de> Deserialize<'de> for BusinessResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Wrapped { business: Business },
            Bare(Business),
        }

        let business = match Shape::deserialize(deserializer)? {
            Shape::Wrapped { business } | Shape::Bare(business) => business,
        };
        Ok(Self { business })
    }
}

/// Response of the search and phone search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: u64,
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub region: Option<Region>,
}

impl SearchResponse {
    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }
}
