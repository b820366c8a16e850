/*
[INPUT]:  Named query parameters from typed method arguments
[OUTPUT]: Ordered parameter mapping serialized into the query string
[POS]:    Data layer - request parameter assembly and merge rules
[UPDATE]: When the API documents new search parameters
*/

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::http::{Result, YelpError};

/// Parameters that each select a way of locating the search
pub const LOCATION_KEYS: [&str; 4] = ["location", "cll", "bounds", "ll"];

/// Result ordering for search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    BestMatched,
    Distance,
    HighestRated,
}

impl SortMode {
    fn as_param(self) -> &'static str {
        match self {
            SortMode::BestMatched => "0",
            SortMode::Distance => "1",
            SortMode::HighestRated => "2",
        }
    }
}

/// Query parameters for a single API call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchParameters(BTreeMap<String, String>);

impl SearchParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> Option<String> {
        self.0.insert(name.into(), value.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Search term, e.g. "food" or "restaurants"
    pub fn term(self, term: impl Display) -> Self {
        self.with("term", term)
    }

    /// Number of business results to return
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Offset the list of returned business results by this amount
    pub fn offset(self, offset: u32) -> Self {
        self.with("offset", offset)
    }

    pub fn sort(self, mode: SortMode) -> Self {
        self.with("sort", mode.as_param())
    }

    /// Category aliases to filter by, sent comma-joined
    pub fn category_filter<I, S>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = categories
            .into_iter()
            .map(|category| category.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with("category_filter", joined)
    }

    /// Search radius in meters
    pub fn radius_filter(self, meters: u32) -> Self {
        self.with("radius_filter", meters)
    }

    /// Only return businesses with deals
    pub fn deals_filter(self, enabled: bool) -> Self {
        self.with("deals_filter", enabled)
    }

    /// ISO 3166-1 alpha-2 country code
    pub fn cc(self, country_code: impl Display) -> Self {
        self.with("cc", country_code)
    }

    /// ISO 639 language code
    pub fn lang(self, language: impl Display) -> Self {
        self.with("lang", language)
    }

    /// Only return reviews in the requested language
    pub fn lang_filter(self, enabled: bool) -> Self {
        self.with("lang_filter", enabled)
    }

    /// Include action links in the business record
    pub fn actionlinks(self, enabled: bool) -> Self {
        self.with("actionlinks", enabled)
    }

    /// Merge caller-supplied `extra` parameters into `self`.
    ///
    /// An extra key already present in `self`, or listed in `reserved`, is
    /// rejected instead of overwriting the value built from arguments.
    pub fn merge(mut self, extra: SearchParameters, reserved: &[&str]) -> Result<Self> {
        for (name, value) in extra.0 {
            if self.contains(&name) || reserved.contains(&name.as_str()) {
                return Err(YelpError::invalid_parameter(
                    &name,
                    format!("parameter '{name}' conflicts with a value set by the method arguments"),
                ));
            }
            self.0.insert(name, value);
        }
        Ok(self)
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParameters
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = SearchParameters::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
