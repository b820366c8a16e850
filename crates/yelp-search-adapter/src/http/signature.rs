/*
[INPUT]:  Request URL and query parameters
[OUTPUT]: Signed, ready-to-send GET requests
[POS]:    HTTP layer - signing seam between client and authenticator
[UPDATE]: When changing how requests are authorized
*/

use std::fmt::Debug;

use url::Url;

use crate::http::Result;
use crate::types::SearchParameters;

/// A GET request with its query string and authorization header in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub url: Url,
    pub authorization: String,
}

impl SignedRequest {
    /// Query value for `name`, if present on the URL
    pub fn query_value(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Turns an endpoint URL plus parameters into a signed request
pub trait RequestAuthenticator: Send + Sync + Debug {
    fn sign(&self, url: &Url, params: &SearchParameters) -> Result<SignedRequest>;
}

/// Append `params` to `url` as a standard query string
pub(crate) fn url_with_query(url: &Url, params: &SearchParameters) -> Url {
    let mut url = url.clone();
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    url
}
