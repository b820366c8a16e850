/*
[INPUT]:  Credentials, request URL and query parameters
[OUTPUT]: OAuth1 (HMAC-SHA1) Authorization header on a signed request
[POS]:    Auth layer - request signing for every API call
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use ring::hmac;
use url::Url;
use uuid::Uuid;

use crate::auth::Credentials;
use crate::http::signature::url_with_query;
use crate::http::{RequestAuthenticator, Result, SignedRequest};
use crate::types::SearchParameters;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Signs requests with OAuth 1.0a (RFC 5849) using HMAC-SHA1
#[derive(Debug, Clone)]
pub struct Oauth1Authenticator {
    credentials: Credentials,
}

impl Oauth1Authenticator {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Build credentials and authenticator from the four raw tokens
    pub fn from_tokens(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(consumer_key, consumer_secret, token, token_secret)?;
        Ok(Self::new(credentials))
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign with an explicit nonce and timestamp
    pub fn sign_with(
        &self,
        method: &str,
        url: &Url,
        params: &SearchParameters,
        nonce: &str,
        timestamp: i64,
    ) -> SignedRequest {
        let timestamp = timestamp.to_string();
        let oauth_params = [
            ("oauth_consumer_key", self.credentials.consumer_key()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.credentials.token()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let request_url = url_with_query(url, params);
        let mut pairs: Vec<(String, String)> = request_url
            .query_pairs()
            .map(|(key, value)| (encode(&key), encode(&value)))
            .collect();
        pairs.extend(
            oauth_params
                .iter()
                .map(|(key, value)| (encode(key), encode(value))),
        );

        let base = signature_base_string(method, url, pairs);
        let signature = self.signature(&base);

        let mut header_params: Vec<(&str, &str)> = oauth_params.to_vec();
        header_params.push(("oauth_signature", signature.as_str()));
        header_params.sort_unstable();

        let authorization = format!(
            "OAuth {}",
            header_params
                .iter()
                .map(|(key, value)| format!("{key}=\"{}\"", encode(value)))
                .collect::<Vec<_>>()
                .join(", ")
        );

        SignedRequest {
            url: request_url,
            authorization,
        }
    }

    fn signature(&self, base_string: &str) -> String {
        let signing_key = format!(
            "{}&{}",
            encode(self.credentials.consumer_secret()),
            encode(self.credentials.token_secret())
        );
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
        let tag = hmac::sign(&key, base_string.as_bytes());
        BASE64.encode(tag.as_ref())
    }
}

impl RequestAuthenticator for Oauth1Authenticator {
    fn sign(&self, url: &Url, params: &SearchParameters) -> Result<SignedRequest> {
        let nonce = Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp();
        Ok(self.sign_with("GET", url, params, &nonce, timestamp))
    }
}

/// RFC 3986 percent-encoding, as OAuth1 requires
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `METHOD&encoded(base url)&encoded(sorted params)` for already-encoded pairs
fn signature_base_string(method: &str, url: &Url, mut pairs: Vec<(String, String)>) -> String {
    pairs.sort_unstable();
    let normalized = pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url.as_str()),
        encode(&normalized)
    )
}
