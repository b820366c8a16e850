/*
[INPUT]:  Consumer key/secret and token/secret, inline or from a JSON file
[OUTPUT]: Validated, immutable OAuth1 credentials
[POS]:    Auth layer - long-lived API credentials
[UPDATE]: When the credential file format changes
*/

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::http::{Result, YelpError};

/// The four OAuth1 tokens issued for an API application
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

#[derive(Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    consumer_key: String,
    #[serde(default)]
    consumer_secret: String,
    #[serde(default)]
    token: String,
    #[serde(default)]
    token_secret: String,
}

impl Credentials {
    /// Create credentials, rejecting empty tokens
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        };

        for (name, value) in [
            ("consumer_key", &credentials.consumer_key),
            ("consumer_secret", &credentials.consumer_secret),
            ("token", &credentials.token),
            ("token_secret", &credentials.token_secret),
        ] {
            if value.trim().is_empty() {
                return Err(YelpError::Config(format!("credential '{name}' is empty")));
            }
        }

        Ok(credentials)
    }

    /// Parse credentials from a JSON object with the four token fields
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CredentialsFile = serde_json::from_str(json)?;
        Self::new(
            file.consumer_key,
            file.consumer_secret,
            file.token,
            file.token_secret,
        )
    }

    /// Load credentials from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            YelpError::Config(format!(
                "Failed to read credentials from {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_token() {
        let err = Credentials::new("key", "secret", "", "token-secret").unwrap_err();
        assert!(matches!(err, YelpError::Config(ref msg) if msg.contains("token")));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "consumer_key": "ck",
            "consumer_secret": "cs",
            "token": "t",
            "token_secret": "ts"
        }"#;

        let credentials = Credentials::from_json(json).expect("credentials");
        assert_eq!(credentials.consumer_key(), "ck");
        assert_eq!(credentials.consumer_secret(), "cs");
        assert_eq!(credentials.token(), "t");
        assert_eq!(credentials.token_secret(), "ts");
    }

    #[test]
    fn test_from_json_missing_field() {
        let err = Credentials::from_json(r#"{"consumer_key": "ck"}"#).unwrap_err();
        assert!(matches!(err, YelpError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("ck", "very-secret", "t", "also-secret").unwrap();
        let debug = format!("{credentials:?}");

        assert!(debug.contains("ck"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("also-secret"));
    }
}
