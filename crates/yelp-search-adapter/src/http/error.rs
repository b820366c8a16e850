/*
[INPUT]:  Error sources (HTTP, API error bodies, serialization, local validation)
[OUTPUT]: Structured error types and the status/code to error mapping
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When the API adds error codes or new error sources appear
*/

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Code, description and offending field of a failed call.
///
/// `status` is `None` when the failure was detected before any request
/// left the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub status: Option<u16>,
    pub code: String,
    pub text: String,
    pub field: Option<String>,
}

impl ErrorDetail {
    /// Detail for a parameter problem caught locally
    pub fn local(code: &str, field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            status: None,
            code: code.to_string(),
            text: text.into(),
            field: Some(field.into()),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.text)?;
        if let Some(field) = &self.field {
            write!(f, " (field: {field})")?;
        }
        if let Some(status) = self.status {
            write!(f, " [HTTP {status}]")?;
        }
        Ok(())
    }
}

/// Main error type for the Yelp adapter
#[derive(Error, Debug)]
pub enum YelpError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection could not be read
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required parameter is absent
    #[error("Missing parameter: {0}")]
    MissingParameter(ErrorDetail),

    /// A parameter value was rejected, locally or by the API
    #[error("Invalid parameter: {0}")]
    InvalidParameter(ErrorDetail),

    /// The requested business does not exist or cannot be shown
    #[error("Business unavailable: {0}")]
    BusinessUnavailable(ErrorDetail),

    #[error("Internal API error: {0}")]
    InternalError(ErrorDetail),

    /// Request quota exhausted
    #[error("Exceeded requests: {0}")]
    ExceededRequests(ErrorDetail),

    #[error("Invalid signature: {0}")]
    InvalidSignature(ErrorDetail),

    #[error("Invalid OAuth credentials: {0}")]
    InvalidOauthCredentials(ErrorDetail),

    #[error("Invalid OAuth user: {0}")]
    InvalidOauthUser(ErrorDetail),

    #[error("Account unconfirmed: {0}")]
    AccountUnconfirmed(ErrorDetail),

    #[error("Unavailable for location: {0}")]
    UnavailableForLocation(ErrorDetail),

    /// The bounding box or radius covers too large an area
    #[error("Area too large: {0}")]
    AreaTooLarge(ErrorDetail),

    /// The location text matched several places
    #[error("Multiple locations: {0}")]
    MultipleLocations(ErrorDetail),

    /// API returned an error code this client does not know
    #[error("API error: {0}")]
    Api(ErrorDetail),
}

impl YelpError {
    /// Error for a required parameter that was not supplied
    pub fn missing_parameter(field: &str) -> Self {
        YelpError::MissingParameter(ErrorDetail::local(
            codes::MISSING_PARAMETER,
            field,
            format!("parameter '{field}' is required"),
        ))
    }

    /// Error for a parameter that is malformed or collides with another
    pub fn invalid_parameter(field: &str, text: impl Into<String>) -> Self {
        YelpError::InvalidParameter(ErrorDetail::local(codes::INVALID_PARAMETER, field, text))
    }

    /// Code, description and field of API and parameter errors
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            YelpError::MissingParameter(detail)
            | YelpError::InvalidParameter(detail)
            | YelpError::BusinessUnavailable(detail)
            | YelpError::InternalError(detail)
            | YelpError::ExceededRequests(detail)
            | YelpError::InvalidSignature(detail)
            | YelpError::InvalidOauthCredentials(detail)
            | YelpError::InvalidOauthUser(detail)
            | YelpError::AccountUnconfirmed(detail)
            | YelpError::UnavailableForLocation(detail)
            | YelpError::AreaTooLarge(detail)
            | YelpError::MultipleLocations(detail)
            | YelpError::Api(detail) => Some(detail),
            _ => None,
        }
    }

    /// The API error code, e.g. `BUSINESS_UNAVAILABLE`
    pub fn code(&self) -> Option<&str> {
        self.detail().map(|detail| detail.code.as_str())
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            YelpError::Http(_)
                | YelpError::Connection(_)
                | YelpError::InternalError(_)
                | YelpError::ExceededRequests(_)
        )
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            YelpError::InvalidSignature(_)
                | YelpError::InvalidOauthCredentials(_)
                | YelpError::InvalidOauthUser(_)
                | YelpError::AccountUnconfirmed(_)
        )
    }
}

/// Error identifiers returned in `error.id`
pub mod codes {
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const EXCEEDED_REQS: &str = "EXCEEDED_REQS";
    pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";
    pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
    pub const INVALID_SIGNATURE: &str = "INVALID_SIGNATURE";
    pub const INVALID_OAUTH_CREDENTIALS: &str = "INVALID_OAUTH_CREDENTIALS";
    pub const INVALID_OAUTH_USER: &str = "INVALID_OAUTH_USER";
    pub const ACCOUNT_UNCONFIRMED: &str = "ACCOUNT_UNCONFIRMED";
    pub const UNAVAILABLE_FOR_LOCATION: &str = "UNAVAILABLE_FOR_LOCATION";
    pub const AREA_TOO_LARGE: &str = "AREA_TOO_LARGE";
    pub const MULTIPLE_LOCATIONS: &str = "MULTIPLE_LOCATIONS";
    pub const BUSINESS_UNAVAILABLE: &str = "BUSINESS_UNAVAILABLE";
}

/// A non-2xx response: its status and unparsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub status: StatusCode,
    pub body: String,
}

impl HttpError {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    field: Option<String>,
}

type ErrorConstructor = fn(ErrorDetail) -> YelpError;

const ERROR_TABLE: &[(&str, ErrorConstructor)] = &[
    (codes::INTERNAL_ERROR, YelpError::InternalError),
    (codes::EXCEEDED_REQS, YelpError::ExceededRequests),
    (codes::MISSING_PARAMETER, YelpError::MissingParameter),
    (codes::INVALID_PARAMETER, YelpError::InvalidParameter),
    (codes::INVALID_SIGNATURE, YelpError::InvalidSignature),
    (codes::INVALID_OAUTH_CREDENTIALS, YelpError::InvalidOauthCredentials),
    (codes::INVALID_OAUTH_USER, YelpError::InvalidOauthUser),
    (codes::ACCOUNT_UNCONFIRMED, YelpError::AccountUnconfirmed),
    (codes::UNAVAILABLE_FOR_LOCATION, YelpError::UnavailableForLocation),
    (codes::AREA_TOO_LARGE, YelpError::AreaTooLarge),
    (codes::MULTIPLE_LOCATIONS, YelpError::MultipleLocations),
    (codes::BUSINESS_UNAVAILABLE, YelpError::BusinessUnavailable),
];

/// Translates failed HTTP responses into [`YelpError`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    /// Map a failed response to the error for its `error.id`.
    ///
    /// Unknown codes become [`YelpError::Api`]; a body without an error
    /// object becomes [`YelpError::InvalidResponse`].
    pub fn raise_error(http_error: &HttpError) -> YelpError {
        let status = http_error.status.as_u16();
        let envelope: ErrorEnvelope = match serde_json::from_str(&http_error.body) {
            Ok(envelope) => envelope,
            Err(_) => {
                return YelpError::InvalidResponse(format!(
                    "HTTP {status}: {}",
                    http_error.body
                ));
            }
        };

        let detail = ErrorDetail {
            status: Some(status),
            code: envelope.error.id,
            text: envelope.error.text,
            field: envelope.error.field,
        };

        match ERROR_TABLE.iter().find(|(code, _)| *code == detail.code) {
            Some((_, constructor)) => constructor(detail),
            None => YelpError::Api(detail),
        }
    }
}

/// Result type alias for Yelp operations
pub type Result<T> = std::result::Result<T, YelpError>;
