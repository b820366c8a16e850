/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Yelp search adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, Oauth1Authenticator};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Connection,
    ErrorDetail,
    ErrorHandler,
    HttpError,
    RawResponse,
    RequestAuthenticator,
    ReqwestTransport,
    Result,
    SignedRequest,
    Transport,
    YelpClient,
    YelpError,
};

// Re-export all types
pub use types::*;
