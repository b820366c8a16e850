/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod business;
pub mod client;
pub mod connection;
pub mod error;
pub mod search;
pub mod signature;

pub use error::{ErrorDetail, ErrorHandler, HttpError, Result, YelpError};
pub use signature::{RequestAuthenticator, SignedRequest};

pub use client::{ClientConfig, YelpClient};
pub use connection::{Connection, RawResponse, ReqwestTransport, Transport};
