/*
[INPUT]:  Long-lived OAuth1 credentials
[OUTPUT]: Signed requests ready for the HTTP layer
[POS]:    Auth layer - handles Yelp API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod oauth1;

pub use credentials::Credentials;
pub use oauth1::Oauth1Authenticator;
