/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for business records and their parts
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_claimed: bool,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub mobile_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub display_phone: Option<String>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Meters from the search location, present on search results only
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_img_url: Option<String>,
    #[serde(default)]
    pub rating_img_url_small: Option<String>,
    #[serde(default)]
    pub rating_img_url_large: Option<String>,
    #[serde(default)]
    pub snippet_text: Option<String>,
    #[serde(default)]
    pub snippet_image_url: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub menu_provider: Option<String>,
    #[serde(default)]
    pub menu_date_updated: Option<i64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub gift_certificates: Vec<GiftCertificate>,
    #[serde(default)]
    pub eat24_url: Option<String>,
    #[serde(default)]
    pub reservation_url: Option<String>,
}

/// `[display name, alias]` pair, e.g. `["Indian", "indpak"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category(pub String, pub String);

impl Category {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn alias(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub display_address: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub cross_streets: Option<String>,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub geo_accuracy: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Map area suggested for displaying the results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub span: Span,
    pub center: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_image_url: Option<String>,
    #[serde(default)]
    pub rating_image_small_url: Option<String>,
    #[serde(default)]
    pub rating_image_large_url: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Unix timestamp
    #[serde(default)]
    pub time_created: Option<i64>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub time_start: Option<i64>,
    #[serde(default)]
    pub time_end: Option<i64>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub what_you_get: Option<String>,
    #[serde(default)]
    pub important_restrictions: Option<String>,
    #[serde(default)]
    pub additional_restrictions: Option<String>,
    #[serde(default)]
    pub options: Vec<DealOption>,
}

/// Prices are in cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealOption {
    pub title: String,
    #[serde(default)]
    pub purchase_url: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub formatted_price: Option<String>,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub formatted_original_price: Option<String>,
    #[serde(default)]
    pub is_quantity_limited: bool,
    #[serde(default)]
    pub remaining_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCertificate {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub unused_balances: Option<String>,
    #[serde(default)]
    pub options: Vec<GiftCertificateOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCertificateOption {
    pub price: i64,
    #[serde(default)]
    pub formatted_price: Option<String>,
}
