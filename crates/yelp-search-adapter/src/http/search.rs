/*
[INPUT]:  Location, bounding box, coordinates or phone number plus extra parameters
[OUTPUT]: Search results (businesses, total, region)
[POS]:    HTTP layer - search endpoints and their parameter rules
[UPDATE]: When adding search endpoints or changing location parameters
*/

use std::fmt::Display;

use crate::http::{Result, YelpClient, YelpError};
use crate::types::{LOCATION_KEYS, SearchParameters, SearchResponse};

pub const SEARCH_PATH: &str = "/v2/search/";
pub const PHONE_SEARCH_PATH: &str = "/v2/phone_search/";

/// Parameters for a search by location text.
///
/// `cll` is added only when both latitude and longitude are given; a
/// caller-supplied `cll` is accepted when no coordinates were passed.
pub fn location_params(
    location: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    extra: SearchParameters,
) -> Result<SearchParameters> {
    if location.trim().is_empty() {
        return Err(YelpError::missing_parameter("location"));
    }

    let mut params = SearchParameters::new().with("location", location);
    if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
        params.insert("cll", format!("{latitude},{longitude}"));
    }
    params.merge(extra, &["bounds", "ll", "location"])
}

/// Parameters for a search inside `swLat,swLong|neLat,neLong`
pub fn bounding_box_params(
    sw_latitude: f64,
    sw_longitude: f64,
    ne_latitude: f64,
    ne_longitude: f64,
    extra: SearchParameters,
) -> Result<SearchParameters> {
    let bounds = format!("{sw_latitude},{sw_longitude}|{ne_latitude},{ne_longitude}");
    SearchParameters::new()
        .with("bounds", bounds)
        .merge(extra, &LOCATION_KEYS)
}

/// Parameters for a search around a point.
///
/// `ll` is `lat,long[,accuracy[,altitude[,altitude_accuracy]]]`; a value
/// given without the one before it is rejected.
pub fn coordinate_params(
    latitude: f64,
    longitude: f64,
    accuracy: Option<f64>,
    altitude: Option<f64>,
    altitude_accuracy: Option<f64>,
    extra: SearchParameters,
) -> Result<SearchParameters> {
    let mut ll = vec![latitude.to_string(), longitude.to_string()];
    let optional = [
        ("accuracy", accuracy),
        ("altitude", altitude),
        ("altitude_accuracy", altitude_accuracy),
    ];

    let mut previous = "longitude";
    let mut chain_open = true;
    for (name, value) in optional {
        match value {
            Some(value) if chain_open => ll.push(value.to_string()),
            Some(_) => {
                return Err(YelpError::invalid_parameter(
                    name,
                    format!("'{name}' requires '{previous}' to be set"),
                ));
            }
            None => chain_open = false,
        }
        previous = name;
    }

    SearchParameters::new()
        .with("ll", ll.join(","))
        .merge(extra, &LOCATION_KEYS)
}

/// Parameters for a phone number lookup
pub fn phone_params(phone: impl Display, extra: SearchParameters) -> Result<SearchParameters> {
    let phone = phone.to_string();
    if phone.trim().is_empty() {
        return Err(YelpError::missing_parameter("phone"));
    }
    SearchParameters::new().with("phone", phone).merge(extra, &[])
}

impl YelpClient {
    /// Search businesses near a location
    ///
    /// GET /v2/search/?location={location}[&cll={lat},{long}]
    pub async fn search(
        &self,
        location: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        params: SearchParameters,
    ) -> Result<SearchResponse> {
        let params = location_params(location, latitude, longitude, params)?;
        self.make_request(SEARCH_PATH, Some(&params)).await
    }

    /// Search businesses inside a bounding box
    ///
    /// GET /v2/search/?bounds={sw_lat},{sw_long}|{ne_lat},{ne_long}
    pub async fn search_by_bounding_box(
        &self,
        sw_latitude: f64,
        sw_longitude: f64,
        ne_latitude: f64,
        ne_longitude: f64,
        params: SearchParameters,
    ) -> Result<SearchResponse> {
        let params =
            bounding_box_params(sw_latitude, sw_longitude, ne_latitude, ne_longitude, params)?;
        self.make_request(SEARCH_PATH, Some(&params)).await
    }

    /// Search businesses around geographic coordinates
    ///
    /// GET /v2/search/?ll={lat},{long}[,{accuracy}[,{altitude}[,{altitude_accuracy}]]]
    pub async fn search_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        accuracy: Option<f64>,
        altitude: Option<f64>,
        altitude_accuracy: Option<f64>,
        params: SearchParameters,
    ) -> Result<SearchResponse> {
        let params = coordinate_params(
            latitude,
            longitude,
            accuracy,
            altitude,
            altitude_accuracy,
            params,
        )?;
        self.make_request(SEARCH_PATH, Some(&params)).await
    }

    /// Find businesses by phone number
    ///
    /// GET /v2/phone_search/?phone={phone}
    pub async fn phone_search(
        &self,
        phone: impl Display,
        params: SearchParameters,
    ) -> Result<SearchResponse> {
        let params = phone_params(phone, params)?;
        self.make_request(PHONE_SEARCH_PATH, Some(&params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::client::tests::{CannedTransport, canned_client};
    use reqwest::StatusCode;
    use rstest::rstest;

    fn food() -> SearchParameters {
        SearchParameters::new().with("term", "food")
    }

    #[test]
    fn test_search_builds_correct_params() {
        let params = location_params("San Francisco, CA", None, None, food()).unwrap();
        let expected = food().with("location", "San Francisco, CA");
        assert_eq!(params, expected);
    }

    #[test]
    fn test_search_builds_correct_params_with_current_lat_long() {
        let params =
            location_params("San Francisco, CA", Some(0.0), Some(0.0), food()).unwrap();
        let expected = food()
            .with("location", "San Francisco, CA")
            .with("cll", "0,0");
        assert_eq!(params, expected);
    }

    #[rstest]
    #[case(Some(37.7), None)]
    #[case(None, Some(-122.4))]
    #[case(None, None)]
    fn test_search_without_full_pair_has_no_cll(
        #[case] latitude: Option<f64>,
        #[case] longitude: Option<f64>,
    ) {
        let params = location_params("SF", latitude, longitude, SearchParameters::new()).unwrap();
        assert!(!params.contains("cll"));
    }

    #[test]
    fn test_search_formats_decimal_coordinates() {
        let params =
            location_params("SF", Some(37.788022), Some(-122.399797), SearchParameters::new())
                .unwrap();
        assert_eq!(params.get("cll"), Some("37.788022,-122.399797"));
    }

    #[test]
    fn test_search_requires_location() {
        let err = location_params("  ", None, None, food()).unwrap_err();
        assert!(matches!(err, YelpError::MissingParameter(_)));
    }

    #[rstest]
    #[case("location")]
    #[case("bounds")]
    #[case("ll")]
    fn test_search_rejects_second_location_family(#[case] key: &str) {
        let extra = SearchParameters::new().with(key, "1,1");
        let err = location_params("SF", None, None, extra).unwrap_err();
        assert!(matches!(err, YelpError::InvalidParameter(_)));
    }

    #[test]
    fn test_search_accepts_cll_from_extra_params() {
        let extra = SearchParameters::new().with("cll", "37.7,-122.4");
        let params = location_params("SF", None, None, extra).unwrap();
        assert_eq!(params.get("cll"), Some("37.7,-122.4"));
    }

    #[test]
    fn test_search_rejects_cll_colliding_with_coordinates() {
        let extra = SearchParameters::new().with("cll", "37.7,-122.4");
        let err = location_params("SF", Some(1.0), Some(2.0), extra).unwrap_err();
        assert_eq!(err.detail().and_then(|d| d.field.as_deref()), Some("cll"));
    }

    #[test]
    fn test_search_by_bounding_box_builds_correct_params() {
        let params = bounding_box_params(0.0, 0.0, 0.0, 0.0, food()).unwrap();
        assert_eq!(params, food().with("bounds", "0,0|0,0"));
    }

    #[test]
    fn test_search_by_coordinates_builds_correct_params() {
        let params = coordinate_params(
            0.0,
            0.0,
            Some(0.0),
            Some(0.0),
            Some(0.0),
            SearchParameters::new(),
        )
        .unwrap();
        assert_eq!(params, SearchParameters::new().with("ll", "0,0,0,0,0"));
    }

    #[rstest]
    #[case(None, None, None, "1.5,2.5")]
    #[case(Some(10.0), None, None, "1.5,2.5,10")]
    #[case(Some(10.0), Some(30.0), None, "1.5,2.5,10,30")]
    #[case(Some(10.0), Some(30.0), Some(5.0), "1.5,2.5,10,30,5")]
    fn test_coordinates_trailing_values(
        #[case] accuracy: Option<f64>,
        #[case] altitude: Option<f64>,
        #[case] altitude_accuracy: Option<f64>,
        #[case] expected: &str,
    ) {
        let params = coordinate_params(
            1.5,
            2.5,
            accuracy,
            altitude,
            altitude_accuracy,
            SearchParameters::new(),
        )
        .unwrap();
        assert_eq!(params.get("ll"), Some(expected));
        assert_eq!(params.len(), 1);
    }

    #[rstest]
    #[case(None, Some(30.0), None, "altitude")]
    #[case(Some(10.0), None, Some(5.0), "altitude_accuracy")]
    fn test_coordinates_gap_is_rejected(
        #[case] accuracy: Option<f64>,
        #[case] altitude: Option<f64>,
        #[case] altitude_accuracy: Option<f64>,
        #[case] field: &str,
    ) {
        let err = coordinate_params(
            1.0,
            2.0,
            accuracy,
            altitude,
            altitude_accuracy,
            SearchParameters::new(),
        )
        .unwrap_err();
        assert!(matches!(err, YelpError::InvalidParameter(_)));
        assert_eq!(err.detail().and_then(|d| d.field.as_deref()), Some(field));
    }

    #[test]
    fn test_phone_search_builds_correct_params() {
        let extra = SearchParameters::new().with("category", "fashion");
        let params = phone_params(5555555555u64, extra).unwrap();

        let expected = SearchParameters::new()
            .with("phone", 5555555555u64)
            .with("category", "fashion");
        assert_eq!(params, expected);
    }

    #[test]
    fn test_phone_search_requires_phone() {
        let err = phone_params("", SearchParameters::new()).unwrap_err();
        assert!(matches!(err, YelpError::MissingParameter(_)));

        let extra = SearchParameters::new().with("phone", "1");
        let err = phone_params("2", extra).unwrap_err();
        assert!(matches!(err, YelpError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_search_sends_built_params() {
        let body = r#"{"total": 1, "businesses": [{"id": "a", "name": "A"}]}"#;
        let transport = CannedTransport::new(StatusCode::OK, Some(body));
        let (client, auth) = canned_client(&transport);

        let response = client
            .search("San Francisco, CA", Some(0.0), Some(0.0), food())
            .await
            .expect("search");

        assert_eq!(response.total, 1);
        let calls = auth.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("cll"), Some("0,0"));
        assert_eq!(calls[0].get("location"), Some("San Francisco, CA"));
    }

    #[tokio::test]
    async fn test_invalid_params_never_reach_transport() {
        let transport = CannedTransport::new(StatusCode::OK, Some("{}"));
        let (client, _) = canned_client(&transport);

        let result = client
            .search_by_coordinates(1.0, 2.0, None, Some(3.0), None, SearchParameters::new())
            .await;

        assert!(result.is_err());
        assert_eq!(
            transport.opened.load(std::sync::atomic::Ordering::SeqCst),
            0
        );
    }
}
