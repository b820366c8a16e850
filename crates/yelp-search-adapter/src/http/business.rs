/*
[INPUT]:  Business identifier and optional locale parameters
[OUTPUT]: Single business record
[POS]:    HTTP layer - business lookup endpoint
[UPDATE]: When the business endpoint or its parameters change
*/

use crate::http::{Result, YelpClient, YelpError};
use crate::types::{BusinessResponse, SearchParameters};

pub const BUSINESS_PATH: &str = "/v2/business/";

/// Path of the business lookup for `business_id`, percent-encoded
pub fn business_path(business_id: &str) -> Result<String> {
    if business_id.trim().is_empty() {
        return Err(YelpError::missing_parameter("business_id"));
    }
    Ok(format!("{BUSINESS_PATH}{}", urlencoding::encode(business_id)))
}

impl YelpClient {
    /// Look up a business by id
    ///
    /// GET /v2/business/{business_id}
    pub async fn get_business(&self, business_id: &str) -> Result<BusinessResponse> {
        self.get_business_with(business_id, SearchParameters::new())
            .await
    }

    /// Look up a business by id with locale parameters (`cc`, `lang`,
    /// `lang_filter`, `actionlinks`)
    pub async fn get_business_with(
        &self,
        business_id: &str,
        params: SearchParameters,
    ) -> Result<BusinessResponse> {
        let path = business_path(business_id)?;
        self.send_signed(&path, &params).await
    }
}
