//! URL validation stage

use crate::error::HarnessError;
use byline_domain::RequestUrl;

/// Check that a corpus key is an absolute request URI
///
/// Scheme and authority are both required.
pub fn validate_request_url(raw: &str) -> Result<RequestUrl, HarnessError> {
    RequestUrl::parse(raw).map_err(|e| HarnessError::Validation {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
