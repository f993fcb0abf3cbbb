//! Wire format shared by the process and HTTP engines

use crate::EngineError;
use byline_domain::{Extraction, Metadata};
use serde::Deserialize;

/// JSON document an external extractor prints or returns
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EngineResponse {
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    hostname: Option<String>,
}

impl From<EngineResponse> for Extraction {
    fn from(response: EngineResponse) -> Self {
        Extraction {
            metadata: Metadata {
                author: response.author.unwrap_or_default(),
                title: response.title,
                hostname: response.hostname,
            },
        }
    }
}

/// Parse an engine reply body
///
/// Blank output and a JSON `null` both mean "no result".
pub(crate) fn parse_response(body: &str) -> Result<Option<Extraction>, EngineError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let response: Option<EngineResponse> = serde_json::from_str(body)
        .map_err(|e| EngineError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    Ok(response.map(Extraction::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let extraction = parse_response(
            r#"{"author": "Jane Doe; John Smith", "title": "A post", "hostname": "example.com", "text": "..."}"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(extraction.author(), "Jane Doe; John Smith");
        assert_eq!(extraction.metadata.title.as_deref(), Some("A post"));
        assert_eq!(extraction.metadata.hostname.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_missing_author_is_empty() {
        let extraction = parse_response(r#"{"title": "A post"}"#).unwrap().unwrap();
        assert_eq!(extraction.author(), "");

        let extraction = parse_response(r#"{"author": null}"#).unwrap().unwrap();
        assert_eq!(extraction.author(), "");
    }

    #[test]
    fn test_blank_and_null_mean_no_result() {
        assert!(parse_response("").unwrap().is_none());
        assert!(parse_response("  \n").unwrap().is_none());
        assert!(parse_response("null").unwrap().is_none());
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(matches!(
            parse_response("This is not JSON"),
            Err(EngineError::InvalidResponse(_))
        ));
    }
}
