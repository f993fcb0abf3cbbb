//! Request URL module - a URL known to be an absolute request URI

use std::fmt;

/// Reasons a string is not an absolute request URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestUrlError {
    /// Input was empty
    Empty,

    /// Input carries leading/trailing whitespace, control characters or backslashes
    InvalidCharacters,

    /// The URL parser rejected the input
    Malformed(String),

    /// No authority component (e.g. `mailto:` or `data:` URIs)
    MissingAuthority,
}

impl fmt::Display for RequestUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestUrlError::Empty => write!(f, "empty url"),
            RequestUrlError::InvalidCharacters => {
                write!(f, "url contains whitespace, control characters or backslashes")
            }
            RequestUrlError::Malformed(reason) => write!(f, "{}", reason),
            RequestUrlError::MissingAuthority => write!(f, "url has no authority component"),
        }
    }
}

impl std::error::Error for RequestUrlError {}

/// An absolute request URI with scheme and authority
///
/// Only obtainable through [`RequestUrl::parse`], so holding one proves the
/// string passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestUrl(url::Url);

impl RequestUrl {
    /// Parse and validate a request URI
    ///
    /// # Examples
    ///
    /// ```
    /// use byline_domain::RequestUrl;
    ///
    /// let url = RequestUrl::parse("https://example.com/post/1").unwrap();
    /// assert_eq!(url.host(), Some("example.com"));
    ///
    /// assert!(RequestUrl::parse("/post/1").is_err());
    /// assert!(RequestUrl::parse("mailto:jane@example.com").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, RequestUrlError> {
        if input.is_empty() {
            return Err(RequestUrlError::Empty);
        }

        // The WHATWG parser silently strips or rewrites these; a request URI may not carry them
        if input.trim() != input || input.chars().any(|c| c.is_ascii_control() || c == '\\') {
            return Err(RequestUrlError::InvalidCharacters);
        }

        let url = url::Url::parse(input).map_err(|e| RequestUrlError::Malformed(e.to_string()))?;

        // Checked on the raw input: the parser repairs `http:host` and `http:///host`
        if !has_authority_prefix(input) || url.cannot_be_a_base() || !url.has_host() {
            return Err(RequestUrlError::MissingAuthority);
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(Self(url)),
            _ => Err(RequestUrlError::MissingAuthority),
        }
    }

    /// The URL in its serialized form
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Host component
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

}

/// Whether `scheme:` is followed by `//` and a non-empty authority
fn has_authority_prefix(input: &str) -> bool {
    input
        .split_once(':')
        .and_then(|(_, rest)| rest.strip_prefix("//"))
        .and_then(|authority| authority.chars().next())
        .is_some_and(|c| !matches!(c, '/' | '?' | '#'))
}

impl fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::str::FromStr for RequestUrl {
    type Err = RequestUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
