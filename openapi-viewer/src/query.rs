//! Reading the document URL from a query string and writing it back.
//!
//! The read path and the write path are intentionally asymmetric. [`QueryMode::Lenient`] accepts
//! whatever follows the first `=` of the query regardless of the parameter name, while
//! [`to_query`] always writes the `url` parameter.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Name of the query parameter written on form submission.
pub const URL_PARAM: &str = "url";

/// Characters escaped by `encodeURIComponent`. Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Defines how the submitted url is extracted from raw query string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Use the text after the first `=` of the query string. Parameter name is not checked and
    /// additional parameters are not parsed: `?a=foo&b=bar` yields `foo&b=bar`.
    #[default]
    Lenient,
    /// Only accept the value of the first `url` parameter.
    Strict,
}

impl QueryMode {
    /// Extract the decoded submitted url from `raw_query`.
    ///
    /// The raw query may start with `?` or not. Empty string is returned when there is no url.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use openapi_viewer::QueryMode;
    /// let url = QueryMode::Lenient.submitted_url("?url=https%3A%2F%2Fx.com%2Fa.json");
    /// assert_eq!(url, "https://x.com/a.json");
    ///
    /// assert_eq!(QueryMode::Strict.submitted_url("?spec=/openapi.json"), "");
    /// ```
    pub fn submitted_url(self, raw_query: &str) -> String {
        let value = match self {
            Self::Lenient => raw_query.split_once('=').map(|(_, value)| value),
            Self::Strict => raw_query
                .strip_prefix('?')
                .unwrap_or(raw_query)
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == URL_PARAM)
                .map(|(_, value)| value),
        };

        value.map(decode).unwrap_or_default()
    }
}

/// Percent decode `value` the way `decodeURIComponent` does, except that malformed escapes are kept
/// as is and invalid UTF-8 is replaced instead of failing. `+` is not treated as a space.
pub fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Percent encode `value` with the `encodeURIComponent` character set.
///
/// ```rust
/// # use openapi_viewer::query::encode;
/// assert_eq!(encode("https://x.com/a.json"), "https%3A%2F%2Fx.com%2Fa.json");
/// ```
pub fn encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, COMPONENT).into()
}

/// Build the `?url=<encoded>` query string navigated to after a submission.
pub fn to_query(url: &str) -> String {
    format!("?{URL_PARAM}={}", encode(url))
}
