//! HTTP response type for the BigCommerce API client.
//!
//! A [`HttpResponse`] is the raw result of one round-trip: status code,
//! headers, and body bytes. It does not judge the status; that is left to
//! [`crate::rest::decode`].

use std::collections::HashMap;

/// HTTP status returned by BigCommerce for a successful request with no body.
pub const NO_CONTENT: u16 = 204;

/// An HTTP response from the BigCommerce API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are lowercased so lookups are case-insensitive.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<Vec<u8>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (name, values)| {
                acc.entry(name).or_default().extend(values);
                acc
            });

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for `204 No Content`.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.code == NO_CONTENT
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 422, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_no_content_detection() {
        assert!(HttpResponse::new(204, HashMap::new(), Vec::new()).is_no_content());
        assert!(!HttpResponse::new(200, HashMap::new(), Vec::new()).is_no_content());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, Vec::new());
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc-123"));
    }

    #[test]
    fn test_text_decodes_body() {
        let response = HttpResponse::new(200, HashMap::new(), br#"{"a":1}"#.to_vec());
        assert_eq!(response.text(), r#"{"a":1}"#);
    }
}
