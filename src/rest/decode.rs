//! Response body extraction shared by every resource.
//!
//! BigCommerce answers some successful requests with `204 No Content`.
//! [`read_body`] short-circuits those to [`ResponseBody::NoContent`] instead
//! of handing an empty body to the JSON parser, and [`decode_or_default`]
//! turns that into the type's zero value.

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// The body of a successful response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseBody<'a> {
    /// The server answered `204 No Content`.
    NoContent,
    /// The raw body of any other 2xx response.
    Content(&'a [u8]),
}

/// Returns the body of `response`, or an error for a non-2xx status.
///
/// `resource` and `id` only label the error.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] for 404 and [`ResourceError::Http`]
/// for any other non-2xx status.
pub fn read_body<'a>(
    response: &'a HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<ResponseBody<'a>, ResourceError> {
    if response.is_no_content() {
        tracing::debug!(resource, "Response had no content");
        return Ok(ResponseBody::NoContent);
    }

    if !response.is_ok() {
        return Err(ResourceError::from_http_response(
            response.code,
            &response.text(),
            resource,
            id,
            response.request_id(),
        ));
    }

    Ok(ResponseBody::Content(&response.body))
}

/// Decodes the JSON body of `response`, or returns `T::default()` on 204.
///
/// # Errors
///
/// Returns the errors of [`read_body`], and [`ResourceError::Decode`] if a
/// 2xx body is not valid JSON for `T`.
pub fn decode_or_default<T>(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<T, ResourceError>
where
    T: DeserializeOwned + Default,
{
    match read_body(response, resource, id)? {
        ResponseBody::NoContent => Ok(T::default()),
        ResponseBody::Content(bytes) => serde_json::from_slice(bytes)
            .map_err(|source| ResourceError::Decode { resource, source }),
    }
}

/// Checks that `response` has a 2xx status, discarding the body.
///
/// # Errors
///
/// Same as [`read_body`].
pub fn ensure_success(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<(), ResourceError> {
    read_body(response, resource, id).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_read_body_short_circuits_no_content() {
        let response = response(204, "");
        assert_eq!(
            read_body(&response, "Shipment", None).unwrap(),
            ResponseBody::NoContent
        );
    }

    #[test]
    fn test_read_body_returns_content_for_2xx() {
        let response = response(201, r#"{"id":1}"#);
        assert_eq!(
            read_body(&response, "Shipment", None).unwrap(),
            ResponseBody::Content(br#"{"id":1}"#)
        );
    }

    #[test]
    fn test_read_body_maps_error_statuses() {
        let not_found = response(404, "");
        assert!(matches!(
            read_body(&not_found, "Shipment", Some("3")),
            Err(ResourceError::NotFound { .. })
        ));

        let server_error = response(500, "oops");
        let error = read_body(&server_error, "Shipment", None).unwrap_err();
        assert_eq!(error.status(), Some(500));
        assert!(error.to_string().contains("oops"));
    }

    #[test]
    fn test_decode_or_default_returns_default_on_no_content() {
        let decoded: Vec<u64> = decode_or_default(&response(204, ""), "List", None).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_or_default_decodes_json() {
        let decoded: Vec<u64> = decode_or_default(&response(200, "[1,2,3]"), "List", None).unwrap();
        assert_eq!(decoded, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_or_default_rejects_malformed_json() {
        let result: Result<Vec<u64>, _> = decode_or_default(&response(200, "[1,"), "List", None);
        assert!(matches!(result, Err(ResourceError::Decode { resource: "List", .. })));
    }

    #[test]
    fn test_decode_or_default_rejects_empty_200_body() {
        let result: Result<Vec<u64>, _> = decode_or_default(&response(200, ""), "List", None);
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }

    #[test]
    fn test_ensure_success() {
        assert!(ensure_success(&response(204, ""), "Shipment", None).is_ok());
        assert!(ensure_success(&response(200, "garbage"), "Shipment", None).is_ok());
        assert!(ensure_success(&response(404, ""), "Shipment", Some("1")).is_err());
    }
}
