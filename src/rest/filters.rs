//! Query-string construction from caller-supplied filters.
//!
//! Keys and values are copied verbatim; callers pass values already in the
//! form the API expects (e.g. `sku:in=A,B`). Keys are sorted so the same
//! filters always produce the same URL.

use std::collections::HashMap;

/// Joins `filters` into `key=value` pairs separated by `&`, sorted by key.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bigcommerce_api::rest::join_filters;
///
/// let filters = HashMap::from([
///     ("page".to_string(), "2".to_string()),
///     ("limit".to_string(), "50".to_string()),
/// ]);
/// assert_eq!(join_filters(&filters), "limit=50&page=2");
/// ```
#[must_use]
pub fn join_filters(filters: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = filters.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Returns `?` followed by [`join_filters`], or an empty string when there
/// are no filters.
///
/// ```rust
/// use std::collections::HashMap;
/// use bigcommerce_api::rest::query_string;
///
/// assert_eq!(query_string(&HashMap::new()), "");
///
/// let filters = HashMap::from([("sku.in".to_string(), "A,B".to_string())]);
/// assert_eq!(query_string(&filters), "?sku.in=A,B");
/// ```
#[must_use]
pub fn query_string(filters: &HashMap<String, String>) -> String {
    if filters.is_empty() {
        String::new()
    } else {
        format!("?{}", join_filters(filters))
    }
}
