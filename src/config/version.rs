//! BigCommerce API version definitions.
//!
//! BigCommerce versions its REST API by path prefix rather than by header.
//! Order sub-resources such as shipments live under `/v2`, while the
//! catalog and inventory APIs live under `/v3`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// BigCommerce REST API version.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(version.path_prefix(), "/v3");
/// assert_eq!(format!("{}", ApiVersion::V2), "v2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// The legacy v2 API (orders, shipments).
    V2,
    /// The v3 API (catalog, inventory).
    V3,
}

impl ApiVersion {
    /// Returns the path prefix for this version, e.g. `/v2`.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::V2 => "/v2",
            Self::V3 => "/v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_prefix()[1..])
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('/').to_lowercase();
        match s.as_str() {
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
