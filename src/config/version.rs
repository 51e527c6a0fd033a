//! Shopify API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for selecting which version
//! of the Shopify Admin API an app speaks.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Shopify API version.
///
/// Only a small set of versions is pinned. Anything the app does not
/// recognise resolves to [`ApiVersion::Latest`] rather than failing, so a
/// stale or mistyped version token never prevents the app from starting.
///
/// # Example
///
/// ```rust
/// use shopify_app::ApiVersion;
///
/// let version: ApiVersion = "2023-04".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2023_04);
///
/// // Unknown tokens fall back to the latest version
/// let version: ApiVersion = "1999-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::Latest);
///
/// assert_eq!(ApiVersion::V2023_07.to_string(), "2023-07");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// API version 2023-04 (April 2023)
    V2023_04,
    /// API version 2023-07 (July 2023)
    V2023_07,
    /// The latest version this crate knows about (2023-10).
    #[default]
    Latest,
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::Latest
    }

    /// Returns all known versions in chronological order.
    #[must_use]
    pub const fn known_versions() -> [Self; 3] {
        [Self::V2023_04, Self::V2023_07, Self::Latest]
    }

    /// Returns the `YYYY-MM` token used in Admin API paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2023_04 => "2023-04",
            Self::V2023_07 => "2023-07",
            Self::Latest => "2023-10",
        }
    }

    /// Resolves a version token, falling back to [`ApiVersion::Latest`].
    ///
    /// Returns the resolved version and whether the token was recognised.
    #[must_use]
    pub fn resolve(token: &str) -> (Self, bool) {
        match token.trim().to_lowercase().as_str() {
            "2023-04" => (Self::V2023_04, true),
            "2023-07" => (Self::V2023_07, true),
            "2023-10" | "latest" => (Self::Latest, true),
            _ => (Self::Latest, false),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for ApiVersion {
    fn from(token: &str) -> Self {
        let (version, recognised) = Self::resolve(token);
        if !recognised {
            tracing::warn!(
                "Unrecognized Shopify API version '{}', falling back to {}",
                token,
                version
            );
        }
        version
    }
}

impl From<String> for ApiVersion {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}
