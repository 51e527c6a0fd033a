//! OAuth scope handling.
//!
//! This module provides the [`Scopes`] type, the canonical form of the
//! permission scopes an app requests during authorization.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A canonical, sorted list of OAuth scopes.
///
/// Scopes are sorted byte-wise so two requests for the same scopes in a
/// different order produce identical configuration and identical `scope`
/// parameters. Duplicates are kept: `["b", "a", "b"]` canonicalizes to
/// `a,b,b`.
///
/// # Serialization
///
/// `Scopes` serializes to and deserializes from its comma-separated form.
///
/// # Example
///
/// ```rust
/// use shopify_app::Scopes;
///
/// let a = Scopes::new(["write_orders", "read_products"]);
/// let b = Scopes::new(["read_products", "write_orders"]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "read_products,write_orders");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scopes {
    scopes: Vec<String>,
}

impl Scopes {
    /// Canonicalizes the given scopes by sorting them.
    ///
    /// Values are stored verbatim; no trimming, validation, or deduplication.
    #[must_use]
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scopes: Vec<String> = scopes.into_iter().map(Into::into).collect();
        scopes.sort_unstable();
        Self { scopes }
    }

    /// Returns `true` if no scopes were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the number of scopes, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns an iterator over the scopes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Returns `true` if every scope in `other` is also in `self`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other
            .scopes
            .iter()
            .all(|s| self.scopes.binary_search(s).is_ok())
    }
}

impl FromStr for Scopes {
    type Err = ConfigError;

    /// Parses a comma-separated scope list, trimming entries and skipping blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = Vec::new();

        for scope in s.split(',') {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }

            if !scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }

            scopes.push(scope);
        }

        Ok(Self::new(scopes))
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scopes.join(","))
    }
}

impl Serialize for Scopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Scopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
