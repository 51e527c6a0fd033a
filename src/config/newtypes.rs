//! Validated value types for app configuration.
//!
//! This module provides the small value objects an [`AppConfig`](super::AppConfig)
//! is assembled from. Values that can be invalid are validated on construction.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// The client identifier/secret pair issued to the app by Shopify.
///
/// Credentials are not required to be non-empty at construction time; use
/// [`is_complete`](Self::is_complete) to check them before relying on them.
///
/// # Security
///
/// The `Debug` implementation masks the client secret.
///
/// # Example
///
/// ```rust
/// use shopify_app::Credentials;
///
/// let credentials = Credentials::new("client-id", "client-secret");
/// assert_eq!(credentials.client_id(), "client-id");
/// assert!(credentials.is_complete());
/// assert!(!format!("{:?}", credentials).contains("client-secret"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client identifier (the app's API key).
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns `true` if both the client id and secret are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"*****")
            .finish()
    }
}

/// A validated, absolute host URL for the application.
///
/// # Example
///
/// ```rust
/// use shopify_app::HostUrl;
///
/// let url = HostUrl::new("https://myapp.example.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("myapp.example.com"));
/// assert_eq!(
///     url.join_path("/auth/install").unwrap(),
///     "https://myapp.example.com/auth/install"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(Url);

impl HostUrl {
    /// Parses and validates a host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the string contains control
    /// characters or is not an absolute URL.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref();

        // The URL parser silently strips some control characters; reject them instead.
        if raw.chars().any(char::is_control) {
            return Err(ConfigError::InvalidHostUrl {
                url: raw.escape_default().to_string(),
                reason: "contains control characters".to_string(),
            });
        }

        Url::parse(raw)
            .map(Self)
            .map_err(|e| ConfigError::InvalidHostUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL, if any.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the underlying parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Appends `path` to this URL's path and returns the resulting URL string.
    ///
    /// Segments are appended after the existing path, so a host of
    /// `https://example.com/app` joined with `/auth/install` yields
    /// `https://example.com/app/auth/install`. `.` segments are dropped and
    /// `..` removes the previous segment. A trailing `/` on `path` is kept.
    ///
    /// Each segment is percent-decoded and then encoded exactly once: `%20`
    /// stays `%20`, and a literal `?` or `#` becomes `%3F` or `%23`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CallbackUrlDerivation`] if the URL cannot carry
    /// a path (e.g., `mailto:` URLs) or a segment holds a malformed
    /// percent-escape such as `%zz`.
    pub fn join_path(&self, path: &str) -> Result<String, ConfigError> {
        let fail = |reason: &str| ConfigError::CallbackUrlDerivation {
            host: self.0.to_string(),
            path: path.escape_default().to_string(),
            reason: reason.to_string(),
        };

        let mut joined = self.0.clone();
        {
            let mut segments = joined
                .path_segments_mut()
                .map_err(|()| fail("host URL cannot be a base"))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                match segment {
                    "." => {}
                    ".." => {
                        segments.pop();
                    }
                    _ => {
                        let decoded = decode_segment(segment)
                            .ok_or_else(|| fail("path contains an invalid percent-escape"))?;
                        segments.push(&decoded);
                    }
                }
            }
            if path.ends_with('/') && path.len() > 1 {
                segments.push("");
            }
        }

        Ok(joined.into())
    }
}

/// Decodes `%XX` escapes, or returns `None` if an escape is malformed or the
/// result is not UTF-8.
fn decode_segment(segment: &str) -> Option<Cow<'_, str>> {
    let bytes = segment.as_bytes();
    let well_formed = bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        });
    if !well_formed {
        return None;
    }
    urlencoding::decode(segment).ok()
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// An opaque reference to a tenant storefront.
///
/// A `Shop` only guarantees that its domain is non-empty. Use
/// [`App::validate_shop`](crate::App::validate_shop) to turn an untrusted
/// identifier into a `Shop` that passed the app's trusted-domain check.
///
/// # Example
///
/// ```rust
/// use shopify_app::Shop;
///
/// let shop = Shop::new("my-store.myshopify.com").unwrap();
/// assert_eq!(shop.as_ref(), "my-store.myshopify.com");
/// assert!(Shop::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shop(String);

impl Shop {
    /// Creates a shop reference from its domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is blank.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let trimmed = domain.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the shop's domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Shop {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Shop {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Shop {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
