//! CSRF state carried through the OAuth redirect.
//!
//! A [`StateParam`] is either a bare 15-character alphanumeric nonce or a
//! base64-encoded JSON object holding a nonce plus caller data that should
//! survive the round trip to Shopify.
//!
//! # Example
//!
//! ```rust
//! use shopify_app::auth::oauth::StateParam;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct ReturnTo {
//!     path: String,
//! }
//!
//! let state = StateParam::with_data(&ReturnTo { path: "/orders".to_string() });
//! assert_eq!(state.extract_nonce().len(), 15);
//! assert_eq!(
//!     state.extract_data::<ReturnTo>(),
//!     Some(ReturnTo { path: "/orders".to_string() })
//! );
//! ```

use base64::prelude::*;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

const NONCE_LENGTH: usize = 15;

/// OAuth state value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
    structured: bool,
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    nonce: &'a str,
    data: &'a T,
}

#[derive(Deserialize)]
struct OpenedEnvelope<T> {
    nonce: String,
    data: T,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

impl StateParam {
    /// Creates a state holding only a fresh random nonce.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: generate_nonce(),
            structured: false,
        }
    }

    /// Creates a state holding a fresh nonce and `data`.
    ///
    /// If `data` cannot be serialized to JSON the state degrades to a bare
    /// nonce and a warning is logged.
    #[must_use]
    pub fn with_data<T: Serialize>(data: &T) -> Self {
        let nonce = generate_nonce();
        match serde_json::to_vec(&Envelope {
            nonce: &nonce,
            data,
        }) {
            Ok(json) => Self {
                value: BASE64_STANDARD.encode(json),
                structured: true,
            },
            Err(e) => {
                tracing::warn!("Could not embed data in OAuth state: {}", e);
                Self {
                    value: nonce,
                    structured: false,
                }
            }
        }
    }

    /// Wraps a state string received from a callback or stored by the caller.
    ///
    /// Values that decode as a structured envelope are treated as structured.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let value = raw.into();
        let structured = open::<serde_json::Value>(&value).is_some();
        Self { value, structured }
    }

    /// Returns the full state value as sent to Shopify.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the nonce, decoding the envelope of a structured state.
    #[must_use]
    pub fn extract_nonce(&self) -> String {
        if self.structured {
            if let Some(envelope) = open::<serde_json::Value>(&self.value) {
                return envelope.nonce;
            }
        }
        self.value.clone()
    }

    /// Returns the embedded data, or `None` for a bare nonce or a type mismatch.
    #[must_use]
    pub fn extract_data<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.structured {
            return None;
        }
        open::<T>(&self.value).map(|envelope| envelope.data)
    }
}

fn open<T: DeserializeOwned>(value: &str) -> Option<OpenedEnvelope<T>> {
    let decoded = BASE64_STANDARD.decode(value.as_bytes()).ok()?;
    serde_json::from_slice(&decoded).ok()
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_alphanumeric_nonce() {
        let state = StateParam::new();
        assert_eq!(state.as_str().len(), 15);
        assert!(state.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(state.extract_nonce(), state.as_str());
    }

    #[test]
    fn test_new_nonces_differ() {
        assert_ne!(StateParam::new(), StateParam::new());
    }

    #[test]
    fn test_bare_state_has_no_data() {
        let state = StateParam::new();
        assert!(state.extract_data::<String>().is_none());
    }

    #[test]
    fn test_structured_state_round_trips_through_raw() {
        let issued = StateParam::with_data(&vec![1, 2, 3]);
        let received = StateParam::from_raw(issued.to_string());

        assert_eq!(received, issued);
        assert_eq!(received.extract_nonce(), issued.extract_nonce());
        assert_eq!(received.extract_data::<Vec<i32>>(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_extract_data_type_mismatch() {
        let state = StateParam::with_data(&"text");
        assert!(state.extract_data::<u64>().is_none());
    }

    #[test]
    fn test_from_raw_plain_string() {
        let state = StateParam::from_raw("custom-state");
        assert_eq!(state.as_ref(), "custom-state");
        assert_eq!(state.extract_nonce(), "custom-state");
    }
}
