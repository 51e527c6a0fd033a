//! Trusted shop-domain matching.
//!
//! Inbound requests name the shop they act for in a `shop` query parameter or
//! header. [`ShopDomainMatcher`] decides whether such an identifier belongs to
//! one of the domains the app trusts before anything else relies on it.

use crate::error::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

/// Domains every matcher trusts: the standard, legacy, and regional hosts.
pub const DEFAULT_SHOP_DOMAINS: [&str; 3] = ["myshopify.com", "shopify.com", "myshopify.io"];

/// First character alphanumeric, then alphanumerics, `-`, or `_`.
const SUBDOMAIN_PATTERN: &str = "[a-zA-Z0-9][a-zA-Z0-9_-]*";

static DEFAULT_MATCHER: LazyLock<ShopDomainMatcher> = LazyLock::new(|| {
    ShopDomainMatcher::new(std::iter::empty::<&str>())
        .expect("default shop domains form a valid pattern")
});

/// Accepts `<subdomain>.<trusted domain>` identifiers, optionally followed by `/`.
///
/// The whole candidate must match; there is no substring matching and no
/// pre-processing other than what the grammar itself tolerates.
///
/// # Example
///
/// ```rust
/// use shopify_app::ShopDomainMatcher;
///
/// let matcher = ShopDomainMatcher::default();
/// assert!(matcher.matches("my-shop1.myshopify.com"));
/// assert!(matcher.matches("my-shop1.myshopify.com//"));
/// assert!(!matcher.matches("myshop.notshopify.com"));
///
/// let matcher = ShopDomainMatcher::new(["example.org"]).unwrap();
/// assert!(matcher.matches("tenant.example.org"));
/// assert!(matcher.matches("tenant.myshopify.io"));
/// ```
#[derive(Clone, Debug)]
pub struct ShopDomainMatcher {
    pattern: Regex,
    domains: Vec<String>,
}

impl ShopDomainMatcher {
    /// Builds a matcher trusting [`DEFAULT_SHOP_DOMAINS`] plus `custom_domains`.
    ///
    /// Custom domains are added to the defaults, never to a previously built
    /// matcher. Duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DomainPatternCompilation`] if a custom domain is
    /// not a dotted host name or the resulting pattern fails to compile.
    pub fn new<I, S>(custom_domains: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains: Vec<String> = DEFAULT_SHOP_DOMAINS
            .iter()
            .map(|d| (*d).to_string())
            .collect();

        for domain in custom_domains {
            let domain = domain.as_ref().trim();
            Self::validate_domain(domain)?;
            if !domains.iter().any(|d| d == domain) {
                domains.push(domain.to_string());
            }
        }

        let alternatives = domains
            .iter()
            .map(|d| regex::escape(d))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!("^{SUBDOMAIN_PATTERN}\\.(?:{alternatives})/*$");

        let pattern = Regex::new(&source).map_err(|e| ConfigError::DomainPatternCompilation {
            reason: e.to_string(),
        })?;

        Ok(Self { pattern, domains })
    }

    /// Returns `true` if `candidate` is a subdomain of a trusted domain.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }

    /// Returns the trusted domains, defaults first.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Returns the compiled pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    fn validate_domain(domain: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::DomainPatternCompilation {
            reason: format!("'{domain}' {reason}"),
        };

        if domain.is_empty() {
            return Err(invalid("is empty"));
        }
        if !domain.contains('.') {
            return Err(invalid("is a single label; expected a dotted host name"));
        }

        for label in domain.split('.') {
            if label.is_empty() {
                return Err(invalid("contains an empty label"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(invalid("has a label starting or ending with '-'"));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(invalid("contains characters outside [a-zA-Z0-9-]"));
            }
        }

        Ok(())
    }
}

impl Default for ShopDomainMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matcher_accepts_trusted_domains() {
        let matcher = ShopDomainMatcher::default();
        assert!(matcher.matches("my-shop1.myshopify.com"));
        assert!(matcher.matches("store.shopify.com"));
        assert!(matcher.matches("store.myshopify.io"));
        assert!(matcher.matches("Store_2.myshopify.com"));
        assert!(matcher.matches("a.myshopify.com"));
    }

    #[test]
    fn test_default_matcher_rejects_untrusted_domains() {
        let matcher = ShopDomainMatcher::default();
        assert!(!matcher.matches("myshop.notshopify.com"));
        assert!(!matcher.matches("myshop.myshopify.com.evil.com"));
        assert!(!matcher.matches("myshop.example.org"));
        assert!(!matcher.matches("myshopify.com"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_subdomain_grammar() {
        let matcher = ShopDomainMatcher::default();
        // First character must be alphanumeric
        assert!(!matcher.matches("-shop.myshopify.com"));
        assert!(!matcher.matches("_shop.myshopify.com"));
        // No nested subdomains
        assert!(!matcher.matches("a.b.myshopify.com"));
        // No other characters
        assert!(!matcher.matches("my shop.myshopify.com"));
        // The separator is a literal dot
        assert!(!matcher.matches("myshopXmyshopify.com"));
        assert!(!matcher.matches("myshop.myshopifyXcom"));
    }

    #[test]
    fn test_trailing_slashes_tolerated() {
        let matcher = ShopDomainMatcher::default();
        assert!(matcher.matches("shop.myshopify.com/"));
        assert!(matcher.matches("shop.myshopify.com///"));
        assert!(!matcher.matches("shop.myshopify.com/admin"));
        assert!(!matcher.matches("/shop.myshopify.com"));
    }

    #[test]
    fn test_custom_domains_extend_defaults() {
        let matcher = ShopDomainMatcher::new(["example.org", "shops.example.net"]).unwrap();
        assert!(matcher.matches("tenant.example.org"));
        assert!(matcher.matches("tenant.shops.example.net"));
        assert!(matcher.matches("tenant.myshopify.com"));
        assert!(matcher.matches("tenant.shopify.com"));
        assert!(matcher.matches("tenant.myshopify.io"));
        assert!(!matcher.matches("tenant.example.com"));
        assert_eq!(matcher.domains().len(), 5);
    }

    #[test]
    fn test_duplicate_domains_are_ignored() {
        let matcher =
            ShopDomainMatcher::new(["myshopify.com", "example.org", "example.org"]).unwrap();
        assert_eq!(
            matcher.domains(),
            &["myshopify.com", "shopify.com", "myshopify.io", "example.org"]
        );
    }

    #[test]
    fn test_malformed_domains_are_rejected() {
        let malformed = [
            "",
            "example..org",
            ".example.org",
            "exa(mple.org",
            "ex|ample.org",
            "-bad.org",
            "a b.org",
        ];
        for domain in malformed {
            let result = ShopDomainMatcher::new([domain]);
            assert!(
                matches!(result, Err(ConfigError::DomainPatternCompilation { .. })),
                "domain {domain:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_single_label_domains_are_rejected() {
        for domain in ["localhost", "org", "internal-"] {
            assert!(
                matches!(
                    ShopDomainMatcher::new([domain]),
                    Err(ConfigError::DomainPatternCompilation { .. })
                ),
                "domain {domain:?} should be rejected"
            );
        }
        assert!(ShopDomainMatcher::new(["shops.localhost"]).is_ok());
    }

    #[test]
    fn test_default_matcher_pattern_is_anchored() {
        let matcher = ShopDomainMatcher::default();
        assert!(matcher.as_str().starts_with('^'));
        assert!(matcher.as_str().ends_with('$'));
    }

    #[test]
    fn test_matcher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShopDomainMatcher>();
    }
}
