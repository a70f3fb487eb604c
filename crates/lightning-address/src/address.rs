//! Lightning Address parsing and LNURL-pay discovery URLs (LUD-16).

use std::fmt;
use std::str::FromStr;

use crate::error::{LnAddressError, Result};
use crate::lnurl;

/// URL scheme used for the discovery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

/// A parsed `username@domain` Lightning Address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightningAddress {
    username: String,
    domain: String,
}

impl LightningAddress {
    /// Parse a Lightning Address.
    ///
    /// Surrounding whitespace is ignored. The address must split on `@`
    /// into exactly two non-empty parts and the domain must contain a `.`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split('@').collect();
        if parts.len() != 2 {
            return Err(LnAddressError::InvalidAddress(trimmed.to_string()));
        }

        let username = parts[0];
        let domain = parts[1];
        if username.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(LnAddressError::InvalidAddress(trimmed.to_string()));
        }

        Ok(Self {
            username: username.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The LNURL-pay discovery URL, always `https://domain/.well-known/lnurlp/user`.
    pub fn discovery_url(&self) -> String {
        self.discovery_url_with(Scheme::Https)
    }

    /// The discovery URL built with an explicit scheme.
    pub fn discovery_url_with(&self, scheme: Scheme) -> String {
        format!(
            "{}://{}/.well-known/lnurlp/{}",
            scheme.as_str(),
            self.domain,
            self.username
        )
    }

    /// Bech32 LNURL (`LNURL1...`) wrapping the discovery URL.
    pub fn to_lnurl(&self) -> Result<String> {
        lnurl::encode(&self.discovery_url())
    }
}

impl FromStr for LightningAddress {
    type Err = LnAddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_address() {
        let addr = LightningAddress::parse("alice@getalby.com").unwrap();
        assert_eq!(addr.username(), "alice");
        assert_eq!(addr.domain(), "getalby.com");
        assert_eq!(addr.to_string(), "alice@getalby.com");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr: LightningAddress = "  bob@walletofsatoshi.com\n".parse().unwrap();
        assert_eq!(addr.username(), "bob");
        assert_eq!(addr.domain(), "walletofsatoshi.com");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "alice",
            "alice.example.com",
            "alice@@example.com",
            "a@b@example.com",
            "@example.com",
            "alice@",
            "alice@localhost",
        ] {
            let err = LightningAddress::parse(input).unwrap_err();
            assert!(
                matches!(err, LnAddressError::InvalidAddress(_)),
                "expected InvalidAddress for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_discovery_url() {
        let addr = LightningAddress::parse("satoshi@bitcoin.org").unwrap();
        assert_eq!(
            addr.discovery_url(),
            "https://bitcoin.org/.well-known/lnurlp/satoshi"
        );
    }

    #[test]
    fn test_discovery_url_is_plain_interpolation() {
        let addr = LightningAddress::parse("Mixed.Case+tag@Pay.Example.com:8443").unwrap();
        assert_eq!(
            addr.discovery_url(),
            "https://Pay.Example.com:8443/.well-known/lnurlp/Mixed.Case+tag"
        );
    }

    #[test]
    fn test_onion_domain_uses_https() {
        let addr = LightningAddress::parse("user@abc.onion").unwrap();
        assert_eq!(
            addr.discovery_url(),
            "https://abc.onion/.well-known/lnurlp/user"
        );
    }

    #[test]
    fn test_discovery_url_with_explicit_scheme() {
        let addr = LightningAddress::parse("alice@127.0.0.1:3000").unwrap();
        assert_eq!(
            addr.discovery_url_with(Scheme::Http),
            "http://127.0.0.1:3000/.well-known/lnurlp/alice"
        );
    }
}
