//! Error types for lightning-address.

use thiserror::Error;

/// Errors that can occur while turning a Lightning Address into an invoice.
#[derive(Debug, Error)]
pub enum LnAddressError {
    /// The input is not of the form `user@domain.tld`.
    #[error("Invalid Lightning Address '{0}': expected user@domain.tld")]
    InvalidAddress(String),

    /// Fetching or decoding the LNURL-pay parameters failed.
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),

    /// Requested amount is below the advertised `minSendable`.
    #[error(
        "Amount {requested_sats} sats is below the minimum; accepted range is {} to {} sats",
        .min_msat.div_ceil(1000),
        .max_msat / 1000
    )]
    AmountTooLow {
        requested_sats: u64,
        min_msat: u64,
        max_msat: u64,
    },

    /// Requested amount is above the advertised `maxSendable`.
    #[error(
        "Amount {requested_sats} sats is above the maximum; accepted range is {} to {} sats",
        .min_msat.div_ceil(1000),
        .max_msat / 1000
    )]
    AmountTooHigh {
        requested_sats: u64,
        min_msat: u64,
        max_msat: u64,
    },

    /// The callback answered with neither `pr` nor `reason`.
    #[error("Unexpected response format: {0}")]
    UnexpectedResponseFormat(String),

    /// Transport failure, non-success status or non-JSON body on the invoice hop.
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// LNURL bech32 encoding or decoding failed.
    #[error("LNURL encoding error: {0}")]
    LnurlEncoding(String),
}

/// Result type for lightning-address operations.
pub type Result<T> = std::result::Result<T, LnAddressError>;

impl From<bech32::Error> for LnAddressError {
    fn from(err: bech32::Error) -> Self {
        LnAddressError::LnurlEncoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_errors_show_range_in_sats() {
        let low = LnAddressError::AmountTooLow {
            requested_sats: 0,
            min_msat: 1_500,
            max_msat: 100_000_000,
        };
        assert!(low.to_string().contains("accepted range is 2 to 100000 sats"));

        let high = LnAddressError::AmountTooHigh {
            requested_sats: 200_000,
            min_msat: 1_000,
            max_msat: 100_000_000,
        };
        let msg = high.to_string();
        assert!(msg.contains("200000 sats"));
        assert!(msg.contains("accepted range is 1 to 100000 sats"));
    }
}
