//! Amount selection against the advertised sendable range.

use crate::error::{LnAddressError, Result};
use crate::types::PaymentParameters;

/// Millisatoshis per satoshi.
pub const MSATS_PER_SAT: u64 = 1000;

/// Pick the millisat amount to request.
///
/// Without an amount the service minimum is used. A caller amount is
/// converted from sats to msats and must fall inside
/// `min_sendable..=max_sendable`; it is never adjusted.
pub fn select_amount(params: &PaymentParameters, amount_sats: Option<u64>) -> Result<u64> {
    let Some(sats) = amount_sats else {
        return Ok(params.min_sendable);
    };

    let too_high = || LnAddressError::AmountTooHigh {
        requested_sats: sats,
        min_msat: params.min_sendable,
        max_msat: params.max_sendable,
    };

    let msats = sats.checked_mul(MSATS_PER_SAT).ok_or_else(too_high)?;

    if msats < params.min_sendable {
        return Err(LnAddressError::AmountTooLow {
            requested_sats: sats,
            min_msat: params.min_sendable,
            max_msat: params.max_sendable,
        });
    }
    if msats > params.max_sendable {
        return Err(too_high());
    }

    Ok(msats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn params(min: u64, max: u64) -> PaymentParameters {
        PaymentParameters {
            callback: Url::parse("https://svc/cb").unwrap(),
            min_sendable: min,
            max_sendable: max,
            metadata: None,
        }
    }

    #[test]
    fn test_absent_amount_uses_minimum() {
        assert_eq!(select_amount(&params(1000, 100_000_000), None).unwrap(), 1000);
        assert_eq!(select_amount(&params(1500, 2000), None).unwrap(), 1500);
    }

    #[test]
    fn test_amount_in_range_is_converted_exactly() {
        let p = params(1000, 100_000_000);
        assert_eq!(select_amount(&p, Some(5)).unwrap(), 5000);
        assert_eq!(select_amount(&p, Some(1)).unwrap(), 1000);
        assert_eq!(select_amount(&p, Some(100_000)).unwrap(), 100_000_000);
    }

    #[test]
    fn test_amount_below_minimum() {
        let err = select_amount(&params(10_000, 100_000), Some(9)).unwrap_err();
        assert!(matches!(
            err,
            LnAddressError::AmountTooLow {
                requested_sats: 9,
                min_msat: 10_000,
                max_msat: 100_000
            }
        ));

        let err = select_amount(&params(1000, 100_000), Some(0)).unwrap_err();
        assert!(matches!(err, LnAddressError::AmountTooLow { .. }));
    }

    #[test]
    fn test_amount_above_maximum() {
        let err = select_amount(&params(1000, 100_000), Some(101)).unwrap_err();
        assert!(matches!(
            err,
            LnAddressError::AmountTooHigh {
                requested_sats: 101,
                ..
            }
        ));
    }

    #[test]
    fn test_amount_overflow_is_too_high() {
        let err = select_amount(&params(1000, u64::MAX), Some(u64::MAX / 10)).unwrap_err();
        assert!(matches!(err, LnAddressError::AmountTooHigh { .. }));
    }

    #[test]
    fn test_fractional_minimum_needs_next_whole_sat() {
        let p = params(1500, 10_000);
        assert!(matches!(
            select_amount(&p, Some(1)),
            Err(LnAddressError::AmountTooLow { .. })
        ));
        assert_eq!(select_amount(&p, Some(2)).unwrap(), 2000);
    }
}
