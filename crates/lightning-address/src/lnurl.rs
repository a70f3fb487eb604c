//! Bech32 LNURL encoding (LUD-01).

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::{LnAddressError, Result};

const HRP: &str = "lnurl";

/// Encode a URL as an uppercase `LNURL1...` string.
pub fn encode(url: &str) -> Result<String> {
    let encoded = bech32::encode(HRP, url.as_bytes().to_base32(), Variant::Bech32)?;
    Ok(encoded.to_uppercase())
}

/// Decode an LNURL back into its URL. Accepts an optional `lightning:` prefix.
pub fn decode(lnurl: &str) -> Result<String> {
    let trimmed = lnurl.trim();
    let stripped = match trimmed.get(..10) {
        Some(prefix) if prefix.eq_ignore_ascii_case("lightning:") => &trimmed[10..],
        _ => trimmed,
    };

    let (hrp, data, variant) = bech32::decode(stripped)?;
    if variant != Variant::Bech32 {
        return Err(LnAddressError::LnurlEncoding(
            "LNURL must use bech32, not bech32m".to_string(),
        ));
    }
    if hrp != HRP {
        return Err(LnAddressError::LnurlEncoding(format!(
            "unexpected prefix '{}', expected '{}'",
            hrp, HRP
        )));
    }

    let bytes = Vec::<u8>::from_base32(&data)?;
    String::from_utf8(bytes).map_err(|e| LnAddressError::LnurlEncoding(e.to_string()))
}
