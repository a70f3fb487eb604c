//! LNURL-pay response types.
//!
//! Raw service responses are decoded into either a complete value or a
//! structured error. Missing fields never leak out as half-filled structs.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::{LnAddressError, Result};

/// Raw `payRequest` response from the discovery endpoint (LUD-06).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayResponse {
    callback: Option<String>,
    min_sendable: Option<u64>,
    max_sendable: Option<u64>,
    metadata: Option<String>,
    tag: Option<String>,
    status: Option<String>,
    reason: Option<String>,
}

/// Raw callback response.
#[derive(Debug, Deserialize)]
struct InvoiceResponse {
    pr: Option<String>,
    reason: Option<String>,
}

/// Payment parameters advertised by an LNURL-pay service.
///
/// Always satisfies `0 < min_sendable <= max_sendable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentParameters {
    /// Endpoint to request invoices from.
    pub callback: Url,
    /// Minimum amount in millisatoshis.
    pub min_sendable: u64,
    /// Maximum amount in millisatoshis.
    pub max_sendable: u64,
    /// Raw LUD-06 metadata string, if the service sent one.
    pub metadata: Option<String>,
}

impl PaymentParameters {
    /// Decode a discovery response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| LnAddressError::DiscoveryFailed(format!("invalid JSON: {}", e)))?;
        let object = json_object(value).ok_or_else(|| {
            LnAddressError::DiscoveryFailed("response is not a JSON object".to_string())
        })?;
        let raw: PayResponse = serde_json::from_value(object)
            .map_err(|e| LnAddressError::DiscoveryFailed(format!("invalid response: {}", e)))?;

        if raw
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("ERROR"))
        {
            return Err(LnAddressError::DiscoveryFailed(format!(
                "service returned error: {}",
                raw.reason.as_deref().unwrap_or("no reason given")
            )));
        }

        if let Some(tag) = raw.tag.as_deref() {
            if tag != "payRequest" {
                return Err(LnAddressError::DiscoveryFailed(format!(
                    "unexpected tag '{}', expected 'payRequest'",
                    tag
                )));
            }
        }

        let callback = raw.callback.ok_or_else(|| missing("callback"))?;
        let min_sendable = raw.min_sendable.ok_or_else(|| missing("minSendable"))?;
        let max_sendable = raw.max_sendable.ok_or_else(|| missing("maxSendable"))?;

        let callback = Url::parse(&callback).map_err(|e| {
            LnAddressError::DiscoveryFailed(format!("invalid callback URL '{}': {}", callback, e))
        })?;

        if min_sendable == 0 || min_sendable > max_sendable {
            return Err(LnAddressError::DiscoveryFailed(format!(
                "invalid sendable range: minSendable={} maxSendable={}",
                min_sendable, max_sendable
            )));
        }

        Ok(Self {
            callback,
            min_sendable,
            max_sendable,
            metadata: raw.metadata,
        })
    }

    /// Smallest whole-sat amount the service accepts.
    pub fn min_sats(&self) -> u64 {
        self.min_sendable.div_ceil(1000)
    }

    /// Largest whole-sat amount the service accepts.
    pub fn max_sats(&self) -> u64 {
        self.max_sendable / 1000
    }

    /// The `text/plain` description from the metadata, if present.
    pub fn description(&self) -> Option<String> {
        let metadata = self.metadata.as_deref()?;
        let entries: Vec<Vec<Value>> = serde_json::from_str(metadata).ok()?;
        entries.into_iter().find_map(|entry| match entry.as_slice() {
            [Value::String(kind), Value::String(text)] if kind == "text/plain" => {
                Some(text.clone())
            }
            _ => None,
        })
    }
}

/// Keep only JSON objects. Derived struct impls would otherwise accept arrays
/// and fill fields by position.
fn json_object(value: Value) -> Option<Value> {
    match value {
        Value::Object(_) => Some(value),
        _ => None,
    }
}

fn missing(field: &str) -> LnAddressError {
    LnAddressError::DiscoveryFailed(format!("missing field '{}'", field))
}

/// Outcome of a successful callback exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceResult {
    /// BOLT11 payment request, casing preserved as received.
    Invoice(String),
    /// The service declined to issue an invoice.
    Rejected(String),
}

impl InvoiceResult {
    /// Decode a callback response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| LnAddressError::Network(format!("invalid JSON from callback: {}", e)))?;

        let object = json_object(value).ok_or_else(|| {
            LnAddressError::UnexpectedResponseFormat("response is not a JSON object".to_string())
        })?;
        let raw: InvoiceResponse = serde_json::from_value(object)
            .map_err(|e| LnAddressError::UnexpectedResponseFormat(e.to_string()))?;

        match (raw.pr, raw.reason) {
            (Some(pr), _) if !pr.is_empty() => Ok(InvoiceResult::Invoice(pr)),
            (_, Some(reason)) => Ok(InvoiceResult::Rejected(reason)),
            _ => Err(LnAddressError::UnexpectedResponseFormat(
                "response has neither 'pr' nor 'reason'".to_string(),
            )),
        }
    }

    pub fn invoice(&self) -> Option<&str> {
        match self {
            InvoiceResult::Invoice(pr) => Some(pr),
            InvoiceResult::Rejected(_) => None,
        }
    }

    pub fn is_invoice(&self) -> bool {
        matches!(self, InvoiceResult::Invoice(_))
    }

    /// Render for display with the invoice uppercased (QR alphanumeric mode).
    /// Rejection reasons are returned as-is.
    pub fn display_upper(&self) -> String {
        match self {
            InvoiceResult::Invoice(pr) => pr.to_uppercase(),
            InvoiceResult::Rejected(reason) => reason.clone(),
        }
    }
}
