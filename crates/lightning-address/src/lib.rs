//! Lightning Address to BOLT11 invoice resolution.
//!
//! This crate turns a Lightning Address (`user@domain.com`, LUD-16) into a
//! payable BOLT11 invoice using the LNURL-pay protocol (LUD-06):
//!
//! 1. Parse the address into username and domain.
//! 2. Fetch payment parameters from `https://domain/.well-known/lnurlp/user`.
//! 3. Check the requested amount against `minSendable`/`maxSendable`.
//! 4. Ask the callback URL for an invoice.
//!
//! Paying or decoding the invoice is out of scope.
//!
//! # Example
//!
//! ```no_run
//! use lightning_address::{ClientConfig, InvoiceResult, LnurlPayClient};
//!
//! # async fn example() -> Result<(), lightning_address::LnAddressError> {
//! let client = LnurlPayClient::new(ClientConfig::default())?;
//!
//! match client.resolve("alice@getalby.com", Some(21)).await? {
//!     InvoiceResult::Invoice(pr) => println!("Pay: {}", pr),
//!     InvoiceResult::Rejected(reason) => println!("Rejected: {}", reason),
//! }
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod lnurl;
pub mod types;

pub use address::{LightningAddress, Scheme};
pub use amount::{select_amount, MSATS_PER_SAT};
pub use client::{invoice_request_url, LnurlPayClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{LnAddressError, Result};
pub use types::{InvoiceResult, PaymentParameters};

/// Resolve `address` to an invoice with the default configuration.
pub async fn resolve(address: &str, amount_sats: Option<u64>) -> Result<InvoiceResult> {
    LnurlPayClient::new(ClientConfig::default())?
        .resolve(address, amount_sats)
        .await
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
