//! LNURL-pay HTTP client.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::address::{LightningAddress, Scheme};
use crate::amount::select_amount;
use crate::config::ClientConfig;
use crate::error::{LnAddressError, Result};
use crate::types::{InvoiceResult, PaymentParameters};

/// Client that turns Lightning Addresses into BOLT11 invoices.
///
/// Holds no state between calls besides the connection pool, so one
/// client can serve any number of independent resolutions.
#[derive(Clone)]
pub struct LnurlPayClient {
    http: Client,
    config: ClientConfig,
}

impl LnurlPayClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LnAddressError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Discovery URL for `address`, honouring `allow_http`.
    pub fn discovery_url(&self, address: &LightningAddress) -> String {
        if self.config.allow_http {
            address.discovery_url_with(Scheme::Http)
        } else {
            address.discovery_url()
        }
    }

    /// Fetch and decode the LNURL-pay parameters for `address`.
    pub async fn fetch_pay_params(&self, address: &LightningAddress) -> Result<PaymentParameters> {
        let url = self.discovery_url(address);
        debug!("Fetching LNURL-pay parameters from: {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            LnAddressError::DiscoveryFailed(format!("request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LnAddressError::DiscoveryFailed(format!(
                "HTTP {} from {}",
                status, url
            )));
        }

        let body = response.text().await.map_err(|e| {
            LnAddressError::DiscoveryFailed(format!("failed to read response body: {}", e))
        })?;

        let params = PaymentParameters::from_json(&body)?;
        info!(
            address = %address,
            callback = %params.callback,
            min_sendable = params.min_sendable,
            max_sendable = params.max_sendable,
            "Resolved LNURL-pay parameters"
        );

        Ok(params)
    }

    /// Request an invoice for `amount_msat` from the callback in `params`.
    pub async fn request_invoice(
        &self,
        params: &PaymentParameters,
        amount_msat: u64,
    ) -> Result<InvoiceResult> {
        let url = invoice_request_url(&params.callback, amount_msat);
        debug!("Requesting invoice from: {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LnAddressError::Network(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LnAddressError::Network(match error_reason(&body) {
                Some(reason) => format!("HTTP {} from callback: {}", status, reason),
                None => format!("HTTP {} from callback", status),
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LnAddressError::Network(format!("failed to read response body: {}", e)))?;

        let result = InvoiceResult::from_json(&body)?;
        match &result {
            InvoiceResult::Invoice(pr) => {
                info!(amount_msat, length = pr.len(), "Received BOLT11 invoice")
            }
            InvoiceResult::Rejected(reason) => warn!("Invoice request rejected: {}", reason),
        }

        Ok(result)
    }

    /// Run the whole pipeline: parse, discover, validate, request.
    ///
    /// Stops at the first failing stage; no request is retried and no later
    /// request is made.
    pub async fn resolve(&self, address: &str, amount_sats: Option<u64>) -> Result<InvoiceResult> {
        let address = LightningAddress::parse(address)?;
        debug!(stage = "parsed", address = %address);

        self.resolve_address(&address, amount_sats).await
    }

    /// Run the pipeline for an already parsed address.
    pub async fn resolve_address(
        &self,
        address: &LightningAddress,
        amount_sats: Option<u64>,
    ) -> Result<InvoiceResult> {
        let params = self.fetch_pay_params(address).await?;
        debug!(stage = "discovered", callback = %params.callback);

        let amount_msat = select_amount(&params, amount_sats)?;
        debug!(stage = "validated", amount_msat);

        let result = self.request_invoice(&params, amount_msat).await?;
        debug!(stage = "invoiced", invoice = result.is_invoice());

        Ok(result)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for LnurlPayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LnurlPayClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Callback URL with `amount=<msat>` appended to any existing query.
pub fn invoice_request_url(callback: &Url, amount_msat: u64) -> Url {
    let mut url = callback.clone();
    url.query_pairs_mut()
        .append_pair("amount", &amount_msat.to_string());
    url
}

fn error_reason(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("reason")?.as_str().map(str::to_string)
}
