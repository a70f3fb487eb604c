//! Tutorial mode: runs the pipeline one step at a time and narrates it.

use lightning_address::{
    invoice_request_url, select_amount, InvoiceResult, LightningAddress, LnurlPayClient, Result,
};

pub async fn run(
    client: &LnurlPayClient,
    address: &LightningAddress,
    amount_sats: Option<u64>,
) -> Result<InvoiceResult> {
    println!("=== Step 1: Lightning Address to discovery URL ===");
    println!("  Username:      {}", address.username());
    println!("  Domain:        {}", address.domain());
    println!("  Discovery URL: {}", client.discovery_url(address));

    println!();
    println!("=== Step 2: Fetching payment parameters ===");
    let params = client.fetch_pay_params(address).await?;
    println!("  Callback URL:  {}", params.callback);
    println!(
        "  Min sendable:  {} msat ({} sats)",
        params.min_sendable,
        msat_as_sats(params.min_sendable)
    );
    println!(
        "  Max sendable:  {} msat ({} sats)",
        params.max_sendable,
        msat_as_sats(params.max_sendable)
    );
    if let Some(description) = params.description() {
        println!("  Description:   {}", description);
    }

    println!();
    println!("=== Step 3: Choosing the amount ===");
    let amount_msat = select_amount(&params, amount_sats)?;
    match amount_sats {
        Some(sats) => println!("  {} sats = {} msat", sats, amount_msat),
        None => println!("  No amount given, using the minimum: {} msat", amount_msat),
    }
    println!(
        "  Invoice request URL: {}",
        invoice_request_url(&params.callback, amount_msat)
    );

    println!();
    println!("=== Step 4: Requesting the invoice ===");
    let result = client.request_invoice(&params, amount_msat).await?;
    match &result {
        InvoiceResult::Invoice(pr) => println!("  BOLT11 length: {} characters", pr.len()),
        InvoiceResult::Rejected(reason) => println!("  Service rejected the request: {}", reason),
    }
    println!();

    Ok(result)
}

/// Render a millisat value in sats, keeping fractional sats.
fn msat_as_sats(msat: u64) -> String {
    if msat % 1000 == 0 {
        (msat / 1000).to_string()
    } else {
        format!("{}.{:03}", msat / 1000, msat % 1000)
    }
}
