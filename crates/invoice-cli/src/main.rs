//! `ln-invoice`: turn a Lightning Address into a BOLT11 invoice.

mod explain;
mod prompt;

use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use lightning_address::{ClientConfig, InvoiceResult, LightningAddress, LnurlPayClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ln-invoice")]
#[command(version, about = "Generate a BOLT11 invoice from a Lightning Address")]
struct Args {
    /// Lightning Address (user@domain.com). Prompted for if omitted.
    #[arg(short = 'r', long)]
    lnaddress: Option<String>,

    /// Amount in sats. Prompted for if omitted; an empty answer uses the service minimum.
    #[arg(short, long)]
    amount: Option<u64>,

    /// Print the invoice in uppercase (QR-code friendly)
    #[arg(long)]
    uppercase: bool,

    /// Narrate each protocol step while resolving
    #[arg(long)]
    explain: bool,

    /// Print the bech32 LNURL for the address and exit
    #[arg(long)]
    lnurl: bool,

    /// Per-request timeout in seconds. Overrides LNADDR_HTTP_TIMEOUT_SECS.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Use plain HTTP for discovery (local test services)
    #[arg(long)]
    allow_http: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    let address = match args.lnaddress.as_deref() {
        Some(raw) => LightningAddress::parse(raw)?,
        None => prompt::lightning_address()?,
    };

    if args.lnurl {
        println!("{}", address.to_lnurl()?);
        return Ok(ExitCode::SUCCESS);
    }

    let amount = match args.amount {
        Some(amount) => Some(amount),
        None => prompt::amount()?,
    };

    let config = client_config(&args)?;
    debug!(?config, "Using client configuration");
    let client = LnurlPayClient::new(config)?;

    let result = if args.explain {
        explain::run(&client, &address, amount).await?
    } else {
        client.resolve_address(&address, amount).await?
    };

    match &result {
        InvoiceResult::Invoice(_) => {
            println!("Generated bolt11: {}", render_invoice(&result, args.uppercase));
            Ok(ExitCode::SUCCESS)
        }
        InvoiceResult::Rejected(reason) => {
            eprintln!("Invoice request rejected: {}", reason);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Environment configuration with command-line overrides applied.
fn client_config(args: &Args) -> Result<ClientConfig, Box<dyn Error>> {
    let mut config = ClientConfig::from_env()?;

    if let Some(secs) = args.timeout_secs {
        if secs == 0 {
            return Err("--timeout-secs must be greater than zero".into());
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if args.allow_http {
        config = config.with_allow_http(true);
    }

    Ok(config)
}

fn render_invoice(result: &InvoiceResult, uppercase: bool) -> String {
    match result {
        InvoiceResult::Invoice(pr) if !uppercase => pr.clone(),
        _ => result.display_upper(),
    }
}
