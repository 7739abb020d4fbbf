//! Command-line access to the integration-test faucet.
//!
//! ```text
//! htr-faucet simple-wallet
//! htr-faucet fund <ADDRESS> <AMOUNT> [--wallet-service-url URL --auth-token TOKEN]
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use htr_test_common::wallet_backend::WalletHandle;
use htr_wallet_integration::wallet_service::WalletServiceClient;
use htr_wallet_integration::{
    FaucetClient, FaucetConfig, WaitOptions, DEFAULT_TEST_HELPER_URL, TEST_HELPER_URL_ENV,
};

#[derive(Parser)]
#[command(name = "htr-faucet", about = "Fund test wallets from the integration-test faucet")]
struct Cli {
    /// Base URL of the test helper service.
    #[arg(long, env = TEST_HELPER_URL_ENV, default_value = DEFAULT_TEST_HELPER_URL)]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the pre-provisioned test wallet as JSON.
    SimpleWallet,

    /// Send funds to an address.
    Fund {
        address: String,

        /// Amount in the smallest currency unit.
        amount: u64,

        /// Wallet service to confirm the transaction against.
        #[arg(long)]
        wallet_service_url: Option<String>,

        /// Bearer token for the wallet service.
        #[arg(long, requires = "wallet_service_url")]
        auth_token: Option<String>,

        /// Return as soon as the faucet answers.
        #[arg(long)]
        no_wait: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = FaucetClient::new(FaucetConfig::new(cli.url));

    match cli.command {
        Command::SimpleWallet => {
            let wallet = client
                .get_simple_wallet()
                .await
                .with_context(|| format!("fetching simple wallet from {}", client.base_url()))?;
            println!("{}", serde_json::to_string_pretty(&wallet)?);
        }
        Command::Fund {
            address,
            amount,
            wallet_service_url,
            auth_token,
            no_wait,
        } => {
            let destination = wallet_service_url.map(|url| {
                let service = WalletServiceClient::new(url);
                let service = match auth_token {
                    Some(token) => service.with_auth_token(token),
                    None => service,
                };
                WalletHandle::remote(service)
            });
            let options = if no_wait {
                WaitOptions::skip()
            } else {
                WaitOptions::default()
            };

            let result = client
                .fund_address(destination.as_ref(), &address, amount, options)
                .await
                .with_context(|| format!("funding {address} with {amount}"))?;
            tracing::info!("funded {address} with {} in tx {}", result.amount, result.tx_id);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
