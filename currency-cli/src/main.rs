//! Currency CLI
//!
//! Command-line interface for the currency exchange feed.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_client::FeedClient;
use currency_service::CurrencyExchangeApi;

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency exchange feed client", long_about = None)]
struct Cli {
    /// Base URL of the currency feed
    #[arg(long, env = "CURRENCY_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported currencies with their names
    List,
    /// List every country with the currency it uses
    Countries,
    /// Show the currency used for a language tag (e.g. ru-RU)
    Locale {
        /// Language tag; defaults to CURRENCY_LOCALE or LANG
        tag: Option<String>,
    },
    /// Show all rates quoted against a base currency
    Rates {
        /// Base currency code
        code: String,
    },
    /// Show the rate from one currency to another
    Rate {
        /// Base currency code
        from: String,
        /// Target currency code
        to: String,
    },
    /// Print the supported currency codes
    Allowed,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,currency_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = config::Config::from_env();
    let api_url = cli.api_url.unwrap_or(config.api_url);

    tracing::debug!(%api_url, "using currency feed");
    let api = CurrencyExchangeApi::new(FeedClient::with_base_url(api_url));

    match cli.command {
        Commands::List => {
            let currencies = api.get_currencies().await?;
            println!("{}", serde_json::to_string_pretty(&currencies)?);
        }

        Commands::Countries => {
            let countries = api.get_countries_currencies().await?;
            println!("{}", serde_json::to_string_pretty(&countries)?);
        }

        Commands::Locale { tag } => {
            let Some(tag) = tag.or(config.locale) else {
                anyhow::bail!("No language tag given and neither CURRENCY_LOCALE nor LANG is set");
            };
            match api.get_currency_by_language(&tag).await? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => {
                    println!("✗ No currency known for {}", tag);
                    std::process::exit(1);
                }
            }
        }

        Commands::Rates { code } => {
            let table = api.get_exchange_rates(&code).await?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }

        Commands::Rate { from, to } => match api.get_exchange_rate(&from, &to).await? {
            Some(rate) => println!("{}", rate),
            None => {
                println!(
                    "✗ No rate from {} to {}",
                    from.to_lowercase(),
                    to.to_lowercase()
                );
                std::process::exit(1);
            }
        },

        Commands::Allowed => {
            for code in api.allowed_currencies() {
                println!("{}", code);
            }
        }
    }

    Ok(())
}
