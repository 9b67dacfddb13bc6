// ABOUTME: Main entry point for the community sponsors updater
// ABOUTME: Parses credential and output options, then runs the update end to end

use anyhow::Result;
use clap::Parser;
use secrecy::SecretString;
use sponsors_sdk::SponsorsClient;
use sponsors_update::update::{UpdateConfig, run_update};

#[derive(Parser)]
#[command(name = "update-sponsors")]
#[command(about = "Update community sponsors.", long_about = None)]
struct Cli {
    /// The GitHub API token to use
    #[arg(long)]
    token: String,

    /// The path to the SwiftPackageIndex-Server source code
    #[arg(long)]
    output: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let client = SponsorsClient::new(SecretString::new(cli.token.into_boxed_str()))?;

    let config = UpdateConfig::default();
    let path = run_update(&client, &cli.output, &config).await?;
    println!("Updated {}", path.display());

    Ok(())
}
