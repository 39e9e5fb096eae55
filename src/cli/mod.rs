pub mod output;

use crate::config::Config;
use crate::core::{RelayClient, RelayError, Result};
use crate::extractors::validate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ssstik-dl")]
#[command(about = "Fetch TikTok video details and watermark-free download links via ssstik.io")]
#[command(version)]
pub struct Cli {
    /// TikTok URL (multiple words are joined with spaces)
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    pub url: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Relay base URL, overrides the config file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn target_url(&self) -> String {
        self.url.join(" ")
    }

    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())
            .map_err(|e| RelayError::Config(format!("{:#}", e)))?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
            config
                .check()
                .map_err(|e| RelayError::Config(format!("{:#}", e)))?;
        }

        Ok(config)
    }

    /// validate -> fetch token -> extract -> print. Stops at the first error.
    pub async fn run(&self) -> Result<()> {
        let target = self.target_url();
        validate(&target)?;

        let config = self.load_config()?;
        let client = RelayClient::new(&config)?;

        info!("Fetching session token from {}", client.base_url());
        let token = client.fetch_token().await?;

        info!("Extracting: {}", target);
        let result = client.extract(&target, &token).await?;

        if let Err(e) = output::present(&result, self.json) {
            tracing::debug!("Failed to write result: {}", e);
        }

        Ok(())
    }
}
