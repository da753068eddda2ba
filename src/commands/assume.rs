use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::{
    aws::{self, BrokerConnector, StsConnector},
    config::FederationParameters,
    display::DisplayLines,
    error,
};

#[derive(Debug, Clone, Args)]
pub struct AssumeCommand {
    #[arg(
        long = "no-redact",
        help = "Print credentials in plain text instead of redacting"
    )]
    pub no_redact: bool,
}

impl AssumeCommand {
    /// Whether credential fields are printed verbatim
    pub fn reveal(&self) -> bool {
        self.no_redact
    }

    pub async fn execute(self) -> Result<()> {
        let params = FederationParameters::from_env()?;

        info!("Assuming role {} in {}", params.role_arn, params.region);

        let lines = assume(&StsConnector, params, self.reveal()).await?;
        println!("{lines}");

        Ok(())
    }
}

/// Exchange the token and format the resulting credentials for display
pub async fn assume<C>(
    connector: &C,
    params: FederationParameters,
    reveal: bool,
) -> error::Result<DisplayLines>
where
    C: BrokerConnector,
{
    let assumed = aws::exchange::exchange(connector, params).await?;
    Ok(DisplayLines::new(&assumed, reveal))
}
