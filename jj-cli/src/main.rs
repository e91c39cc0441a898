use anyhow::Result;
use clap::Parser;
use jj_cli::{load_env, run_assistant, AssistantConfig, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_env(&cli)?;

    let config = AssistantConfig::load()?;
    run_assistant(config).await
}
