//! Entry point after config is loaded: tracing, validation, banner, router loop.

use anyhow::Result;
use jj_channels::Console;
use jj_core::init_tracing;
use tracing::info;

use crate::components::{banner, build_router};
use crate::config::AssistantConfig;

/// Runs the assistant on stdin/stdout until the user exits or input ends.
pub async fn run_assistant(config: AssistantConfig) -> Result<()> {
    init_tracing(&config.log_file)?;
    run_with_console(config, Console::stdio()).await
}

/// Same as [`run_assistant`] on an arbitrary console, without installing tracing.
pub async fn run_with_console(config: AssistantConfig, console: Console) -> Result<()> {
    config.validate()?;
    info!(
        assistant_name = %config.assistant_name,
        llm = config.uses_llm(),
        wikipedia_api_url = %config.wikipedia_api_url,
        "step: starting assistant"
    );

    let mut router = build_router(&config, &console)?;
    console.announce(&banner(&config.assistant_name)).await;
    router.run().await;

    info!("step: assistant stopped");
    Ok(())
}
