//! CLI parser.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jj")]
#[command(about = "JJ McChatbot: answers typed or spoken questions, looks things up, chats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Env file to load instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

/// Applies `--env-file` or, when absent, `./.env` if it exists. Existing env vars win.
pub fn load_env(cli: &Cli) -> anyhow::Result<()> {
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path.display(), e))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
    Ok(())
}
