//! `relay`: send one record or text file to a peer, or receive one.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use relay_cli::{logging, receiver, sender, RelayConfig};

#[derive(Debug, Parser)]
#[command(name = "relay", version, about = "One-shot point-to-point data delivery")]
struct Cli {
    /// Configuration file.
    #[arg(short, long, global = true, env = "RELAY_CONFIG", default_value = "relay.toml")]
    config: PathBuf,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode, optionally encrypt, and send the configured input.
    Send,
    /// Accept one connection and recover whatever arrives.
    Recv,
    /// Write a starter configuration file.
    InitConfig {
        /// A `.txt` path or a literal mapping.
        #[arg(long, default_value = "{'Test': 1, 'Data': 2, 'Sample': 3}")]
        input: String,
        /// binary, json, xml or literal.
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        encrypt: bool,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.command {
        Command::Send => {
            let config = load(&cli.config)?;
            sender::run(&config).await.context("send failed")?;
        }
        Command::Recv => {
            let config = load(&cli.config)?;
            receiver::run(&config).await.context("receive failed")?;
        }
        Command::InitConfig { input, format, encrypt, force } => {
            if cli.config.exists() && !force {
                bail!("{} already exists; pass --force to overwrite", cli.config.display());
            }
            let config = RelayConfig::for_input(&input, &format, encrypt);
            std::fs::write(&cli.config, config.to_toml()?)
                .with_context(|| format!("writing {}", cli.config.display()))?;
            tracing::info!(path = %cli.config.display(), "config file created");
        }
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<RelayConfig> {
    let config = RelayConfig::load(path)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}
