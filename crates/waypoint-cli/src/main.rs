//! Waypoint CLI Application
//!
//! Command-line interface for generating learning paths and tracking
//! milestone progress against a remote path service.

mod args;
mod cli;
mod interactive;
mod renderer;

use std::{sync::Arc, time::Duration};

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{ClientBuilder, SyncFailurePolicy};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        server_url,
        timeout_secs,
        rollback_on_failure,
        no_color,
        command,
    } = Args::parse();

    let service = ClientBuilder::new()
        .with_base_url(server_url)
        .with_timeout(timeout_secs.map(Duration::from_secs))
        .build()
        .context("Failed to configure path service client")?;

    let policy = if rollback_on_failure {
        SyncFailurePolicy::Rollback
    } else {
        SyncFailurePolicy::Keep
    };

    info!("Waypoint started against {}", service.base_url());

    let cli = Cli::new(Arc::new(service), TerminalRenderer::new(!no_color), policy);

    match command {
        Some(Generate(args)) => cli.generate(args).await,
        Some(List) => cli.list().await,
        Some(Show(args)) => cli.show(args).await,
        Some(Delete(args)) => cli.delete(args).await,
        Some(Toggle(args)) => cli.toggle(args).await,
        Some(Health) => cli.health().await,
        Some(Session) | None => cli.session().await,
    }
}
