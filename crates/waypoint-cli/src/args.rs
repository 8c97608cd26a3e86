use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, PathArgs, ToggleArgs};

/// Generate learning paths and track milestone progress
///
/// Waypoint asks a path service for an ordered list of milestones toward a
/// learning goal, then lets you mark milestones done and follow your
/// progress. Without a subcommand it starts an interactive session.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Base URL of the path service
    #[arg(
        long,
        global = true,
        env = "WAYPOINT_SERVER_URL",
        help = "Base URL of the path service [default: http://localhost:8000]"
    )]
    pub server_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, help = "Per-request timeout in seconds [default: 30]")]
    pub timeout_secs: Option<u64>,

    /// Undo a completion change when the server rejects it
    #[arg(long, global = true)]
    pub rollback_on_failure: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new learning path
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List stored learning paths
    #[command(alias = "l")]
    List,
    /// Show a stored learning path
    #[command(alias = "s")]
    Show(PathArgs),
    /// Delete a stored learning path
    Delete(PathArgs),
    /// Mark a milestone done, or not done if it already is
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Check that the path service is reachable
    Health,
    /// Start an interactive session (default)
    Session,
}
