//! Command arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the
//! interface-agnostic parameter types of `waypoint_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers
//! ```

use std::{fmt, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use log::debug;
use waypoint_core::{
    DeleteResult, GeneratedPath, HttpPathService, MilestoneTracker, OperationStatus,
    PathGenerator, PathSummaries, SyncFailurePolicy, ToggleResult, handle_delete_path,
    handle_generate_path, handle_health, handle_list_paths, handle_show_path,
    handle_toggle_milestone,
    models::MilestoneId,
    params::{GeneratePath, PathRef, ToggleMilestone},
};

use crate::{interactive, renderer::TerminalRenderer};

/// Generate a new learning path
#[derive(Args)]
pub struct GenerateArgs {
    /// What you want to learn
    #[arg(help = "What you want to learn, e.g. \"Learn Rust\"")]
    pub goal: String,
    #[arg(short, long, value_enum, default_value_t = LevelArg::Beginner)]
    pub level: LevelArg,
    #[arg(short, long, value_enum, default_value_t = CommitmentArg::FiveToTen)]
    pub commitment: CommitmentArg,
}

impl From<GenerateArgs> for GeneratePath {
    fn from(val: GenerateArgs) -> Self {
        GeneratePath {
            goal: val.goal,
            experience_level: Some(val.level.to_string()),
            time_commitment: Some(val.commitment.to_string()),
        }
    }
}

/// Select a stored path
#[derive(Args)]
pub struct PathArgs {
    #[arg(help = "ID of the learning path")]
    pub id: u64,
}

impl From<PathArgs> for PathRef {
    fn from(val: PathArgs) -> Self {
        PathRef { id: val.id }
    }
}

/// Flip a milestone's completion flag
#[derive(Args)]
pub struct ToggleArgs {
    #[arg(help = "ID of the learning path")]
    pub path_id: u64,
    #[arg(help = "ID of the milestone to mark done or not done")]
    pub milestone_id: u64,
}

impl From<ToggleArgs> for ToggleMilestone {
    fn from(val: ToggleArgs) -> Self {
        ToggleMilestone {
            path_id: val.path_id,
            milestone_id: val.milestone_id,
        }
    }
}

/// Experience level accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for LevelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelArg::Beginner => write!(f, "beginner"),
            LevelArg::Intermediate => write!(f, "intermediate"),
            LevelArg::Advanced => write!(f, "advanced"),
        }
    }
}

/// Weekly time budget accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CommitmentArg {
    #[value(name = "1-5")]
    OneToFive,
    #[value(name = "5-10")]
    FiveToTen,
    #[value(name = "10-20")]
    TenToTwenty,
    #[value(name = "20+")]
    TwentyPlus,
}

impl fmt::Display for CommitmentArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitmentArg::OneToFive => write!(f, "1-5"),
            CommitmentArg::FiveToTen => write!(f, "5-10"),
            CommitmentArg::TenToTwenty => write!(f, "10-20"),
            CommitmentArg::TwentyPlus => write!(f, "20+"),
        }
    }
}

/// Runs commands against one path service.
pub struct Cli {
    service: Arc<HttpPathService>,
    renderer: TerminalRenderer,
    policy: SyncFailurePolicy,
}

impl Cli {
    pub fn new(
        service: Arc<HttpPathService>,
        renderer: TerminalRenderer,
        policy: SyncFailurePolicy,
    ) -> Self {
        Self {
            service,
            renderer,
            policy,
        }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let generator = PathGenerator::new(self.service.clone());
        let path = handle_generate_path(&generator, args.into())
            .await
            .context("Failed to generate learning path")?;

        self.renderer.render(&GeneratedPath(&path).to_string())
    }

    pub async fn list(&self) -> Result<()> {
        let summaries = handle_list_paths(self.service.as_ref())
            .await
            .context("Failed to list learning paths")?;

        self.renderer.render(&PathSummaries(summaries).to_string())
    }

    pub async fn show(&self, args: PathArgs) -> Result<()> {
        let id = args.id;
        let path = handle_show_path(self.service.as_ref(), args.into())
            .await
            .with_context(|| format!("Failed to load learning path {id}"))?;

        self.renderer.render(&path.to_string())
    }

    pub async fn delete(&self, args: PathArgs) -> Result<()> {
        let id = args.id;
        let path = handle_delete_path(self.service.as_ref(), args.into())
            .await
            .with_context(|| format!("Failed to delete learning path {id}"))?;

        self.renderer.render(&DeleteResult(&path).to_string())
    }

    pub async fn toggle(&self, args: ToggleArgs) -> Result<()> {
        let params = ToggleMilestone::from(args);
        let tracker = MilestoneTracker::new(self.service.clone()).with_policy(self.policy);

        let synced = handle_toggle_milestone(self.service.as_ref(), &tracker, params)
            .await
            .context("Failed to update milestone")?;
        if let Some(e) = &synced.sync_error {
            debug!("Toggle kept locally after sync failure: {e}");
        }

        let result = ToggleResult {
            path: &synced.path,
            milestone_id: MilestoneId(params.milestone_id),
            sync_error: synced.sync_error.as_ref(),
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn health(&self) -> Result<()> {
        match handle_health(self.service.as_ref()).await {
            Ok(status) => self
                .renderer
                .render(&OperationStatus::success(format!("Server is {status}")).to_string()),
            Err(e) => {
                self.renderer
                    .render(&OperationStatus::failure(e.user_message()).to_string())?;
                bail!("Path service at {} is unavailable", self.service.base_url())
            }
        }
    }

    pub async fn session(&self) -> Result<()> {
        interactive::run(self.service.clone(), &self.renderer, self.policy).await
    }
}
