//! Interactive views: a path with one expanded milestone and a text
//! progress bar.

use std::fmt;

use crate::models::{MilestoneId, Path, Progress};

const BAR_WIDTH: usize = 20;

/// Fixed-width bar followed by the rounded percentage.
pub struct ProgressBar<'a> {
    progress: &'a Progress,
}

impl<'a> ProgressBar<'a> {
    pub fn new(progress: &'a Progress) -> Self {
        Self { progress }
    }
}

impl fmt::Display for ProgressBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = (self.progress.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        write!(
            f,
            "`[{}{}]` {}%",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            self.progress.rounded_percentage()
        )
    }
}

/// A path as shown while browsing: every milestone heading, but details only
/// for the expanded one.
pub struct PathView<'a> {
    pub path: &'a Path,
    pub expanded: Option<MilestoneId>,
}

impl<'a> PathView<'a> {
    pub fn new(path: &'a Path, expanded: Option<MilestoneId>) -> Self {
        Self { path, expanded }
    }
}

impl fmt::Display for PathView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path.fmt_header(f)?;

        if self.path.milestones.is_empty() {
            return writeln!(f, "\nNo milestones in this path.");
        }

        writeln!(f, "\n## Milestones")?;
        writeln!(f)?;
        for milestone in &self.path.milestones {
            milestone.fmt_heading(f)?;
            if self.expanded == Some(milestone.id) {
                milestone.fmt_details(f)?;
            }
        }
        Ok(())
    }
}
