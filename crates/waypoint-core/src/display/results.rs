//! Wrappers for the outcome of a command.

use std::fmt;

use super::view::ProgressBar;
use crate::{
    error::WaypointError,
    models::{MilestoneId, Path},
};

/// A freshly generated path.
pub struct GeneratedPath<'a>(pub &'a Path);

impl fmt::Display for GeneratedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.0;
        match path.id {
            Some(id) => writeln!(f, "Generated learning path with ID: {id}")?,
            None => writeln!(f, "Generated learning path")?,
        }
        writeln!(f)?;
        write!(f, "{path}")
    }
}

/// A completion toggle and how its sync went.
pub struct ToggleResult<'a> {
    pub path: &'a Path,
    pub milestone_id: MilestoneId,
    pub sync_error: Option<&'a WaypointError>,
}

impl fmt::Display for ToggleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(milestone) = self.path.milestone(self.milestone_id) else {
            return writeln!(f, "Milestone {} is not part of this path", self.milestone_id);
        };

        let state = if milestone.completed { "complete" } else { "not complete" };
        writeln!(f, "Marked '{}' as {state}", milestone.title)?;

        if let Some(e) = self.sync_error {
            writeln!(f)?;
            writeln!(f, "> Could not save the change: {}", e.user_message())?;
        }

        writeln!(f)?;
        writeln!(f, "{}", ProgressBar::new(&self.path.progress()))
    }
}

/// A deleted path.
pub struct DeleteResult<'a>(pub &'a Path);

impl fmt::Display for DeleteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.id {
            Some(id) => writeln!(f, "Deleted learning path '{}' (ID: {id})", self.0.title),
            None => writeln!(f, "Deleted learning path '{}'", self.0.title),
        }
    }
}
