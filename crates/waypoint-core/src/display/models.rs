//! Display implementations for domain models.
//!
//! These are kept apart from the model definitions. Every implementation
//! produces markdown meant to be rendered by the terminal front end.

use std::fmt;

use super::{datetime::LocalDateTime, format_hours, view::ProgressBar};
use crate::models::{ExperienceLevel, Milestone, Path, PathSummary, Progress, TimeCommitment};

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for TimeCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Milestone {
    /// `✓` for completed milestones, `○` otherwise.
    pub fn icon(&self) -> &'static str {
        if self.completed { "✓" } else { "○" }
    }

    /// One-line heading: position, icon, title and estimate.
    pub(crate) fn fmt_heading(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} {} ({}h)",
            self.order + 1,
            self.icon(),
            self.title,
            format_hours(self.estimated_hours)
        )
    }

    /// Description, resources and completion date.
    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "#### What You'll Learn")?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if !self.resources.is_empty() {
            writeln!(f, "#### Recommended Resources")?;
            writeln!(f)?;
            for resource in &self.resources {
                writeln!(f, "- {resource}")?;
            }
            writeln!(f)?;
        }

        // The server timestamp outlives a local un-completion
        if let (true, Some(at)) = (self.completed, &self.completed_at) {
            writeln!(f, "*Completed {}*", LocalDateTime(at))?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_heading(f)?;
        self.fmt_details(f)
    }
}

impl Path {
    /// Title, metadata, description and progress; no milestones.
    pub(crate) fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "# {id}. {}", self.title)?,
            None => writeln!(f, "# {}", self.title)?,
        }
        writeln!(f)?;

        writeln!(f, "- Level: {}", self.experience_level)?;
        writeln!(f, "- Time: {}", self.time_commitment)?;
        if let Some(created) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created))?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        writeln!(f)?;
        write!(f, "{}", self.progress())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;

        if self.milestones.is_empty() {
            return writeln!(f, "\nNo milestones in this path.");
        }

        writeln!(f, "\n## Milestones")?;
        writeln!(f)?;
        for milestone in &self.milestones {
            write!(f, "{milestone}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ProgressBar::new(self))?;
        writeln!(f)?;
        writeln!(
            f,
            "**{}/{}** milestones completed, **{}h** total, **{}h** remaining",
            self.completed_count,
            self.total_count,
            format_hours(self.total_hours),
            format_hours(self.remaining_hours)
        )
    }
}

impl fmt::Display for PathSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(
                f,
                "## {} (ID: {id}) ({}/{})",
                self.title, self.completed_milestones, self.total_milestones
            )?,
            None => writeln!(
                f,
                "## {} ({}/{})",
                self.title, self.completed_milestones, self.total_milestones
            )?,
        }
        writeln!(f)?;

        writeln!(
            f,
            "- **Level**: {}, {}",
            self.experience_level, self.time_commitment
        )?;
        writeln!(f, "- **Estimate**: {}h", format_hours(self.total_hours))?;
        if let Some(created) = &self.created_at {
            writeln!(f, "- **Created**: {}", LocalDateTime(created))?;
        }
        writeln!(f)
    }
}
