//! Collection wrappers with empty-collection handling.

use std::fmt;

use crate::models::PathSummary;

/// Newtype over a list of path summaries.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::display::PathSummaries;
///
/// let summaries = PathSummaries(vec![]);
/// assert_eq!(summaries.to_string(), "No learning paths found.\n");
/// ```
pub struct PathSummaries(pub Vec<PathSummary>);

impl FromIterator<PathSummary> for PathSummaries {
    fn from_iter<I: IntoIterator<Item = PathSummary>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for PathSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No learning paths found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_path;

    #[test]
    fn test_lists_each_summary() {
        let first = sample_path(&[1.0]);
        let mut second = sample_path(&[2.0, 3.0]);
        second.title = "Learn Go".to_string();

        let summaries: PathSummaries = [&first, &second].into_iter().map(PathSummary::from).collect();
        let out = summaries.to_string();

        assert_eq!(out.matches("## ").count(), 2);
        assert!(out.contains("## Learn Rust"));
        assert!(out.contains("## Learn Go"));
        assert!(!out.starts_with("# "));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(PathSummaries(vec![]).to_string(), "No learning paths found.\n");
    }
}
