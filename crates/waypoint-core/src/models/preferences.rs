//! Learner preference enumerations: experience level and weekly time budget.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of experience levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// No prior exposure to the topic
    #[default]
    Beginner,

    /// Comfortable with the basics
    Intermediate,

    /// Looking to deepen existing expertise
    Advanced,
}

impl ExperienceLevel {
    /// Every level, in increasing order of experience.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Wire representation sent to and received from the path service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(format!("Invalid experience level: {s}")),
        }
    }
}

/// Weekly time budget bucket.
///
/// The service only understands these fixed labels, e.g. `"5-10 hours/week"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TimeCommitment {
    #[serde(rename = "1-5 hours/week")]
    OneToFive,

    #[default]
    #[serde(rename = "5-10 hours/week")]
    FiveToTen,

    #[serde(rename = "10-20 hours/week")]
    TenToTwenty,

    #[serde(rename = "20+ hours/week")]
    TwentyPlus,
}

impl TimeCommitment {
    /// Every bucket, smallest first.
    pub const ALL: [TimeCommitment; 4] = [
        TimeCommitment::OneToFive,
        TimeCommitment::FiveToTen,
        TimeCommitment::TenToTwenty,
        TimeCommitment::TwentyPlus,
    ];

    /// Full label as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCommitment::OneToFive => "1-5 hours/week",
            TimeCommitment::FiveToTen => "5-10 hours/week",
            TimeCommitment::TenToTwenty => "10-20 hours/week",
            TimeCommitment::TwentyPlus => "20+ hours/week",
        }
    }

    /// Short form accepted on the command line (`"5-10"`).
    pub fn short(&self) -> &'static str {
        match self {
            TimeCommitment::OneToFive => "1-5",
            TimeCommitment::FiveToTen => "5-10",
            TimeCommitment::TenToTwenty => "10-20",
            TimeCommitment::TwentyPlus => "20+",
        }
    }
}

impl FromStr for TimeCommitment {
    type Err = String;

    /// Accepts either the full label or its short form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        TimeCommitment::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == needle || bucket.short() == needle)
            .ok_or_else(|| {
                format!(
                    "Invalid time commitment: {s}. Must be one of: {}",
                    TimeCommitment::ALL.map(|b| b.as_str()).join(", ")
                )
            })
    }
}
