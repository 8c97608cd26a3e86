//! Identifier newtypes assigned by the path service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a milestone, unique within its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneId(pub u64);

/// Server-assigned identifier of a stored learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(pub u64);

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MilestoneId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for PathId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
