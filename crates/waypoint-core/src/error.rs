//! Error types for the waypoint library.

use thiserror::Error;

use crate::models::{MilestoneId, PathId};

/// Message shown when the generation service fails without explaining why.
pub const GENERATION_FALLBACK_MESSAGE: &str =
    "Failed to generate learning path. Please try again.";

/// Comprehensive error type for all waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The generation service could not produce a path
    #[error("{message}")]
    Generation { message: String },
    /// Remote milestone completion update failed
    #[error("Failed to update milestone {milestone_id}: {message}")]
    Mutation {
        milestone_id: MilestoneId,
        message: String,
    },
    /// Milestone not present in the current path
    #[error("Milestone with ID {id} not found")]
    MilestoneNotFound { id: MilestoneId },
    /// Path not found on the server
    #[error("Learning path with ID {id} not found")]
    PathNotFound { id: PathId },
    /// Transport, status or payload errors talking to the path service
    #[error("Request failed: {message}")]
    Request {
        message: String,
        status: Option<u16>,
        detail: Option<String>,
    },
    /// Event rejected in the current session state
    #[error("Not allowed: {reason}")]
    NotAllowed { reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaypointError {
        WaypointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaypointError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation error with a user-facing message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a rejection for an event that does not apply right now.
    pub fn not_allowed(reason: impl Into<String>) -> Self {
        Self::NotAllowed {
            reason: reason.into(),
        }
    }

    /// HTTP status attached to a request error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }

    /// The `detail` field of the server's error body, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Request { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// Prefers the server-provided detail over the formatted error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Generation { message } => message.clone(),
            Self::Request {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
