//! Wire payloads of the path service and their mapping into domain models.

use std::collections::HashSet;
use std::str::FromStr;

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaypointError},
    models::{
        ExperienceLevel, Milestone, MilestoneId, Path, PathId, TimeCommitment,
        milestone::clamp_hours,
    },
};

/// A learning path as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathPayload {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub experience_level: String,
    pub time_commitment: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub milestones: Vec<MilestonePayload>,
}

/// A milestone as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestonePayload {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Error body sent with non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail; validation errors arrive as arrays of objects.
    pub(crate) fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Null => None,
            serde_json::Value::String(_) => None,
            other => Some(other.to_string()),
        }
    }
}

/// Response body of `GET /health`.
#[derive(Debug, Deserialize)]
pub(crate) struct HealthBody {
    pub status: String,
}

impl TryFrom<PathPayload> for Path {
    type Error = WaypointError;

    /// Map a service payload into a [`Path`].
    ///
    /// Milestones are put in server `order` once (stable for ties and for
    /// milestones without an order), duplicate ids are rejected and missing or
    /// negative hour estimates are clamped to zero.
    ///
    /// # Errors
    ///
    /// * `WaypointError::InvalidInput` - unknown experience level or time
    ///   commitment label
    /// * `WaypointError::InvalidInput` - duplicate milestone ids
    fn try_from(payload: PathPayload) -> Result<Self> {
        let experience_level = ExperienceLevel::from_str(&payload.experience_level)
            .map_err(|reason| WaypointError::invalid_input("experience_level").with_reason(reason))?;
        let time_commitment = TimeCommitment::from_str(&payload.time_commitment)
            .map_err(|reason| WaypointError::invalid_input("time_commitment").with_reason(reason))?;

        let mut seen = HashSet::new();
        for milestone in &payload.milestones {
            if !seen.insert(milestone.id) {
                return Err(WaypointError::invalid_input("milestones")
                    .with_reason(format!("duplicate milestone id {}", milestone.id)));
            }
        }

        let mut indexed: Vec<(usize, MilestonePayload)> =
            payload.milestones.into_iter().enumerate().collect();
        indexed.sort_by_key(|(index, m)| m.order.map_or(*index, |o| o as usize));

        let milestones = indexed
            .into_iter()
            .enumerate()
            .map(|(position, (_, m))| map_milestone(position as u32, m))
            .collect();

        Ok(Path {
            id: payload.id.map(PathId),
            title: payload.title,
            description: payload.description,
            experience_level,
            time_commitment,
            created_at: payload.created_at.as_deref().and_then(parse_timestamp),
            milestones,
        })
    }
}

fn map_milestone(order: u32, payload: MilestonePayload) -> Milestone {
    let estimated_hours = match payload.estimated_hours {
        Some(hours) if hours.is_finite() && hours >= 0.0 => hours,
        other => {
            warn!(
                "Milestone {} has invalid estimated hours {:?}, using 0",
                payload.id, other
            );
            clamp_hours(other.unwrap_or_default())
        }
    };

    Milestone {
        id: MilestoneId(payload.id),
        order,
        title: payload.title,
        description: payload.description,
        estimated_hours,
        resources: payload.resources,
        completed: payload.completed,
        completed_at: payload.completed_at.as_deref().and_then(parse_timestamp),
    }
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 instants and naive date-times, which the service emits
/// for UTC values.
pub(crate) fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts);
    }

    match raw.parse::<DateTime>() {
        Ok(dt) => dt.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp()),
        Err(e) => {
            debug!("Ignoring unparseable timestamp '{raw}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: u64, order: Option<u32>, hours: Option<f64>) -> MilestonePayload {
        MilestonePayload {
            id,
            title: format!("M{id}"),
            description: String::new(),
            order,
            estimated_hours: hours,
            resources: vec!["Docs".to_string()],
            completed: false,
            completed_at: None,
        }
    }

    fn payload(milestones: Vec<MilestonePayload>) -> PathPayload {
        PathPayload {
            id: Some(3),
            title: "Learn Rust".to_string(),
            description: "desc".to_string(),
            experience_level: "beginner".to_string(),
            time_commitment: "5-10 hours/week".to_string(),
            created_at: Some("2024-05-01T12:30:00.123456".to_string()),
            milestones,
        }
    }

    #[test]
    fn test_maps_metadata_and_naive_timestamp() {
        let path = Path::try_from(payload(vec![milestone(1, Some(0), Some(10.0))])).unwrap();

        assert_eq!(path.id, Some(PathId(3)));
        assert_eq!(path.experience_level, ExperienceLevel::Beginner);
        assert_eq!(path.time_commitment, TimeCommitment::FiveToTen);
        let created = path.created_at.expect("naive timestamp should parse as UTC");
        assert_eq!(created.as_second(), 1_714_566_600);
    }

    #[test]
    fn test_sorts_by_server_order_once() {
        let path = Path::try_from(payload(vec![
            milestone(10, Some(2), Some(1.0)),
            milestone(11, Some(0), Some(1.0)),
            milestone(12, Some(1), Some(1.0)),
        ]))
        .unwrap();

        let ids: Vec<u64> = path.milestones.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![11, 12, 10]);
        let orders: Vec<u32> = path.milestones.iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_keeps_sequence_without_order() {
        let path = Path::try_from(payload(vec![
            milestone(5, None, Some(1.0)),
            milestone(4, None, Some(1.0)),
        ]))
        .unwrap();

        let ids: Vec<u64> = path.milestones.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![5, 4]);
    }

    #[test]
    fn test_clamps_missing_and_negative_hours() {
        let path = Path::try_from(payload(vec![
            milestone(1, None, None),
            milestone(2, None, Some(-3.0)),
            milestone(3, None, Some(4.5)),
        ]))
        .unwrap();

        let hours: Vec<f64> = path.milestones.iter().map(|m| m.estimated_hours).collect();
        assert_eq!(hours, vec![0.0, 0.0, 4.5]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Path::try_from(payload(vec![
            milestone(1, None, Some(1.0)),
            milestone(1, None, Some(2.0)),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("duplicate milestone id 1"));
    }

    #[test]
    fn test_rejects_unknown_level() {
        let mut bad = payload(vec![]);
        bad.experience_level = "wizard".to_string();
        assert!(Path::try_from(bad).is_err());
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "rate limited"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("rate limited"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let ts = parse_timestamp("2024-05-01T12:30:00Z").unwrap();
        assert_eq!(ts.as_second(), 1_714_566_600);
        assert!(parse_timestamp("yesterday").is_none());
    }
}
