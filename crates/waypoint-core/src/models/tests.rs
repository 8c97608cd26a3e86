#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use crate::{
        WaypointError,
        models::{
            ExperienceLevel, GenerationRequest, Milestone, MilestoneId, Path, PathSummary,
            TimeCommitment, compute_progress,
        },
    };

    fn create_test_path(hours: &[f64]) -> Path {
        Path {
            id: None,
            title: "Learn Rust".to_string(),
            description: "A path through the language".to_string(),
            experience_level: ExperienceLevel::Beginner,
            time_commitment: TimeCommitment::FiveToTen,
            created_at: None,
            milestones: hours
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    Milestone::new(i as u64 + 1, i as u32, format!("Milestone {}", i + 1), "", *h)
                        .with_resources(["The Book"])
                })
                .collect(),
        }
    }

    #[test]
    fn test_progress_of_fresh_path() {
        let progress = compute_progress(&create_test_path(&[10.0, 15.0, 20.0]));

        assert_eq!(progress.completed_count, 0);
        assert_eq!(progress.total_count, 3);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.total_hours, 45.0);
        assert_eq!(progress.remaining_hours, 45.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_after_one_completion() {
        let path = create_test_path(&[10.0, 15.0, 20.0]).with_completion(MilestoneId(1), true);
        let progress = compute_progress(&path);

        assert_eq!(progress.completed_count, 1);
        assert!((progress.percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(progress.rounded_percentage(), 33);
        assert_eq!(progress.remaining_hours, 35.0);
        assert_eq!(progress.remaining_count(), 2);
    }

    #[test]
    fn test_progress_of_empty_path_is_zero_not_nan() {
        let progress = compute_progress(&create_test_path(&[]));

        assert_eq!(progress.total_count, 0);
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.percentage.is_nan());
        assert_eq!(progress.total_hours, 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_completed_never_exceeds_total() {
        let mut path = create_test_path(&[1.0, 2.0, 3.0, 4.0]);
        for id in 1..=4 {
            path = path.with_completion(MilestoneId(id), true);
            let progress = path.progress();
            assert!(progress.completed_count <= progress.total_count);
        }
        assert!(path.progress().is_complete());
        assert_eq!(path.progress().rounded_percentage(), 100);
    }

    #[test]
    fn test_with_completion_changes_only_target() {
        let path = create_test_path(&[10.0, 15.0, 20.0]);
        let updated = path.with_completion(MilestoneId(2), true);

        assert!(!updated.milestones[0].completed);
        assert!(updated.milestones[1].completed);
        assert!(!updated.milestones[2].completed);
        assert_eq!(updated.title, path.title);
        assert_eq!(updated.milestones[1].title, path.milestones[1].title);
        assert_eq!(updated.milestones[1].resources, path.milestones[1].resources);

        // The original snapshot is untouched
        assert!(!path.milestones[1].completed);
    }

    #[test]
    fn test_with_completion_unknown_id_is_noop() {
        let path = create_test_path(&[10.0]);
        let updated = path.with_completion(MilestoneId(99), true);
        assert_eq!(updated, path);
    }

    #[test]
    fn test_try_with_completion_reports_unknown_id() {
        let path = create_test_path(&[10.0]);
        let err = path
            .try_with_completion(MilestoneId(99), true)
            .expect_err("unknown milestone must be reported");
        assert!(matches!(
            err,
            WaypointError::MilestoneNotFound { id } if id == MilestoneId(99)
        ));
    }

    #[test]
    fn test_milestone_new_clamps_hours() {
        assert_eq!(Milestone::new(1, 0, "a", "", -5.0).estimated_hours, 0.0);
        assert_eq!(Milestone::new(1, 0, "a", "", f64::NAN).estimated_hours, 0.0);
        assert_eq!(Milestone::new(1, 0, "a", "", 2.5).estimated_hours, 2.5);
    }

    #[test]
    fn test_path_summary_from_path() {
        let path = create_test_path(&[10.0, 15.0]).with_completion(MilestoneId(2), true);
        let summary = PathSummary::from(&path);

        assert_eq!(summary.title, "Learn Rust");
        assert_eq!(summary.total_milestones, 2);
        assert_eq!(summary.completed_milestones, 1);
        assert_eq!(summary.total_hours, 25.0);
    }

    #[test]
    fn test_experience_level_from_str() {
        assert_eq!(
            ExperienceLevel::from_str("Intermediate"),
            Ok(ExperienceLevel::Intermediate)
        );
        assert!(ExperienceLevel::from_str("expert").is_err());
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Beginner);
    }

    #[test]
    fn test_time_commitment_accepts_label_and_short_form() {
        assert_eq!(
            TimeCommitment::from_str("5-10 hours/week"),
            Ok(TimeCommitment::FiveToTen)
        );
        assert_eq!(TimeCommitment::from_str("20+"), Ok(TimeCommitment::TwentyPlus));
        let err = TimeCommitment::from_str("40 hours").unwrap_err();
        assert!(err.contains("1-5 hours/week"));
    }

    #[test]
    fn test_time_commitment_serializes_as_label() {
        let json = serde_json::to_string(&TimeCommitment::TenToTwenty).unwrap();
        assert_eq!(json, "\"10-20 hours/week\"");
        let level = serde_json::to_string(&ExperienceLevel::Advanced).unwrap();
        assert_eq!(level, "\"advanced\"");
    }

    #[test]
    fn test_generation_request_trims_goal() {
        let request = GenerationRequest::new(
            "  Learn Rust  ",
            ExperienceLevel::Beginner,
            TimeCommitment::FiveToTen,
        )
        .unwrap();
        assert_eq!(request.goal, "Learn Rust");
    }

    #[test]
    fn test_generation_request_rejects_blank_goal() {
        let err = GenerationRequest::new("   ", ExperienceLevel::Beginner, TimeCommitment::FiveToTen)
            .unwrap_err();
        assert!(matches!(err, WaypointError::InvalidInput { ref field, .. } if field == "goal"));
    }

    #[test]
    fn test_generation_request_wire_shape() {
        let request = GenerationRequest::new(
            "Learn Rust",
            ExperienceLevel::Beginner,
            TimeCommitment::FiveToTen,
        )
        .unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "goal": "Learn Rust",
                "experience_level": "beginner",
                "time_commitment": "5-10 hours/week"
            })
        );
    }
}
