#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use serde_json::{Value, json};
use waypoint_core::{ClientBuilder, HttpPathService};
use wiremock::MockServer;

/// JSON body of a stored path with one milestone per entry of `hours`.
pub fn path_body(hours: &[f64]) -> Value {
    let milestones: Vec<Value> = hours
        .iter()
        .enumerate()
        .map(|(i, h)| {
            json!({
                "id": i + 1,
                "title": format!("Milestone {}", i + 1),
                "description": format!("Description {}", i + 1),
                "order": i,
                "estimated_hours": h,
                "resources": ["The Rust Book"],
                "completed": false,
                "completed_at": null,
            })
        })
        .collect();

    json!({
        "id": 1,
        "title": "Learn Rust",
        "description": "Systems programming from scratch",
        "experience_level": "beginner",
        "time_commitment": "5-10 hours/week",
        "created_at": "2024-06-15T12:00:00",
        "milestones": milestones,
    })
}

/// Client pointed at the mock server with a short timeout.
pub fn client_for(server: &MockServer) -> Arc<HttpPathService> {
    let client = ClientBuilder::new()
        .with_base_url(Some(server.uri()))
        .with_timeout(Some(Duration::from_secs(5)))
        .build()
        .expect("Failed to build client");
    Arc::new(client)
}
