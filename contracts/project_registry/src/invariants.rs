#![allow(dead_code)]

extern crate std;

use crate::types::{Project, ProjectStatus};

/// INV-1: Estimated credits are never negative.
pub fn assert_estimated_credits_non_negative(project: &Project) {
    assert!(
        project.estimated_credits >= 0,
        "INV-1 violated: project {} has negative estimated credits ({})",
        project.id,
        project.estimated_credits
    );
}

/// INV-2: Project ids are sequential starting from 1.
pub fn assert_sequential_ids(projects: &[Project]) {
    for (i, project) in projects.iter().enumerate() {
        assert_eq!(
            project.id,
            i as u64 + 1,
            "INV-2 violated: expected id {}, got {}",
            i + 1,
            project.id
        );
    }
}

/// INV-3: Only Unlisted <-> Listed toggles are valid transitions.
pub fn assert_valid_status_transition(from: &ProjectStatus, to: &ProjectStatus) {
    let valid = matches!(
        (from, to),
        (ProjectStatus::Unlisted, ProjectStatus::Listed)
            | (ProjectStatus::Listed, ProjectStatus::Unlisted)
    );

    assert!(
        valid,
        "INV-3 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-4: Fields written at creation never change.
pub fn assert_project_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-4 violated: project id changed");
    assert_eq!(
        original.owner, current.owner,
        "INV-4 violated: project owner changed"
    );
    assert_eq!(
        original.name, current.name,
        "INV-4 violated: project name changed"
    );
    assert_eq!(
        original.description, current.description,
        "INV-4 violated: project description changed"
    );
    assert_eq!(
        original.estimated_credits, current.estimated_credits,
        "INV-4 violated: project estimated_credits changed"
    );
    assert_eq!(
        original.created_at, current.created_at,
        "INV-4 violated: project created_at changed"
    );
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_estimated_credits_non_negative(project);
}
