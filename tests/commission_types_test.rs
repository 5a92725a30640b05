//! Commission domain-type tests — status/type/tier token mapping and the
//! wire-record to display-record conversion.

use halcyon::backend::types::CommissionRecord;
use halcyon::models::commission::types::{Commission, ProjectType, Status, Tier};

#[test]
fn test_status_tokens_and_labels_round_trip() {
    for status in Status::ALL {
        assert_eq!(Status::from_machine(status.as_str()), Some(status));
        assert_eq!(Status::from_label(status.label()), Some(status));
    }
    assert_eq!(Status::InProgress.as_str(), "in_progress");
    assert_eq!(Status::InProgress.label(), "In Progress");
    assert_eq!(Status::from_machine("cancelled"), None);
    assert_eq!(Status::from_label("On Hold"), None);
}

#[test]
fn test_project_type_tokens_round_trip() {
    for kind in ProjectType::ALL {
        assert_eq!(ProjectType::from_machine(kind.as_str()), Some(kind));
    }
    assert_eq!(ProjectType::ProfilePicture.label(), "Profile Picture");
    assert_eq!(
        ProjectType::DiscordServerPackage.label(),
        "Discord Server Package"
    );
    assert!(ProjectType::StreamerPackage.is_package());
    assert!(!ProjectType::Banner.is_package());
}

#[test]
fn test_tier_tokens_round_trip() {
    for tier in Tier::ALL {
        assert_eq!(Tier::from_machine(tier.as_str()), Some(tier));
    }
    assert_eq!(Tier::Standard.label(), "Standard");
}

fn record(status: &str, kind: &str) -> CommissionRecord {
    CommissionRecord {
        id: "7".to_string(),
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        discord: "grace#1".to_string(),
        details: "A banner".to_string(),
        kind: kind.to_string(),
        status: status.to_string(),
        created_at: "2026-08-01".to_string(),
        designers: None,
    }
}

#[test]
fn test_from_record_maps_tokens_to_display() {
    let commission = Commission::from_record(record("in_progress", "profile_picture"));
    assert_eq!(commission.status, Status::InProgress);
    assert_eq!(commission.kind, "Profile Picture");
    assert_eq!(commission.assigned_label(), "Unassigned");
}

#[test]
fn test_from_record_unknown_status_falls_back_to_queued() {
    let commission = Commission::from_record(record("mystery_state", "banner"));
    assert_eq!(commission.status, Status::Queued);
}

#[test]
fn test_assigned_label_prefers_designer() {
    let mut rec = record("queued", "banner");
    rec.designers = Some("Bones".to_string());
    let commission = Commission::from_record(rec);
    assert_eq!(commission.assigned_label(), "Bones");
}
