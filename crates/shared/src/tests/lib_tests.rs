use crate::{
    domain::{Activity, ActivityName, Roster, SignupOutcome, SignupRequest},
    error::{ErrorBody, RequestError},
};

fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "desc".into(),
        schedule: "Fridays".into(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn roster_keeps_server_key_order() {
    let raw = r#"{
        "Zumba": {"description": "z", "schedule": "Mon", "max_participants": 5, "participants": []},
        "Art Studio": {"description": "a", "schedule": "Tue", "max_participants": 3, "participants": ["maya@x.edu"]},
        "Chess Club": {"description": "c", "schedule": "Wed", "max_participants": 12, "participants": []}
    }"#;
    let roster: Roster = serde_json::from_str(raw).expect("roster");
    let names: Vec<&str> = roster.names().map(ActivityName::as_str).collect();
    assert_eq!(names, vec!["Zumba", "Art Studio", "Chess Club"]);
    assert_eq!(
        roster.get("Art Studio").expect("art").participants,
        vec!["maya@x.edu".to_string()]
    );
}

#[test]
fn duplicate_name_replaces_in_place() {
    let mut roster = Roster::new();
    roster.insert("first".into(), activity(1, &[]));
    roster.insert("second".into(), activity(2, &[]));
    roster.insert("first".into(), activity(9, &[]));
    assert_eq!(roster.len(), 2);
    let (name, first) = roster.iter().next().expect("entry");
    assert_eq!(name.as_str(), "first");
    assert_eq!(first.max_participants, 9);
}

#[test]
fn missing_participants_field_is_empty() {
    let raw = r#"{"Gym": {"description": "g", "schedule": "Sat", "max_participants": 4}}"#;
    let roster: Roster = serde_json::from_str(raw).expect("roster");
    assert_eq!(roster.get("Gym").expect("gym").participant_count(), 0);
}

#[test]
fn missing_capacity_is_a_decode_error() {
    let raw = r#"{"Gym": {"description": "g", "schedule": "Sat", "participants": []}}"#;
    assert!(serde_json::from_str::<Roster>(raw).is_err());
}

#[test]
fn spots_left_is_not_clamped() {
    assert_eq!(activity(10, &["a", "b", "c"]).spots_left(), 7);
    let full: Vec<String> = (0..10).map(|i| format!("p{i}")).collect();
    let full_refs: Vec<&str> = full.iter().map(String::as_str).collect();
    assert_eq!(activity(10, &full_refs).spots_left(), 0);

    let over: Vec<String> = (0..11).map(|i| format!("p{i}")).collect();
    let over_refs: Vec<&str> = over.iter().map(String::as_str).collect();
    assert_eq!(activity(10, &over_refs).spots_left(), -1);
}

#[test]
fn signup_request_requires_both_fields() {
    assert_eq!(
        SignupRequest::new("", "joe@example.com"),
        Err(RequestError::MissingActivity)
    );
    assert_eq!(
        SignupRequest::new("Chess Club", "   "),
        Err(RequestError::MissingEmail)
    );
    let request = SignupRequest::new("Chess Club", "joe@example.com").expect("valid");
    assert_eq!(request.activity.as_str(), "Chess Club");
}

#[test]
fn error_body_only_exposes_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Activity full"}"#).expect("body");
    assert_eq!(body.detail_text(), Some("Activity full"));

    let body: ErrorBody =
        serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#)
            .expect("body");
    assert_eq!(body.detail_text(), None);

    let body: ErrorBody = serde_json::from_str("{}").expect("body");
    assert_eq!(body.detail_text(), None);
}

#[test]
fn outcome_text_follows_variant() {
    let ok = SignupOutcome::Success {
        message: "Signed up Joe".into(),
    };
    let failed = SignupOutcome::Failure {
        detail: "Activity full".into(),
    };
    assert!(ok.is_success());
    assert_eq!(ok.text(), "Signed up Joe");
    assert!(!failed.is_success());
    assert_eq!(failed.text(), "Activity full");
}
