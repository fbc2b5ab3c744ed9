use super::*;

fn write_role(dir: &Path, role: Role, json: &str) {
    std::fs::write(dir.join(role.file_name()), json).unwrap();
}

const MINIMAL: &str = r#"{"pause_ratio": 0.1, "mean_f0": 120.0}"#;

#[test]
fn test_load_full_session() {
    let dir = tempfile::tempdir().unwrap();
    for role in Role::ALL {
        write_role(dir.path(), role, MINIMAL);
    }
    let bundle = load_session(dir.path()).unwrap();
    assert_eq!(bundle.records.len(), 5);
    assert_eq!(bundle.shape().unwrap(), SessionShape::Full);
    assert_eq!(
        bundle.record(Role::Target).unwrap().pause_ratio,
        Some(0.1)
    );
}

#[test]
fn test_load_target_only_session() {
    let dir = tempfile::tempdir().unwrap();
    write_role(dir.path(), Role::Target, MINIMAL);
    let bundle = load_session(dir.path()).unwrap();
    assert_eq!(bundle.shape().unwrap(), SessionShape::SingleTarget);
}

#[test]
fn test_partial_session_is_invalid_shape() {
    let dir = tempfile::tempdir().unwrap();
    write_role(dir.path(), Role::Intro, MINIMAL);
    write_role(dir.path(), Role::Target, MINIMAL);
    let bundle = load_session(dir.path()).unwrap();
    let err = bundle.shape().unwrap_err();
    assert!(matches!(err, InputError::InvalidSession(_)));
    assert!(err.to_string().contains("intro, target"));
}

#[test]
fn test_empty_directory_is_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_session(dir.path()).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_malformed_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write_role(dir.path(), Role::Target, "{not json");
    let err = load_session(dir.path()).unwrap_err();
    match err {
        InputError::Parse { path, .. } => {
            assert!(path.ends_with("target.json"));
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_unknown_json_fields_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_role(
        dir.path(),
        Role::Target,
        r#"{"pause_ratio": 0.2, "speaker_id": "p-17", "sample_rate": 16000}"#,
    );
    let bundle = load_session(dir.path()).unwrap();
    assert_eq!(
        bundle.record(Role::Target).unwrap().pause_ratio,
        Some(0.2)
    );
}

#[test]
fn test_role_order_matches_recording_order() {
    let names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["intro", "hobby", "story", "technical", "target"]);
}
