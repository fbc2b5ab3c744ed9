use super::*;

fn record(pause_ratio: f64) -> FeatureRecord {
    FeatureRecord {
        pause_ratio: Some(pause_ratio),
        ..FeatureRecord::default()
    }
}

#[test]
fn test_create_and_read() {
    let mut store = MemoryStore::new();
    store.create("s1", "ana").unwrap();
    let session = store.read("s1").unwrap();
    assert_eq!(session.player, "ana");
    assert!(session.records.is_empty());
    assert!(session.result.is_none());
}

#[test]
fn test_duplicate_create_is_rejected() {
    let mut store = MemoryStore::new();
    store.create("s1", "ana").unwrap();
    let err = store.create("s1", "bo").unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
    // original session untouched
    assert_eq!(store.read("s1").unwrap().player, "ana");
}

#[test]
fn test_unknown_session_errors() {
    let mut store = MemoryStore::new();
    assert!(matches!(store.read("nope"), Err(StoreError::Unknown(_))));
    assert!(matches!(
        store.add_record("nope", Role::Intro, record(0.1)),
        Err(StoreError::Unknown(_))
    ));
    assert!(matches!(
        store.set_result("nope", crate::model::scores::ScoreResult::insufficient_data()),
        Err(StoreError::Unknown(_))
    ));
}

#[test]
fn test_completeness_needs_all_five_roles() {
    let mut store = MemoryStore::new();
    store.create("s1", "ana").unwrap();
    for role in [Role::Intro, Role::Hobby, Role::Story, Role::Technical] {
        store.add_record("s1", role, record(0.1)).unwrap();
        assert!(!store.read("s1").unwrap().is_complete());
    }
    store.add_record("s1", Role::Target, record(0.2)).unwrap();
    assert!(store.read("s1").unwrap().is_complete());
}

#[test]
fn test_rerecording_a_role_replaces_it() {
    let mut store = MemoryStore::new();
    store.create("s1", "ana").unwrap();
    store.add_record("s1", Role::Intro, record(0.1)).unwrap();
    store.add_record("s1", Role::Intro, record(0.3)).unwrap();
    let session = store.read("s1").unwrap();
    assert_eq!(session.records.len(), 1);
    assert_eq!(session.records[&Role::Intro].pause_ratio, Some(0.3));
}

#[test]
fn test_set_result() {
    let mut store = MemoryStore::new();
    store.create("s1", "ana").unwrap();
    let result = crate::model::scores::ScoreResult::insufficient_data();
    store.set_result("s1", result.clone()).unwrap();
    assert_eq!(store.read("s1").unwrap().result, Some(result));
}
