use super::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn conv_record(
    pause_ratio: f64,
    pause_count: f64,
    mean_f0: f64,
    max_rms_db: f64,
    mean_rms_db: f64,
) -> FeatureRecord {
    FeatureRecord {
        pause_ratio: Some(pause_ratio),
        pause_count: Some(pause_count),
        mean_f0: Some(mean_f0),
        max_rms_db: Some(max_rms_db),
        mean_rms_db: Some(mean_rms_db),
        ..FeatureRecord::default()
    }
}

fn read_record(mean_f0: f64, mean_rms_db: f64) -> FeatureRecord {
    FeatureRecord {
        mean_f0: Some(mean_f0),
        mean_rms_db: Some(mean_rms_db),
        ..FeatureRecord::default()
    }
}

fn reference_records() -> [FeatureRecord; 5] {
    [
        conv_record(0.083, 2.0, 100.51, -12.95, -29.69),
        conv_record(0.123, 0.0, 88.15, -14.13, -32.93),
        read_record(112.47, -26.91),
        read_record(109.5, -29.2),
        conv_record(0.264, 2.0, 115.27, -11.74, -25.87),
    ]
}

fn bundle_of(roles: &[(Role, FeatureRecord)]) -> SessionBundle {
    SessionBundle {
        session_dir: PathBuf::from("test-session"),
        records: roles.iter().cloned().collect::<BTreeMap<_, _>>(),
    }
}

fn full_bundle() -> SessionBundle {
    let [intro, hobby, story, technical, target] = reference_records();
    bundle_of(&[
        (Role::Intro, intro),
        (Role::Hobby, hobby),
        (Role::Story, story),
        (Role::Technical, technical),
        (Role::Target, target),
    ])
}

#[test]
fn test_reference_session_end_to_end() {
    let (method, result) = score_bundle(&full_bundle()).unwrap();
    assert_eq!(method, ScoringMethod::Baseline);
    assert_eq!(result.score, 30.9);
    assert_eq!(result.confidence, 0.71);
    assert_eq!(
        result.reasons,
        vec![
            "More/longer pauses vs conversational baseline",
            "Loudness shift vs baseline"
        ]
    );
    match result.detail {
        ScoreDetail::Baseline {
            conv_weight,
            read_weight,
            contributions,
        } => {
            assert_eq!(conv_weight, 0.56);
            assert_eq!(read_weight, 0.44);
            assert_eq!(contributions.pause_ratio, Some(0.562));
            assert_eq!(contributions.pause_count, Some(0.126));
            assert_eq!(contributions.mean_rms_db, Some(0.394));
            assert_eq!(contributions.max_rms_db, Some(0.225));
            assert_eq!(contributions.mean_f0, Some(0.125));
        }
        other => panic!("expected baseline detail, got {other:?}"),
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let bundle = full_bundle();
    let (_, first) = score_bundle(&bundle).unwrap();
    let (_, second) = score_bundle(&bundle).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_target_only_bundle_uses_threshold_fallback() {
    let bundle = bundle_of(&[(Role::Target, conv_record(0.3, 12.0, 90.0, -11.0, -5.0))]);
    let (method, result) = score_bundle(&bundle).unwrap();
    assert_eq!(method, ScoringMethod::SimpleThreshold);
    assert_eq!(result.score, 80.0);
    assert_eq!(result.confidence, 0.7);
    assert_eq!(
        result.detail,
        ScoreDetail::Method {
            method: "simple_threshold"
        }
    );
}

#[test]
fn test_partial_bundle_is_rejected() {
    let [intro, _, _, _, target] = reference_records();
    let bundle = bundle_of(&[(Role::Intro, intro), (Role::Target, target)]);
    assert!(matches!(
        score_bundle(&bundle),
        Err(InputError::InvalidSession(_))
    ));
}

#[test]
fn test_empty_records_yield_insufficient_data() {
    let bundle = bundle_of(&[
        (Role::Intro, FeatureRecord::default()),
        (Role::Hobby, FeatureRecord::default()),
        (Role::Story, FeatureRecord::default()),
        (Role::Technical, FeatureRecord::default()),
        (Role::Target, FeatureRecord::default()),
    ]);
    let (method, result) = score_bundle(&bundle).unwrap();
    assert_eq!(method, ScoringMethod::Baseline);
    assert_eq!(result, ScoreResult::insufficient_data());
}

#[test]
fn test_score_and_confidence_stay_in_bounds() {
    let mut bundle = full_bundle();
    // absurd target far outside both baselines
    bundle.records.insert(
        Role::Target,
        conv_record(50.0, 500.0, 4000.0, 40.0, 40.0),
    );
    let (_, result) = score_bundle(&bundle).unwrap();
    assert!(result.score >= 0.0 && result.score <= 100.0);
    assert!(result.confidence >= 0.3 && result.confidence <= 0.95);
    assert!(result.reasons.len() <= 2);
}

#[test]
fn test_missing_baseline_features_do_not_fail_scoring() {
    let mut bundle = full_bundle();
    // conversational pair without loudness: blended term leans on the
    // reading baseline alone
    bundle.records.insert(
        Role::Intro,
        FeatureRecord {
            pause_ratio: Some(0.083),
            pause_count: Some(2.0),
            mean_f0: Some(100.51),
            ..FeatureRecord::default()
        },
    );
    bundle.records.insert(
        Role::Hobby,
        FeatureRecord {
            pause_ratio: Some(0.123),
            pause_count: Some(0.0),
            mean_f0: Some(88.15),
            ..FeatureRecord::default()
        },
    );
    let (_, result) = score_bundle(&bundle).unwrap();
    assert!(result.score > 0.0);
    match result.detail {
        ScoreDetail::Baseline { contributions, .. } => {
            assert!(contributions.mean_rms_db.is_some());
            // max_rms_db has no conversational baseline and drops out
            assert!(contributions.max_rms_db.is_none());
        }
        other => panic!("expected baseline detail, got {other:?}"),
    }
}
