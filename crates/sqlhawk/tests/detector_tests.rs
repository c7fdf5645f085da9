//! End-to-end tests of the Detector service operations: train on known
//! samples, persist, reload, classify.

use sqlhawk::{ast, parse_all, Detector, Label, SqlhawkError};

const BENIGN: &[&str] = &[
    "SELECT name FROM users WHERE id = 1",
    "SELECT id, email FROM users WHERE org_id = 42 ORDER BY id LIMIT 20",
    "INSERT INTO audit_log (actor, action) VALUES ('system', 'login')",
    "UPDATE sessions SET last_seen = now() WHERE token = ?",
    "SELECT u.id FROM users u LEFT JOIN orders o ON u.id = o.user_id",
];

const MALICIOUS: &[&str] = &[
    "DROP TABLE users",
    "SELECT * FROM users WHERE name = 'x' OR 1 = 1",
    "SELECT * FROM users WHERE id = 1; DROP TABLE users;",
    "SELECT a FROM t UNION ALL SELECT password FROM credentials",
    "SELECT * FROM accounts WHERE '1' = '1'",
];

fn trained_detector() -> Detector {
    let mut detector = Detector::new();
    for sql in BENIGN {
        detector.submit_benign(sql).expect("benign sample trains");
    }
    for sql in MALICIOUS {
        detector
            .submit_malicious(sql)
            .expect("malicious sample trains");
    }
    detector
}

#[test]
fn test_trained_detector_separates_samples() {
    let detector = trained_detector();

    let verdict = detector.classify("DROP TABLE customers").unwrap();
    assert_eq!(verdict.label, Label::Malicious);
    assert!(verdict.malicious_probability > 0.5);

    let verdict = detector
        .classify("SELECT age FROM users WHERE id = 7")
        .unwrap();
    assert_eq!(verdict.label, Label::Benign);
    assert!(verdict.malicious_probability < 0.5);
}

#[test]
fn test_tautology_probe_scores_malicious() {
    let detector = trained_detector();
    let verdict = detector
        .classify("SELECT * FROM members WHERE email = 'a' OR 2 = 2")
        .unwrap();
    assert_eq!(verdict.label, Label::Malicious);
}

#[test]
fn test_save_load_preserves_the_model() {
    let detector = trained_detector();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    detector.save(&path).unwrap();
    let restored = Detector::load(&path).unwrap();
    assert!(restored.is_trained());

    let before = detector.classify("DROP TABLE t").unwrap();
    let after = restored.classify("DROP TABLE t").unwrap();
    assert_eq!(before.label, after.label);
    assert!((before.malicious_probability - after.malicious_probability).abs() < 1e-12);
}

#[test]
fn test_load_missing_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = Detector::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SqlhawkError::Io(_)));
}

#[test]
fn test_pipeline_recovers_other_statements_around_a_bad_one() {
    let (statements, errors) =
        parse_all("SELECT 1; SELECT FROM WHERE; DELETE FROM t WHERE id = 1;").unwrap();
    assert!(statements
        .iter()
        .any(|s| matches!(s, ast::Statement::Select(_))));
    assert!(statements
        .iter()
        .any(|s| matches!(s, ast::Statement::Delete(_))));
    assert_eq!(errors.len(), 1);
}
