use std::fs;
use std::path::PathBuf;

use fuzzperf_report::{evaluate_record, StudentRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    gpa: f32,
    activity: f32,
    expected_score: f32,
    expected_label: String,
}

#[test]
fn golden_roster_cases_pass() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fixture = root
        .join("..")
        .join("..")
        .join("data")
        .join("roster")
        .join("evaluation_cases.json");

    let content = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", fixture.display()));
    let cases: Vec<Case> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", fixture.display()));

    for case in cases {
        let record = StudentRecord {
            id: case.name.clone(),
            gpa: case.gpa,
            activity: case.activity,
        };

        let report = evaluate_record(&record)
            .unwrap_or_else(|e| panic!("case {} failed to evaluate: {e}", case.name));

        assert!(
            (report.score - case.expected_score).abs() < 0.01,
            "case {}: score {} != expected {}",
            case.name,
            report.score,
            case.expected_score
        );
        assert_eq!(
            report.label, case.expected_label,
            "case {} label mismatch",
            case.name
        );
    }
}
