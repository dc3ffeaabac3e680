//! End-to-end checks of the obody-config binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::cargo_bin("obody-config").unwrap()
}

#[test]
fn test_template_then_validate_round_trips() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("OBody_presetDistributionConfig.json");

    cmd()
        .args(["template", "--output"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote template"));

    // The emitted template must satisfy its own contract.
    cmd()
        .arg("validate")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));

    let content = std::fs::read_to_string(&template).unwrap();
    assert!(content.contains("\"blacklistedRacesFemale\""));
    assert!(content.contains("ElderRace"));
}

#[test]
fn test_schema_output() {
    let dir = tempdir().unwrap();
    let schema_path = dir.path().join("schema.json");

    cmd()
        .args(["schema", "--output"])
        .arg(&schema_path)
        .assert()
        .success();

    let schema: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&schema_path).unwrap()).unwrap();
    assert_eq!(schema["type"], serde_json::json!("object"));
    assert!(schema["properties"]["npcFormID"].is_object());
    assert!(schema["$defs"]["BSTFile"].is_object());
}

#[test]
fn test_schema_legacy_refs() {
    let dir = tempdir().unwrap();
    let schema_path = dir.path().join("schema.json");

    cmd()
        .args(["schema", "--legacy-refs", "--output"])
        .arg(&schema_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&schema_path).unwrap();
    assert!(content.contains("#/definitions/"));
    assert!(!content.contains("#/$defs/"));
}

#[test]
fn test_validate_rejects_bad_config_with_paths() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad.json");
    std::fs::write(
        &config_path,
        r#"{
            "npcFormID": {"Skyrim.esm": {"BADID": ["SomePreset"]}},
            "totallyUnknownKey": 1
        }"#,
    )
    .unwrap();

    cmd()
        .arg("validate")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("npcFormID.Skyrim.esm.BADID")
                .and(predicate::str::contains("totallyUnknownKey")),
        );
}

#[test]
fn test_validate_missing_file_fails() {
    cmd()
        .args(["validate", "does-not-exist.json"])
        .assert()
        .failure();
}
