use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn derive_run_prints_summary_and_writes_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("panel.json");
    std::fs::write(&input, "{\"ca153\": 45.0, \"cd8\": 650.0}").unwrap();
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("oncoparam").unwrap();
    cmd.args([
        "derive",
        "--input",
        input.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--json",
    ]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Panel: full"));
    assert!(stdout.contains("Growth: lambda1="));
    assert!(out.join("oncoparam.json").exists());
}

#[test]
fn derive_rejects_unknown_biomarker() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("panel.json");
    std::fs::write(&input, "{\"mystery\": 1.0}").unwrap();

    let mut cmd = Command::cargo_bin("oncoparam").unwrap();
    cmd.args([
        "derive",
        "--input",
        input.to_str().unwrap(),
        "--out",
        dir.path().join("out").to_str().unwrap(),
    ]);
    cmd.assert().failure();
}

#[test]
fn catalog_lists_47_markers() {
    let mut cmd = Command::cargo_bin("oncoparam").unwrap();
    cmd.arg("catalog");
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 47);

    let mut cmd = Command::cargo_bin("oncoparam").unwrap();
    cmd.args(["catalog", "--category", "organ"]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 5);
}
