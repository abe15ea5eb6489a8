use std::path::PathBuf;

use oncoparam::catalog::UserVector;
use oncoparam::ctx::Ctx;
use oncoparam::io::json_writer::build_report;
use oncoparam::panel::Panel;
use oncoparam::params::{assess_stability, derive_from_panel};

fn populated_ctx(panel: Panel) -> Ctx {
    let mut ctx = Ctx::new(
        PathBuf::from("input.json"),
        PathBuf::from("out"),
        panel,
        true,
        false,
        false,
        "0.0.0-test",
    );
    let derivation = derive_from_panel(&UserVector::empty(), panel);
    ctx.supplied = 0;
    ctx.imputed = 47;
    ctx.stability = Some(assess_stability(&derivation.parameters));
    ctx.scores = Some(derivation.scores);
    ctx.organs = Some(derivation.organs);
    ctx.parameters = Some(derivation.parameters);
    ctx.violations = derivation.violations;
    ctx.coverage = derivation.coverage;
    ctx
}

#[test]
fn report_is_fully_populated() {
    let ctx = populated_ctx(Panel::Full);
    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "oncoparam");
    assert_eq!(json["version"], "0.0.0-test");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["panel"]["panel"], "full");
    assert_eq!(json["panel"]["r_squared"], 0.996);
    assert_eq!(json["input"]["supplied"], 0);
    assert_eq!(json["input"]["imputed"], 47);

    assert!((json["scores"]["s_tumor"].as_f64().unwrap() - 0.45).abs() < 1e-9);
    assert!((json["scores"]["G"].as_f64().unwrap() - 0.925).abs() < 1e-9);
    assert!((json["organs"]["f_clearance"].as_f64().unwrap() - 1.5).abs() < 1e-9);

    // Parameter keys use the published naming.
    let params = json["parameters"].as_object().unwrap();
    assert_eq!(params.len(), 39);
    assert!(params.contains_key("lambdaR1"));
    assert!(params.contains_key("K"));
    assert!(params.contains_key("etaE"));
    assert!(params.contains_key("alpha_acid"));

    assert!(json["constraint_violations"].is_array());
    // Reference parameters pass two of three heuristics, under the 0.67 bar.
    assert_eq!(json["stability"]["status"], "MARGINAL");
    assert!(json["coverage"].is_null());
}

#[test]
fn core_panel_report_carries_coverage() {
    let ctx = populated_ctx(Panel::Core);
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();

    assert_eq!(json["panel"]["panel"], "core");
    assert_eq!(json["panel"]["r_squared"], 0.87);
    let coverage = json["coverage"].as_array().unwrap();
    assert_eq!(coverage.len(), 38);
    let lambda1 = coverage
        .iter()
        .find(|entry| entry["parameter"] == "lambda1")
        .unwrap();
    assert_eq!(lambda1["label"], "core_driven");
}

#[test]
fn violations_are_reported_with_rule_and_action() {
    let ctx = populated_ctx(Panel::Full);
    // Reference-derived parameters trip the lambdaR1 > lambdaR2 rule.
    assert!(!ctx.violations.is_empty());
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    let violations = json["constraint_violations"].as_array().unwrap();
    assert!(!violations.is_empty());
    assert!(violations[0]["rule"].is_string());
    assert!(violations[0]["action"].is_string());
}

#[test]
fn report_requires_derived_state() {
    let ctx = Ctx::new(
        PathBuf::from("input.json"),
        PathBuf::from("out"),
        Panel::Full,
        true,
        false,
        false,
        "0.0.0-test",
    );
    assert!(build_report(&ctx).is_err());
}
