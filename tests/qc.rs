use oncoparam::catalog::{BiomarkerKey, UserVector};
use oncoparam::qc::validate_readings;

fn user(entries: &[(BiomarkerKey, f64)]) -> UserVector {
    entries.iter().copied().collect()
}

#[test]
fn normal_readings_produce_no_findings() {
    let input = user(&[
        (BiomarkerKey::Ca153, 15.0),
        (BiomarkerKey::Cd8, 700.0),
        (BiomarkerKey::Glucose, 95.0),
        (BiomarkerKey::Creatinine, 1.0),
    ]);
    let report = validate_readings(&input);
    assert!(report.warnings.is_empty());
    assert!(report.critical_alerts.is_empty());
}

#[test]
fn extreme_ca153_is_critical_and_warned() {
    let report = validate_readings(&user(&[(BiomarkerKey::Ca153, 150.0)]));
    assert_eq!(report.critical_alerts.len(), 1);
    assert!(report.critical_alerts[0].contains("CA 15-3 extremely elevated"));
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn elevated_ca153_warns_without_alert() {
    let report = validate_readings(&user(&[(BiomarkerKey::Ca153, 45.0)]));
    assert!(report.critical_alerts.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("normal <25"));
}

#[test]
fn low_cd8_is_critical() {
    let report = validate_readings(&user(&[(BiomarkerKey::Cd8, 150.0)]));
    assert_eq!(report.critical_alerts.len(), 1);
    assert!(report.critical_alerts[0].contains("immunocompromised"));
}

#[test]
fn high_creatinine_is_critical() {
    let report = validate_readings(&user(&[(BiomarkerKey::Creatinine, 4.5)]));
    assert_eq!(report.critical_alerts.len(), 1);
    assert!(report.critical_alerts[0].contains("kidney dysfunction"));
}

#[test]
fn abnormal_glucose_warns() {
    let low = validate_readings(&user(&[(BiomarkerKey::Glucose, 50.0)]));
    assert_eq!(low.warnings.len(), 1);
    let high = validate_readings(&user(&[(BiomarkerKey::Glucose, 200.0)]));
    assert_eq!(high.warnings.len(), 1);
    let normal = validate_readings(&user(&[(BiomarkerKey::Glucose, 120.0)]));
    assert!(normal.warnings.is_empty());
}

#[test]
fn zero_readings_are_skipped() {
    // An unmeasured marker keyed as zero must not trip the low-CD8 alert.
    let report = validate_readings(&user(&[(BiomarkerKey::Cd8, 0.0)]));
    assert!(report.critical_alerts.is_empty());
    assert!(report.warnings.is_empty());
}
