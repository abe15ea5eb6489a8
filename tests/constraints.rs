use oncoparam::catalog::{BiomarkerKey, UserVector};
use oncoparam::panel::Panel;
use oncoparam::params::{derive_from_panel, enforce_growth_ordering};

fn user(entries: &[(BiomarkerKey, f64)]) -> UserVector {
    entries.iter().copied().collect()
}

/// Reading crafted so the raw lambda2 overtakes lambda1: flat proliferation
/// markers keep lambda1 at 0.04 while an extreme PGR pushes f_resist1 to its
/// ceiling of 2.0, making raw lambda2 = 0.048.
fn inverted_growth_reading() -> UserVector {
    user(&[
        (BiomarkerKey::Tk1, 0.0),
        (BiomarkerKey::Glucose, 0.0),
        (BiomarkerKey::Lactate, 0.0),
        (BiomarkerKey::Survivin, 0.0),
        (BiomarkerKey::Pgr, 9999.0),
    ])
}

#[test]
fn inverted_growth_is_repaired_with_one_violation() {
    let derivation = derive_from_panel(&inverted_growth_reading(), Panel::Full);

    assert_eq!(derivation.violations.len(), 1);
    assert_eq!(derivation.violations[0].rule, "lambda1 must be > lambda2");

    let p = &derivation.parameters;
    assert!((p.lambda1 - 0.04).abs() < 1e-9);
    assert!((p.lambda2 - 0.04 * 0.99).abs() < 1e-9);
    assert!(p.lambda1 > p.lambda2);
    assert!(p.lambda2 > p.lambda_r1);
    assert!(p.lambda_r1 > p.lambda_r2);
}

#[test]
fn repairs_cascade_left_to_right() {
    let mut params = derive_from_panel(&UserVector::empty(), Panel::Full).parameters;
    params.lambda1 = 0.05;
    params.lambda2 = 0.05;
    params.lambda_r1 = 0.05;
    params.lambda_r2 = 0.05;

    let violations = enforce_growth_ordering(&mut params);
    assert_eq!(violations.len(), 3);
    assert_eq!(violations[0].rule, "lambda1 must be > lambda2");
    assert_eq!(violations[1].rule, "lambda2 must be > lambdaR1");
    assert_eq!(violations[2].rule, "lambdaR1 must be > lambdaR2");

    assert!((params.lambda2 - 0.05 * 0.99).abs() < 1e-12);
    assert!((params.lambda_r1 - 0.05 * 0.99 * 0.99).abs() < 1e-12);
    assert!((params.lambda_r2 - 0.05 * 0.99 * 0.99 * 0.99).abs() < 1e-12);
}

#[test]
fn repair_is_idempotent() {
    let mut params = derive_from_panel(&inverted_growth_reading(), Panel::Full).parameters;
    let second_pass = enforce_growth_ordering(&mut params);
    assert!(second_pass.is_empty());

    params.lambda1 = 0.05;
    params.lambda2 = 0.06;
    params.lambda_r1 = 0.07;
    params.lambda_r2 = 0.08;
    let first = enforce_growth_ordering(&mut params);
    assert_eq!(first.len(), 3);
    let second = enforce_growth_ordering(&mut params);
    assert!(second.is_empty());
}

#[test]
fn ordering_holds_for_adversarial_inputs() {
    let adversarial: Vec<UserVector> = vec![
        UserVector::empty(),
        inverted_growth_reading(),
        BiomarkerKey::ALL.iter().map(|&k| (k, 0.0)).collect(),
        BiomarkerKey::ALL.iter().map(|&k| (k, 1e9)).collect(),
    ];
    for input in &adversarial {
        for sel in [Panel::Full, Panel::Core] {
            let p = derive_from_panel(input, sel).parameters;
            assert!(p.lambda1 > p.lambda2, "lambda1 {} lambda2 {}", p.lambda1, p.lambda2);
            assert!(p.lambda2 > p.lambda_r1);
            assert!(p.lambda_r1 > p.lambda_r2);
        }
    }
}

#[test]
fn violation_records_name_the_repair() {
    let mut params = derive_from_panel(&UserVector::empty(), Panel::Full).parameters;
    params.lambda1 = 0.02;
    params.lambda2 = 0.03;
    let violations = enforce_growth_ordering(&mut params);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].action.contains("lambda2 set to"));
}
