use std::path::PathBuf;

use oncoparam::catalog::UserVector;
use oncoparam::ctx::Ctx;
use oncoparam::io::summary::format_summary;
use oncoparam::panel::Panel;
use oncoparam::params::{assess_stability, derive_from_panel};

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(
        PathBuf::from("input.json"),
        PathBuf::from("out"),
        Panel::Full,
        true,
        false,
        false,
        "0.0.0-test",
    );
    let derivation = derive_from_panel(&UserVector::empty(), Panel::Full);
    ctx.supplied = 0;
    ctx.imputed = 47;
    ctx.stability = Some(assess_stability(&derivation.parameters));
    ctx.scores = Some(derivation.scores);
    ctx.organs = Some(derivation.organs);
    ctx.parameters = Some(derivation.parameters);
    ctx.violations = derivation.violations;

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("oncoparam v0.0.0-test"));
    assert!(s.contains("Panel: full (r2=0.996), 0 supplied, 47 imputed"));
    assert!(s.contains("s_tumor=0.450"));
    assert!(s.contains("Growth: lambda1="));
    assert!(s.contains("Stability: MARGINAL"));
    assert!(s.contains("Violations: lambdaR1 must be > lambdaR2"));
}

#[test]
fn summary_without_stability_or_violations() {
    let mut ctx = Ctx::new(
        PathBuf::from("input.json"),
        PathBuf::from("out"),
        Panel::Optimized,
        false,
        false,
        false,
        "0.0.0-test",
    );
    let derivation = derive_from_panel(&UserVector::empty(), Panel::Optimized);
    ctx.scores = Some(derivation.scores);
    ctx.organs = Some(derivation.organs);
    ctx.parameters = Some(derivation.parameters);

    let s = format_summary(&ctx).unwrap();
    assert!(!s.contains("Stability:"));
    assert!(s.contains("Violations: none"));
    assert!(s.contains("Panel: optimized (r2=0.93)"));
}
