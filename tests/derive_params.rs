use oncoparam::catalog::{BiomarkerKey, UserVector};
use oncoparam::panel::{self, Panel};
use oncoparam::params::{BOUNDS, ParameterSet, derive_from_panel, derive_parameters};
use oncoparam::scores::composite::composite_scores;
use oncoparam::scores::organ::organ_functions;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
}

fn user(entries: &[(BiomarkerKey, f64)]) -> UserVector {
    entries.iter().copied().collect()
}

/// Metastatic-profile example reading, all 47 markers supplied.
fn example_reading() -> UserVector {
    use BiomarkerKey::*;
    user(&[
        (Ca153, 45.0),
        (Ca2729, 38.0),
        (Cea, 4.2),
        (Tk1, 3.1),
        (Ctdna, 1.2),
        (Esr1Protein, 5.2),
        (Cd8, 650.0),
        (Cd4, 950.0),
        (Nk, 180.0),
        (IfnGamma, 3.8),
        (Il10, 28.0),
        (TnfAlpha, 6.5),
        (TgfBeta, 3.2),
        (Pdl1Ctc, 3.5),
        (HlaDr, 75.0),
        (Ctc, 8.0),
        (Ang2, 2200.0),
        (Lymphocytes, 1800.0),
        (Esr1Mutations, 2.0),
        (Pgr, 45.0),
        (Brca, 1.0),
        (Pik3ca, 4.0),
        (Tp53, 3.0),
        (Her2Mutations, 1.0),
        (Her2Circ, 3.5),
        (Mdr1, 135.0),
        (Cyp2d6, 1.8),
        (Survivin, 6.1),
        (Hsp, 12.0),
        (Mir200, 0.6),
        (Exosomes, 11.0),
        (Vegf, 320.0),
        (Mrp1, 100.0),
        (Ki67, 12.0),
        (Glucose, 115.0),
        (Lactate, 2.8),
        (Ldh, 310.0),
        (Albumin, 3.4),
        (BetaHydroxybutyrate, 0.3),
        (BloodPh, 7.38),
        (Folate, 8.0),
        (VitaminD, 25.0),
        (Creatinine, 0.9),
        (Bun, 18.0),
        (Alt, 28.0),
        (Ast, 32.0),
        (Bilirubin, 0.8),
    ])
}

fn derive(input: &UserVector, sel: Panel) -> ParameterSet {
    let resolved = panel::resolve(input, sel);
    let scores = composite_scores(&resolved);
    let organs = organ_functions(&resolved);
    derive_parameters(&scores, &organs, &resolved)
}

#[test]
fn lambda1_matches_proliferation_formula() {
    let resolved = panel::resolve(&example_reading(), Panel::Full);
    let scores = composite_scores(&resolved);
    let organs = organ_functions(&resolved);
    let params = derive_parameters(&scores, &organs, &resolved);

    let expected = (0.04 * (1.0 + 1.5 * scores.s_prolif)).clamp(0.01, 0.15);
    assert!((params.lambda1 - expected).abs() < 1e-6);
    // This reading drives proliferation past the ceiling.
    assert_eq!(params.lambda1, 0.15);
}

#[test]
fn growth_family_scales_from_clamped_lambda1() {
    let params = derive(&example_reading(), Panel::Full);
    assert_eq!(params.lambda1, 0.15);
    assert_eq!(params.lambda2, 0.1);
    assert_eq!(params.lambda_r1, 0.05);
    assert_close(params.lambda_r2, 0.028453125);
}

#[test]
fn suppressed_immune_context_floors_beta1() {
    // s_suppress above 1 turns the raw product negative; the clamp floor
    // must catch it.
    let params = derive(&example_reading(), Panel::Full);
    assert_eq!(params.beta1, 0.001);
}

#[test]
fn absent_her2_target_floors_eta_h() {
    let input = user(&[
        (BiomarkerKey::Her2Circ, 0.0),
        (BiomarkerKey::Her2Mutations, 0.0),
    ]);
    let params = derive(&input, Panel::Full);
    assert_eq!(params.eta_h, 0.1);
}

#[test]
fn core_panel_ignores_smuggled_vegf() {
    // vegf is outside the core 15: a supplied extreme must not leak into
    // the angiogenesis rate.
    let mut input = example_reading();
    input.set(BiomarkerKey::Vegf, 9999.0);
    let derivation = derive_from_panel(&input, Panel::Core);
    assert_eq!(
        derivation.resolved.get(BiomarkerKey::Vegf),
        BiomarkerKey::Vegf.reference()
    );
    // alphaA from reference vegf (200) and ang2 (2000).
    assert_close(derivation.parameters.alpha_a, 0.05);
}

#[test]
fn acidosis_coefficient_tracks_ph_deficit() {
    let params = derive(&example_reading(), Panel::Full);
    assert!((params.alpha_acid - 0.04).abs() < 1e-9);

    let normal = user(&[(BiomarkerKey::BloodPh, 7.45)]);
    let params = derive(&normal, Panel::Full);
    assert_eq!(params.alpha_acid, 0.01);
}

#[test]
fn pharmacokinetics_follow_clearance() {
    let params = derive(&UserVector::empty(), Panel::Full);
    // Reference organs give f_clearance = 1.5.
    assert_close(params.kel, 0.1 / 1.5);
    assert_close(params.k_metabolism, 0.05 * 1.2);
    assert_close(params.k_clearance, 0.2 * 1.5);
}

#[test]
fn every_parameter_stays_within_documented_bounds() {
    let zeros: UserVector = BiomarkerKey::ALL.iter().map(|&k| (k, 0.0)).collect();
    let extremes: UserVector = BiomarkerKey::ALL.iter().map(|&k| (k, 1e9)).collect();
    let inputs = [UserVector::empty(), zeros, extremes, example_reading()];

    for input in &inputs {
        for sel in [Panel::Full, Panel::Optimized, Panel::Core] {
            let derivation = derive_from_panel(input, sel);
            for ((name, value), &(bound_name, lo, hi)) in
                derivation.parameters.entries().iter().zip(BOUNDS.iter())
            {
                assert_eq!(*name, bound_name);
                assert!(
                    (lo..=hi).contains(value),
                    "{} = {} outside [{}, {}]",
                    name,
                    value,
                    lo,
                    hi
                );
            }
        }
    }
}

#[test]
fn derivation_is_deterministic() {
    let input = example_reading();
    let first = derive_from_panel(&input, Panel::Full);
    let second = derive_from_panel(&input, Panel::Full);
    assert_eq!(first.parameters, second.parameters);
    assert_eq!(first.scores, second.scores);
    assert_eq!(first.organs, second.organs);
    assert_eq!(first.violations, second.violations);
}

#[test]
fn bounds_table_is_consistent() {
    assert_eq!(BOUNDS.len(), 39);
    for (name, lo, hi) in BOUNDS {
        assert!(lo < hi, "{} has inverted bounds", name);
        assert_eq!(ParameterSet::bounds_for(name), Some((lo, hi)));
    }
    assert_eq!(ParameterSet::bounds_for("nonsense"), None);
}
