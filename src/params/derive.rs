use crate::catalog::BiomarkerKey::*;
use crate::catalog::ResolvedVector;
use crate::params::ParameterSet;
use crate::scores::{CompositeScores, OrganFunctions};

const ETA_LO: f64 = 0.1;
const ETA_HI: f64 = 0.95;

/// Derive the 37 model parameters (plus `g` and `alpha_acid`) from composite
/// scores, organ functions, and selected raw markers.
///
/// Ordering matters for the growth family: lambda2, lambdaR1 and lambdaR2 are
/// scaled from the already-clamped lambda1, not from its raw value.
pub fn derive_parameters(
    scores: &CompositeScores,
    organs: &OrganFunctions,
    v: &ResolvedVector,
) -> ParameterSet {
    // Growth
    let lambda1 = (0.04 * (1.0 + 1.5 * scores.s_prolif)).clamp(0.01, 0.15);
    let lambda2 = (0.6 * lambda1 * (1.0 + 0.5 * scores.f_resist1)).clamp(0.005, 0.1);
    let lambda_r1 = (0.4 * lambda1 * scores.f_resist1).clamp(0.003, 0.05);
    let lambda_r2 = (0.25 * lambda1 * (1.0 - 0.3 * scores.f_resist2)).clamp(0.001, 0.03);
    let k = (scores.s_tumor * 2000.0).clamp(100.0, 15000.0);

    // Immune
    let beta1 = (0.02 * scores.s_immune * (1.0 - scores.s_suppress)).clamp(0.001, 0.1);
    let beta2 = (0.05 + 0.15 * scores.s_suppress).clamp(0.01, 0.5);
    let phi1 = (0.05 + 0.1 * scores.s_activation).clamp(0.01, 0.2);
    let phi2 = (0.01 + 0.03 * (scores.s_tumor / 2.0)).clamp(0.005, 0.1);
    let phi3 = (0.02 + 0.08 * (v.get(Il10) / 15.0)).clamp(0.005, 0.15);
    let delta_i = (0.05 + 0.1 * scores.s_stress).clamp(0.02, 0.3);

    // Resistance evolution
    let omega_r1 = (0.002 * scores.s_genetic * scores.s_stress).clamp(1e-4, 0.01);
    let omega_r2 = (0.001 * scores.s_genetic * scores.s_stress).clamp(1e-4, 0.008);
    let mu = (0.01 * (1.0 + 1.5 * scores.s_genetic)).clamp(0.001, 0.05);
    let nu = (0.002 * scores.s_genetic * (1.0 + scores.s_stress)).clamp(1e-4, 0.01);
    let brca_factor = 1.0 - (v.get(Brca) / 2.0).min(0.5);
    let delta_g = (0.01 * brca_factor * scores.g).clamp(0.001, 0.05);

    // Treatment effectiveness
    let albumin_component = v.get(Albumin) / 4.0;
    let glucose_component = (1.0 - 0.3 * (95.0 - v.get(Glucose)).abs() / 95.0).max(0.5);
    let f_general = (albumin_component + glucose_component) / 2.0;
    let f_organs = (organs.f_liver + organs.f_kidney) / 2.0;

    let f_receptor = (v.get(Esr1Protein) / 6.0).min(1.0);
    let f_cyp2d6 = (v.get(Cyp2d6) / 2.0).min(1.0);
    let f_metabolism = (organs.f_liver + f_cyp2d6 + f_general) / 3.0;
    let resistance_component = 0.6 * (v.get(Esr1Mutations) / 8.0) + 0.4 * scores.s_genetic;
    let f_resist_hormone = 1.0 - resistance_component.min(0.9);
    let eta_e = (f_receptor * f_metabolism * f_resist_hormone).clamp(ETA_LO, ETA_HI);

    let eta_c = (f_general * f_organs * (1.0 - 0.7 * scores.f_resist2)).clamp(ETA_LO, ETA_HI);

    let her2_circ_component = (v.get(Her2Circ) / 5.0).min(1.0);
    let her2_mut_penalty = 1.0 - 0.6 * (v.get(Her2Mutations) / 10.0);
    let f_her2 = her2_circ_component * her2_mut_penalty;
    let eta_h = (f_her2 * f_organs * (1.0 - 0.5 * scores.f_resist2)).clamp(ETA_LO, ETA_HI);

    let f_pdl1 = (v.get(Pdl1Ctc) / 3.0).min(1.0);
    let il10_component = (1.0 - v.get(Il10) / 15.0).max(0.0);
    let f_immune_ctx = (v.get(Cd8) / 700.0
        + v.get(Cd4) / 1050.0
        + v.get(IfnGamma) / 2.0
        + il10_component)
        / 4.0;
    let eta_i = (f_pdl1 * f_immune_ctx * f_general).clamp(ETA_LO, ETA_HI);

    // Pharmacokinetic; f_clearance is floored away from zero by the organ
    // factor guards, so the reciprocal is always finite.
    let kel = (0.1 / organs.f_clearance).clamp(0.05, 0.3);
    let k_metabolism = (0.05 * organs.f_liver).clamp(0.02, 0.2);
    let k_clearance = (0.2 * organs.f_clearance).clamp(0.1, 0.5);

    // Microenvironmental
    let alpha_a =
        (0.02 * (1.0 + v.get(Vegf) / 400.0) * (1.0 + v.get(Ang2) / 3000.0)).clamp(0.001, 0.1);
    let delta_a = (0.1 * organs.f_clearance).clamp(0.05, 0.2);
    let kappa_q = (0.005 + 0.02 * scores.s_quiescence).clamp(0.001, 0.05);
    let lambda_q = (0.002 + 0.01 * (1.0 - scores.s_quiescence)).clamp(5e-4, 0.02);
    let kappa_s = (0.002 + 0.01 * scores.s_stress).clamp(0.001, 0.04);
    let delta_s = (0.05 * scores.s_immune).clamp(0.02, 0.1);
    let gamma = (0.002 * scores.f_metastatic).clamp(1e-4, 0.01);
    let delta_p = (0.05 + 0.03 * scores.s_immune).clamp(0.02, 0.1);

    // Metabolic state and hypoxia
    let bhb_factor = (1.0 - v.get(BetaHydroxybutyrate) / 2.0).max(0.5);
    let kappa_m = (0.02 * scores.s_metabolic * bhb_factor).clamp(0.001, 0.1);
    let delta_m = (0.01 * (1.0 - 0.5 * scores.s_metabolic)).clamp(0.001, 0.05);
    let kappa_h = (0.02 * (scores.s_tumor - 0.5).max(0.0)).clamp(0.001, 0.1);
    let delta_h = (0.05 * (1.0 + organs.f_clearance)).clamp(0.01, 0.1);

    // Immune sensitivity of resistant compartments
    let rho1 = (0.75 + 0.15 * scores.s_immune).clamp(0.6, 0.9);
    let rho2 = (0.45 - 0.15 * scores.f_resist2).clamp(0.3, 0.6);

    // Acidosis coefficient for the ODE system; grows as arterial pH drops
    // below 7.4.
    let ph_deviation = (7.4 - v.get(BloodPh)).max(0.0);
    let alpha_acid = (2.0 * ph_deviation).clamp(0.01, 0.5);

    ParameterSet {
        lambda1,
        lambda2,
        lambda_r1,
        lambda_r2,
        k,
        beta1,
        beta2,
        phi1,
        phi2,
        phi3,
        delta_i,
        omega_r1,
        omega_r2,
        mu,
        nu,
        delta_g,
        eta_e,
        eta_c,
        eta_h,
        eta_i,
        kel,
        k_metabolism,
        k_clearance,
        alpha_a,
        delta_a,
        kappa_q,
        lambda_q,
        kappa_s,
        delta_s,
        gamma,
        delta_p,
        kappa_m,
        delta_m,
        kappa_h,
        delta_h,
        rho1,
        rho2,
        g: scores.g,
        alpha_acid,
    }
}
