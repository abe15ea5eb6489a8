pub mod constraints;
pub mod coverage;
pub mod derive;
pub mod stability;

use crate::catalog::{ResolvedVector, UserVector};
use crate::panel::{self, Panel};
use crate::scores::{CompositeScores, OrganFunctions, composite, organ};

pub use self::constraints::{ConstraintViolation, enforce_growth_ordering};
pub use self::coverage::{CoverageLabel, core_panel_coverage};
pub use self::derive::derive_parameters;
pub use self::stability::{Stability, assess_stability};

/// The 37 model parameters plus the genetic-stability index `g` and the
/// acidosis coefficient `alpha_acid` carried for the ODE system.
///
/// Every field is clamped to the closed interval listed in [`BOUNDS`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    // Growth
    pub lambda1: f64,
    pub lambda2: f64,
    pub lambda_r1: f64,
    pub lambda_r2: f64,
    pub k: f64,
    // Immune
    pub beta1: f64,
    pub beta2: f64,
    pub phi1: f64,
    pub phi2: f64,
    pub phi3: f64,
    pub delta_i: f64,
    // Resistance evolution
    pub omega_r1: f64,
    pub omega_r2: f64,
    pub mu: f64,
    pub nu: f64,
    pub delta_g: f64,
    // Treatment effectiveness
    pub eta_e: f64,
    pub eta_c: f64,
    pub eta_h: f64,
    pub eta_i: f64,
    // Pharmacokinetic
    pub kel: f64,
    pub k_metabolism: f64,
    pub k_clearance: f64,
    // Microenvironmental
    pub alpha_a: f64,
    pub delta_a: f64,
    pub kappa_q: f64,
    pub lambda_q: f64,
    pub kappa_s: f64,
    pub delta_s: f64,
    pub gamma: f64,
    pub delta_p: f64,
    // Metabolic / hypoxia
    pub kappa_m: f64,
    pub delta_m: f64,
    pub kappa_h: f64,
    pub delta_h: f64,
    // Immune sensitivity of resistant cells
    pub rho1: f64,
    pub rho2: f64,
    // Derived alongside the 37
    pub g: f64,
    pub alpha_acid: f64,
}

/// Closed interval each parameter must fall within, in output order.
pub const BOUNDS: [(&str, f64, f64); 39] = [
    ("lambda1", 0.01, 0.15),
    ("lambda2", 0.005, 0.1),
    ("lambdaR1", 0.003, 0.05),
    ("lambdaR2", 0.001, 0.03),
    ("K", 100.0, 15000.0),
    ("beta1", 0.001, 0.1),
    ("beta2", 0.01, 0.5),
    ("phi1", 0.01, 0.2),
    ("phi2", 0.005, 0.1),
    ("phi3", 0.005, 0.15),
    ("deltaI", 0.02, 0.3),
    ("omegaR1", 1e-4, 0.01),
    ("omegaR2", 1e-4, 0.008),
    ("mu", 0.001, 0.05),
    ("nu", 1e-4, 0.01),
    ("deltaG", 0.001, 0.05),
    ("etaE", 0.1, 0.95),
    ("etaC", 0.1, 0.95),
    ("etaH", 0.1, 0.95),
    ("etaI", 0.1, 0.95),
    ("kel", 0.05, 0.3),
    ("k_metabolism", 0.02, 0.2),
    ("k_clearance", 0.1, 0.5),
    ("alphaA", 0.001, 0.1),
    ("deltaA", 0.05, 0.2),
    ("kappaQ", 0.001, 0.05),
    ("lambdaQ", 5e-4, 0.02),
    ("kappaS", 0.001, 0.04),
    ("deltaS", 0.02, 0.1),
    ("gamma", 1e-4, 0.01),
    ("deltaP", 0.02, 0.1),
    ("kappaM", 0.001, 0.1),
    ("deltaM", 0.001, 0.05),
    ("kappaH", 0.001, 0.1),
    ("deltaH", 0.01, 0.1),
    ("rho1", 0.6, 0.9),
    ("rho2", 0.3, 0.6),
    ("G", 0.1, 1.0),
    ("alpha_acid", 0.01, 0.5),
];

impl ParameterSet {
    /// Name/value pairs in the same order as [`BOUNDS`].
    pub fn entries(&self) -> [(&'static str, f64); 39] {
        [
            ("lambda1", self.lambda1),
            ("lambda2", self.lambda2),
            ("lambdaR1", self.lambda_r1),
            ("lambdaR2", self.lambda_r2),
            ("K", self.k),
            ("beta1", self.beta1),
            ("beta2", self.beta2),
            ("phi1", self.phi1),
            ("phi2", self.phi2),
            ("phi3", self.phi3),
            ("deltaI", self.delta_i),
            ("omegaR1", self.omega_r1),
            ("omegaR2", self.omega_r2),
            ("mu", self.mu),
            ("nu", self.nu),
            ("deltaG", self.delta_g),
            ("etaE", self.eta_e),
            ("etaC", self.eta_c),
            ("etaH", self.eta_h),
            ("etaI", self.eta_i),
            ("kel", self.kel),
            ("k_metabolism", self.k_metabolism),
            ("k_clearance", self.k_clearance),
            ("alphaA", self.alpha_a),
            ("deltaA", self.delta_a),
            ("kappaQ", self.kappa_q),
            ("lambdaQ", self.lambda_q),
            ("kappaS", self.kappa_s),
            ("deltaS", self.delta_s),
            ("gamma", self.gamma),
            ("deltaP", self.delta_p),
            ("kappaM", self.kappa_m),
            ("deltaM", self.delta_m),
            ("kappaH", self.kappa_h),
            ("deltaH", self.delta_h),
            ("rho1", self.rho1),
            ("rho2", self.rho2),
            ("G", self.g),
            ("alpha_acid", self.alpha_acid),
        ]
    }

    pub fn bounds_for(name: &str) -> Option<(f64, f64)> {
        BOUNDS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, lo, hi)| (lo, hi))
    }
}

/// Complete result of one derivation call. Value type; nothing here outlives
/// the call or is shared between calls.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub resolved: ResolvedVector,
    pub scores: CompositeScores,
    pub organs: OrganFunctions,
    pub parameters: ParameterSet,
    pub violations: Vec<ConstraintViolation>,
    /// Per-parameter reliance on the reduced panel; attached only when the
    /// panel restricts which markers may come from user input.
    pub coverage: Option<&'static [(&'static str, CoverageLabel)]>,
}

/// Run the full derivation: resolve, score, derive, enforce ordering.
/// Pure and deterministic; identical input yields bit-identical output.
pub fn derive_from_panel(user: &UserVector, sel: Panel) -> Derivation {
    let resolved = panel::resolve(user, sel);
    let scores = composite::composite_scores(&resolved);
    let organs = organ::organ_functions(&resolved);
    let mut parameters = derive_parameters(&scores, &organs, &resolved);
    let violations = enforce_growth_ordering(&mut parameters);
    let coverage = sel.selector().map(|_| core_panel_coverage());
    Derivation {
        resolved,
        scores,
        organs,
        parameters,
        violations,
        coverage,
    }
}
