/// How strongly a parameter's formula inputs come from the Core 15-marker
/// panel versus imputed reference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageLabel {
    /// Main formula inputs come from Core markers.
    CoreDriven,
    /// Some inputs from Core, some imputed.
    PartlyCore,
    /// All formula inputs are imputed (organ markers, VEGF, metastatic axis).
    ImputedOnly,
}

impl CoverageLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageLabel::CoreDriven => "core_driven",
            CoverageLabel::PartlyCore => "partly_core",
            CoverageLabel::ImputedOnly => "imputed_only",
        }
    }
}

use CoverageLabel::*;

/// Static classification of every parameter under the Core panel, attached
/// to derivation output whenever a restricted panel was used.
pub fn core_panel_coverage() -> &'static [(&'static str, CoverageLabel)] {
    &[
        ("lambda1", CoreDriven),
        ("lambda2", PartlyCore),
        ("lambdaR1", PartlyCore),
        ("lambdaR2", PartlyCore),
        ("K", PartlyCore),
        ("beta1", CoreDriven),
        ("beta2", PartlyCore),
        ("phi1", CoreDriven),
        ("phi2", PartlyCore),
        ("phi3", CoreDriven),
        ("deltaI", CoreDriven),
        ("omegaR1", PartlyCore),
        ("omegaR2", PartlyCore),
        ("mu", PartlyCore),
        ("nu", PartlyCore),
        ("deltaG", PartlyCore),
        ("etaE", PartlyCore),
        ("etaC", PartlyCore),
        ("etaH", PartlyCore),
        ("etaI", CoreDriven),
        ("kel", ImputedOnly),
        ("k_metabolism", ImputedOnly),
        ("k_clearance", ImputedOnly),
        ("alphaA", ImputedOnly),
        ("deltaA", ImputedOnly),
        ("kappaQ", CoreDriven),
        ("lambdaQ", CoreDriven),
        ("kappaS", CoreDriven),
        ("deltaS", CoreDriven),
        ("gamma", ImputedOnly),
        ("deltaP", CoreDriven),
        ("kappaM", PartlyCore),
        ("deltaM", PartlyCore),
        ("kappaH", PartlyCore),
        ("deltaH", ImputedOnly),
        ("rho1", CoreDriven),
        ("rho2", PartlyCore),
        ("G", PartlyCore),
    ]
}

pub fn coverage_for(parameter: &str) -> Option<CoverageLabel> {
    core_panel_coverage()
        .iter()
        .find(|(name, _)| *name == parameter)
        .map(|&(_, label)| label)
}
