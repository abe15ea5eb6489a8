use crate::params::ParameterSet;

/// Coarse qualitative stability category. A heuristic summary of growth,
/// immune, and carrying-capacity relationships, not a dynamical-systems
/// stability proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Marginal,
    Unstable,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "STABLE",
            Stability::Marginal => "MARGINAL",
            Stability::Unstable => "UNSTABLE",
        }
    }
}

/// Classify a parameter set by three boolean heuristics: sensitive growth
/// outpaces resistant growth, immune killing is effective against growth,
/// and carrying capacity clears a minimal threshold. Two of three passing
/// (score >= 0.67) reads as stable, one of three (>= 0.33) as marginal.
pub fn assess_stability(params: &ParameterSet) -> (Stability, String) {
    let growth_ok = params.lambda1 > params.lambda2;
    let immune_ok = params.beta1 * 1000.0 > params.lambda1;
    let capacity_ok = params.k > 1000.0;

    let passed = [growth_ok, immune_ok, capacity_ok]
        .iter()
        .filter(|&&ok| ok)
        .count();
    let score = passed as f64 / 3.0;

    if score >= 0.67 {
        (
            Stability::Stable,
            "mathematical stability confirmed - reliable predictions expected".to_string(),
        )
    } else if score >= 0.33 {
        (
            Stability::Marginal,
            "marginal stability - monitor predictions carefully".to_string(),
        )
    } else {
        (
            Stability::Unstable,
            "mathematical instability - recommend frequent monitoring".to_string(),
        )
    }
}
