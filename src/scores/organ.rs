use crate::catalog::BiomarkerKey::*;
use crate::catalog::ResolvedVector;
use crate::scores::OrganFunctions;

/// Derive liver and kidney function factors from enzyme/clearance markers.
///
/// The `max(x, floor)` guards inside each reciprocal are the sole
/// division-by-zero defense for organ markers; every downstream formula that
/// divides by `f_clearance` relies on them.
pub fn organ_functions(v: &ResolvedVector) -> OrganFunctions {
    let alt_factor = (40.0 / v.get(Alt).max(5.0)).clamp(0.2, 1.2);
    let ast_factor = (45.0 / v.get(Ast).max(8.0)).clamp(0.2, 1.2);
    let bilirubin_factor = (1.2 / v.get(Bilirubin).max(0.1)).clamp(0.5, 1.5);
    let f_liver = (alt_factor + ast_factor + bilirubin_factor) / 3.0;

    let creatinine_factor = (1.2 / v.get(Creatinine).max(0.5)).clamp(0.3, 1.3);
    let bun_factor = (20.0 / v.get(Bun).max(5.0)).clamp(0.3, 1.3);
    let f_kidney = (creatinine_factor + bun_factor) / 2.0;

    OrganFunctions {
        f_liver,
        f_kidney,
        f_clearance: f_liver * f_kidney,
    }
}
