use crate::params::ParameterSet;

/// Record of one broken growth-ordering rule and the repair applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    pub rule: String,
    pub action: String,
}

/// Repair the required strict growth-rate ordering lambda1 > lambda2 >
/// lambdaR1 > lambdaR2.
///
/// Pairs are checked left to right; a violating second value is rewritten to
/// 0.99x the first, so repairs cascade. Idempotent: re-running on repaired
/// output produces no new violations.
pub fn enforce_growth_ordering(params: &mut ParameterSet) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    if params.lambda1 <= params.lambda2 {
        params.lambda2 = params.lambda1 * 0.99;
        violations.push(ConstraintViolation {
            rule: "lambda1 must be > lambda2".to_string(),
            action: format!("lambda2 set to {:.6}", params.lambda2),
        });
    }
    if params.lambda2 <= params.lambda_r1 {
        params.lambda_r1 = params.lambda2 * 0.99;
        violations.push(ConstraintViolation {
            rule: "lambda2 must be > lambdaR1".to_string(),
            action: format!("lambdaR1 set to {:.6}", params.lambda_r1),
        });
    }
    if params.lambda_r1 <= params.lambda_r2 {
        params.lambda_r2 = params.lambda_r1 * 0.99;
        violations.push(ConstraintViolation {
            rule: "lambdaR1 must be > lambdaR2".to_string(),
            action: format!("lambdaR2 set to {:.6}", params.lambda_r2),
        });
    }

    violations
}
