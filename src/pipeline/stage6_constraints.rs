use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::params::enforce_growth_ordering;
use crate::pipeline::Stage;

pub struct Stage6Constraints;

impl Stage6Constraints {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Constraints {
    fn name(&self) -> &'static str {
        "stage6_constraints"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let params = ctx.parameters.as_mut().context("parameters missing")?;
        let violations = enforce_growth_ordering(params);
        for violation in &violations {
            warn!(rule = %violation.rule, action = %violation.action, "constraint repaired");
        }
        ctx.violations = violations;
        info!(violations = ctx.violations.len(), "ordering_enforced");
        Ok(())
    }
}
