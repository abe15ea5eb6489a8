use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::params::assess_stability;
use crate::pipeline::Stage;

pub struct Stage7Stability;

impl Stage7Stability {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Stability {
    fn name(&self) -> &'static str {
        "stage7_stability"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.assess_stability {
            return Ok(());
        }
        let params = ctx.parameters.as_ref().context("parameters missing")?;
        let (status, message) = assess_stability(params);
        info!(status = status.as_str(), "stability_assessed");
        ctx.stability = Some((status, message));
        Ok(())
    }
}
