use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::params::{core_panel_coverage, derive_parameters};
use crate::pipeline::Stage;

pub struct Stage5Derive;

impl Stage5Derive {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Derive {
    fn name(&self) -> &'static str {
        "stage5_derive"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let resolved = ctx.resolved.as_ref().context("resolved vector missing")?;
        let scores = ctx.scores.as_ref().context("composite scores missing")?;
        let organs = ctx.organs.as_ref().context("organ functions missing")?;

        ctx.parameters = Some(derive_parameters(scores, organs, resolved));
        if ctx.panel.selector().is_some() {
            ctx.coverage = Some(core_panel_coverage());
        }
        info!("parameters_ready");
        Ok(())
    }
}
