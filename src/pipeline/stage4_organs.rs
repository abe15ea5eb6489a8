use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::organ::organ_functions;

pub struct Stage4Organs;

impl Stage4Organs {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Organs {
    fn name(&self) -> &'static str {
        "stage4_organs"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let resolved = ctx.resolved.as_ref().context("resolved vector missing")?;
        ctx.organs = Some(organ_functions(resolved));
        info!("organ_functions_ready");
        Ok(())
    }
}
