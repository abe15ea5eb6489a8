use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::composite::composite_scores;

pub struct Stage3Scores;

impl Stage3Scores {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Scores {
    fn name(&self) -> &'static str {
        "stage3_scores"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let resolved = ctx.resolved.as_ref().context("resolved vector missing")?;
        ctx.scores = Some(composite_scores(resolved));
        info!("composite_scores_ready");
        Ok(())
    }
}
