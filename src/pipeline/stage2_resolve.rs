use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::panel;
use crate::pipeline::Stage;

pub struct Stage2Resolve;

impl Stage2Resolve {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Resolve {
    fn name(&self) -> &'static str {
        "stage2_resolve"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let user = ctx.user.as_ref().context("user vector missing")?;
        let resolved = panel::resolve(user, ctx.panel);
        ctx.imputed = panel::imputed_count(user, ctx.panel);
        ctx.resolved = Some(resolved);
        info!(
            panel = ctx.panel.as_str(),
            imputed = ctx.imputed,
            "vector_resolved"
        );
        Ok(())
    }
}
