use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::input::read_user_vector;
use crate::pipeline::Stage;
use crate::qc;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let user = read_user_vector(&ctx.input)?;
        ctx.supplied = user.supplied_count();

        let report = qc::validate_readings(&user);
        for alert in report.critical_alerts {
            ctx.warnings.push(format!("CRITICAL: {}", alert));
        }
        ctx.warnings.extend(report.warnings);

        ctx.user = Some(user);
        info!(supplied = ctx.supplied, "user_vector_ready");
        Ok(())
    }
}
