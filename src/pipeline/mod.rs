use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_resolve;
pub mod stage3_scores;
pub mod stage4_organs;
pub mod stage5_derive;
pub mod stage6_constraints;
pub mod stage7_stability;
pub mod stage8_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

/// Standard derivation pipeline, stages in dependency order.
pub fn derivation_stages() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(stage0_scaffold::Stage0Scaffold::new()),
        Box::new(stage1_input::Stage1Input::new()),
        Box::new(stage2_resolve::Stage2Resolve::new()),
        Box::new(stage3_scores::Stage3Scores::new()),
        Box::new(stage4_organs::Stage4Organs::new()),
        Box::new(stage5_derive::Stage5Derive::new()),
        Box::new(stage6_constraints::Stage6Constraints::new()),
        Box::new(stage7_stability::Stage7Stability::new()),
        Box::new(stage8_output::Stage8Output::new()),
    ]
}
