use std::path::PathBuf;

use crate::catalog::{ResolvedVector, UserVector};
use crate::panel::Panel;
use crate::params::{ConstraintViolation, CoverageLabel, ParameterSet, Stability};
use crate::scores::{CompositeScores, OrganFunctions};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// Per-run state threaded through the pipeline stages. Built fresh for every
/// derivation; nothing is shared across runs.
#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub panel: Panel,
    pub assess_stability: bool,
    pub write_json: bool,
    pub write_tsv: bool,
    pub tool_version: String,
    pub user: Option<UserVector>,
    pub supplied: usize,
    pub imputed: usize,
    pub resolved: Option<ResolvedVector>,
    pub scores: Option<CompositeScores>,
    pub organs: Option<OrganFunctions>,
    pub parameters: Option<ParameterSet>,
    pub violations: Vec<ConstraintViolation>,
    pub coverage: Option<&'static [(&'static str, CoverageLabel)]>,
    pub stability: Option<(Stability, String)>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        panel: Panel,
        assess_stability: bool,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("oncoparam.json");
        let tsv_path = out_dir.join("oncoparam.tsv");
        Self {
            input,
            panel,
            assess_stability,
            write_json,
            write_tsv,
            tool_version: tool_version.to_string(),
            user: None,
            supplied: 0,
            imputed: 0,
            resolved: None,
            scores: None,
            organs: None,
            parameters: None,
            violations: Vec::new(),
            coverage: None,
            stability: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
        }
    }
}
