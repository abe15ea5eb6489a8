use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "oncoparam", version, about = "Biomarker-to-parameter derivation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Derive(DeriveArgs),
    Catalog(CatalogArgs),
    Validate(ValidateArgs),
    Patient(PatientArgs),
    Compare(CompareArgs),
}

#[derive(Debug, Args)]
pub struct DeriveArgs {
    #[arg(long, help = "Biomarker JSON file (key -> value)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Skip the stability heuristic")]
    pub no_stability: bool,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long, value_enum, help = "Restrict listing to one category")]
    pub category: Option<CategoryArg>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Biomarker JSON file (key -> value)")]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatientArgs {
    #[command(subcommand)]
    pub command: PatientCommand,
}

#[derive(Debug, Subcommand)]
pub enum PatientCommand {
    Save(PatientSaveArgs),
    Load(PatientLoadArgs),
    List(PatientListArgs),
    Delete(PatientDeleteArgs),
}

#[derive(Debug, Args)]
pub struct PatientSaveArgs {
    #[arg(long, help = "Biomarker JSON file (key -> value)")]
    pub input: PathBuf,

    #[arg(long, default_value = "")]
    pub id: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,

    #[arg(long, default_value = "patient_data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatientLoadArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long, default_value = "patient_data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatientListArgs {
    #[arg(long, default_value = "patient_data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatientDeleteArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long, default_value = "patient_data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[arg(long, help = "Patient id of the current reading")]
    pub current: String,

    #[arg(long, help = "Patient id of the previous reading")]
    pub previous: String,

    #[arg(long, default_value = "patient_data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    Full,
    Optimized,
    Core,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Tumor,
    Immune,
    Resistance,
    Metabolic,
    Organ,
}
