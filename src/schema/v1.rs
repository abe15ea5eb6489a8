use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelMeta {
    pub panel: String,
    pub r_squared: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub supplied: u64,
    pub imputed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresV1 {
    pub s_tumor: f64,
    pub s_prolif: f64,
    pub s_immune: f64,
    pub s_suppress: f64,
    #[serde(rename = "G")]
    pub g: f64,
    pub s_genetic: f64,
    pub s_metabolic: f64,
    pub s_stress: f64,
    pub s_activation: f64,
    pub f_resist1: f64,
    pub f_resist2: f64,
    pub s_quiescence: f64,
    pub f_metastatic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgansV1 {
    pub f_liver: f64,
    pub f_kidney: f64,
    pub f_clearance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersV1 {
    pub lambda1: f64,
    pub lambda2: f64,
    #[serde(rename = "lambdaR1")]
    pub lambda_r1: f64,
    #[serde(rename = "lambdaR2")]
    pub lambda_r2: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub phi1: f64,
    pub phi2: f64,
    pub phi3: f64,
    #[serde(rename = "deltaI")]
    pub delta_i: f64,
    #[serde(rename = "omegaR1")]
    pub omega_r1: f64,
    #[serde(rename = "omegaR2")]
    pub omega_r2: f64,
    pub mu: f64,
    pub nu: f64,
    #[serde(rename = "deltaG")]
    pub delta_g: f64,
    #[serde(rename = "etaE")]
    pub eta_e: f64,
    #[serde(rename = "etaC")]
    pub eta_c: f64,
    #[serde(rename = "etaH")]
    pub eta_h: f64,
    #[serde(rename = "etaI")]
    pub eta_i: f64,
    pub kel: f64,
    pub k_metabolism: f64,
    pub k_clearance: f64,
    #[serde(rename = "alphaA")]
    pub alpha_a: f64,
    #[serde(rename = "deltaA")]
    pub delta_a: f64,
    #[serde(rename = "kappaQ")]
    pub kappa_q: f64,
    #[serde(rename = "lambdaQ")]
    pub lambda_q: f64,
    #[serde(rename = "kappaS")]
    pub kappa_s: f64,
    #[serde(rename = "deltaS")]
    pub delta_s: f64,
    pub gamma: f64,
    #[serde(rename = "deltaP")]
    pub delta_p: f64,
    #[serde(rename = "kappaM")]
    pub kappa_m: f64,
    #[serde(rename = "deltaM")]
    pub delta_m: f64,
    #[serde(rename = "kappaH")]
    pub kappa_h: f64,
    #[serde(rename = "deltaH")]
    pub delta_h: f64,
    pub rho1: f64,
    pub rho2: f64,
    #[serde(rename = "G")]
    pub g: f64,
    pub alpha_acid: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationV1 {
    pub rule: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityV1 {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageV1 {
    pub parameter: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub panel: PanelMeta,
    pub input: InputMeta,
    pub scores: ScoresV1,
    pub organs: OrgansV1,
    pub parameters: ParametersV1,
    pub constraint_violations: Vec<ViolationV1>,
    pub stability: Option<StabilityV1>,
    pub coverage: Option<Vec<CoverageV1>>,
    pub warnings: Vec<String>,
}
