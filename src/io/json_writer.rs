use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    CoverageV1, InputMeta, OrgansV1, PanelMeta, ParamReportV1, ParametersV1, ScoresV1,
    StabilityV1, ViolationV1,
};

pub fn build_report(ctx: &Ctx) -> Result<ParamReportV1> {
    let scores = ctx.scores.as_ref().context("composite scores missing")?;
    let organs = ctx.organs.as_ref().context("organ functions missing")?;
    let p = ctx.parameters.as_ref().context("parameters missing")?;

    let scores_v1 = ScoresV1 {
        s_tumor: scores.s_tumor,
        s_prolif: scores.s_prolif,
        s_immune: scores.s_immune,
        s_suppress: scores.s_suppress,
        g: scores.g,
        s_genetic: scores.s_genetic,
        s_metabolic: scores.s_metabolic,
        s_stress: scores.s_stress,
        s_activation: scores.s_activation,
        f_resist1: scores.f_resist1,
        f_resist2: scores.f_resist2,
        s_quiescence: scores.s_quiescence,
        f_metastatic: scores.f_metastatic,
    };

    let organs_v1 = OrgansV1 {
        f_liver: organs.f_liver,
        f_kidney: organs.f_kidney,
        f_clearance: organs.f_clearance,
    };

    let parameters_v1 = ParametersV1 {
        lambda1: p.lambda1,
        lambda2: p.lambda2,
        lambda_r1: p.lambda_r1,
        lambda_r2: p.lambda_r2,
        k: p.k,
        beta1: p.beta1,
        beta2: p.beta2,
        phi1: p.phi1,
        phi2: p.phi2,
        phi3: p.phi3,
        delta_i: p.delta_i,
        omega_r1: p.omega_r1,
        omega_r2: p.omega_r2,
        mu: p.mu,
        nu: p.nu,
        delta_g: p.delta_g,
        eta_e: p.eta_e,
        eta_c: p.eta_c,
        eta_h: p.eta_h,
        eta_i: p.eta_i,
        kel: p.kel,
        k_metabolism: p.k_metabolism,
        k_clearance: p.k_clearance,
        alpha_a: p.alpha_a,
        delta_a: p.delta_a,
        kappa_q: p.kappa_q,
        lambda_q: p.lambda_q,
        kappa_s: p.kappa_s,
        delta_s: p.delta_s,
        gamma: p.gamma,
        delta_p: p.delta_p,
        kappa_m: p.kappa_m,
        delta_m: p.delta_m,
        kappa_h: p.kappa_h,
        delta_h: p.delta_h,
        rho1: p.rho1,
        rho2: p.rho2,
        g: p.g,
        alpha_acid: p.alpha_acid,
    };

    let constraint_violations = ctx
        .violations
        .iter()
        .map(|v| ViolationV1 {
            rule: v.rule.clone(),
            action: v.action.clone(),
        })
        .collect();

    let stability = ctx.stability.as_ref().map(|(status, message)| StabilityV1 {
        status: status.as_str().to_string(),
        message: message.clone(),
    });

    let coverage = ctx.coverage.map(|labels| {
        labels
            .iter()
            .map(|&(parameter, label)| CoverageV1 {
                parameter: parameter.to_string(),
                label: label.as_str().to_string(),
            })
            .collect()
    });

    Ok(ParamReportV1 {
        tool: "oncoparam".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        panel: PanelMeta {
            panel: ctx.panel.as_str().to_string(),
            r_squared: ctx.panel.r_squared(),
        },
        input: InputMeta {
            supplied: ctx.supplied as u64,
            imputed: ctx.imputed as u64,
        },
        scores: scores_v1,
        organs: organs_v1,
        parameters: parameters_v1,
        constraint_violations,
        stability,
        coverage,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
