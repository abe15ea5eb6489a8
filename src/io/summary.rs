use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let scores = ctx.scores.as_ref().context("composite scores missing")?;
    let params = ctx.parameters.as_ref().context("parameters missing")?;

    let mut out = String::new();
    out.push_str(&format!("oncoparam v{}\n", ctx.tool_version));
    out.push_str(&format!(
        "Panel: {} (r2={}), {} supplied, {} imputed\n",
        ctx.panel.as_str(),
        ctx.panel.r_squared(),
        ctx.supplied,
        ctx.imputed
    ));
    out.push_str(&format!(
        "Scores: s_tumor={:.3} s_prolif={:.3} s_immune={:.3} G={:.3}\n",
        scores.s_tumor, scores.s_prolif, scores.s_immune, scores.g
    ));
    out.push_str(&format!(
        "Growth: lambda1={:.6} lambda2={:.6} lambdaR1={:.6} lambdaR2={:.6} K={:.0}\n",
        params.lambda1, params.lambda2, params.lambda_r1, params.lambda_r2, params.k
    ));
    out.push_str(&format!(
        "Treatment: etaE={:.3} etaC={:.3} etaH={:.3} etaI={:.3}\n",
        params.eta_e, params.eta_c, params.eta_h, params.eta_i
    ));

    if let Some((status, message)) = &ctx.stability {
        out.push_str(&format!("Stability: {} ({})\n", status.as_str(), message));
    }

    if ctx.violations.is_empty() {
        out.push_str("Violations: none\n");
    } else {
        let rules: Vec<&str> = ctx.violations.iter().map(|v| v.rule.as_str()).collect();
        out.push_str(&format!("Violations: {}\n", rules.join("; ")));
    }

    Ok(out)
}
