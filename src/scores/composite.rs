use crate::catalog::BiomarkerKey::*;
use crate::catalog::ResolvedVector;
use crate::scores::CompositeScores;

/// Derive the 13 composite indices. Denominators and weights are calibration
/// constants; changing any of them changes every downstream parameter.
pub fn composite_scores(v: &ResolvedVector) -> CompositeScores {
    // s_tumor = (1/5)(CA15-3/31.3 + CA27-29/38 + CEA/3.0 + CTC/5 + ctDNA/1.0)
    let s_tumor = (v.get(Ca153) / 31.3
        + v.get(Ca2729) / 38.0
        + v.get(Cea) / 3.0
        + v.get(Ctc) / 5.0
        + v.get(Ctdna) / 1.0)
        / 5.0;

    // s_prolif = (1/4)(TK1/2.0 + Glucose/95 + Lactate/2.2 + Survivin/0.5)
    let s_prolif = (v.get(Tk1) / 2.0
        + v.get(Glucose) / 95.0
        + v.get(Lactate) / 2.2
        + v.get(Survivin) / 0.5)
        / 4.0;

    // s_immune = 0.4 CD8/700 + 0.3 CD4/1050 + 0.2 NK/345 + 0.1 IFN-g/2.0
    let s_immune = 0.4 * (v.get(Cd8) / 700.0)
        + 0.3 * (v.get(Cd4) / 1050.0)
        + 0.2 * (v.get(Nk) / 345.0)
        + 0.1 * (v.get(IfnGamma) / 2.0);

    // s_suppress = (1/3)(IL-10/5.0 + TGF-b/2.5 + PD-L1/1.0)
    let s_suppress =
        (v.get(Il10) / 5.0 + v.get(TgfBeta) / 2.5 + v.get(Pdl1Ctc) / 1.0) / 3.0;

    // Genetic stability index, hard-clamped to [0.1, 1.0].
    let g = (1.0
        - 0.3 * (v.get(Ctdna) / 1.0)
        - 0.2 * (v.get(Pik3ca) / 10.0)
        - 0.2 * (v.get(Tp53) / 10.0))
        .clamp(0.1, 1.0);

    // s_genetic = (1/3)(ctDNA/1.0 + PIK3CA/10 + TP53/10)
    let s_genetic =
        (v.get(Ctdna) / 1.0 + v.get(Pik3ca) / 10.0 + v.get(Tp53) / 10.0) / 3.0;

    // s_metabolic = (1/3)(Glucose/95 + Lactate/2.2 + LDH/250)
    let s_metabolic =
        (v.get(Glucose) / 95.0 + v.get(Lactate) / 2.2 + v.get(Ldh) / 250.0) / 3.0;

    // s_stress is defined as an alias of s_metabolic, not an independent index.
    let s_stress = s_metabolic;

    // s_activation = (1/2)(IFN-g/5 + CD4/1200)
    let s_activation = (v.get(IfnGamma) / 5.0 + v.get(Cd4) / 1200.0) / 2.0;

    // Resistance factors, hard-clamped to [0.1, 2.0].
    let f_resist1 = ((v.get(Esr1Mutations) / 8.0
        + v.get(Pgr) / 20.0
        + v.get(Pik3ca) / 5.0
        + v.get(Survivin) / 6.0)
        / 4.0)
        .clamp(0.1, 2.0);

    let f_resist2 = ((v.get(Her2Mutations) / 10.0
        + v.get(Mdr1) / 150.0
        + v.get(Survivin) / 6.0
        + v.get(Hsp) / 10.0)
        / 4.0)
        .clamp(0.1, 2.0);

    // s_quiescence = (1/2)(max(0, (100-Glucose)/100) + min(1, Lactate/4))
    let nutrient_stress = ((100.0 - v.get(Glucose)) / 100.0).max(0.0);
    let metabolic_stress = (v.get(Lactate) / 4.0).min(1.0);
    let s_quiescence = (nutrient_stress + metabolic_stress) / 2.0;

    // f_metastatic = (1/3)(CTC/20 + f_EMT + Exosomes/100),
    // f_EMT = max(0, (5 - miR-200)/5)
    let f_emt = ((5.0 - v.get(Mir200)) / 5.0).max(0.0);
    let f_metastatic = (v.get(Ctc) / 20.0 + f_emt + v.get(Exosomes) / 100.0) / 3.0;

    CompositeScores {
        s_tumor,
        s_prolif,
        s_immune,
        s_suppress,
        g,
        s_genetic,
        s_metabolic,
        s_stress,
        s_activation,
        f_resist1,
        f_resist2,
        s_quiescence,
        f_metastatic,
    }
}
