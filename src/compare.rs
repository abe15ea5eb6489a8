use std::collections::BTreeMap;

use crate::catalog::BiomarkerKey;

/// Direction of change that reads as clinical improvement for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decrease is favorable (tumor markers, resistance markers, lactate).
    LowerBetter,
    /// Increase is favorable (immune counts, albumin).
    HigherBetter,
    /// Optimal near the reference value (glucose 95, arterial pH 7.4).
    NearNormal,
}

pub fn direction(key: BiomarkerKey) -> Direction {
    use BiomarkerKey::*;
    match key {
        Ca153 | Ca2729 | Cea | Tk1 | Ctdna | Ctc | Exosomes | Il10 | TgfBeta | Pdl1Ctc
        | Esr1Mutations | Pgr | Brca | Pik3ca | Tp53 | Her2Mutations | Mdr1 | Mrp1 | Survivin
        | Hsp | Mir200 | Vegf | Ki67 | Lactate | Ldh | BetaHydroxybutyrate | Creatinine | Bun
        | Alt | Ast | Bilirubin => Direction::LowerBetter,
        Cd8 | Cd4 | Nk | IfnGamma | HlaDr | Lymphocytes | Esr1Protein | Albumin | VitaminD
        | Folate => Direction::HigherBetter,
        Glucose | BloodPh | TnfAlpha | Ang2 | Her2Circ | Cyp2d6 => Direction::NearNormal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
    Changed,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improved => "improved",
            Trend::Worsened => "worsened",
            Trend::Unchanged => "unchanged",
            Trend::Changed => "changed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub key: BiomarkerKey,
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    pub pct_change: f64,
    pub trend: Trend,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub improved: usize,
    pub worsened: usize,
    pub unchanged: usize,
    pub changed: usize,
}

const UNCHANGED_EPS: f64 = 1e-6;
const GLUCOSE_TARGET: f64 = 95.0;
const PH_TARGET: f64 = 7.4;

/// Compare two biomarker readings marker by marker. Missing entries read as
/// zero, matching how stored records omit unmeasured markers.
pub fn compare_readings(
    current: &BTreeMap<String, f64>,
    previous: &BTreeMap<String, f64>,
    keys: Option<&[BiomarkerKey]>,
) -> Vec<ComparisonRow> {
    let all = BiomarkerKey::ALL;
    let keys = keys.unwrap_or(&all);
    keys.iter()
        .map(|&key| {
            let cur = current.get(key.as_str()).copied().unwrap_or(0.0);
            let prev = previous.get(key.as_str()).copied().unwrap_or(0.0);
            compare_one(key, cur, prev)
        })
        .collect()
}

fn compare_one(key: BiomarkerKey, cur: f64, prev: f64) -> ComparisonRow {
    let delta = cur - prev;
    let pct_change = if prev != 0.0 {
        100.0 * delta / prev
    } else if cur != 0.0 {
        100.0
    } else {
        0.0
    };

    let (trend, interpretation) = if delta.abs() < UNCHANGED_EPS {
        (Trend::Unchanged, "No significant change".to_string())
    } else {
        match direction(key) {
            Direction::LowerBetter => {
                if delta < 0.0 {
                    (Trend::Improved, "Decrease (favorable)".to_string())
                } else {
                    (Trend::Worsened, "Increase (unfavorable)".to_string())
                }
            }
            Direction::HigherBetter => {
                if delta > 0.0 {
                    (Trend::Improved, "Increase (favorable)".to_string())
                } else {
                    (Trend::Worsened, "Decrease (unfavorable)".to_string())
                }
            }
            Direction::NearNormal => match key {
                BiomarkerKey::Glucose => {
                    if (cur - GLUCOSE_TARGET).abs() < (prev - GLUCOSE_TARGET).abs() {
                        (Trend::Improved, "Closer to target (95 mg/dL)".to_string())
                    } else {
                        (Trend::Worsened, "Further from target".to_string())
                    }
                }
                BiomarkerKey::BloodPh => {
                    if (cur - PH_TARGET).abs() < (prev - PH_TARGET).abs() {
                        (Trend::Improved, "Closer to normal (7.35-7.45)".to_string())
                    } else {
                        (Trend::Worsened, "Further from normal".to_string())
                    }
                }
                _ => (Trend::Changed, format!("delta = {:+.2}", delta)),
            },
        }
    };

    ComparisonRow {
        key,
        current: cur,
        previous: prev,
        delta,
        pct_change,
        trend,
        interpretation,
    }
}

pub fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
    let mut summary = ComparisonSummary::default();
    for row in rows {
        match row.trend {
            Trend::Improved => summary.improved += 1,
            Trend::Worsened => summary.worsened += 1,
            Trend::Unchanged => summary.unchanged += 1,
            Trend::Changed => summary.changed += 1,
        }
    }
    summary
}
