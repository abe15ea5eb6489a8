use crate::catalog::{BiomarkerKey, UserVector};

/// Result of biomarker-level quality control. Warnings flag values outside
/// typical reference ranges; critical alerts flag values that demand
/// immediate clinical correlation. Neither blocks derivation.
#[derive(Debug, Clone, Default)]
pub struct QcReport {
    pub warnings: Vec<String>,
    pub critical_alerts: Vec<String>,
}

/// Check supplied readings against extreme/abnormal thresholds. Only
/// positive, user-supplied values are examined; imputed markers are by
/// construction mid-normal.
pub fn validate_readings(user: &UserVector) -> QcReport {
    let mut report = QcReport::default();

    for (key, value) in user.iter() {
        if value <= 0.0 {
            continue;
        }
        match key {
            BiomarkerKey::Ca153 => {
                if value > 100.0 {
                    report.critical_alerts.push(format!(
                        "CA 15-3 extremely elevated ({} U/mL) - immediate clinical correlation needed",
                        value
                    ));
                }
                if value > 25.0 {
                    report
                        .warnings
                        .push(format!("CA 15-3 elevated ({} U/mL, normal <25)", value));
                }
            }
            BiomarkerKey::Cd8 => {
                if value < 200.0 {
                    report.critical_alerts.push(format!(
                        "CD8+ severely low ({} cells/uL) - immunocompromised state",
                        value
                    ));
                }
            }
            BiomarkerKey::Creatinine => {
                if value > 3.0 {
                    report.critical_alerts.push(format!(
                        "Creatinine severely elevated ({} mg/dL) - kidney dysfunction",
                        value
                    ));
                }
            }
            BiomarkerKey::Glucose => {
                if !(70.0..=180.0).contains(&value) {
                    report
                        .warnings
                        .push(format!("Glucose abnormal ({} mg/dL, normal 70-140)", value));
                }
            }
            _ => {}
        }
    }

    report
}
