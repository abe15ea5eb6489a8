use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One stored biomarker reading with metadata. Biomarkers are kept as a
/// string-keyed map so records round-trip even if the panel grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub panel_type: String,
    pub biomarkers: BTreeMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct PatientSummary {
    pub patient_id: String,
    pub patient_name: String,
    pub date: String,
    pub notes: String,
}

/// File-backed JSON store of patient records, one file per record.
#[derive(Debug, Clone)]
pub struct PatientStore {
    dir: PathBuf,
}

/// Filesystem-safe identifier: alphanumerics, `_` and `-`, capped at 64.
pub fn sanitize_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .take(64)
        .collect()
}

impl PatientStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, patient_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_id(patient_id)))
    }

    /// Persist a reading; returns the stored record id. An empty id is
    /// derived from the name or the current timestamp.
    pub fn save(
        &self,
        biomarkers: &BTreeMap<String, f64>,
        patient_id: &str,
        patient_name: &str,
        notes: &str,
        panel_type: &str,
    ) -> Result<String> {
        let now = Utc::now();
        let patient_id = if patient_id.is_empty() && patient_name.is_empty() {
            now.format("patient_%Y%m%d_%H%M%S").to_string()
        } else if patient_id.is_empty() {
            format!("{}_{}", sanitize_id(patient_name), now.format("%Y%m%d_%H%M"))
        } else {
            sanitize_id(patient_id)
        };

        let record = PatientRecord {
            patient_id: patient_id.clone(),
            patient_name: if patient_name.is_empty() {
                patient_id.clone()
            } else {
                patient_name.to_string()
            },
            date: now.to_rfc3339(),
            notes: notes.to_string(),
            panel_type: panel_type.to_string(),
            biomarkers: biomarkers.clone(),
        };

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.record_path(&patient_id);
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &record)?;

        Ok(patient_id)
    }

    pub fn load(&self, patient_id: &str) -> Result<Option<PatientRecord>> {
        let path = self.record_path(patient_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let record = serde_json::from_str(&content)
            .with_context(|| format!("malformed patient record {}", path.display()))?;
        Ok(Some(record))
    }

    /// List saved records, newest first. Unreadable files are skipped with a
    /// warning rather than failing the listing.
    pub fn list(&self) -> Result<Vec<PatientSummary>> {
        let mut records = Vec::new();
        if !self.dir.exists() {
            return Ok(records);
        }
        for entry in std::fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read {}", self.dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let content = match std::fs::read_to_string(&path) {
                Ok(c) => c,
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unreadable record");
                    continue;
                }
            };
            let record: PatientRecord = match serde_json::from_str(&content) {
                Ok(r) => r,
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping malformed record");
                    continue;
                }
            };
            let mut notes = record.notes;
            notes.truncate(50);
            records.push(PatientSummary {
                patient_id: record.patient_id,
                patient_name: record.patient_name,
                date: record.date,
                notes,
            });
        }
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    pub fn delete(&self, patient_id: &str) -> Result<bool> {
        let path = self.record_path(patient_id);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to delete {}", path.display()))?;
        Ok(true)
    }
}

pub fn export_record(record: &PatientRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Parse a record from JSON. Requires the `biomarkers` field; anything else
/// is rejected as not a patient record.
pub fn import_record(json: &str) -> Result<PatientRecord> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("invalid JSON for patient record")?;
    if value.get("biomarkers").is_none() {
        bail!("not a patient record: missing 'biomarkers' field");
    }
    Ok(serde_json::from_value(value).context("malformed patient record")?)
}
