use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::catalog::{BiomarkerKey, Category, MARKER_COUNT};

/// Display metadata for one biomarker: unit and reference-range text for
/// rendering, never consumed by the derivation engine.
#[derive(Debug, Clone)]
pub struct MarkerInfo {
    pub key: BiomarkerKey,
    pub category: Category,
    pub unit: String,
    pub normal: String,
    pub name: String,
}

pub fn load_builtin() -> Result<Vec<MarkerInfo>> {
    let content = include_str!("../../assets/biomarkers/catalog_v1.tsv");
    parse_catalog_tsv(content, "built-in v1")
}

pub fn load_catalog_tsv(path: &Path) -> Result<Vec<MarkerInfo>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog TSV {}", path.display()))?;
    parse_catalog_tsv(&content, &path.display().to_string())
}

fn parse_catalog_tsv(content: &str, source: &str) -> Result<Vec<MarkerInfo>> {
    let mut seen = [false; MARKER_COUNT];
    let mut out = Vec::with_capacity(MARKER_COUNT);

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 5 {
            bail!("{}:{} malformed TSV (expected 5 columns)", source, line_no);
        }
        let key_str = parts[0].trim();
        let category_str = parts[1].trim();
        let unit = parts[2].trim();
        let normal = parts[3].trim();
        let name = parts[4].trim();
        if unit.is_empty() || normal.is_empty() || name.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }

        let key = BiomarkerKey::parse(key_str)
            .ok_or_else(|| anyhow::anyhow!("{}:{} unknown biomarker '{}'", source, line_no, key_str))?;
        let category = Category::parse(category_str)
            .ok_or_else(|| anyhow::anyhow!("{}:{} unknown category '{}'", source, line_no, category_str))?;
        if category != key.category() {
            bail!(
                "{}:{} category mismatch for '{}' (expected {})",
                source,
                line_no,
                key_str,
                key.category().as_str()
            );
        }
        if seen[key.index()] {
            bail!("{}:{} duplicate biomarker '{}'", source, line_no, key_str);
        }
        seen[key.index()] = true;

        out.push(MarkerInfo {
            key,
            category,
            unit: unit.to_string(),
            normal: normal.to_string(),
            name: name.to_string(),
        });
    }

    if out.len() != MARKER_COUNT {
        bail!(
            "{} incomplete catalog ({} of {} biomarkers)",
            source,
            out.len(),
            MARKER_COUNT
        );
    }

    Ok(out)
}
