// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Site export IO.
//!
//! A site export is the JSON document CardDesk edits: the section index of a
//! site plus the card block under edit. Reading and writing both go through
//! serde so the stored shape stays the single source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::card::Card;
use crate::models::section::SectionRecord;

/// The document CardDesk opens and saves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteExport {
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
    pub card: Card,
}

/// Built-in export the app opens on launch, so the form is usable before any
/// file is picked. Covers every rule-relevant section type.
const SAMPLE_EXPORT: &str = r#"{
  "sections": [
    { "id": 1, "name": "Why Choose Us", "section_type": "features" },
    { "id": 2, "name": "Our Team", "section_type": "team" },
    { "id": 3, "name": "Plans & Pricing", "section_type": "pricing" },
    { "id": 4, "name": "Common Questions", "section_type": "faq" },
    { "id": 5, "name": "Get In Touch", "section_type": "contact" }
  ],
  "card": {
    "section": { "id": 2, "name": "Our Team", "section_type": "team" },
    "title": "Amara Osei",
    "text": "Leads the engineering team and keeps our release train on time.",
    "icon": "rocket-launch",
    "cta_label": "Engineering Lead",
    "cta_url": "https://example.com/team/amara-osei",
    "image": "uploads/team/amara.jpg",
    "image_alt": "Portrait of Amara Osei",
    "order": 1
  }
}"#;

/// The launch document. A parse failure is logged and degrades to an empty
/// export instead of blocking startup.
pub fn sample_export() -> SiteExport {
    parse_export(SAMPLE_EXPORT).unwrap_or_else(|err| {
        log::warn!("built-in sample export failed to parse: {err:#}");
        SiteExport::default()
    })
}

/// Parse a site export document from a JSON string.
pub fn parse_export(json: &str) -> Result<SiteExport> {
    serde_json::from_str(json).context("Failed to parse site export JSON")
}

/// Load a site export from disk.
pub fn load_export(path: &Path) -> Result<SiteExport> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read site export {:?}", path))?;
    parse_export(&raw)
}

/// Write a site export to disk as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_export(path: &Path, export: &SiteExport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(export).context("Failed to serialize site export")?;
    fs::write(path, json).with_context(|| format!("Failed to write site export {:?}", path))?;
    Ok(())
}

/// Suggest an export filename from the card title, e.g. `"Amara Osei"` →
/// `"amara-osei.json"`. Falls back to `card-block.json` for empty titles.
pub fn suggested_export_name(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        "card-block.json".to_string()
    } else {
        format!("{slug}.json")
    }
}

/// Transliterate to ASCII, keep alphanumerics, and collapse everything else
/// into single hyphens.
fn slugify(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());
    let mut pending_dash = false;

    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Force a specific extension onto a path when it is missing or different.
/// An existing matching extension is kept, case-insensitively.
pub fn ensure_extension(path: PathBuf, extension: &str) -> PathBuf {
    let keep = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

    if keep {
        path
    } else {
        let mut path = path;
        path.set_extension(extension);
        path
    }
}
