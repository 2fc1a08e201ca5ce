//! Sidecar metadata describing generated databases
//!
//! Alongside the SQLite outputs, the loader maintains a `metadata.json`
//! file for downstream catalog tooling: licensing boilerplate for the
//! feed as a whole, and one entry per generated database synthesized from
//! the extract's PIF header.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::models::LoadReport;

const SOURCE_URL: &str = "https://wiki.openraildata.com/index.php?title=BPLAN_Geography_Data";

/// Top-level metadata file: feed boilerplate plus per-database entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFile {
    pub title: String,
    pub description: String,
    pub license: String,
    pub license_url: String,
    pub source: String,
    #[serde(default)]
    pub databases: BTreeMap<String, DatabaseEntry>,
}

/// Descriptive entry for one generated database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseEntry {
    pub title: String,
    pub description: String,
    pub source_url: String,
    pub tables: BTreeMap<String, TableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub description: String,
}

impl MetadataFile {
    /// Feed-level template used when no metadata file exists yet
    pub fn template() -> Self {
        Self {
            title: "Network Rail Open Data Reference Databases".to_string(),
            description: "Reference data used by Network Rail for planning purposes".to_string(),
            license: "Network Rail Infrastructure Ltd Data Feeds Licence".to_string(),
            license_url: "https://www.networkrail.co.uk/who-we-are/transparency-and-ethics/\
                          transparency/open-data-feeds/network-rail-infrastructure-limited-\
                          data-feeds-licence/"
                .to_string(),
            source: "Network Rail Infrastructure Ltd".to_string(),
            databases: BTreeMap::new(),
        }
    }

    /// Load an existing metadata file, falling back to the template when
    /// the file is absent or unreadable
    pub fn load_or_template(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::template()
            }),
            Err(_) => Self::template(),
        }
    }

    /// Write the metadata file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl DatabaseEntry {
    /// Synthesize the entry for one loaded database from its run report
    pub fn from_report(report: &LoadReport) -> Self {
        let metadata = &report.metadata;

        let title = match metadata.start_date {
            Some(start) => format!("BPLAN {}", start.format("%B %Y")),
            None => "BPLAN".to_string(),
        };

        let description = format!(
            "BPLAN database valid for the timetable period: {} to {}. \
             Database published: {}, by: {}, source system: {}.",
            format_day(metadata.start_date),
            format_day(metadata.end_date),
            format_day(metadata.creation_date),
            metadata.toc,
            metadata.source_system,
        );

        let tables = [
            ("REF", "Reference Codes"),
            ("LOC", "Locations"),
            ("PLT", "Platforms and Sidings"),
            ("NWK", "Network Links"),
            ("TLD", "Timing Loads"),
            ("TLK", "Timing Links"),
        ]
        .into_iter()
        .map(|(table, description)| {
            (
                table.to_string(),
                TableEntry {
                    description: description.to_string(),
                },
            )
        })
        .collect();

        Self {
            title,
            description,
            source_url: SOURCE_URL.to_string(),
            tables,
        }
    }
}

fn format_day(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(dt) => dt.format("%-d %B %Y").to_string(),
        None => "unknown".to_string(),
    }
}
