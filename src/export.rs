//! Launch export artifacts
//!
//! Serializes a sequence of joined launch views to a downloadable artifact:
//! a structured JSON array or a CSV table with a fixed header. Unresolved
//! rocket/launchpad references export as empty names and an unknown success
//! flag exports as an empty CSV field.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::data::LaunchView;

/// CSV header row, fixed by the export contract
const CSV_HEADER: &str = "id,name,date_utc,rocket,success,launchpad";

/// Errors that can occur when building an export artifact
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format is not supported
    #[error("Unsupported export format: '{0}' (expected 'csv' or 'json')")]
    UnsupportedFormat(String),

    /// Serialization failed
    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Parses a format string, case-insensitively
    pub fn parse(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A finished export: conventional filename, media type, and body
#[derive(Debug, Clone, Serialize)]
pub struct ExportArtifact {
    /// Conventional attachment filename
    pub filename: &'static str,
    /// Media type of the body
    pub content_type: &'static str,
    /// Serialized launch records
    pub body: String,
}

/// Serializes launch views into the requested format
pub fn export_launches(
    views: &[LaunchView],
    format: &str,
) -> Result<ExportArtifact, ExportError> {
    let artifact = match ExportFormat::parse(format)? {
        ExportFormat::Json => ExportArtifact {
            filename: "launches.json",
            content_type: "application/json",
            body: serde_json::to_string_pretty(views)?,
        },
        ExportFormat::Csv => ExportArtifact {
            filename: "launches.csv",
            content_type: "text/csv",
            body: to_csv(views),
        },
    };
    info!(
        format,
        records = views.len(),
        filename = artifact.filename,
        "built export artifact"
    );
    Ok(artifact)
}

/// Renders views as CSV with the fixed header
fn to_csv(views: &[LaunchView]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for view in views {
        let rocket = view.rocket.as_ref().map(|r| r.name.as_str()).unwrap_or("");
        let launchpad = view
            .launchpad
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("");
        let success = match view.success {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        };

        let row = [
            view.id.as_str(),
            view.name.as_str(),
            &view.date_utc.to_rfc3339(),
            rocket,
            success,
            launchpad,
        ]
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",");

        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Quotes a CSV field when needed (comma, quote, CR, or LF present)
///
/// Embedded quotes are doubled per RFC 4180.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
