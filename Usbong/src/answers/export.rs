//! Export of recorded node states
//!
//! # Delimited format
//!
//! One record per visited node, each terminated by `;`, no header:
//!
//! - link and radio button nodes with a selection start with the selected
//!   index; every other node starts with the first character of its
//!   transition key (`A` for `Any`, `Y`/`N` for `Yes`/`No`)
//! - text input nodes append `,<text>`, date nodes append `,<RFC 3339 date>`
//!
//! ```text
//! 1;A,42;Y;
//! ```

use super::UsbongNodeState;
use crate::error::Result;
use crate::formats::name::TaskNodeType;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const RECORD_TERMINATOR: char = ';';
const FIELD_SEPARATOR: char = ',';

/// Export format for recorded states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Semicolon-terminated records (reporting backend format)
    #[default]
    Csv,
    /// JSON array of states
    Json,
}

impl ExportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid export format '{s}'. Valid values: csv, json")),
        }
    }
}

fn csv_record(state: &UsbongNodeState, out: &mut String) {
    let selected = match state.node_type {
        Some(TaskNodeType::Link | TaskNodeType::RadioButtons) => state
            .fields
            .selected_indices
            .as_ref()
            .and_then(|indices| indices.first()),
        _ => None,
    };
    match selected {
        Some(index) => out.push_str(&index.to_string()),
        None => out.extend(state.transition_key.chars().next()),
    }

    match state.node_type {
        Some(t) if t.has_text_input() => {
            out.push(FIELD_SEPARATOR);
            out.push_str(state.fields.text_input.as_deref().unwrap_or_default());
        }
        Some(t) if t.has_date() => {
            if let Some(date) = state.fields.date {
                out.push(FIELD_SEPARATOR);
                out.push_str(&date.to_rfc3339_opts(SecondsFormat::Secs, false));
            }
        }
        _ => {}
    }

    out.push(RECORD_TERMINATOR);
}

/// Generate the delimited export
#[must_use]
pub fn generate_csv(states: &[UsbongNodeState]) -> String {
    let mut out = String::new();
    for state in states {
        csv_record(state, &mut out);
    }
    out
}

/// Generate a pretty-printed JSON array of the states
///
/// # Errors
/// Returns an error if serialization fails.
pub fn generate_json(states: &[UsbongNodeState]) -> Result<String> {
    Ok(serde_json::to_string_pretty(states)?)
}

/// Generate an export in the given format
///
/// # Errors
/// Returns an error if serialization fails.
pub fn generate_export(states: &[UsbongNodeState], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(generate_csv(states)),
        ExportFormat::Json => generate_json(states),
    }
}

/// Timestamped export file name, e.g. `2024-05-01T08-30-00.csv`
#[must_use]
pub fn export_file_name(now: &DateTime<FixedOffset>, format: ExportFormat) -> String {
    format!("{}.{}", now.format("%Y-%m-%dT%H-%M-%S"), format.extension())
}

/// Write an export into `dir`, creating it if needed, and return the file path
///
/// # Errors
/// Returns an error if generation fails or the file cannot be written.
pub fn write_export(
    states: &[UsbongNodeState],
    dir: &Path,
    format: ExportFormat,
    now: &DateTime<FixedOffset>,
) -> Result<PathBuf> {
    let content = generate_export(states, format)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(now, format));
    std::fs::write(&path, content)?;
    tracing::info!("Wrote {} states to {}", states.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::StateFields;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn state(key: &str, node_type: TaskNodeType, fields: StateFields) -> UsbongNodeState {
        UsbongNodeState {
            transition_key: key.to_string(),
            node_type: Some(node_type),
            fields,
        }
    }

    fn sample() -> Vec<UsbongNodeState> {
        vec![
            state(
                "Any",
                TaskNodeType::RadioButtons,
                StateFields {
                    selected_indices: Some(vec![1]),
                    ..Default::default()
                },
            ),
            state(
                "Any",
                TaskNodeType::TextField,
                StateFields {
                    text_input: Some("42".to_string()),
                    ..Default::default()
                },
            ),
        ]
    }

    #[test]
    fn test_csv_selection_and_text() {
        assert_eq!(generate_csv(&sample()), "1;A,42;");
    }

    #[test]
    fn test_csv_first_character_rules() {
        let states = vec![
            state("Yes", TaskNodeType::Checklist, StateFields {
                selected_indices: Some(vec![0, 2]),
                ..Default::default()
            }),
            state("No", TaskNodeType::RadioButtonsWithAnswer, StateFields {
                selected_indices: Some(vec![0]),
                ..Default::default()
            }),
            state("Any", TaskNodeType::TextDisplay, StateFields::default()),
            state("Any", TaskNodeType::Link, StateFields {
                selected_indices: Some(vec![]),
                ..Default::default()
            }),
            state("", TaskNodeType::TextDisplay, StateFields::default()),
        ];
        assert_eq!(generate_csv(&states), "Y;N;A;A;;");
    }

    #[test]
    fn test_csv_dates() {
        let date = DateTime::parse_from_rfc3339("2024-05-01T08:30:00+08:00").unwrap();
        let states = vec![
            state("Any", TaskNodeType::Date, StateFields {
                date: Some(date),
                ..Default::default()
            }),
            state("Any", TaskNodeType::Date, StateFields::default()),
            state("Any", TaskNodeType::TextArea, StateFields::default()),
        ];
        assert_eq!(generate_csv(&states), "A,2024-05-01T08:30:00+08:00;A;A,;");
    }

    #[test]
    fn test_json_export() {
        let json = generate_export(&sample(), ExportFormat::Json).unwrap();
        let parsed: Vec<UsbongNodeState> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
        assert!(json.contains("\"radioButtons\""));
    }

    #[test]
    fn test_export_file_name() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T08:30:05+08:00").unwrap();
        assert_eq!(export_file_name(&now, ExportFormat::Csv), "2024-05-01T08-30-05.csv");
        assert_eq!(export_file_name(&now, ExportFormat::Json), "2024-05-01T08-30-05.json");
    }

    #[test]
    fn test_write_export() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exports");
        let now = DateTime::parse_from_rfc3339("2024-05-01T08:30:05+08:00").unwrap();
        let path = write_export(&sample(), &dir, ExportFormat::Csv, &now).unwrap();
        assert_eq!(path, dir.join("2024-05-01T08-30-05.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "1;A,42;");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
