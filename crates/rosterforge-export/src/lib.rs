//! # Rosterforge Export
//!
//! Pure encoders turning a [`Roster`] snapshot into each supported export
//! format. Encoding never mutates the roster, and encoding the same snapshot
//! twice yields byte-identical output.
//!
//! - [`json`]: the structured-data interchange form (passwords included)
//! - [`toml`]: TOML-style config text (passwords included)
//! - [`yaml`]: YAML-style config text (passwords excluded)
//! - [`markdown`]: tabular document, one table per group
//! - [`document`]: printable document model with an HTML rendition
//!
//! The JSON and TOML outputs carry clear-text credentials. Anyone persisting
//! or transmitting them is exporting live passwords; that is the intended
//! hand-off for freshly provisioned classes, not an accident.

pub mod document;
pub mod json;
pub mod markdown;
pub mod toml;
pub mod yaml;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use rosterforge_models::Roster;

pub use document::RenderableDocument;

/// Error type for encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The formats a roster can be exported into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Toml,
    Yaml,
    Markdown,
    Html,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Json,
        ExportFormat::Toml,
        ExportFormat::Yaml,
        ExportFormat::Markdown,
        ExportFormat::Html,
    ];

    /// File extension used when saving this format to disk.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Toml => "application/toml",
            ExportFormat::Yaml => "application/yaml",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Html => "text/html",
        }
    }

    /// The `{className}.{ext}` name the export is saved under.
    pub fn file_name(self, roster: &Roster) -> String {
        format!("{}.{}", roster.class_name, self.extension())
    }
}

/// Encodes a roster snapshot into the requested format.
pub fn encode(roster: &Roster, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => json::to_json(roster),
        ExportFormat::Toml => Ok(toml::to_toml(roster)),
        ExportFormat::Yaml => Ok(yaml::to_yaml(roster)),
        ExportFormat::Markdown => Ok(markdown::to_markdown(roster)),
        ExportFormat::Html => Ok(RenderableDocument::from_roster(roster).to_html()),
    }
}

#[cfg(test)]
pub(crate) fn sample_roster() -> Roster {
    use rosterforge_models::{Group, Student};

    Roster {
        class_name: "CS101".to_string(),
        groups: vec![
            Group {
                name: "CS101-lab-1".to_string(),
                students: vec![
                    Student {
                        full_name: "Ann Lee".to_string(),
                        user_name: "al".to_string(),
                        password: "pw12345678".to_string(),
                        email: "ann@example.com".to_string(),
                    },
                    Student {
                        full_name: "Bob Ray".to_string(),
                        user_name: "br".to_string(),
                        password: "pw87654321".to_string(),
                        email: "bob@example.com".to_string(),
                    },
                ],
            },
            Group {
                name: "CS101-lab-2".to_string(),
                students: vec![],
            },
        ],
    }
}
