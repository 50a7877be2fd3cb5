use std::io::Write;

use serde::Serialize;

use crate::error::Error;
use crate::extensions;
use crate::patterns::{self, PatternGroup};
use crate::types::{Config, OutputFormat, View};

/// One pattern group as printed.
#[derive(Debug, Clone, Serialize)]
pub struct GroupEntry {
    pub name: PatternGroup,
    pub patterns: Vec<String>,
}

/// The slice of the catalogue selected by a [`Config`]. Only the field
/// matching the view is populated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file_excludes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_extensions: Option<Vec<String>>,
}

impl Report {
    pub fn build(config: &Config) -> Self {
        match config.view {
            View::Groups => Self {
                groups: Some(
                    config
                        .groups
                        .iter()
                        .map(|&name| GroupEntry {
                            name,
                            patterns: name.patterns().iter().map(|p| p.to_string()).collect(),
                        })
                        .collect(),
                ),
                ..Self::default()
            },
            View::Excludes => Self {
                default_file_excludes: Some(patterns::default_file_excludes_with(
                    &config.extra_excludes,
                )),
                ..Self::default()
            },
            View::Extensions => Self {
                binary_extensions: Some(extensions::binary_extensions_with(
                    &config.extra_excludes,
                )),
                ..Self::default()
            },
        }
    }

    /// Number of entries across whatever the report holds.
    pub fn entry_count(&self) -> usize {
        self.groups
            .iter()
            .flatten()
            .map(|g| g.patterns.len())
            .chain(self.default_file_excludes.iter().map(Vec::len))
            .chain(self.binary_extensions.iter().map(Vec::len))
            .sum()
    }

    pub fn write(&self, format: OutputFormat, out: &mut impl Write) -> Result<(), Error> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Text => self.write_text(out)?,
        }
        Ok(())
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        if let Some(groups) = &self.groups {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "# {} ({})", group.name, group.patterns.len())?;
                for pattern in &group.patterns {
                    writeln!(out, "  {pattern}")?;
                }
            }
        }
        self.default_file_excludes
            .iter()
            .chain(&self.binary_extensions)
            .flatten()
            .try_for_each(|line| writeln!(out, "{line}"))
    }
}
