use std::path::PathBuf;

use crate::patterns::PatternGroup;

/// Which part of the catalogue to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// Each pattern group under its own heading
    Groups,
    /// The flat aggregate exclusion list, plus any --exclude patterns
    Excludes,
    /// Sorted binary extensions, plus any extracted from --exclude patterns
    Extensions,
}

/// Output encoding for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration for an ignore-catalog run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groups shown by [`View::Groups`], always in aggregate order without repeats.
    pub groups: Vec<PatternGroup>,
    /// Caller patterns layered on top of the built-in catalogue.
    pub extra_excludes: Vec<String>,
    pub view: View,
    pub format: OutputFormat,
    /// Destination file; stdout when `None`.
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Normalise a group selection: empty means all groups, otherwise the
    /// selection is put in aggregate order and repeats are dropped.
    pub fn select_groups(selected: &[PatternGroup]) -> Vec<PatternGroup> {
        if selected.is_empty() {
            return PatternGroup::ALL.to_vec();
        }
        PatternGroup::ALL
            .into_iter()
            .filter(|g| selected.contains(g))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groups: PatternGroup::ALL.to_vec(),
            extra_excludes: vec![],
            view: View::Groups,
            format: OutputFormat::Text,
            output_path: None,
        }
    }
}
