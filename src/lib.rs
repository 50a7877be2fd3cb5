//! # ignore-catalog
//!
//! Built-in glob ignore patterns for file discovery tools, grouped by purpose,
//! plus a sorted list of binary file extensions derived from them.
//!
//! The catalogue lives in [`patterns`] and [`extensions`]. [`run()`] renders a
//! selected slice of it as text or JSON; the `ignore-catalog` binary is a thin
//! wrapper around it.

pub mod cli;
pub mod error;
pub mod extensions;
pub mod patterns;
pub mod report;
pub mod types;

use std::fs::File;
use std::io::{BufWriter, Write};

pub use extensions::{
    ADDITIONAL_BINARY_EXTENSIONS, BINARY_EXTENSIONS, extract_extensions_from_patterns,
};
pub use patterns::{
    BINARY_FILE_PATTERNS, COMMON_DIRECTORY_EXCLUDES, COMMON_IGNORE_PATTERNS, DEFAULT_FILE_EXCLUDES,
    PYTHON_EXCLUDES, PatternGroup, SYSTEM_FILE_EXCLUDES,
};

use crate::error::Error;
use crate::report::Report;
use crate::types::Config;

/// Validate extra patterns, build the report and write it to the configured
/// destination.
pub fn run(config: &Config) -> Result<(), Error> {
    // validate before touching the output file
    patterns::validate_patterns(&config.extra_excludes)?;

    match &config.output_path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            render(config, &mut out)?;
            out.flush()?;
            tracing::info!(path = %path.display(), "wrote report");
            Ok(())
        }
        None => render(config, &mut std::io::stdout().lock()),
    }
}

/// Like [`run()`], but writes to `out` regardless of `config.output_path`.
pub fn write_report(config: &Config, out: &mut impl Write) -> Result<(), Error> {
    patterns::validate_patterns(&config.extra_excludes)?;
    render(config, out)
}

fn render(config: &Config, out: &mut impl Write) -> Result<(), Error> {
    let report = Report::build(config);
    tracing::debug!(
        view = ?config.view,
        format = ?config.format,
        extra = config.extra_excludes.len(),
        entries = report.entry_count(),
        "rendering catalogue"
    );
    report.write(config.format, out)
}
