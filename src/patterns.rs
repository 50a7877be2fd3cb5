use std::sync::LazyLock;

use globset::Glob;
use serde::Serialize;

use crate::error::Error;

/// Directories ignored by nearly every tool.
pub const COMMON_IGNORE_PATTERNS: &[&str] = &["**/node_modules/**", "**/.git/**"];

/// Binary file extensions that are typically excluded from text processing.
pub const BINARY_FILE_PATTERNS: &[&str] = &[
    // Executables / libraries
    "**/*.bin",
    "**/*.exe",
    "**/*.dll",
    "**/*.so",
    "**/*.dylib",
    // JVM
    "**/*.class",
    "**/*.jar",
    "**/*.war",
    // Archives
    "**/*.zip",
    "**/*.tar",
    "**/*.gz",
    "**/*.bz2",
    "**/*.rar",
    "**/*.7z",
    // Office documents
    "**/*.doc",
    "**/*.docx",
    "**/*.xls",
    "**/*.xlsx",
    "**/*.ppt",
    "**/*.pptx",
    "**/*.odt",
    "**/*.ods",
    "**/*.odp",
];

/// Editor, build output and cache directories.
pub const COMMON_DIRECTORY_EXCLUDES: &[&str] = &[
    "**/.vscode/**",
    "**/.idea/**",
    "**/dist/**",
    "**/build/**",
    "**/coverage/**",
    "**/__pycache__/**",
];

pub const PYTHON_EXCLUDES: &[&str] = &["**/*.pyc", "**/*.pyo"];

pub const SYSTEM_FILE_EXCLUDES: &[&str] = &["**/.DS_Store", "**/.env"];

/// Every group concatenated in [`PatternGroup::ALL`] order. Duplicates across
/// groups are kept.
pub static DEFAULT_FILE_EXCLUDES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PatternGroup::ALL
        .iter()
        .flat_map(|group| group.patterns().iter().copied())
        .collect()
});

/// A named category of built-in patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatternGroup {
    /// node_modules and .git
    CommonIgnore,
    /// IDE, build output and cache directories
    CommonDirectoryExcludes,
    /// Executables, archives, office documents
    BinaryFilePatterns,
    /// Compiled Python bytecode
    PythonExcludes,
    /// OS metadata and environment files
    SystemFileExcludes,
}

impl PatternGroup {
    /// All groups, in the order they are concatenated into [`DEFAULT_FILE_EXCLUDES`].
    pub const ALL: [PatternGroup; 5] = [
        PatternGroup::CommonIgnore,
        PatternGroup::CommonDirectoryExcludes,
        PatternGroup::BinaryFilePatterns,
        PatternGroup::PythonExcludes,
        PatternGroup::SystemFileExcludes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternGroup::CommonIgnore => "common-ignore",
            PatternGroup::CommonDirectoryExcludes => "common-directory-excludes",
            PatternGroup::BinaryFilePatterns => "binary-file-patterns",
            PatternGroup::PythonExcludes => "python-excludes",
            PatternGroup::SystemFileExcludes => "system-file-excludes",
        }
    }

    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            PatternGroup::CommonIgnore => COMMON_IGNORE_PATTERNS,
            PatternGroup::CommonDirectoryExcludes => COMMON_DIRECTORY_EXCLUDES,
            PatternGroup::BinaryFilePatterns => BINARY_FILE_PATTERNS,
            PatternGroup::PythonExcludes => PYTHON_EXCLUDES,
            PatternGroup::SystemFileExcludes => SYSTEM_FILE_EXCLUDES,
        }
    }
}

impl std::fmt::Display for PatternGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The built-in aggregate list followed by `extra`, in caller order.
pub fn default_file_excludes_with<S: AsRef<str>>(extra: &[S]) -> Vec<String> {
    DEFAULT_FILE_EXCLUDES
        .iter()
        .map(|p| p.to_string())
        .chain(extra.iter().map(|p| p.as_ref().to_string()))
        .collect()
}

/// Check that `pattern` is a non-empty, syntactically valid glob.
pub fn validate_pattern(pattern: &str) -> Result<(), Error> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }
    Glob::new(pattern)
        .map(|_| ())
        .map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })
}

/// Validate every pattern, stopping at the first failure.
pub fn validate_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<(), Error> {
    patterns
        .iter()
        .try_for_each(|p| validate_pattern(p.as_ref()))
}
