//! Extension lookup derived from the built-in glob patterns.
//!
//! Glob evaluation is comparatively expensive; consumers that only need to
//! know whether a file *looks* binary can test its extension against
//! [`BINARY_EXTENSIONS`] instead.

use std::path::Path;
use std::sync::LazyLock;

use crate::patterns::BINARY_FILE_PATTERNS;

/// Binary extensions that no pattern in [`BINARY_FILE_PATTERNS`] produces.
pub const ADDITIONAL_BINARY_EXTENSIONS: &[&str] = &[".dat", ".obj", ".o", ".a", ".lib", ".wasm"];

/// Sorted extensions from [`BINARY_FILE_PATTERNS`] plus [`ADDITIONAL_BINARY_EXTENSIONS`].
pub static BINARY_EXTENSIONS: LazyLock<Vec<String>> =
    LazyLock::new(|| with_additional(extract_extensions_from_patterns(BINARY_FILE_PATTERNS)));

/// Extract `".ext"` suffixes from `*.ext` style globs, sorted byte-wise.
///
/// Only patterns containing `*.` are considered. The suffix is everything
/// after the last `*`, so `**/*.tar.gz` yields `.tar.gz` and `**/*.min.*`
/// yields nothing. Suffixes that are empty, contain `/` or lack a leading
/// dot are dropped. Duplicates are kept.
pub fn extract_extensions_from_patterns<I, S>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extensions: Vec<String> = patterns
        .into_iter()
        .filter_map(|pattern| suffix_after_last_star(pattern.as_ref()).map(str::to_string))
        .collect();
    extensions.sort();
    extensions
}

fn suffix_after_last_star(pattern: &str) -> Option<&str> {
    if !pattern.contains("*.") {
        return None;
    }
    // `*.` is present, so there is at least one `*`
    let ext = &pattern[pattern.rfind('*')? + 1..];
    if ext.is_empty() || ext.contains('/') || !ext.starts_with('.') {
        tracing::trace!(pattern, suffix = ext, "pattern has no usable extension");
        return None;
    }
    Some(ext)
}

/// [`BINARY_EXTENSIONS`] extended with whatever `extra` patterns yield.
pub fn binary_extensions_with<S: AsRef<str>>(extra: &[S]) -> Vec<String> {
    let mut all = BINARY_EXTENSIONS.clone();
    all.extend(extract_extensions_from_patterns(extra));
    all.sort();
    all
}

/// Whether `ext` (with or without the leading dot) is a known binary extension.
/// Comparison ignores ASCII case.
pub fn is_binary_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    let dotted = if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    };
    BINARY_EXTENSIONS.binary_search(&dotted).is_ok()
}

/// Whether the final extension of `path` is a known binary extension.
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_binary_extension)
}

fn with_additional(mut extensions: Vec<String>) -> Vec<String> {
    extensions.extend(ADDITIONAL_BINARY_EXTENSIONS.iter().map(|e| e.to_string()));
    extensions.sort();
    extensions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_sorts() {
        assert_eq!(
            extract_extensions_from_patterns(["**/*.exe", "**/*.dll"]),
            [".dll", ".exe"]
        );
        assert_eq!(
            extract_extensions_from_patterns(["**/*.tar", "**/*.gz"]),
            [".gz", ".tar"]
        );
    }

    #[test]
    fn directory_patterns_yield_nothing() {
        assert!(extract_extensions_from_patterns(["**/node_modules/**"]).is_empty());
        assert!(extract_extensions_from_patterns(["**/.DS_Store", "**/.env"]).is_empty());
    }

    #[test]
    fn suffix_is_taken_after_last_star() {
        assert_eq!(extract_extensions_from_patterns(["**/*.tar.gz"]), [".tar.gz"]);
        assert!(extract_extensions_from_patterns(["**/*.min.*"]).is_empty());
        assert!(extract_extensions_from_patterns(["*.d/*"]).is_empty());
    }

    #[test]
    fn suffix_with_separator_is_dropped() {
        assert!(extract_extensions_from_patterns(["**/*.egg-info/**/x"]).is_empty());
        assert!(extract_extensions_from_patterns(["*.app/Contents"]).is_empty());
    }

    #[test]
    fn suffix_without_leading_dot_is_dropped() {
        // contains `*.` but the last `*` is followed by `c`
        assert!(extract_extensions_from_patterns(["*.a*c"]).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(
            extract_extensions_from_patterns(["**/*.so", "*.so", "lib/*.so"]),
            [".so", ".so", ".so"]
        );
    }

    #[test]
    fn sort_is_bytewise() {
        assert_eq!(
            extract_extensions_from_patterns(["*.b", "*.B", "*.a", "*.7z"]),
            [".7z", ".B", ".a", ".b"]
        );
    }

    #[test]
    fn accepts_owned_strings() {
        let patterns = vec!["**/*.pyc".to_string(), "**/*.pyo".to_string()];
        assert_eq!(extract_extensions_from_patterns(&patterns), [".pyc", ".pyo"]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = extract_extensions_from_patterns(BINARY_FILE_PATTERNS);
        let second = extract_extensions_from_patterns(BINARY_FILE_PATTERNS);
        assert_eq!(first, second);
    }

    #[test]
    fn binary_extensions_sorted() {
        assert!(BINARY_EXTENSIONS.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn binary_extensions_well_formed() {
        for ext in BINARY_EXTENSIONS.iter() {
            assert!(ext.starts_with('.'), "{ext} lacks a dot");
            assert!(!ext.contains('/'), "{ext} contains a separator");
        }
    }

    #[test]
    fn binary_extensions_cover_patterns_and_additional() {
        let extracted = extract_extensions_from_patterns(BINARY_FILE_PATTERNS);
        assert_eq!(extracted.len(), BINARY_FILE_PATTERNS.len());
        for ext in extracted.iter().map(String::as_str).chain(ADDITIONAL_BINARY_EXTENSIONS.iter().copied()) {
            assert!(BINARY_EXTENSIONS.iter().any(|e| e == ext), "{ext} missing");
        }
        assert_eq!(
            BINARY_EXTENSIONS.len(),
            BINARY_FILE_PATTERNS.len() + ADDITIONAL_BINARY_EXTENSIONS.len()
        );
    }

    #[test]
    fn binary_extensions_starts_with_digit_entry() {
        assert_eq!(BINARY_EXTENSIONS.first().map(String::as_str), Some(".7z"));
        assert_eq!(BINARY_EXTENSIONS.last().map(String::as_str), Some(".zip"));
    }

    #[test]
    fn extensions_with_extra() {
        let all = binary_extensions_with(&["**/*.png", "**/assets/**"]);
        assert_eq!(all.len(), BINARY_EXTENSIONS.len() + 1);
        assert!(all.iter().any(|e| e == ".png"));
        assert!(all.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn lookup_by_extension() {
        assert!(is_binary_extension(".exe"));
        assert!(is_binary_extension("exe"));
        assert!(is_binary_extension("EXE"));
        assert!(is_binary_extension(".wasm"));
        assert!(is_binary_extension("o"));
        assert!(!is_binary_extension(".rs"));
        assert!(!is_binary_extension(""));
    }

    #[test]
    fn lookup_by_path() {
        assert!(has_binary_extension(Path::new("target/debug/app.exe")));
        assert!(has_binary_extension(Path::new("dist/release.tar.gz")));
        assert!(has_binary_extension(Path::new("Report.DOCX")));
        assert!(!has_binary_extension(Path::new("src/main.rs")));
        assert!(!has_binary_extension(Path::new("Makefile")));
        assert!(!has_binary_extension(Path::new(".gz")));
    }
}
