use crate::error::{GameDataError, Result};
use glob::{MatchOptions, Pattern, glob_with};
use std::path::{Path, PathBuf};

/// Wildcards never match a leading `.`, so hidden directories are skipped.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
	case_sensitive: true,
	require_literal_separator: false,
	require_literal_leading_dot: true,
};

/// Find every regular file under `root` matching the relative glob `pattern`.
///
/// `root` is matched literally, even if it contains glob metacharacters.
/// Results come back in glob's alphabetical order, which serves as the
/// tie-break order for the depth sort.
pub fn discover_fragments(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
	let escaped_root = Pattern::escape(&root.to_string_lossy());
	let full_pattern = Path::new(&escaped_root).join(pattern);
	let pattern_str = full_pattern.to_string_lossy();

	let entries =
		glob_with(&pattern_str, MATCH_OPTIONS).map_err(|source| GameDataError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})?;

	let mut files = Vec::new();
	for entry in entries {
		let path = entry.map_err(|source| GameDataError::DiscoveryFailed { source })?;
		if path.is_file() {
			files.push(path);
		}
	}

	Ok(files)
}
