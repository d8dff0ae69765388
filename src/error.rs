use std::path::PathBuf;

/// Library-level structured errors for gamedata.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum GameDataError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid fragment pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Failed to enumerate fragment files")]
	DiscoveryFailed {
		#[source]
		source: glob::GlobError,
	},

	#[error("Failed to read fragment: {path}")]
	FragmentReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse fragment: {path}")]
	FragmentParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Fragment is not a JSON object: {path}")]
	FragmentNotObject { path: PathBuf },

	#[error("Failed to serialize game data")]
	SerializeError {
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to write output file: {path}")]
	OutputWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using GameDataError.
pub type Result<T> = std::result::Result<T, GameDataError>;
