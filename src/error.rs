use std::path::PathBuf;

/// Library-level structured errors for sprout-migrate.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

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

	#[error("Invalid field name in remove-fields: {name:?}")]
	InvalidFieldName { name: String },

	#[error("Invalid tag in maturity-tags: {tag:?}")]
	InvalidTag { tag: String },

	#[error("Invalid line pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("{path} is not a directory")]
	NotADirectory { path: PathBuf },

	#[error("No .md files found in {path}")]
	NoMarkdownFiles { path: PathBuf },

	#[error("Failed to read vault directory: {path}")]
	VaultReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read note: {path}")]
	NoteReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write note: {path}")]
	NoteWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using MigrateError.
pub type Result<T> = std::result::Result<T, MigrateError>;
