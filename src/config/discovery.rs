use crate::config::parser::parse_config_file;
use crate::config::types::LoadedRules;
use crate::error::{MigrateError, Result};
use std::path::{Path, PathBuf};

/// File name looked up in the vault and in the home directory.
pub const CONFIG_FILE_NAME: &str = ".sprout-migrate.toml";

/// Find and load the migration rules.
///
/// The lookup order is:
/// 1. `explicit`, if given (it must exist)
/// 2. `.sprout-migrate.toml` in `vault`
/// 3. `~/.sprout-migrate.toml`
/// 4. Built-in defaults
///
/// The first file found wins; files are never merged.
pub fn load_rules(explicit: Option<&Path>, vault: Option<&Path>) -> Result<LoadedRules> {
	if let Some(path) = explicit {
		if !path.is_file() {
			return Err(MigrateError::ConfigNotFound {
				path: path.to_path_buf(),
			});
		}
		return load_from(path);
	}

	let candidates = vault
		.map(|dir| dir.join(CONFIG_FILE_NAME))
		.into_iter()
		.chain(user_config_path());

	for path in candidates {
		if path.is_file() {
			return load_from(&path);
		}
	}

	tracing::debug!("no config file found, using built-in migration rules");
	Ok(LoadedRules::default())
}

fn load_from(path: &Path) -> Result<LoadedRules> {
	let config = parse_config_file(path)?;
	tracing::debug!(path = %path.display(), "loaded migration rules");
	Ok(LoadedRules {
		rules: config.into_rules(),
		source: Some(path.to_path_buf()),
	})
}

/// Get the path to the user's config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
	dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}
