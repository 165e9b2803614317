use crate::config::types::Config;
use crate::error::{MigrateError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| MigrateError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| MigrateError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::MigrationRules;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(config.remove_fields.is_none());
		assert!(config.maturity_tags.is_none());
		assert_eq!(config.into_rules(), MigrationRules::default());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
remove-fields = ["org_roam_id", "aliases"]
maturity-tags = ["seedling", "sapling"]
"#;
		let path = PathBuf::from("test.toml");
		let rules = parse_config_str(content, &path).unwrap().into_rules();

		assert_eq!(rules.remove_fields.len(), 2);
		assert!(rules.removes_field("aliases"));
		assert!(!rules.removes_field("bibliography"));
		assert!(rules.is_maturity_tag("sapling"));
		assert!(!rules.is_maturity_tag("evergreen"));
	}

	#[test]
	fn test_empty_list_disables_rule() {
		let content = "maturity-tags = []\n";
		let path = PathBuf::from("test.toml");
		let rules = parse_config_str(content, &path).unwrap().into_rules();

		assert!(rules.maturity_tags.is_empty());
		assert!(rules.removes_field("org_roam_id"));
	}

	#[test]
	fn test_unknown_key_is_rejected() {
		let content = "remove_fields = [\"org_roam_id\"]\n";
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		match result.unwrap_err() {
			MigrateError::ConfigParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("test.toml"));
			}
			_ => panic!("Expected ConfigParseError"),
		}
	}

	#[test]
	fn test_invalid_field_name_is_rejected() {
		let content = "remove-fields = [\"not a key\"]\n";
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		assert!(matches!(
			result,
			Err(MigrateError::InvalidFieldName { .. })
		));
	}

	#[test]
	fn test_parse_config_file_missing() {
		let result = parse_config_file(Path::new("/nonexistent/.sprout-migrate.toml"));
		assert!(matches!(result, Err(MigrateError::ConfigReadError { .. })));
	}
}
