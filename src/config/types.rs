use crate::error::{MigrateError, Result};
use crate::rules::classifier::bareword_pattern;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Frontmatter keys dropped by default (org-drill bookkeeping with no sprout counterpart).
pub const DEFAULT_REMOVE_FIELDS: &[&str] = &[
	"org_roam_id",
	"drill_repeats_since_fail",
	"drill_total_repeats",
	"drill_failure_count",
	"drill_average_quality",
	"bibliography",
];

/// Tag values dropped by default. Maturity moved out of tags in the sprout schema.
pub const DEFAULT_MATURITY_TAGS: &[&str] = &["seedling", "budding", "evergreen"];

/// Keys that may not be listed in `remove-fields`.
///
/// The first three are written by the migration itself, so removing them would
/// undo a previous run. `tags` lines are always claimed by the tag rules first.
pub const RESERVED_FIELDS: &[&str] = &["created", "ease", "review_interval", "tags"];

/// Top-level configuration from a `.sprout-migrate.toml` file.
///
/// Every key is optional; a key that is present replaces the built-in set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Bareword frontmatter keys whose lines are dropped entirely.
	#[serde(default)]
	pub remove_fields: Option<Vec<String>>,

	/// Tag values removed from `tags` lists and inline sequences.
	#[serde(default)]
	pub maturity_tags: Option<Vec<String>>,
}

impl Config {
	/// Validate field names and tag values.
	pub fn validate(&self) -> Result<()> {
		let bareword = bareword_pattern()?;
		for name in self.remove_fields.iter().flatten() {
			if !bareword.is_match(name) || RESERVED_FIELDS.contains(&name.as_str()) {
				return Err(MigrateError::InvalidFieldName { name: name.clone() });
			}
		}

		for tag in self.maturity_tags.iter().flatten() {
			if tag.is_empty() || tag.trim() != tag {
				return Err(MigrateError::InvalidTag { tag: tag.clone() });
			}
		}

		Ok(())
	}

	/// Resolve this config against the built-in defaults.
	pub fn into_rules(self) -> MigrationRules {
		let defaults = MigrationRules::default();
		MigrationRules {
			remove_fields: self
				.remove_fields
				.map(|fields| fields.into_iter().collect())
				.unwrap_or(defaults.remove_fields),
			maturity_tags: self
				.maturity_tags
				.map(|tags| tags.into_iter().collect())
				.unwrap_or(defaults.maturity_tags),
		}
	}
}

/// The immutable rule tables handed to the transformer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRules {
	/// Keys whose lines are removed.
	pub remove_fields: BTreeSet<String>,

	/// Tag values removed from tag lists.
	pub maturity_tags: BTreeSet<String>,
}

impl Default for MigrationRules {
	fn default() -> Self {
		MigrationRules {
			remove_fields: DEFAULT_REMOVE_FIELDS.iter().map(|s| s.to_string()).collect(),
			maturity_tags: DEFAULT_MATURITY_TAGS.iter().map(|s| s.to_string()).collect(),
		}
	}
}

impl MigrationRules {
	pub fn removes_field(&self, key: &str) -> bool {
		self.remove_fields.contains(key)
	}

	pub fn is_maturity_tag(&self, tag: &str) -> bool {
		self.maturity_tags.contains(tag)
	}
}

/// Rules together with the file they were loaded from (`None` for built-in defaults).
#[derive(Debug, Clone, Default)]
pub struct LoadedRules {
	pub rules: MigrationRules,
	pub source: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_rules_match_builtin_tables() {
		let rules = MigrationRules::default();
		assert_eq!(rules.remove_fields.len(), 6);
		assert!(rules.removes_field("org_roam_id"));
		assert!(rules.removes_field("bibliography"));
		assert!(!rules.removes_field("drill_ease"));
		assert!(rules.is_maturity_tag("budding"));
		assert!(!rules.is_maturity_tag("physics"));
	}

	#[test]
	fn test_into_rules_keeps_defaults_for_missing_keys() {
		let config = Config {
			remove_fields: Some(vec!["aliases".to_string()]),
			maturity_tags: None,
		};
		let rules = config.into_rules();
		assert!(rules.removes_field("aliases"));
		assert!(!rules.removes_field("org_roam_id"));
		assert_eq!(rules.maturity_tags, MigrationRules::default().maturity_tags);
	}

	#[test]
	fn test_validate_rejects_non_bareword_field() {
		let config = Config {
			remove_fields: Some(vec!["drill-ease".to_string()]),
			maturity_tags: None,
		};
		match config.validate().unwrap_err() {
			MigrateError::InvalidFieldName { name } => assert_eq!(name, "drill-ease"),
			_ => panic!("Expected InvalidFieldName error"),
		}
	}

	#[test]
	fn test_validate_rejects_padded_tag() {
		let config = Config {
			remove_fields: None,
			maturity_tags: Some(vec![" seedling".to_string()]),
		};
		assert!(matches!(
			config.validate(),
			Err(MigrateError::InvalidTag { .. })
		));

		let empty = Config {
			remove_fields: None,
			maturity_tags: Some(vec![String::new()]),
		};
		assert!(empty.validate().is_err());
	}

	fn validate_field(name: &str) -> Result<()> {
		Config {
			remove_fields: Some(vec![name.to_string()]),
			maturity_tags: None,
		}
		.validate()
	}

	#[test]
	fn test_validate_field_names_follow_key_pattern() {
		assert!(validate_field("org_roam_id").is_ok());
		assert!(validate_field("_private").is_ok());
		assert!(validate_field("x1").is_ok());
		assert!(validate_field("").is_err());
		assert!(validate_field("has space").is_err());
		assert!(validate_field("key:").is_err());
		// superscript digits are alphanumeric but not word characters
		assert!(matches!(
			validate_field("x²"),
			Err(MigrateError::InvalidFieldName { .. })
		));
	}

	#[test]
	fn test_validate_rejects_reserved_fields() {
		for name in ["created", "ease", "review_interval", "tags"] {
			match validate_field(name).unwrap_err() {
				MigrateError::InvalidFieldName { name: rejected } => assert_eq!(rejected, name),
				_ => panic!("Expected InvalidFieldName error"),
			}
		}
		assert!(validate_field("next_review").is_ok());
	}
}
