//! Migration rule configuration for sprout-migrate.
//!
//! This module handles:
//! - Built-in rule tables (removable keys, maturity tags)
//! - TOML config file parsing and validation
//! - Config file discovery

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{CONFIG_FILE_NAME, load_rules, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{
	Config, DEFAULT_MATURITY_TAGS, DEFAULT_REMOVE_FIELDS, LoadedRules, MigrationRules,
	RESERVED_FIELDS,
};
