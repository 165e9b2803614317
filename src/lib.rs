//! sprout-migrate - CLI tool for migrating org-drill note frontmatter to the sprout schema.
//!
//! This library provides the core functionality for sprout-migrate, including:
//! - Frontmatter splitting and reassembly
//! - Line classification and rewriting of org-drill fields
//! - Migration rule configuration and discovery
//! - Vault scanning, per-note migration and reporting
//!
//! # Example
//!
//! ```
//! use sprout_migrate::config::MigrationRules;
//! use sprout_migrate::frontmatter;
//! use sprout_migrate::rules::Transformer;
//!
//! let transformer = Transformer::new(MigrationRules::default()).unwrap();
//! let note = "---\ndrill_ease: 2.5\norg_roam_id: abc\n---\nBody\n";
//!
//! let fm = frontmatter::split(note).unwrap();
//! let yaml = transformer.transform(fm.yaml);
//! assert_eq!(frontmatter::assemble(&yaml, fm.body), "---\nease: 2.50\n---\nBody\n");
//! ```

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod migrate;
pub mod rules;

pub use error::{MigrateError, Result};
