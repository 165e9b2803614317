//! Line classification and frontmatter rewriting.
//!
//! This module handles:
//! - Classifying frontmatter lines into a closed set of kinds
//! - Rendering each kind in the sprout schema

pub mod classifier;
pub mod transformer;

pub use classifier::{LineKind, LinePatterns, tag_item};
pub use transformer::{Transformer, review_interval};
