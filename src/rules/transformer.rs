use crate::config::MigrationRules;
use crate::error::Result;
use crate::rules::classifier::{LineKind, LinePatterns, tag_item};

/// Rewrites org-drill frontmatter into the sprout schema.
#[derive(Debug)]
pub struct Transformer {
	patterns: LinePatterns,
	rules: MigrationRules,
}

impl Transformer {
	/// Build a transformer for the given rule tables.
	pub fn new(rules: MigrationRules) -> Result<Self> {
		Ok(Transformer {
			patterns: LinePatterns::compile()?,
			rules,
		})
	}

	/// Transform a raw YAML block.
	///
	/// Lines are joined with `\n` and a single trailing newline is appended,
	/// whatever the input looked like. Applying this twice gives the same
	/// result as applying it once.
	pub fn transform(&self, yaml: &str) -> String {
		let lines: Vec<&str> = yaml.lines().collect();
		let mut out: Vec<String> = Vec::with_capacity(lines.len());
		let mut i = 0;

		while i < lines.len() {
			let kind = self.patterns.classify(lines[i], &self.rules);
			i += 1;

			match kind {
				LineKind::TagsHeader => {
					let mut kept = Vec::new();
					while let Some(tag) = lines.get(i).copied().and_then(tag_item) {
						if !self.rules.is_maturity_tag(tag) {
							kept.push(tag);
						}
						i += 1;
					}
					if !kept.is_empty() {
						out.push("tags:".to_string());
						out.extend(kept.into_iter().map(|tag| format!("- {tag}")));
					}
				}
				LineKind::InlineTags(values) => {
					let kept: Vec<&str> = values
						.into_iter()
						.filter(|tag| !self.rules.is_maturity_tag(tag))
						.collect();
					if !kept.is_empty() {
						out.push(format!("tags: [{}]", kept.join(", ")));
					}
				}
				LineKind::RemovableKey => {}
				LineKind::DateCreated { date } => out.push(format!("created: {date}")),
				LineKind::DrillEase(ease) => out.push(format!("ease: {ease:.2}")),
				LineKind::DrillLastInterval(interval) => {
					out.push(format!("review_interval: {:.0}", review_interval(interval)));
				}
				LineKind::QuotedReviewDate { key, date } => out.push(format!("{key}: {date}")),
				LineKind::PassThrough => out.push(lines[i - 1].to_string()),
			}
		}

		let mut result = out.join("\n");
		result.push('\n');
		result
	}
}

/// Round half-to-even and clamp to at least one day.
///
/// Stays an `f64` so intervals beyond the integer range print in full.
pub fn review_interval(interval: f64) -> f64 {
	interval.round_ties_even().max(1.0)
}
