//! The rewrite pipeline.
//!
//! [`Rewriter`] runs an ordered list of [`Transformation`]s over a buffer.
//! Each step sees the output of the step before it; no step is skipped and
//! none is rolled back.

use serde::Serialize;
use tracing::debug;

use crate::rules::{builtin_transformations, Transformation};
use crate::utils::LineIndex;

/// Per-rule outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    /// Rule identifier.
    pub id: String,
    /// Description of the change.
    pub summary: String,
    /// How many matches were rewritten.
    pub matches: usize,
    /// 1-based line of each match, in the buffer the rule saw.
    pub lines: Vec<usize>,
}

/// What a full run did, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// One entry per rule, matched or not.
    pub rules: Vec<RuleReport>,
}

impl RewriteReport {
    /// Total matches across all rules.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.rules.iter().map(|r| r.matches).sum()
    }

    /// Whether any rule matched.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.total_matches() > 0
    }

    /// Rules that matched at least once.
    pub fn matched(&self) -> impl Iterator<Item = &RuleReport> {
        self.rules.iter().filter(|r| r.matches > 0)
    }
}

/// Final text plus the report.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// Buffer after every rule ran.
    pub text: String,
    /// Per-rule match counts.
    pub report: RewriteReport,
}

/// An ordered transformation pipeline.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<Transformation>,
}

impl Rewriter {
    /// Pipeline over exactly `rules`, in the given order.
    #[must_use]
    pub fn new(rules: Vec<Transformation>) -> Self {
        Self { rules }
    }

    /// The nine built-in migration rules.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_transformations().to_vec())
    }

    /// Built-in rules followed by `extra`.
    #[must_use]
    pub fn with_extra(extra: impl IntoIterator<Item = Transformation>) -> Self {
        let mut rules = builtin_transformations().to_vec();
        rules.extend(extra);
        Self::new(rules)
    }

    /// Rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Transformation] {
        &self.rules
    }

    /// Apply every rule in order to `content`.
    #[must_use]
    pub fn run(&self, content: &str) -> RewriteOutcome {
        let mut text = content.to_owned();
        let mut report = RewriteReport::default();

        for rule in &self.rules {
            let applied = rule.apply(&text);
            let index = LineIndex::new(&text);
            let lines = applied
                .matches
                .iter()
                .map(|m| index.line_index(m.start))
                .collect();
            debug!(rule = %rule.id, matches = applied.matches.len(), "applied rule");
            report.rules.push(RuleReport {
                id: rule.id.clone(),
                summary: rule.summary.clone(),
                matches: applied.matches.len(),
                lines,
            });
            text = applied.text;
        }

        RewriteOutcome { text, report }
    }
}

/// Apply the built-in migration to `content`.
#[must_use]
pub fn rewrite(content: &str) -> String {
    Rewriter::builtin().run(content).text
}
