//! Transformation catalog.
//!
//! A [`Transformation`] pairs a compiled pattern with what replaces each
//! match. The nine built-in rules come from [`builtin_transformations`] in
//! the order they must run.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use thiserror::Error;

use crate::constants::{
    COORDINATOR_DISPLAY_RE, COORDINATOR_FILTER_RE, COORDINATOR_INPUT_RE, FORM_TOTAL_BUDGET_RE,
    FORM_YEAR_RE, PRIORITY_INPUT_RE, PROGRESS_BAR_RE, PROJECT_TOTAL_BUDGET_RE, PROJECT_YEAR_RE,
};

/// Errors raised while building a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A configured pattern failed to compile.
    #[error("Rule '{id}' has an invalid pattern: {message}")]
    InvalidPattern {
        /// Id of the offending rule.
        id: String,
        /// Compiler message from `regex`.
        message: String,
    },
}

/// What a match is replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted verbatim; `$name` groups are not expanded.
    Literal(String),
    /// Remove the matched text.
    Delete,
}

impl Replacement {
    /// Text written in place of a match.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Delete => "",
        }
    }
}

/// A single pattern-to-replacement rule.
#[derive(Debug, Clone)]
pub struct Transformation {
    /// Stable identifier used in reports and config.
    pub id: String,
    /// Human-readable description of the change.
    pub summary: String,
    /// Compiled pattern.
    pub pattern: Regex,
    /// Replacement for every match.
    pub replacement: Replacement,
}

/// Result of applying one transformation to a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Buffer after the transformation.
    pub text: String,
    /// Byte ranges of the matches in the input buffer.
    pub matches: Vec<Range<usize>>,
}

impl Transformation {
    fn builtin(id: &str, summary: &str, pattern: &str, replacement: Replacement) -> Self {
        #[allow(clippy::expect_used)]
        let pattern = Regex::new(pattern).expect("Invalid built-in transformation pattern");
        Self {
            id: id.to_owned(),
            summary: summary.to_owned(),
            pattern,
            replacement,
        }
    }

    /// Compile a rule supplied by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `pattern` does not compile.
    pub fn custom(
        id: impl Into<String>,
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        let compiled = Regex::new(pattern).map_err(|e| RuleError::InvalidPattern {
            id: id.clone(),
            message: e.to_string(),
        })?;
        let summary = match &replacement {
            Replacement::Literal(text) => format!("/{pattern}/ → {text}"),
            Replacement::Delete => format!("Removed /{pattern}/"),
        };
        Ok(Self {
            id,
            summary,
            pattern: compiled,
            replacement,
        })
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// A pattern with no match returns `text` unchanged and an empty match list.
    #[must_use]
    pub fn apply(&self, text: &str) -> Applied {
        let matches: Vec<Range<usize>> = self.pattern.find_iter(text).map(|m| m.range()).collect();
        if matches.is_empty() {
            return Applied {
                text: text.to_owned(),
                matches,
            };
        }

        let replaced = self
            .pattern
            .replace_all(text, NoExpand(self.replacement.as_str()));
        Applied {
            text: replaced.into_owned(),
            matches,
        }
    }
}

/// The migration's rules, compiled once, in application order.
pub fn builtin_transformations() -> &'static [Transformation] {
    static RULES: OnceLock<Vec<Transformation>> = OnceLock::new();
    RULES.get_or_init(|| {
        let rename = |to: &str| Replacement::Literal(to.to_owned());
        vec![
            Transformation::builtin(
                "project-year",
                "project.year → project.academicYear",
                PROJECT_YEAR_RE,
                rename("project.academicYear"),
            ),
            Transformation::builtin(
                "form-year",
                "formData.year → formData.academicYear",
                FORM_YEAR_RE,
                rename("formData.academicYear"),
            ),
            Transformation::builtin(
                "project-total-budget",
                "project.totalBudget → project.budget",
                PROJECT_TOTAL_BUDGET_RE,
                rename("project.budget"),
            ),
            Transformation::builtin(
                "form-total-budget",
                "formData.totalBudget → formData.budget",
                FORM_TOTAL_BUDGET_RE,
                rename("formData.budget"),
            ),
            Transformation::builtin(
                "progress-bar",
                "Removed progress bar section",
                PROGRESS_BAR_RE,
                Replacement::Delete,
            ),
            Transformation::builtin(
                "coordinator-display",
                "Removed coordinator display",
                COORDINATOR_DISPLAY_RE,
                Replacement::Delete,
            ),
            Transformation::builtin(
                "coordinator-filter",
                "Removed coordinator search clause",
                COORDINATOR_FILTER_RE,
                Replacement::Delete,
            ),
            Transformation::builtin(
                "priority-input",
                "Removed priority input",
                PRIORITY_INPUT_RE,
                Replacement::Delete,
            ),
            Transformation::builtin(
                "coordinator-input",
                "Removed coordinator input",
                COORDINATOR_INPUT_RE,
                Replacement::Delete,
            ),
        ]
    })
}
