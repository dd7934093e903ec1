//! Core library for schemafix.
//!
//! Migrates the admin projects page after the projects schema change by
//! running a fixed, ordered list of regex rewrites over the page source.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and built-in patterns.
pub mod constants;

/// Module defining the entry point logic.
pub mod entry_point;

/// Module for diagnostic tracing setup.
pub mod logging;

/// Module for console output formatting.
pub mod output;

/// The ordered rewrite pipeline.
pub mod rewriter;

/// The transformation catalog.
pub mod rules;

/// Module containing utility functions.
pub mod utils;

pub use rewriter::{rewrite, RewriteReport, Rewriter};
