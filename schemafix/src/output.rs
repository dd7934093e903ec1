//! Console output: the fixed success summary, dry-run listing, verbose
//! rule table and JSON report.

use crate::constants::{SUMMARY_HEADER, SUMMARY_LINES};
use crate::rewriter::{RewriteReport, RuleReport};
use crate::utils::normalize_display_path;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Print the fixed success summary.
///
/// The change list is the same on every run, whether or not each rule
/// matched. It is printed without colour so the text is stable.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "{SUMMARY_HEADER}")?;
    writeln!(writer, "Changes made:")?;
    for line in SUMMARY_LINES {
        writeln!(writer, "  - {line}")?;
    }
    Ok(())
}

/// Print what a dry run would change.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_dry_run(
    writer: &mut impl Write,
    path: &Path,
    report: &RewriteReport,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        "[DRY-RUN]".yellow(),
        normalize_display_path(path)
    )?;
    if !report.changed() {
        writeln!(writer, "  No rule matched; the file would be left unchanged.")?;
        return Ok(());
    }
    for rule in report.matched() {
        writeln!(
            writer,
            "  Would apply {}: {} match(es) at {}",
            rule.id,
            rule.matches,
            format_lines(rule)
        )?;
    }
    Ok(())
}

/// Print the per-rule match table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rule_table(writer: &mut impl Write, report: &RewriteReport) -> std::io::Result<()> {
    writeln!(writer, "\n[VERBOSE] Rule matches:")?;
    for rule in &report.rules {
        let count = if rule.matches > 0 {
            rule.matches.to_string().green()
        } else {
            rule.matches.to_string().dimmed()
        };
        writeln!(writer, "   {:<22} {count}  {}", rule.id, rule.summary)?;
    }
    writeln!(writer, "   Total: {}", report.total_matches())?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    dry_run: bool,
    changed: bool,
    total_matches: usize,
    rules: &'a [RuleReport],
}

/// Print the report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(
    writer: &mut impl Write,
    path: &Path,
    report: &RewriteReport,
    dry_run: bool,
) -> anyhow::Result<()> {
    let json = JsonReport {
        file: normalize_display_path(path),
        dry_run,
        changed: report.changed(),
        total_matches: report.total_matches(),
        rules: &report.rules,
    };
    writeln!(writer, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

fn format_lines(rule: &RuleReport) -> String {
    let lines: Vec<String> = rule.lines.iter().map(ToString::to_string).collect();
    let label = if lines.len() == 1 { "line" } else { "lines" };
    format!("{label} {}", lines.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RewriteReport {
        RewriteReport {
            rules: vec![
                RuleReport {
                    id: "project-year".to_owned(),
                    summary: "project.year → project.academicYear".to_owned(),
                    matches: 2,
                    lines: vec![3, 9],
                },
                RuleReport {
                    id: "priority-input".to_owned(),
                    summary: "Removed priority input".to_owned(),
                    matches: 0,
                    lines: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_summary_is_fixed() {
        let mut buffer = Vec::new();
        print_summary(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "✅ Fixed Projects Admin page!");
        assert_eq!(lines[1], "Changes made:");
        assert_eq!(lines[8], "  - Removed priority input");
    }

    #[test]
    fn test_dry_run_lists_matched_rules_only() {
        let mut buffer = Vec::new();
        print_dry_run(&mut buffer, Path::new("./page.tsx"), &report()).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("page.tsx"));
        assert!(output.contains("Would apply project-year: 2 match(es) at lines 3, 9"));
        assert!(!output.contains("priority-input"));
    }

    #[test]
    fn test_dry_run_without_matches() {
        let mut buffer = Vec::new();
        print_dry_run(
            &mut buffer,
            Path::new("page.tsx"),
            &RewriteReport::default(),
        )
        .unwrap();
        assert!(String::from_utf8(buffer)
            .unwrap()
            .contains("No rule matched"));
    }

    #[test]
    fn test_json_report() {
        let mut buffer = Vec::new();
        print_json(&mut buffer, Path::new("page.tsx"), &report(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["file"], "page.tsx");
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["total_matches"], 2);
        assert_eq!(value["rules"][0]["lines"][1], 9);
    }
}
