//! Shared constants: file names, default target and the built-in patterns.

/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".schemafix.toml";

/// Page migrated when neither the command line nor the config names one.
pub const DEFAULT_TARGET: &str = "src/app/admin/projects/page.tsx";

pub(crate) const PROJECT_YEAR_RE: &str = r"\bproject\.year\b";
pub(crate) const FORM_YEAR_RE: &str = r"\bformData\.year\b";
pub(crate) const PROJECT_TOTAL_BUDGET_RE: &str = r"\bproject\.totalBudget\b";
pub(crate) const FORM_TOTAL_BUDGET_RE: &str = r"\bformData\.totalBudget\b";

/// Status-conditional progress bar. `[^}]*` keeps the match inside one brace level.
pub(crate) const PROGRESS_BAR_RE: &str =
    r"(?s)\{project\.status === 'IN_PROGRESS' && \([^}]*usedBudget[^}]*\)\}";

pub(crate) const COORDINATOR_DISPLAY_RE: &str = r#"(?s)<div className="flex items-center">\s*<User[^>]*>\s*<span>ผู้ประสานงาน:[^<]*</span>\s*</div>"#;

pub(crate) const COORDINATOR_FILTER_RE: &str = r"\|\|\s*\(project\.coordinator && project\.coordinator\.toLowerCase\(\)\.includes\(searchTerm\.toLowerCase\(\)\)\)";

pub(crate) const PRIORITY_INPUT_RE: &str =
    r"(?s)<div>\s*<label[^>]*>\s*ระดับความสำคัญ[^}]*</select>\s*</div>";

pub(crate) const COORDINATOR_INPUT_RE: &str =
    r"(?s)<div>\s*<label[^>]*>\s*ผู้ประสานงาน[^}]*formData\.coordinator[^}]*</div>";

/// Heading of the success summary.
pub const SUMMARY_HEADER: &str = "✅ Fixed Projects Admin page!";

/// The change list printed after every successful run, matched or not.
pub const SUMMARY_LINES: [&str; 7] = [
    "project.year → project.academicYear",
    "formData.year → formData.academicYear",
    "project.totalBudget → project.budget",
    "formData.totalBudget → formData.budget",
    "Removed progress bar section",
    "Removed coordinator references",
    "Removed priority input",
];
