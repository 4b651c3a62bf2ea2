//! Report rendering for the doctor command.
//!
//! Issues are listed in one table, then the fixes are grouped per file so a
//! file with several problems is read once.

use super::{DoctorReport, Issue, IssueSeverity};
use crate::commands::table::format_table;
use std::fmt::Write;
use std::path::Path;

/// Label used for issues that are not tied to a file.
const NO_FILE: &str = "(target)";

/// A path relative to the report's target, when it lies inside it.
fn relative(report: &DoctorReport, path: &str) -> String {
    Path::new(path)
        .strip_prefix(&report.target)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string())
}

/// Issues grouped by file, in first-seen order.
fn by_file<'a>(report: &'a DoctorReport) -> Vec<(String, Vec<&'a Issue>)> {
    let mut groups: Vec<(String, Vec<&Issue>)> = Vec::new();
    for issue in &report.issues {
        let file = issue
            .path
            .as_deref()
            .map(|p| relative(report, p))
            .unwrap_or_else(|| NO_FILE.to_string());
        match groups.iter_mut().find(|(f, _)| *f == file) {
            Some((_, issues)) => issues.push(issue),
            None => groups.push((file, vec![issue])),
        }
    }
    groups
}

/// Render the doctor report as text.
pub fn render_report(report: &DoctorReport, repair_mode: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Doctor: {} at {}", report.agent, report.target.display());
    let _ = writeln!(out);

    if !report.has_issues() && report.repairs.is_empty() {
        let _ = writeln!(out, "Scaffolding is healthy. No issues detected.");
        return out;
    }

    if report.has_issues() {
        let rows: Vec<Vec<String>> = report
            .issues
            .iter()
            .map(|issue| {
                let file = issue
                    .path
                    .as_deref()
                    .map(|p| relative(report, p))
                    .unwrap_or_else(|| NO_FILE.to_string());
                vec![
                    issue.severity.to_string(),
                    issue.category.clone(),
                    file,
                    issue.description.clone(),
                ]
            })
            .collect();
        let _ = writeln!(out, "Issues ({}):", report.issues.len());
        let _ = writeln!(
            out,
            "{}",
            format_table(&["Severity", "Check", "File", "Problem"], &rows)
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Fixes:");
        for (file, issues) in by_file(report) {
            let _ = writeln!(out, "  {}", file);
            for issue in issues {
                let mut fix = issue
                    .remediation
                    .as_deref()
                    .unwrap_or("no automatic fix")
                    .lines();
                let first = fix.next().unwrap_or_default();
                let marker = if issue.repairable && !repair_mode {
                    " [repairable]"
                } else {
                    ""
                };
                let _ = writeln!(out, "    - {}{}", first, marker);
                for line in fix {
                    let _ = writeln!(out, "      {}", line);
                }
            }
        }
        let _ = writeln!(out);
    }

    if !report.repairs.is_empty() {
        let _ = writeln!(out, "Repairs applied ({}):", report.repairs.len());
        for repair in &report.repairs {
            let _ = writeln!(out, "  - {}", repair);
        }
        let _ = writeln!(out);
    }

    let errors = report
        .issues
        .iter()
        .filter(|i| i.severity == IssueSeverity::Error)
        .count();
    let warnings = report.issues.len() - errors;
    let repairable = report.issues.iter().filter(|i| i.repairable).count();

    if repair_mode {
        let remaining = report.issues.len() - repairable;
        if remaining > 0 {
            let _ = writeln!(out, "{} issue(s) need manual attention.", remaining);
        } else {
            let _ = writeln!(out, "All detected issues were repaired.");
        }
    } else {
        let _ = writeln!(out, "{} error(s), {} warning(s).", errors, warnings);
        if repairable > 0 {
            let _ = writeln!(
                out,
                "{} can be repaired with `bob doctor --repair --force`.",
                repairable
            );
        }
    }

    out
}

/// Print the doctor report.
pub fn print_report(report: &DoctorReport, repair_mode: bool) {
    print!("{}", render_report(report, repair_mode));
}
