//! Pretty formatter for human-readable terminal output
//!
//! Displays violations with colors, source code context, and summary.

use crate::output::FileViolation;
use colored::{ColoredString, Colorize};
use curbcut_core::violation::Impact;
use std::collections::HashMap;
use std::fs;

pub struct PrettyFormatter {
    sources: HashMap<String, String>,
}

impl PrettyFormatter {
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    pub fn with_sources(sources: HashMap<String, String>) -> Self {
        Self { sources }
    }

    pub fn format(&self, violations: &[FileViolation]) -> String {
        let mut output = String::new();

        for violation in violations {
            output.push_str(&self.format_violation(violation));
            output.push('\n');
        }

        if !violations.is_empty() {
            output.push_str(&self.format_summary(violations));
        }

        output
    }

    fn format_violation(&self, violation: &FileViolation) -> String {
        let mut lines = Vec::new();

        let impact_str = self.colorize_impact(&violation.impact);
        let header = format!(
            "{}[{}]: {}",
            impact_str,
            violation.rule_id.dimmed(),
            violation.message
        );
        lines.push(header);

        let location = format!(
            "  {} {}:{}:{}",
            "-->".blue(),
            violation.file,
            violation.line,
            violation.column
        );
        lines.push(location);

        if let Some(source_line) = self.get_source_line(&violation.file, violation.line) {
            let line_num_width = violation.line.to_string().len();
            let padding = " ".repeat(line_num_width);

            lines.push(format!("{} {}", padding, "|".blue()));

            let line_display = format!(
                "{} {} {}",
                violation.line.to_string().blue(),
                "|".blue(),
                source_line
            );
            lines.push(line_display);

            let caret_padding = " ".repeat(violation.column.saturating_sub(1));
            let caret_line = format!(
                "{} {} {}{}",
                padding,
                "|".blue(),
                caret_padding,
                "^^^".red()
            );
            lines.push(caret_line);

            lines.push(format!("{} {}", padding, "|".blue()));
        }

        if let Some(help) = &violation.help {
            let line_num_width = violation.line.to_string().len();
            let padding = " ".repeat(line_num_width);
            lines.push(format!(
                "{} {} {} {}",
                padding,
                "=".blue(),
                "help:".green(),
                help
            ));
        }

        lines.join("\n")
    }

    fn colorize_impact(&self, impact: &Impact) -> ColoredString {
        match impact {
            Impact::Critical => "critical".red().bold(),
            Impact::Serious => "serious".red().bold(),
            Impact::Moderate => "moderate".yellow().bold(),
            Impact::Minor => "minor".cyan().bold(),
        }
    }

    fn get_source_line(&self, file: &str, line: usize) -> Option<String> {
        if let Some(source) = self.sources.get(file) {
            return source.lines().nth(line.saturating_sub(1)).map(|s| s.to_string());
        }

        if let Ok(content) = fs::read_to_string(file) {
            return content.lines().nth(line.saturating_sub(1)).map(|s| s.to_string());
        }

        None
    }

    fn format_summary(&self, violations: &[FileViolation]) -> String {
        let counts = |impact: Impact| {
            violations
                .iter()
                .filter(|v| v.impact == impact)
                .count()
        };
        let critical = counts(Impact::Critical);
        let serious = counts(Impact::Serious);
        let moderate = counts(Impact::Moderate);
        let minor = counts(Impact::Minor);

        let total = violations.len();
        let problems_str = if total == 1 { "problem" } else { "problems" };

        format!(
            "\nFound {} {} ({} critical, {} serious, {} moderate, {} minor)\n",
            total.to_string().bold(),
            problems_str,
            critical.to_string().red(),
            serious.to_string().red(),
            moderate.to_string().yellow(),
            minor.to_string().cyan()
        )
    }
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}
