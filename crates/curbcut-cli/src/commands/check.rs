//! Check command - validates HTML files for accessibility issues

use crate::output::FileViolation;
use crate::output::json::JsonFormatter;
use crate::output::pretty::PrettyFormatter;
use crate::output::sarif::SarifFormatter;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use curbcut_core::config::load_config_or_default_with_warnings;
use curbcut_core::engine::ValidationEngine;
use curbcut_core::html::parse_document;
use curbcut_core::violation::Impact;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use walkdir::WalkDir;

const SUPPORTED_EXTENSIONS: &[&str] = &["html", "htm"];

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to file or directory to validate
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format for violations (pretty, text, json, ndjson, sarif)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Fail on any remaining violation (exit code 1)
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Filter violations by minimum impact level (critical, serious, moderate, minor)
    #[arg(long, value_name = "LEVEL")]
    pub impact: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        self.configure_colors();

        let config_result = load_config_or_default_with_warnings(&self.path);
        for warning in &config_result.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
        let config = config_result.config;

        let files = discover_files(&self.path)?;

        if files.is_empty() {
            println!("No HTML files found.");
            return Ok(());
        }

        let engine = ValidationEngine::with_config(&config)?;
        let min_impact = self.parse_impact()?;

        let results: Vec<(PathBuf, String, Vec<FileViolation>)> = files
            .par_iter()
            .filter_map(|file| {
                let content = fs::read_to_string(file).ok()?;
                let doc = parse_document(&content);
                let report = engine.validate(&doc).ok()?;
                let path = file.to_string_lossy();
                let violations = report
                    .violations
                    .iter()
                    .map(|v| FileViolation::resolve(v, &doc, &path))
                    .collect();
                Some((file.clone(), content, violations))
            })
            .collect();

        let sources: HashMap<String, String> = results
            .iter()
            .map(|(path, content, _)| (path.to_string_lossy().to_string(), content.clone()))
            .collect();

        let all_violations: Vec<FileViolation> = results
            .into_iter()
            .flat_map(|(_, _, violations)| violations)
            .filter(|v| v.impact.level() >= min_impact.level())
            .collect();

        let error_count = all_violations
            .iter()
            .filter(|v| matches!(v.impact, Impact::Critical | Impact::Serious))
            .count();
        let warning_count = all_violations
            .iter()
            .filter(|v| matches!(v.impact, Impact::Moderate | Impact::Minor))
            .count();

        let total_files = files.len();
        let analyzed_path = self.path.to_string_lossy().to_string();

        match self.format.as_str() {
            "json" => self.output_json(&all_violations, &engine, total_files, &analyzed_path),
            "ndjson" => {
                self.output_ndjson(&all_violations, &engine, total_files, &analyzed_path)?
            }
            "sarif" => self.output_sarif(&all_violations, &engine),
            "text" => self.output_text(&all_violations),
            _ => self.output_pretty(&all_violations, &sources),
        }

        let has_errors = error_count > 0;
        let has_warnings = warning_count > 0 && self.fail_on_warnings;

        if has_errors || has_warnings {
            process::exit(1);
        }

        Ok(())
    }

    fn parse_impact(&self) -> Result<Impact> {
        match self.impact.as_deref() {
            Some("critical") => Ok(Impact::Critical),
            Some("serious") => Ok(Impact::Serious),
            Some("moderate") => Ok(Impact::Moderate),
            Some("minor") => Ok(Impact::Minor),
            Some(other) => anyhow::bail!(
                "Invalid impact '{}'. Valid values: critical, serious, moderate, minor",
                other
            ),
            None => Ok(Impact::Minor),
        }
    }

    fn configure_colors(&self) {
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        if self.no_color || no_color_env {
            colored::control::set_override(false);
        }
    }

    fn output_text(&self, violations: &[FileViolation]) {
        let mut current_file: Option<&str> = None;

        for violation in violations {
            if current_file != Some(violation.file.as_str()) {
                if current_file.is_some() {
                    println!();
                }
                println!("{}", violation.file.bold());
                current_file = Some(&violation.file);
            }

            let impact_str = match violation.impact {
                Impact::Critical => "critical".red().bold(),
                Impact::Serious => "serious".red().bold(),
                Impact::Moderate => "moderate".yellow().bold(),
                Impact::Minor => "minor".cyan().bold(),
            };

            println!(
                "  {}:{}  {}[{}]: {}",
                violation.line,
                violation.column,
                impact_str,
                violation.rule_id.dimmed(),
                violation.message
            );

            if let Some(help) = &violation.help {
                println!("      {} {}", "help:".green(), help);
            }
        }

        if !violations.is_empty() {
            let file_count = violations
                .iter()
                .map(|v| v.file.as_str())
                .collect::<std::collections::HashSet<_>>()
                .len();
            println!();
            println!(
                "Found {} violation(s) in {} file(s)",
                violations.len(),
                file_count
            );
        }
    }

    fn output_json(
        &self,
        violations: &[FileViolation],
        engine: &ValidationEngine,
        total_files: usize,
        analyzed_path: &str,
    ) {
        let formatter = JsonFormatter::with_registry(engine.registry());
        println!(
            "{}",
            formatter.format(violations, total_files, analyzed_path)
        );
    }

    fn output_ndjson(
        &self,
        violations: &[FileViolation],
        engine: &ValidationEngine,
        total_files: usize,
        analyzed_path: &str,
    ) -> Result<()> {
        let formatter = JsonFormatter::with_registry(engine.registry());
        let mut stdout = io::stdout().lock();
        formatter.format_ndjson(violations, total_files, analyzed_path, &mut stdout)?;
        Ok(())
    }

    fn output_pretty(&self, violations: &[FileViolation], sources: &HashMap<String, String>) {
        let formatter = PrettyFormatter::with_sources(sources.clone());
        print!("{}", formatter.format(violations));
    }

    fn output_sarif(&self, violations: &[FileViolation], engine: &ValidationEngine) {
        let formatter = SarifFormatter::with_registry(engine.registry());
        println!("{}", formatter.format(violations));
    }
}

fn discover_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        if is_supported_file(path) {
            return Ok(vec![path.to_path_buf()]);
        } else {
            return Ok(vec![]);
        }
    }

    let files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    debug!("Discovered {} files under {}", files.len(), path.display());

    Ok(files)
}

fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name == "node_modules")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn discover_files_finds_single_html_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("index.html");
        File::create(&file_path).unwrap();

        let files = discover_files(&file_path).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0], file_path);
    }

    #[test]
    fn discover_files_finds_files_in_directory() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.html")).unwrap();
        File::create(dir.path().join("b.htm")).unwrap();
        File::create(dir.path().join("c.html")).unwrap();

        let files = discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn discover_files_ignores_unsupported_extensions() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("page.html")).unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        File::create(dir.path().join("styles.css")).unwrap();

        let files = discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn discover_files_skips_hidden_directories() {
        let dir = tempdir().unwrap();
        let hidden_dir = dir.path().join(".hidden");
        fs::create_dir(&hidden_dir).unwrap();
        File::create(hidden_dir.join("hidden.html")).unwrap();
        File::create(dir.path().join("visible.html")).unwrap();

        let files = discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].to_string_lossy().contains("visible.html"));
    }

    #[test]
    fn discover_files_skips_node_modules() {
        let dir = tempdir().unwrap();
        let nm_dir = dir.path().join("node_modules");
        fs::create_dir(&nm_dir).unwrap();
        File::create(nm_dir.join("dep.html")).unwrap();
        File::create(dir.path().join("page.html")).unwrap();

        let files = discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].to_string_lossy().contains("page.html"));
    }

    #[test]
    fn discover_files_recursive() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("pages");
        fs::create_dir(&subdir).unwrap();
        File::create(dir.path().join("index.html")).unwrap();
        File::create(subdir.join("nested.htm")).unwrap();

        let files = discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn discover_files_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert!(discover_files(&missing).is_err());
    }

    #[test]
    fn is_supported_file_accepts_html_extensions() {
        assert!(is_supported_file(Path::new("index.html")));
        assert!(is_supported_file(Path::new("index.htm")));
    }

    #[test]
    fn is_supported_file_rejects_other_extensions() {
        assert!(!is_supported_file(Path::new("page.md")));
        assert!(!is_supported_file(Path::new("page.json")));
        assert!(!is_supported_file(Path::new("page.vue")));
        assert!(!is_supported_file(Path::new("page")));
    }

    fn check_args(path: PathBuf, impact: Option<&str>) -> CheckArgs {
        CheckArgs {
            path,
            format: "pretty".to_string(),
            fail_on_warnings: false,
            impact: impact.map(|s| s.to_string()),
            no_color: false,
        }
    }

    #[test]
    fn check_args_parse_impact_valid() {
        let args = check_args(PathBuf::from("."), Some("serious"));

        assert!(matches!(args.parse_impact().unwrap(), Impact::Serious));
    }

    #[test]
    fn check_args_parse_impact_defaults_to_minor() {
        let args = check_args(PathBuf::from("."), None);

        assert!(matches!(args.parse_impact().unwrap(), Impact::Minor));
    }

    #[test]
    fn check_args_parse_impact_invalid() {
        let args = check_args(PathBuf::from("."), Some("catastrophic"));

        assert!(args.parse_impact().is_err());
    }

    #[test]
    fn check_runs_validation_on_clean_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("clean.html");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "<html><body><main><h1>Welcome</h1><p>All good here.</p></main></body></html>"
        )
        .unwrap();

        let mut args = check_args(file_path, None);
        args.format = "json".to_string();

        // A clean file keeps run() from calling process::exit.
        assert!(args.run().is_ok());
    }

    #[test]
    fn check_handles_directory_without_html() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let args = check_args(dir.path().to_path_buf(), None);

        assert!(args.run().is_ok());
    }
}
