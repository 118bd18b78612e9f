//! Explain command - provides detailed explanation of a check

use clap::Args;
use colored::Colorize;
use curbcut_core::checks::CheckCategory;
use curbcut_core::config::load_config_or_default_with_warnings;
use curbcut_core::engine::ValidationEngine;
use curbcut_core::violation::Impact;
use std::env;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[arg(
        value_name = "RULE_ID",
        help = "Check or violation id to explain (e.g., \"image-alt\", \"aria-invalid-role\")"
    )]
    pub rule_id: String,
}

impl ExplainArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let cwd = env::current_dir()?;
        let config_result = load_config_or_default_with_warnings(&cwd);
        let config = config_result.config;
        let engine = ValidationEngine::with_config(&config)?;
        let registry = engine.registry();

        let check = registry
            .check_for_rule(&self.rule_id)
            .or_else(|| registry.get_check_by_name(&self.rule_id));

        match check {
            Some(check) => {
                let metadata = check.metadata();
                let is_enabled = registry.is_check_enabled(metadata.id);

                println!();
                println!("{}", format!("Check {}", metadata.id).bold());
                println!();
                println!("  {}: {}", "Name".cyan(), metadata.name);
                println!("  {}: {}", "Description".cyan(), metadata.description);
                println!(
                    "  {}: {}",
                    "Category".cyan(),
                    format_category(&metadata.category)
                );
                println!("  {}: {}", "Impact".cyan(), format_impact(&metadata.impact));
                println!("  {}: {}", "Reports".cyan(), metadata.rules.join(", "));

                if let Some(url) = metadata.help_url {
                    println!("  {}: {}", "Documentation".cyan(), url);
                }

                println!();
                if is_enabled {
                    println!("  {}: {}", "Status".cyan(), "enabled".green());
                } else {
                    println!("  {}: {}", "Status".cyan(), "disabled".red());
                }
                println!();

                Ok(())
            }
            None => {
                eprintln!(
                    "{} No check found for '{}'",
                    "error:".red().bold(),
                    self.rule_id
                );
                eprintln!();
                eprintln!("Available checks:");

                for check in registry.checks() {
                    let meta = check.metadata();
                    eprintln!("  {} ({})", meta.id, meta.rules.join(", "));
                }

                std::process::exit(1);
            }
        }
    }
}

fn format_category(category: &CheckCategory) -> &'static str {
    match category {
        CheckCategory::Aria => "aria",
        CheckCategory::Structure => "structure",
    }
}

fn format_impact(impact: &Impact) -> String {
    match impact {
        Impact::Critical => "critical".red().to_string(),
        Impact::Serious => "serious".red().to_string(),
        Impact::Moderate => "moderate".yellow().to_string(),
        Impact::Minor => "minor".cyan().to_string(),
    }
}
