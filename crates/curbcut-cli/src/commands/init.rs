//! Init command - initializes Curbcut configuration in a project

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use curbcut_core::config::CONFIG_FILENAME;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Curbcut configuration file
# See https://github.com/kzn-tools/curbcut for documentation

# File patterns to include in validation
# include = ["pages/**/*.html"]

# File patterns to exclude from validation
# exclude = ["**/vendor/**"]

# Check configuration
[checks]
# Disable specific checks or violation ids
# disabled = ["link-name"]

# Toggle whole categories (both enabled by default)
# aria = true
# structure = true

# Override the impact of a violation id or check id
# [checks.impact]
# image-alt = "serious"

# Attribute names that mark an image decorative
# [checks.image_alt]
# markers = ["data-decorative"]

# Extra generic link phrases, and patterns for link names never flagged
# [checks.link_text]
# words = ["click this"]
# allowlist = ["^details for .*"]

# Heading level skips to tolerate (0 flags every skip)
# [checks.heading_order]
# max_skip = 0
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(&self) -> Result<()> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Config file '{}' already exists. Use --force to overwrite.",
                CONFIG_FILENAME
            );
        }

        fs::write(config_path, DEFAULT_CONFIG)?;
        println!(
            "{} Created {} configuration file",
            "✓".green().bold(),
            CONFIG_FILENAME.cyan()
        );
        Ok(())
    }
}
