use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Template name prefix
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Library manifest path
    #[arg(short, long, default_value = uxcore_manifest::DEFAULT_MANIFEST_NAME)]
    pub manifest: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing live-template generation...".bright_blue().bold()
    );

    let config = Config {
        prefix: args.prefix,
        manifest: args.manifest,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Dump the component library's exports to {}", config.manifest);
    println!("  2. Run: uxcore-templates generate");
    println!("  3. Check output in {}", config.out_file);

    Ok(())
}
