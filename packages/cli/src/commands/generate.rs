use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use uxcore_compiler_live_templates::{emit, generate as generate_document};
use uxcore_manifest::{Manifest, RealFileSystem};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Library manifest (overrides config)
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub out_file: Option<String>,

    /// Template name prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let project_dir = PathBuf::from(cwd).join(&args.path).display().to_string();
    let mut config = Config::load(&project_dir)?;

    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }
    if let Some(out_file) = args.out_file {
        config.out_file = out_file;
    }
    if let Some(prefix) = args.prefix {
        config.prefix = prefix;
    }

    let manifest_path = config.get_manifest_path(&project_dir);
    let manifest = Manifest::load(&manifest_path, &RealFileSystem)
        .with_context(|| format!("Cannot load manifest {}", manifest_path.display()))?;
    let options = config.to_template_options();

    if args.stdout {
        let document = generate_document(&manifest, &options);
        eprintln!("Found {} components", document.component_count());
        println!("{}", document.xml);
        return Ok(());
    }

    println!("{}", "🔨 Generating live templates...".bright_blue().bold());

    let out_path = config.get_out_path(&project_dir);
    let summary = emit(&manifest, &options, &out_path, &RealFileSystem)?;

    println!("Found {} components", summary.component_count);
    println!(
        "{} Wrote {}",
        "✅".green(),
        summary.output_path.display()
    );

    Ok(())
}
