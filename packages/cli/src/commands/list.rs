use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use uxcore_compiler_live_templates::{collect, ComponentDescriptor};
use uxcore_manifest::{Manifest, RealFileSystem};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Library manifest (overrides config)
    #[arg(short, long)]
    pub manifest: Option<String>,
}

pub fn list(args: ListArgs, cwd: &str) -> Result<()> {
    let project_dir = PathBuf::from(cwd).join(&args.path).display().to_string();
    let mut config = Config::load(&project_dir)?;

    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }

    let manifest_path = config.get_manifest_path(&project_dir);
    let manifest = Manifest::load(&manifest_path, &RealFileSystem)
        .with_context(|| format!("Cannot load manifest {}", manifest_path.display()))?;
    let registry = collect(&manifest, &config.to_template_options());

    for descriptor in registry.values() {
        println!("{}", describe(descriptor, &config.prefix));
    }

    println!();
    println!("Found {} components", registry.len());

    Ok(())
}

fn describe(descriptor: &ComponentDescriptor, prefix: &str) -> String {
    let props: Vec<&str> = descriptor.prop_schema.iter().map(String::as_str).collect();
    let children = if descriptor.has_children {
        " [children]".dimmed().to_string()
    } else {
        String::new()
    };

    format!(
        "  {} {} {}{} ({})",
        descriptor.qualified_key.bright_white().bold(),
        "→".dimmed(),
        format!("{}{}", prefix, descriptor.alias).cyan(),
        children,
        props.join(", ")
    )
}
