mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, list, GenerateArgs, InitArgs, ListArgs};
use tracing::Level;

/// UXCore live templates - IDE snippets for every exported component
#[derive(Parser, Debug)]
#[command(name = "uxcore-templates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log traversal details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default live-templates.config.json
    Init(InitArgs),

    /// Generate the live-template set from a library manifest
    Generate(GenerateArgs),

    /// List the components found in a library manifest
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Generate(args) => generate(args, &cwd),
        Command::List(args) => list(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
