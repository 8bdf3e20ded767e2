mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, fmt, new, ApplyArgs, FmtArgs, NewArgs};
use tracing_subscriber::EnvFilter;

/// Statute CLI - structural editing for legislation documents
#[derive(Parser, Debug)]
#[command(name = "statute")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editing decisions (insertion points, moves, rejections)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new Act from the starter template
    New(NewArgs),

    /// Parse a document and rewrite it in canonical form
    Fmt(FmtArgs),

    /// Apply a JSON mutation script to a document
    Apply(ApplyArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("STATUTE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| ".".to_string());

    let result = match cli.command {
        Command::New(args) => new(args, &cwd),
        Command::Fmt(args) => fmt(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
