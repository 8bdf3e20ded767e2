use super::LayoutArgs;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use statute_editor::Document;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// File to create (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing file
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let doc = Document::seed();
    let source = config.serializer(args.layout.pretty()).serialize(doc.root());

    let Some(output) = args.output else {
        print!("{}", source);
        return Ok(());
    };

    let path = PathBuf::from(cwd).join(output);
    if path.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to replace it)",
            path.display()
        ));
    }

    std::fs::write(&path, source)?;
    println!("{} Created {}", "✓".green(), path.display());

    Ok(())
}
