use super::{read_document, LayoutArgs};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Document to format
    pub file: PathBuf,

    /// Fail if the file is not already formatted, without writing
    #[arg(long)]
    pub check: bool,

    /// Print the formatted document instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

pub fn fmt(args: FmtArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = PathBuf::from(cwd).join(&args.file);

    let (source, root) = read_document(&path)?;
    let formatted = config.serializer(args.layout.pretty()).serialize(&root);

    if args.check {
        if formatted != source {
            return Err(anyhow!("{} is not formatted", args.file.display()));
        }
        println!("{} {}", "✓".green(), args.file.display());
        return Ok(());
    }

    if args.stdout {
        print!("{}", formatted);
        return Ok(());
    }

    if formatted == source {
        println!("{} {} (unchanged)", "✓".green(), args.file.display());
    } else {
        std::fs::write(&path, formatted)?;
        println!("{} {}", "✓".green(), args.file.display());
    }

    Ok(())
}
