use super::{read_document, LayoutArgs};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use statute_editor::{parse_script, Document, Mutation, NodeFactory};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Document to edit
    pub file: PathBuf,

    /// JSON array of mutations to apply in order
    #[arg(short, long)]
    pub script: PathBuf,

    /// Write the result here instead of over the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let cwd = PathBuf::from(cwd);

    let path = cwd.join(&args.file);
    let (source, root) = read_document(&path)?;

    let script_path = cwd.join(&args.script);
    let script = std::fs::read_to_string(&script_path)
        .map_err(|e| anyhow!("Cannot read {}: {}", script_path.display(), e))?;
    let mutations = parse_script(&script)
        .map_err(|e| anyhow!("Invalid script {}: {}", args.script.display(), e))?;

    let mut doc = Document::with_factory(root, NodeFactory::for_session(&source))
        .with_numbering(config.manual_numbering);

    // Progress goes to stderr when the document itself goes to stdout
    let report = |line: String| {
        if args.stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    let mut rejected = 0;
    for (index, mutation) in mutations.iter().enumerate() {
        match doc.try_apply(mutation) {
            Ok(next) => {
                report(format!("  {} {}", "✓".green(), describe(mutation)));
                doc = next;
            }
            Err(e) => {
                rejected += 1;
                report(format!(
                    "  {} #{} {} - {}",
                    "✗".red(),
                    index + 1,
                    describe(mutation),
                    e.to_string().red()
                ));
            }
        }
    }

    let output = config.serializer(args.layout.pretty()).serialize(doc.root());

    if args.stdout {
        print!("{}", output);
    } else {
        let target = args.output.as_ref().map(|o| cwd.join(o)).unwrap_or(path);
        std::fs::write(&target, output)?;
        report(format!("{} Wrote {}", "✓".green(), target.display()));
    }

    if rejected > 0 {
        report(format!(
            "{} {} of {} mutations rejected",
            "⚠️".yellow(),
            rejected,
            mutations.len()
        ));
    }

    Ok(())
}

fn describe(mutation: &Mutation) -> String {
    match mutation {
        Mutation::Select { path } => format!("select {}", path),
        Mutation::UpdateContent { path, .. } => format!("update {}", path),
        Mutation::AddNode { kind } => format!("add {}", kind),
        Mutation::MoveNode {
            source,
            target,
            position,
            ..
        } => format!("move {} {:?} {}", source, position, target).to_lowercase(),
    }
}
