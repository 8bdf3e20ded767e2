pub mod apply;
pub mod fmt;
pub mod new;

pub use apply::{apply, ApplyArgs};
pub use fmt::{fmt, FmtArgs};
pub use new::{new, NewArgs};

use anyhow::{anyhow, Result};
use clap::Args;
use statute_parser::{error::pretty, parse, Node};
use std::path::Path;

/// Output layout flags shared by every command that writes a document
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// Indent output (overrides config)
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Single-line output (overrides config)
    #[arg(long)]
    pub compact: bool,
}

impl LayoutArgs {
    pub fn pretty(&self) -> Option<bool> {
        match (self.pretty, self.compact) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Read and parse a document, rendering parse failures against the source
pub fn read_document(path: &Path) -> Result<(String, Node)> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read {}: {}", path.display(), e))?;

    let root = parse(&source).map_err(|e| {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        anyhow!("\n{}", pretty::format_error(&e, file_name, &source))
    })?;

    Ok((source, root))
}
