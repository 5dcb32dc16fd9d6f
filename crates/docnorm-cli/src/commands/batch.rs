//! Batch command - normalize multiple OCR payload files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::warn;

use super::process::normalize_file;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input payload files
    #[arg(required = true)]
    pattern: String,

    /// Directory for normalized output (default: next to each input)
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,

    /// Override the document type for every payload
    #[arg(short = 't', long)]
    document_type: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let mut normalized = 0usize;
    let mut failed = 0usize;

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)?;
    }

    for entry in glob::glob(&args.pattern)? {
        let input = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!("skipping unreadable path: {err}");
                failed += 1;
                continue;
            }
        };

        match normalize_file(&input, args.document_type.as_deref()) {
            Ok(result) => {
                let output = if args.pretty {
                    serde_json::to_string_pretty(&result)?
                } else {
                    serde_json::to_string(&result)?
                };
                let target = output_path(&input, args.out_dir.as_deref());
                fs::write(&target, output)?;
                println!("{} {}", style("ok").green(), target.display());
                normalized += 1;
            }
            Err(err) => {
                eprintln!("{} {}: {err}", style("failed").red(), input.display());
                failed += 1;
            }
        }
    }

    println!(
        "{} {normalized} normalized, {failed} failed",
        style("Done:").bold()
    );

    if normalized == 0 && failed > 0 {
        anyhow::bail!("no payloads normalized");
    }
    Ok(())
}

fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("payload");
    let name = format!("{stem}.normalized.json");
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
