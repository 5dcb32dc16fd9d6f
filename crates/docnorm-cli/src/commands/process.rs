//! Process command - normalize a single OCR payload file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use docnorm_core::{normalize_extraction, DocumentType, NormalizedExtraction, RawExtraction};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input JSON payload from the document-intelligence provider
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the document type declared in the payload
    #[arg(short = 't', long)]
    document_type: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a field-by-field summary instead of JSON
    #[arg(long)]
    summary: bool,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let result = normalize_file(&args.input, args.document_type.as_deref())?;

    if args.summary {
        print_summary(&result);
        return Ok(());
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Read, deserialize, and normalize one payload file.
pub(crate) fn normalize_file(
    input: &Path,
    document_type_override: Option<&str>,
) -> anyhow::Result<NormalizedExtraction> {
    if !input.exists() {
        anyhow::bail!("input file not found: {}", input.display());
    }

    let payload = fs::read_to_string(input)?;
    let raw: RawExtraction = serde_json::from_str(&payload)?;

    let document_type: DocumentType = match document_type_override {
        Some(tag) => tag.parse()?,
        None => raw.document_type()?,
    };

    info!("processing {} as {}", input.display(), document_type);
    Ok(normalize_extraction(document_type, &raw.fields))
}

fn print_summary(result: &NormalizedExtraction) {
    println!(
        "{} {} (overall confidence {:.2})",
        style("Document:").bold(),
        result.document_type,
        result.overall_confidence
    );

    for (name, field) in &result.fields {
        let parsed = match &field.parsed {
            Some(value) => serde_json::to_string(value).unwrap_or_default(),
            None => style("unparsed").red().to_string(),
        };
        println!(
            "  {name:28} {parsed} ({:.2} {:?})",
            field.confidence.value, field.confidence.source
        );
    }
}
