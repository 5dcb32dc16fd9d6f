//! Types command - list registered document types and their field tables.

use clap::Args;
use console::style;

use docnorm_core::document::tables::field_table;
use docnorm_core::DocumentType;

/// Arguments for the types command.
#[derive(Args)]
pub struct TypesArgs {
    /// Show only this document type
    #[arg(short = 't', long)]
    document_type: Option<String>,
}

pub fn run(args: TypesArgs) -> anyhow::Result<()> {
    let selected: Vec<DocumentType> = match &args.document_type {
        Some(tag) => vec![tag.parse()?],
        None => DocumentType::all().to_vec(),
    };

    for doc in selected {
        println!("{}", style(doc.as_str()).bold());
        let table = field_table(doc);
        if table.is_empty() {
            println!("  (all fields pass through)");
            continue;
        }
        for (name, kind) in table {
            println!("  {name:28} {kind:?}");
        }
    }

    Ok(())
}
