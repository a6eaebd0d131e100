//! qdeck - A terminal master-detail browser for question/answer study decks
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use qdeck_app::export;
use qdeck_core::chapter::ChapterSet;
use qdeck_core::dataset::Dataset;
use qdeck_core::prelude::*;

/// A terminal master-detail browser for question/answer study decks
#[derive(Parser, Debug)]
#[command(name = "qdeck")]
#[command(about = "Browse a question/answer study deck in the terminal", long_about = None)]
struct Args {
    /// Path to the dataset JSON file
    #[arg(value_name = "DATA", default_value = "data/data.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a record as a standalone HTML page
    Export {
        /// Record id to render (defaults to the first record)
        #[arg(long)]
        id: Option<u32>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to a file, since the TUI owns the terminal
    qdeck_core::logging::init()?;

    let result = match args.command {
        Some(Command::Export { id, output }) => export_page(&args.data, id, output).await,
        None => qdeck_tui::run(&args.data).await,
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}

/// Render one record's page to a file or stdout
async fn export_page(data: &PathBuf, id: Option<u32>, output: Option<PathBuf>) -> Result<()> {
    let dataset = Dataset::load(data)
        .await
        .context("export: failed to load dataset")?;
    let chapters = ChapterSet::default_set();

    let record = match id {
        Some(id) => dataset.find(id).ok_or(Error::UnknownRecord { id })?,
        None => dataset
            .first()
            .ok_or_else(|| Error::DatasetEmpty { path: data.clone() })?,
    };

    let page = export::render_page(&dataset, &chapters, record);

    match output {
        Some(path) => {
            std::fs::write(&path, &page)
                .map_err(|e| Error::export_write(&path, e.to_string()))?;
            info!("exported record {} to {}", record.id, path.display());
        }
        None => print!("{page}"),
    }

    Ok(())
}
