use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::{build_index, load_config, load_documents, run_queries};
use search_core::DocumentStatus;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Query an in-memory TF-IDF index built from JSON/JSONL documents", long_about = None)]
struct Cli {
    /// Input path (file or directory)
    #[arg(long, global = true, default_value = "./docs")]
    input: PathBuf,
    /// Space-separated stop words
    #[arg(long, global = true, default_value = "")]
    stop_words: String,
    /// Lowercase and NFKC-normalize every word
    #[arg(long, global = true, default_value_t = false)]
    normalize: bool,
    /// JSON file with ranking and request history settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents for each query and print them page by page
    Search {
        /// Only documents with this status
        #[arg(long, default_value = "actual")]
        status: DocumentStatus,
        #[arg(long, default_value_t = 2)]
        page_size: usize,
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Queries; a leading `-` marks a word that must not appear
        #[arg(required = true, allow_hyphen_values = true)]
        queries: Vec<String>,
    },
    /// Show which query words a document contains
    Match {
        #[arg(long, allow_negative_numbers = true)]
        id: i32,
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let docs = load_documents(&cli.input)?;
    let index = build_index(&docs, &cli.stop_words, cli.normalize, config)?;
    tracing::info!(documents = index.document_count(), "index ready");

    match cli.command {
        Commands::Search { status, page_size, json, queries } => {
            let report = run_queries(&index, &queries, status, page_size)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            for query in &report.queries {
                println!("{} ({} hits)", query.query, query.total_hits);
                for page in &query.pages {
                    for doc in page {
                        println!("{doc}");
                    }
                    println!("Page break");
                }
            }
            tracing::info!(no_result_requests = report.no_result_requests, "queries finished");
        }
        Commands::Match { id, query } => {
            let (words, status) = index.match_document(&query, id)?;
            println!("{{ document_id = {id}, status = {status}, words = {} }}", words.join(" "));
        }
    }
    Ok(())
}
