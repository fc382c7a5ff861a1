use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};
use unidex_core::corpus::{count_file, scan_corpus};
use unidex_core::index::TermCounts;
use unidex_core::persist::{write_unigram_index, INDEX_FILE_NAME};

#[derive(Parser)]
#[command(name = "unidex")]
#[command(about = "Build a unigram inverted index from tab-separated corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from the .txt files in a corpus directory
    Build {
        /// Corpus directory; each line of each .txt file is <doc_id><TAB><text>
        #[arg(long, default_value = ".")]
        corpus: String,
        /// Output index file path
        #[arg(long, default_value = INDEX_FILE_NAME)]
        output: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, output } => build_index(&corpus, &output),
    }
}

fn build_index(corpus: &str, output: &str) -> Result<()> {
    let start = Instant::now();

    let files = scan_corpus(Path::new(corpus))?;
    tracing::info!(corpus, files = files.len(), "scanned corpus");
    if files.is_empty() {
        tracing::warn!(corpus, "no .txt files found; the index will be empty");
    }

    let mut index = TermCounts::new();
    let mut indexed_lines = 0usize;
    let mut skipped_lines = 0usize;
    for file in &files {
        let (counts, stats) = count_file(file)?;
        tracing::debug!(
            file = %file.display(),
            terms = counts.len(),
            indexed = stats.indexed_lines,
            skipped = stats.skipped_lines,
            "counted file"
        );
        indexed_lines += stats.indexed_lines;
        skipped_lines += stats.skipped_lines;
        index.merge(counts);
    }

    write_unigram_index(&index, Path::new(output))?;
    tracing::info!(
        files = files.len(),
        terms = index.len(),
        indexed_lines,
        skipped_lines,
        took_s = start.elapsed().as_secs_f64(),
        output,
        "index build complete"
    );
    Ok(())
}
