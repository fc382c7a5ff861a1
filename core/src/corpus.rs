use crate::index::{Term, TermCounts};
use crate::tokenizer::tokenize;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Line tallies for one corpus file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Lines that carried a tab separator and were counted.
    pub indexed_lines: usize,
    /// Lines without a tab separator, skipped.
    pub skipped_lines: usize,
}

/// List the `.txt` files directly inside `dir`, in directory-listing order
/// (not stable across platforms). Subdirectories are not descended into.
/// Symlinks are followed: an entry counts as a file if its target is one, so
/// a directory named `*.txt` is still excluded.
/// Fails if the directory cannot be read.
pub fn scan_corpus(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(".txt") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Count term occurrences per document for one corpus file.
///
/// Each line is `<doc_id><TAB><body>`: the field before the first tab,
/// trimmed, names the document; the rest is tokenized and every token
/// increments the (unigram, doc_id) count by one. Lines with no tab are
/// skipped and tallied in the returned stats, never an error. Repeated
/// doc_ids across lines accumulate.
pub fn count_file(path: &Path) -> Result<(TermCounts, FileStats)> {
    let file = File::open(path)
        .with_context(|| format!("failed to open corpus file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut counts = TermCounts::new();
    let mut stats = FileStats::default();
    for line in reader.lines() {
        let line = line?;
        if let Some((doc_id, body)) = line.split_once('\t') {
            let doc_id = doc_id.trim();
            for token in tokenize(body.trim()) {
                counts.add(Term::unigram(token), doc_id);
            }
            stats.indexed_lines += 1;
        } else {
            stats.skipped_lines += 1;
        }
    }

    if stats.skipped_lines > 0 {
        tracing::warn!(
            file = %path.display(),
            skipped = stats.skipped_lines,
            "skipped lines without a tab separator"
        );
    }
    Ok((counts, stats))
}
