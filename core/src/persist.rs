use crate::index::{TermCounts, TermKind};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default index file name, written to the working directory.
pub const INDEX_FILE_NAME: &str = "unigram_index.txt";

/// Serialize the unigram portion of `counts` to `path`, truncating any
/// existing file.
///
/// One line per term: `<term>\t<doc_id>:<count> <doc_id>:<count> ...`.
/// Terms of any other kind are filtered out, and the kind tag itself is not
/// written. Neither terms nor doc entries are sorted; the order follows the
/// mapping's own iteration order and may vary between runs.
pub fn write_unigram_index(counts: &TermCounts, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create index file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for (term, docs) in &counts.map {
        if term.kind != TermKind::Unigram {
            continue;
        }
        let entries: Vec<String> = docs
            .iter()
            .map(|(doc_id, count)| format!("{doc_id}:{count}"))
            .collect();
        writeln!(out, "{}\t{}", term.text, entries.join(" "))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Term;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_one_line_per_unigram() {
        let mut tc = TermCounts::new();
        tc.add(Term::unigram("foo"), "d1");
        tc.add(Term::unigram("foo"), "d1");
        tc.add(Term::unigram("bar"), "d2");

        let dir = tempdir().unwrap();
        let path = dir.path().join(INDEX_FILE_NAME);
        write_unigram_index(&tc, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines: Vec<_> = text.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["bar\td2:1", "foo\td1:2"]);
    }

    #[test]
    fn non_unigram_terms_are_filtered_out() {
        let mut tc = TermCounts::new();
        tc.add(Term::unigram("york"), "d1");
        tc.add(Term::bigram("new york"), "d1");

        let dir = tempdir().unwrap();
        let path = dir.path().join(INDEX_FILE_NAME);
        write_unigram_index(&tc, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("york\t"));
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(INDEX_FILE_NAME);
        fs::write(&path, "stale contents\n").unwrap();

        write_unigram_index(&TermCounts::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
