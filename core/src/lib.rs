//! Core library for building a unigram inverted index over tab-separated
//! text corpora: tokenization, corpus scanning, per-file counting, count
//! merging, and flat-file serialization.

pub mod corpus;
pub mod index;
pub mod persist;
pub mod tokenizer;

pub use corpus::{count_file, scan_corpus, FileStats};
pub use index::{DocCounts, Term, TermCounts, TermKind};
