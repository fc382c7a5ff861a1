use std::collections::HashMap;

/// The kinds of term the mapping can hold. The pipeline only produces
/// unigrams today; the tag lets other kinds share the same mapping, and the
/// index writer filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Unigram,
    Bigram,
}

/// A normalized term tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    pub kind: TermKind,
    pub text: String,
}

impl Term {
    pub fn unigram(text: impl Into<String>) -> Self {
        Self { kind: TermKind::Unigram, text: text.into() }
    }

    pub fn bigram(text: impl Into<String>) -> Self {
        Self { kind: TermKind::Bigram, text: text.into() }
    }
}

/// Per-document occurrence counts for one term. A document the term does not
/// occur in is absent, never present with count 0.
pub type DocCounts = HashMap<String, u64>;

/// Mapping from term to per-document occurrence counts. Built fresh per
/// corpus file, then folded into a global index with [`TermCounts::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    /// term -> doc_id -> occurrence count
    pub map: HashMap<Term, DocCounts>,
}

impl TermCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `term` in the document `doc_id`.
    pub fn add(&mut self, term: Term, doc_id: &str) {
        let docs = self.map.entry(term).or_default();
        if let Some(count) = docs.get_mut(doc_id) {
            *count += 1;
        } else {
            docs.insert(doc_id.to_owned(), 1);
        }
    }

    /// Merge `other` into `self`: counts for (term, doc_id) pairs present in
    /// both are summed, the rest is a plain union. Summing makes the merge
    /// associative and commutative, so a fold over per-file counts yields the
    /// same mapping regardless of file order.
    pub fn merge(&mut self, other: TermCounts) {
        for (term, docs) in other.map {
            let merged = self.map.entry(term).or_default();
            for (doc_id, count) in docs {
                *merged.entry(doc_id).or_insert(0) += count;
            }
        }
    }

    /// Number of distinct terms, all kinds included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
