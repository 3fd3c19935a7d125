use crate::aggregate::WeightedTermMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One document's total weighted frequency for one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: String,
    pub tf: f32,
}

/// Append-only mapping from stem to posting list. Created empty, mutated once
/// per document, read-only once analytics begin.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    pub postings: HashMap<String, Vec<Posting>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one posting per `(stem, tf)` entry, creating lists as needed.
    /// Never rewrites or removes prior postings. Submitting the same `doc_id`
    /// twice stacks duplicate postings rather than merging; callers must
    /// submit each document at most once.
    pub fn add_document(&mut self, doc_id: &str, terms: &WeightedTermMap) {
        for (stem, tf) in terms {
            self.postings.entry(stem.clone()).or_default().push(Posting {
                doc_id: doc_id.to_string(),
                tf: *tf,
            });
        }
    }

    /// Number of distinct `doc_id` values across all posting lists. A
    /// document that produced no postings is invisible here.
    pub fn documents_indexed(&self) -> usize {
        self.postings
            .values()
            .flatten()
            .map(|p| p.doc_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of distinct stem keys.
    pub fn unique_terms(&self) -> usize {
        self.postings.len()
    }
}
