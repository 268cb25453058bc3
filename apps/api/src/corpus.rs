//! Résumé corpus — precomputed embeddings for nearest-neighbor retrieval.
//!
//! Loaded once at startup from a JSON file and shared read-only as
//! `Arc<ResumeCorpus>`. Retrieval is independent of the scoring chain: it
//! surfaces the most similar known résumés for a given JD embedding.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::scoring::similarity::cosine_similarity;

/// One precomputed corpus entry: cleaned résumé text plus its embedding.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusEntry {
    pub text: String,
    pub embedding: Vec<f32>,
}

/// Static corpus of precomputed résumé embeddings.
pub struct ResumeCorpus {
    entries: Vec<CorpusEntry>,
}

impl ResumeCorpus {
    /// Loads the corpus from a JSON array of `{text, embedding}` objects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus file {}", path.display()))?;
        let entries: Vec<CorpusEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse corpus file {}", path.display()))?;
        info!("loaded {} corpus embeddings", entries.len());
        Ok(Self { entries })
    }

    /// A corpus with no entries; retrieval against it returns nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to `top_k` corpus texts by descending cosine similarity to
    /// `query`. Ties keep their original corpus order (the sort is stable).
    pub fn search(&self, query: &[f32], top_k: usize) -> Vec<&str> {
        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, cosine_similarity(query, &entry.embedding)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(top_k)
            .map(|(i, _)| self.entries[i].text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, embedding: Vec<f32>) -> CorpusEntry {
        CorpusEntry {
            text: text.to_string(),
            embedding,
        }
    }

    #[test]
    fn test_search_orders_by_similarity() {
        let corpus = ResumeCorpus::from_entries(vec![
            entry("weak", vec![1.0, 0.0]),
            entry("strong", vec![0.0, 1.0]),
            entry("medium", vec![0.5, 0.5]),
        ]);
        let hits = corpus.search(&[0.0, 1.0], 3);
        assert_eq!(hits, vec!["strong", "medium", "weak"]);
    }

    #[test]
    fn test_search_respects_top_k() {
        let corpus = ResumeCorpus::from_entries(vec![
            entry("a", vec![1.0, 0.0]),
            entry("b", vec![0.0, 1.0]),
            entry("c", vec![0.5, 0.5]),
        ]);
        assert_eq!(corpus.search(&[0.0, 1.0], 2).len(), 2);
    }

    #[test]
    fn test_search_ties_keep_corpus_order() {
        let corpus = ResumeCorpus::from_entries(vec![
            entry("first", vec![0.0, 1.0]),
            entry("second", vec![0.0, 1.0]),
        ]);
        assert_eq!(corpus.search(&[0.0, 1.0], 2), vec!["first", "second"]);
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let corpus = ResumeCorpus::empty();
        assert!(corpus.search(&[1.0, 0.0], 5).is_empty());
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_empty_query_still_returns_entries_with_zero_score() {
        // Degenerate query scores everything 0.0; order falls back to corpus order.
        let corpus = ResumeCorpus::from_entries(vec![
            entry("a", vec![1.0, 0.0]),
            entry("b", vec![0.0, 1.0]),
        ]);
        assert_eq!(corpus.search(&[], 2), vec!["a", "b"]);
    }
}
