//! Retrieval index over resume sections.
//!
//! Each of the four sections becomes one chunk (`"Education:\n..."`). The
//! index ranks chunks against a query and hands the best `k` to the chain.
//! Ranking is lexical (cosine over term counts); it lives behind
//! [`Retriever`] so an embedding store can take its place.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::resume::{ParsedResume, Section};
use crate::resume::normalize::clean_text;

/// Section order in the index. Ties in ranking resolve in this order.
const CHUNK_ORDER: [Section; 4] = [
    Section::Education,
    Section::Skills,
    Section::Projects,
    Section::Experience,
];

/// Words too common in questions to say anything about a section.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "can", "do", "does", "for", "from", "have", "how",
    "i", "in", "is", "it", "me", "my", "of", "on", "or", "should", "the", "to", "what", "which",
    "with", "you", "your",
];

/// One indexed piece of the resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chunk {
    pub section: Section,
    pub text: String,
}

/// Builds the four section chunks. Skills are joined with `", "`, other
/// sections one line per entry.
pub fn build_chunks(resume: &ParsedResume) -> Vec<Chunk> {
    CHUNK_ORDER
        .iter()
        .map(|&section| {
            let separator = if section == Section::Skills { ", " } else { "\n" };
            Chunk {
                section,
                text: format!(
                    "{}:\n{}",
                    section.label(),
                    resume.section(section).join(separator)
                ),
            }
        })
        .collect()
}

/// Ranks indexed chunks against a free-text query.
pub trait Retriever: Send + Sync {
    /// Up to `k` chunks, best first.
    fn retrieve(&self, query: &str, k: usize) -> Vec<Chunk>;
}

/// In-memory term-count index over the section chunks.
#[derive(Debug, Clone)]
pub struct ResumeIndex {
    entries: Vec<IndexedChunk>,
}

#[derive(Debug, Clone)]
struct IndexedChunk {
    chunk: Chunk,
    terms: HashMap<String, f64>,
    norm: f64,
}

impl ResumeIndex {
    pub fn from_resume(resume: &ParsedResume) -> Self {
        Self::from_chunks(build_chunks(resume))
    }

    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        let entries = chunks
            .into_iter()
            .map(|chunk| {
                let terms = term_counts(&chunk.text);
                let norm = vector_norm(&terms);
                IndexedChunk { chunk, terms, norm }
            })
            .collect();
        Self { entries }
    }
}

impl Retriever for ResumeIndex {
    /// Always returns `min(k, len)` chunks, even when nothing overlaps the
    /// query, the same as a nearest-neighbour vector store would.
    fn retrieve(&self, query: &str, k: usize) -> Vec<Chunk> {
        let query_terms = term_counts(query);
        let query_norm = vector_norm(&query_terms);

        let mut scored: Vec<(f64, &IndexedChunk)> = self
            .entries
            .iter()
            .map(|entry| (cosine(&query_terms, query_norm, entry), entry))
            .collect();

        // stable sort keeps section order for equal scores
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(k)
            .map(|(_, entry)| entry.chunk.clone())
            .collect()
    }
}

fn term_counts(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for token in clean_text(text).split_whitespace() {
        let token = token.trim_matches(|c| c == '.' || c == '-');
        if token.is_empty() || STOPWORDS.contains(&token) {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

fn vector_norm(terms: &HashMap<String, f64>) -> f64 {
    terms.values().map(|v| v * v).sum::<f64>().sqrt()
}

fn cosine(query: &HashMap<String, f64>, query_norm: f64, entry: &IndexedChunk) -> f64 {
    if query_norm == 0.0 || entry.norm == 0.0 {
        return 0.0;
    }
    let dot: f64 = query
        .iter()
        .filter_map(|(term, q)| entry.terms.get(term).map(|c| q * c))
        .sum();
    dot / (query_norm * entry.norm)
}
