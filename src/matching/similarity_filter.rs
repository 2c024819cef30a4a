//! Similarity-ranked contact filtering.
//!
//! A contact is kept when its lowercased name contains the lowercased query.
//! Kept contacts are ranked by an LCS-based score:
//!
//! ```text
//! score = 2 * lcs(name, query) - len(name) - len(query)
//! ```
//!
//! The score is `0` for identical strings and negative otherwise; the closer
//! to zero, the more similar. Lengths count characters, not bytes.

use crate::models::Contact;

/// A contact from the corpus paired with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredContact<'a> {
    /// The contact, borrowed from the corpus
    pub contact: &'a Contact,

    /// Similarity to the query (0 = identical, lower = less similar)
    pub score: i64,
}

/// Filters a contact corpus by name and ranks it by similarity to a query.
///
/// The filter holds no state and never mutates the corpus, so one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityFilter;

impl SimilarityFilter {
    /// Create a new SimilarityFilter.
    pub fn new() -> Self {
        Self
    }

    /// Return the contacts whose name contains `query`, most similar first.
    ///
    /// An empty query returns the whole corpus in its original order.
    pub fn filter(&self, corpus: &[Contact], query: &str) -> Vec<Contact> {
        self.rank(corpus, query)
            .into_iter()
            .map(|scored| scored.contact.clone())
            .collect()
    }

    /// Like [`filter`](Self::filter), but keeps the score of every result.
    ///
    /// Ties keep their corpus order. For an empty query every contact is
    /// returned unsorted, each scored against the empty string.
    pub fn rank<'a>(&self, corpus: &'a [Contact], query: &str) -> Vec<ScoredContact<'a>> {
        let query = query.to_lowercase();

        let mut selected: Vec<ScoredContact<'a>> = corpus
            .iter()
            .filter_map(|contact| {
                let name = contact.name.to_lowercase();
                if !name.contains(&query) {
                    return None;
                }
                Some(ScoredContact {
                    contact,
                    score: lowercase_score(&name, &query),
                })
            })
            .collect();

        if !query.is_empty() {
            // sort_by is stable
            selected.sort_by(|a, b| b.score.cmp(&a.score));
        }

        tracing::debug!(
            query_len = query.chars().count(),
            corpus_size = corpus.len(),
            result_count = selected.len(),
            "Filtered contacts"
        );

        selected
    }
}

/// Similarity between a contact name and a query, case-insensitively.
pub fn similarity_score(name: &str, query: &str) -> i64 {
    lowercase_score(&name.to_lowercase(), &query.to_lowercase())
}

fn lowercase_score(name: &str, query: &str) -> i64 {
    let lcs = lcs_length(name, query) as i64;
    2 * lcs - name.chars().count() as i64 - query.chars().count() as i64
}

/// Length of the longest common subsequence of two strings, by character.
///
/// Classic O(n·m) dynamic programming, keeping only two rows of the table.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];

    for ca in &a_chars {
        for (j, cb) in b_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
