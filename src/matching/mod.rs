//! Name matching for the contact list.
//!
//! This module provides the case-insensitive substring filter and the
//! LCS-based similarity ranking applied to every search query.

pub mod similarity_filter;

pub use similarity_filter::{lcs_length, similarity_score, ScoredContact, SimilarityFilter};
