//! Behavioral tests for the similarity-ranked contact filter.
//!
//! These tests pin down the observable guarantees of the filter over
//! realistic address book data: inclusion, ordering, and stability.

use contacts_mcp_server::matching::{similarity_score, SimilarityFilter};
use contacts_mcp_server::models::Contact;

fn address_book() -> Vec<Contact> {
    [
        ("Alice Smith", "+1 555 0101"),
        ("Bob Alicea", "+1 555 0102"),
        ("Carl", "+1 555 0103"),
        ("ALICE", "+1 555 0104"),
        ("Malice Cooper", "+1 555 0105"),
        ("Dr. Alic", "+1 555 0106"),
        ("Zoë Ålicé", "+1 555 0107"),
        ("", "+1 555 0108"),
    ]
    .iter()
    .map(|(name, phone)| Contact::new(*name, *phone))
    .collect()
}

fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_empty_query_returns_full_corpus_in_order() {
    let corpus = address_book();
    let result = SimilarityFilter::new().filter(&corpus, "");
    assert_eq!(result, corpus);
}

#[test]
fn test_inclusion_matches_case_insensitive_substring() {
    let corpus = address_book();
    let filter = SimilarityFilter::new();

    for query in ["alice", "ALI", "c", "smith", "ö", "Ålicé", "nobody"] {
        let result = filter.filter(&corpus, query);
        let needle = query.to_lowercase();

        for contact in &result {
            assert!(
                contact.name.to_lowercase().contains(&needle),
                "{:?} should not match {:?}",
                contact.name,
                query
            );
        }

        for contact in corpus.iter().filter(|c| !result.contains(c)) {
            assert!(
                !contact.name.to_lowercase().contains(&needle),
                "{:?} should match {:?}",
                contact.name,
                query
            );
        }
    }
}

#[test]
fn test_alice_query_ranks_shorter_name_first() {
    let corpus = vec![
        Contact::new("Alice Smith", "1"),
        Contact::new("Bob Alicea", "2"),
        Contact::new("Carl", "3"),
    ];

    let result = SimilarityFilter::new().filter(&corpus, "alice");

    // Both have all five query letters in common; the shorter name is closer
    assert_eq!(names(&result), vec!["Bob Alicea", "Alice Smith"]);
}

#[test]
fn test_results_ordered_by_descending_score() {
    let corpus = address_book();
    let filter = SimilarityFilter::new();

    let ranked = filter.rank(&corpus, "alice");
    assert_eq!(ranked[0].contact.name, "ALICE");
    assert_eq!(ranked[0].score, 0);

    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    for scored in &ranked {
        assert_eq!(scored.score, similarity_score(&scored.contact.name, "alice"));
    }
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let corpus = vec![
        Contact::new("Jo B", "1"),
        Contact::new("Jo A", "2"),
        Contact::new("Jo C", "3"),
        Contact::new("Jo", "4"),
    ];

    let result = SimilarityFilter::new().filter(&corpus, "jo");
    assert_eq!(names(&result), vec!["Jo", "Jo B", "Jo A", "Jo C"]);

    let mut reversed = corpus.clone();
    reversed.reverse();
    let result = SimilarityFilter::new().filter(&reversed, "jo");
    assert_eq!(names(&result), vec!["Jo", "Jo C", "Jo A", "Jo B"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let corpus = address_book();
    let filter = SimilarityFilter::new();

    for query in ["", "alice", "c", "o"] {
        let once = filter.filter(&corpus, query);
        let twice = filter.filter(&once, query);
        assert_eq!(once, twice, "query {:?}", query);
    }
}

#[test]
fn test_self_similarity_is_maximal() {
    for contact in address_book() {
        let own = similarity_score(&contact.name, &contact.name);
        assert_eq!(own, 0);
        assert_eq!(similarity_score(&contact.name, &contact.name.to_uppercase()), 0);
        assert!(similarity_score(&contact.name, "alice") <= own);
    }
}

#[test]
fn test_unicode_lowercasing() {
    let corpus = address_book();
    let result = SimilarityFilter::new().filter(&corpus, "ZOË");
    assert_eq!(names(&result), vec!["Zoë Ålicé"]);
}

#[test]
fn test_filter_is_shareable_across_threads() {
    let filter = SimilarityFilter::new();
    let handles: Vec<_> = ["alice", "carl", "zo"]
        .into_iter()
        .map(|query| {
            std::thread::spawn(move || {
                let corpus = address_book();
                filter.filter(&corpus, query).len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![4, 1, 1]);
}
