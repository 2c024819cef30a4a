//! Performance benchmarks for the similarity filter.
//!
//! Measures filtering cost as the address book grows and as queries get
//! longer (the LCS table grows with both name and query length).

use contacts_mcp_server::matching::SimilarityFilter;
use contacts_mcp_server::models::Contact;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carla", "Dmitri", "Elena", "Farah", "Gustavo", "Hiroshi", "Ines", "Jonas",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Alicea", "Nguyen", "Okafor", "Johansson", "Kowalski", "Martins", "Tanaka",
];

fn address_book(size: usize) -> Vec<Contact> {
    (0..size)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            Contact::new(format!("{} {}", first, last), format!("+1 555 {:04}", i))
        })
        .collect()
}

fn bench_corpus_size(c: &mut Criterion) {
    let filter = SimilarityFilter::new();
    let mut group = c.benchmark_group("filter_by_corpus_size");

    for size in [100, 1_000, 10_000] {
        let corpus = address_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| filter.filter(black_box(corpus), black_box("ali")));
        });
    }

    group.finish();
}

fn bench_query_length(c: &mut Criterion) {
    let filter = SimilarityFilter::new();
    let corpus = address_book(1_000);
    let mut group = c.benchmark_group("filter_by_query_length");

    for query in ["a", "ali", "alice", "alice smi"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| filter.filter(black_box(&corpus), black_box(query)));
        });
    }

    group.finish();
}

fn bench_empty_query(c: &mut Criterion) {
    let filter = SimilarityFilter::new();
    let corpus = address_book(1_000);

    c.bench_function("filter_empty_query", |b| {
        b.iter(|| filter.filter(black_box(&corpus), black_box("")));
    });
}

criterion_group!(benches, bench_corpus_size, bench_query_length, bench_empty_query);
criterion_main!(benches);
