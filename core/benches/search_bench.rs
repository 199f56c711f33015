use criterion::{criterion_group, criterion_main, Criterion};
use search_core::{DocumentStatus, SearchIndex, StopWords};

const WORDS: &[&str] = &[
    "cat", "dog", "fluffy", "tail", "collar", "groomed", "eyes", "white", "black", "starling", "parrot", "hamster",
];

fn build_index(docs: i32) -> SearchIndex {
    let mut index = SearchIndex::new(StopWords::english());
    for id in 0..docs {
        let text: Vec<&str> = (0..8).map(|i| WORDS[(id as usize * 7 + i * 3) % WORDS.len()]).collect();
        index.add_document(id, &text.join(" "), DocumentStatus::Actual, &[id % 10, 3]).unwrap();
    }
    index
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("add_1000_documents", |b| b.iter(|| build_index(1000)));
    let index = build_index(10_000);
    c.bench_function("find_top_documents", |b| b.iter(|| index.find_top_documents("fluffy cat -parrot").unwrap()));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
