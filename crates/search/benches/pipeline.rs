//! Benchmarks for the search pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grocer_catalog::{Catalog, Category, Product, Store, Unit};
use grocer_search::{fuzzy_matches, search, search_many, SearchCriteria, SortDirection, SortKey};

fn create_catalog(count: usize) -> Vec<Product> {
    let words = ["Milk", "Bread", "Cheese", "Apples", "Rice", "Coffee", "Tea", "Pasta"];
    (0..count)
        .map(|i| {
            let name = format!("{} {}", words[i % words.len()], i);
            let category = Category::ALL[i % Category::ALL.len()];
            Store::ALL.into_iter().enumerate().fold(
                Product::new(format!("b{}", i).as_str(), name, category),
                |p, (s, store)| {
                    let price = 1.0 + ((i * 7 + s * 3) % 50) as f64 / 10.0;
                    p.with_offer(store, price, Unit::Each, (i + s) % 3 != 0)
                },
            )
        })
        .collect()
}

fn bench_fuzzy(c: &mut Criterion) {
    c.bench_function("fuzzy_substring", |b| {
        b.iter(|| fuzzy_matches(black_box("Milk - Full Cream"), black_box("cream")))
    });
    c.bench_function("fuzzy_typo", |b| {
        b.iter(|| fuzzy_matches(black_box("Spaghetti"), black_box("spagetti")))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [30, 1000, 10000].iter() {
        let catalog = create_catalog(*size);
        let criteria = SearchCriteria::new()
            .with_query("chese")
            .at_store(Store::Coles)
            .sorted_by(SortKey::Price, SortDirection::Asc);

        group.bench_with_input(BenchmarkId::new("query_store_price", size), size, |b, _| {
            b.iter(|| search(black_box(&catalog), black_box(&criteria), Store::Coles))
        });
    }

    group.finish();
}

fn bench_search_many(c: &mut Criterion) {
    let catalog = Catalog::seeded();
    let batch: Vec<SearchCriteria> = Category::ALL
        .into_iter()
        .map(|category| SearchCriteria::new().in_category(category))
        .collect();

    c.bench_function("search_many_by_category", |b| {
        b.iter(|| search_many(black_box(catalog.products()), black_box(&batch), Store::Woolworths))
    });
}

criterion_group!(benches, bench_fuzzy, bench_search, bench_search_many);
criterion_main!(benches);
