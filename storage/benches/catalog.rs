use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chorus_storage::test_utils::{CatalogCase, generate_catalog};

const CASE: CatalogCase = CatalogCase::new(100, 50, 4, 10);

fn benchmark_like_song(c: &mut Criterion) {
    let catalog = generate_catalog(CASE);

    c.bench_function("chorus_storage: Catalog::like_song", |b| {
        b.iter_batched(
            || catalog.clone(),
            |mut catalog| {
                for user in 0..CASE.users {
                    let _ = catalog.like_song(&user.to_string(), black_box("Song 49-3-9"));
                }
                catalog
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn benchmark_create_playlist_on_length(c: &mut Criterion) {
    let catalog = generate_catalog(CASE);

    c.bench_function("chorus_storage: Catalog::create_playlist_on_length", |b| {
        b.iter_batched(
            || catalog.clone(),
            |mut catalog| {
                let _ = catalog.create_playlist_on_length("0", "Bench", black_box(200));
                catalog
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn benchmark_most_popular(c: &mut Criterion) {
    let mut catalog = generate_catalog(CASE);
    for user in 0..CASE.users {
        let _ = catalog.like_song(&user.to_string(), "Song 10-1-5");
    }

    c.bench_function("chorus_storage: Catalog::most_popular_song", |b| {
        b.iter(|| black_box(catalog.most_popular_song()));
    });
    c.bench_function("chorus_storage: Catalog::most_popular_artist", |b| {
        b.iter(|| black_box(catalog.most_popular_artist()));
    });
}

criterion_group!(
    benches,
    benchmark_like_song,
    benchmark_create_playlist_on_length,
    benchmark_most_popular
);
criterion_main!(benches);
