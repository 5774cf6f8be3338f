// ABOUTME: Criterion benchmarks for the meal analysis pipeline
// ABOUTME: Measures detection, aggregation, and end-to-end analysis for text and image inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the analysis engine.
//!
//! Keyword matching scans the whole description once per table entry, so the
//! detection benches grow the input to catch regressions there.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrient_ai_server::intelligence::{
    analyze_image, analyze_text, detect_from_text, sum_nutrients,
};

const SHORT_MEAL: &str = "I had rice and dal";
const FULL_MEAL: &str = "Breakfast was milk, a banana and an egg. Lunch was chapati with dal, \
                         rice, spinach and mixed vegetables.";

/// Build a description of `words` words with a few foods sprinkled in
fn long_description(words: usize) -> String {
    const FILLER: [&str; 6] = ["with", "some", "extra", "spicy", "homemade", "sauce"];
    (0..words)
        .map(|i| match i % 50 {
            7 => "rice",
            23 => "spinach",
            41 => "egg",
            n => FILLER[n % FILLER.len()],
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    for words in [10_usize, 100, 1000] {
        let text = long_description(words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("detect_from_text", words), &text, |b, text| {
            b.iter(|| detect_from_text(black_box(text)));
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let items = detect_from_text(FULL_MEAL);
    let mut group = c.benchmark_group("aggregation");
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("sum_nutrients", |b| {
        b.iter(|| sum_nutrients(black_box(&items)));
    });
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    group.bench_function("text_short", |b| {
        b.iter(|| analyze_text(black_box(SHORT_MEAL)));
    });
    group.bench_function("text_full", |b| {
        b.iter(|| analyze_text(black_box(FULL_MEAL)));
    });

    let bytes = vec![0_u8; 64 * 1024];
    group.bench_function("image_fallback", |b| {
        b.iter(|| analyze_image(black_box("IMG_2041.jpg"), black_box(&bytes)));
    });

    group.finish();
}

criterion_group!(benches, bench_detection, bench_aggregation, bench_analysis);
criterion_main!(benches);
