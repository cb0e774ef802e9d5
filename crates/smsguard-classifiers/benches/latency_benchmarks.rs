//! Latency benchmarks for the spam classifier
//!
//! Classification runs once per incoming message and should stay well under
//! a millisecond for SMS-sized input.
//!
//! Run with: cargo bench -p smsguard-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use smsguard_classifiers::{Classifier, KeywordMatching, SpamClassifier};

/// Benchmark classification across message shapes
fn benchmark_spam_classifier(c: &mut Criterion) {
    let classifier = SpamClassifier::new().expect("Failed to create spam classifier");
    let custom: Vec<String> = vec!["kampanya".into(), "fırsat".into(), "indirim".into()];
    let long_clean = "Toplantı yarın saat onda başlıyor, lütfen sunum dosyalarını getir. ".repeat(4);

    let test_cases = vec![
        ("exact_keyword", "bahis".to_string()),
        ("short_clean", "Akşam yemeğe geliyor musun?".to_string()),
        (
            "short_spam",
            "HEMEN KAYIT OL, 500 TL DENEME BONUSU!!! www.ornek.com".to_string(),
        ),
        ("long_clean", long_clean),
    ];

    let mut group = c.benchmark_group("Spam_Classifier");
    group.significance_level(0.05);
    group.sample_size(100);

    for (name, text) in &test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), text, |b, text| {
            b.iter(|| classifier.classify(black_box(text), Some("12345"), black_box(&custom)))
        });
    }

    group.finish();
}

/// Compare substring and word-boundary keyword matching
fn benchmark_matching_modes(c: &mut Criterion) {
    let text = "Yeni üyelere özel deneme bonusu ve freespin fırsatı, hemen oyna kazan";

    let mut group = c.benchmark_group("Keyword_Matching");

    for matching in [KeywordMatching::Substring, KeywordMatching::WordBoundary] {
        let classifier = SpamClassifier::new()
            .expect("Failed to create spam classifier")
            .with_matching(matching);

        group.bench_with_input(
            BenchmarkId::new("classify", format!("{:?}", matching)),
            &text,
            |b, text| b.iter(|| classifier.classify(black_box(text), None, &[])),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_spam_classifier, benchmark_matching_modes);
criterion_main!(benches);
