//! Criterion benchmarks for Parley.
//!
//! Covers the startup path (feature extraction and classifier training) and
//! the per-turn path (analysis, prediction and reply resolution).

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use parley::analysis::analyzer::Analyzer;
use parley::analysis::analyzer::standard::StandardAnalyzer;
use parley::chat::ChatContext;
use parley::knowledge::{KnowledgeBase, QaEntry};
use parley::ml::intent_classifier::{self, IntentClassifier, TfIdfVectorizer};
use parley::ml::models::ClassifierConfig;

const WORDS: &[&str] = &[
    "hello", "there", "good", "morning", "evening", "name", "call", "help", "features", "weather",
    "sunny", "rain", "goodbye", "later", "thanks", "welcome", "order", "status", "refund",
    "account", "password", "reset", "shipping", "delivery",
];

/// Generate a knowledge base with `intents` labels and `per_intent` questions each.
fn generate_knowledge(intents: usize, per_intent: usize) -> KnowledgeBase {
    let mut knowledge = KnowledgeBase::default();
    for i in 0..intents {
        for j in 0..per_intent {
            let length = 3 + (i + j) % 5;
            let question = (0..length)
                .map(|k| WORDS[(i * 7 + j * 3 + k * 5) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            knowledge.add_entry(QaEntry::new(
                format!("{question} {i}{j}"),
                format!("intent_{i}"),
                format!("Answer for intent {i}"),
            ));
        }
    }
    knowledge
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let analyzer = StandardAnalyzer::new().unwrap();
    let text = "Hello there, what is the weather like this morning? Thanks a lot!";

    group.bench_function("analyze_sentence", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
            black_box(tokens)
        })
    });

    group.finish();
}

fn bench_tfidf(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfidf");
    let knowledge = generate_knowledge(10, 20);
    let documents: Vec<String> = knowledge.entries().iter().map(|e| e.question.clone()).collect();
    let analyzer: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::new().unwrap());

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("fit_transform", |b| {
        b.iter(|| {
            let mut vectorizer = TfIdfVectorizer::new(analyzer.clone());
            black_box(vectorizer.fit_transform(black_box(&documents)).unwrap())
        })
    });

    let mut vectorizer = TfIdfVectorizer::new(analyzer.clone());
    vectorizer.fit(&documents).unwrap();
    group.throughput(Throughput::Elements(1));
    group.bench_function("transform", |b| {
        b.iter(|| black_box(vectorizer.transform(black_box("good morning, any refund status?"))))
    });

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.sample_size(20);

    for (intents, per_intent) in [(2, 10), (6, 20), (20, 20)] {
        let knowledge = generate_knowledge(intents, per_intent);
        group.bench_function(format!("train_{intents}x{per_intent}"), |b| {
            b.iter(|| {
                black_box(
                    intent_classifier::train(black_box(&knowledge), &ClassifierConfig::default())
                        .unwrap(),
                )
            })
        });
    }

    let knowledge = generate_knowledge(6, 20);
    let classifier = intent_classifier::train(&knowledge, &ClassifierConfig::default()).unwrap();
    group.bench_function("predict", |b| {
        b.iter(|| black_box(classifier.predict(black_box("password reset for my account"))))
    });

    group.finish();
}

fn bench_respond(c: &mut Criterion) {
    let mut knowledge = generate_knowledge(6, 10);
    knowledge.add_entry(QaEntry::new("What is 2 + 2", "math", ""));
    knowledge.add_entry(QaEntry::new("What is 10 - 3", "math", ""));
    let context = ChatContext::train(knowledge, &ClassifierConfig::default()).unwrap();

    c.bench_function("respond_math", |b| {
        b.iter(|| black_box(context.respond(black_box("What is 12 * 12"))))
    });
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_tfidf,
    bench_classifier,
    bench_respond
);
criterion_main!(benches);
