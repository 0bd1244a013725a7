//! Benchmarks for classification and report building.

use criterion::{criterion_group, criterion_main, Criterion};
use seo_audit_tools::{build_report, classify, parse_payload_str, MetricKind};
use std::hint::black_box;

fn synthetic_payload(findings_per_tier: usize, recommendations: usize) -> String {
    let finding = |i: usize| {
        format!(
            r#"{{"title": "Finding {i}", "description": "Description {i}", "details": ["a", "b"]}}"#
        )
    };
    let tier: Vec<String> = (0..findings_per_tier).map(finding).collect();
    let tier = tier.join(",");

    let recommendation = |i: usize| {
        let priority = ["high", "medium", "low"][i % 3];
        format!(
            r#"{{"recommendation": "Rec {i}", "category": "Technical",
                "justification": "Because {i}", "actionItems": ["x", "y"],
                "priority": "{priority}"}}"#
        )
    };
    let recs: Vec<String> = (0..recommendations).map(recommendation).collect();
    let recs = recs.join(",");

    format!(
        r#"{{
            "summary": {{"url": "https://example.com", "score": 67}},
            "metrics": {{"lcp": 2.9, "fid": 110, "cls": 0.12,
                        "responseTime": 1.4, "pageSize": 3500000, "performanceScore": 67}},
            "findings": {{"critical": [{tier}], "recommended": [{tier}], "good": [{tier}]}},
            "recommendations": [{recs}]
        }}"#
    )
}

fn benchmark_classify(c: &mut Criterion) {
    c.bench_function("classify_all_metrics", |b| {
        b.iter(|| {
            for kind in MetricKind::ALL {
                black_box(classify(kind, black_box(2.4)));
            }
        })
    });
}

fn benchmark_build_report(c: &mut Criterion) {
    let payload_json = synthetic_payload(20, 30);
    let payload = parse_payload_str(&payload_json).expect("synthetic payload parses");

    c.bench_function("build_report_20x3_findings_30_recs", |b| {
        b.iter(|| black_box(build_report(black_box(&payload))))
    });
}

fn benchmark_parse_and_build(c: &mut Criterion) {
    let payload_json = synthetic_payload(20, 30);

    c.bench_function("parse_and_build", |b| {
        b.iter(|| {
            let payload = parse_payload_str(black_box(&payload_json)).expect("parses");
            black_box(build_report(&payload))
        })
    });
}

criterion_group!(
    benches,
    benchmark_classify,
    benchmark_build_report,
    benchmark_parse_and_build
);
criterion_main!(benches);
