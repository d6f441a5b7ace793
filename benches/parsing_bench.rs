//! Reply parsing and request building benchmarks

use careercraft::models::gemini::GenerateContentResponse;
use careercraft::services::classifier::{classify_failure, parse_error_body};
use careercraft::services::parser::*;
use careercraft::services::prompts::{build_request, roadmap_prompt};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

fn questions_reply(count: usize) -> String {
    let questions: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "question": format!("Question number {} about system design?", i),
                "tip": "Structure the answer with the STAR method."
            })
        })
        .collect();
    format!("```json\n{}\n```", serde_json::to_string_pretty(&questions).unwrap())
}

fn roadmap_reply(count: usize) -> String {
    let milestones: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "milestone": format!("Milestone {}", i),
                "timeframe": format!("{}-{} months", i * 6, (i + 1) * 6),
                "skills": ["Communication", "Architecture", "Mentoring"]
            })
        })
        .collect();
    serde_json::to_string(&milestones).unwrap()
}

/// Benchmark structured reply parsing
fn bench_reply_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("reply_parsing");

    for count in [5, 20, 100] {
        let questions = questions_reply(count);
        group.bench_with_input(
            BenchmarkId::new("interview_questions", count),
            &questions,
            |b, text| b.iter(|| parse_interview_questions(black_box(text))),
        );

        let roadmap = roadmap_reply(count);
        group.bench_with_input(BenchmarkId::new("roadmap", count), &roadmap, |b, text| {
            b.iter(|| parse_roadmap(black_box(text), "Engineering Manager"))
        });
    }

    let analysis = r#"{"score": 82, "feedback": ["a", "b", "c", "d", "e"]}"#;
    group.bench_function("resume_analysis", |b| {
        b.iter(|| parse_resume_analysis(black_box(analysis)))
    });

    let titles = "Data Engineer, ML Engineer, Platform Engineer, Analytics Engineer, SRE";
    group.bench_function("recommendations", |b| {
        b.iter(|| parse_recommendations(black_box(titles)))
    });

    group.finish();
}

/// Benchmark response envelope handling
fn bench_envelopes(c: &mut Criterion) {
    let success = json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": questions_reply(5)}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 340, "totalTokenCount": 460}
    })
    .to_string();

    c.bench_function("response_first_text", |b| {
        b.iter(|| {
            let response: GenerateContentResponse =
                serde_json::from_str(black_box(&success)).unwrap();
            response.first_text().map(str::len)
        })
    });

    let quota = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
    c.bench_function("classify_failure", |b| {
        b.iter(|| {
            let body = parse_error_body(black_box(quota));
            classify_failure(429, body.as_ref())
        })
    });
}

/// Benchmark request construction and serialization
fn bench_request_building(c: &mut Criterion) {
    let skills: Vec<String> = ["Rust", "Kubernetes", "PostgreSQL", "gRPC"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    c.bench_function("build_roadmap_request", |b| {
        b.iter(|| {
            let prompt = roadmap_prompt(black_box(&skills), "Staff Engineer");
            let request = build_request(&prompt, "You are a career development expert.");
            serde_json::to_vec(&request).unwrap()
        })
    });
}

criterion_group!(benches, bench_reply_parsing, bench_envelopes, bench_request_building);
criterion_main!(benches);
