// Criterion benchmarks for the Food Donation API request path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use food_donation_api::core::{build_route_url, match_report, parse_completion, validate_coordinates};
use food_donation_api::models::RouteRequest;

fn bench_validate_coordinates(c: &mut Criterion) {
    let req = RouteRequest::new(40.7128, -74.0060, 40.7589, -73.9851);

    c.bench_function("validate_coordinates", |b| {
        b.iter(|| validate_coordinates(black_box(&req)))
    });
}

fn bench_route_url(c: &mut Criterion) {
    let pair = match validate_coordinates(&RouteRequest::new(40.7128, -74.0060, 40.7589, -73.9851)) {
        Ok(pair) => pair,
        Err(e) => panic!("benchmark coordinates rejected: {}", e),
    };

    c.bench_function("build_route_url", |b| {
        b.iter(|| build_route_url(black_box("https://www.google.com/maps/dir"), black_box(&pair)))
    });
}

fn bench_parse_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_completion");

    let json_reply = r#"{"food": "rotis", "quantity": "20", "expiry": "4 hours", "location": "Delhi"}"#;
    group.bench_function("json_object", |b| b.iter(|| parse_completion(black_box(json_reply))));

    let text_reply = "You have 20 rotis in Delhi that expire in 4 hours.";
    group.bench_function("plain_text", |b| b.iter(|| parse_completion(black_box(text_reply))));

    group.finish();
}

fn bench_match_report(c: &mut Criterion) {
    c.bench_function("serialize_match_report", |b| {
        b.iter(|| serde_json::to_string(black_box(match_report())))
    });
}

criterion_group!(
    benches,
    bench_validate_coordinates,
    bench_route_url,
    bench_parse_completion,
    bench_match_report
);

criterion_main!(benches);
