//! Snapshot build benchmarks.
//!
//! Measures transform + sort + serialize for boards of increasing size.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use flapboard::SourceRecord;
use flapboard::snapshot::build;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 9, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn records(count: usize) -> Vec<SourceRecord> {
    let start = now().date();
    (0..count)
        .map(|i| SourceRecord {
            category: Some("Housing".to_string()),
            description: Some(format!("Listing {i}")),
            date_posted: Some(
                (start - Duration::days((i * 7919 % 400) as i64) + Duration::days(30))
                    .format("%Y-%m-%d")
                    .to_string(),
            ),
            notes: Some("Contact for viewing".to_string()),
            status_text: Some("Open".to_string()),
        })
        .collect()
}

fn snapshot_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_build");

    for count in [100, 1_000, 10_000] {
        let input = records(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("build_and_serialize", count), &input, |b, input| {
            b.iter(|| {
                let snapshot = build(input.iter().cloned().map(Ok), now());
                snapshot.to_json().unwrap().len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, snapshot_build);
criterion_main!(benches);
