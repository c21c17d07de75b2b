// Benchmark for the overlap resolver
// Measures layout of crowded days in both column modes

use chrono::{Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_timetable::models::event::Event;
use rust_timetable::services::layout::{layout, LayoutOptions};

// Staggered half-hour to two-hour events packed between 08:00 and 20:00
fn crowded_day(count: usize) -> Vec<Event> {
    let day_start = Local
        .with_ymd_and_hms(2025, 3, 12, 8, 0, 0)
        .single()
        .expect("valid benchmark date");

    (0..count)
        .map(|i| {
            let offset = ((i * 37) % 660) as i64;
            let length = 30 + ((i * 13) % 90) as i64;
            let start = day_start + chrono::Duration::minutes(offset);
            Event {
                id: format!("event-{}", i),
                title: format!("Event {}", i),
                start,
                end: start + chrono::Duration::minutes(length),
                color: None,
            }
        })
        .collect()
}

fn bench_per_cluster_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_cluster_layout");
    let options = LayoutOptions::new(0, 24, 15, 60.0, 600.0);

    for count in [10, 100, 1000].iter() {
        let events = crowded_day(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| layout(black_box(events), black_box(&options)));
        });
    }

    group.finish();
}

fn bench_global_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("global_layout");
    let options = LayoutOptions::new(0, 24, 15, 60.0, 600.0).legacy();

    for count in [10, 100, 1000].iter() {
        let events = crowded_day(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| layout(black_box(events), black_box(&options)));
        });
    }

    group.finish();
}

fn bench_slot_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_granularity");
    let events = crowded_day(100);

    for slot in [5u32, 15, 60].iter() {
        let options = LayoutOptions::new(0, 24, *slot, 60.0, 600.0).legacy();
        group.bench_with_input(BenchmarkId::from_parameter(slot), &options, |b, options| {
            b.iter(|| layout(black_box(&events), black_box(options)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_per_cluster_layout,
    bench_global_layout,
    bench_slot_granularity
);
criterion_main!(benches);
