use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twinlog::fmt::{render_line_at, strip_ansi};
use twinlog::{Level, LevelDescriptor, LogRecord};

fn make_record() -> LogRecord {
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    LogRecord::new("src/server.rs:120", "server/LocalHttpRequestFilter")
        .stamped_at("benchmark log message with \"quotes\" and ünïcødé", &at)
}

fn bench_render_line(c: &mut Criterion) {
    let record = make_record();
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let mut group = c.benchmark_group("render_line");

    for level in Level::all() {
        let descriptor = LevelDescriptor::describe(level);
        group.bench_function(level.as_str(), |b| {
            b.iter(|| render_line_at(black_box(&record), &descriptor, &at));
        });
    }

    group.finish();
}

fn bench_strip_ansi(c: &mut Criterion) {
    let record = make_record();
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let colored = render_line_at(&record, &LevelDescriptor::describe(Level::Warn), &at)
        .expect("render failed");
    let plain = strip_ansi(&colored);

    let mut group = c.benchmark_group("strip_ansi");
    group.bench_function("colored", |b| b.iter(|| strip_ansi(black_box(&colored))));
    group.bench_function("plain", |b| b.iter(|| strip_ansi(black_box(&plain))));
    group.finish();
}

fn bench_stamp(c: &mut Criterion) {
    let base = LogRecord::new("src/server.rs:120", "server");
    c.bench_function("LogRecord::stamped", |b| {
        b.iter(|| base.stamped(black_box("message")));
    });
}

criterion_group!(benches, bench_render_line, bench_strip_ansi, bench_stamp);
criterion_main!(benches);
