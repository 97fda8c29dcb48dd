//! Parser and aggregation throughput benchmarks.
//!
//! Every refresh re-parses the whole log, so parse cost grows with the log
//! for as long as the daemon runs.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `line` | One daemon-format line, one compact line, one rejected line |
//! | `log` | Whole-log parse at 1k and 10k lines, 5% malformed |
//! | `dashboard` | `Dashboard::build` over an already parsed log |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench parser_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sdash_core::config::DashboardConfig;
use sdash_core::parser::{parse_line, parse_lines};
use sdash_core::Dashboard;
use std::hint::black_box;

const DAEMON_LINE: &str = "[20240115_101544] ALERT: FIRE | Temp: 61.3C | Humidity: 15.0% | Distance: 238.7cm | Image: /alerts/FIRE_20240115_101544.jpg";
const COMPACT_LINE: &str = "[12:00:00 FIRE] | Temp:45.5C | Humidity:30.0% | Distance:120.0cm";
const BAD_LINE: &str = "[12:00:00] | Temp:45.5C | Humidity:n/a% | Distance:120.0cm";

/// `n` lines, every twentieth one malformed.
fn corpus(n: usize) -> String {
    let mut out = String::with_capacity(n * DAEMON_LINE.len());
    for i in 0..n {
        if i % 20 == 19 {
            out.push_str(BAD_LINE);
        } else {
            let kind = if i % 3 == 0 { "FIRE" } else { "INTRUDER" };
            out.push_str(&format!(
                "[20240115_{:06}] ALERT: {kind} | Temp: {:.1}C | Humidity: {:.1}% | Distance: {:.1}cm",
                i % 1_000_000,
                20.0 + (i % 40) as f64,
                30.0 + (i % 50) as f64,
                (i % 300) as f64,
            ));
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Single lines
// ---------------------------------------------------------------------------

fn line_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    group.throughput(Throughput::Elements(1));

    for (name, line) in [("daemon", DAEMON_LINE), ("compact", COMPACT_LINE), ("rejected", BAD_LINE)] {
        group.bench_with_input(BenchmarkId::new(name, ""), &line, |b, line| {
            b.iter(|| black_box(parse_line(black_box(line))))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Whole log
// ---------------------------------------------------------------------------

fn log_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("log");

    for n in [1_000usize, 10_000] {
        let text = corpus(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| black_box(parse_lines(text.lines())))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Dashboard derivation
// ---------------------------------------------------------------------------

fn dashboard_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let cfg = DashboardConfig::default();

    for n in [1_000usize, 10_000] {
        let events = parse_lines(corpus(n).lines());
        group.bench_with_input(BenchmarkId::from_parameter(n), &events, |b, events| {
            b.iter(|| black_box(Dashboard::build(events, Vec::new(), &cfg)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(parser_benches, line_bench, log_bench, dashboard_bench);
criterion_main!(parser_benches);
