//! Benchmark for the report tokenization hot path

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spaced_report::app::services::spaced_parser::{parse_str, segment_header, tokenize_line};

fn synthetic_report(rows: usize) -> String {
    let mut report = String::from(
        "       Team            P     W    L   D    F      A     Pts\n",
    );
    for row in 0..rows {
        report.push_str(&format!(
            "    {}. Team_{:04}       38    {:2}   9   3   {:2}  -  {:2}    87\n",
            row + 1,
            row,
            row % 30,
            row % 90,
            row % 60,
        ));
    }
    report
}

fn bench_tokenize_line(c: &mut Criterion) {
    let items = segment_header("       Team            P     W    L   D    F      A     Pts");
    let line = "    1. Arsenal         38    26   9   3   79  -  36    87";

    c.bench_function("tokenize_line", |b| {
        b.iter(|| tokenize_line(black_box(&items), black_box(line)))
    });
}

fn bench_parse_report(c: &mut Criterion) {
    let report = synthetic_report(1_000);

    c.bench_function("parse_str_1000_rows", |b| {
        b.iter(|| parse_str(black_box(&report)))
    });
}

criterion_group!(benches, bench_tokenize_line, bench_parse_report);
criterion_main!(benches);
