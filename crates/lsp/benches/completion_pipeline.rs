//! End-to-end request benchmarks
//!
//! Measures tokenize + parse + resolve and tokenize + parse + lint through
//! the language service. Parsing returns a prebuilt tree, so the numbers
//! cover everything except a real parser.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dbdl_lsp::{LanguageService, ServiceConfig};
use dbdl_test_utils::{Fixture, StaticParser, TableFixture};

fn fixture(tables: usize) -> Fixture {
    let tables: Vec<_> = (0..tables)
        .map(|t| {
            let mut table = TableFixture::new(format!("t{t}"));
            for c in 0..10 {
                table = table.column(&format!("col_{c}"), "varchar");
            }
            table.index(&["col_1", ""], None)
        })
        .collect();
    Fixture::tables(&tables)
}

fn bench_requests(c: &mut Criterion) {
    for size in [1, 10, 50] {
        let fixture = fixture(size);
        let offset = fixture.offset_after("(col_1, ");
        let service = LanguageService::new(
            ServiceConfig::new("MySQL"),
            Box::new(StaticParser::new(fixture.tree.clone())),
        )
        .unwrap();

        let mut group = c.benchmark_group(format!("requests/{size}_tables"));
        group.bench_function(BenchmarkId::from_parameter("completion"), |b| {
            b.iter(|| black_box(service.completion_request(black_box(&fixture.source), offset)));
        });
        group.bench_function(BenchmarkId::from_parameter("lint"), |b| {
            b.iter(|| black_box(service.lint_request(black_box(&fixture.source))));
        });
        group.finish();
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_requests
);

criterion_main!(benches);
