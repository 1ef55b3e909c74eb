/// Benchmarks for the depscan structural scanner.
///
/// Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use depscan::infrastructure::ScanParser;
use depscan::ports::SourceParser;

/// Generate a synthetic source file with `num_methods` methods on one type.
fn synthetic_source(num_methods: usize) -> String {
    let mut src = String::from("impl Graph {\n");
    for i in 0..num_methods {
        src.push_str(&format!(
            "    /// Returns value {i}.\n    pub fn method_{i}(&self, x: usize) -> usize {{\n        method_{prev}(x) + {i}\n    }}\n",
            i = i,
            prev = i.saturating_sub(1),
        ));
    }
    src.push_str("}\n");
    src
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for size in [10usize, 100, 1000] {
        let src = synthetic_source(size);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter(|| ScanParser.parse("bench.rs", black_box(src)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
