use ambar_core::{clean_lines, scan};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const UNIT: &str = r#"// accumulate products
std::vector<int> products(const std::vector<int>& a, const std::vector<int>& b) {
    std::vector<int> out; /* no reserve */
    for (int x : a) {
        for (int y : b) {
            out.push_back(x * y);
        }
    }
    std::string log;
    log += "done";
    int* tmp = new int[16];
    delete tmp;
    return out;
}
"#;

fn document(copies: usize) -> String {
    UNIT.repeat(copies)
}

fn benchmark_scan(c: &mut Criterion) {
    let small = document(1);
    let large = document(500);

    c.bench_function("scan_small_document", |b| {
        b.iter(|| black_box(scan(black_box(&small))));
    });
    c.bench_function("scan_large_document", |b| {
        b.iter(|| black_box(scan(black_box(&large))));
    });
    c.bench_function("strip_comments_large_document", |b| {
        b.iter(|| black_box(clean_lines(black_box(&large).split('\n'))));
    });
}

criterion_group!(benches, benchmark_scan);
criterion_main!(benches);
