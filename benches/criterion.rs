use criterion::{black_box, criterion_group, criterion_main, Criterion};
use greeter::core::{greeting::greeting_service::print_it, size::size_service::size};

fn print_it_benchmark(c: &mut Criterion) {
    c.bench_function("print_it", |b| b.iter(|| print_it(black_box("Bob"))));
}

fn size_benchmark(c: &mut Criterion) {
    c.bench_function("size", |b| b.iter(|| size(black_box(99))));
}

criterion_group!(benches, print_it_benchmark, size_benchmark);
criterion_main!(benches);
