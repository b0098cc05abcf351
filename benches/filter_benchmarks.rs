use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cim_specification::{
    Color, ColorSpecification, Filter, GenericFilter, Product, Size, SizeSpecification,
    Specification,
};

fn catalog(len: usize) -> Vec<Product> {
    (0..len)
        .map(|i| {
            Product::new(
                format!("item_{}", i),
                Color::ALL[i % Color::ALL.len()],
                Size::ALL[(i / Color::ALL.len()) % Size::ALL.len()],
            )
        })
        .collect()
}

fn benchmark_and_specification_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_specification_filter");
    let specs = ColorSpecification::<Product>::new(Color::Red).and(SizeSpecification::new(Size::Small));
    let filter = GenericFilter::<Product>::new();

    for len in [10, 1_000, 100_000] {
        let items = catalog(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| filter.filter(black_box(items), black_box(&specs)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_and_specification_filter);
criterion_main!(benches);
