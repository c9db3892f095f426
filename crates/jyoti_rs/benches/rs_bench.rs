use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_rs::{BirthInput, ChartConfig, TimelineConfig, compute_chart, dasha_timeline};

fn chart_bench(c: &mut Criterion) {
    let birth = BirthInput::parse("1990-01-15", "08:30", 28.6139, 77.2090, 5.5)
        .expect("valid birth");
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("facade");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&birth), &config))
    });
    group.bench_function("dasha_timeline", |b| {
        b.iter(|| {
            dasha_timeline(
                black_box(&birth),
                &config,
                &TimelineConfig::default(),
                black_box(birth.julian_day() + 15_000.0),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
