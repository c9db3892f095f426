use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_vedic_base::{
    AyanamshaSystem, DashaLevel, Graha, NodeMode, ObliquityMode, TimelineConfig,
    VimshottariTimeline, ayanamsha_deg, lagna_points, motion, nakshatra_from_longitude,
    rashi_from_longitude, sidereal_longitude,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let t = 0.24;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri_mean", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(t)))
    });
    group.bench_function("lahiri_true", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::TrueLahiri, black_box(t)))
    });
    group.finish();
}

fn ephemeris_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("ephemeris");
    for graha in [Graha::Surya, Graha::Chandra, Graha::Guru, Graha::Rahu] {
        group.bench_function(graha.name(), |b| {
            b.iter(|| {
                sidereal_longitude(
                    graha,
                    black_box(jd),
                    AyanamshaSystem::Lahiri,
                    NodeMode::True,
                )
            })
        });
    }
    group.bench_function("motion_mangal", |b| {
        b.iter(|| motion(Graha::Mangal, black_box(jd), AyanamshaSystem::Lahiri, NodeMode::Mean))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("lagna_points", |b| {
        b.iter(|| {
            lagna_points(
                black_box(2_460_000.5),
                black_box(28.61),
                black_box(77.21),
                AyanamshaSystem::Lahiri,
                ObliquityMode::True,
            )
        })
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_447_907.0;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("timeline_new", |b| {
        b.iter(|| {
            VimshottariTimeline::new(black_box(birth_jd), black_box(211.3), TimelineConfig::default())
        })
    });
    group.bench_function("snapshot_prana", |b| {
        let mut timeline =
            VimshottariTimeline::new(birth_jd, 211.3, TimelineConfig::default()).unwrap();
        b.iter(|| timeline.snapshot(black_box(birth_jd + 20_000.0), DashaLevel::Pranadasha))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, ephemeris_bench, zodiac_bench, dasha_bench);
criterion_main!(benches);
