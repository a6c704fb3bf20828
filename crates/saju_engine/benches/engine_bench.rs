use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{FourPillars, analyze_yongshen};
use saju_calendar::{LunisolarCalendar, SolarDate};
use saju_engine::{ASTRONOMICAL, STANDARD, TRADITIONAL, day_pillar_from_date, get_four_pillars};
use saju_time::{CivilAdapter, CivilTime};

fn pillars_bench(c: &mut Criterion) {
    let cal = LunisolarCalendar::KOREAN;
    let t = CivilTime::new(1990, 5, 15, 14, 30, 0, 540);

    let mut group = c.benchmark_group("pillars");
    group.bench_function("day_pillar_from_date", |b| {
        b.iter(|| day_pillar_from_date(black_box(SolarDate::new(2024, 2, 10))))
    });
    for preset in [&STANDARD, &TRADITIONAL, &ASTRONOMICAL] {
        group.bench_function(format!("get_four_pillars/{}", preset.key), |b| {
            b.iter(|| get_four_pillars(&CivilAdapter, black_box(&t), preset, &cal))
        });
    }
    group.finish();
}

fn yongshen_bench(c: &mut Criterion) {
    let chart = FourPillars::from_labels(["甲子", "丙寅", "甲辰", "乙亥"]).unwrap();

    let mut group = c.benchmark_group("yongshen");
    group.bench_function("analyze_yongshen", |b| {
        b.iter(|| analyze_yongshen(black_box(&chart)))
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, yongshen_bench);
criterion_main!(benches);
