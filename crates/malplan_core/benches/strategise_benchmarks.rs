//! Criterion benchmarks for malplan_core
//!
//! Run with: cargo bench -p malplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use malplan_core::config::{ProjectBuilder, RegionBuilder};
use malplan_core::interventions::extract_regions;
use malplan_core::model::{Project, RegionInterventions, Scenario};
use malplan_core::strategise::{SweepBounds, strategise};

fn create_project(region_count: usize) -> Project {
    let mut builder = ProjectBuilder::new("Benchmark");
    for i in 0..region_count {
        let mut region = RegionBuilder::new(format!("Region {i}"))
            .population(10_000.0 + 500.0 * i as f64)
            .routine_distribution(i % 2 == 0)
            .cases(Scenario::NoIntervention, [400.0, 390.0, 385.0, 380.0]);
        for (offset, scenario) in Scenario::ALL[1..].iter().enumerate() {
            let reduction = 5.0 + offset as f64 * 3.0 + (i % 7) as f64;
            region = region.post_intervention_cases(
                *scenario,
                [390.0 - reduction, 385.0 - reduction, 380.0 - reduction],
            );
        }
        builder = builder.region(region);
    }
    builder.build()
}

fn extracted(region_count: usize) -> Vec<RegionInterventions> {
    extract_regions(&create_project(region_count).regions)
}

fn bench_extract_regions(c: &mut Criterion) {
    let project = create_project(100);
    c.bench_function("extract_100_regions", |b| {
        b.iter(|| extract_regions(black_box(&project.regions)))
    });
}

fn bench_strategise(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategise");

    for region_count in [10, 100, 500] {
        let regions = extracted(region_count);
        let bounds = SweepBounds::from_regions(&regions);
        group.bench_with_input(
            BenchmarkId::from_parameter(region_count),
            &regions,
            |b, regions| b.iter(|| strategise(black_box(regions), black_box(&bounds))),
        );
    }

    group.finish();
}

fn bench_sweep_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_points");
    let regions = extracted(100);

    for points in [50, 200, 1_000] {
        let bounds = SweepBounds::from_regions(&regions).with_points(points);
        group.bench_with_input(BenchmarkId::from_parameter(points), &bounds, |b, bounds| {
            b.iter(|| strategise(black_box(&regions), black_box(bounds)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_regions,
    bench_strategise,
    bench_sweep_points,
);
criterion_main!(benches);
