//! Criterion benchmarks comparing full and symmetric pair evaluation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use thirdlaw::simulation::forces::ForceSet;
use thirdlaw::{Engine, ForceMode, MassConvention, NVec2, Parameters, Simulation, System};

const SIZES: [usize; 4] = [10, 100, 500, 1000];

fn bench_force_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_accumulation");

    for n in SIZES {
        let sys = System::initialize(n);
        let mut out = vec![NVec2::zeros(); n];

        for mode in [ForceMode::Full, ForceMode::Symmetric] {
            let set = ForceSet::gravity(mode, 6.673e-11, MassConvention::Legacy);
            group.bench_with_input(BenchmarkId::new(format!("{mode:?}"), n), &n, |b, _| {
                b.iter(|| std::hint::black_box(set.accumulate_forces(&sys, &mut out)));
            });
        }
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_4_steps");
    group.sample_size(20);

    for n in [100, 1000] {
        for mode in [ForceMode::Full, ForceMode::Symmetric] {
            group.bench_with_input(BenchmarkId::new(format!("{mode:?}"), n), &n, |b, &n| {
                b.iter(|| {
                    let engine = Engine::new(mode);
                    let mut sim = Simulation::initialize(n, Parameters::default(), engine)
                        .expect("default parameters are valid");
                    std::hint::black_box(sim.run())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_force_accumulation, bench_full_run);
criterion_main!(benches);
