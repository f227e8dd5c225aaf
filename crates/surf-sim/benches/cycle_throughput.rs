use criterion::{criterion_group, criterion_main, Criterion};
use surf_core::derive_substream_seed;
use surf_sim::{NoiseModel, PauliRates, SurfaceCode};

fn noise() -> NoiseModel {
    NoiseModel::new(
        PauliRates::new(0.01, 0.005, 0.01),
        PauliRates::new(0.01, 0.005, 0.01),
        0.02,
    )
}

fn bench_runs(c: &mut Criterion) {
    let mut code = SurfaceCode::new(0, 5, noise()).unwrap();
    let mut substream = 0u64;

    c.bench_function("make_run_d5_c20", |b| {
        b.iter(|| {
            substream += 1;
            let seed = derive_substream_seed(99, substream);
            code.make_run(seed, 20).unwrap()
        })
    });

    let mut code7 = SurfaceCode::new(0, 7, noise()).unwrap();
    c.bench_function("make_run_d7_c20", |b| {
        b.iter(|| {
            substream += 1;
            let seed = derive_substream_seed(99, substream);
            code7.make_run(seed, 20).unwrap()
        })
    });
}

criterion_group!(benches, bench_runs);
criterion_main!(benches);
