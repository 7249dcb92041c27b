//! Benchmarks for the per-step particle update.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ledsand_engine::{
    EdgeMode, EngineSettings, FrameBuffer, ParticleEngine, Renderer, Rgb, TopologyKind,
};

fn filled_engine(width: u32, height: u32, settings: EngineSettings, fill: u32) -> ParticleEngine<FrameBuffer> {
    let renderer = FrameBuffer::new(width, height, settings.seed);
    let mut engine = match ParticleEngine::new(renderer, settings) {
        Ok(engine) => engine,
        Err(e) => panic!("bench setup failed: {}", e),
    };
    let grains = width * height * fill / 100;
    for _ in 0..grains {
        let colour = Rgb::random_bright(255, |lo, hi| engine.renderer_mut().random_int16(lo, hi));
        engine.add_particle(colour, 0, 0);
    }
    engine
}

fn bench_flat_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_step");

    for fill in [10u32, 40, 80] {
        group.bench_with_input(BenchmarkId::new("64x64", fill), &fill, |b, &fill| {
            let settings = EngineSettings { shake: 16, bounce_energy: 128, ..Default::default() };
            let mut engine = filled_engine(64, 64, settings, fill);
            engine.set_acceleration(0, -8);
            b.iter(|| {
                engine.step();
                black_box(engine.last_stats())
            })
        });
    }

    group.finish();
}

fn bench_cube_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube_step");

    group.bench_function("panel_16_fill_30", |b| {
        let settings = EngineSettings {
            shake: 16,
            bounce_energy: 128,
            edges: EdgeMode::Wrap,
            topology: TopologyKind::Cube { panel_size: 16 },
            ..Default::default()
        };
        let mut engine = filled_engine(48, 32, settings, 30);
        engine.set_acceleration_3d(3, -5, -8);
        b.iter(|| {
            engine.step();
            black_box(engine.last_stats())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_flat_step, bench_cube_step);
criterion_main!(benches);
