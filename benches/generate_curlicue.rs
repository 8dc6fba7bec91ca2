use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use curlicue_explorer::{
    CanvasStyle, CoordinateBuffers, DEFAULT_FORMULA, Formula, ParameterSet, PixelBuffer,
    generate_curlicue, golden_ratio, rasterise_polyline,
};
use std::hint::black_box;

const MAX_STEPS: usize = 10_000;

fn bench_generate(c: &mut Criterion) {
    let formula = Formula::compile(DEFAULT_FORMULA).expect("default formula compiles");
    let mut buffers = CoordinateBuffers::new(MAX_STEPS).expect("buffers allocate");
    let mut group = c.benchmark_group("generate_curlicue");

    for &step_count in &[2_000usize, MAX_STEPS] {
        let params = ParameterSet::new(golden_ratio(), 1.0, step_count, MAX_STEPS)
            .expect("bench parameters are valid");

        group.bench_with_input(BenchmarkId::from_parameter(step_count), &params, |b, params| {
            b.iter(|| {
                generate_curlicue(&formula, black_box(params), &mut buffers)
                    .expect("generation succeeds");
                black_box(buffers.xs(step_count).last().copied())
            })
        });
    }

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    c.bench_function("formula_compile", |b| {
        b.iter(|| Formula::compile(black_box("sin(s*i*i) + fmod(i, 7)/tau")).expect("compiles"))
    });
}

fn bench_rasterise(c: &mut Criterion) {
    let formula = Formula::compile(DEFAULT_FORMULA).expect("default formula compiles");
    let mut buffers = CoordinateBuffers::new(MAX_STEPS).expect("buffers allocate");
    let params = ParameterSet::new(golden_ratio(), 1.0, MAX_STEPS, MAX_STEPS)
        .expect("bench parameters are valid");
    generate_curlicue(&formula, &params, &mut buffers).expect("generation succeeds");

    let style = CanvasStyle::default();
    let mut canvas =
        PixelBuffer::new(style.viewport_size, style.viewport_size).expect("canvas allocates");

    c.bench_function("rasterise_polyline_10000", |b| {
        b.iter(|| {
            rasterise_polyline(
                black_box(buffers.xs(MAX_STEPS)),
                black_box(buffers.ys(MAX_STEPS)),
                &style,
                &mut canvas,
            );
            black_box(canvas.buffer_size())
        })
    });
}

criterion_group!(benches, bench_generate, bench_compile, bench_rasterise);
criterion_main!(benches);
