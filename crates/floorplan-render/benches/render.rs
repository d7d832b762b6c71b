use criterion::{Criterion, black_box, criterion_group, criterion_main};

use floorplan_render::{CameraParams, RenderConfig, render_canvas, render_floor_plan};

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor_plan");
    let scene = floorplan_scene::floor_plan().unwrap();
    let cfg = RenderConfig::default();
    let params = CameraParams::default();
    group.bench_function("raster_1024x768", |b| {
        b.iter(|| black_box(render_canvas(&scene, &params, &cfg).unwrap()))
    });
    group.bench_function("jpeg_base64_1024x768", |b| {
        b.iter(|| black_box(render_floor_plan(&params)))
    });
    group.finish();
}

criterion_group!(benches, bench_raster);
criterion_main!(benches);
