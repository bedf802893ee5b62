//! Benchmarks for easing evaluation and drawable ticks.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec2;
use tween_canvas::animation::{
    AnimationStep, CycleDirection, Drawable, DrawableConfig, FillColorAnimation,
    PositionAnimation, Rotation, ScaleAnimation,
};
use tween_canvas::demo::DemoScene;
use tween_canvas::options::Options;
use tween_canvas::renderer::recording::RecordingSurface;
use tween_canvas::util::color::{color_mix, Paint};
use tween_canvas::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    for f in EasingFunction::ALL {
        group.bench_function(f.name(), |b| {
            b.iter(|| black_box(f.evaluate(black_box(0.37))));
        });
    }
    group.finish();
}

fn color_mix_benchmark(c: &mut Criterion) {
    let green = [0.0, 255.0, 0.0, 1.0];
    let blue = [0.0, 0.0, 255.0, 1.0];
    c.bench_function("color_mix", |b| {
        b.iter(|| black_box(color_mix(&green, &blue, black_box(0.5))));
    });
}

fn busy_drawable() -> Drawable {
    let mut d = Drawable::new(DrawableConfig::default());
    let _ = d.position_animation.queued(
        PositionAnimation::new(1000.0, DVec2::new(800.0, 300.0))
            .with_easing(EasingFunction::EaseInOutCubic)
            .looped(),
    );
    let _ = d
        .scale_animation
        .queued(ScaleAnimation::new(200.0, 5.0).looped());
    let _ = d.rotate_animation.queued(AnimationStep::<Rotation>::cycle(
        10000.0,
        CycleDirection::Clockwise,
    ));
    let _ = d.fill_color_animation.queued(
        FillColorAnimation::new(3000.0, Paint::Rgba([0.0, 0.0, 255.0, 1.0]))
            .looped(),
    );
    d
}

fn drawable_step_benchmark(c: &mut Criterion) {
    let mut d = busy_drawable();
    c.bench_function("drawable_step", |b| {
        b.iter(|| black_box(d.step(black_box(16.0))));
    });
}

fn scene_frame_benchmark(c: &mut Criterion) {
    let mut scene = DemoScene::new(&Options::default(), 800.0, 600.0);
    let mut surface = RecordingSurface::new();
    c.bench_function("demo_scene_frame", |b| {
        b.iter(|| {
            surface.clear();
            let stepped = scene.step(black_box(20.0));
            let rendered = scene.render(&mut surface, 2.0);
            black_box((stepped, rendered))
        });
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    color_mix_benchmark,
    drawable_step_benchmark,
    scene_frame_benchmark
);
criterion_main!(benches);
