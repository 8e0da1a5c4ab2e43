// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use decal_editor::{EditorHost, TransformController};
use decal_gesture::{
    CaptureError, DragMode, GestureFrame, GestureState, PointerCapture, PointerId, PointerSample,
    TouchSample,
};
use decal_transform::{EditorConfig, Handle, ImageEntry, ImageId, Transform};
use kurbo::{Point, Size};

struct NoCapture;

impl PointerCapture for NoCapture {
    fn set_pointer_capture(&mut self, _: PointerId) {}

    fn release_pointer_capture(&mut self, _: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }
}

struct VecHost {
    images: Vec<ImageEntry>,
}

impl PointerCapture for VecHost {
    fn set_pointer_capture(&mut self, _: PointerId) {}

    fn release_pointer_capture(&mut self, _: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }
}

impl EditorHost for VecHost {
    fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    fn on_change(&mut self, images: Vec<ImageEntry>) {
        self.images = images;
    }
}

fn snapshot() -> Transform {
    Transform::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0))
}

fn pointer_path(len: usize) -> Vec<PointerSample> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            PointerSample::new(PointerId(1), (150.0 + t * 0.5, 150.0 + (t * 0.1).sin() * 20.0))
        })
        .collect()
}

fn bench_drag_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/drag_replay");
    let frame = GestureFrame {
        allow_rotation: true,
        ..GestureFrame::default()
    };

    for len in [64_usize, 1_024] {
        let path = pointer_path(len);
        group.throughput(Throughput::Elements(len as u64));

        for mode in [DragMode::Move, DragMode::Resize(Handle::Nw), DragMode::Rotate] {
            let name = match mode {
                DragMode::Move => "move",
                DragMode::Resize(_) => "resize",
                DragMode::Rotate => "rotate",
            };
            group.bench_with_input(BenchmarkId::new(name, len), &path, |b, path| {
                let mut state = GestureState::new();
                state.begin_drag(&mut NoCapture, 0_u32, mode, path[0], snapshot());
                b.iter(|| {
                    for sample in path {
                        black_box(state.pointer_move(*sample, &frame));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_pinch_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pinch_replay");
    let frame = GestureFrame::default();
    let len = 1_024_usize;
    let frames: Vec<TouchSample> = (0..len)
        .map(|i| {
            let spread = 20.0 + i as f64 * 0.25;
            TouchSample::new(&[Point::new(125.0 - spread, 125.0), Point::new(125.0 + spread, 125.0)])
        })
        .collect();
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("two_finger_spread", |b| {
        let mut state = GestureState::new();
        assert!(state.begin_pinch(&mut NoCapture, 0_u32, &frames[0], snapshot()));
        b.iter(|| {
            for touches in &frames {
                black_box(state.touch_move(touches, &frame));
            }
        });
    });

    group.finish();
}

fn bench_controller_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/move_emit");
    let path = pointer_path(256);

    // Each move rebuilds the full list, so cost grows with the layer count.
    for layers in [1_usize, 16, 128] {
        group.throughput(Throughput::Elements(path.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, &layers| {
            b.iter_batched(
                || {
                    let images = (0..layers)
                        .map(|i| {
                            ImageEntry::new(
                                format!("img-{i}"),
                                "data:",
                                Size::new(400.0, 300.0),
                                snapshot(),
                            )
                        })
                        .collect();
                    (VecHost { images }, TransformController::new(EditorConfig::default()))
                },
                |(mut host, mut editor)| {
                    let target = ImageId::from("img-0");
                    editor.pointer_down(&mut host, &target, DragMode::Move, path[0]);
                    for sample in &path {
                        editor.pointer_move(&mut host, *sample);
                    }
                    editor.pointer_up(&mut host, PointerId(1));
                    black_box(host.images);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_drag_replay,
    bench_pinch_replay,
    bench_controller_move
);
criterion_main!(benches);
