// Copyright 2025 the Decal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use decal_editor::layers;
use decal_transform::{EditorConfig, ImageEntry, ImageId};
use kurbo::Size;

fn list(len: usize) -> Vec<ImageEntry> {
    let config = EditorConfig::default();
    (0..len)
        .map(|i| ImageEntry::placed(format!("img-{i}"), "data:", Size::new(640.0, 480.0), &config))
        .collect()
}

fn bench_layer_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("layers");

    for len in [8_usize, 64, 512] {
        let images = list(len);
        let bottom = ImageId::from("img-0");

        group.bench_with_input(BenchmarkId::new("bring_to_front", len), &images, |b, images| {
            b.iter(|| black_box(layers::brought_to_front(images, &bottom)));
        });
        group.bench_with_input(BenchmarkId::new("reorder", len), &images, |b, images| {
            b.iter(|| black_box(layers::reordered(images, 0, len - 1)));
        });
        group.bench_with_input(BenchmarkId::new("without", len), &images, |b, images| {
            b.iter(|| black_box(layers::without(images, &bottom)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layer_ops);
criterion_main!(benches);
