// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gallery_lens::config::GalleryConfig;
use gallery_lens::gallery::{ItemContent, ItemRecord};
use gallery_lens::layout::{self, LayoutStyle, NaturalSize};
use std::hint::black_box;

const ITEM_COUNT: usize = 500;
const WIDTH: f32 = 1440.0;

fn items() -> Vec<ItemRecord> {
    (0..ITEM_COUNT)
        .map(|id| {
            let mut item = ItemRecord::new(id, format!("{id}.jpg"), ItemContent::Source);
            item.span_x = (id % 3) as u32 + 1;
            item.span_y = (id % 2) as u32 + 1;
            item
        })
        .collect()
}

/// Deterministic mix of landscape, portrait and square thumbnails.
fn natural_size(item: &ItemRecord) -> Option<NaturalSize> {
    Some(match item.id % 3 {
        0 => NaturalSize::new(1600.0, 900.0),
        1 => NaturalSize::new(800.0, 1200.0),
        _ => NaturalSize::new(1000.0, 1000.0),
    })
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let list = items();
    let config = GalleryConfig {
        thumbnail_size: 220,
        gap: 12,
        padding: 8,
        ..GalleryConfig::default()
    };

    for style in LayoutStyle::ALL {
        group.bench_with_input(BenchmarkId::new("style", style), &style, |b, &style| {
            b.iter(|| {
                let mut measure = natural_size;
                black_box(layout::layout_with_style(
                    style,
                    &config,
                    black_box(&list),
                    WIDTH,
                    &mut measure,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
