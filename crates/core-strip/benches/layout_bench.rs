use core_model::{OnPress, Tile};
use core_strip::{
    ContainedStripInfo, StripProvider, StripProviderExt, container_strip, downward_strip,
    list_strip, tile_strip, upward_strip,
};
use core_model::Rectangle;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn menu(n: usize) -> Vec<Tile> {
    (0..n)
        .map(|i| {
            let tile = Tile::button(OnPress::noop()).with_label(format!("item {i}"));
            if i % 7 == 0 { tile.with_span(2, 1) } else { tile }
        })
        .collect()
}

fn bench_packing(c: &mut Criterion) {
    let strip = tile_strip(menu(80));
    c.bench_function("tile_strip_resolve_10x10", |b| {
        b.iter(|| black_box(strip.resolve(black_box(10), black_box(10))))
    });
}

fn bench_screen(c: &mut Criterion) {
    let screen = container_strip([
        ContainedStripInfo::new(
            Rectangle::new(0, 0, 10, 1),
            list_strip(menu(30), 2, OnPress::noop()),
        ),
        ContainedStripInfo::new(
            Rectangle::new(0, 1, 10, 9),
            downward_strip([
                tile_strip(menu(20)).grow().boxed(),
                upward_strip([tile_strip(menu(5)).boxed()]).boxed(),
            ]),
        ),
    ]);
    c.bench_function("screen_resolve_and_query", |b| {
        b.iter(|| {
            let ps = screen.resolve(10, 10);
            for y in 0..ps.height() {
                for x in 0..ps.width() {
                    black_box(ps.get_tile(x, y, 10, 10));
                }
            }
        })
    });
}

criterion_group!(benches, bench_packing, bench_screen);
criterion_main!(benches);
