use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;

fn first_click(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("first_click_default_board", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut engine = PlayEngine::new(config, seed).unwrap();
            black_box(engine.reveal(black_box((10, 12))).unwrap())
        })
    });
}

fn open_sparse_board(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((200, 200), &[(199, 199)]).unwrap();

    c.bench_function("flood_fill_200x200", |b| {
        b.iter(|| {
            let mut engine = PlayEngine::with_layout(layout.clone());
            black_box(engine.reveal(black_box((0, 0))).unwrap())
        })
    });
}

criterion_group!(benches, first_click, open_sparse_board);
criterion_main!(benches);
