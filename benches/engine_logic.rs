use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Engine, GameSnapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameStatus, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.status() == GameStatus::GameOver {
                engine.restart();
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, PieceKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(engine.spawn());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    let mut right = true;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            let moved = if right { engine.move_right() } else { engine.move_left() };
            if !moved {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(engine.rotate());
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let engine = Engine::new(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 40);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 40);

    c.bench_function("snapshot_render", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            black_box(fb.get(0, 0));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_snapshot_and_render
);
criterion_main!(benches);
