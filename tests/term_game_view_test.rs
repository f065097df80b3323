use blockfall::core::{Engine, GameSnapshot, SequenceSource};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{GameStatus, PieceKind};

fn t_snapshot() -> GameSnapshot {
    Engine::with_source(SequenceSource::repeat(PieceKind::T)).snapshot()
}

#[test]
fn term_view_renders_board_border_corners() {
    let view = GameView::default();
    let vp = Viewport::new(47, 37);
    let layout = view.layout(vp);
    let fb = view.render(&t_snapshot(), vp);

    // With cell_w=2 and cell_h=1 the framed board is 22x22.
    let (x, y) = (layout.board_x, layout.board_y);
    assert_eq!(fb.get(x, y).unwrap().ch, '┌');
    assert_eq!(fb.get(x + 21, y).unwrap().ch, '┐');
    assert_eq!(fb.get(x, y + 21).unwrap().ch, '└');
    assert_eq!(fb.get(x + 21, y + 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_page_text() {
    let view = GameView::default();
    let fb = view.render(&t_snapshot(), Viewport::new(60, 40));
    let text = fb.text();

    assert!(text.contains("Oops! Not found."));
    assert!(text.contains("Maybe play tetris instead?"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("000000"));
    assert!(text.contains("PLAYING"));
    assert!(text.contains("Controls:"));
}

#[test]
fn term_view_renders_cells_two_chars_wide() {
    let mut snap = t_snapshot();
    snap.board[19][0] = Some(PieceKind::I);

    let view = GameView::default();
    let vp = Viewport::new(47, 37);
    let layout = view.layout(vp);
    let fb = view.render(&snap, vp);

    let (x, y) = (layout.board_x + 1, layout.board_y + 1 + 19);
    assert_eq!(fb.get(x, y).unwrap().ch, '█');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, '█');
    assert_eq!(fb.get(x + 2, y).unwrap().ch, ' ');

    // Active T occupies columns 4..=6 of the top row.
    let top = layout.board_y + 1;
    assert_eq!(fb.get(layout.board_x + 1 + 8, top).unwrap().ch, '█');
    assert!(fb.get(layout.board_x + 1 + 8, top).unwrap().style.bold);
}

#[test]
fn term_view_shows_status_overlays() {
    let view = GameView::default();
    let vp = Viewport::new(47, 37);

    let mut snap = t_snapshot();
    snap.status = GameStatus::Paused;
    assert!(view.render(&snap, vp).text().contains("PAUSED"));

    snap.status = GameStatus::GameOver;
    let text = view.render(&snap, vp).text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("R to restart"));
}

#[test]
fn term_view_pads_score_to_six_digits() {
    let mut snap = t_snapshot();
    snap.score = 1500;
    snap.level = 3;
    let fb = GameView::default().render(&snap, Viewport::new(47, 27));
    assert!(fb.text().contains("001500"));
}
