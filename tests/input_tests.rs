//! Keyboard handling end to end: key events through the adapter into a session.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::core::{Engine, SequenceSource};
use blockfall::input::{map_key, should_quit, suppresses_default, InputAdapter};
use blockfall::types::{GameCommand, GameStatus, PieceKind};
use blockfall::Session;

fn press(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

#[test]
fn test_every_documented_key_maps() {
    let table = [
        ("aAhH", GameCommand::MoveLeft),
        ("dDlL", GameCommand::MoveRight),
        ("sSjJ", GameCommand::SoftDrop),
        ("wWkK", GameCommand::Rotate),
        (" pP", GameCommand::TogglePause),
        ("rR", GameCommand::Restart),
    ];
    for (keys, command) in table {
        for c in keys.chars() {
            assert_eq!(map_key(press(c)), Some(command), "key {c:?}");
        }
    }

    assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(GameCommand::MoveLeft));
    assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(GameCommand::MoveRight));
    assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(GameCommand::SoftDrop));
    assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(GameCommand::Rotate));
}

#[test]
fn test_scroll_keys_are_swallowed() {
    for code in [KeyCode::PageUp, KeyCode::PageDown, KeyCode::Home, KeyCode::End, KeyCode::Char(' ')] {
        assert!(suppresses_default(code));
    }
    assert!(!suppresses_default(KeyCode::Char('x')));
    assert!(!suppresses_default(KeyCode::Enter));
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(press('q')));
    assert!(should_quit(press('Q')));
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(press('c')));
}

#[test]
fn test_keyboard_drives_o_piece_to_the_wall() {
    let t0 = Instant::now();
    let engine = Engine::with_source(SequenceSource::repeat(PieceKind::O));
    let mut session = Session::new(engine, InputAdapter::new(), t0);

    for i in 0..8u64 {
        let now = t0 + Duration::from_millis(60 * i);
        assert_eq!(session.handle_key(press('a'), now), Some(GameCommand::MoveLeft));
        assert!(session.engine().active().unwrap().x >= 0);
    }
    assert_eq!(session.engine().active().unwrap().x, 0);

    let now = t0 + Duration::from_millis(1_000);
    assert_eq!(session.handle_key(press('w'), now), Some(GameCommand::Rotate));
    assert_eq!(
        session.engine().active().unwrap().shape.to_rows(),
        vec![vec![1, 1], vec![1, 1]]
    );
}

#[test]
fn test_restart_key_only_matters_after_game_over() {
    let t0 = Instant::now();
    let engine = Engine::with_source(SequenceSource::repeat(PieceKind::T));
    let mut session = Session::new(engine, InputAdapter::new(), t0);

    assert_eq!(session.handle_key(press('r'), t0), Some(GameCommand::Restart));
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.engine().episode_id(), 0);
}
