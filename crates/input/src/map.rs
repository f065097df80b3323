//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Letters are matched case-insensitively; arrows mirror the letter keys.
pub fn map_key(key: KeyEvent) -> Option<GameCommand> {
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(GameCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(GameCommand::Rotate),

        // Lifecycle
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(GameCommand::TogglePause),
        KeyCode::Char('r') => Some(GameCommand::Restart),

        _ => None,
    }
}

/// Navigation and paging keys whose default scrolling behavior the adapter
/// swallows while the game is active.
pub fn suppresses_default(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char(' ')
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
