//! Session driver: the single event loop state between terminal and engine.
//!
//! The engine never schedules anything itself. A [`Session`] owns it together
//! with the debounced input adapter and a one-shot [`GravityTimer`], and the
//! caller feeds it key presses and the current time. Time is always passed in,
//! so the whole loop can be driven deterministically from tests.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use log::debug;

use crate::core::{Engine, GameSnapshot, PieceSource, RandomSource};
use crate::input::InputAdapter;
use crate::types::{GameCommand, GameStatus, LockEvent};

/// One-shot gravity deadline, re-armed after every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityTimer {
    deadline: Option<Instant>,
}

impl GravityTimer {
    pub fn start(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}

pub struct Session<S = RandomSource> {
    engine: Engine<S>,
    input: InputAdapter,
    gravity: GravityTimer,
}

impl<S: PieceSource> Session<S> {
    /// Wrap `engine`; gravity starts counting from `now` if the game is live.
    pub fn new(engine: Engine<S>, input: InputAdapter, now: Instant) -> Self {
        let mut session = Self {
            engine,
            input,
            gravity: GravityTimer::default(),
        };
        session.sync_gravity(GameStatus::GameOver, now);
        session
    }

    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn gravity(&self) -> GravityTimer {
        self.gravity
    }

    /// When [`Session::advance`] next has work to do, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.gravity.deadline()
    }

    /// Time left until the next gravity tick, capped at `max`.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next_deadline()
            .map(|d| d.saturating_duration_since(now))
            .map_or(max, |left| left.min(max))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.engine.take_last_event()
    }

    /// Map, debounce and apply a key press. Returns the command that got
    /// through the debounce gate, whether or not it changed the game.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<GameCommand> {
        let command = self.input.handle_key(key, now)?;
        self.apply(command, now);
        Some(command)
    }

    /// Apply a command that already passed input filtering.
    pub fn apply(&mut self, command: GameCommand, now: Instant) -> bool {
        let before = self.engine.status();
        let changed = self.engine.apply(command);
        if changed {
            self.sync_gravity(before, now);
        }
        changed
    }

    /// Fire at most one gravity tick if it is due. Returns whether it fired.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.gravity.is_due(now) {
            return false;
        }
        let before = self.engine.status();
        self.engine.tick();
        self.gravity.stop();
        self.sync_gravity(before, now);
        true
    }

    fn sync_gravity(&mut self, before: GameStatus, now: Instant) {
        match self.engine.status() {
            GameStatus::Playing => {
                if before != GameStatus::Playing || !self.gravity.is_running() {
                    let interval = Duration::from_millis(self.engine.tick_interval_ms() as u64);
                    self.gravity.start(now, interval);
                }
            }
            status => {
                if self.gravity.is_running() {
                    debug!("gravity stopped ({status:?})");
                }
                self.gravity.stop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, SequenceSource};
    use crate::types::PieceKind;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn o_session(now: Instant) -> Session<SequenceSource> {
        let engine = Engine::with_source(SequenceSource::repeat(PieceKind::O));
        Session::new(engine, InputAdapter::new(), now)
    }

    #[test]
    fn gravity_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut session = o_session(t0);
        assert_eq!(session.next_deadline(), Some(t0 + Duration::from_millis(950)));

        assert!(!session.advance(t0 + Duration::from_millis(949)));
        assert!(session.advance(t0 + Duration::from_millis(5000)));
        assert_eq!(session.engine().active().map(|p| p.y), Some(1));

        // Re-armed from the firing time, not the missed deadline.
        assert_eq!(
            session.next_deadline(),
            Some(t0 + Duration::from_millis(5950))
        );
    }

    #[test]
    fn pause_stops_and_resume_rearms_gravity() {
        let t0 = Instant::now();
        let mut session = o_session(t0);

        assert_eq!(session.handle_key(key(KeyCode::Char('p')), t0), Some(GameCommand::TogglePause));
        assert_eq!(session.status(), GameStatus::Paused);
        assert_eq!(session.next_deadline(), None);
        assert!(!session.advance(t0 + Duration::from_secs(10)));

        let t1 = t0 + Duration::from_secs(10);
        session.handle_key(key(KeyCode::Char(' ')), t1);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.next_deadline(), Some(t1 + Duration::from_millis(950)));
    }

    #[test]
    fn debounced_keys_do_not_reach_the_engine() {
        let t0 = Instant::now();
        let mut session = o_session(t0);

        assert!(session.handle_key(key(KeyCode::Left), t0).is_some());
        assert!(session.handle_key(key(KeyCode::Left), t0 + Duration::from_millis(10)).is_none());
        assert_eq!(session.engine().active().map(|p| p.x), Some(3));
    }

    #[test]
    fn game_over_stops_gravity_and_restart_rearms_it() {
        let t0 = Instant::now();
        let board = Board::from_ascii(&["##########"; 20]);
        let engine = Engine::with_board(board, SequenceSource::repeat(PieceKind::T));
        let mut session = Session::new(engine, InputAdapter::new(), t0);
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.next_deadline(), None);

        let t1 = t0 + Duration::from_millis(100);
        assert_eq!(session.handle_key(key(KeyCode::Char('R')), t1), Some(GameCommand::Restart));
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.next_deadline(), Some(t1 + Duration::from_millis(950)));
    }

    #[test]
    fn poll_timeout_is_capped() {
        let t0 = Instant::now();
        let session = o_session(t0);
        let max = Duration::from_millis(16);
        assert_eq!(session.poll_timeout(t0, max), max);
        assert_eq!(
            session.poll_timeout(t0 + Duration::from_millis(945), max),
            Duration::from_millis(5)
        );
    }
}
