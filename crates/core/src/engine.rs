//! Engine module - owns the complete game state
//!
//! The engine ties together the board, the active piece, the piece source and
//! the stats. It never schedules anything itself: a driver calls [`Engine::tick`]
//! every [`Engine::tick_interval_ms`] and forwards player commands. All methods
//! are synchronous in-memory transitions; rejected commands are silent no-ops
//! reported through a `false` return value.

use log::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::scoring::GameStats;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::source::{PieceSource, RandomSource};
use crate::types::{GameCommand, GameStatus, LockEvent, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Shape;

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<S = RandomSource> {
    board: Board,
    active: Option<Piece>,
    stats: GameStats,
    status: GameStatus,
    source: S,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Increments on every restart.
    episode_id: u32,
    /// Increments on every observable change.
    revision: u64,
}

impl Engine<RandomSource> {
    /// New game whose pieces come from a seeded uniform source.
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandomSource::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_source(RandomSource::from_entropy())
    }
}

impl Default for Engine<RandomSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> Engine<S> {
    /// New game on an empty board; the first piece is spawned immediately.
    pub fn with_source(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// New game starting from an arbitrary position.
    ///
    /// If the first piece has no room the game starts over.
    pub fn with_board(board: Board, source: S) -> Self {
        let mut engine = Self {
            board,
            active: None,
            stats: GameStats::new(),
            status: GameStatus::Playing,
            source,
            last_event: None,
            episode_id: 0,
            revision: 0,
        };
        engine.place_next();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn lines(&self) -> u32 {
        self.stats.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Interval the driver should wait before the next [`Engine::tick`].
    pub fn tick_interval_ms(&self) -> u32 {
        self.stats.tick_interval_ms()
    }

    /// Collision query against the current board. See [`Board::can_place`].
    pub fn can_place(&self, piece: &Piece, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        self.board.can_place(piece, dx, dy, shape)
    }

    /// Draw the next kind and build it at the spawn position.
    ///
    /// Collision is not checked here; the caller decides what a blocked spawn
    /// means.
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.source.next_kind())
    }

    /// The piece turned 90° clockwise, or the piece unchanged if the turned
    /// shape does not fit at the same anchor. No wall kicks are attempted.
    pub fn rotated(&self, piece: &Piece) -> Piece {
        let turned = piece.shape.rotated_cw();
        if self.can_place(piece, 0, 0, Some(&turned)) {
            piece.with_shape(turned)
        } else {
            *piece
        }
    }

    /// Gravity step. Moves the piece down one row, or locks it when it cannot
    /// fall and spawns the next one. Does nothing unless playing.
    pub fn tick(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.can_place(&active, 0, 1, None) {
            trace!("gravity: {:?} to y={}", active.kind, active.y + 1);
            self.active = Some(active.shifted(0, 1));
        } else {
            self.lock_piece(active);
        }
        self.touch();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One row down if there is room. Unlike [`Engine::tick`] this never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate the active piece clockwise if it fits in place.
    pub fn rotate(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let turned = self.rotated(&active);
        if turned == active {
            return false;
        }
        self.active = Some(turned);
        self.touch();
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => return false,
        };
        debug!("status -> {:?}", self.status);
        self.touch();
        true
    }

    /// Start a fresh game. Only honored after game over.
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }

        self.board.clear();
        self.stats = GameStats::new();
        self.status = GameStatus::Playing;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.place_next();
        info!("restart: episode {}", self.episode_id);
        self.touch();
        true
    }

    /// Apply a command; returns whether the state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Restart => self.restart(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Write the renderer view into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if (0..BOARD_HEIGHT as i8).contains(&y) && (0..BOARD_WIDTH as i8).contains(&x) {
                    out.board[y as usize][x as usize] = Some(active.color());
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.stats.score;
        out.level = self.stats.level;
        out.lines = self.stats.lines;
        out.status = self.status;
        out.tick_interval_ms = self.tick_interval_ms();
        out.episode_id = self.episode_id;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !self.can_place(&active, dx, dy, None) {
            return false;
        }
        self.active = Some(active.shifted(dx, dy));
        self.touch();
        true
    }

    /// Spawn the next piece, or end the game if it has no room.
    fn place_next(&mut self) -> bool {
        let piece = self.spawn();
        if self.can_place(&piece, 0, 0, None) {
            self.active = Some(piece);
            true
        } else {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                "game over: score={} level={} lines={}",
                self.stats.score, self.stats.level, self.stats.lines
            );
            false
        }
    }

    fn lock_piece(&mut self, piece: Piece) {
        self.board.lock(&piece);
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        let result = self.stats.record_clear(lines_cleared);
        if lines_cleared > 0 {
            debug!(
                "cleared rows {:?}: +{} (level {}, lines {})",
                cleared.as_slice(),
                result.score_gained,
                self.stats.level,
                self.stats.lines
            );
        } else {
            debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);
        }

        let spawned = self.place_next();
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_gained: result.score_gained,
            leveled_up: result.leveled_up,
            game_over: !spawned,
        });
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
