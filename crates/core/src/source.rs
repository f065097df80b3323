//! Piece sources - where the next piece kind comes from
//!
//! The engine draws kinds through the [`PieceSource`] trait:
//!
//! - [`RandomSource`]: uniform choice among the seven kinds, seedable for replays
//! - [`SequenceSource`]: a fixed cycle of kinds, for scripted positions and tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SourceError;
use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniformly random kinds (no bag, no history).
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomSource {
    /// Deterministic source: the same seed yields the same kinds.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed used at construction, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomSource {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Replays a fixed, non-empty list of kinds forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Result<Self, SourceError> {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return Err(SourceError::EmptySequence);
        }
        Ok(Self { kinds, cursor: 0 })
    }

    /// The same kind every time.
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            cursor: 0,
        }
    }

    /// Parse letters such as `"IOT"` or `"i o t"` (whitespace and commas ignored).
    ///
    /// ```
    /// use blockfall_core::{PieceSource, SequenceSource};
    /// use blockfall_core::types::PieceKind;
    ///
    /// let mut src = SequenceSource::parse("o, i").unwrap();
    /// assert_eq!(src.next_kind(), PieceKind::O);
    /// assert_eq!(src.next_kind(), PieceKind::I);
    /// assert_eq!(src.next_kind(), PieceKind::O);
    /// ```
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let kinds = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                let s = c.to_string();
                PieceKind::from_str(&s).ok_or(SourceError::UnknownKind(s))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kinds)
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}
