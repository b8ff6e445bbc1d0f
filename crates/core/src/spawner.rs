//! Spawner module - uniform random piece selection
//!
//! Each draw picks one of the seven kinds with equal probability. The RNG is a
//! seeded PCG so a given seed always produces the same sequence; the spawner
//! keeps one kind drawn ahead so the next piece can be previewed.

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Uniform piece generator with a one-piece preview
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    seed: u64,
    next: PieceKind,
}

impl Spawner {
    /// Create a spawner with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let next = Self::pick(&mut rng);
        Self { rng, seed, next }
    }

    /// Create a spawner seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    fn pick(rng: &mut Pcg32) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Seed this spawner was created with (for replaying a game)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Kind the next draw will return
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Draw the next kind and pick a new preview
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = Self::pick(&mut self.rng);
        kind
    }

    /// Draw the next kind as a piece at the spawn coordinate
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.draw())
    }
}
