pub use engine::Engine;
pub use matrix::{Cell, Direction, Matrix};

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{Score, ScoringScheme};
use crate::Alignable;

mod algo;
mod engine;
mod matrix;
pub mod report;
mod traceback;

/// Globally align two byte sequences with a one-off silent engine.
pub fn align<S, S1, S2>(seq1: &S1, seq2: &S2, scheme: &ScoringScheme<S>) -> Alignment<S>
where
    S: Score,
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    Engine::new(*scheme).align(seq1, seq2)
}
