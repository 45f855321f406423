pub use scheme::ScoringScheme;

use std::fmt::Display;

use nwalign_core_rs::num::PrimSInt;

pub mod gaps;
mod scheme;
pub mod symbols;

/// Alignment scores are signed: mismatches and gaps are penalized with negative values.
pub trait Score: PrimSInt + Display {}

impl<T: PrimSInt + Display> Score for T {}

/// A complete scoring scheme for the global alignment: substitutions plus affine gaps.
///
/// Implementations are used as-is by the engine. Only [`ScoringScheme`] checks the sign
/// conventions, custom schemes are trusted to be meaningful.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol: PartialEq;
}
