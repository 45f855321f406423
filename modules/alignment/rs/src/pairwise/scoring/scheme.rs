use eyre::{ensure, Result};

use super::{gaps, symbols, Score};

/// Byte-wise scoring scheme with a fixed match/mismatch reward and affine gap costs.
///
/// The sign conventions are enforced on construction: `match >= 0` while mismatch, gap open,
/// and gap continuation costs are all `<= 0`. Setting `open_gap == continue_gap` yields the
/// plain (linear) gap model.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct ScoringScheme<S: Score = i32> {
    symbols: symbols::Equality<S, u8>,
    gaps: gaps::Affine<S>,
}

impl<S: Score> Default for ScoringScheme<S> {
    fn default() -> Self {
        let two = S::one() + S::one();
        Self {
            symbols: symbols::Equality::new(S::one(), -S::one()),
            gaps: gaps::Affine::linear(-two),
        }
    }
}

impl<S: Score> ScoringScheme<S> {
    pub fn new(matches: S, mismatch: S, open_gap: S, continue_gap: S) -> Result<Self> {
        validate(matches, mismatch, open_gap, continue_gap)?;
        Ok(Self {
            symbols: symbols::Equality::new(matches, mismatch),
            gaps: gaps::Affine::new(open_gap, continue_gap),
        })
    }

    pub fn match_score(&self) -> S {
        self.symbols.equal
    }

    pub fn mismatch(&self) -> S {
        self.symbols.different
    }

    pub fn open_gap(&self) -> S {
        self.gaps.open
    }

    pub fn continue_gap(&self) -> S {
        self.gaps.extend
    }

    pub fn set_match(&mut self, score: S) -> Result<&mut Self> {
        validate(score, self.mismatch(), self.open_gap(), self.continue_gap())?;
        self.symbols.equal = score;
        Ok(self)
    }

    pub fn set_mismatch(&mut self, score: S) -> Result<&mut Self> {
        validate(self.match_score(), score, self.open_gap(), self.continue_gap())?;
        self.symbols.different = score;
        Ok(self)
    }

    pub fn set_open_gap(&mut self, score: S) -> Result<&mut Self> {
        validate(self.match_score(), self.mismatch(), score, self.continue_gap())?;
        self.gaps.open = score;
        Ok(self)
    }

    pub fn set_continue_gap(&mut self, score: S) -> Result<&mut Self> {
        validate(self.match_score(), self.mismatch(), self.open_gap(), score)?;
        self.gaps.extend = score;
        Ok(self)
    }
}

fn validate<S: Score>(matches: S, mismatch: S, open_gap: S, continue_gap: S) -> Result<()> {
    ensure!(
        matches >= S::zero(),
        "Invalid scoring scheme: match score must be non-negative, got {matches:?}"
    );
    for (name, value) in [
        ("mismatch", mismatch),
        ("gap open", open_gap),
        ("gap continuation", continue_gap),
    ] {
        ensure!(
            value <= S::zero(),
            "Invalid scoring scheme: {name} score must be non-positive, got {value:?}"
        );
    }
    Ok(())
}

impl<S: Score> symbols::Scorer for ScoringScheme<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        self.symbols.score(s1, s2)
    }
}

impl<S: Score> gaps::Scorer for ScoringScheme<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.gaps.gap_open()
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.gaps.gap_extend()
    }
}

impl<S: Score> super::Scheme for ScoringScheme<S> {
    type Score = S;
    type Symbol = u8;
}
