use crate::pairwise::scoring::Score;

// Gap costs are context-free: the engine decides whether a gap is opened or extended
// by looking at the direction stored in the neighboring cell.
pub trait Scorer {
    type Score: Score;

    /// Cost of the first gap position in a run.
    fn gap_open(&self) -> Self::Score;

    /// Cost of every following gap position in the same run.
    fn gap_extend(&self) -> Self::Score;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Affine<S> {
    pub fn new(open: S, extend: S) -> Self {
        Self { open, extend }
    }

    /// Linear gap model, i.e. opening a gap costs as much as extending it.
    pub fn linear(gap: S) -> Self {
        Self {
            open: gap,
            extend: gap,
        }
    }
}

impl<S: Score> Scorer for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.extend
    }
}
