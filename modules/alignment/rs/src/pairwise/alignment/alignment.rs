use std::fmt::Display;

use derive_getters::{Dissolve, Getters};

use crate::pairwise::nw::Cell;
use crate::pairwise::scoring::Score;

use super::op::Op;
use super::step::Step;

/// Symbol emitted in the aligned sequences in place of a gap.
pub const GAP: u8 = b'-';

/// A global alignment between two sequences.
///
/// `seq1`, `seq2` and `comparison` always have the same length: one entry per alignment column.
/// `path` lists the visited matrix cells from the end of the alignment back to its start.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    seq1: Vec<u8>,
    seq2: Vec<u8>,
    comparison: String,
    path: Vec<Cell<S>>,
    steps: Vec<Step<u32>>,
}

impl<S: Score> Alignment<S> {
    pub(crate) fn new(
        score: S,
        seq1: Vec<u8>,
        seq2: Vec<u8>,
        path: Vec<Cell<S>>,
        ops: Vec<Op>,
    ) -> Self {
        debug_assert_eq!(seq1.len(), seq2.len());
        debug_assert_eq!(seq1.len(), ops.len());
        debug_assert_eq!(path.len(), ops.len());

        let comparison = ops.iter().map(Op::comparison).collect();
        Self {
            score,
            seq1,
            seq2,
            comparison,
            path,
            steps: Step::encode(ops),
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.comparison.len()
    }

    /// Checks if the alignment is empty, i.e. both input sequences were empty.
    pub fn is_empty(&self) -> bool {
        self.comparison.is_empty()
    }

    /// Number of alignment columns with the given operation.
    pub fn count(&self, op: Op) -> usize {
        self.steps
            .iter()
            .filter(|step| *step.op() == op)
            .map(|step| *step.len() as usize)
            .sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.seq1))?;
        writeln!(f, "{}", self.comparison)?;
        write!(f, "{}", String::from_utf8_lossy(&self.seq2))
    }
}
