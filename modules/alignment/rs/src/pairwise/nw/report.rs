use derive_getters::Getters;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::Score;
use crate::Alignable;

use super::matrix::Matrix;

// The engine notifies the reporter about each stage of the alignment.
// Nothing is printed by the engine itself, reporters decide what (if anything) to do with the data.

#[allow(unused_variables)]
pub trait Reporter<S: Score> {
    /// The matrix right after the boundary was filled in.
    fn initialized(&mut self, matrix: &Matrix<S>) {}
    /// The matrix after the recurrence was evaluated for every cell.
    fn filled(&mut self, matrix: &Matrix<S>) {}

    fn sequences(&mut self, seq1: &dyn Alignable<Symbol = u8>, seq2: &dyn Alignable<Symbol = u8>) {
    }

    fn alignment(&mut self, alignment: &Alignment<S>) {}

    fn score(&mut self, matrix: &Matrix<S>) {}
}

/// Reporter that ignores everything. The default for library use.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Silent;

impl<S: Score> Reporter<S> for Silent {}

/// Reporter that dumps all alignment stages to the `log` facade.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters)]
pub struct Logging {
    level: log::Level,
    /// Matrices with more rows than this are not rendered
    max_rows: usize,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: log::Level::Debug,
            max_rows: 20,
        }
    }
}

impl Logging {
    pub fn new(level: log::Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn set_max_rows(&mut self, max_rows: usize) -> &mut Self {
        self.max_rows = max_rows;
        self
    }

    fn matrix<S: Score>(&self, stage: &str, matrix: &Matrix<S>) {
        if !log::log_enabled!(self.level) {
            return;
        }
        if matrix.rows() > self.max_rows {
            log::log!(
                self.level,
                "{stage} matrix is too large to be printed ({}x{})",
                matrix.rows(),
                matrix.cols()
            );
        } else {
            log::log!(self.level, "{stage} matrix:\n{matrix}");
        }
    }
}

fn lossy(seq: &dyn Alignable<Symbol = u8>) -> String {
    let bytes = (0..seq.len()).map(|i| *seq.at(i)).collect::<Vec<_>>();
    String::from_utf8_lossy(&bytes).into_owned()
}

impl<S: Score> Reporter<S> for Logging {
    fn initialized(&mut self, matrix: &Matrix<S>) {
        self.matrix("Initialized", matrix);
    }

    fn filled(&mut self, matrix: &Matrix<S>) {
        self.matrix("Filled", matrix);
    }

    fn sequences(&mut self, seq1: &dyn Alignable<Symbol = u8>, seq2: &dyn Alignable<Symbol = u8>) {
        if log::log_enabled!(self.level) {
            log::log!(
                self.level,
                "Sequence 1: {}\nSequence 2: {}",
                lossy(seq1),
                lossy(seq2)
            );
        }
    }

    fn alignment(&mut self, alignment: &Alignment<S>) {
        if log::log_enabled!(self.level) {
            log::log!(self.level, "Alignment:\n{alignment}");
        }
    }

    fn score(&mut self, matrix: &Matrix<S>) {
        if !log::log_enabled!(self.level) {
            return;
        }
        if let Some(corner) = matrix.corner() {
            log::log!(self.level, "Max score: {}", corner.score);
        }
    }
}
