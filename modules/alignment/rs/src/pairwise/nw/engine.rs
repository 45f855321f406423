use std::time::Instant;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{self, Score};
use crate::Alignable;

use super::matrix::Matrix;
use super::report::{Reporter, Silent};
use super::{algo, traceback};

/// Needleman-Wunsch aligner.
///
/// The engine owns the scoring scheme and keeps the dynamic programming matrix between calls,
/// so aligning many pairs reuses a single allocation. The matrix of the last alignment stays
/// available through [`Engine::matrix`].
pub struct Engine<S, Scheme, R = Silent>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
    R: Reporter<S>,
{
    scheme: Scheme,
    reporter: R,
    matrix: Matrix<S>,
}

impl<S, Scheme> Engine<S, Scheme, Silent>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
{
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            reporter: Silent,
            matrix: Matrix::new(),
        }
    }
}

impl<S, Scheme, R> Engine<S, Scheme, R>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
    R: Reporter<S>,
{
    pub fn with_reporter<T: Reporter<S>>(self, reporter: T) -> Engine<S, Scheme, T> {
        Engine {
            scheme: self.scheme,
            reporter,
            matrix: self.matrix,
        }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// The matrix filled by the last call to [`Engine::align`].
    pub fn matrix(&self) -> &Matrix<S> {
        &self.matrix
    }

    pub fn align<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Alignment<S>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        let start = Instant::now();

        self.matrix.initialize(seq1.len(), seq2.len(), &self.scheme);
        self.reporter.initialized(&self.matrix);

        algo::fill(&mut self.matrix, seq1, seq2, &self.scheme);
        self.reporter.filled(&self.matrix);

        self.reporter.sequences(seq1, seq2);

        let alignment = traceback::walk(&self.matrix, seq1, seq2);
        self.reporter.alignment(&alignment);
        self.reporter.score(&self.matrix);

        log::debug!(
            "Aligned {} x {} symbols in {:?}",
            seq1.len(),
            seq2.len(),
            start.elapsed()
        );
        alignment
    }
}
