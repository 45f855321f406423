use std::fmt::Display;
use std::ops::Index;

use derive_more::Constructor;
use itertools::Itertools;

use crate::pairwise::scoring::{gaps, Score};

/// The move that produced the best score of a cell.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Direction {
    /// Substitution: both sequences advance by one symbol. Also marks the matrix origin.
    #[default]
    Diagonal,
    /// Gap in the second sequence, consumes a symbol of the first one.
    Up,
    /// Gap in the first sequence, consumes a symbol of the second one.
    Left,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default, Constructor)]
pub struct Cell<S: Score> {
    pub score: S,
    pub direction: Direction,
}

/// Dense `(len(seq1) + 1) x (len(seq2) + 1)` dynamic programming matrix stored row by row.
///
/// Row 0 and column 0 hold the all-gap boundary.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Matrix<S: Score> {
    cells: Vec<Cell<S>>,
    rows: usize,
    cols: usize,
}

impl<S: Score> Matrix<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the matrix for sequences of the given lengths and fill in the boundary.
    ///
    /// The first step away from the origin costs a gap opening, every other boundary cell
    /// at distance `k` from the origin scores `k * gap_extend`. Scores saturate at `S::min_value()`.
    pub fn initialize<G>(&mut self, seq1len: usize, seq2len: usize, gaps: &G)
    where
        G: gaps::Scorer<Score = S> + ?Sized,
    {
        self.rows = seq1len + 1;
        self.cols = seq2len + 1;
        self.cells.clear();
        self.cells.resize(self.rows * self.cols, Cell::default());

        let (open, extend) = (gaps.gap_open(), gaps.gap_extend());

        let mut score = S::zero();
        for row in 1..self.rows {
            score = score.saturating_add(extend);
            let value = if row == 1 { open } else { score };
            self.set(row, 0, Cell::new(value, Direction::Up));
        }

        let mut score = S::zero();
        for col in 1..self.cols {
            score = score.saturating_add(extend);
            let value = if col == 1 { open } else { score };
            self.set(0, col, Cell::new(value, Direction::Left));
        }

        self.set(0, 0, Cell::new(S::zero(), Direction::Diagonal));
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &Cell<S> {
        &self.cells[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell<S>) {
        self.cells[row * self.cols + col] = cell;
    }

    pub fn row(&self, row: usize) -> &[Cell<S>] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// The bottom-right cell, i.e. the score of the global alignment.
    /// `None` only for a matrix that was never initialized.
    pub fn corner(&self) -> Option<&Cell<S>> {
        self.cells.last()
    }
}

impl<S: Score> Index<(usize, usize)> for Matrix<S> {
    type Output = Cell<S>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.get(row, col)
    }
}

impl<S: Score> Display for Matrix<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = "-".repeat(self.cols * 5 + 1);
        writeln!(f, "{border}")?;
        for row in 0..self.rows {
            let cells = self
                .row(row)
                .iter()
                .format_with("", |cell, f| f(&format_args!("|{:>3} ", cell.score)));
            writeln!(f, "{cells}|")?;
        }
        write!(f, "{border}")
    }
}
