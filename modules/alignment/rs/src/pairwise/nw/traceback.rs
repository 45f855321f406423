use crate::pairwise::alignment::{Alignment, Op, GAP};
use crate::pairwise::scoring::Score;
use crate::Alignable;

use super::matrix::{Direction, Matrix};

/// Follow the stored directions from the bottom-right corner back to the origin.
///
/// Everything is collected from the end of the alignment backward and reversed at the end,
/// except for the path which is kept in the walking order (end -> start).
pub fn walk<S, S1, S2>(matrix: &Matrix<S>, seq1: &S1, seq2: &S2) -> Alignment<S>
where
    S: Score,
    S1: Alignable<Symbol = u8> + ?Sized,
    S2: Alignable<Symbol = u8> + ?Sized,
{
    let (mut row, mut col) = (seq1.len(), seq2.len());
    debug_assert_eq!(matrix.rows(), row + 1);
    debug_assert_eq!(matrix.cols(), col + 1);

    let capacity = row + col;
    let mut aligned1 = Vec::with_capacity(capacity);
    let mut aligned2 = Vec::with_capacity(capacity);
    let mut ops = Vec::with_capacity(capacity);
    let mut path = Vec::with_capacity(capacity);

    // Boundary cells always point towards the origin, so the indices never underflow
    while row > 0 || col > 0 {
        let cell = *matrix.get(row, col);
        path.push(cell);

        let op = match cell.direction {
            Direction::Up => {
                aligned1.push(*seq1.at(row - 1));
                aligned2.push(GAP);
                row -= 1;
                Op::GapSecond
            }
            Direction::Left => {
                aligned1.push(GAP);
                aligned2.push(*seq2.at(col - 1));
                col -= 1;
                Op::GapFirst
            }
            Direction::Diagonal => {
                row -= 1;
                col -= 1;
                let (s1, s2) = (*seq1.at(row), *seq2.at(col));
                aligned1.push(s1);
                aligned2.push(s2);
                if s1 == s2 { Op::Match } else { Op::Mismatch }
            }
        };
        ops.push(op);
    }

    aligned1.reverse();
    aligned2.reverse();
    ops.reverse();

    let score = matrix.get(matrix.rows() - 1, matrix.cols() - 1).score;
    Alignment::new(score, aligned1, aligned2, path, ops)
}
