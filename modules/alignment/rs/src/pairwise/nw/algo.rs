use crate::pairwise::scoring::{self, Score};
use crate::Alignable;

use super::matrix::{Cell, Direction, Matrix};

// Row-major fill: each cell depends only on its up, left and diagonal neighbors.
pub fn fill<S, Scheme, S1, S2>(matrix: &mut Matrix<S>, seq1: &S1, seq2: &S2, scheme: &Scheme)
where
    S: Score,
    Scheme: scoring::Scheme<Score = S> + ?Sized,
    S1: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol> + ?Sized,
    S2: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol> + ?Sized,
{
    debug_assert_eq!(matrix.rows(), seq1.len() + 1);
    debug_assert_eq!(matrix.cols(), seq2.len() + 1);

    for row in 1..matrix.rows() {
        let s1 = seq1.at(row - 1);
        for col in 1..matrix.cols() {
            let cell = evaluate(matrix, row, col, s1, seq2.at(col - 1), scheme);
            matrix.set(row, col, cell);
        }
    }
}

fn evaluate<S, Scheme>(
    matrix: &Matrix<S>,
    row: usize,
    col: usize,
    s1: &<Scheme as scoring::Scheme>::Symbol,
    s2: &<Scheme as scoring::Scheme>::Symbol,
    scheme: &Scheme,
) -> Cell<S>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S> + ?Sized,
{
    let up = matrix.get(row - 1, col);
    let left = matrix.get(row, col - 1);
    let diag = matrix.get(row - 1, col - 1);

    // A gap is extended only if the neighbor itself was reached by a gap of the same kind
    let up_gap = match up.direction {
        Direction::Up => scheme.gap_extend(),
        _ => scheme.gap_open(),
    };
    let left_gap = match left.direction {
        Direction::Left => scheme.gap_extend(),
        _ => scheme.gap_open(),
    };

    // Saturate instead of wrapping around for narrow score types
    select(
        up.score.saturating_add(up_gap),
        left.score.saturating_add(left_gap),
        diag.score.saturating_add(scheme.score(s1, s2)),
    )
}

/// Pick the best move. Ties are resolved as Diagonal > Up > Left.
#[inline(always)]
pub fn select<S: Score>(up: S, left: S, diag: S) -> Cell<S> {
    let mut best = Cell::new(up, Direction::Up);
    if left > best.score {
        best = Cell::new(left, Direction::Left);
    }
    if diag >= best.score {
        best = Cell::new(diag, Direction::Diagonal);
    }
    best
}
