use itertools::Itertools;

use nwalign_alignment_rs::pairwise::nw::Direction;
use nwalign_alignment_rs::pairwise::{Engine, Op, ScoringScheme};

const ALPHABET: &[u8] = b"ACG";
const MAX_LEN: usize = 4;

// Every sequence over the alphabet up to the given length (including the empty one)
fn all_sequences() -> Vec<Vec<u8>> {
    (0..=MAX_LEN)
        .flat_map(|len| {
            std::iter::repeat_n(ALPHABET.iter().copied(), len).multi_cartesian_product()
        })
        .collect()
}

#[test]
fn test_structure() {
    let sequences = all_sequences();
    assert_eq!(sequences.len(), 1 + 3 + 9 + 27 + 81);

    let mut engine = Engine::new(ScoringScheme::new(2, -1, -3, -1).unwrap());
    for (seq1, seq2) in sequences.iter().cartesian_product(sequences.iter()) {
        let alignment = engine.align(seq1, seq2);
        let matrix = engine.matrix();

        assert_eq!(matrix.rows(), seq1.len() + 1);
        assert_eq!(matrix.cols(), seq2.len() + 1);

        // One entry per column everywhere
        let columns = alignment.len();
        assert_eq!(alignment.seq1().len(), columns);
        assert_eq!(alignment.seq2().len(), columns);
        assert_eq!(alignment.comparison().len(), columns);
        assert_eq!(alignment.path().len(), columns);
        assert!(columns >= seq1.len().max(seq2.len()));
        assert!(columns <= seq1.len() + seq2.len());

        // The path starts at the bottom-right corner
        let corner = matrix.corner().unwrap();
        assert_eq!(alignment.score(), &corner.score);
        if let Some(first) = alignment.path().first() {
            assert_eq!(first, corner);
        }

        // Each column is consistent with its comparison symbol and the path direction
        let columns = alignment
            .seq1()
            .iter()
            .zip(alignment.seq2())
            .zip(alignment.comparison().chars())
            .zip(alignment.path().iter().rev());
        for (((s1, s2), symbol), cell) in columns {
            match symbol {
                '|' => {
                    assert_eq!(s1, s2);
                    assert_eq!(cell.direction, Direction::Diagonal);
                }
                '.' => {
                    assert_ne!(s1, s2);
                    assert_eq!(cell.direction, Direction::Diagonal);
                }
                '-' => {
                    assert!(*s1 == b'-' || *s2 == b'-');
                    assert_ne!(cell.direction, Direction::Diagonal);
                }
                _ => panic!("Unexpected comparison symbol: {symbol}"),
            }
        }

        // Steps cover all columns
        let total = [Op::Match, Op::Mismatch, Op::GapFirst, Op::GapSecond]
            .into_iter()
            .map(|op| alignment.count(op))
            .sum::<usize>();
        assert_eq!(total, alignment.len());
    }
}

#[test]
fn test_linear_gap_score_is_column_sum() {
    // With open == continue every column contributes independently of its neighbors
    let scheme = ScoringScheme::<i32>::default();
    let sequences = all_sequences();

    for (seq1, seq2) in sequences.iter().cartesian_product(sequences.iter()) {
        let alignment = nwalign_alignment_rs::pairwise::align(seq1, seq2, &scheme);
        let expected = alignment
            .comparison()
            .chars()
            .map(|x| match x {
                '|' => scheme.match_score(),
                '.' => scheme.mismatch(),
                _ => scheme.continue_gap(),
            })
            .sum::<i32>();
        assert_eq!(*alignment.score(), expected);
    }
}

#[test]
fn test_identical_sequences() {
    let scheme = ScoringScheme::<i32>::default();
    let mut engine = Engine::new(scheme);

    for seq in all_sequences() {
        let alignment = engine.align(&seq, &seq);
        assert_eq!(*alignment.score(), seq.len() as i32 * scheme.match_score());
        assert_eq!(*alignment.comparison(), "|".repeat(seq.len()));
        assert_eq!(alignment.seq1(), &seq);
        assert_eq!(alignment.seq2(), &seq);
    }
}

#[test]
fn test_empty_counterpart() {
    let scheme = ScoringScheme::new(1, -1, -5, -2).unwrap();
    let mut engine = Engine::new(scheme);

    for seq in all_sequences().into_iter().filter(|x| !x.is_empty()) {
        let empty: Vec<u8> = Vec::new();

        let alignment = engine.align(&seq, &empty);
        let boundary = engine.matrix()[(seq.len(), 0)];
        assert_eq!(*alignment.score(), boundary.score);
        assert_eq!(*alignment.comparison(), "-".repeat(seq.len()));
        assert!(alignment.path().iter().all(|x| x.direction == Direction::Up));

        let alignment = engine.align(&empty, &seq);
        let boundary = engine.matrix()[(0, seq.len())];
        assert_eq!(*alignment.score(), boundary.score);
        assert_eq!(*alignment.comparison(), "-".repeat(seq.len()));
        assert!(alignment.path().iter().all(|x| x.direction == Direction::Left));
    }
}

#[test]
fn test_determinism() {
    let seq1 = b"GGATAGTTGCCCACACAACA".to_vec();
    let seq2 = b"TAGTTGACACAACA".to_vec();
    let scheme = ScoringScheme::new(1, -1, -5, -2).unwrap();

    let first = Engine::new(scheme).align(&seq1, &seq2);
    let mut engine = Engine::new(scheme);
    for _ in 0..3 {
        assert_eq!(engine.align(&seq1, &seq2), first);
    }
}
