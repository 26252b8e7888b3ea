use derive_getters::{Dissolve, Getters};
use eyre::{Result, eyre};

use crate::Alignable;
use crate::pairwise::scoring::{self, gaps, symbols};

use super::direction::Direction;
use super::matrix::Matrix;

/// Filled dynamic programming tables, `(len(seq1) + 1) x (len(seq2) + 1)` each.
/// Row 0 and column 0 are the local alignment boundary: zero scores, `Zero` pointers.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Matrices<S: scoring::Score> {
    scores: Matrix<S>,
    directions: Matrix<Direction>,
}

/// Fills the score and direction matrices for the local alignment of `seq1` (rows) and `seq2` (columns).
///
/// Fails if a cell score doesn't fit into `S`.
pub fn fill<S, Smb, Scheme, Seq1, Seq2>(
    seq1: &Seq1,
    seq2: &Seq2,
    scheme: &Scheme,
) -> Result<Matrices<S>>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    Seq1: Alignable<Symbol = Smb>,
    Seq2: Alignable<Symbol = Smb>,
{
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    let mut scores = Matrix::new(rows, cols, S::zero());
    let mut directions = Matrix::new(rows, cols, Direction::Zero);

    for row in 1..rows {
        let s1 = seq1.at(row - 1);
        for col in 1..cols {
            let s2 = seq2.at(col - 1);
            let add = |score: S, delta: S| {
                score
                    .checked_add(&delta)
                    .ok_or_else(|| eyre!("Score overflow at ({row}, {col})"))
            };

            let diag = add(
                scores[(row - 1, col - 1)],
                symbols::Scorer::score(scheme, row - 1, s1, col - 1, s2),
            )?;
            let up = add(scores[(row, col - 1)], gaps::Scorer::seq1_gap(scheme, col - 1))?;
            let left = add(scores[(row - 1, col)], gaps::Scorer::seq2_gap(scheme, row - 1))?;

            let score = S::zero().max(diag).max(up).max(left);
            scores[(row, col)] = score;
            directions[(row, col)] = Direction::resolve(score, diag, up, left);
        }
    }

    Ok(Matrices { scores, directions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairwise::scoring::Scoring;

    fn directions(matrices: &Matrices<i32>) -> Vec<String> {
        matrices
            .directions()
            .iter_rows()
            .map(|row| row.iter().map(Direction::symbol).collect())
            .collect()
    }

    #[test]
    fn test_fill() {
        let (query, reference): (&[u8], &[u8]) = (b"ACGT", b"ACGT");
        let matrices = fill(&query, &reference, &Scoring::<i32>::default().scheme()).unwrap();

        let scores: Vec<_> = matrices.scores().iter_rows().map(|x| x.to_vec()).collect();
        assert_eq!(
            scores,
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 5, 1, 0, 0],
                vec![0, 1, 10, 6, 2],
                vec![0, 0, 6, 15, 11],
                vec![0, 0, 2, 11, 20],
            ]
        );
        assert_eq!(
            directions(&matrices),
            vec!["ZZZZZ", "ZDUZZ", "ZLDUU", "ZZLDU", "ZZLLD"]
        );
    }

    #[test]
    fn test_fill_tie_breaks() {
        let scoring = Scoring::<i32>::default();

        // (2, 2): diag = 5 - 4 = 1, left = 5 - 4 = 1 -> Left
        let (query, reference): (&[u8], &[u8]) = (b"AC", b"AA");
        let matrices = fill(&query, &reference, &scoring.scheme()).unwrap();
        assert_eq!(matrices.scores()[(2, 2)], 1);
        assert_eq!(matrices.directions()[(2, 2)], Direction::Left);

        // (2, 2): diag = 1, up = 1 -> Up
        let (query, reference): (&[u8], &[u8]) = (b"AA", b"AC");
        let matrices = fill(&query, &reference, &scoring.scheme()).unwrap();
        assert_eq!(matrices.scores()[(2, 2)], 1);
        assert_eq!(matrices.directions()[(2, 2)], Direction::Up);

        // (2, 2): up = 1, left = 1 -> Up
        let (query, reference): (&[u8], &[u8]) = (b"AC", b"CA");
        let matrices = fill(&query, &reference, &scoring.scheme()).unwrap();
        assert_eq!(matrices.scores()[(2, 2)], 1);
        assert_eq!(matrices.directions()[(2, 2)], Direction::Up);

        // (2, 2): diag = 1 - 1 = 0 and left = 1 - 1 = 0 -> Zero
        let scoring = Scoring::<i32>::new(1, -1, -1).unwrap();
        let (query, reference): (&[u8], &[u8]) = (b"AC", b"AA");
        let matrices = fill(&query, &reference, &scoring.scheme()).unwrap();
        assert_eq!(matrices.scores()[(2, 2)], 0);
        assert_eq!(matrices.directions()[(2, 2)], Direction::Zero);
    }

    #[test]
    fn test_fill_empty() {
        let scheme = Scoring::<i32>::default().scheme();
        for (query, reference) in [
            (b"".as_slice(), b"ACGT".as_slice()),
            (b"ACGT".as_slice(), b"".as_slice()),
            (b"".as_slice(), b"".as_slice()),
        ] {
            let matrices = fill(&query, &reference, &scheme).unwrap();
            assert_eq!(matrices.scores().rows(), query.len() + 1);
            assert_eq!(matrices.scores().cols(), reference.len() + 1);
            assert!(matrices.scores().iter_rows().flatten().all(|x| *x == 0));
            assert!(
                matrices
                    .directions()
                    .iter_rows()
                    .flatten()
                    .all(|x| *x == Direction::Zero)
            );
        }
    }

    #[test]
    fn test_fill_overflow() {
        let scheme = Scoring::<i8>::default().scheme();

        // 25 matches reach 125, the largest multiple of 5 below i8::MAX
        let seq = [b'A'; 25];
        let matrices = fill(&seq, &seq, &scheme).unwrap();
        assert_eq!(matrices.scores()[(25, 25)], 125);

        let seq = [b'A'; 30];
        let err = fill(&seq, &seq, &scheme).unwrap_err();
        assert_eq!(err.to_string(), "Score overflow at (26, 26)");
    }
}
