use itertools::iproduct;

use crate::Score;

use super::matrix::Matrix;

/// Best local alignment score over all interior cells, never below zero.
pub fn max_score<S: Score>(scores: &Matrix<S>) -> S {
    iproduct!(1..scores.rows(), 1..scores.cols())
        .map(|cell| scores[cell])
        .fold(S::zero(), |best, score| best.max(score))
}
