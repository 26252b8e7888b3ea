use std::ops::Range;

use eyre::{Result, ensure};
use itertools::{Itertools, Product};

use crate::pairwise::alignment::{Alignment, Op, Step};
use crate::{Alignable, Score};

use super::builder::Matrices;
use super::direction::Direction;

/// Traces the alignment ending at `(row, col)` back to the closest `Zero` cell.
pub fn trace<S, Seq1, Seq2>(
    matrices: &Matrices<S>,
    seq1: &Seq1,
    seq2: &Seq2,
    row: usize,
    col: usize,
) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    let (rows, cols) = (matrices.scores().rows(), matrices.scores().cols());
    ensure!(
        seq1.len() + 1 == rows && seq2.len() + 1 == cols,
        "Sequences of length {} and {} don't match the {}x{} matrix",
        seq1.len(),
        seq2.len(),
        rows,
        cols
    );
    ensure!(
        row < rows && col < cols,
        "Cell ({}, {}) is outside of the {}x{} matrix",
        row,
        col,
        rows,
        cols
    );
    Ok(walk(matrices, seq1, seq2, row, col))
}

// Each step decreases row + col, and row 0 / column 0 are always Zero.
fn walk<S, Seq1, Seq2>(
    matrices: &Matrices<S>,
    seq1: &Seq1,
    seq2: &Seq2,
    end1: usize,
    end2: usize,
) -> Alignment<S>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    let (mut row, mut col) = (end1, end2);
    let mut ops = Vec::with_capacity(row + col);
    loop {
        match matrices.directions()[(row, col)] {
            Direction::Zero => break,
            Direction::Diag => {
                let op = if seq1.at(row - 1) == seq2.at(col - 1) {
                    Op::Match
                } else {
                    Op::Mismatch
                };
                ops.push(op);
                row -= 1;
                col -= 1;
            }
            Direction::Up => {
                ops.push(Op::GapFirst);
                col -= 1;
            }
            Direction::Left => {
                ops.push(Op::GapSecond);
                row -= 1;
            }
        }
    }
    ops.reverse();

    Alignment::new(
        matrices.scores()[(end1, end2)],
        Step::encode(ops),
        row..end1,
        col..end2,
    )
}

/// Lazily traces every interior cell whose score equals the target, in row-major order.
pub struct Tracebacks<'a, S: Score, Seq1, Seq2> {
    matrices: &'a Matrices<S>,
    seq1: &'a Seq1,
    seq2: &'a Seq2,
    target: S,
    cells: Product<Range<usize>, Range<usize>>,
}

impl<'a, S, Seq1, Seq2> Tracebacks<'a, S, Seq1, Seq2>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    pub fn new(matrices: &'a Matrices<S>, seq1: &'a Seq1, seq2: &'a Seq2, target: S) -> Self {
        debug_assert_eq!(matrices.scores().rows(), seq1.len() + 1);
        debug_assert_eq!(matrices.scores().cols(), seq2.len() + 1);

        let cells = (1..matrices.scores().rows()).cartesian_product(1..matrices.scores().cols());
        Self {
            matrices,
            seq1,
            seq2,
            target,
            cells,
        }
    }
}

impl<S, Seq1, Seq2> Iterator for Tracebacks<'_, S, Seq1, Seq2>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    type Item = Alignment<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let scores = self.matrices.scores();
        let (row, col) = self
            .cells
            .by_ref()
            .find(|cell| scores[*cell] == self.target)?;
        Some(walk(self.matrices, self.seq1, self.seq2, row, col))
    }
}
