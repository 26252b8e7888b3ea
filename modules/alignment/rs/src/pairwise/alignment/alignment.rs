use std::fmt::Display;
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::{Result, ensure};

use swalign_core_rs::Alignable;
use swalign_core_rs::num::PrimUInt;

use super::offset::Offset;
use super::op::Op;
use super::pair::{AlignedPair, GAP};
use super::step::Step;
use crate::Score;

/// A local alignment between two sequences.
///
/// `seq1` and `seq2` are the half-open ranges covered by the alignment in the first (query)
/// and the second (reference) sequence. Steps are listed from left to right.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct Alignment<S: Score, Len: PrimUInt + Into<usize> = u16> {
    score: S,
    steps: Vec<Step<Len>>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S: Score, Len: PrimUInt + Into<usize>> Alignment<S, Len> {
    /// Empty alignment has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of alignment columns - the sum of all step lengths.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| (*x.len()).into()).sum()
    }

    /// Number of columns with identical symbols.
    pub fn matches(&self) -> usize {
        self.steps
            .iter()
            .filter(|x| *x.op() == Op::Match)
            .map(|x| (*x.len()).into())
            .sum()
    }

    /// Returns the RLE representation of the alignment, e.g. `4=1v3=`.
    pub fn rle(&self) -> String
    where
        Len: Display,
    {
        Step::rle_string(self.steps.iter())
    }

    /// Returns alignment steps paired with their start position in sequence coordinates.
    pub fn tracked_steps(&self) -> impl Iterator<Item = (Offset<usize, usize>, Step<Len>)> + '_ {
        let mut offset = Offset::new(self.seq1.start, self.seq2.start);
        self.steps.iter().map(move |step| {
            let start = offset;
            offset = offset.apply(step);
            (start, *step)
        })
    }

    /// The same alignment with the roles of the two sequences swapped.
    pub fn inverted(&self) -> Self {
        Self {
            score: self.score,
            steps: self.steps.iter().map(Step::inverted).collect(),
            seq1: self.seq2.clone(),
            seq2: self.seq1.clone(),
        }
    }

    /// Renders the alignment as a pair of gapped strings using the `GAP` marker.
    pub fn gapped<Q, R>(&self, query: &Q, reference: &R) -> Result<AlignedPair>
    where
        Q: Alignable,
        R: Alignable,
        Q::Symbol: Copy + Into<char>,
        R::Symbol: Copy + Into<char>,
    {
        ensure!(
            self.seq1.end <= query.len(),
            "Alignment spans {:?} but the query has only {} symbols",
            self.seq1,
            query.len()
        );
        ensure!(
            self.seq2.end <= reference.len(),
            "Alignment spans {:?} but the reference has only {} symbols",
            self.seq2,
            reference.len()
        );

        let columns = self.len();
        let (mut aligned_query, mut aligned_reference) =
            (String::with_capacity(columns), String::with_capacity(columns));
        for (start, step) in self.tracked_steps() {
            for (shift, op) in step.ops().enumerate() {
                let (q, r) = match op {
                    Op::GapFirst => (GAP, (*reference.at(start.seq2 + shift)).into()),
                    Op::GapSecond => ((*query.at(start.seq1 + shift)).into(), GAP),
                    Op::Match | Op::Mismatch => (
                        (*query.at(start.seq1 + shift)).into(),
                        (*reference.at(start.seq2 + shift)).into(),
                    ),
                };
                aligned_query.push(q);
                aligned_reference.push(r);
            }
        }
        Ok(AlignedPair::new(aligned_query, aligned_reference))
    }
}
