use swalign_core_rs::num::PrimUInt;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// `Op` represents a single operation in a pairwise alignment.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap in the first sequence: a symbol of the second sequence is aligned against nothing (v)
    GapFirst,
    /// A gap in the second sequence: a symbol of the first sequence is aligned against nothing (^)
    GapSecond,
    /// Identical symbols (=)
    Match,
    /// Different symbols (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// The same operation with the roles of the two sequences swapped.
    pub fn inverted(&self) -> Self {
        match self {
            Op::GapFirst => Op::GapSecond,
            Op::GapSecond => Op::GapFirst,
            Op::Match => Op::Match,
            Op::Mismatch => Op::Mismatch,
        }
    }

    /// Advances the sequence positions by `len` applications of the operation.
    pub fn apply<Len, Seq1Idx, Seq2Idx>(&self, seq1: &mut Seq1Idx, seq2: &mut Seq2Idx, len: Len)
    where
        Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
        Seq1Idx: PrimUInt,
        Seq2Idx: PrimUInt,
    {
        match self {
            Op::GapFirst => *seq2 = *seq2 + len.into(),
            Op::GapSecond => *seq1 = *seq1 + len.into(),
            Op::Match | Op::Mismatch => {
                *seq1 = *seq1 + len.into();
                *seq2 = *seq2 + len.into();
            }
        };
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
