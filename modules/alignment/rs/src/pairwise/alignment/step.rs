use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::{Result, eyre};

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

use swalign_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in the alignment
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The number of consecutive operations. Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Run-length encodes a stream of single operations.
    /// Runs longer than `Len::max_value()` are split into several steps.
    pub fn encode(ops: impl IntoIterator<Item = Op>) -> Vec<Self> {
        let mut steps: Vec<Self> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op && last.len < Len::max_value() => {
                    last.len = last.len + Len::one();
                }
                _ => steps.push(Self {
                    len: Len::one(),
                    op,
                }),
            }
        }
        steps
    }

    /// The same step with the roles of the two sequences swapped.
    pub fn inverted(&self) -> Self {
        Self {
            len: self.len,
            op: self.op.inverted(),
        }
    }

    /// Expands the step back into single operations.
    pub fn ops(&self) -> impl Iterator<Item = Op>
    where
        Len: Into<usize>,
    {
        std::iter::repeat_n(self.op, self.len.into())
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        let mut result = String::new();
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}
