use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::Score;
use crate::pairwise::alignment::AlignedPair;

/// Printable summary of a traceback: the target score and every alignment reaching it.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve, Constructor)]
pub struct Report<S: Score> {
    score: S,
    pairs: Vec<AlignedPair>,
}

impl<S: Score> Display for Report<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alignment score: {}", self.score)?;
        writeln!(f, "Alignments: {}", self.pairs.len())?;
        for pair in &self.pairs {
            writeln!(f, "{pair}")?;
        }
        Ok(())
    }
}
