use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// Symbol reserved for gapped positions in the aligned strings.
pub const GAP: char = '_';

/// Gapped, column-by-column view of an alignment. Both strings have the same number of symbols.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(
    Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Getters, Dissolve, Constructor, From, Into,
)]
pub struct AlignedPair {
    query: String,
    reference: String,
}

impl AlignedPair {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.query.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.reference.is_empty()
    }
}

impl Display for AlignedPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.query)?;
        write!(f, "{}", self.reference)
    }
}
