use derive_getters::Dissolve;
use eyre::{Result, ensure};

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

use super::{Delegate, Score, gaps, symbols};

/// Linear scoring configuration for local alignment: a reward for identical symbols,
/// a penalty for different ones, and a flat penalty for each gapped symbol.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Dissolve)]
pub struct Scoring<S: Score> {
    pub matched: S,
    pub mismatch: S,
    pub gap: S,
}

impl<S: Score> Scoring<S> {
    pub fn new(matched: S, mismatch: S, gap: S) -> Result<Self> {
        let scoring = Self {
            matched,
            mismatch,
            gap,
        };
        scoring.validate()?;
        Ok(scoring)
    }

    /// Ensures the scores are usable for local alignment.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.matched > S::zero(),
            "Match score must be positive, got {}",
            self.matched
        );
        ensure!(
            self.mismatch < S::zero(),
            "Mismatch score must be negative, got {}",
            self.mismatch
        );
        ensure!(
            self.gap < S::zero(),
            "Gap score must be negative, got {}",
            self.gap
        );
        Ok(())
    }

    /// Composes the scoring scheme consumed by the matrix builder.
    pub fn scheme<Symbol: PartialEq>(
        &self,
    ) -> Delegate<S, Symbol, symbols::Equality<S, Symbol>, gaps::Linear<S>> {
        super::compose(
            symbols::Equality::new(self.matched, self.mismatch),
            gaps::Linear { penalty: self.gap },
        )
    }
}

impl<S: Score> Default for Scoring<S> {
    /// +5 for a match, -4 for a mismatch, -4 per gapped symbol.
    fn default() -> Self {
        let four = S::one() + S::one() + S::one() + S::one();
        Scoring {
            matched: four + S::one(),
            mismatch: S::zero() - four,
            gap: S::zero() - four,
        }
    }
}
