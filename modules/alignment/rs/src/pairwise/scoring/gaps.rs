use crate::pairwise::scoring::Score;

// Gap scoring is additive: every gapped symbol is charged independently of its neighbours.
pub trait Scorer {
    type Score: Score;

    /// Penalty for a gap in the first sequence, i.e. `seq2[pos]` aligned against nothing.
    fn seq1_gap(&self, pos: usize) -> Self::Score;

    /// Penalty for a gap in the second sequence, i.e. `seq1[pos]` aligned against nothing.
    fn seq2_gap(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// Flat per-symbol gap penalty, no opening/extension distinction.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Linear<S: Score> {
    pub penalty: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.penalty
    }
}
