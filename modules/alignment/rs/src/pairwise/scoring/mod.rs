pub use config::Scoring;
pub use delegate::Delegate;

pub use crate::Score;

mod config;
mod delegate;
pub mod gaps;
pub mod symbols;

/// A complete scoring scheme: substitution scores for aligned symbols and penalties for gaps.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}
