// Smith-Waterman local alignment with a single traceback pointer per cell.
// The score and direction matrices are filled once, row by row (query symbols),
// and never change afterwards.

pub use aligner::Aligner;
pub use builder::{Matrices, fill};
pub use direction::Direction;
pub use extract::max_score;
pub use grid::{DirectionGrid, ScoreGrid};
pub use matrix::Matrix;
pub use report::Report;
pub use traceback::{Tracebacks, trace};

mod aligner;
mod builder;
mod direction;
mod extract;
mod grid;
mod matrix;
mod report;
mod traceback;
