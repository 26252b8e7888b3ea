pub use alignment::{AlignedPair, Alignment, GAP, Offset, Op, Step};

pub mod alignment;
pub mod scoring;
pub mod sw;
