pub use alignment::Alignment;
pub use offset::Offset;
pub use op::Op;
pub use pair::{AlignedPair, GAP};
pub use step::Step;

mod alignment;
mod offset;
mod op;
mod pair;
mod step;
