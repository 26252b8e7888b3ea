use std::fmt::Display;

pub use swalign_core_rs::{Alignable, Reversed};

use swalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Pairwise alignment score - any signed primitive integer.
pub trait Score: PrimSInt + Display {}

impl<T: PrimSInt + Display> Score for T {}
