//! Combination domain type split into submodules

pub mod digits;
pub mod display;
pub mod errors;

pub use digits::{Combination, CombinationSet};
pub use errors::CombinationError;
