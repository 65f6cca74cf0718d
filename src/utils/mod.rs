//! Arithmetic helpers for reasoning about the digit universe

pub mod bounds;

pub use bounds::{is_achievable, max_achievable_sum, min_achievable_sum};

#[cfg(test)]
mod tests;
