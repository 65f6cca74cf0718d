pub mod constants;

mod cache;
mod core;
mod state;

pub use cache::SearchCache;
pub use self::core::CombinationSearch;
