pub mod entry;
pub mod error;
pub mod random_source;
pub mod weighted_pool;

pub use entry::Entry;
pub use error::PoolError;
pub use random_source::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use weighted_pool::WeightedPool;

/// Relative likelihood of an entry. Only strictly positive weights are ever stored.
pub type Weight = i32;
