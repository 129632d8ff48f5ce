//! A weighted pool: values paired with positive integer weights, drawn at random in
//! proportion to those weights.
pub mod pool;

pub use pool::{
    Entry, PoolError, RandomSource, ScriptedRandom, SeededRandom, ThreadRandom, Weight,
    WeightedPool,
};
