use super::Weight;
use serde::{Deserialize, Serialize};

/// One value in a pool together with its relative likelihood.
///
/// The weight is not a probability: a value's chance of being drawn is its weight divided by
/// the total weight of the pool it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry<T> {
    pub value: T,
    pub weight: Weight,
}

impl<T> Entry<T> {
    pub fn new(value: T, weight: Weight) -> Self {
        Entry { value, weight }
    }
}

impl<T> From<(T, Weight)> for Entry<T> {
    fn from((value, weight): (T, Weight)) -> Self {
        Entry { value, weight }
    }
}

impl<T> From<Entry<T>> for (T, Weight) {
    fn from(entry: Entry<T>) -> Self {
        (entry.value, entry.weight)
    }
}
