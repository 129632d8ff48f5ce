use super::entry::Entry;
use super::error::PoolError;
use super::random_source::{RandomSource, ThreadRandom};
use super::Weight;
use log::{debug, trace};

///
/// An ordered collection of weighted values that can hand back one value at random, with
/// heavier values drawn more often.
///
/// A draw is a single integer in `[0, total_weight)`. It selects the first entry whose running
/// sum of weights is at least the draw.
///
/// Order is insertion order unless changed through an index-based operation. It does not affect
/// how likely a value is to be drawn, but it is visible through [`WeightedPool::get`] and
/// iteration, and no operation reorders entries on its own.
///
/// Every stored entry has a weight greater than zero. A write that would break this is
/// rejected before the pool is touched.
///
/// Cloning copies the entries, so a clone and its source never share entry storage.
#[derive(Debug, Clone)]
pub struct WeightedPool<T, R = ThreadRandom> {
    entries: Vec<Entry<T>>,
    source: R,
}

impl<T> WeightedPool<T, ThreadRandom> {
    pub fn new() -> Self {
        Self::with_source(ThreadRandom)
    }

    /// Builds a pool from `pairs`, keeping their order.
    ///
    /// `None` stands for an absent source and is rejected. The whole import is also rejected
    /// if any pair has a weight of zero or less.
    pub fn from_pairs<I, E>(pairs: Option<I>) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<T>>,
    {
        Self::from_pairs_with_source(pairs, ThreadRandom)
    }
}

impl<T, R: RandomSource + Default> Default for WeightedPool<T, R> {
    fn default() -> Self {
        Self::with_source(R::default())
    }
}

impl<T, R: RandomSource> WeightedPool<T, R> {
    pub fn with_source(source: R) -> Self {
        WeightedPool {
            entries: Vec::new(),
            source,
        }
    }

    pub fn from_pairs_with_source<I, E>(pairs: Option<I>, source: R) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<T>>,
    {
        let pairs = pairs.ok_or_else(|| PoolError::argument_required("pairs"))?;
        let entries: Vec<Entry<T>> = pairs.into_iter().map(Into::into).collect();
        for entry in &entries {
            check_weight(entry.weight)?;
        }
        debug!("Imported {} entries", entries.len());
        Ok(WeightedPool { entries, source })
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all stored weights; 0 for an empty pool.
    pub fn total_weight(&self) -> i64 {
        total_of(&self.entries)
    }

    pub fn get(&self, index: usize) -> Result<&Entry<T>, PoolError> {
        self.entries.get(index).ok_or(PoolError::OutOfRange {
            index,
            count: self.entries.len(),
        })
    }

    /// Replaces the entry at `index`, returning the one it displaced.
    pub fn set(&mut self, index: usize, entry: Entry<T>) -> Result<Entry<T>, PoolError> {
        check_weight(entry.weight)?;
        let count = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(PoolError::OutOfRange { index, count })?;
        Ok(std::mem::replace(slot, entry))
    }

    pub fn add(&mut self, value: T, weight: Weight) -> Result<(), PoolError> {
        self.push(Entry::new(value, weight))
    }

    /// Appends `entry` after every existing entry.
    pub fn push(&mut self, entry: Entry<T>) -> Result<(), PoolError> {
        check_weight(entry.weight)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Inserts `entry` at `index`, shifting later entries back. `index` may equal `count()`.
    pub fn insert(&mut self, index: usize, entry: Entry<T>) -> Result<(), PoolError> {
        check_weight(entry.weight)?;
        if index > self.entries.len() {
            return Err(PoolError::OutOfRange {
                index,
                count: self.entries.len(),
            });
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Removes the first entry matching both value and weight. Returns whether one was found.
    pub fn remove(&mut self, entry: &Entry<T>) -> bool
    where
        T: PartialEq,
    {
        match self.entries.iter().position(|stored| stored == entry) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Entry<T>, PoolError> {
        if index >= self.entries.len() {
            return Err(PoolError::OutOfRange {
                index,
                count: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry<T>> {
        self.entries
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    ///
    /// Draws one value using the pool's own random source.
    ///
    /// With `remove` set, the first entry equal to the drawn one is taken out of the pool.
    ///
    /// # Errors
    /// [`PoolError::EmptyCollection`] if the pool has no entries, and [`PoolError::Internal`]
    /// if the source hands back a draw outside `[0, total_weight)`.
    pub fn sample(&mut self, remove: bool) -> Result<T, PoolError>
    where
        T: Clone + PartialEq,
    {
        draw(&mut self.entries, &mut self.source, remove)
    }

    /// As [`WeightedPool::sample`], but drawing from `source` instead of the pool's own.
    pub fn sample_with<S: RandomSource>(
        &mut self,
        mut source: S,
        remove: bool,
    ) -> Result<T, PoolError>
    where
        T: Clone + PartialEq,
    {
        draw(&mut self.entries, &mut source, remove)
    }
}

impl<T> TryFrom<Vec<(T, Weight)>> for WeightedPool<T> {
    type Error = PoolError;

    fn try_from(pairs: Vec<(T, Weight)>) -> Result<Self, Self::Error> {
        Self::from_pairs(Some(pairs))
    }
}

impl<T> TryFrom<Vec<Entry<T>>> for WeightedPool<T> {
    type Error = PoolError;

    fn try_from(entries: Vec<Entry<T>>) -> Result<Self, Self::Error> {
        Self::from_pairs(Some(entries))
    }
}

impl<'a, T, R> IntoIterator for &'a WeightedPool<T, R> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T, R> IntoIterator for WeightedPool<T, R> {
    type Item = Entry<T>;
    type IntoIter = std::vec::IntoIter<Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn check_weight(weight: Weight) -> Result<(), PoolError> {
    if weight <= 0 {
        debug!("Rejecting write with weight {}", weight);
        return Err(PoolError::non_positive_weight(weight));
    }
    Ok(())
}

fn total_of<T>(entries: &[Entry<T>]) -> i64 {
    entries.iter().map(|entry| i64::from(entry.weight)).sum()
}

/// Index of the entry that owns `draw` on the cumulative-weight line.
///
/// The first entry whose running sum reaches `draw` wins, so a draw landing exactly on a
/// boundary belongs to the entry that ends there, not the one that starts there.
fn select_index<T>(entries: &[Entry<T>], draw: i64) -> Option<usize> {
    let mut cumulative: i64 = 0;
    for (index, entry) in entries.iter().enumerate() {
        cumulative += i64::from(entry.weight);
        if cumulative >= draw {
            return Some(index);
        }
    }
    None
}

fn draw<T, S>(entries: &mut Vec<Entry<T>>, source: &mut S, remove: bool) -> Result<T, PoolError>
where
    T: Clone + PartialEq,
    S: RandomSource + ?Sized,
{
    if entries.is_empty() {
        return Err(PoolError::EmptyCollection);
    }
    let total = total_of(entries);
    let draw = source.next_in_range(0, total);
    if !(0..total).contains(&draw) {
        return Err(PoolError::Internal(format!(
            "random source returned {} outside [0, {})",
            draw, total
        )));
    }
    let index = select_index(entries, draw).ok_or_else(|| {
        PoolError::Internal(format!(
            "draw {} not covered by {} entries totalling {}",
            draw,
            entries.len(),
            total
        ))
    })?;
    trace!(
        "Draw {} of {} selected index {} of {}",
        draw,
        total,
        index,
        entries.len()
    );

    if remove {
        let first_match = entries
            .iter()
            .position(|entry| *entry == entries[index])
            .unwrap_or(index);
        return Ok(entries.remove(first_match).value);
    }
    Ok(entries[index].value.clone())
}
