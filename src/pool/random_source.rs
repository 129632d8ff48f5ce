use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can produce a uniformly distributed integer in `[low, high)`.
///
/// A pool calls this exactly once per draw, with `low = 0` and `high` set to its total
/// weight, so `high > low` always holds for pool callers.
///
/// # Panics
/// The generator-backed sources ([`ThreadRandom`], [`SeededRandom`]) panic if `high <= low`.
pub trait RandomSource {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        (**self).next_in_range(low, high)
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..high)
    }
}

/// A reproducible source: the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }
}

///
/// Replays a fixed list of draws, starting over once the list is used up.
///
/// The draws are returned as given, without being clamped to the requested range, so a
/// script can also feed a pool values it should reject.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<i64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<i64>) -> Self {
        ScriptedRandom { draws, next: 0 }
    }

    /// How many draws have been handed out so far.
    pub fn calls(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: i64, _high: i64) -> i64 {
        if self.draws.is_empty() {
            self.next += 1;
            return low;
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedRandom::new(vec![2, 0, 1]);
        let draws: Vec<i64> = (0..5).map(|_| source.next_in_range(0, 3)).collect();
        assert_eq!(draws, vec![2, 0, 1, 2, 0]);
        assert_eq!(source.calls(), 5);
    }

    #[test]
    fn test_scripted_empty_yields_low() {
        let mut source = ScriptedRandom::default();
        assert_eq!(source.next_in_range(4, 10), 4);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_in_range(0, 1000), b.next_in_range(0, 1000));
        }
    }

    #[test]
    fn test_thread_random_stays_in_range() {
        let mut source = ThreadRandom;
        for _ in 0..1000 {
            let draw = source.next_in_range(0, 7);
            assert!((0..7).contains(&draw));
        }
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        fn one_draw<S: RandomSource>(mut source: S) -> i64 {
            source.next_in_range(0, 3)
        }
        let mut source = ScriptedRandom::new(vec![1, 2]);
        assert_eq!(one_draw(&mut source), 1);
        assert_eq!(source.next_in_range(0, 3), 2);
    }
}
