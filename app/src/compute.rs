//! The deliberately slow computation shown in the view.

use std::hint::black_box;

/// Default loop length used by the view.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Sums `0..iterations` one step at a time, wrapping on overflow.
///
/// The loop is kept opaque to the optimizer so the cost stays linear in
/// `iterations`.
pub fn expensive_value(iterations: u64) -> u64 {
    let mut result: u64 = 0;
    for i in 0..iterations {
        result = result.wrapping_add(black_box(i));
    }
    result
}

/// Caches the last output of a function keyed by its input.
#[derive(Debug)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns the cached value for `key`, computing it only when `key` changed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        match &self.last {
            Some((cached, value)) if *cached == key => value.clone(),
            _ => {
                let value = compute(&key);
                self.last = Some((key, value.clone()));
                value
            }
        }
    }
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { last: None }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn expensive_value_matches_closed_form() {
        for n in [0u64, 1, 2, 10, 1_000] {
            let expected = if n == 0 { 0 } else { n * (n - 1) / 2 };
            assert_eq!(expensive_value(n), expected, "n = {n}");
        }
    }

    #[test]
    fn memo_computes_once_per_key() {
        let calls = Cell::new(0);
        let mut memo = Memo::new();
        let square = |k: &u64| {
            calls.set(calls.get() + 1);
            k * k
        };

        assert_eq!(memo.get_or_compute(3, square), 9);
        assert_eq!(memo.get_or_compute(3, square), 9);
        assert_eq!(calls.get(), 1);

        assert_eq!(memo.get_or_compute(4, square), 16);
        assert_eq!(calls.get(), 2);
    }
}
