//! Shared instances for small integer values.

use std::sync::OnceLock;

const LOWEST: i32 = -128;
const HIGHEST: i32 = 127;
const SLOT_COUNT: usize = 256;

/// Write-once table of values for keys in `-128..=127`.
///
/// A slot is filled the first time its key is requested. Concurrent first
/// requests for the same key may each build a value; every builder produces an
/// equal value and exactly one is stored. Keys outside the range are built
/// fresh on every request.
pub(crate) struct SmallIntCache<T> {
    slots: [OnceLock<T>; SLOT_COUNT],
}

impl<T: Clone> SmallIntCache<T> {
    pub(crate) const fn new() -> Self {
        SmallIntCache {
            slots: [const { OnceLock::new() }; SLOT_COUNT],
        }
    }

    /// Return the cached value for `key`, building it with `build` on first use.
    pub(crate) fn get_or_build(&self, key: i32, build: impl FnOnce() -> T) -> T {
        match self.slot(key) {
            Some(slot) => slot.get_or_init(build).clone(),
            None => build(),
        }
    }

    fn slot(&self, key: i32) -> Option<&OnceLock<T>> {
        if (LOWEST..=HIGHEST).contains(&key) {
            self.slots.get((key - LOWEST) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn builds_once_per_key_in_range() {
        let cache = SmallIntCache::new();
        let builds = Cell::new(0);
        for _ in 0..3 {
            let value = cache.get_or_build(5, || {
                builds.set(builds.get() + 1);
                5 * 10
            });
            assert_eq!(value, 50);
        }
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn bounds_are_cached() {
        let cache = SmallIntCache::new();
        assert_eq!(cache.get_or_build(-128, || "low"), "low");
        assert_eq!(cache.get_or_build(127, || "high"), "high");
        assert_eq!(cache.get_or_build(-128, || "rebuilt"), "low");
        assert_eq!(cache.get_or_build(127, || "rebuilt"), "high");
    }

    #[test]
    fn keys_outside_range_are_never_stored() {
        let cache = SmallIntCache::new();
        assert_eq!(cache.get_or_build(128, || 1), 1);
        assert_eq!(cache.get_or_build(128, || 2), 2);
        assert_eq!(cache.get_or_build(-129, || 3), 3);
        assert_eq!(cache.get_or_build(i32::MIN, || 4), 4);
        assert_eq!(cache.get_or_build(i32::MAX, || 5), 5);
    }

    #[test]
    fn concurrent_first_use_yields_one_value() {
        let cache = SmallIntCache::<i64>::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for key in -128..=127 {
                        assert_eq!(cache.get_or_build(key, || i64::from(key) * 3), i64::from(key) * 3);
                    }
                });
            }
        });
    }
}
