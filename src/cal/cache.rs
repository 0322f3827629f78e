use core::sync::atomic::{AtomicI64, Ordering};

const CACHE_INDEX_BITS: i32 = 10;
const CACHE_SIZE: usize = 1 << CACHE_INDEX_BITS;
const CACHE_INDEX_MASK: i32 = (CACHE_SIZE as i32) - 1;

const ENTRY_VALIDATION_BITS: i32 = 7;
const ENTRY_VALIDATION_MASK: i64 = (1 << ENTRY_VALIDATION_BITS) - 1;

/// The year whose cache entry every slot is initialized with.
///
/// It is chosen so that its validator can never collide with the validator
/// of a year a calculator actually supports, which keeps calendar year
/// ranges limited to roughly ±32768 × 1024. In practice they stay within
/// ±10000.
pub(crate) const INVALID_ENTRY_YEAR: i32 =
    ((ENTRY_VALIDATION_MASK as i32) >> 1) << CACHE_INDEX_BITS;

/// A fixed-size, direct-mapped cache from year to some per-year `i32`,
/// usually the day number of the start of that year.
///
/// Each slot holds `(value << 7) | validator`, where the validator is the
/// portion of the year that didn't participate in slot selection. A lookup
/// hits only when the stored validator matches the requested year's, so a
/// slot shared by two years (1024 apart) simply evicts.
///
/// Slots are single atomic words updated with relaxed ordering. A torn
/// entry can never be observed; a stale one only costs a recomputation,
/// since cached values are pure functions of the year.
pub(crate) struct YearStartCache {
    entries: [AtomicI64; CACHE_SIZE],
}

impl YearStartCache {
    pub(crate) fn new() -> YearStartCache {
        let invalid = YearStartCache::entry(INVALID_ENTRY_YEAR, 0);
        YearStartCache {
            entries: core::array::from_fn(|_| AtomicI64::new(invalid)),
        }
    }

    /// Returns the cached value for `year`, or `None` on a miss.
    pub(crate) fn get(&self, year: i32) -> Option<i32> {
        let entry = self.entries[YearStartCache::index(year)]
            .load(Ordering::Relaxed);
        if entry & ENTRY_VALIDATION_MASK == YearStartCache::validator(year) {
            Some((entry >> ENTRY_VALIDATION_BITS) as i32)
        } else {
            None
        }
    }

    /// Caches `value` for `year`, evicting whatever shared its slot.
    pub(crate) fn put(&self, year: i32, value: i32) {
        self.entries[YearStartCache::index(year)]
            .store(YearStartCache::entry(year, value), Ordering::Relaxed);
    }

    /// Returns the cached value for `year`, computing and caching it on a
    /// miss.
    pub(crate) fn get_or_compute(
        &self,
        year: i32,
        compute: impl FnOnce() -> i32,
    ) -> i32 {
        match self.get(year) {
            Some(value) => value,
            None => {
                let value = compute();
                self.put(year, value);
                value
            }
        }
    }

    fn index(year: i32) -> usize {
        (year & CACHE_INDEX_MASK) as usize
    }

    fn validator(year: i32) -> i64 {
        i64::from((year >> CACHE_INDEX_BITS) & (ENTRY_VALIDATION_MASK as i32))
    }

    fn entry(year: i32, value: i32) -> i64 {
        (i64::from(value) << ENTRY_VALIDATION_BITS)
            | YearStartCache::validator(year)
    }
}

impl core::fmt::Debug for YearStartCache {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("YearStartCache(..)")
    }
}
