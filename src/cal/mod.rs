/*!
The per-calendar year/month/day calculators.

Everything in this module works with "absolute" years (no eras) and day
numbers counted from the Unix epoch, 1970-01-01 in the ISO calendar. The
[`YearMonthDayCalculator`] trait carries the generic machinery as provided
methods; each calendar implements the handful of primitives that actually
differ (leap years, month shapes, where years start) and overrides a
provided method only when it has a faster or genuinely different way of
doing the job.
*/

use core::cmp::Ordering;

use crate::{date::YearMonthDay, error::Error};

use self::cache::{YearStartCache, INVALID_ENTRY_YEAR};

pub(crate) mod badi;
pub(crate) mod cache;
pub(crate) mod coptic;
pub(crate) mod era;
pub(crate) mod gregorian;
pub(crate) mod hebrew;
pub(crate) mod islamic;
pub(crate) mod persian;
pub(crate) mod umalqura;

/// The numeric profile every calculator shares: its supported year range,
/// where year 1 starts, how long an average year is and the year-start
/// cache.
pub(crate) struct CalculatorCore {
    pub(crate) min_year: i32,
    pub(crate) max_year: i32,
    /// Ten average years in days, deliberately stored one day high so that
    /// the initial guess in [`year_and_day_of_year`] errs on the low side
    /// and never reads a year start far out of bounds.
    average_days_per_10_years: i32,
    pub(crate) days_at_start_of_year_1: i32,
    cache: YearStartCache,
}

impl CalculatorCore {
    pub(crate) fn new(
        min_year: i32,
        max_year: i32,
        average_days_per_10_years: i32,
        days_at_start_of_year_1: i32,
    ) -> CalculatorCore {
        // A larger range would let real years collide with the cache's
        // bootstrap entry.
        assert!(max_year < INVALID_ENTRY_YEAR);
        assert!(-32768 < min_year && min_year <= max_year);
        CalculatorCore {
            min_year,
            max_year,
            average_days_per_10_years: average_days_per_10_years + 1,
            days_at_start_of_year_1,
            cache: YearStartCache::new(),
        }
    }
}

impl core::fmt::Debug for CalculatorCore {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CalculatorCore")
            .field("min_year", &self.min_year)
            .field("max_year", &self.max_year)
            .finish()
    }
}

/// The date arithmetic of one calendar system.
///
/// Implementations only ever see years within one of the calendar's
/// supported range, except for `days_in_year` and
/// `calculate_start_of_year_days`, which the year search may probe one
/// year beyond either end.
pub(crate) trait YearMonthDayCalculator: Send + Sync {
    fn core(&self) -> &CalculatorCore;

    fn months_in_year(&self, year: i32) -> i32;

    fn days_in_month(&self, year: i32, month: i32) -> i32;

    fn days_in_year(&self, year: i32) -> i32;

    fn is_leap_year(&self, year: i32) -> bool;

    fn days_from_start_of_year_to_start_of_month(
        &self,
        year: i32,
        month: i32,
    ) -> i32;

    /// Computes the day number of the start of the given year, ignoring
    /// the cache. Calculators that never consult the cache (because they
    /// precompute every year start) may leave this unreachable.
    fn calculate_start_of_year_days(&self, year: i32) -> i32;

    /// Decodes a (trusted) 1-based day of year within a (trusted) year.
    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay;

    fn add_months(
        &self,
        ymd: YearMonthDay,
        months: i32,
    ) -> Result<YearMonthDay, Error>;

    /// Finds the whole months between `start` and `end`, non-negative when
    /// `start` is not later than `end`.
    fn months_between(
        &self,
        start: YearMonthDay,
        end: YearMonthDay,
    ) -> Result<i32, Error>;

    /// Moves the given date to the given (trusted, in-range) year,
    /// adjusting the other fields as the calendar requires.
    fn set_year(&self, ymd: YearMonthDay, year: i32) -> YearMonthDay;

    /// Returns the day number of the start of the given year, consulting
    /// the cache first.
    fn start_of_year_days(&self, year: i32) -> i32 {
        cached_start_of_year(self, year)
    }

    /// Computes the day number of the given date. Assumes the date has
    /// been validated for this calendar.
    fn days_since_epoch(&self, ymd: YearMonthDay) -> i32 {
        let year = ymd.year();
        let start_of_year = self.start_of_year_days(year);
        let start_of_month = start_of_year
            + self.days_from_start_of_year_to_start_of_month(
                year,
                ymd.month(),
            );
        start_of_month + ymd.day() - 1
    }

    /// The opposite of `days_since_epoch`. Assumes the day number is
    /// within this calendar's supported span.
    fn year_month_day_from_days_since_epoch(
        &self,
        days_since_epoch: i32,
    ) -> YearMonthDay {
        let (year, zero_based_day) =
            year_and_day_of_year(self, days_since_epoch);
        self.year_month_day_from_year_and_day_of_year(
            year,
            zero_based_day + 1,
        )
    }

    /// Converts a (validated) date to its 1-based day of year.
    fn day_of_year(&self, ymd: YearMonthDay) -> i32 {
        self.days_from_start_of_year_to_start_of_month(
            ymd.year(),
            ymd.month(),
        ) + ymd.day()
    }

    /// Catch-all year/month/day validation. Calendars whose day count
    /// varies in stranger ways (Badíʿ) override this.
    fn validate(&self, year: i32, month: i32, day: i32) -> Result<(), Error> {
        let core = self.core();
        if year < core.min_year || year > core.max_year {
            return Err(Error::range(
                "year",
                year,
                core.min_year,
                core.max_year,
            ));
        }
        let months = self.months_in_year(year);
        if month < 1 || month > months {
            return Err(Error::range("month", month, 1, months));
        }
        let days = self.days_in_month(year, month);
        if day < 1 || day > days {
            return Err(Error::range("day", day, 1, days));
        }
        Ok(())
    }

    /// Compares two dates of this calendar. The default raw comparison is
    /// correct for any calendar whose months are numbered in
    /// chronological order; the Hebrew scriptural numbering overrides it.
    fn compare(&self, lhs: YearMonthDay, rhs: YearMonthDay) -> Ordering {
        lhs.cmp(&rhs)
    }
}

/// The cache-backed implementation of
/// [`YearMonthDayCalculator::start_of_year_days`]. A free function so that
/// calculators overriding the trait method for a fast path can still fall
/// back to it.
pub(crate) fn cached_start_of_year<C>(calc: &C, year: i32) -> i32
where
    C: YearMonthDayCalculator + ?Sized,
{
    let core = calc.core();
    core.cache
        .get_or_compute(year, || calc.calculate_start_of_year_days(year))
}

/// Works out the year containing the given day number, along with the
/// 0-based day of that year.
///
/// This makes an initial guess from the calendar's average year length and
/// then corrects it a year at a time. The guess is biased low (see
/// [`CalculatorCore::average_days_per_10_years`]), so the forward walk is
/// the common correction; either walk is almost always at most one step.
pub(crate) fn year_and_day_of_year<C>(
    calc: &C,
    days_since_epoch: i32,
) -> (i32, i32)
where
    C: YearMonthDayCalculator + ?Sized,
{
    let core = calc.core();
    let days_since_year_1 = days_since_epoch - core.days_at_start_of_year_1;
    // i32 is plenty: day numbers stay within ±4M, so ×10 is within ±40M.
    let mut candidate =
        (days_since_year_1 * 10) / core.average_days_per_10_years + 1;

    let candidate_start = calc.start_of_year_days(candidate);
    let mut days_from_candidate_start = days_since_epoch - candidate_start;
    if days_from_candidate_start < 0 {
        // The candidate year is later than we want. Keep going backwards
        // until we've got a non-negative result, which must then be
        // correct.
        while days_from_candidate_start < 0 {
            candidate -= 1;
            days_from_candidate_start += calc.days_in_year(candidate);
        }
        return (candidate, days_from_candidate_start);
    }
    // The candidate year is correct or earlier than the right one.
    let mut candidate_length = calc.days_in_year(candidate);
    while days_from_candidate_start >= candidate_length {
        candidate += 1;
        days_from_candidate_start -= candidate_length;
        candidate_length = calc.days_in_year(candidate);
    }
    (candidate, days_from_candidate_start)
}

/// Month addition for calendars with a fixed number of months per year,
/// where a whole number of years is just a year change.
///
/// The day of month is quietly clamped to the target month's length.
/// Errors only when the result would leave the calendar's year range.
pub(crate) fn regular_add_months<C>(
    calc: &C,
    months_in_year: i32,
    ymd: YearMonthDay,
    months: i32,
) -> Result<YearMonthDay, Error>
where
    C: YearMonthDayCalculator + ?Sized,
{
    if months == 0 {
        return Ok(ymd);
    }
    let (this_year, this_month) = (ymd.year(), ymd.month());

    // Do not refactor without careful consideration.
    // Order of calculation is important.
    let mut year_to_use;
    // Initially, month_to_use is zero-based.
    let mut month_to_use = this_month - 1 + months;
    if month_to_use >= 0 {
        year_to_use = this_year + month_to_use / months_in_year;
        month_to_use = (month_to_use % months_in_year) + 1;
    } else {
        year_to_use = this_year + month_to_use / months_in_year - 1;
        let mut rem_month_to_use = month_to_use.abs() % months_in_year;
        if rem_month_to_use == 0 {
            rem_month_to_use = months_in_year;
        }
        month_to_use = months_in_year - rem_month_to_use + 1;
        if month_to_use == 1 {
            year_to_use += 1;
        }
    }
    // End of do not refactor.

    let core = calc.core();
    if year_to_use < core.min_year || year_to_use > core.max_year {
        return Err(Error::overflow("adding months"));
    }
    // Quietly force the day of month to the nearest sane value.
    let day_to_use =
        ymd.day().min(calc.days_in_month(year_to_use, month_to_use));
    Ok(YearMonthDay::new(year_to_use, month_to_use, day_to_use))
}

/// Month counting for the same family of calendars as
/// [`regular_add_months`].
pub(crate) fn regular_months_between<C>(
    calc: &C,
    months_in_year: i32,
    start: YearMonthDay,
    end: YearMonthDay,
) -> Result<i32, Error>
where
    C: YearMonthDayCalculator + ?Sized,
{
    let diff = (end.year() - start.year()) * months_in_year + end.month()
        - start.month();

    // If we just add the difference in months to start, what do we get?
    let simple_addition = calc.add_months(start, diff)?;

    // This relies on naive comparison of year/month/day values.
    if start <= end {
        // Moving forward: if the simple addition lands on or before the
        // end, we're done. Otherwise we've overshot by a month.
        Ok(if simple_addition <= end { diff } else { diff - 1 })
    } else {
        // Moving backward: overshooting means landing before the end.
        Ok(if simple_addition >= end { diff } else { diff + 1 })
    }
}

/// A simple year-setting policy for calendars with a fixed number of
/// months: keep the month, truncate the day if the target month is
/// shorter.
pub(crate) fn regular_set_year<C>(
    calc: &C,
    ymd: YearMonthDay,
    year: i32,
) -> YearMonthDay
where
    C: YearMonthDayCalculator + ?Sized,
{
    let month = ymd.month();
    let day = ymd.day().min(calc.days_in_month(year, month));
    YearMonthDay::new(year, month, day)
}
