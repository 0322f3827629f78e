/*!
The Hebrew calendar, in both of its month numbering conventions.

The underlying arithmetic follows the classic "calendrical calculations"
molad computation, which always works in scriptural month numbers: Nisan
is month 1 and the year begins at Tishri, month 7. The civil numbering
labels Tishri as month 1 instead. Both conventions share a year number,
so converting between them only ever renames the month.

A year has 12 months, or 13 in a leap year, when an extra month (Adar I)
is inserted before Adar, which is then called Adar II. Heshvan and
Kislev vary in length, giving six possible year lengths: 353 to 355 days
in a common year and 383 to 385 in a leap year.
*/

use core::cmp::Ordering;

use crate::{
    cal::{
        cache::YearStartCache, CalculatorCore, YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;
const UNIX_EPOCH_DAY_AT_START_OF_YEAR_1: i32 = -2092590;
const MONTHS_PER_LEAP_CYCLE: i32 = 235;
const YEARS_PER_LEAP_CYCLE: i32 = 19;

/// Whether to number Hebrew months from Tishri (civil) or Nisan
/// (scriptural).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HebrewMonthNumbering {
    /// Months are numbered from the start of the calendar year: Tishri is
    /// month 1, and in leap years Adar I is month 6 and Adar II month 7.
    /// Months are always in chronological order.
    Civil,
    /// The traditional numbering: Nisan is month 1, Tishri month 7, and
    /// the leap month Adar II is month 13 even though it falls between
    /// months 12 and 1.
    Scriptural,
}

/// A year has 13 months when `year mod 19` is 0, 3, 6, 8, 11, 14 or 17.
fn is_hebrew_leap_year(year: i32) -> bool {
    (year * 7 + 1).rem_euclid(19) < 7
}

/// Scriptural month number for a civil one. No validation: month 13 in a
/// common year comes back as 7.
fn civil_to_scriptural(year: i32, month: i32) -> i32 {
    if month < 7 {
        return month + 6;
    }
    let leap_year = is_hebrew_leap_year(year);
    if month == 7 {
        return if leap_year { 13 } else { 1 };
    }
    if leap_year {
        month - 7
    } else {
        month - 6
    }
}

/// The inverse of [`civil_to_scriptural`], equally trusting.
fn scriptural_to_civil(year: i32, month: i32) -> i32 {
    if month >= 7 {
        return month - 6;
    }
    if is_hebrew_leap_year(year) {
        month + 7
    } else {
        month + 6
    }
}

const IS_HESHVAN_LONG_CACHE_BIT: i32 = 1 << 0;
const IS_KISLEV_SHORT_CACHE_BIT: i32 = 1 << 1;
const ELAPSED_DAYS_CACHE_SHIFT: i32 = 2;

/// The molad arithmetic, cached per year.
///
/// Each cache entry packs the "days elapsed since the Hebrew epoch at the
/// start of the year" together with the lengths of the two variable
/// months: bit 0 set means Heshvan is long, bit 1 set means Kislev is
/// short. The bottom bits are used because the year search may probe
/// slightly out-of-range years whose elapsed day count is negative.
struct ScripturalYears {
    cache: YearStartCache,
}

impl ScripturalYears {
    fn new() -> ScripturalYears {
        ScripturalYears { cache: YearStartCache::new() }
    }

    /// Returns the packed entry for the given year, consulting the cache
    /// only for supported years.
    fn entry(&self, year: i32) -> i32 {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return self.compute_entry(year);
        }
        self.cache.get_or_compute(year, || self.compute_entry(year))
    }

    fn compute_entry(&self, year: i32) -> i32 {
        let days = elapsed_days_no_cache(year);
        // We want the elapsed days for the next year as well. Check the
        // cache if possible.
        let next_year = year + 1;
        let next_year_days = if next_year < MAX_YEAR {
            match self.cache.get(next_year) {
                Some(entry) => entry >> ELAPSED_DAYS_CACHE_SHIFT,
                None => elapsed_days_no_cache(next_year),
            }
        } else {
            elapsed_days_no_cache(next_year)
        };
        let days_in_year = next_year_days - days;
        let mut entry = days << ELAPSED_DAYS_CACHE_SHIFT;
        if days_in_year % 10 == 5 {
            entry |= IS_HESHVAN_LONG_CACHE_BIT;
        }
        if days_in_year % 10 == 3 {
            entry |= IS_KISLEV_SHORT_CACHE_BIT;
        }
        entry
    }

    /// Days elapsed since the Hebrew epoch at the start of the given
    /// year. Returns 1 for year 1.
    fn elapsed_days(&self, year: i32) -> i32 {
        self.entry(year) >> ELAPSED_DAYS_CACHE_SHIFT
    }

    fn is_heshvan_long(&self, year: i32) -> bool {
        self.entry(year) & IS_HESHVAN_LONG_CACHE_BIT != 0
    }

    fn is_kislev_short(&self, year: i32) -> bool {
        self.entry(year) & IS_KISLEV_SHORT_CACHE_BIT != 0
    }

    fn days_in_year(&self, year: i32) -> i32 {
        self.elapsed_days(year + 1) - self.elapsed_days(year)
    }

    /// Month lengths in scriptural numbering.
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        match month {
            2 | 4 | 6 | 10 | 13 => 29,
            8 => {
                if self.is_heshvan_long(year) {
                    30
                } else {
                    29
                }
            }
            9 => {
                if self.is_kislev_short(year) {
                    29
                } else {
                    30
                }
            }
            12 => {
                if is_hebrew_leap_year(year) {
                    30
                } else {
                    29
                }
            }
            // 1, 3, 5, 7, 11
            _ => 30,
        }
    }

    /// Days from the start of the year (Tishri 1) to the start of the
    /// given scriptural month.
    fn days_to_start_of_month(&self, year: i32, month: i32) -> i32 {
        let heshvan = if self.is_heshvan_long(year) { 30 } else { 29 };
        let kislev = if self.is_kislev_short(year) { 29 } else { 30 };
        let is_leap = is_hebrew_leap_year(year);
        let first_adar = if is_leap { 30 } else { 29 };
        let second_adar = if is_leap { 29 } else { 0 };
        match month {
            7 => 0,
            8 => 30,
            9 => 30 + heshvan,
            10 => 30 + heshvan + kislev,
            11 => 30 + heshvan + kislev + 29,
            12 => 30 + heshvan + kislev + 29 + 30,
            13 => 30 + heshvan + kislev + 29 + 30 + first_adar,
            // Nisan through Elul: 0, 30, 59, 89, 118, 148 days after
            // whichever Adars the year has.
            _ => {
                const SPRING: [i32; 7] = [0, 0, 30, 59, 89, 118, 148];
                30 + heshvan
                    + kislev
                    + 29
                    + 30
                    + first_adar
                    + second_adar
                    + SPRING[month as usize]
            }
        }
    }

    /// Decodes a 1-based day of year into a scriptural year/month/day.
    fn year_month_day(&self, year: i32, day_of_year: i32) -> YearMonthDay {
        // Work out everything about the year in one go.
        let heshvan = if self.is_heshvan_long(year) { 30 } else { 29 };
        let kislev = if self.is_kislev_short(year) { 29 } else { 30 };
        let is_leap = is_hebrew_leap_year(year);
        let first_adar = if is_leap { 30 } else { 29 };

        let mut doy = day_of_year;
        if doy < 31 {
            // Tishri
            return YearMonthDay::new(year, 7, doy);
        }
        if doy < 31 + heshvan {
            return YearMonthDay::new(year, 8, doy - 30);
        }
        // Now "day of year without Heshvan"...
        doy -= heshvan;
        if doy < 31 + kislev {
            return YearMonthDay::new(year, 9, doy - 30);
        }
        // ... and without Kislev either.
        doy -= kislev;
        if doy < 31 + 29 {
            // Tevet
            return YearMonthDay::new(year, 10, doy - 30);
        }
        if doy < 31 + 29 + 30 {
            // Shevat
            return YearMonthDay::new(year, 11, doy - 59);
        }
        if doy < 31 + 29 + 30 + first_adar {
            // Adar, or Adar I in a leap year.
            return YearMonthDay::new(year, 12, doy - 89);
        }
        doy -= first_adar;
        if is_leap {
            if doy < 31 + 29 + 30 + 29 {
                // Adar II
                return YearMonthDay::new(year, 13, doy - 89);
            }
            doy -= 29;
        }
        // A binary search from here would save a couple of comparisons at
        // most, so it's not worth the opacity.
        if doy < 120 {
            YearMonthDay::new(year, 1, doy - 89) // Nisan
        } else if doy < 149 {
            YearMonthDay::new(year, 2, doy - 119) // Iyar
        } else if doy < 179 {
            YearMonthDay::new(year, 3, doy - 148) // Sivan
        } else if doy < 208 {
            YearMonthDay::new(year, 4, doy - 178) // Tamuz
        } else if doy < 238 {
            YearMonthDay::new(year, 5, doy - 207) // Av
        } else {
            YearMonthDay::new(year, 6, doy - 237) // Elul
        }
    }
}

/// The day on which the given year begins, counted from the Hebrew epoch
/// and including the Rosh Hashanah postponement rules.
fn elapsed_days_no_cache(year: i32) -> i32 {
    let months_elapsed =
        // Months in complete cycles so far, plus regular months in this
        // cycle, plus leap months this cycle.
        235 * ((year - 1) / 19)
        + 12 * ((year - 1) % 19)
        + (((year - 1) % 19) * 7 + 1) / 19;
    // The "second option" form of the computation, which keeps the
    // intermediate values smaller.
    let parts_elapsed = 204 + 793 * (months_elapsed % 1080);
    let hours_elapsed = 5
        + 12 * months_elapsed
        + 793 * (months_elapsed / 1080)
        + parts_elapsed / 1080;
    let day = 1 + 29 * months_elapsed + hours_elapsed / 24;
    let parts = (hours_elapsed % 24) * 1080 + parts_elapsed % 1080;
    let postpone_rosh_hashanah = parts >= 19440
        || (day % 7 == 2 && parts >= 9924 && !is_hebrew_leap_year(year))
        || (day % 7 == 1 && parts >= 16789 && is_hebrew_leap_year(year - 1));
    let alternative_day =
        if postpone_rosh_hashanah { day + 1 } else { day };
    if matches!(alternative_day % 7, 0 | 3 | 5) {
        alternative_day + 1
    } else {
        alternative_day
    }
}

pub(crate) struct HebrewCalculator {
    core: CalculatorCore,
    numbering: HebrewMonthNumbering,
    years: ScripturalYears,
}

impl HebrewCalculator {
    pub(crate) fn new(numbering: HebrewMonthNumbering) -> HebrewCalculator {
        HebrewCalculator {
            core: CalculatorCore::new(
                MIN_YEAR,
                MAX_YEAR,
                3654,
                UNIX_EPOCH_DAY_AT_START_OF_YEAR_1,
            ),
            numbering,
            years: ScripturalYears::new(),
        }
    }

    fn to_civil_month(&self, year: i32, month: i32) -> i32 {
        match self.numbering {
            HebrewMonthNumbering::Civil => month,
            HebrewMonthNumbering::Scriptural => {
                scriptural_to_civil(year, month)
            }
        }
    }

    fn to_scriptural_month(&self, year: i32, month: i32) -> i32 {
        match self.numbering {
            HebrewMonthNumbering::Scriptural => month,
            HebrewMonthNumbering::Civil => civil_to_scriptural(year, month),
        }
    }

    fn civil_to_calendar_month(&self, year: i32, month: i32) -> i32 {
        match self.numbering {
            HebrewMonthNumbering::Civil => month,
            HebrewMonthNumbering::Scriptural => {
                civil_to_scriptural(year, month)
            }
        }
    }

    fn scriptural_to_calendar_month(&self, year: i32, month: i32) -> i32 {
        match self.numbering {
            HebrewMonthNumbering::Scriptural => month,
            HebrewMonthNumbering::Civil => scriptural_to_civil(year, month),
        }
    }
}

impl YearMonthDayCalculator for HebrewCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, year: i32) -> i32 {
        if is_hebrew_leap_year(year) {
            13
        } else {
            12
        }
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        self.years.days_in_month(year, self.to_scriptural_month(year, month))
    }

    fn days_in_year(&self, year: i32) -> i32 {
        self.years.days_in_year(year)
    }

    /// A "leap year" here is one with 13 months, not one with an extra
    /// day.
    fn is_leap_year(&self, year: i32) -> bool {
        is_hebrew_leap_year(year)
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        year: i32,
        month: i32,
    ) -> i32 {
        let scriptural = self.to_scriptural_month(year, month);
        self.years.days_to_start_of_month(year, scriptural)
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        // This may get probed with year 0, which the molad arithmetic
        // handles fine. ElapsedDays returns 1 for year 1.
        let days_since_hebrew_epoch = self.years.elapsed_days(year) - 1;
        days_since_hebrew_epoch + UNIX_EPOCH_DAY_AT_START_OF_YEAR_1
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        let scriptural = self.years.year_month_day(year, day_of_year);
        match self.numbering {
            HebrewMonthNumbering::Scriptural => scriptural,
            HebrewMonthNumbering::Civil => YearMonthDay::new(
                year,
                scriptural_to_civil(year, scriptural.month()),
                scriptural.day(),
            ),
        }
    }

    fn add_months(
        &self,
        ymd: YearMonthDay,
        months: i32,
    ) -> Result<YearMonthDay, Error> {
        // This gives the same result in either month numbering, but the
        // logic is much simpler in terms of civil months.
        if months == 0 {
            return Ok(ymd);
        }
        let mut year = ymd.year();
        let mut month = self.to_civil_month(year, ymd.month());
        // Whole leap cycles work the same backwards and forwards.
        year += (months / MONTHS_PER_LEAP_CYCLE) * YEARS_PER_LEAP_CYCLE;
        let mut months = months % MONTHS_PER_LEAP_CYCLE;
        if months > 0 {
            // Act as if we'd begun at the start of the year, then add a
            // year at a time.
            months += month - 1;
            while months >= self.months_in_year(year) {
                months -= self.months_in_year(year);
                year += 1;
            }
            month = months + 1;
        } else {
            // Pretend we were given the month at the end of the year,
            // then subtract a year at a time.
            months -= self.months_in_year(year) - month;
            while months + self.months_in_year(year) <= 0 {
                months += self.months_in_year(year);
                year -= 1;
            }
            month = self.months_in_year(year) + months;
        }
        if year < self.core.min_year || year > self.core.max_year {
            return Err(Error::overflow("adding months"));
        }
        let month = self.civil_to_calendar_month(year, month);
        let day = ymd.day().min(self.days_in_month(year, month));
        Ok(YearMonthDay::new(year, month, day))
    }

    fn months_between(
        &self,
        start: YearMonthDay,
        end: YearMonthDay,
    ) -> Result<i32, Error> {
        // First (quite rough) guess, from the 235 months per 19-year
        // cycle. It's unlikely to be more than a month or two off.
        let start_civil = self.to_civil_month(start.year(), start.month());
        let start_total_months = f64::from(start_civil)
            + f64::from(start.year()) * 235.0 / 19.0;
        let end_civil = self.to_civil_month(end.year(), end.month());
        let end_total_months =
            f64::from(end_civil) + f64::from(end.year()) * 235.0 / 19.0;
        let mut diff = (end_total_months - start_total_months) as i32;

        if self.compare(start, end) != Ordering::Greater {
            // Go backwards until we've got a tight upper bound...
            while self.compare(self.add_months(start, diff)?, end)
                == Ordering::Greater
            {
                diff -= 1;
            }
            // ... then forwards until we've overshot, and correct.
            while self.compare(self.add_months(start, diff)?, end)
                != Ordering::Greater
            {
                diff += 1;
            }
            Ok(diff - 1)
        } else {
            // Moving backwards, so we need to end up with a result
            // greater than or equal to end. Same dance, mirrored.
            while self.compare(self.add_months(start, diff)?, end)
                == Ordering::Less
            {
                diff += 1;
            }
            while self.compare(self.add_months(start, diff)?, end)
                != Ordering::Less
            {
                diff -= 1;
            }
            Ok(diff + 1)
        }
    }

    /// Changes the year, maintaining month and day as well as possible.
    ///
    /// Adar II maps to Adar when the target year is common; Adar in a
    /// common year maps to Adar II when the target year is leap. The 30th
    /// day of Heshvan, Kislev or a first Adar rolls over to the 1st of
    /// the next month when the target year's month is short.
    fn set_year(&self, ymd: YearMonthDay, year: i32) -> YearMonthDay {
        let current_year = ymd.year();
        let mut target_day = ymd.day();
        let mut target_month =
            self.to_scriptural_month(current_year, ymd.month());
        if target_month == 13 && !is_hebrew_leap_year(year) {
            target_month = 12;
        } else if target_month == 12
            && is_hebrew_leap_year(year)
            && !is_hebrew_leap_year(current_year)
        {
            target_month = 13;
        }
        if target_day == 30
            && matches!(target_month, 8 | 9 | 12)
            && self.years.days_in_month(year, target_month) != 30
        {
            target_day = 1;
            target_month += 1;
            // From Adar, roll to Nisan.
            if target_month == 13 {
                target_month = 1;
            }
        }
        let month = self.scriptural_to_calendar_month(year, target_month);
        YearMonthDay::new(year, month, target_day)
    }

    fn compare(&self, lhs: YearMonthDay, rhs: YearMonthDay) -> Ordering {
        match self.numbering {
            // Civil month numbers are chronological, so the raw
            // comparison is correct.
            HebrewMonthNumbering::Civil => lhs.cmp(&rhs),
            // Scriptural months wrap around mid-year, so compare via
            // the civil numbering, one component at a time.
            HebrewMonthNumbering::Scriptural => lhs
                .year()
                .cmp(&rhs.year())
                .then_with(|| {
                    let lhs_civil =
                        scriptural_to_civil(lhs.year(), lhs.month());
                    let rhs_civil =
                        scriptural_to_civil(rhs.year(), rhs.month());
                    lhs_civil.cmp(&rhs_civil)
                })
                .then_with(|| lhs.day().cmp(&rhs.day())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: i32, day: i32) -> YearMonthDay {
        YearMonthDay::new(year, month, day)
    }

    fn scriptural() -> HebrewCalculator {
        HebrewCalculator::new(HebrewMonthNumbering::Scriptural)
    }

    fn civil() -> HebrewCalculator {
        HebrewCalculator::new(HebrewMonthNumbering::Civil)
    }

    #[test]
    fn leap_year_cycle() {
        let calc = civil();
        let leap = [5771, 5774, 5776, 5779, 5782, 5784, 5787, 5790];
        for year in 5771..=5790 {
            assert_eq!(
                calc.is_leap_year(year),
                leap.contains(&year),
                "year {year}",
            );
            assert_eq!(
                calc.months_in_year(year),
                if leap.contains(&year) { 13 } else { 12 },
            );
        }
    }

    #[test]
    fn year_lengths() {
        let calc = civil();
        let expected = [
            (5730, 383),
            (5731, 354),
            (5732, 355),
            (5733, 383),
            (5734, 355),
            (5735, 354),
            (5736, 385),
            (5737, 353),
            (5738, 384),
            (5739, 355),
            (5740, 355),
        ];
        for (year, length) in expected {
            assert_eq!(calc.days_in_year(year), length, "year {year}");
            // Whatever the length, the months must sum to it.
            let sum: i32 = (1..=calc.months_in_year(year))
                .map(|month| calc.days_in_month(year, month))
                .sum();
            assert_eq!(sum, length, "year {year}");
        }
    }

    // The Unix epoch is 23 Tevet 5730.
    #[test]
    fn unix_epoch() {
        let calc = scriptural();
        assert_eq!(calc.days_since_epoch(ymd(5730, 10, 23)), 0);
        assert_eq!(
            calc.year_month_day_from_days_since_epoch(0),
            ymd(5730, 10, 23)
        );
        // Tevet is the fourth month of the civil year.
        let calc = civil();
        assert_eq!(calc.days_since_epoch(ymd(5730, 4, 23)), 0);
        assert_eq!(
            calc.year_month_day_from_days_since_epoch(0),
            ymd(5730, 4, 23)
        );
    }

    #[test]
    fn numberings_agree_on_day_numbers() {
        let scriptural = scriptural();
        let civil = civil();
        // Tishri 1 starts the year in both numberings.
        for year in [1, 5730, 5736, 9999] {
            assert_eq!(
                scriptural.days_since_epoch(ymd(year, 7, 1)),
                civil.days_since_epoch(ymd(year, 1, 1)),
                "year {year}",
            );
        }
        // Nisan 1 in 5736, a leap year.
        assert_eq!(
            scriptural.days_since_epoch(ymd(5736, 1, 1)),
            civil.days_since_epoch(ymd(5736, 8, 1)),
        );
    }

    #[test]
    fn round_trips() {
        for calc in [scriptural(), civil()] {
            for &(year, month, day) in &[
                (1, 1, 1),
                (5730, 10, 23),
                (5736, 13, 29),
                (5736, 6, 29),
                (5774, 8, 30),
                (9999, 12, 1),
            ] {
                let date = ymd(year, month, day);
                let days = calc.days_since_epoch(date);
                assert_eq!(
                    calc.year_month_day_from_days_since_epoch(days),
                    date,
                    "{date:?}",
                );
            }
        }
    }

    #[test]
    fn scriptural_ordering_follows_civil_months() {
        let calc = scriptural();
        // Tishri 5730 precedes Nisan 5730 even though 7 > 1.
        assert_eq!(
            calc.compare(ymd(5730, 7, 1), ymd(5730, 1, 1)),
            Ordering::Less
        );
        assert_eq!(
            calc.compare(ymd(5730, 1, 1), ymd(5730, 7, 1)),
            Ordering::Greater
        );
        assert_eq!(
            calc.compare(ymd(5730, 7, 10), ymd(5730, 7, 10)),
            Ordering::Equal
        );
        // Year trumps month.
        assert_eq!(
            calc.compare(ymd(5729, 1, 1), ymd(5730, 7, 1)),
            Ordering::Less
        );
    }

    #[test]
    fn add_months_crosses_leap_years() {
        let calc = civil();
        // 5730 is a leap year with 13 months.
        let start = ymd(5730, 1, 1);
        let got = calc.add_months(start, 12).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (5730, 13, 1));
        let got = calc.add_months(start, 13).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (5731, 1, 1));
        // And back again.
        let got = calc.add_months(ymd(5731, 1, 1), -13).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (5730, 1, 1));
        // The numbering doesn't matter: Tishri plus a year of months is
        // Tishri again.
        let calc = scriptural();
        let got = calc.add_months(ymd(5730, 7, 1), 13).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (5731, 7, 1));
    }

    #[test]
    fn add_months_overflows() {
        let calc = civil();
        assert!(calc
            .add_months(ymd(9999, 12, 1), 1)
            .unwrap_err()
            .is_overflow());
        assert!(calc
            .add_months(ymd(1, 1, 1), -1)
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn months_between_inverts_add_months() {
        let calc = civil();
        let start = ymd(5730, 1, 1);
        assert_eq!(calc.months_between(start, ymd(5730, 13, 1)).unwrap(), 12);
        assert_eq!(calc.months_between(start, ymd(5731, 1, 1)).unwrap(), 13);
        assert_eq!(calc.months_between(ymd(5731, 1, 1), start).unwrap(), -13);
        // One day short of a whole month counts as zero.
        assert_eq!(calc.months_between(start, ymd(5730, 1, 30)).unwrap(), 0);
        let calc = scriptural();
        assert_eq!(
            calc.months_between(ymd(5730, 7, 1), ymd(5731, 7, 1)).unwrap(),
            13
        );
    }

    #[test]
    fn set_year_maps_adar() {
        let calc = scriptural();
        // Adar II in a leap year maps to Adar in a common year.
        let got = calc.set_year(ymd(5774, 13, 10), 5775);
        assert_eq!((got.year(), got.month(), got.day()), (5775, 12, 10));
        // Adar in a common year maps to Adar II in a leap year.
        let got = calc.set_year(ymd(5775, 12, 10), 5776);
        assert_eq!((got.year(), got.month(), got.day()), (5776, 13, 10));
        // Adar I stays put.
        let got = calc.set_year(ymd(5774, 12, 10), 5776);
        assert_eq!((got.year(), got.month(), got.day()), (5776, 12, 10));
    }

    #[test]
    fn set_year_rolls_over_short_months() {
        let calc = scriptural();
        // 5734 (355 days) has a long Heshvan; 5731 (354 days) does not,
        // so Heshvan 30 rolls over to Kislev 1.
        let got = calc.set_year(ymd(5734, 8, 30), 5731);
        assert_eq!((got.year(), got.month(), got.day()), (5731, 9, 1));
        // 5737 (353 days) has a short Kislev.
        let got = calc.set_year(ymd(5731, 9, 30), 5737);
        assert_eq!((got.year(), got.month(), got.day()), (5737, 10, 1));
        // Adar I 30 in a leap year rolls to Nisan 1 in a common year.
        let got = calc.set_year(ymd(5774, 12, 30), 5775);
        assert_eq!((got.year(), got.month(), got.day()), (5775, 1, 1));
    }
}
