/*!
The tabular Islamic (Hijri) calendar.

Twelve alternating 30/29 day months, with a leap day appended to the final
month in 11 years of a 30 year cycle. Which 11 years are leap depends on
the tabular scheme in use ([`IslamicLeapYearPattern`]), and the whole
calendar can be anchored a day apart depending on the epoch
([`IslamicEpoch`]). Any pattern can be combined with either epoch.
*/

use crate::{
    cal::{
        regular_add_months, regular_months_between, regular_set_year,
        CalculatorCore, YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

/// The pattern of leap years within the 30 year cycle of a tabular
/// Islamic calendar.
///
/// The names refer to the single year (15 or 16) that the most common two
/// schemes disagree about; the patterns differ in more years than that
/// one, though.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IslamicLeapYearPattern {
    /// Leap years in the cycle: 2, 5, 7, 10, 13, 15, 18, 21, 24, 26, 29.
    /// This is the most common tabular scheme, used by the Kuwaiti
    /// algorithm among others.
    Base15,
    /// Leap years in the cycle: 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29.
    /// This is the scheme used by the .NET `HijriCalendar` type.
    Base16,
    /// Leap years in the cycle: 2, 5, 8, 10, 13, 16, 19, 21, 24, 27, 29.
    Indian,
    /// Leap years in the cycle: 2, 5, 8, 11, 13, 16, 19, 21, 24, 27, 30.
    HabashAlHasib,
}

impl IslamicLeapYearPattern {
    /// Returns the pattern of leap years within a cycle, one bit per year.
    ///
    /// Note that although cycle years are usually numbered 1-30, the bit
    /// pattern is for 0-29; cycle year 30 is represented by bit 0. When
    /// reading bit patterns, don't forget to read right to left.
    fn leap_year_pattern_bits(self) -> i32 {
        match self {
            // 0b100101001001001010010010100100
            IslamicLeapYearPattern::Base15 => 623158436,
            // 0b100101001001010010010010100100
            IslamicLeapYearPattern::Base16 => 623191204,
            // 0b101001001010010010010100100100
            IslamicLeapYearPattern::Indian => 690562340,
            // 0b001001001010010010100100100101
            IslamicLeapYearPattern::HabashAlHasib => 153692453,
        }
    }
}

/// The day the first year of a tabular Islamic calendar starts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IslamicEpoch {
    /// Thursday, July 15th 622 CE (Julian).
    Astronomical,
    /// Friday, July 16th 622 CE (Julian).
    Civil,
}

impl IslamicEpoch {
    fn days_at_start_of_year_1(self) -> i32 {
        match self {
            IslamicEpoch::Astronomical => DAYS_AT_CIVIL_EPOCH - 1,
            IslamicEpoch::Civil => DAYS_AT_CIVIL_EPOCH,
        }
    }
}

const LONG_MONTH_LENGTH: i32 = 30;
const SHORT_MONTH_LENGTH: i32 = 29;
const MONTH_PAIR_LENGTH: i32 = 59;

// Ideally 354.36667 days per year.
const AVERAGE_DAYS_PER_10_YEARS: i32 = 3544;
const DAYS_PER_NON_LEAP_YEAR: i32 = 354;
const DAYS_PER_LEAP_YEAR: i32 = 355;

/// The day number of the civil (Friday) epoch of July 16th 622 CE.
const DAYS_AT_CIVIL_EPOCH: i32 = -492148;

const LEAP_YEAR_CYCLE_LENGTH: i32 = 30;
const DAYS_PER_LEAP_CYCLE: i32 =
    19 * DAYS_PER_NON_LEAP_YEAR + 11 * DAYS_PER_LEAP_YEAR;

// The number of days preceding the 1-indexed month. This doesn't take
// account of leap years, but that doesn't matter - leap years only affect
// the final month.
const TOTAL_DAYS_BY_MONTH: [i32; 13] =
    [0, 0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325];

pub(crate) struct IslamicCalculator {
    core: CalculatorCore,
    /// The pattern of leap years within a cycle, one bit per year, for
    /// this calendar.
    leap_year_pattern_bits: i32,
}

impl IslamicCalculator {
    pub(crate) fn new(
        leap_year_pattern: IslamicLeapYearPattern,
        epoch: IslamicEpoch,
    ) -> IslamicCalculator {
        IslamicCalculator {
            core: CalculatorCore::new(
                1,
                9665,
                AVERAGE_DAYS_PER_10_YEARS,
                epoch.days_at_start_of_year_1(),
            ),
            leap_year_pattern_bits: leap_year_pattern
                .leap_year_pattern_bits(),
        }
    }
}

impl YearMonthDayCalculator for IslamicCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 12 && self.is_leap_year(year) {
            return LONG_MONTH_LENGTH;
        }
        // Month is 1-based here, so even months are the short ones.
        if (month & 1) == 0 {
            SHORT_MONTH_LENGTH
        } else {
            LONG_MONTH_LENGTH
        }
    }

    fn days_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) {
            DAYS_PER_LEAP_YEAR
        } else {
            DAYS_PER_NON_LEAP_YEAR
        }
    }

    fn is_leap_year(&self, year: i32) -> bool {
        // Handle negative years in order to make calculations near the
        // start of the calendar work cleanly.
        let year_of_cycle = if year >= 0 {
            year % LEAP_YEAR_CYCLE_LENGTH
        } else {
            year % LEAP_YEAR_CYCLE_LENGTH + LEAP_YEAR_CYCLE_LENGTH
        };
        self.leap_year_pattern_bits & (1 << year_of_cycle) > 0
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        _year: i32,
        month: i32,
    ) -> i32 {
        // The number of days at the *start* of a month isn't affected by
        // the year, as the only month length which varies by year is the
        // last one.
        TOTAL_DAYS_BY_MONTH[month as usize]
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        // The first cycle starts in year 1, not year 0. We try to cope
        // with years outside the normal range, in order to allow
        // arithmetic at the boundaries.
        let cycle = if year > 0 {
            (year - 1) / LEAP_YEAR_CYCLE_LENGTH
        } else {
            (year - LEAP_YEAR_CYCLE_LENGTH) / LEAP_YEAR_CYCLE_LENGTH
        };
        let year_at_start_of_cycle = cycle * LEAP_YEAR_CYCLE_LENGTH + 1;
        let mut days = self.core.days_at_start_of_year_1
            + cycle * DAYS_PER_LEAP_CYCLE;
        // Walk from the start of the cycle to (but not including) the
        // year we're looking for.
        for i in year_at_start_of_cycle..year {
            days += self.days_in_year(i);
        }
        days
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        // Special case the last day in a leap year.
        if day_of_year == DAYS_PER_LEAP_YEAR {
            return YearMonthDay::new(year, 12, 30);
        }
        let zero_based_day = day_of_year - 1;
        let month = (zero_based_day * 2) / MONTH_PAIR_LENGTH + 1;
        let day =
            ((zero_based_day % MONTH_PAIR_LENGTH) % LONG_MONTH_LENGTH) + 1;
        YearMonthDay::new(year, month, day)
    }

    fn add_months(
        &self,
        ymd: YearMonthDay,
        months: i32,
    ) -> Result<YearMonthDay, Error> {
        regular_add_months(self, 12, ymd, months)
    }

    fn months_between(
        &self,
        start: YearMonthDay,
        end: YearMonthDay,
    ) -> Result<i32, Error> {
        regular_months_between(self, 12, start, end)
    }

    fn set_year(&self, ymd: YearMonthDay, year: i32) -> YearMonthDay {
        regular_set_year(self, ymd, year)
    }
}
