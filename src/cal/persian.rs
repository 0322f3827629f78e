/*!
The Persian (Solar Hijri) calendar, in three variants.

The variants share everything but their leap year rule: six 31-day months,
five 30-day months and a final month of 29 days (30 in leap years). Since
leap years are cheap to test and the calendar starts at year 1, each
variant precomputes the start of every supported year up front and never
touches the shared year-start cache.
*/

use crate::{
    cal::{
        regular_add_months, regular_months_between, regular_set_year,
        CalculatorCore, YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

const DAYS_PER_NON_LEAP_YEAR: i32 = (31 * 6) + (30 * 5) + 29;
const DAYS_PER_LEAP_YEAR: i32 = DAYS_PER_NON_LEAP_YEAR + 1;
// An approximation; it'll be pretty close in all variants.
const AVERAGE_DAYS_PER_10_YEARS: i32 =
    (DAYS_PER_NON_LEAP_YEAR * 25 + DAYS_PER_LEAP_YEAR * 8) * 10 / 33;
const MAX_PERSIAN_YEAR: i32 = 9377;

// The number of days preceding the 1-indexed month. This doesn't take
// account of leap years; only the final month is affected by them.
const TOTAL_DAYS_BY_MONTH: [i32; 13] =
    [0, 0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Which leap year rule a [`PersianCalculator`] uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PersianVariant {
    /// The simple 33-year cycle with leap years at 1, 5, 9, 13, 17, 22,
    /// 26 and 30. This corresponds to `System.Globalization
    /// .PersianCalendar` before .NET 4.6.
    Simple,
    /// Birashk's subcycle/cycle/grand cycle arithmetic scheme.
    Arithmetic,
    /// Precomputed astronomical leap years (equinox observations for
    /// midday in Tehran), as stored by the BCL from .NET 4.6 onwards.
    Astronomical,
}

impl PersianVariant {
    fn days_at_start_of_year_1(self) -> i32 {
        match self {
            // March 21st 622 CE.
            PersianVariant::Simple => -492268,
            PersianVariant::Arithmetic => -492267,
            PersianVariant::Astronomical => -492267,
        }
    }

    fn is_leap_year(self, year: i32) -> bool {
        match self {
            PersianVariant::Simple => {
                // The cycle has 33 years, so the shift count reaches 32
                // and the bit test must be wider than an i32.
                const LEAP_YEAR_PATTERN_BITS: i64 = (1 << 1)
                    | (1 << 5)
                    | (1 << 9)
                    | (1 << 13)
                    | (1 << 17)
                    | (1 << 22)
                    | (1 << 26)
                    | (1 << 30);
                const LEAP_YEAR_CYCLE_LENGTH: i32 = 33;
                // Handle negative years in order to make calculations
                // near the start of the calendar work cleanly.
                let year_of_cycle = if year >= 0 {
                    year % LEAP_YEAR_CYCLE_LENGTH
                } else {
                    year % LEAP_YEAR_CYCLE_LENGTH + LEAP_YEAR_CYCLE_LENGTH
                };
                LEAP_YEAR_PATTERN_BITS & (1i64 << year_of_cycle) > 0
            }
            PersianVariant::Arithmetic => {
                // Offset the cycles for easier arithmetic.
                let offset_year =
                    if year > 0 { year - 474 } else { year - 473 };
                let cycle_year = offset_year % 2820 + 474;
                ((cycle_year + 38) * 31) % 128 < 31
            }
            PersianVariant::Astronomical => {
                let index = (year >> 3) as usize;
                ASTRONOMICAL_LEAP_YEAR_BITS[index] & (1 << (year & 7)) != 0
            }
        }
    }
}

pub(crate) struct PersianCalculator {
    core: CalculatorCore,
    variant: PersianVariant,
    /// The day number of the start of every year in `0..=max_year + 1`,
    /// indexed by year.
    start_of_year_days: Vec<i32>,
}

impl PersianCalculator {
    pub(crate) fn new(variant: PersianVariant) -> PersianCalculator {
        let days_at_start_of_year_1 = variant.days_at_start_of_year_1();
        let mut start_of_year_days =
            Vec::with_capacity((MAX_PERSIAN_YEAR + 2) as usize);
        let days_in_year = |year: i32| {
            if variant.is_leap_year(year) {
                DAYS_PER_LEAP_YEAR
            } else {
                DAYS_PER_NON_LEAP_YEAR
            }
        };
        let mut start_of_year = days_at_start_of_year_1 - days_in_year(0);
        for year in 0..=MAX_PERSIAN_YEAR + 1 {
            start_of_year_days.push(start_of_year);
            start_of_year += days_in_year(year);
        }
        PersianCalculator {
            core: CalculatorCore::new(
                1,
                MAX_PERSIAN_YEAR,
                AVERAGE_DAYS_PER_10_YEARS,
                days_at_start_of_year_1,
            ),
            variant,
            start_of_year_days,
        }
    }
}

impl YearMonthDayCalculator for PersianCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month < 7 {
            31
        } else if month < 12 || self.is_leap_year(year) {
            30
        } else {
            29
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
        self.variant.is_leap_year(year)
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        _year: i32,
        month: i32,
    ) -> i32 {
        TOTAL_DAYS_BY_MONTH[month as usize]
    }

    fn start_of_year_days(&self, year: i32) -> i32 {
        debug_assert!(0 <= year && year <= MAX_PERSIAN_YEAR + 1);
        self.start_of_year_days[year as usize]
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        // Only reachable through `start_of_year_days`, which is
        // overridden to read the precomputed table instead.
        self.start_of_year_days(year)
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        if day_of_year == DAYS_PER_LEAP_YEAR {
            // Last day of a leap year.
            return YearMonthDay::new(year, 12, 30);
        }
        let zero_based_day = day_of_year - 1;
        if zero_based_day < 6 * 31 {
            // In the first 6 months, all of which are 31 days long.
            YearMonthDay::new(
                year,
                zero_based_day / 31 + 1,
                zero_based_day % 31 + 1,
            )
        } else {
            // Last 6 months (other than the last day of a leap year).
            let day_of_second_half = zero_based_day - 6 * 31;
            YearMonthDay::new(
                year,
                day_of_second_half / 30 + 7,
                day_of_second_half % 30 + 1,
            )
        }
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

/// One bit per year, set when the year is leap according to the BCL's
/// astronomical data. Bit `year & 7` of byte `year >> 3`.
#[rustfmt::skip]
static ASTRONOMICAL_LEAP_YEAR_BITS: [u8; 1173] = [
    32, 34, 34, 34, 66, 68, 68, 68, 132, 136, 136, 136,
    8, 17, 17, 17, 17, 34, 34, 34, 66, 68, 68, 68,
    132, 136, 136, 136, 8, 17, 17, 17, 17, 34, 34, 34,
    34, 68, 68, 68, 132, 136, 136, 136, 136, 16, 17, 17,
    17, 33, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136,
    136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68, 68,
    68, 132, 136, 136, 136, 8, 17, 17, 17, 17, 34, 34,
    34, 66, 68, 68, 68, 132, 136, 136, 136, 8, 17, 17,
    17, 17, 34, 34, 34, 34, 68, 68, 68, 68, 136, 136,
    136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68,
    68, 68, 132, 136, 136, 136, 8, 17, 17, 17, 17, 34,
    34, 34, 34, 68, 68, 68, 132, 136, 136, 136, 8, 17,
    17, 17, 17, 33, 34, 34, 34, 68, 68, 68, 68, 136,
    136, 136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 66,
    68, 68, 68, 132, 136, 136, 136, 8, 17, 17, 17, 17,
    34, 34, 34, 34, 68, 68, 68, 132, 136, 136, 136, 8,
    17, 17, 17, 17, 33, 34, 34, 34, 68, 68, 68, 68,
    136, 136, 136, 136, 16, 17, 17, 17, 33, 34, 34, 34,
    66, 68, 68, 68, 132, 136, 136, 136, 8, 17, 17, 17,
    17, 34, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136,
    136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68, 68,
    68, 136, 136, 136, 136, 16, 17, 17, 17, 33, 34, 34,
    34, 34, 68, 68, 68, 132, 136, 136, 136, 8, 17, 17,
    17, 17, 34, 34, 34, 34, 68, 68, 68, 68, 136, 136,
    136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68,
    68, 68, 132, 136, 136, 136, 8, 17, 17, 17, 17, 34,
    34, 34, 34, 68, 68, 68, 68, 136, 136, 136, 8, 17,
    17, 17, 17, 34, 34, 34, 34, 66, 68, 68, 68, 132,
    136, 136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 66,
    68, 68, 68, 68, 136, 136, 136, 8, 17, 17, 17, 17,
    34, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136, 136,
    16, 17, 17, 17, 33, 34, 34, 34, 66, 68, 68, 68,
    132, 136, 136, 136, 8, 17, 17, 17, 33, 34, 34, 34,
    34, 68, 68, 68, 68, 136, 136, 136, 136, 16, 17, 17,
    17, 34, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136,
    136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68, 68,
    68, 132, 136, 136, 136, 8, 17, 17, 17, 17, 34, 34,
    34, 34, 68, 68, 68, 68, 136, 136, 136, 136, 16, 17,
    17, 17, 34, 34, 34, 34, 68, 68, 68, 68, 136, 136,
    136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68,
    68, 68, 132, 136, 136, 136, 8, 17, 17, 17, 33, 34,
    34, 34, 66, 68, 68, 68, 132, 136, 136, 136, 8, 17,
    17, 17, 17, 34, 34, 34, 34, 68, 68, 68, 68, 136,
    136, 136, 136, 16, 17, 17, 17, 34, 34, 34, 34, 68,
    68, 68, 68, 136, 136, 136, 136, 16, 17, 17, 17, 33,
    34, 34, 34, 66, 68, 68, 68, 132, 136, 136, 136, 8,
    17, 17, 17, 33, 34, 34, 34, 66, 68, 68, 68, 132,
    136, 136, 136, 8, 17, 17, 17, 17, 34, 34, 34, 34,
    68, 68, 68, 68, 136, 136, 136, 8, 17, 17, 17, 17,
    34, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136, 8,
    17, 17, 17, 17, 34, 34, 34, 34, 68, 68, 68, 68,
    136, 136, 136, 136, 16, 17, 17, 17, 33, 34, 34, 34,
    66, 68, 68, 68, 136, 136, 136, 136, 16, 17, 17, 17,
    33, 34, 34, 34, 66, 68, 68, 68, 136, 136, 136, 136,
    16, 17, 17, 17, 33, 34, 34, 34, 66, 68, 68, 68,
    136, 136, 136, 136, 16, 17, 17, 17, 33, 34, 34, 34,
    66, 68, 68, 68, 136, 136, 136, 136, 16, 17, 17, 17,
    33, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136, 136,
    16, 17, 17, 17, 34, 34, 34, 34, 68, 68, 68, 68,
    136, 136, 136, 136, 16, 17, 17, 17, 34, 34, 34, 34,
    68, 68, 68, 68, 136, 136, 136, 8, 17, 17, 17, 17,
    34, 34, 34, 34, 68, 68, 68, 132, 136, 136, 136, 8,
    17, 17, 17, 17, 34, 34, 34, 66, 68, 68, 68, 132,
    136, 136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 68,
    68, 68, 68, 136, 136, 136, 136, 16, 17, 17, 17, 34,
    34, 34, 34, 68, 68, 68, 68, 136, 136, 136, 8, 17,
    17, 17, 17, 34, 34, 34, 34, 68, 68, 68, 132, 136,
    136, 136, 16, 17, 17, 17, 33, 34, 34, 34, 66, 68,
    68, 68, 136, 136, 136, 136, 16, 17, 17, 17, 33, 34,
    34, 34, 68, 68, 68, 132, 136, 136, 136, 8, 17, 17,
    17, 33, 34, 34, 34, 66, 68, 68, 68, 132, 136, 136,
    136, 16, 17, 17, 17, 33, 34, 34, 34, 68, 68, 68,
    132, 136, 136, 136, 8, 17, 17, 17, 17, 34, 34, 34,
    66, 68, 68, 68, 136, 136, 136, 136, 16, 17, 17, 17,
    34, 34, 34, 34, 68, 68, 68, 132, 136, 136, 136, 16,
    17, 17, 17, 33, 34, 34, 34, 68, 68, 68, 68, 136,
    136, 136, 8, 17, 17, 17, 33, 34, 34, 34, 66, 68,
    68, 68, 136, 136, 136, 136, 16, 17, 17, 17, 34, 34,
    34, 66, 68, 68, 68, 136, 136, 136, 136, 16, 17, 17,
    17, 34, 34, 34, 34, 68, 68, 68, 132, 136, 136, 136,
    16, 17, 17, 17, 33, 34, 34, 34, 68, 68, 68, 132,
    136, 136, 136, 8, 17, 17, 17, 33, 34, 34, 34, 68,
    68, 68, 68, 136, 136, 136, 8, 17, 17, 17, 33, 34,
    34, 34, 68, 68, 68, 132, 136, 136, 136, 8, 17, 17,
    17, 33, 34, 34, 34, 68, 68, 68, 68, 136, 136, 136,
    8, 17, 17, 17, 33, 34, 34, 34, 68, 68, 68, 132,
    136, 136, 136, 8, 17, 17, 17, 33, 34, 34, 34, 68,
    68, 68, 132, 136, 136, 136, 8, 17, 17, 17, 33, 34,
    34, 34, 68, 68, 68, 132, 136, 136, 136, 16, 17, 17,
    17, 34, 34, 34, 34, 68, 68, 68, 132, 136, 136, 136,
    16, 17, 17, 17, 34, 34, 34, 66, 68, 68, 68, 136,
    136, 136, 8, 17, 17, 17, 33, 34, 34, 34, 68, 68,
    68, 68, 136, 136, 136, 8, 17, 17, 17, 33, 34, 34,
    34, 68, 68, 68, 132, 136, 136, 136, 16, 17, 17, 17,
    34, 34, 34, 66, 68, 68, 68, 136, 136, 136, 8, 17,
    17, 17, 33, 34, 34, 34, 68, 68, 68, 132, 136, 136,
    136, 16, 17, 17, 17, 34, 34, 34, 66, 68, 68, 68,
    136, 136, 136, 8, 17, 17, 17, 33, 2,
];
