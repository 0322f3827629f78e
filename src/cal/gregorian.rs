/*!
The Gregorian and Julian calendars.

The two calendars share everything except their leap year rule and where
their years start, so the month shapes and day-of-year decoding live in
free functions used by both. The Gregorian calculator additionally carries
precomputed tables for 1900..=2100, the range nearly all real workloads
live in, and answers from them without touching the generic machinery.
*/

use crate::{
    cal::{
        cached_start_of_year, regular_add_months, regular_months_between,
        regular_set_year, year_and_day_of_year, CalculatorCore,
        YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

const MIN_GREGORIAN_YEAR: i32 = -9998;
const MAX_GREGORIAN_YEAR: i32 = 9999;

const FIRST_OPTIMIZED_YEAR: i32 = 1900;
const LAST_OPTIMIZED_YEAR: i32 = 2100;
/// The day number of 1900-01-01, the first day covered by the tables.
const FIRST_OPTIMIZED_DAY: i32 = -25567;
/// The day number of 2100-12-31, the last day covered by the tables.
const LAST_OPTIMIZED_DAY: i32 = 47846;

const DAYS_FROM_0000_TO_1970: i32 = 719527;
const AVERAGE_GREGORIAN_DAYS_PER_10_YEARS: i32 = 3652;

// Cumulative days from the start of the year to the start of each month,
// indexed by month. Index 0 is unused.
const NON_LEAP_TOTAL_DAYS_BY_MONTH: [i32; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
const LEAP_TOTAL_DAYS_BY_MONTH: [i32; 13] =
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

pub(crate) fn is_gregorian_leap_year(year: i32) -> bool {
    (year & 3) == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn is_julian_leap_year(year: i32) -> bool {
    (year & 3) == 0
}

fn gj_days_in_month(is_leap: bool, month: i32) -> i32 {
    // February is awkward.
    if month == 2 {
        return if is_leap { 29 } else { 28 };
    }
    // The lengths of months alternate between 30 and 31, but skip a beat
    // for August. By dividing the month by 8, we effectively handle that
    // skip.
    30 + ((month + (month >> 3)) & 1)
}

fn gj_days_to_start_of_month(is_leap: bool, month: i32) -> i32 {
    if is_leap {
        LEAP_TOTAL_DAYS_BY_MONTH[month as usize]
    } else {
        NON_LEAP_TOTAL_DAYS_BY_MONTH[month as usize]
    }
}

/// Decodes a 1-based day of year into a month and day, given the year's
/// leapness.
///
/// This performs a hard-coded binary search for the 0-based start day of
/// the month; dividing that by 29 then recovers the month number without
/// any further lookups.
fn gj_year_month_day_from_day_of_year(
    year: i32,
    d: i32,
    is_leap: bool,
) -> YearMonthDay {
    let start_of_month = if is_leap {
        if d < 92 {
            if d < 32 {
                0
            } else if d < 61 {
                31
            } else {
                60
            }
        } else if d < 183 {
            if d < 122 {
                91
            } else if d < 153 {
                121
            } else {
                152
            }
        } else if d < 275 {
            if d < 214 {
                182
            } else if d < 245 {
                213
            } else {
                244
            }
        } else if d < 306 {
            274
        } else if d < 336 {
            305
        } else {
            335
        }
    } else {
        if d < 91 {
            if d < 32 {
                0
            } else if d < 60 {
                31
            } else {
                59
            }
        } else if d < 182 {
            if d < 121 {
                90
            } else if d < 152 {
                120
            } else {
                151
            }
        } else if d < 274 {
            if d < 213 {
                181
            } else if d < 244 {
                212
            } else {
                243
            }
        } else if d < 305 {
            273
        } else if d < 335 {
            304
        } else {
            334
        }
    };
    YearMonthDay::new(year, start_of_month / 29 + 1, d - start_of_month)
}

/// The Gregorian calendar, proleptic in both directions.
///
/// Also does duty as the ISO calendar, which computes identically
/// (arithmetic and BCE/CE eras both) and exists only as a distinct
/// registry entry.
pub(crate) struct GregorianCalculator {
    core: CalculatorCore,
    /// The day number of the start of each year in
    /// `FIRST_OPTIMIZED_YEAR..=LAST_OPTIMIZED_YEAR`.
    year_start_days: Vec<i32>,
    /// The day number of the day before the start of each month in the
    /// optimized years, indexed by `(year - first) * 12 + month`.
    month_start_days: Vec<i32>,
}

impl GregorianCalculator {
    pub(crate) fn new() -> GregorianCalculator {
        let years = (LAST_OPTIMIZED_YEAR + 1 - FIRST_OPTIMIZED_YEAR) as usize;
        let mut year_start_days = vec![0i32; years];
        let mut month_start_days = vec![0i32; years * 12 + 1];
        for year in FIRST_OPTIMIZED_YEAR..=LAST_OPTIMIZED_YEAR {
            let year_start = calculate_gregorian_start_of_year_days(year);
            year_start_days[(year - FIRST_OPTIMIZED_YEAR) as usize] =
                year_start;
            let is_leap = is_gregorian_leap_year(year);
            let mut month_start_day = year_start - 1;
            let mut year_month_index =
                ((year - FIRST_OPTIMIZED_YEAR) * 12) as usize;
            for month in 1..=12 {
                year_month_index += 1;
                month_start_days[year_month_index] = month_start_day;
                month_start_day += gj_days_in_month(is_leap, month);
            }
        }
        GregorianCalculator {
            core: CalculatorCore::new(
                MIN_GREGORIAN_YEAR,
                MAX_GREGORIAN_YEAR,
                AVERAGE_GREGORIAN_DAYS_PER_10_YEARS,
                -719162,
            ),
            year_start_days,
            month_start_days,
        }
    }
}

fn calculate_gregorian_start_of_year_days(year: i32) -> i32 {
    let mut leap_years = year / 100;
    if year < 0 {
        // Add 3 before shifting right since /4 and >>2 behave differently
        // on negative numbers. When the expression is written as
        // (year / 4) - (year / 100) + (year / 400),
        // it works for both positive and negative values, except this
        // optimization eliminates two divisions.
        leap_years =
            ((year + 3) >> 2) - leap_years + ((leap_years + 3) >> 2) - 1;
    } else {
        leap_years = (year >> 2) - leap_years + (leap_years >> 2);
        if is_gregorian_leap_year(year) {
            leap_years -= 1;
        }
    }
    year * 365 + (leap_years - DAYS_FROM_0000_TO_1970)
}

impl YearMonthDayCalculator for GregorianCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        gj_days_in_month(is_gregorian_leap_year(year), month)
    }

    fn days_in_year(&self, year: i32) -> i32 {
        if is_gregorian_leap_year(year) {
            366
        } else {
            365
        }
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_gregorian_leap_year(year)
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        year: i32,
        month: i32,
    ) -> i32 {
        gj_days_to_start_of_month(is_gregorian_leap_year(year), month)
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        calculate_gregorian_start_of_year_days(year)
    }

    fn start_of_year_days(&self, year: i32) -> i32 {
        if year < FIRST_OPTIMIZED_YEAR || year > LAST_OPTIMIZED_YEAR {
            return cached_start_of_year(self, year);
        }
        self.year_start_days[(year - FIRST_OPTIMIZED_YEAR) as usize]
    }

    fn days_since_epoch(&self, ymd: YearMonthDay) -> i32 {
        let (year, month, day) = (ymd.year(), ymd.month(), ymd.day());
        if year < FIRST_OPTIMIZED_YEAR || year > LAST_OPTIMIZED_YEAR {
            return self.start_of_year_days(year)
                + self.days_from_start_of_year_to_start_of_month(year, month)
                + (day - 1);
        }
        let year_month_index =
            ((year - FIRST_OPTIMIZED_YEAR) * 12 + month) as usize;
        self.month_start_days[year_month_index] + day
    }

    fn year_month_day_from_days_since_epoch(
        &self,
        days_since_epoch: i32,
    ) -> YearMonthDay {
        if days_since_epoch < FIRST_OPTIMIZED_DAY
            || days_since_epoch > LAST_OPTIMIZED_DAY
        {
            let (year, zero_based_day) =
                year_and_day_of_year(self, days_since_epoch);
            return gj_year_month_day_from_day_of_year(
                year,
                zero_based_day + 1,
                is_gregorian_leap_year(year),
            );
        }
        // Divide by more than we need to, in order to guarantee that we
        // only need to move forward. We can still only be out by 1 year.
        let year_index = (days_since_epoch - FIRST_OPTIMIZED_DAY) / 366;
        let mut year = year_index + FIRST_OPTIMIZED_YEAR;
        let mut d =
            days_since_epoch - self.year_start_days[year_index as usize];
        let mut is_leap = is_gregorian_leap_year(year);
        let days_in_year = if is_leap { 366 } else { 365 };
        if d >= days_in_year {
            year += 1;
            d -= days_in_year;
            is_leap = is_gregorian_leap_year(year);
        }
        gj_year_month_day_from_day_of_year(year, d + 1, is_leap)
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        gj_year_month_day_from_day_of_year(
            year,
            day_of_year,
            is_gregorian_leap_year(year),
        )
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

/// The Julian calendar: every fourth year is leap, no century exceptions.
pub(crate) struct JulianCalculator {
    core: CalculatorCore,
}

impl JulianCalculator {
    pub(crate) fn new() -> JulianCalculator {
        JulianCalculator {
            core: CalculatorCore::new(-9997, 9998, 3653, -719164),
        }
    }
}

impl YearMonthDayCalculator for JulianCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        gj_days_in_month(is_julian_leap_year(year), month)
    }

    fn days_in_year(&self, year: i32) -> i32 {
        if is_julian_leap_year(year) {
            366
        } else {
            365
        }
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_julian_leap_year(year)
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        year: i32,
        month: i32,
    ) -> i32 {
        gj_days_to_start_of_month(is_julian_leap_year(year), month)
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        // Unix epoch is 1970-01-14 in the Julian calendar, so the number
        // of days from 1968-01-01 to 1970-01-14 is 366 + 352.
        let relative_year = year - 1968;
        let leap_years = if relative_year <= 0 {
            // Add 3 before shifting right since /4 and >>2 behave
            // differently on negative numbers.
            (relative_year + 3) >> 2
        } else {
            let mut leap_years = relative_year >> 2;
            // For post 1968 an adjustment is needed as jan1st is before
            // leap day.
            if !is_julian_leap_year(year) {
                leap_years += 1;
            }
            leap_years
        };
        relative_year * 365 + leap_years - (366 + 352)
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        gj_year_month_day_from_day_of_year(
            year,
            day_of_year,
            is_julian_leap_year(year),
        )
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
