/*!
The Badíʿ (Bahá'í) calendar.

Nineteen months of nineteen days, plus an intercalary period of 4 or 5
days, the Ayyám-i-Há, between the 18th and 19th months. To keep the rest
of the date machinery working, the intercalary days are counted as extra
days at the end of month 18.

The year begins at Naw-Rúz, which falls on March 19, 20, 21 or 22 of the
Gregorian calendar. Before year 172 the calendar was locked to the
Gregorian one: Naw-Rúz was always March 21 and the intercalary length
followed the Gregorian leap year. From year 172 on, both are fixed by a
precomputed table based on the astronomical new year in Tehran.
*/

use crate::{
    cal::{
        gregorian::{is_gregorian_leap_year, GregorianCalculator},
        regular_months_between, CalculatorCore, YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 999;
const AVERAGE_DAYS_PER_10_YEARS: i32 = 3652;
const UNIX_EPOCH_DAY_AT_START_OF_YEAR_1: i32 = -45941;

const DAYS_IN_MONTH: i32 = 19;
const MONTHS_IN_YEAR: i32 = 19;
const MONTH_18: i32 = 18;
const MONTH_19: i32 = 19;

const FIRST_YEAR_OF_STANDARDIZED_CALENDAR: i32 = 172;
const GREGORIAN_YEAR_OF_FIRST_BADI_YEAR: i32 = 1844;

/// Naw-Rúz dates and intercalary lengths for years 172 through 1000.
///
/// The entry for a year is `(naw_ruz_day_in_march - 19) + 10 *
/// (days_in_ayyami_ha - 4)`.
#[rustfmt::skip]
static YEAR_INFO: [u8; 829] = [
    2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 1, 11, 2, 1, 1, 11, 2,
    1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1,
    1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1,
    1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 1, 10, 1, 1, 1, 10, 1, 1,
    1, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2,
    11, 2, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1,
    11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 1, 11, 2, 1, 1,
    11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11,
    2, 1, 1, 11, 2, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 2, 2, 2, 12,
    2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 2, 11,
    2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2,
    2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2,
    2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2,
    1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 2, 2, 12, 3, 2, 2, 12, 3, 2,
    2, 12, 3, 2, 2, 12, 3, 2, 2, 12, 3, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2,
    2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2,
    12, 2, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2,
    11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1,
    11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11,
    2, 2, 1, 11, 2, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11,
    2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 1, 11,
    1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1,
    1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 1, 10, 1, 1, 1, 10, 1, 1, 1, 10, 1,
    1, 1, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 1, 11, 2,
    2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2,
    1, 11, 2, 2, 1, 11, 2, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1,
    1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1,
    1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 1, 1, 1, 11, 2, 2, 2,
    12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2,
    11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11,
    2, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11,
    2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 1, 11, 2, 1, 1, 11,
    2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 2, 2, 12, 3, 2, 2, 12, 3,
    2, 2, 12, 3, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2,
    2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 12, 2, 2, 2, 2, 11, 2,
    2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2, 2, 11, 2, 2,
    2, 11, 2, 2, 2, 11, 2, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2,
    1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1, 11, 2, 2, 1,
    1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1, 11, 2, 1, 1,
    11, 2, 1, 1, 11, 2, 1, 1, 11, 2,
];

fn is_in_ayyami_ha(ymd: YearMonthDay) -> bool {
    ymd.month() == MONTH_18 && ymd.day() > DAYS_IN_MONTH
}

pub(crate) struct BadiCalculator {
    core: CalculatorCore,
    /// Year starts are defined by a Gregorian date, so the epoch
    /// arithmetic is delegated wholesale.
    gregorian: GregorianCalculator,
}

impl BadiCalculator {
    pub(crate) fn new() -> BadiCalculator {
        BadiCalculator {
            core: CalculatorCore::new(
                MIN_YEAR,
                MAX_YEAR,
                AVERAGE_DAYS_PER_10_YEARS,
                UNIX_EPOCH_DAY_AT_START_OF_YEAR_1,
            ),
            gregorian: GregorianCalculator::new(),
        }
    }

    fn days_in_ayyami_ha(&self, year: i32) -> i32 {
        if year < FIRST_YEAR_OF_STANDARDIZED_CALENDAR {
            if is_gregorian_leap_year(
                year + GREGORIAN_YEAR_OF_FIRST_BADI_YEAR,
            ) {
                5
            } else {
                4
            }
        } else {
            // An entry packs (naw_ruz_day - 19) + 10 * (ayyam_days - 4),
            // so exactly 10 means Naw-Rúz on March 19th with five
            // intercalary days.
            let info = YEAR_INFO
                [(year - FIRST_YEAR_OF_STANDARDIZED_CALENDAR) as usize];
            if info >= 10 {
                5
            } else {
                4
            }
        }
    }

    fn naw_ruz_day_in_march(&self, year: i32) -> i32 {
        if year < FIRST_YEAR_OF_STANDARDIZED_CALENDAR {
            return 21;
        }
        let info = YEAR_INFO
            [(year - FIRST_YEAR_OF_STANDARDIZED_CALENDAR) as usize];
        19 + i32::from(info % 10)
    }
}

impl YearMonthDayCalculator for BadiCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        MONTHS_IN_YEAR
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == MONTH_18 {
            DAYS_IN_MONTH + self.days_in_ayyami_ha(year)
        } else {
            DAYS_IN_MONTH
        }
    }

    fn days_in_year(&self, year: i32) -> i32 {
        361 + self.days_in_ayyami_ha(year)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        self.days_in_ayyami_ha(year) != 4
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        year: i32,
        month: i32,
    ) -> i32 {
        let mut days = DAYS_IN_MONTH * (month - 1);
        if month == MONTH_19 {
            days += self.days_in_ayyami_ha(year);
        }
        days
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        // The epoch is shared across calendars, so the start of a Badíʿ
        // year is just the day number of its Naw-Rúz in the Gregorian
        // calendar.
        let gregorian_year = year + GREGORIAN_YEAR_OF_FIRST_BADI_YEAR - 1;
        self.gregorian.days_since_epoch(YearMonthDay::new(
            gregorian_year,
            3,
            self.naw_ruz_day_in_march(year),
        ))
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        let first_of_loftiness =
            1 + DAYS_IN_MONTH * MONTH_18 + self.days_in_ayyami_ha(year);
        if day_of_year >= first_of_loftiness {
            return YearMonthDay::new(
                year,
                MONTH_19,
                day_of_year - first_of_loftiness + 1,
            );
        }
        let month = (1 + (day_of_year - 1) / DAYS_IN_MONTH).min(MONTH_18);
        YearMonthDay::new(
            year,
            month,
            day_of_year - (month - 1) * DAYS_IN_MONTH,
        )
    }

    fn add_months(
        &self,
        ymd: YearMonthDay,
        months: i32,
    ) -> Result<YearMonthDay, Error> {
        if months == 0 {
            return Ok(ymd);
        }
        let mut this_month = ymd.month();
        let mut day = ymd.day();
        if is_in_ayyami_ha(ymd) {
            // Treat an intercalary day as a day of the month it abuts in
            // the direction of travel.
            day -= DAYS_IN_MONTH;
            if months < 0 {
                this_month += 1;
            }
        }
        let zero_based_month = this_month - 1 + months;
        let year = ymd.year() + zero_based_month.div_euclid(MONTHS_IN_YEAR);
        let month = zero_based_month.rem_euclid(MONTHS_IN_YEAR) + 1;
        if year < self.core.min_year || year > self.core.max_year {
            return Err(Error::overflow("adding months"));
        }
        Ok(YearMonthDay::new(year, month, day))
    }

    fn months_between(
        &self,
        start: YearMonthDay,
        end: YearMonthDay,
    ) -> Result<i32, Error> {
        regular_months_between(self, MONTHS_IN_YEAR, start, end)
    }

    fn set_year(&self, ymd: YearMonthDay, year: i32) -> YearMonthDay {
        if is_in_ayyami_ha(ymd) {
            // The target year may have a shorter intercalary period.
            let limit = DAYS_IN_MONTH + self.days_in_ayyami_ha(year);
            return YearMonthDay::new(
                year,
                ymd.month(),
                ymd.day().min(limit),
            );
        }
        YearMonthDay::new(year, ymd.month(), ymd.day())
    }

    fn days_since_epoch(&self, ymd: YearMonthDay) -> i32 {
        let year = ymd.year();
        let mut days = self.start_of_year_days(year)
            + (ymd.month() - 1) * DAYS_IN_MONTH
            + ymd.day()
            - 1;
        if ymd.month() == MONTH_19 {
            days += self.days_in_ayyami_ha(year);
        }
        days
    }

    // The default would accept intercalary day numbers in month 19 and
    // reject them in month 18, which is exactly backwards here.
    fn validate(&self, year: i32, month: i32, day: i32) -> Result<(), Error> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(Error::range("year", year, MIN_YEAR, MAX_YEAR));
        }
        if month < 1 || month > MONTHS_IN_YEAR {
            return Err(Error::range("month", month, 1, MONTHS_IN_YEAR));
        }
        let days = if month == MONTH_18 {
            DAYS_IN_MONTH + self.days_in_ayyami_ha(year)
        } else {
            DAYS_IN_MONTH
        };
        if day < 1 || day > days {
            return Err(Error::range("day", day, 1, days));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: i32, day: i32) -> YearMonthDay {
        YearMonthDay::new(year, month, day)
    }

    #[test]
    fn year_1_starts_at_naw_ruz_1844() {
        let calc = BadiCalculator::new();
        assert_eq!(calc.days_since_epoch(ymd(1, 1, 1)), -45941);
        assert_eq!(calc.calculate_start_of_year_days(1), -45941);
    }

    // 2015-03-21 and 2016-03-20 as day numbers.
    #[test]
    fn standardized_naw_ruz_dates() {
        let calc = BadiCalculator::new();
        assert_eq!(calc.naw_ruz_day_in_march(172), 21);
        assert_eq!(calc.start_of_year_days(172), 16515);
        assert_eq!(calc.naw_ruz_day_in_march(173), 20);
        assert_eq!(calc.start_of_year_days(173), 16880);
    }

    #[test]
    fn intercalary_length_before_standardization() {
        let calc = BadiCalculator::new();
        // Ayyám-i-Há of year 100 falls in Gregorian 1944, a leap year.
        assert!(calc.is_leap_year(100));
        assert_eq!(calc.days_in_ayyami_ha(100), 5);
        assert!(!calc.is_leap_year(101));
        assert_eq!(calc.days_in_ayyami_ha(101), 4);
    }

    #[test]
    fn intercalary_length_from_table() {
        let calc = BadiCalculator::new();
        assert_eq!(calc.days_in_ayyami_ha(172), 4);
        assert_eq!(calc.days_in_ayyami_ha(174), 5);
        assert_eq!(calc.days_in_month(172, 18), 23);
        assert_eq!(calc.days_in_month(174, 18), 24);
        assert_eq!(calc.days_in_month(174, 19), 19);
        assert_eq!(calc.days_in_year(172), 365);
        assert_eq!(calc.days_in_year(174), 366);
    }

    // A table entry of exactly 10 means Naw-Rúz on March 19th with five
    // intercalary days, so these years are 366 days long and their last
    // day must round-trip through the day count.
    #[test]
    fn march_19_naw_ruz_with_five_intercalary_days() {
        let calc = BadiCalculator::new();
        for year in [249, 253, 645, 649, 653] {
            assert_eq!(calc.naw_ruz_day_in_march(year), 19, "year {year}");
            assert_eq!(calc.days_in_ayyami_ha(year), 5, "year {year}");
            assert_eq!(calc.days_in_year(year), 366, "year {year}");
        }
        let last = calc.days_since_epoch(ymd(249, 19, 19));
        assert_eq!(
            calc.year_month_day_from_days_since_epoch(last),
            ymd(249, 19, 19),
        );
        assert_eq!(
            calc.year_month_day_from_days_since_epoch(last + 1),
            ymd(250, 1, 1),
        );
    }

    #[test]
    fn year_starts_match_year_lengths() {
        let calc = BadiCalculator::new();
        for year in 1..=MAX_YEAR {
            assert_eq!(
                calc.calculate_start_of_year_days(year + 1)
                    - calc.calculate_start_of_year_days(year),
                calc.days_in_year(year),
                "year {year}",
            );
        }
    }

    #[test]
    fn day_of_year_decode() {
        let calc = BadiCalculator::new();
        // Year 172 has 4 intercalary days, so the last month starts at
        // day 347.
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(172, 346),
            ymd(172, 18, 23)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(172, 347),
            ymd(172, 19, 1)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(172, 365),
            ymd(172, 19, 19)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(172, 19),
            ymd(172, 1, 19)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(172, 20),
            ymd(172, 2, 1)
        );
    }

    #[test]
    fn round_trips() {
        let calc = BadiCalculator::new();
        for &(year, month, day) in &[
            (1, 1, 1),
            (100, 18, 24),
            (172, 18, 23),
            (172, 19, 1),
            (174, 18, 24),
            (180, 10, 10),
            (999, 19, 19),
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

    #[test]
    fn add_months_steps_over_ayyami_ha() {
        let calc = BadiCalculator::new();
        let got = calc.add_months(ymd(172, 18, 20), 1).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (172, 19, 1));
        let got = calc.add_months(ymd(172, 18, 20), -1).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (172, 18, 1));
        let got = calc.add_months(ymd(172, 19, 19), 1).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (173, 1, 19));
        let got = calc.add_months(ymd(172, 19, 5), 19).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (173, 19, 5));
        let got = calc.add_months(ymd(172, 1, 1), -19).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (171, 1, 1));
        assert!(calc
            .add_months(ymd(999, 19, 1), 1)
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn set_year_clamps_intercalary_days() {
        let calc = BadiCalculator::new();
        // Year 174 has 5 intercalary days, year 172 only 4.
        let got = calc.set_year(ymd(174, 18, 24), 172);
        assert_eq!((got.year(), got.month(), got.day()), (172, 18, 23));
        let got = calc.set_year(ymd(174, 18, 10), 172);
        assert_eq!((got.year(), got.month(), got.day()), (172, 18, 10));
    }

    #[test]
    fn validate_accepts_intercalary_days() {
        let calc = BadiCalculator::new();
        assert!(calc.validate(172, 18, 23).is_ok());
        assert!(calc.validate(172, 18, 24).unwrap_err().is_range());
        assert!(calc.validate(174, 18, 24).is_ok());
        assert!(calc.validate(172, 19, 19).is_ok());
        assert!(calc.validate(172, 19, 20).unwrap_err().is_range());
        assert!(calc.validate(172, 5, 20).unwrap_err().is_range());
        assert!(calc.validate(1000, 1, 1).unwrap_err().is_range());
    }
}
