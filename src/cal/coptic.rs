/*!
The Coptic calendar.

Thirteen months: twelve of exactly 30 days, then a short epagomenal month
of 5 days (6 in leap years). Every fourth year is leap, with no century
exceptions, like the Julian calendar it tracks.
*/

use crate::{
    cal::{
        regular_add_months, regular_months_between, regular_set_year,
        CalculatorCore, YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

fn is_coptic_leap_year(year: i32) -> bool {
    (year & 3) == 3
}

pub(crate) struct CopticCalculator {
    core: CalculatorCore,
}

impl CopticCalculator {
    pub(crate) fn new() -> CopticCalculator {
        CopticCalculator {
            core: CalculatorCore::new(1, 9715, 3653, -615558),
        }
    }
}

impl YearMonthDayCalculator for CopticCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        13
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 13 {
            if is_coptic_leap_year(year) {
                6
            } else {
                5
            }
        } else {
            30
        }
    }

    fn days_in_year(&self, year: i32) -> i32 {
        if is_coptic_leap_year(year) {
            366
        } else {
            365
        }
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_coptic_leap_year(year)
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        _year: i32,
        month: i32,
    ) -> i32 {
        (month - 1) * 30
    }

    fn calculate_start_of_year_days(&self, year: i32) -> i32 {
        // Unix epoch is 1686-04-23 in the Coptic calendar, so the number
        // of days from the start of Coptic 1687 to the epoch is 365 - 112.
        let relative_year = year - 1687;
        let leap_years = if relative_year <= 0 {
            // Add 3 before shifting right since /4 and >>2 behave
            // differently on negative numbers.
            (relative_year + 3) >> 2
        } else {
            let mut leap_years = relative_year >> 2;
            if !is_coptic_leap_year(year) {
                leap_years += 1;
            }
            leap_years
        };
        relative_year * 365 + leap_years + (365 - 112)
    }

    fn days_since_epoch(&self, ymd: YearMonthDay) -> i32 {
        // Fixed 30-day months make the month offset a multiplication.
        self.start_of_year_days(ymd.year())
            + (ymd.month() - 1) * 30
            + (ymd.day() - 1)
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        let zero_based_day = day_of_year - 1;
        YearMonthDay::new(
            year,
            zero_based_day / 30 + 1,
            zero_based_day % 30 + 1,
        )
    }

    fn add_months(
        &self,
        ymd: YearMonthDay,
        months: i32,
    ) -> Result<YearMonthDay, Error> {
        regular_add_months(self, 13, ymd, months)
    }

    fn months_between(
        &self,
        start: YearMonthDay,
        end: YearMonthDay,
    ) -> Result<i32, Error> {
        regular_months_between(self, 13, start, end)
    }

    fn set_year(&self, ymd: YearMonthDay, year: i32) -> YearMonthDay {
        regular_set_year(self, ymd, year)
    }
}
