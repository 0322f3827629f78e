/*!
The Um al-Qura calendar, the official civil calendar of Saudi Arabia.

Unlike the tabular Hijri calendars, there's no leap-year formula: the
calendar follows astronomical computation for Mecca, so we carry a table
of month lengths for the 183 years it is defined for, 1318 through 1500.
Each table entry packs the year's twelve month lengths into one bitmask
(bit `m` set means month `m` has 30 days rather than 29), and the year
start days and lengths are materialized from it at construction. Every
query is then a lookup.
*/

use crate::{
    cal::{
        regular_add_months, regular_months_between, regular_set_year,
        CalculatorCore, YearMonthDayCalculator,
    },
    date::YearMonthDay,
    error::Error,
};

const MIN_YEAR: i32 = 1318;
const MAX_YEAR: i32 = 1500;
const AVERAGE_DAYS_PER_10_YEARS: i32 = 3544;
const DAYS_AT_START_OF_MIN_YEAR: i32 = -25448;
/// Where year 1 would start at the average rate. The year search needs
/// this for its initial guess even though the calendar doesn't actually
/// extend anywhere near year 1.
const DAYS_AT_START_OF_YEAR_1: i32 = DAYS_AT_START_OF_MIN_YEAR - 466744;

/// One entry per year, bracketed by a zero guard entry on each side.
const NUM_ENTRIES: usize = (MAX_YEAR - MIN_YEAR + 3) as usize;

/// Month-length bitmasks for years 1318 through 1500, at indices 1
/// through 183.
#[rustfmt::skip]
static MONTH_LENGTHS: [u16; NUM_ENTRIES] = [
    0x0000, 0x05D4, 0x0DD2, 0x1DA4, 0x1D48, 0x1A94, 0x152C, 0x0A6C,
    0x156A, 0x1B54, 0x1748, 0x1692, 0x1526, 0x0A56, 0x14AE, 0x096C,
    0x156A, 0x0B54, 0x1AAA, 0x1A54, 0x14AC, 0x095C, 0x12BA, 0x05D8,
    0x0DAA, 0x0D54, 0x0AAA, 0x0956, 0x12B6, 0x0574, 0x0AEA, 0x1764,
    0x0EC8, 0x0E92, 0x0CAA, 0x0556, 0x0AB6, 0x15B4, 0x0DA8, 0x1D92,
    0x1B24, 0x1A4A, 0x149A, 0x055A, 0x0ADA, 0x16D4, 0x16A4, 0x154A,
    0x1496, 0x092E, 0x126E, 0x056C, 0x0AEA, 0x1AD4, 0x1AA4, 0x152C,
    0x125A, 0x04BA, 0x09BA, 0x15B4, 0x0BA8, 0x1B52, 0x1AA4, 0x1554,
    0x09AC, 0x136C, 0x06E8, 0x0ED2, 0x0EA4, 0x0D4A, 0x0A96, 0x1556,
    0x0AB4, 0x15AA, 0x1BA4, 0x1B48, 0x1A92, 0x152A, 0x0A5A, 0x14BA,
    0x0AB4, 0x15AA, 0x0D54, 0x0D2A, 0x0A56, 0x14AE, 0x095C, 0x12EC,
    0x0AD8, 0x16AA, 0x1554, 0x14AA, 0x095A, 0x12BA, 0x05B4, 0x0BB2,
    0x1B64, 0x1748, 0x1694, 0x14AA, 0x056A, 0x0AEA, 0x16D4, 0x17A4,
    0x1788, 0x1712, 0x152A, 0x0A5A, 0x0B5A, 0x16D4, 0x0DA8, 0x1B92,
    0x1B24, 0x154C, 0x12AC, 0x055C, 0x0ADA, 0x06D4, 0x16AA, 0x1554,
    0x129A, 0x093A, 0x12BA, 0x0574, 0x0B6A, 0x0B54, 0x1AAA, 0x1534,
    0x125C, 0x04DC, 0x0ABA, 0x15B4, 0x0DA8, 0x0D4A, 0x0A96, 0x152E,
    0x0A9C, 0x155C, 0x0B58, 0x1752, 0x1B24, 0x164A, 0x0C96, 0x1956,
    0x0AB4, 0x16AA, 0x0DA4, 0x1D4A, 0x1C94, 0x152A, 0x0A5A, 0x155A,
    0x06D8, 0x0EB2, 0x0DA4, 0x0D2A, 0x0A5A, 0x14B6, 0x0974, 0x1374,
    0x0768, 0x16D2, 0x16A4, 0x154C, 0x096C, 0x12DA, 0x05D8, 0x0DB2,
    0x1D64, 0x1AA8, 0x1A54, 0x14AC, 0x095C, 0x12DA, 0x1AD4, 0x16A8,
    0x1652, 0x1526, 0x0A56, 0x14AE, 0x0A6C, 0x156A, 0x0D54, 0x1D26,
    0x0000,
];

pub(crate) struct UmAlQuraCalculator {
    core: CalculatorCore,
    year_start_days: [i32; NUM_ENTRIES],
    year_lengths: [i32; NUM_ENTRIES],
}

impl UmAlQuraCalculator {
    pub(crate) fn new() -> UmAlQuraCalculator {
        let mut year_start_days = [0i32; NUM_ENTRIES];
        let mut year_lengths = [0i32; NUM_ENTRIES];
        let mut total_days = 0;
        for i in 1..NUM_ENTRIES - 1 {
            year_start_days[i] = DAYS_AT_START_OF_MIN_YEAR + total_days;
            let month_bits = i32::from(MONTH_LENGTHS[i]);
            let mut year_length = 29 * 12;
            for month in 1..=12 {
                year_length += (month_bits >> month) & 1;
            }
            year_lengths[i] = year_length;
            total_days += year_length;
        }
        // Dummy guard years on either side of the supported range,
        // pretending each was 354 days long. The year search probes at
        // most one year beyond an end, and only its length matters.
        year_start_days[0] = DAYS_AT_START_OF_MIN_YEAR - 354;
        year_lengths[0] = 354;
        year_start_days[NUM_ENTRIES - 1] =
            DAYS_AT_START_OF_MIN_YEAR + total_days;
        year_lengths[NUM_ENTRIES - 1] = 354;
        UmAlQuraCalculator {
            core: CalculatorCore::new(
                MIN_YEAR,
                MAX_YEAR,
                AVERAGE_DAYS_PER_10_YEARS,
                DAYS_AT_START_OF_YEAR_1,
            ),
            year_start_days,
            year_lengths,
        }
    }

    fn index(year: i32) -> usize {
        debug_assert!(
            year >= MIN_YEAR - 1 && year <= MAX_YEAR + 1,
            "unsupported Um al-Qura year {year}",
        );
        (year - MIN_YEAR + 1) as usize
    }

    fn month_bits(year: i32) -> i32 {
        i32::from(MONTH_LENGTHS[UmAlQuraCalculator::index(year)])
    }
}

impl YearMonthDayCalculator for UmAlQuraCalculator {
    fn core(&self) -> &CalculatorCore {
        &self.core
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        29 + ((UmAlQuraCalculator::month_bits(year) >> month) & 1)
    }

    fn days_in_year(&self, year: i32) -> i32 {
        self.year_lengths[UmAlQuraCalculator::index(year)]
    }

    fn is_leap_year(&self, year: i32) -> bool {
        self.year_lengths[UmAlQuraCalculator::index(year)] == 355
    }

    fn days_from_start_of_year_to_start_of_month(
        &self,
        year: i32,
        month: i32,
    ) -> i32 {
        // We could count bits under a mask, but iterating twelve bits is
        // plenty fast and rather clearer.
        let month_bits = UmAlQuraCalculator::month_bits(year);
        let mut extra_days = 0;
        for i in 1..month {
            extra_days += (month_bits >> i) & 1;
        }
        (month - 1) * 29 + extra_days
    }

    fn calculate_start_of_year_days(&self, _year: i32) -> i32 {
        // Only ever called through the cached lookup, which is overridden
        // below to consult the materialized table instead.
        unreachable!("Um al-Qura year starts are precomputed")
    }

    fn start_of_year_days(&self, year: i32) -> i32 {
        // No need for the year-start cache: the whole range is already
        // materialized.
        self.year_start_days[UmAlQuraCalculator::index(year)]
    }

    fn year_month_day_from_year_and_day_of_year(
        &self,
        year: i32,
        day_of_year: i32,
    ) -> YearMonthDay {
        let month_bits = UmAlQuraCalculator::month_bits(year);
        let mut days_left = day_of_year;
        for month in 1..12 {
            let month_length = 29 + ((month_bits >> month) & 1);
            if days_left <= month_length {
                return YearMonthDay::new(year, month, days_left);
            }
            days_left -= month_length;
        }
        YearMonthDay::new(year, 12, days_left)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: i32, day: i32) -> YearMonthDay {
        YearMonthDay::new(year, month, day)
    }

    #[test]
    fn supported_range() {
        let calc = UmAlQuraCalculator::new();
        assert_eq!(calc.core().min_year, 1318);
        assert_eq!(calc.core().max_year, 1500);
        assert_eq!(calc.start_of_year_days(1318), -25448);
        assert_eq!(calc.start_of_year_days(1501), 39402);
    }

    // The Unix epoch is 1389-10-23 in this calendar.
    #[test]
    fn unix_epoch() {
        let calc = UmAlQuraCalculator::new();
        assert_eq!(calc.days_since_epoch(ymd(1389, 10, 23)), 0);
        assert_eq!(
            calc.year_month_day_from_days_since_epoch(0),
            ymd(1389, 10, 23)
        );
    }

    #[test]
    fn month_lengths_of_1318() {
        let calc = UmAlQuraCalculator::new();
        let expected = [29, 30, 29, 30, 29, 30, 30, 30, 29, 30, 29, 29];
        for (i, length) in expected.into_iter().enumerate() {
            assert_eq!(
                calc.days_in_month(1318, i as i32 + 1),
                length,
                "month {}",
                i + 1,
            );
        }
        assert_eq!(calc.days_in_year(1318), 354);
        assert!(!calc.is_leap_year(1318));
        assert!(calc.is_leap_year(1500));
    }

    #[test]
    fn years_are_internally_consistent() {
        let calc = UmAlQuraCalculator::new();
        let mut leap_years = 0;
        for year in 1318..=1500 {
            let length = calc.days_in_year(year);
            assert!(length == 354 || length == 355, "year {year}");
            if calc.is_leap_year(year) {
                leap_years += 1;
            }
            // Month lengths must sum to the year length, and the start
            // days must advance by exactly one year length.
            let sum: i32 =
                (1..=12).map(|month| calc.days_in_month(year, month)).sum();
            assert_eq!(sum, length, "year {year}");
            assert_eq!(
                calc.start_of_year_days(year + 1)
                    - calc.start_of_year_days(year),
                length,
                "year {year}",
            );
            assert_eq!(
                calc.days_from_start_of_year_to_start_of_month(year, 12)
                    + calc.days_in_month(year, 12),
                length,
                "year {year}",
            );
        }
        assert_eq!(leap_years, 68);
    }

    #[test]
    fn round_trips() {
        let calc = UmAlQuraCalculator::new();
        for &(year, month, day) in &[
            (1318, 1, 1),
            (1389, 10, 23),
            (1400, 6, 15),
            (1500, 1, 1),
            (1500, 12, 30),
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
    fn day_of_year_decode() {
        let calc = UmAlQuraCalculator::new();
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(1318, 1),
            ymd(1318, 1, 1)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(1318, 29),
            ymd(1318, 1, 29)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(1318, 30),
            ymd(1318, 2, 1)
        );
        assert_eq!(
            calc.year_month_day_from_year_and_day_of_year(1318, 354),
            ymd(1318, 12, 29)
        );
    }
}
