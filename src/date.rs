use crate::ordinal::CalendarOrdinal;

const DAY_BITS: i32 = 6;
const MONTH_BITS: i32 = 5;
const DAY_MONTH_BITS: i32 = DAY_BITS + MONTH_BITS;

const DAY_MASK: i32 = (1 << DAY_BITS) - 1;
const MONTH_MASK: i32 = ((1 << MONTH_BITS) - 1) << DAY_BITS;

const CALENDAR_BITS: i32 = 6;
const CALENDAR_MASK: i32 = (1 << CALENDAR_BITS) - 1;
const CALENDAR_DAY_BITS: i32 = CALENDAR_BITS + DAY_BITS;
const CALENDAR_DAY_MONTH_BITS: i32 = CALENDAR_DAY_BITS + MONTH_BITS;

/// A year, month and day packed into a single `i32`.
///
/// The packing is day−1 in the low 6 bits, month−1 in the next 5 bits and
/// year−1 in the remaining (signed) high bits. Since each component is
/// biased by one and laid out most significant first, comparing the raw
/// integers of two dates in the same calendar is the same as comparing
/// them chronologically. (The one exception is the Hebrew calendar under
/// scriptural month numbering, where month numbers don't occur in
/// chronological order within a year. Use
/// [`CalendarSystem::compare`](crate::CalendarSystem::compare) when the
/// calendar might be that one.)
///
/// A `YearMonthDay` says nothing about which calendar its fields are in.
/// Values are only ever produced by [`CalendarSystem`](crate::CalendarSystem)
/// methods, which validate the fields for their calendar first.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonthDay(i32);

impl YearMonthDay {
    /// Packs the given components. Callers must have validated them for
    /// whatever calendar this date is in: `-16384 < year <= 16383`,
    /// `1 <= month <= 32`, `1 <= day <= 64`.
    #[inline]
    pub(crate) fn new(year: i32, month: i32, day: i32) -> YearMonthDay {
        debug_assert!(-(1 << 20) < year && year < (1 << 20));
        debug_assert!(1 <= month && month <= (1 << MONTH_BITS));
        debug_assert!(1 <= day && day <= (1 << DAY_BITS));
        YearMonthDay(
            ((year - 1) << DAY_MONTH_BITS)
                | ((month - 1) << DAY_BITS)
                | (day - 1),
        )
    }

    #[inline]
    pub(crate) fn from_raw(raw: i32) -> YearMonthDay {
        YearMonthDay(raw)
    }

    /// Returns the year. This is an "absolute" year, not a year of an era:
    /// in calendars with multiple eras, year 0 and negative years are
    /// meaningful.
    #[inline]
    pub fn year(self) -> i32 {
        // Arithmetic shift, so negative years come back out negative.
        (self.0 >> DAY_MONTH_BITS) + 1
    }

    /// Returns the month of the year, starting at 1.
    #[inline]
    pub fn month(self) -> i32 {
        ((self.0 & MONTH_MASK) >> DAY_BITS) + 1
    }

    /// Returns the day of the month, starting at 1.
    #[inline]
    pub fn day(self) -> i32 {
        (self.0 & DAY_MASK) + 1
    }

    /// Tags this date with the calendar it belongs to.
    #[inline]
    pub fn with_calendar(
        self,
        ordinal: CalendarOrdinal,
    ) -> YearMonthDayCalendar {
        YearMonthDayCalendar((self.0 << CALENDAR_BITS) | ordinal.value())
    }

    #[inline]
    pub(crate) fn raw(self) -> i32 {
        self.0
    }
}

impl core::fmt::Debug for YearMonthDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", year, month, day)
        }
    }
}

impl core::fmt::Display for YearMonthDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

/// A year, month, day and calendar packed into a single `i32`.
///
/// The packing is the calendar ordinal in the low 6 bits, then day−1 in
/// 6 bits, month−1 in 5 bits and year−1 in the top 15 (signed) bits.
/// Stripping the calendar or swapping it for another one is pure bit
/// manipulation; no calendrical computation is involved.
///
/// Raw integer ordering is *not* meaningful across different calendars,
/// since the calendar lives in the low bits. Within one calendar it orders
/// chronologically, with the same Hebrew scriptural caveat as
/// [`YearMonthDay`].
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct YearMonthDayCalendar(i32);

impl YearMonthDayCalendar {
    /// Packs the given components. The same validation obligations apply
    /// as for [`YearMonthDay::new`], with year limited to 15 signed bits.
    #[inline]
    pub(crate) fn new(
        year: i32,
        month: i32,
        day: i32,
        ordinal: CalendarOrdinal,
    ) -> YearMonthDayCalendar {
        debug_assert!(-(1 << 14) < year && year < (1 << 14));
        debug_assert!(1 <= month && month <= (1 << MONTH_BITS));
        debug_assert!(1 <= day && day <= (1 << DAY_BITS));
        YearMonthDayCalendar(
            ((year - 1) << CALENDAR_DAY_MONTH_BITS)
                | ((month - 1) << CALENDAR_DAY_BITS)
                | ((day - 1) << CALENDAR_BITS)
                | ordinal.value(),
        )
    }

    /// Returns the calendar this date is in.
    #[inline]
    pub fn calendar_ordinal(self) -> CalendarOrdinal {
        CalendarOrdinal::from_value(self.0 & CALENDAR_MASK)
    }

    /// Strips the calendar tag.
    #[inline]
    pub fn to_year_month_day(self) -> YearMonthDay {
        YearMonthDay(self.0 >> CALENDAR_BITS)
    }

    /// Returns the year. See [`YearMonthDay::year`].
    #[inline]
    pub fn year(self) -> i32 {
        (self.0 >> CALENDAR_DAY_MONTH_BITS) + 1
    }

    /// Returns the month of the year, starting at 1.
    #[inline]
    pub fn month(self) -> i32 {
        ((self.0 >> CALENDAR_DAY_BITS) & ((1 << MONTH_BITS) - 1)) + 1
    }

    /// Returns the day of the month, starting at 1.
    #[inline]
    pub fn day(self) -> i32 {
        ((self.0 >> CALENDAR_BITS) & DAY_MASK) + 1
    }
}

impl core::fmt::Debug for YearMonthDayCalendar {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:?} ({:?})",
            self.to_year_month_day(),
            self.calendar_ordinal(),
        )
    }
}

impl core::fmt::Display for YearMonthDayCalendar {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

/// A day of the week, using ISO numbering: Monday is 1 and Sunday is 7.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(i8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Converts an ISO day-of-week number in `1..=7` to a `Weekday`.
    /// Callers must ensure the number is in range.
    pub(crate) fn from_iso_number(number: i32) -> Weekday {
        match number {
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            _ => {
                debug_assert_eq!(number, 7);
                Weekday::Sunday
            }
        }
    }

    /// Returns this weekday as an ISO number, where Monday is 1 and Sunday
    /// is 7.
    pub fn to_iso_number(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use crate::ordinal::CalendarOrdinal;

    use super::*;

    impl quickcheck::Arbitrary for YearMonthDay {
        fn arbitrary(g: &mut quickcheck::Gen) -> YearMonthDay {
            let year = i32::arbitrary(g).rem_euclid(19998) - 9998;
            let month = i32::arbitrary(g).rem_euclid(32) + 1;
            let day = i32::arbitrary(g).rem_euclid(64) + 1;
            YearMonthDay::new(year, month, day)
        }
    }

    #[test]
    fn ymd_round_trips_at_extremes() {
        for &(year, month, day) in &[
            (-9998, 1, 1),
            (-9998, 32, 64),
            (-1, 1, 1),
            (0, 1, 1),
            (1, 1, 1),
            (1970, 1, 1),
            (9999, 12, 31),
            (9999, 32, 64),
        ] {
            let ymd = YearMonthDay::new(year, month, day);
            assert_eq!(ymd.year(), year);
            assert_eq!(ymd.month(), month);
            assert_eq!(ymd.day(), day);
        }
    }

    #[test]
    fn ymdc_round_trips_at_extremes() {
        for &(year, month, day) in &[
            (-9998, 1, 1),
            (-9998, 32, 64),
            (0, 17, 30),
            (1970, 1, 1),
            (9999, 32, 64),
        ] {
            for ordinal in CalendarOrdinal::ALL {
                let ymdc =
                    YearMonthDayCalendar::new(year, month, day, ordinal);
                assert_eq!(ymdc.year(), year);
                assert_eq!(ymdc.month(), month);
                assert_eq!(ymdc.day(), day);
                assert_eq!(ymdc.calendar_ordinal(), ordinal);
            }
        }
    }

    #[test]
    fn tagging_is_pure_bit_manipulation() {
        let ymd = YearMonthDay::new(5784, 13, 29);
        let tagged = ymd.with_calendar(CalendarOrdinal::HebrewCivil);
        assert_eq!(tagged.to_year_month_day(), ymd);
        assert_eq!(tagged.calendar_ordinal(), CalendarOrdinal::HebrewCivil);
    }

    #[test]
    fn ordering_matches_components() {
        let ymd = |y, m, d| YearMonthDay::new(y, m, d);
        assert!(ymd(2024, 1, 1) < ymd(2024, 1, 2));
        assert!(ymd(2024, 1, 31) < ymd(2024, 2, 1));
        assert!(ymd(2024, 12, 31) < ymd(2025, 1, 1));
        assert!(ymd(-1, 12, 31) < ymd(0, 1, 1));
        assert!(ymd(0, 12, 31) < ymd(1, 1, 1));
        assert!(ymd(-9998, 1, 1) < ymd(9999, 32, 64));
    }

    #[test]
    fn debug_output() {
        assert_eq!(
            format!("{:?}", YearMonthDay::new(2024, 2, 29)),
            "2024-02-29"
        );
        assert_eq!(
            format!("{:?}", YearMonthDay::new(-9998, 1, 1)),
            "-9998-01-01"
        );
        assert_eq!(format!("{:?}", YearMonthDay::new(0, 12, 3)), "0000-12-03");
    }

    quickcheck::quickcheck! {
        fn prop_round_trip(ymd: YearMonthDay) -> bool {
            let again =
                YearMonthDay::new(ymd.year(), ymd.month(), ymd.day());
            again == ymd
        }

        fn prop_tag_strip_identity(ymd: YearMonthDay) -> bool {
            let tagged = ymd.with_calendar(CalendarOrdinal::Coptic);
            tagged.to_year_month_day() == ymd
        }

        fn prop_ordering_is_lexicographic(
            lhs: YearMonthDay,
            rhs: YearMonthDay
        ) -> bool {
            let key = |ymd: YearMonthDay| (ymd.year(), ymd.month(), ymd.day());
            lhs.cmp(&rhs) == key(lhs).cmp(&key(rhs))
        }
    }
}
