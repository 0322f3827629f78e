/*!
The calendar system registry and its public query surface.

A [`CalendarSystem`] bundles a year/month/day calculator with an era
calculator, an identifier and the derived day-number bounds. Systems are
built lazily, one singleton per [`CalendarOrdinal`], and handed out as
`&'static` references; all public operations validate their inputs, so a
[`YearMonthDayCalendar`] obtained from a system is always a real date of
that system.
*/

use core::cmp::Ordering;

use std::sync::OnceLock;

use crate::{
    cal::{
        badi::BadiCalculator,
        coptic::CopticCalculator,
        era::{Era, EraCalculator},
        gregorian::{GregorianCalculator, JulianCalculator},
        hebrew::{HebrewCalculator, HebrewMonthNumbering},
        islamic::{IslamicCalculator, IslamicEpoch, IslamicLeapYearPattern},
        persian::{PersianCalculator, PersianVariant},
        umalqura::UmAlQuraCalculator,
        YearMonthDayCalculator,
    },
    date::{Weekday, YearMonthDay, YearMonthDayCalendar},
    error::Error,
    ordinal::CalendarOrdinal,
};

/// A calendar system: a way of dividing the day line into years, months
/// and days, together with its eras.
///
/// Instances are process-wide singletons obtained from the associated
/// functions, e.g. [`CalendarSystem::iso`] or [`CalendarSystem::for_id`].
/// Every date-producing operation validates its inputs and tags its
/// result with this system's ordinal.
///
/// # Example
///
/// ```
/// use almanac::CalendarSystem;
///
/// let iso = CalendarSystem::iso();
/// let date = iso.date(1970, 1, 1)?;
/// assert_eq!(iso.days_since_epoch(date), 0);
/// # Ok::<(), almanac::Error>(())
/// ```
pub struct CalendarSystem {
    ordinal: CalendarOrdinal,
    id: &'static str,
    name: &'static str,
    calculator: Box<dyn YearMonthDayCalculator>,
    era_calculator: EraCalculator,
    min_year: i32,
    max_year: i32,
    min_days: i32,
    max_days: i32,
}

static REGISTRY: [OnceLock<CalendarSystem>; CalendarOrdinal::COUNT] =
    [const { OnceLock::new() }; CalendarOrdinal::COUNT];

impl CalendarSystem {
    /// Returns the singleton system for the given ordinal, building it on
    /// first use.
    pub(crate) fn for_ordinal(
        ordinal: CalendarOrdinal,
    ) -> &'static CalendarSystem {
        REGISTRY[ordinal.value() as usize]
            .get_or_init(|| CalendarSystem::build(ordinal))
    }

    /// Returns the system with the given identifier, as produced by
    /// [`CalendarSystem::id`].
    pub fn for_id(id: &str) -> Result<&'static CalendarSystem, Error> {
        CalendarOrdinal::ALL
            .into_iter()
            .find(|&ordinal| CalendarSystem::id_for(ordinal) == id)
            .map(CalendarSystem::for_ordinal)
            .ok_or_else(|| Error::unknown_id(id))
    }

    /// Returns the identifiers of every supported calendar system.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        CalendarOrdinal::ALL.into_iter().map(CalendarSystem::id_for)
    }

    /// The ISO-8601 calendar: the Gregorian rules extended backwards,
    /// with the year numbering everyone actually uses.
    pub fn iso() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::Iso)
    }

    /// The proleptic Gregorian calendar.
    pub fn gregorian() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::Gregorian)
    }

    /// The proleptic Julian calendar: a leap year every four years, with
    /// no century exceptions.
    pub fn julian() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::Julian)
    }

    /// The Coptic calendar.
    pub fn coptic() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::Coptic)
    }

    /// The Hebrew calendar, using the given month numbering.
    pub fn hebrew(
        numbering: HebrewMonthNumbering,
    ) -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(match numbering {
            HebrewMonthNumbering::Civil => CalendarOrdinal::HebrewCivil,
            HebrewMonthNumbering::Scriptural => {
                CalendarOrdinal::HebrewScriptural
            }
        })
    }

    /// A tabular Hijri calendar with the given leap-year pattern and
    /// epoch.
    pub fn islamic(
        pattern: IslamicLeapYearPattern,
        epoch: IslamicEpoch,
    ) -> &'static CalendarSystem {
        use self::{IslamicEpoch as E, IslamicLeapYearPattern as P};

        CalendarSystem::for_ordinal(match (epoch, pattern) {
            (E::Astronomical, P::Base15) => {
                CalendarOrdinal::IslamicAstronomicalBase15
            }
            (E::Astronomical, P::Base16) => {
                CalendarOrdinal::IslamicAstronomicalBase16
            }
            (E::Astronomical, P::Indian) => {
                CalendarOrdinal::IslamicAstronomicalIndian
            }
            (E::Astronomical, P::HabashAlHasib) => {
                CalendarOrdinal::IslamicAstronomicalHabashAlHasib
            }
            (E::Civil, P::Base15) => CalendarOrdinal::IslamicCivilBase15,
            (E::Civil, P::Base16) => CalendarOrdinal::IslamicCivilBase16,
            (E::Civil, P::Indian) => CalendarOrdinal::IslamicCivilIndian,
            (E::Civil, P::HabashAlHasib) => {
                CalendarOrdinal::IslamicCivilHabashAlHasib
            }
        })
    }

    /// The most common tabular Hijri configuration: the Base16 leap-year
    /// pattern with the civil (Friday) epoch.
    pub fn islamic_bcl() -> &'static CalendarSystem {
        CalendarSystem::islamic(
            IslamicLeapYearPattern::Base16,
            IslamicEpoch::Civil,
        )
    }

    /// The Persian calendar with the 33-year leap cycle.
    pub fn persian_simple() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::PersianSimple)
    }

    /// The Persian calendar with Birashk's arithmetic leap rule.
    pub fn persian_arithmetic() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::PersianArithmetic)
    }

    /// The Persian calendar with astronomically derived leap years.
    pub fn persian_astronomical() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::PersianAstronomical)
    }

    /// The Um al-Qura calendar of Saudi Arabia.
    pub fn um_al_qura() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::UmAlQura)
    }

    /// The Badíʿ (Bahá'í) calendar.
    pub fn badi() -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(CalendarOrdinal::Badi)
    }

    fn id_for(ordinal: CalendarOrdinal) -> &'static str {
        use self::CalendarOrdinal as O;

        match ordinal {
            O::Iso => "ISO",
            O::Gregorian => "Gregorian",
            O::Julian => "Julian",
            O::Coptic => "Coptic",
            O::HebrewCivil => "Hebrew Civil",
            O::HebrewScriptural => "Hebrew Scriptural",
            O::PersianSimple => "Persian Simple",
            O::PersianArithmetic => "Persian Arithmetic",
            O::PersianAstronomical => "Persian Algorithmic",
            O::IslamicAstronomicalBase15 => "Hijri Astronomical-Base15",
            O::IslamicAstronomicalBase16 => "Hijri Astronomical-Base16",
            O::IslamicAstronomicalIndian => "Hijri Astronomical-Indian",
            O::IslamicAstronomicalHabashAlHasib => {
                "Hijri Astronomical-HabashAlHasib"
            }
            O::IslamicCivilBase15 => "Hijri Civil-Base15",
            O::IslamicCivilBase16 => "Hijri Civil-Base16",
            O::IslamicCivilIndian => "Hijri Civil-Indian",
            O::IslamicCivilHabashAlHasib => "Hijri Civil-HabashAlHasib",
            O::UmAlQura => "Um Al Qura",
            O::Badi => "Badi",
        }
    }

    fn build(ordinal: CalendarOrdinal) -> CalendarSystem {
        use self::CalendarOrdinal as O;

        let id = CalendarSystem::id_for(ordinal);
        debug!("building calendar system {id:?}");
        let name: &'static str = match ordinal {
            O::HebrewCivil | O::HebrewScriptural => "Hebrew",
            O::PersianSimple
            | O::PersianArithmetic
            | O::PersianAstronomical => "Persian",
            O::IslamicAstronomicalBase15
            | O::IslamicAstronomicalBase16
            | O::IslamicAstronomicalIndian
            | O::IslamicAstronomicalHabashAlHasib
            | O::IslamicCivilBase15
            | O::IslamicCivilBase16
            | O::IslamicCivilIndian
            | O::IslamicCivilHabashAlHasib => "Hijri",
            _ => id,
        };
        let calculator: Box<dyn YearMonthDayCalculator> = match ordinal {
            O::Iso | O::Gregorian => Box::new(GregorianCalculator::new()),
            O::Julian => Box::new(JulianCalculator::new()),
            O::Coptic => Box::new(CopticCalculator::new()),
            O::HebrewCivil => {
                Box::new(HebrewCalculator::new(HebrewMonthNumbering::Civil))
            }
            O::HebrewScriptural => Box::new(HebrewCalculator::new(
                HebrewMonthNumbering::Scriptural,
            )),
            O::PersianSimple => {
                Box::new(PersianCalculator::new(PersianVariant::Simple))
            }
            O::PersianArithmetic => {
                Box::new(PersianCalculator::new(PersianVariant::Arithmetic))
            }
            O::PersianAstronomical => Box::new(PersianCalculator::new(
                PersianVariant::Astronomical,
            )),
            O::IslamicAstronomicalBase15 => {
                Box::new(IslamicCalculator::new(
                    IslamicLeapYearPattern::Base15,
                    IslamicEpoch::Astronomical,
                ))
            }
            O::IslamicAstronomicalBase16 => {
                Box::new(IslamicCalculator::new(
                    IslamicLeapYearPattern::Base16,
                    IslamicEpoch::Astronomical,
                ))
            }
            O::IslamicAstronomicalIndian => {
                Box::new(IslamicCalculator::new(
                    IslamicLeapYearPattern::Indian,
                    IslamicEpoch::Astronomical,
                ))
            }
            O::IslamicAstronomicalHabashAlHasib => {
                Box::new(IslamicCalculator::new(
                    IslamicLeapYearPattern::HabashAlHasib,
                    IslamicEpoch::Astronomical,
                ))
            }
            O::IslamicCivilBase15 => Box::new(IslamicCalculator::new(
                IslamicLeapYearPattern::Base15,
                IslamicEpoch::Civil,
            )),
            O::IslamicCivilBase16 => Box::new(IslamicCalculator::new(
                IslamicLeapYearPattern::Base16,
                IslamicEpoch::Civil,
            )),
            O::IslamicCivilIndian => Box::new(IslamicCalculator::new(
                IslamicLeapYearPattern::Indian,
                IslamicEpoch::Civil,
            )),
            O::IslamicCivilHabashAlHasib => {
                Box::new(IslamicCalculator::new(
                    IslamicLeapYearPattern::HabashAlHasib,
                    IslamicEpoch::Civil,
                ))
            }
            O::UmAlQura => Box::new(UmAlQuraCalculator::new()),
            O::Badi => Box::new(BadiCalculator::new()),
        };
        let min_year = calculator.core().min_year;
        let max_year = calculator.core().max_year;
        let era_calculator = match ordinal {
            O::Iso | O::Gregorian | O::Julian => {
                EraCalculator::gj(min_year, max_year)
            }
            O::Coptic => EraCalculator::single(
                Era::ANNO_MARTYRUM,
                min_year,
                max_year,
            ),
            O::HebrewCivil | O::HebrewScriptural => {
                EraCalculator::single(Era::ANNO_MUNDI, min_year, max_year)
            }
            O::PersianSimple
            | O::PersianArithmetic
            | O::PersianAstronomical => EraCalculator::single(
                Era::ANNO_PERSICO,
                min_year,
                max_year,
            ),
            O::Badi => {
                EraCalculator::single(Era::BAHAI, min_year, max_year)
            }
            _ => EraCalculator::single(
                Era::ANNO_HEGIRAE,
                min_year,
                max_year,
            ),
        };
        let min_days = calculator.start_of_year_days(min_year);
        let max_days = calculator.start_of_year_days(max_year + 1) - 1;
        trace!(
            "calendar system {id:?} spans years {min_year}..={max_year}, \
             days {min_days}..={max_days}",
        );
        CalendarSystem {
            ordinal,
            id,
            name,
            calculator,
            era_calculator,
            min_year,
            max_year,
            min_days,
            max_days,
        }
    }

    /// The unique identifier of this system, e.g. `"Hebrew Civil"` or
    /// `"Hijri Civil-Base16"`. Suitable for round-tripping through
    /// [`CalendarSystem::for_id`].
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The name of the calendar this system implements. Unlike the id,
    /// this doesn't distinguish variants: both Hebrew month numberings
    /// are named `"Hebrew"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The stable ordinal of this system.
    pub fn ordinal(&self) -> CalendarOrdinal {
        self.ordinal
    }

    /// The earliest supported absolute year.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// The latest supported absolute year.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// The day number of the first supported day.
    pub fn min_days(&self) -> i32 {
        self.min_days
    }

    /// The day number of the last supported day.
    pub fn max_days(&self) -> i32 {
        self.max_days
    }

    /// Creates a date in this calendar, validating every component.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac::CalendarSystem;
    ///
    /// let hebrew = CalendarSystem::for_id("Hebrew Civil")?;
    /// let date = hebrew.date(5730, 4, 23)?;
    /// assert_eq!(hebrew.days_since_epoch(date), 0);
    /// assert!(hebrew.date(5730, 14, 1).is_err());
    /// # Ok::<(), almanac::Error>(())
    /// ```
    pub fn date(
        &self,
        year: i32,
        month: i32,
        day: i32,
    ) -> Result<YearMonthDayCalendar, Error> {
        self.calculator.validate(year, month, day)?;
        Ok(YearMonthDay::new(year, month, day)
            .with_calendar(self.ordinal))
    }

    /// Converts a day number into a date of this calendar.
    pub fn from_days_since_epoch(
        &self,
        days_since_epoch: i32,
    ) -> Result<YearMonthDayCalendar, Error> {
        if days_since_epoch < self.min_days
            || days_since_epoch > self.max_days
        {
            return Err(Error::range(
                "days since epoch",
                days_since_epoch,
                self.min_days,
                self.max_days,
            ));
        }
        Ok(self
            .calculator
            .year_month_day_from_days_since_epoch(days_since_epoch)
            .with_calendar(self.ordinal))
    }

    /// Converts a date of this calendar to its day number.
    pub fn days_since_epoch(&self, date: YearMonthDayCalendar) -> i32 {
        self.calculator.days_since_epoch(self.untagged(date))
    }

    /// Returns the day of week of the given date.
    ///
    /// All the supported calendars share the seven-day week cycle, so
    /// this only depends on the day number.
    pub fn day_of_week(&self, date: YearMonthDayCalendar) -> Weekday {
        let days_since_epoch = self.days_since_epoch(date);
        // Day 0 is a Thursday, ISO day-of-week 4.
        let iso_number = if days_since_epoch >= -3 {
            1 + (days_since_epoch + 3) % 7
        } else {
            7 + (days_since_epoch + 4) % 7
        };
        Weekday::from_iso_number(iso_number)
    }

    /// Returns the 1-based day of year of the given date.
    pub fn day_of_year(&self, date: YearMonthDayCalendar) -> i32 {
        self.calculator.day_of_year(self.untagged(date))
    }

    /// Returns the number of months in the given year: usually constant,
    /// but 12 or 13 in the lunisolar Hebrew calendar.
    pub fn months_in_year(&self, year: i32) -> Result<i32, Error> {
        self.validate_year(year)?;
        Ok(self.calculator.months_in_year(year))
    }

    /// Returns the number of days in the given year.
    pub fn days_in_year(&self, year: i32) -> Result<i32, Error> {
        self.validate_year(year)?;
        Ok(self.calculator.days_in_year(year))
    }

    /// Returns the number of days in the given month.
    pub fn days_in_month(
        &self,
        year: i32,
        month: i32,
    ) -> Result<i32, Error> {
        self.validate_year(year)?;
        let months = self.calculator.months_in_year(year);
        if month < 1 || month > months {
            return Err(Error::range("month", month, 1, months));
        }
        Ok(self.calculator.days_in_month(year, month))
    }

    /// Returns whether the given year is a leap year in this calendar's
    /// own terms: an extra day for most calendars, an extra month for
    /// the Hebrew one, a longer intercalary period for the Badíʿ one.
    pub fn is_leap_year(&self, year: i32) -> Result<bool, Error> {
        self.validate_year(year)?;
        Ok(self.calculator.is_leap_year(year))
    }

    /// Adds a number of months to the given date, clamping the day of
    /// month downward if the target month is shorter.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac::CalendarSystem;
    ///
    /// let iso = CalendarSystem::iso();
    /// let date = iso.date(2020, 1, 31)?;
    /// let plus_one = iso.add_months(date, 1)?;
    /// assert_eq!((plus_one.month(), plus_one.day()), (2, 29));
    /// # Ok::<(), almanac::Error>(())
    /// ```
    pub fn add_months(
        &self,
        date: YearMonthDayCalendar,
        months: i32,
    ) -> Result<YearMonthDayCalendar, Error> {
        Ok(self
            .calculator
            .add_months(self.untagged(date), months)?
            .with_calendar(self.ordinal))
    }

    /// Counts the whole months between two dates of this calendar,
    /// negative when `end` is earlier than `start`.
    pub fn months_between(
        &self,
        start: YearMonthDayCalendar,
        end: YearMonthDayCalendar,
    ) -> Result<i32, Error> {
        self.calculator
            .months_between(self.untagged(start), self.untagged(end))
    }

    /// Moves the given date to another year, keeping the month and day
    /// as well as the calendar allows.
    pub fn with_year(
        &self,
        date: YearMonthDayCalendar,
        year: i32,
    ) -> Result<YearMonthDayCalendar, Error> {
        self.validate_year(year)?;
        Ok(self
            .calculator
            .set_year(self.untagged(date), year)
            .with_calendar(self.ordinal))
    }

    /// Compares two dates of this calendar in time order.
    ///
    /// This is not always the component-wise comparison: the Hebrew
    /// scriptural month numbering is not chronological.
    pub fn compare(
        &self,
        lhs: YearMonthDayCalendar,
        rhs: YearMonthDayCalendar,
    ) -> Ordering {
        self.calculator.compare(self.untagged(lhs), self.untagged(rhs))
    }

    /// The eras of this calendar, in the order they occurred.
    pub fn eras(&self) -> &'static [Era] {
        self.era_calculator.eras()
    }

    /// The era of the given date.
    pub fn era(&self, date: YearMonthDayCalendar) -> Era {
        self.era_calculator.era(date.year())
    }

    /// The year of the given date as written within its era.
    pub fn year_of_era(&self, date: YearMonthDayCalendar) -> i32 {
        self.era_calculator.year_of_era(date.year())
    }

    /// Converts a year written within an era to an absolute year.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac::{CalendarSystem, Era};
    ///
    /// let iso = CalendarSystem::iso();
    /// assert_eq!(iso.absolute_year(1970, Era::COMMON)?, 1970);
    /// // 1 BCE is absolute year 0.
    /// assert_eq!(iso.absolute_year(1, Era::BEFORE_COMMON)?, 0);
    /// # Ok::<(), almanac::Error>(())
    /// ```
    pub fn absolute_year(
        &self,
        year_of_era: i32,
        era: Era,
    ) -> Result<i32, Error> {
        self.era_calculator.absolute_year(year_of_era, era)
    }

    /// The smallest year-of-era written within the given era.
    pub fn min_year_of_era(&self, era: Era) -> Result<i32, Error> {
        self.era_calculator.min_year_of_era(era)
    }

    /// The largest year-of-era written within the given era.
    pub fn max_year_of_era(&self, era: Era) -> Result<i32, Error> {
        self.era_calculator.max_year_of_era(era)
    }

    fn untagged(&self, date: YearMonthDayCalendar) -> YearMonthDay {
        debug_assert_eq!(
            date.calendar_ordinal(),
            self.ordinal,
            "date {date:?} used with calendar {}",
            self.id,
        );
        date.to_year_month_day()
    }

    fn validate_year(&self, year: i32) -> Result<(), Error> {
        if year < self.min_year || year > self.max_year {
            return Err(Error::range(
                "year",
                year,
                self.min_year,
                self.max_year,
            ));
        }
        Ok(())
    }
}

impl core::fmt::Debug for CalendarSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "CalendarSystem({})", self.id)
    }
}

impl core::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.id)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarSystem {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for &'static CalendarSystem {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<&'static CalendarSystem, D::Error> {
        struct IdVisitor;

        impl<'de> serde::de::Visitor<'de> for IdVisitor {
            type Value = &'static CalendarSystem;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a calendar system identifier string")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> Result<&'static CalendarSystem, E> {
                CalendarSystem::for_id(value)
                    .map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}
