/// A stable, compact identifier for a calendar system.
///
/// The numeric value of each variant is a persisted value: it is embedded
/// in the low bits of [`YearMonthDayCalendar`](crate::YearMonthDayCalendar)
/// and must never be renumbered or reused, only appended to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum CalendarOrdinal {
    Iso = 0,
    Gregorian = 1,
    Julian = 2,
    Coptic = 3,
    HebrewCivil = 4,
    HebrewScriptural = 5,
    PersianSimple = 6,
    PersianArithmetic = 7,
    PersianAstronomical = 8,
    IslamicAstronomicalBase15 = 9,
    IslamicAstronomicalBase16 = 10,
    IslamicAstronomicalIndian = 11,
    IslamicAstronomicalHabashAlHasib = 12,
    IslamicCivilBase15 = 13,
    IslamicCivilBase16 = 14,
    IslamicCivilIndian = 15,
    IslamicCivilHabashAlHasib = 16,
    UmAlQura = 17,
    Badi = 18,
}

impl CalendarOrdinal {
    /// The number of distinct calendar systems.
    pub(crate) const COUNT: usize = 19;

    /// Every ordinal, in numeric order.
    pub(crate) const ALL: [CalendarOrdinal; CalendarOrdinal::COUNT] = [
        CalendarOrdinal::Iso,
        CalendarOrdinal::Gregorian,
        CalendarOrdinal::Julian,
        CalendarOrdinal::Coptic,
        CalendarOrdinal::HebrewCivil,
        CalendarOrdinal::HebrewScriptural,
        CalendarOrdinal::PersianSimple,
        CalendarOrdinal::PersianArithmetic,
        CalendarOrdinal::PersianAstronomical,
        CalendarOrdinal::IslamicAstronomicalBase15,
        CalendarOrdinal::IslamicAstronomicalBase16,
        CalendarOrdinal::IslamicAstronomicalIndian,
        CalendarOrdinal::IslamicAstronomicalHabashAlHasib,
        CalendarOrdinal::IslamicCivilBase15,
        CalendarOrdinal::IslamicCivilBase16,
        CalendarOrdinal::IslamicCivilIndian,
        CalendarOrdinal::IslamicCivilHabashAlHasib,
        CalendarOrdinal::UmAlQura,
        CalendarOrdinal::Badi,
    ];

    /// Recovers an ordinal from its persisted numeric value.
    ///
    /// Callers must ensure that `value < CalendarOrdinal::COUNT`. The only
    /// sources of values are this crate's own packed representations, which
    /// are always built from a real ordinal.
    pub(crate) fn from_value(value: i32) -> CalendarOrdinal {
        CalendarOrdinal::ALL[value as usize]
    }

    /// Returns the persisted numeric value of this ordinal.
    pub(crate) fn value(self) -> i32 {
        self as i32
    }
}
