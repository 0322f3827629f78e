/*!
Known-date checks for each calendar system, mostly pinned against
independently published calendar tables.
*/

use almanac::{
    CalendarSystem, Era, HebrewMonthNumbering, IslamicEpoch,
    IslamicLeapYearPattern, Weekday,
};

fn ymd(
    system: &CalendarSystem,
    days_since_epoch: i32,
) -> (i32, i32, i32) {
    let date = system.from_days_since_epoch(days_since_epoch).unwrap();
    (date.year(), date.month(), date.day())
}

#[test]
fn gregorian_epoch() {
    let iso = CalendarSystem::iso();
    let epoch = iso.date(1970, 1, 1).unwrap();
    assert_eq!(iso.days_since_epoch(epoch), 0);
    assert_eq!(iso.day_of_week(epoch), Weekday::Thursday);
    assert_eq!(ymd(iso, 0), (1970, 1, 1));
}

#[test]
fn gregorian_leap_years() {
    let gregorian = CalendarSystem::gregorian();
    assert!(gregorian.is_leap_year(2000).unwrap());
    assert!(!gregorian.is_leap_year(2100).unwrap());
    assert!(gregorian.is_leap_year(2012).unwrap());
    assert!(!gregorian.is_leap_year(1900).unwrap());
}

#[test]
fn julian_lags_thirteen_days_in_the_twentieth_century() {
    let julian = CalendarSystem::julian();
    assert_eq!(ymd(julian, 0), (1969, 12, 19));
    // 1900 is a Julian leap year but not a Gregorian one.
    assert!(julian.is_leap_year(1900).unwrap());
    assert!(julian.date(1900, 2, 29).is_ok());
    assert!(CalendarSystem::gregorian().date(1900, 2, 29).is_err());
}

#[test]
fn coptic_epoch() {
    let coptic = CalendarSystem::coptic();
    // 23 Kiahk 1686 AM.
    assert_eq!(ymd(coptic, 0), (1686, 4, 23));
    assert_eq!(coptic.eras(), &[Era::ANNO_MARTYRUM]);
    let date = coptic.from_days_since_epoch(0).unwrap();
    assert_eq!(coptic.era(date), Era::ANNO_MARTYRUM);
}

#[test]
fn islamic_leap_year_patterns_differ() {
    let base15 = CalendarSystem::islamic(
        IslamicLeapYearPattern::Base15,
        IslamicEpoch::Civil,
    );
    let base16 = CalendarSystem::islamic(
        IslamicLeapYearPattern::Base16,
        IslamicEpoch::Civil,
    );
    // The pattern name tells you which mid-cycle year is the leap one.
    assert!(base15.is_leap_year(15).unwrap());
    assert!(!base16.is_leap_year(15).unwrap());
    assert!(!base15.is_leap_year(16).unwrap());
    assert!(base16.is_leap_year(16).unwrap());
    // Both patterns have eleven leap years per 30-year cycle.
    for system in [base15, base16] {
        let leap_years = (1..=30)
            .filter(|&year| system.is_leap_year(year).unwrap())
            .count();
        assert_eq!(leap_years, 11, "{system}");
    }
}

#[test]
fn islamic_epochs_are_one_day_apart() {
    let astronomical = CalendarSystem::islamic(
        IslamicLeapYearPattern::Base16,
        IslamicEpoch::Astronomical,
    );
    let civil = CalendarSystem::islamic_bcl();
    assert_eq!(civil.min_days() - astronomical.min_days(), 1);
    // 1 Muharram 1390 AH fell on 1970-03-09 in the civil reckoning.
    let date = civil.date(1390, 1, 1).unwrap();
    assert_eq!(civil.days_since_epoch(date), 67);
}

#[test]
fn hebrew_epoch_in_both_numberings() {
    let scriptural =
        CalendarSystem::hebrew(HebrewMonthNumbering::Scriptural);
    let civil = CalendarSystem::hebrew(HebrewMonthNumbering::Civil);
    assert_eq!(ymd(scriptural, 0), (5730, 10, 23));
    assert_eq!(ymd(civil, 0), (5730, 4, 23));
    let date = scriptural.date(5730, 10, 23).unwrap();
    assert_eq!(scriptural.days_since_epoch(date), 0);
    assert_eq!(scriptural.era(date), Era::ANNO_MUNDI);
}

#[test]
fn hebrew_leap_year_gains_a_month() {
    let civil = CalendarSystem::hebrew(HebrewMonthNumbering::Civil);
    assert!(civil.is_leap_year(5774).unwrap());
    assert_eq!(civil.months_in_year(5774).unwrap(), 13);
    assert!(!civil.is_leap_year(5775).unwrap());
    assert_eq!(civil.months_in_year(5775).unwrap(), 12);
}

#[test]
fn um_al_qura_supported_range() {
    let system = CalendarSystem::um_al_qura();
    assert_eq!(system.min_year(), 1318);
    assert_eq!(system.max_year(), 1500);
    assert_eq!(ymd(system, system.min_days()), (1318, 1, 1));
    assert_eq!(ymd(system, 0), (1389, 10, 23));
    assert!(system.date(1317, 1, 1).is_err());
    assert!(system.date(1501, 1, 1).is_err());
}

#[test]
fn badi_intercalary_length() {
    let badi = CalendarSystem::badi();
    // Before year 172 the length of Ayyam-i-Ha tracks the Gregorian
    // leap status of the year the period falls in.
    assert_eq!(badi.days_in_month(100, 18).unwrap(), 19 + 5);
    assert_eq!(badi.days_in_month(171, 18).unwrap(), 19 + 4);
    // From year 172 on it comes from the published table.
    assert_eq!(badi.days_in_month(172, 18).unwrap(), 19 + 4);
    assert_eq!(badi.days_in_month(174, 18).unwrap(), 19 + 5);
}

#[test]
fn badi_naw_ruz_from_table() {
    let iso = CalendarSystem::iso();
    let badi = CalendarSystem::badi();
    // Naw-Ruz 172 BE fell on 2015-03-21, 173 BE on 2016-03-20.
    for (badi_year, gregorian) in
        [(172, (2015, 3, 21)), (173, (2016, 3, 20)), (181, (2024, 3, 20))]
    {
        let new_year = badi.date(badi_year, 1, 1).unwrap();
        let (y, m, d) = gregorian;
        let expected = iso.date(y, m, d).unwrap();
        assert_eq!(
            badi.days_since_epoch(new_year),
            iso.days_since_epoch(expected),
            "Naw-Ruz {badi_year}",
        );
    }
}

#[test]
fn persian_variants_agree_on_the_epoch() {
    // 11 Dey 1348 AP. The three leap-year rules coincide in this era.
    for system in [
        CalendarSystem::persian_simple(),
        CalendarSystem::persian_arithmetic(),
        CalendarSystem::persian_astronomical(),
    ] {
        assert_eq!(ymd(system, 0), (1348, 10, 11), "{system}");
        let date = system.date(1348, 10, 11).unwrap();
        assert_eq!(system.era(date), Era::ANNO_PERSICO);
        assert_eq!(system.year_of_era(date), 1348);
    }
}

#[test]
fn conversion_pivots_through_the_day_count() {
    let iso = CalendarSystem::iso();
    let hebrew = CalendarSystem::hebrew(HebrewMonthNumbering::Civil);
    let islamic = CalendarSystem::islamic_bcl();

    let date = iso.date(1970, 1, 1).unwrap();
    let days = iso.days_since_epoch(date);
    let hebrew_date = hebrew.from_days_since_epoch(days).unwrap();
    assert_eq!(
        (hebrew_date.year(), hebrew_date.month(), hebrew_date.day()),
        (5730, 4, 23),
    );
    let islamic_date = islamic.from_days_since_epoch(days).unwrap();
    assert_eq!(
        (islamic_date.year(), islamic_date.month(), islamic_date.day()),
        (1389, 10, 22),
    );
    // The day of week is calendar-independent.
    assert_eq!(hebrew.day_of_week(hebrew_date), Weekday::Thursday);
    assert_eq!(islamic.day_of_week(islamic_date), Weekday::Thursday);
}
