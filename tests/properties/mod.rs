/*!
Invariants that every calendar system must satisfy, checked over a
sample of years spread across each system's supported range.
*/

use std::cmp::Ordering;

use almanac::CalendarSystem;

fn every_system() -> impl Iterator<Item = &'static CalendarSystem> {
    CalendarSystem::ids().map(|id| CalendarSystem::for_id(id).unwrap())
}

/// The day number of the given year's first day. Month 1 isn't always the
/// first month of the year (Hebrew scriptural numbering starts at month 7),
/// so this backs up from an arbitrary date by its day of year.
fn start_of_year(system: &CalendarSystem, year: i32) -> i32 {
    let date = system.date(year, 1, 1).unwrap();
    system.days_since_epoch(date) - (system.day_of_year(date) - 1)
}

fn sample_years(system: &CalendarSystem) -> Vec<i32> {
    let (min, max) = (system.min_year(), system.max_year());
    let mut years = vec![min, min + 1, max - 1, max];
    let step = ((max - min) / 7).max(1);
    let mut year = min;
    while year <= max {
        years.push(year);
        year += step;
    }
    years.sort();
    years.dedup();
    years
}

// The months of a year must add up to the year's length, and the year
// lengths must add up to the distance between successive new years.
#[test]
fn day_counts_are_consistent() {
    for system in every_system() {
        for year in sample_years(system) {
            let months = system.months_in_year(year).unwrap();
            let from_months: i32 = (1..=months)
                .map(|month| system.days_in_month(year, month).unwrap())
                .sum();
            assert_eq!(
                from_months,
                system.days_in_year(year).unwrap(),
                "{system}, year {year}",
            );
            if year < system.max_year() {
                assert_eq!(
                    start_of_year(system, year + 1)
                        - start_of_year(system, year),
                    system.days_in_year(year).unwrap(),
                    "{system}, year {year}",
                );
            }
        }
    }
}

#[test]
fn round_trips() {
    for system in every_system() {
        for year in sample_years(system) {
            for month in 1..=system.months_in_year(year).unwrap() {
                let last = system.days_in_month(year, month).unwrap();
                for day in [1, last] {
                    let date = system.date(year, month, day).unwrap();
                    let days = system.days_since_epoch(date);
                    assert_eq!(
                        system.from_days_since_epoch(days).unwrap(),
                        date,
                        "{system}, {year:04}-{month:02}-{day:02}",
                    );
                }
            }
        }
    }
}

// Walking the day line one day at a time must visit dates in strictly
// increasing chronological order, in every calendar's own comparison.
#[test]
fn day_line_is_monotonic() {
    for system in every_system() {
        let windows = [
            (system.min_days(), system.min_days() + 40),
            (-200, 200),
            (system.max_days() - 40, system.max_days()),
        ];
        for (start, end) in windows {
            let mut prev = system.from_days_since_epoch(start).unwrap();
            for days in start + 1..=end {
                let date = system.from_days_since_epoch(days).unwrap();
                assert_eq!(
                    system.compare(prev, date),
                    Ordering::Less,
                    "{system}, day {days}",
                );
                assert_eq!(
                    system.days_since_epoch(date),
                    days,
                    "{system}, day {days}",
                );
                prev = date;
            }
        }
    }
}

// Every leap year must be longer than every common year. What "leap"
// means varies (an extra day, an extra month, a longer intercalary
// period), but it always shows up in the year length.
#[test]
fn leap_years_are_longer() {
    for system in every_system() {
        let mut max_common = i32::MIN;
        let mut min_leap = i32::MAX;
        for year in sample_years(system) {
            let length = system.days_in_year(year).unwrap();
            if system.is_leap_year(year).unwrap() {
                min_leap = min_leap.min(length);
            } else {
                max_common = max_common.max(length);
            }
        }
        assert!(
            max_common < min_leap,
            "{system}: longest common year {max_common}, \
             shortest leap year {min_leap}",
        );
    }
}

#[test]
fn day_of_year_spans_the_year() {
    for system in every_system() {
        for year in sample_years(system) {
            let start = start_of_year(system, year);
            let first = system.from_days_since_epoch(start).unwrap();
            assert_eq!(system.day_of_year(first), 1, "{system}");
            let length = system.days_in_year(year).unwrap();
            let last = system
                .from_days_since_epoch(start + length - 1)
                .unwrap();
            assert_eq!(last.year(), year, "{system}");
            assert_eq!(
                system.day_of_year(last),
                length,
                "{system}, year {year}",
            );
        }
    }
}
