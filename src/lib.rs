/*!
A calendrical computation engine.

This crate converts between dates of the world's calendars and a single
linear count of days since the Unix epoch (1970-01-01 ISO, day 0). It
provides the [`CalendarSystem`] registry, with one lazily built
singleton per supported calendar, and a compact [`YearMonthDayCalendar`]
date representation packed into a single `i32` alongside its calendar
tag.

The supported calendars are the ISO, proleptic Gregorian and Julian
calendars, the Coptic calendar, the Hebrew calendar in both its civil
and scriptural month numberings, eight tabular Hijri configurations
(four leap-year patterns crossed with two epochs), the Um al-Qura
calendar of Saudi Arabia, three Persian variants and the Badíʿ
calendar.

# Example

Convert a date between calendars by pivoting through the day count:

```
use almanac::{CalendarSystem, HebrewMonthNumbering, Weekday};

let iso = CalendarSystem::iso();
let hebrew = CalendarSystem::hebrew(HebrewMonthNumbering::Civil);

let date = iso.date(1970, 1, 1)?;
let days = iso.days_since_epoch(date);
let converted = hebrew.from_days_since_epoch(days)?;
assert_eq!(
    (converted.year(), converted.month(), converted.day()),
    (5730, 4, 23),
);
assert_eq!(hebrew.day_of_week(converted), Weekday::Thursday);
# Ok::<(), almanac::Error>(())
```

Calendar systems are identified by stable strings and round-trip
through [`CalendarSystem::for_id`]:

```
use almanac::CalendarSystem;

let system = CalendarSystem::for_id("Hijri Civil-Base16")?;
assert!(std::ptr::eq(system, CalendarSystem::islamic_bcl()));
# Ok::<(), almanac::Error>(())
```

# Crate features

* **std** (enabled by default) - Currently a no-op reserved for forward
compatibility. The crate always links `std`.
* **logging** - Emits some log messages through the `log` crate,
mostly around calendar system construction. Useful for debugging.
* **serde** - Serializes a `&'static CalendarSystem` as its identifier
string, and deserializes by registry lookup.
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]

#[macro_use]
mod logging;

mod cal;
mod date;
mod error;
mod ordinal;
mod system;

pub use crate::{
    cal::{
        era::Era,
        hebrew::HebrewMonthNumbering,
        islamic::{IslamicEpoch, IslamicLeapYearPattern},
    },
    date::{Weekday, YearMonthDay, YearMonthDayCalendar},
    error::Error,
    ordinal::CalendarOrdinal,
    system::CalendarSystem,
};
