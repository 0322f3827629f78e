/*!
The era layer: mapping the internal era-independent "absolute" year to
and from the 1-based year-of-era convention people actually write.

Most calendars have a single era covering their whole year range. The
Gregorian and Julian calendars have two, CE and BCE, with BCE years
counted backwards: absolute year 0 is 1 BCE, absolute year -1 is 2 BCE.
*/

use crate::error::Error;

/// An era used in a calendar, such as "CE" or "AH".
///
/// Two of the built-in eras, Anno Martyrum (Coptic) and Anno Mundi
/// (Hebrew), share the conventional abbreviation "AM" but are distinct
/// values that compare unequal.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Era {
    name: &'static str,
    key: &'static str,
}

impl Era {
    /// The "Common" era (CE), also known as Anno Domini (AD). Used in
    /// the ISO, Gregorian and Julian calendars.
    pub const COMMON: Era = Era { name: "CE", key: "common" };

    /// The "Before Common" era (BCE), also known as Before Christ (BC).
    /// Used in the ISO, Gregorian and Julian calendars.
    pub const BEFORE_COMMON: Era =
        Era { name: "BCE", key: "before-common" };

    /// The "Era of the Martyrs", the sole era of the Coptic calendar.
    pub const ANNO_MARTYRUM: Era =
        Era { name: "AM", key: "anno-martyrum" };

    /// The "Anno Hegirae" era, the sole era of the Hijri calendars.
    pub const ANNO_HEGIRAE: Era = Era { name: "EH", key: "anno-hegirae" };

    /// The "Anno Mundi" era, the sole era of the Hebrew calendar.
    pub const ANNO_MUNDI: Era = Era { name: "AM", key: "anno-mundi" };

    /// The "Anno Persico" era, the sole era of the Persian calendars.
    pub const ANNO_PERSICO: Era = Era { name: "AP", key: "anno-persico" };

    /// The "Bahá'í" era, the sole era of the Badíʿ calendar.
    pub const BAHAI: Era = Era { name: "BE", key: "bahai" };

    /// Returns the conventional abbreviation of this era, e.g. `"CE"`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl core::fmt::Debug for Era {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Era({})", self.key)
    }
}

impl core::fmt::Display for Era {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

static GJ_ERAS: &[Era] = &[Era::BEFORE_COMMON, Era::COMMON];

/// Year-of-era arithmetic for one calendar.
#[derive(Debug)]
pub(crate) enum EraCalculator {
    /// A single era spanning the calendar's entire year range.
    Single { era: Era, min_year: i32, max_year: i32 },
    /// The CE/BCE pair used by the Gregorian and Julian calendars.
    GJ {
        /// The year-of-era of the earliest supported BCE year. BCE years
        /// grow backwards, so this comes from the minimum absolute year.
        max_year_of_bc: i32,
        max_year_of_ad: i32,
    },
}

impl EraCalculator {
    pub(crate) fn single(era: Era, min_year: i32, max_year: i32) -> EraCalculator {
        EraCalculator::Single { era, min_year, max_year }
    }

    pub(crate) fn gj(min_year: i32, max_year: i32) -> EraCalculator {
        EraCalculator::GJ {
            max_year_of_bc: 1 - min_year,
            max_year_of_ad: max_year,
        }
    }

    /// The eras of this calendar, in the order they occurred.
    pub(crate) fn eras(&self) -> &'static [Era] {
        match *self {
            EraCalculator::Single { era, .. } => match era.key {
                "common" => &[Era::COMMON],
                "before-common" => &[Era::BEFORE_COMMON],
                "anno-martyrum" => &[Era::ANNO_MARTYRUM],
                "anno-hegirae" => &[Era::ANNO_HEGIRAE],
                "anno-mundi" => &[Era::ANNO_MUNDI],
                "anno-persico" => &[Era::ANNO_PERSICO],
                _ => &[Era::BAHAI],
            },
            EraCalculator::GJ { .. } => GJ_ERAS,
        }
    }

    /// Converts a year within the given era to an absolute year.
    pub(crate) fn absolute_year(
        &self,
        year_of_era: i32,
        era: Era,
    ) -> Result<i32, Error> {
        match *self {
            EraCalculator::Single { era: ours, min_year, max_year } => {
                if era != ours {
                    return Err(self.unsupported_era(era));
                }
                if year_of_era < min_year || year_of_era > max_year {
                    return Err(Error::range(
                        "year of era",
                        year_of_era,
                        min_year,
                        max_year,
                    ));
                }
                Ok(year_of_era)
            }
            EraCalculator::GJ { max_year_of_bc, max_year_of_ad } => {
                if era == Era::COMMON {
                    if year_of_era < 1 || year_of_era > max_year_of_ad {
                        return Err(Error::range(
                            "year of era",
                            year_of_era,
                            1,
                            max_year_of_ad,
                        ));
                    }
                    Ok(year_of_era)
                } else if era == Era::BEFORE_COMMON {
                    if year_of_era < 1 || year_of_era > max_year_of_bc {
                        return Err(Error::range(
                            "year of era",
                            year_of_era,
                            1,
                            max_year_of_bc,
                        ));
                    }
                    Ok(1 - year_of_era)
                } else {
                    Err(self.unsupported_era(era))
                }
            }
        }
    }

    /// Converts an absolute year to its year within its era.
    pub(crate) fn year_of_era(&self, absolute_year: i32) -> i32 {
        match *self {
            EraCalculator::Single { .. } => absolute_year,
            // Year 0 is 1 BCE, year -1 is 2 BCE and so on.
            EraCalculator::GJ { .. } => {
                if absolute_year > 0 {
                    absolute_year
                } else {
                    1 - absolute_year
                }
            }
        }
    }

    /// The era containing the given absolute year.
    pub(crate) fn era(&self, absolute_year: i32) -> Era {
        match *self {
            EraCalculator::Single { era, .. } => era,
            EraCalculator::GJ { .. } => {
                if absolute_year > 0 {
                    Era::COMMON
                } else {
                    Era::BEFORE_COMMON
                }
            }
        }
    }

    /// The smallest year of era written within the given era.
    pub(crate) fn min_year_of_era(&self, era: Era) -> Result<i32, Error> {
        match *self {
            EraCalculator::Single { era: ours, min_year, .. } => {
                if era != ours {
                    return Err(self.unsupported_era(era));
                }
                Ok(min_year)
            }
            EraCalculator::GJ { .. } => {
                if era == Era::COMMON || era == Era::BEFORE_COMMON {
                    Ok(1)
                } else {
                    Err(self.unsupported_era(era))
                }
            }
        }
    }

    /// The largest year of era written within the given era.
    pub(crate) fn max_year_of_era(&self, era: Era) -> Result<i32, Error> {
        match *self {
            EraCalculator::Single { era: ours, max_year, .. } => {
                if era != ours {
                    return Err(self.unsupported_era(era));
                }
                Ok(max_year)
            }
            EraCalculator::GJ { max_year_of_bc, max_year_of_ad } => {
                if era == Era::COMMON {
                    Ok(max_year_of_ad)
                } else if era == Era::BEFORE_COMMON {
                    Ok(max_year_of_bc)
                } else {
                    Err(self.unsupported_era(era))
                }
            }
        }
    }

    fn unsupported_era(&self, given: Era) -> Error {
        let supported = match *self {
            EraCalculator::Single { era, .. } => era.name,
            EraCalculator::GJ { .. } => "BCE, CE",
        };
        Error::unsupported_era(given.name, supported)
    }
}
