//! Rule sets of the calendar families: leap years and month lengths.

use std::fmt;

use crate::{
    CalendarError,
    consts::{
        CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_MONTH_LEAP,
        DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, ISLAMIC_DAYS_IN_COMMON_YEAR,
        ISLAMIC_DAYS_IN_LEAP_YEAR, ISLAMIC_DAYS_IN_MONTH, ISLAMIC_DAYS_IN_MONTH_LEAP,
        ISLAMIC_LEAP_CYCLE, ISLAMIC_LEAP_OFFSET, ISLAMIC_LEAPS_PER_CYCLE, LEAP_YEAR_CYCLE,
        MAX_ISLAMIC_YEAR, MAX_PROLEPTIC_YEAR, MIN_ISLAMIC_YEAR, MIN_PROLEPTIC_YEAR, MONTHS_IN_YEAR,
    },
    types::CalendarId,
};

/// Closed interval of years a kernel supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Creates the interval `min..=max`
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns the first supported year
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Returns the last supported year
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns true if `year` is inside the interval
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Validates `year` for `calendar`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is outside the interval.
    pub fn check(&self, calendar: CalendarId, year: i32) -> Result<i32, CalendarError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(CalendarError::YearOutOfRange {
                calendar,
                year,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Capability set every calendar family implements.
///
/// Kernels are stateless and answer questions about a single year at a time.
/// They never validate the year against [`Kernel::supported_years`]; that is
/// the schema's job.
pub trait Kernel: fmt::Debug + Send + Sync {
    /// Returns the family this kernel implements
    fn id(&self) -> CalendarId;

    /// Returns the years this kernel supports
    fn supported_years(&self) -> YearRange;

    /// `Some(months)` when every year has the same number of months.
    fn is_regular(&self) -> Option<u8> {
        Some(MONTHS_IN_YEAR)
    }

    /// Returns the number of months in `year`
    fn count_months_in_year(&self, _year: i32) -> u8 {
        MONTHS_IN_YEAR
    }

    /// Returns true if `year` has an intercalary day
    fn is_leap_year(&self, year: i32) -> bool;

    /// Returns the number of days in `year`
    fn count_days_in_year(&self, year: i32) -> u16;

    /// Month lengths of a leap or common year. Index 0 is unused so that the
    /// index equals the month number.
    fn month_lengths(&self, leap: bool) -> &'static [u8; 13];

    /// Days in `month` of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` if `month` is 0 or past the
    /// last month of the year. Never clamps.
    fn count_days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        let max = self.count_months_in_year(year);
        if month == 0 || month > max {
            return Err(CalendarError::MonthOutOfRange {
                calendar: self.id(),
                year,
                month,
                max,
            });
        }
        self.month_lengths(self.is_leap_year(year))
            .get(usize::from(month))
            .copied()
            .ok_or(CalendarError::MonthOutOfRange {
                calendar: self.id(),
                year,
                month,
                max,
            })
    }

    /// Returns true if `month` is inserted in some years only
    fn is_intercalary_month(&self, _year: i32, _month: u8) -> bool {
        false
    }

    /// Returns true if the day exists in leap years only
    fn is_intercalary_day(&self, year: i32, month: u8, day: u8) -> bool;

    /// Days outside of any month (epagomenal days). None of the shipped
    /// families have them.
    fn is_supplementary_day(&self, _year: i32, _month: u8, _day: u8) -> bool {
        false
    }
}

// Helper functions

/// Divisible by 4, except centuries not divisible by 400
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Divisible by 4
pub const fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// `(14 + 11 * year) mod 30 < 11`
pub const fn is_tabular_islamic_leap_year(year: i32) -> bool {
    (ISLAMIC_LEAP_OFFSET + ISLAMIC_LEAPS_PER_CYCLE * year).rem_euclid(ISLAMIC_LEAP_CYCLE)
        < ISLAMIC_LEAPS_PER_CYCLE
}

const fn solar_month_lengths(leap: bool) -> &'static [u8; 13] {
    if leap {
        &DAYS_IN_MONTH_LEAP
    } else {
        &DAYS_IN_MONTH
    }
}

const fn solar_days_in_year(leap: bool) -> u16 {
    if leap {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GregorianKernel;

impl Kernel for GregorianKernel {
    fn id(&self) -> CalendarId {
        CalendarId::Gregorian
    }

    fn supported_years(&self) -> YearRange {
        YearRange::new(MIN_PROLEPTIC_YEAR, MAX_PROLEPTIC_YEAR)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_gregorian_leap_year(year)
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        solar_days_in_year(is_gregorian_leap_year(year))
    }

    fn month_lengths(&self, leap: bool) -> &'static [u8; 13] {
        solar_month_lengths(leap)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == FEBRUARY && day == FEBRUARY_DAYS_LEAP
    }
}

/// Proleptic Julian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JulianKernel;

impl Kernel for JulianKernel {
    fn id(&self) -> CalendarId {
        CalendarId::Julian
    }

    fn supported_years(&self) -> YearRange {
        YearRange::new(MIN_PROLEPTIC_YEAR, MAX_PROLEPTIC_YEAR)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_julian_leap_year(year)
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        solar_days_in_year(is_julian_leap_year(year))
    }

    fn month_lengths(&self, leap: bool) -> &'static [u8; 13] {
        solar_month_lengths(leap)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == FEBRUARY && day == FEBRUARY_DAYS_LEAP
    }
}

/// Arithmetical Islamic calendar with the type II leap year rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TabularIslamicKernel;

impl Kernel for TabularIslamicKernel {
    fn id(&self) -> CalendarId {
        CalendarId::TabularIslamic
    }

    fn supported_years(&self) -> YearRange {
        YearRange::new(MIN_ISLAMIC_YEAR, MAX_ISLAMIC_YEAR)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_tabular_islamic_leap_year(year)
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        if is_tabular_islamic_leap_year(year) {
            ISLAMIC_DAYS_IN_LEAP_YEAR
        } else {
            ISLAMIC_DAYS_IN_COMMON_YEAR
        }
    }

    fn month_lengths(&self, leap: bool) -> &'static [u8; 13] {
        if leap {
            &ISLAMIC_DAYS_IN_MONTH_LEAP
        } else {
            &ISLAMIC_DAYS_IN_MONTH
        }
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == DECEMBER && day == ISLAMIC_DAYS_IN_MONTH_LEAP[DECEMBER as usize]
    }
}
