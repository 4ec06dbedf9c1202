//! Closed-form day arithmetic for each calendar family.
//!
//! Every formula here works on integers only and uses Euclidean division so
//! proleptic years before the epoch come out right. The month and day-of-year
//! forms return `None` for a month outside `1..=12` or a day outside the
//! year; [`crate::schema::Schema`] turns that into a `CalendarError`.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_GREGORIAN_CENTURY, DAYS_IN_GREGORIAN_CYCLE,
    DAYS_IN_ISLAMIC_CYCLE, DAYS_IN_JULIAN_CYCLE, DAYS_IN_LEAP_YEAR, FEBRUARY, GREGORIAN_CYCLE,
    ISLAMIC_DAYS_IN_COMMON_YEAR, ISLAMIC_DAYS_IN_LEAP_YEAR, ISLAMIC_EPOCH, ISLAMIC_LEAP_CYCLE, ISLAMIC_LEAPS_PER_CYCLE,
    JULIAN_EPOCH, LEAP_YEAR_CYCLE, MONTHS_IN_YEAR,
};
use crate::kernel::{GregorianKernel, JulianKernel, Kernel, TabularIslamicKernel};

/// Closed forms a kernel provides for the arithmetical schema strategy.
pub trait Formulae: Kernel {
    /// Days of the year that precede the first of `month`, `None` outside
    /// `1..=12`.
    fn days_in_year_before_month(&self, leap: bool, month: u8) -> Option<u16>;

    /// Month containing the 1-based `day_of_year`, `None` if the year has no
    /// such day.
    fn month_from_day_of_year(&self, leap: bool, day_of_year: u16) -> Option<u8>;

    /// Day number of the first day of `year`.
    fn days_before_year(&self, year: i32) -> i64;

    /// Year containing `day_number`.
    fn year_from_day_number(&self, day_number: i64) -> i32;
}

// Julian and Gregorian years share one month layout: (367m - 362) / 12 is
// exact for January and February and overshoots by 2 (1 in leap years)
// afterwards.
const fn solar_days_before_month(leap: bool, month: u8) -> Option<u16> {
    if month == 0 || month > MONTHS_IN_YEAR {
        return None;
    }
    let m = month as u16;
    let base = (367 * m - 362) / 12;
    Some(if month <= FEBRUARY {
        base
    } else if leap {
        base - 1
    } else {
        base - 2
    })
}

const fn solar_month_from_day_of_year(leap: bool, day_of_year: u16) -> Option<u8> {
    let days_in_year = if leap { DAYS_IN_LEAP_YEAR } else { DAYS_IN_COMMON_YEAR };
    if day_of_year == 0 || day_of_year > days_in_year {
        return None;
    }
    let prior = day_of_year as u32 - 1;
    // Days before March: 59, or 60 in leap years
    let march = if leap { 60 } else { 59 };
    let correction = if prior < march {
        0
    } else if leap {
        1
    } else {
        2
    };
    Some(((12 * (prior + correction) + 373) / 367) as u8)
}

impl Formulae for GregorianKernel {
    fn days_in_year_before_month(&self, leap: bool, month: u8) -> Option<u16> {
        solar_days_before_month(leap, month)
    }

    fn month_from_day_of_year(&self, leap: bool, day_of_year: u16) -> Option<u8> {
        solar_month_from_day_of_year(leap, day_of_year)
    }

    fn days_before_year(&self, year: i32) -> i64 {
        let y = i64::from(year) - 1;
        i64::from(DAYS_IN_COMMON_YEAR) * y + y.div_euclid(i64::from(LEAP_YEAR_CYCLE))
            - y.div_euclid(i64::from(CENTURY_CYCLE))
            + y.div_euclid(i64::from(GREGORIAN_CYCLE))
    }

    fn year_from_day_number(&self, day_number: i64) -> i32 {
        let cycles = day_number.div_euclid(DAYS_IN_GREGORIAN_CYCLE);
        let mut rem = day_number.rem_euclid(DAYS_IN_GREGORIAN_CYCLE);
        // The last day of a 400-year cycle closes a fourth long century.
        let centuries = (rem / DAYS_IN_GREGORIAN_CENTURY).min(3);
        rem -= centuries * DAYS_IN_GREGORIAN_CENTURY;
        let quadrennia = rem / DAYS_IN_JULIAN_CYCLE;
        rem -= quadrennia * DAYS_IN_JULIAN_CYCLE;
        let years = (rem / i64::from(DAYS_IN_COMMON_YEAR)).min(3);
        let year = i64::from(GREGORIAN_CYCLE) * cycles
            + i64::from(CENTURY_CYCLE) * centuries
            + i64::from(LEAP_YEAR_CYCLE) * quadrennia
            + years
            + 1;
        year as i32
    }
}

impl Formulae for JulianKernel {
    fn days_in_year_before_month(&self, leap: bool, month: u8) -> Option<u16> {
        solar_days_before_month(leap, month)
    }

    fn month_from_day_of_year(&self, leap: bool, day_of_year: u16) -> Option<u8> {
        solar_month_from_day_of_year(leap, day_of_year)
    }

    fn days_before_year(&self, year: i32) -> i64 {
        let y = i64::from(year) - 1;
        JULIAN_EPOCH + i64::from(DAYS_IN_COMMON_YEAR) * y + y.div_euclid(i64::from(LEAP_YEAR_CYCLE))
    }

    fn year_from_day_number(&self, day_number: i64) -> i32 {
        let days = day_number - JULIAN_EPOCH;
        let quadrennia = days.div_euclid(DAYS_IN_JULIAN_CYCLE);
        let rem = days.rem_euclid(DAYS_IN_JULIAN_CYCLE);
        let years = (rem / i64::from(DAYS_IN_COMMON_YEAR)).min(3);
        (i64::from(LEAP_YEAR_CYCLE) * quadrennia + years + 1) as i32
    }
}

impl Formulae for TabularIslamicKernel {
    // Months alternate 30 and 29 days, so the month starts are ceil(29.5 (m - 1)).
    fn days_in_year_before_month(&self, _leap: bool, month: u8) -> Option<u16> {
        if month == 0 || month > MONTHS_IN_YEAR {
            return None;
        }
        Some((59 * (u16::from(month) - 1) + 1) / 2)
    }

    fn month_from_day_of_year(&self, leap: bool, day_of_year: u16) -> Option<u8> {
        let days_in_year = if leap {
            ISLAMIC_DAYS_IN_LEAP_YEAR
        } else {
            ISLAMIC_DAYS_IN_COMMON_YEAR
        };
        if day_of_year == 0 || day_of_year > days_in_year {
            return None;
        }
        let prior = u32::from(day_of_year) - 1;
        Some(((2 * prior / 59) as u8 + 1).min(MONTHS_IN_YEAR))
    }

    fn days_before_year(&self, year: i32) -> i64 {
        let y = i64::from(year);
        ISLAMIC_EPOCH
            + i64::from(ISLAMIC_DAYS_IN_COMMON_YEAR) * (y - 1)
            + (3 + i64::from(ISLAMIC_LEAPS_PER_CYCLE) * y).div_euclid(i64::from(ISLAMIC_LEAP_CYCLE))
    }

    fn year_from_day_number(&self, day_number: i64) -> i32 {
        let days = day_number - ISLAMIC_EPOCH;
        (i64::from(ISLAMIC_LEAP_CYCLE) * days + 10_646).div_euclid(DAYS_IN_ISLAMIC_CYCLE) as i32
    }
}
