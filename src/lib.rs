//! # calendar_schema
//!
//! Day-number arithmetic for pluggable calendar families, and resolution of
//! dates around a calendar reform such as the 1582 Julian → Gregorian
//! switchover.
//!
//! ```mermaid
//! graph LR
//!     K["Kernel (leap years, month lengths)"] --> S["Schema (day offsets)"]
//!     S --> R["ReformResolver (old | new)"]
//! ```
//!
//! ```
//! use calendar_schema::{CalendarDate, CalendarId, ReformResolver};
//!
//! let resolver = ReformResolver::gregorian().unwrap();
//! let switchover = resolver.switchover();
//!
//! let before = resolver.resolve_day_number(switchover - 1).unwrap();
//! assert_eq!(before, CalendarDate::new(CalendarId::Julian, 1582, 10, 4).unwrap());
//!
//! let after = resolver.resolve_day_number(switchover).unwrap();
//! assert_eq!(after, CalendarDate::new(CalendarId::Gregorian, 1582, 10, 15).unwrap());
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `kernel` | Leap year rules and month lengths per family |
//! | `formulae` | Closed-form day arithmetic per family |
//! | `schema` | Conversions between dates, ordinals and day numbers |
//! | `reform` | Reform boundary and resolver |
//! | `types` | `DayNumber` and `CalendarId` |

mod consts;
mod formulae;
mod kernel;
mod prelude;
mod reform;
mod schema;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use formulae::Formulae;
pub use kernel::{
    GregorianKernel, JulianKernel, Kernel, TabularIslamicKernel, YearRange,
    is_gregorian_leap_year, is_julian_leap_year, is_tabular_islamic_leap_year,
};
pub use reform::{Reform, ReformError, ReformResolver};
pub use schema::{
    CalendarSchema, CumulativeTable, GREGORIAN_SCHEMA, JULIAN_SCHEMA, Schema, Strategy,
    TABULAR_ISLAMIC_SCHEMA,
};
pub use types::{CalendarId, DayNumber};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Range violations: a year, month, day, day of year or day number outside
/// the domain of a calendar family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("{calendar} year {year} is out of range ({min}..={max})")]
    YearOutOfRange {
        calendar: CalendarId,
        year:     i32,
        min:      i32,
        max:      i32,
    },

    #[error("Invalid {calendar} month {month} in year {year} (must be 1-{max})")]
    MonthOutOfRange {
        calendar: CalendarId,
        year:     i32,
        month:    u8,
        max:      u8,
    },

    #[error("Invalid {calendar} day {day} for month {year}-{month:02} (must be 1-{max})")]
    DayOutOfRange {
        calendar: CalendarId,
        year:     i32,
        month:    u8,
        day:      u8,
        max:      u8,
    },

    #[error("Invalid {calendar} day of year {day_of_year} in year {year} (must be 1-{max})")]
    DayOfYearOutOfRange {
        calendar:    CalendarId,
        year:        i32,
        day_of_year: u16,
        max:         u16,
    },

    #[error("Day number {day_number} is outside the supported {calendar} years")]
    DayNumberOutOfRange {
        calendar:   CalendarId,
        day_number: DayNumber,
    },
}

/// A validated `(year, month, day)` in one calendar family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02} ({calendar})")]
#[serde(try_from = "CalendarDateFields")]
pub struct CalendarDate {
    calendar: CalendarId,
    year:     i32,
    month:    u8,
    day:      u8,
}

/// A validated `(year, day_of_year)` in one calendar family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{day_of_year:03} ({calendar})")]
#[serde(try_from = "OrdinalDateFields")]
pub struct OrdinalDate {
    calendar:    CalendarId,
    year:        i32,
    day_of_year: u16,
}

#[derive(Deserialize)]
struct CalendarDateFields {
    calendar: CalendarId,
    year:     i32,
    month:    u8,
    day:      u8,
}

#[derive(Deserialize)]
struct OrdinalDateFields {
    calendar:    CalendarId,
    year:        i32,
    day_of_year: u16,
}

impl CalendarDate {
    /// Creates a date, validating it against the schema of `calendar`.
    ///
    /// # Errors
    /// Returns `CalendarError` if the year, month or day is out of range.
    pub fn new(calendar: CalendarId, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        calendar.schema().check_date(year, month, day)?;
        Ok(Self::from_parts(calendar, year, month, day))
    }

    /// Wraps already validated parts.
    pub(crate) const fn from_parts(calendar: CalendarId, year: i32, month: u8, day: u8) -> Self {
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    /// Returns the calendar family
    pub const fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the day number of this date.
    ///
    /// # Errors
    /// Propagates the schema's `CalendarError`; never fails for a date built
    /// through [`CalendarDate::new`].
    pub fn day_number(&self) -> Result<DayNumber, CalendarError> {
        self.calendar
            .schema()
            .day_number_from_date(self.year, self.month, self.day)
    }

    /// Returns the same day as `(year, day_of_year)`.
    ///
    /// # Errors
    /// Propagates the schema's `CalendarError`.
    pub fn to_ordinal(&self) -> Result<OrdinalDate, CalendarError> {
        let day_of_year = self
            .calendar
            .schema()
            .day_of_year_from_date(self.year, self.month, self.day)?;
        Ok(OrdinalDate::from_parts(self.calendar, self.year, day_of_year))
    }

    /// The same day expressed in `calendar`.
    ///
    /// # Errors
    /// Returns `CalendarError::DayNumberOutOfRange` if the day falls outside
    /// the years `calendar` supports.
    pub fn in_calendar(&self, calendar: CalendarId) -> Result<Self, CalendarError> {
        if calendar == self.calendar {
            return Ok(*self);
        }
        calendar.schema().date_from_day_number(self.day_number()?)
    }

    /// Returns true if this day exists in leap years only
    pub fn is_intercalary(&self) -> bool {
        self.calendar
            .kernel()
            .is_intercalary_day(self.year, self.month, self.day)
    }
}

impl OrdinalDate {
    /// Creates an ordinal date, validating it against the schema of `calendar`.
    ///
    /// # Errors
    /// Returns `CalendarError` if the year or day of year is out of range.
    pub fn new(calendar: CalendarId, year: i32, day_of_year: u16) -> Result<Self, CalendarError> {
        calendar.schema().check_ordinal(year, day_of_year)?;
        Ok(Self::from_parts(calendar, year, day_of_year))
    }

    pub(crate) const fn from_parts(calendar: CalendarId, year: i32, day_of_year: u16) -> Self {
        Self {
            calendar,
            year,
            day_of_year,
        }
    }

    /// Returns the calendar family
    pub const fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based day of the year
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// `(year, day_of_year)`, ordered chronologically within one calendar.
    pub const fn coordinates(&self) -> (i32, u16) {
        (self.year, self.day_of_year)
    }

    /// # Errors
    /// Propagates the schema's `CalendarError`.
    pub fn day_number(&self) -> Result<DayNumber, CalendarError> {
        self.calendar
            .schema()
            .day_number_from_ordinal(self.year, self.day_of_year)
    }

    /// # Errors
    /// Propagates the schema's `CalendarError`.
    pub fn to_calendar_date(&self) -> Result<CalendarDate, CalendarError> {
        let (month, day) = self
            .calendar
            .schema()
            .date_from_day_of_year(self.year, self.day_of_year)?;
        Ok(CalendarDate::from_parts(self.calendar, self.year, month, day))
    }

    /// The same day expressed in `calendar`.
    ///
    /// # Errors
    /// Returns `CalendarError::DayNumberOutOfRange` if the day falls outside
    /// the years `calendar` supports.
    pub fn in_calendar(&self, calendar: CalendarId) -> Result<Self, CalendarError> {
        if calendar == self.calendar {
            return Ok(*self);
        }
        calendar.schema().ordinal_from_day_number(self.day_number()?)
    }
}

impl TryFrom<CalendarDateFields> for CalendarDate {
    type Error = CalendarError;

    fn try_from(fields: CalendarDateFields) -> Result<Self, Self::Error> {
        Self::new(fields.calendar, fields.year, fields.month, fields.day)
    }
}

impl TryFrom<OrdinalDateFields> for OrdinalDate {
    type Error = CalendarError;

    fn try_from(fields: OrdinalDateFields) -> Result<Self, Self::Error> {
        Self::new(fields.calendar, fields.year, fields.day_of_year)
    }
}

impl TryFrom<(CalendarId, i32, u8, u8)> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: (CalendarId, i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl TryFrom<(CalendarId, i32, u16)> for OrdinalDate {
    type Error = CalendarError;

    fn try_from(value: (CalendarId, i32, u16)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, islamic, julian};

    #[test]
    fn test_new_valid_dates() {
        assert!(CalendarDate::new(CalendarId::Gregorian, 2024, 2, 29).is_ok());
        assert!(CalendarDate::new(CalendarId::Julian, 1900, 2, 29).is_ok());
        assert!(CalendarDate::new(CalendarId::TabularIslamic, 2, 12, 30).is_ok());
        assert!(CalendarDate::new(CalendarId::Gregorian, -44, 3, 15).is_ok());
    }

    #[test]
    fn test_new_invalid_dates() {
        let result = CalendarDate::new(CalendarId::Gregorian, 1900, 2, 29);
        assert!(matches!(
            result,
            Err(CalendarError::DayOutOfRange {
                calendar: CalendarId::Gregorian,
                year: 1900,
                month: 2,
                day: 29,
                max: 28,
            })
        ));

        let result = CalendarDate::new(CalendarId::Gregorian, 2023, 13, 1);
        assert!(matches!(result, Err(CalendarError::MonthOutOfRange { month: 13, .. })));

        let result = CalendarDate::new(CalendarId::TabularIslamic, 1, 12, 30);
        assert!(matches!(result, Err(CalendarError::DayOutOfRange { max: 29, .. })));

        let result = CalendarDate::new(CalendarId::TabularIslamic, 0, 1, 1);
        assert!(matches!(result, Err(CalendarError::YearOutOfRange { year: 0, .. })));
    }

    #[test]
    fn test_ordinal_new() {
        assert!(OrdinalDate::new(CalendarId::Gregorian, 2024, 366).is_ok());
        assert!(matches!(
            OrdinalDate::new(CalendarId::Gregorian, 2023, 366),
            Err(CalendarError::DayOfYearOutOfRange { max: 365, .. })
        ));
        assert!(OrdinalDate::new(CalendarId::Julian, 2023, 0).is_err());
        assert!(OrdinalDate::new(CalendarId::TabularIslamic, 2, 355).is_ok());
    }

    #[test]
    fn test_accessors() {
        let date = gregorian(1991, 8, 15);
        assert_eq!(date.calendar(), CalendarId::Gregorian);
        assert_eq!(date.year(), 1991);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_calendar_date_to_ordinal_and_back() {
        let date = gregorian(1582, 10, 15);
        let ordinal = date.to_ordinal().unwrap();
        assert_eq!(ordinal.coordinates(), (1582, 288));
        assert_eq!(ordinal.calendar(), CalendarId::Gregorian);
        assert_eq!(ordinal.to_calendar_date().unwrap(), date);
        assert_eq!(ordinal.day_number().unwrap(), date.day_number().unwrap());
    }

    #[test]
    fn test_in_calendar_preserves_day_number() {
        let last_julian = julian(1582, 10, 4);
        let as_gregorian = last_julian.in_calendar(CalendarId::Gregorian).unwrap();
        assert_eq!(as_gregorian, gregorian(1582, 10, 14));
        assert_eq!(as_gregorian.day_number(), last_julian.day_number());
        assert_eq!(as_gregorian.in_calendar(CalendarId::Julian).unwrap(), last_julian);

        let epoch = islamic(1, 1, 1);
        assert_eq!(epoch.in_calendar(CalendarId::Julian).unwrap(), julian(622, 7, 16));
        assert_eq!(epoch.in_calendar(CalendarId::TabularIslamic).unwrap(), epoch);
    }

    #[test]
    fn test_ordinal_in_calendar() {
        let ordinal = OrdinalDate::new(CalendarId::Julian, 1582, 277).unwrap();
        let converted = ordinal.in_calendar(CalendarId::Gregorian).unwrap();
        assert_eq!(converted.coordinates(), (1582, 287));
        assert_eq!(converted.day_number(), ordinal.day_number());
    }

    #[test]
    fn test_in_calendar_out_of_range() {
        let date = gregorian(1, 1, 1);
        assert!(matches!(
            date.in_calendar(CalendarId::TabularIslamic),
            Err(CalendarError::DayNumberOutOfRange { .. })
        ));
    }

    #[test]
    fn test_is_intercalary() {
        assert!(gregorian(2024, 2, 29).is_intercalary());
        assert!(!gregorian(2024, 2, 28).is_intercalary());
        assert!(julian(1700, 2, 29).is_intercalary());
        assert!(islamic(2, 12, 30).is_intercalary());
    }

    #[test]
    fn test_display() {
        assert_eq!(gregorian(1991, 8, 15).to_string(), "1991-08-15 (Gregorian)");
        assert_eq!(julian(1582, 10, 4).to_string(), "1582-10-04 (Julian)");

        let ordinal = OrdinalDate::new(CalendarId::TabularIslamic, 1445, 7).unwrap();
        assert_eq!(ordinal.to_string(), "1445-007 (Tabular Islamic)");
    }

    #[test]
    fn test_try_from_tuple() {
        let date: CalendarDate = (CalendarId::Gregorian, 1991, 8, 15).try_into().unwrap();
        assert_eq!(date, gregorian(1991, 8, 15));

        let result: Result<CalendarDate, _> = (CalendarId::Gregorian, 1991, 2, 30).try_into();
        assert!(result.is_err());

        let ordinal: OrdinalDate = (CalendarId::Julian, 1582, 277).try_into().unwrap();
        assert_eq!(ordinal.coordinates(), (1582, 277));
    }

    #[test]
    fn test_serde() {
        let date = julian(1582, 10, 4);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"calendar":"julian","year":1582,"month":10,"day":4}"#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let ordinal = OrdinalDate::new(CalendarId::Gregorian, 2024, 366).unwrap();
        let json = serde_json::to_string(&ordinal).unwrap();
        assert_eq!(json, r#"{"calendar":"gregorian","year":2024,"day_of_year":366}"#);
        let parsed: OrdinalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(ordinal, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Feb 29 in a Gregorian common year should be rejected
        let json = r#"{"calendar":"gregorian","year":1900,"month":2,"day":29}"#;
        let result: Result<CalendarDate, _> = serde_json::from_str(json);
        assert!(result.is_err());

        // ...but is fine in the Julian calendar
        let json = r#"{"calendar":"julian","year":1900,"month":2,"day":29}"#;
        let result: Result<CalendarDate, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        // Month 13 should be rejected
        let json = r#"{"calendar":"julian","year":1900,"month":13,"day":1}"#;
        let result: Result<CalendarDate, _> = serde_json::from_str(json);
        assert!(result.is_err());

        // Unknown calendar should be rejected
        let json = r#"{"calendar":"coptic","year":1900,"month":1,"day":1}"#;
        let result: Result<CalendarDate, _> = serde_json::from_str(json);
        assert!(result.is_err());

        // Day of year past the end should be rejected
        let json = r#"{"calendar":"gregorian","year":2023,"day_of_year":366}"#;
        let result: Result<OrdinalDate, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalendarDate::new(CalendarId::Gregorian, 2023, 2, 29).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Gregorian day 29 for month 2023-02 (must be 1-28)"
        );

        let err = GregorianKernel.count_days_in_month(2023, 13).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Gregorian month 13 in year 2023 (must be 1-12)"
        );

        let err = CalendarDate::new(CalendarId::TabularIslamic, 10_000, 1, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tabular Islamic year 10000 is out of range (1..=9999)"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
