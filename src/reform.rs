use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, CalendarError, OrdinalDate,
    consts::{FIRST_GREGORIAN_DAY, GREGORIAN_REFORM_YEAR, LAST_JULIAN_DAY, OCTOBER},
    schema::Schema,
    types::{CalendarId, DayNumber},
};

/// Switch from one calendar to another on a fixed day.
///
/// `last_old` is the final day of the old calendar and `first_new` the first
/// day of the new one. They must be consecutive on the day axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ReformBoundary")]
pub struct Reform {
    last_old:   CalendarDate,
    first_new:  CalendarDate,
    #[serde(skip_serializing)]
    switchover: DayNumber,
}

#[derive(Deserialize)]
struct ReformBoundary {
    last_old:  CalendarDate,
    first_new: CalendarDate,
}

/// Error type for reform construction and resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReformError {
    /// The date belongs to neither calendar of the reform.
    #[error("{calendar} dates cannot be resolved by a {old} to {new} reform")]
    UnknownCalendar {
        calendar: CalendarId,
        old:      CalendarId,
        new:      CalendarId,
    },

    /// The boundary dates are not one day apart.
    #[error("Invalid reform: {last_old} is not the day before {first_new}")]
    NotConsecutive {
        last_old:  CalendarDate,
        first_new: CalendarDate,
    },

    /// Both boundary dates are in the same calendar.
    #[error("Invalid reform: both boundary dates are {0} dates")]
    SameCalendar(CalendarId),

    /// Error from the underlying schema.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl Reform {
    /// Creates a reform, validating that the boundary dates are consecutive.
    ///
    /// # Errors
    /// Returns `ReformError::SameCalendar` if both dates share a calendar and
    /// `ReformError::NotConsecutive` unless `first_new` is the day after
    /// `last_old`.
    pub fn new(last_old: CalendarDate, first_new: CalendarDate) -> Result<Self, ReformError> {
        if last_old.calendar() == first_new.calendar() {
            log::error!("reform boundary dates {last_old} and {first_new} share a calendar");
            return Err(ReformError::SameCalendar(last_old.calendar()));
        }
        let last = last_old.day_number()?;
        let switchover = first_new.day_number()?;
        if last.checked_add(1) != Some(switchover) {
            log::error!(
                "reform boundary dates {last_old} ({last}) and {first_new} ({switchover}) are not consecutive"
            );
            return Err(ReformError::NotConsecutive {
                last_old,
                first_new,
            });
        }
        log::debug!("reform {last_old} -> {first_new}: switchover at day {switchover}");
        Ok(Self {
            last_old,
            first_new,
            switchover,
        })
    }

    /// The 1582 reform: Julian 1582-10-04 was followed by Gregorian 1582-10-15.
    ///
    /// # Errors
    /// Never fails in practice; the boundary is validated like any other.
    pub fn gregorian() -> Result<Self, ReformError> {
        Self::new(
            CalendarDate::new(CalendarId::Julian, GREGORIAN_REFORM_YEAR, OCTOBER, LAST_JULIAN_DAY)?,
            CalendarDate::new(
                CalendarId::Gregorian,
                GREGORIAN_REFORM_YEAR,
                OCTOBER,
                FIRST_GREGORIAN_DAY,
            )?,
        )
    }

    /// Returns the last day of the old calendar
    pub const fn last_old(&self) -> CalendarDate {
        self.last_old
    }

    /// Returns the first day of the new calendar
    pub const fn first_new(&self) -> CalendarDate {
        self.first_new
    }

    /// Returns the first day number governed by the new calendar
    pub const fn switchover(&self) -> DayNumber {
        self.switchover
    }

    /// Returns the calendar in force before the switchover
    pub const fn old_calendar(&self) -> CalendarId {
        self.last_old.calendar()
    }

    /// Returns the calendar in force from the switchover on
    pub const fn new_calendar(&self) -> CalendarId {
        self.first_new.calendar()
    }
}

impl TryFrom<ReformBoundary> for Reform {
    type Error = ReformError;

    fn try_from(boundary: ReformBoundary) -> Result<Self, Self::Error> {
        Self::new(boundary.last_old, boundary.first_new)
    }
}

impl fmt::Display for Reform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.last_old, self.first_new)
    }
}

/// Picks the calendar that governs a day on either side of a [`Reform`].
///
/// Days before the switchover belong to the old calendar, the switchover
/// itself and everything after it to the new one.
#[derive(Debug, Clone, Copy)]
pub struct ReformResolver {
    reform:            Reform,
    old:               &'static dyn Schema,
    new:               &'static dyn Schema,
    last_old_ordinal:  OrdinalDate,
    first_new_ordinal: OrdinalDate,
}

impl ReformResolver {
    /// Builds a resolver, caching the boundary ordinal dates.
    ///
    /// # Errors
    /// Returns `ReformError::Calendar` if a boundary ordinal cannot be computed.
    pub fn new(reform: Reform) -> Result<Self, ReformError> {
        let last_old_ordinal = reform.last_old().to_ordinal()?;
        let first_new_ordinal = reform.first_new().to_ordinal()?;
        log::debug!(
            "reform resolver for {reform}: switchover at day {}",
            reform.switchover()
        );
        Ok(Self {
            reform,
            old: reform.old_calendar().schema(),
            new: reform.new_calendar().schema(),
            last_old_ordinal,
            first_new_ordinal,
        })
    }

    /// Resolver for the 1582 Julian to Gregorian reform.
    ///
    /// # Errors
    /// Never fails in practice; see [`Reform::gregorian`].
    pub fn gregorian() -> Result<Self, ReformError> {
        Self::new(Reform::gregorian()?)
    }

    /// Returns the reform this resolver was built from
    pub const fn reform(&self) -> &Reform {
        &self.reform
    }

    /// Returns the first day number governed by the new calendar
    pub const fn switchover(&self) -> DayNumber {
        self.reform.switchover()
    }

    /// Returns the last day of the old calendar as an ordinal date
    pub const fn last_old_ordinal(&self) -> OrdinalDate {
        self.last_old_ordinal
    }

    /// Returns the first day of the new calendar as an ordinal date
    pub const fn first_new_ordinal(&self) -> OrdinalDate {
        self.first_new_ordinal
    }

    /// Calendar governing `day_number`.
    pub fn calendar_for(&self, day_number: DayNumber) -> CalendarId {
        self.schema_for(day_number).id()
    }

    fn schema_for(&self, day_number: DayNumber) -> &'static dyn Schema {
        if day_number < self.switchover() {
            self.old
        } else {
            self.new
        }
    }

    fn check_calendar(&self, calendar: CalendarId) -> Result<(), ReformError> {
        if calendar == self.reform.old_calendar() || calendar == self.reform.new_calendar() {
            Ok(())
        } else {
            Err(ReformError::UnknownCalendar {
                calendar,
                old: self.reform.old_calendar(),
                new: self.reform.new_calendar(),
            })
        }
    }

    /// Date of `day_number` in the calendar governing it.
    ///
    /// # Errors
    /// Returns `ReformError::Calendar` if the day falls outside the years the
    /// governing calendar supports.
    pub fn resolve_day_number(&self, day_number: DayNumber) -> Result<CalendarDate, ReformError> {
        Ok(self.schema_for(day_number).date_from_day_number(day_number)?)
    }

    /// Re-expresses `date` in the calendar governing its day number.
    ///
    /// A date already in the right calendar is returned unchanged.
    ///
    /// # Errors
    /// Returns `ReformError::UnknownCalendar` if `date` is in neither
    /// calendar of the reform.
    pub fn resolve_date(&self, date: &CalendarDate) -> Result<CalendarDate, ReformError> {
        self.check_calendar(date.calendar())?;
        let day_number = date.day_number()?;
        let target = self.schema_for(day_number);
        if target.id() == date.calendar() {
            return Ok(*date);
        }
        log::trace!("re-expressing {date} in the {} calendar", target.id());
        Ok(target.date_from_day_number(day_number)?)
    }

    /// Re-expresses `ordinal` in the calendar governing it.
    ///
    /// Compares against the cached boundary ordinals, so dates that are
    /// already on the right side skip the day number computation.
    ///
    /// # Errors
    /// Returns `ReformError::UnknownCalendar` if `ordinal` is in neither
    /// calendar of the reform.
    pub fn resolve_ordinal(&self, ordinal: &OrdinalDate) -> Result<OrdinalDate, ReformError> {
        self.check_calendar(ordinal.calendar())?;
        let (in_place, target) = if ordinal.calendar() == self.reform.new_calendar() {
            (
                ordinal.coordinates() >= self.first_new_ordinal.coordinates(),
                self.old,
            )
        } else {
            (
                ordinal.coordinates() <= self.last_old_ordinal.coordinates(),
                self.new,
            )
        };
        if in_place {
            return Ok(*ordinal);
        }
        log::trace!("re-expressing {ordinal} in the {} calendar", target.id());
        Ok(target.ordinal_from_day_number(ordinal.day_number()?)?)
    }
}
