use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::{
    kernel::{GregorianKernel, JulianKernel, Kernel, TabularIslamicKernel},
    prelude::*,
    schema::{GREGORIAN_SCHEMA, JULIAN_SCHEMA, Schema, TABULAR_ISLAMIC_SCHEMA},
};

/// A position on the linear day axis shared by every calendar.
///
/// Day 0 is Monday, January 1st of year 1 in the proleptic Gregorian
/// calendar. The difference of two day numbers is a count of days.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct DayNumber(i32);

impl DayNumber {
    /// Monday, January 1st of year 1 (proleptic Gregorian)
    pub const ZERO: Self = Self(0);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Shifts by `days`, returning `None` on overflow.
    pub const fn checked_add(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Shifts back by `days`, returning `None` on overflow.
    pub const fn checked_sub(self, days: i32) -> Option<Self> {
        match self.0.checked_sub(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Add<i32> for DayNumber {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the `i32` day axis, in debug and release
    /// builds alike. Use [`DayNumber::checked_add`] to handle that case.
    fn add(self, days: i32) -> Self {
        match self.checked_add(days) {
            Some(shifted) => shifted,
            None => panic!("day number {self} + {days} overflows the day axis"),
        }
    }
}

impl Sub<i32> for DayNumber {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the `i32` day axis, in debug and release
    /// builds alike. Use [`DayNumber::checked_sub`] to handle that case.
    fn sub(self, days: i32) -> Self {
        match self.checked_sub(days) {
            Some(shifted) => shifted,
            None => panic!("day number {self} - {days} overflows the day axis"),
        }
    }
}

/// Number of days from `other` to `self`, widened to `i64`.
impl Sub for DayNumber {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        i64::from(self.0) - i64::from(other.0)
    }
}

/// Identity of a calendar family.
///
/// Every date carries one so the schema that validated it can be found again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CalendarId {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Tabular Islamic")]
    TabularIslamic,
}

impl CalendarId {
    /// Rule set of this family
    pub fn kernel(self) -> &'static dyn Kernel {
        match self {
            Self::Gregorian => &GregorianKernel,
            Self::Julian => &JulianKernel,
            Self::TabularIslamic => &TabularIslamicKernel,
        }
    }

    /// Process-wide schema of this family, built on first use
    pub fn schema(self) -> &'static dyn Schema {
        match self {
            Self::Gregorian => &*GREGORIAN_SCHEMA,
            Self::Julian => &*JULIAN_SCHEMA,
            Self::TabularIslamic => &*TABULAR_ISLAMIC_SCHEMA,
        }
    }
}
