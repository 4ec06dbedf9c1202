//! Day-offset arithmetic on top of a [`Kernel`].
//!
//! A schema converts between calendar dates `(year, month, day)`, ordinal
//! dates `(year, day_of_year)` and [`DayNumber`]s. The month offsets come
//! from one of two interchangeable strategies:
//!
//! | Strategy | `days before month` | inverse |
//! |----------|---------------------|---------|
//! | [`Strategy::Arithmetic`] | closed form from [`Formulae`] | closed form |
//! | [`Strategy::Lookup`] | [`CumulativeTable`] | table scan |
//!
//! Both must agree on every `(year, month)`.

use std::{fmt, sync::LazyLock};

use crate::{
    CalendarDate, CalendarError, OrdinalDate,
    consts::{JANUARY, MIN_DAY, MONTHS_IN_YEAR},
    formulae::Formulae,
    kernel::{GregorianKernel, JulianKernel, Kernel, TabularIslamicKernel},
    types::{CalendarId, DayNumber},
};

/// Shared proleptic Gregorian schema
pub static GREGORIAN_SCHEMA: LazyLock<CalendarSchema<GregorianKernel>> =
    LazyLock::new(|| CalendarSchema::new(GregorianKernel));

/// Shared proleptic Julian schema
pub static JULIAN_SCHEMA: LazyLock<CalendarSchema<JulianKernel>> =
    LazyLock::new(|| CalendarSchema::new(JulianKernel));

/// Shared tabular Islamic schema
pub static TABULAR_ISLAMIC_SCHEMA: LazyLock<CalendarSchema<TabularIslamicKernel>> =
    LazyLock::new(|| CalendarSchema::new(TabularIslamicKernel));

/// How a schema computes the number of days preceding a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Closed-form formulae evaluated on every call.
    Arithmetic,
    /// Cumulative tables precomputed once per leap/common class.
    Lookup,
}

impl Default for Strategy {
    /// `Lookup` with the `lookup-tables` feature, `Arithmetic` without.
    fn default() -> Self {
        if cfg!(feature = "lookup-tables") {
            Self::Lookup
        } else {
            Self::Arithmetic
        }
    }
}

/// Days preceding each month, for a common and a leap year.
///
/// `common[m]` is the number of days in a common year before month `m`.
/// Slot 0 is a sentinel so that the index equals the month number; it is
/// always 0 and never read by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeTable {
    common:       [u16; 13],
    leap:         [u16; 13],
    /// Year lengths of the common and leap class
    days_in_year: [u16; 2],
}

impl CumulativeTable {
    /// Accumulates the kernel's month lengths.
    pub fn from_kernel(kernel: &dyn Kernel) -> Self {
        let total = |leap: bool| -> u16 { kernel.month_lengths(leap).iter().map(|&d| u16::from(d)).sum() };
        Self {
            common:       Self::accumulate(kernel.month_lengths(false)),
            leap:         Self::accumulate(kernel.month_lengths(true)),
            days_in_year: [total(false), total(true)],
        }
    }

    fn accumulate(lengths: &[u8; 13]) -> [u16; 13] {
        let mut cumulative = [0u16; 13];
        let mut running = 0u16;
        for (slot, &days) in cumulative.iter_mut().skip(1).zip(lengths) {
            running += u16::from(days);
            *slot = running;
        }
        cumulative
    }

    /// Table of the leap or common class
    pub const fn for_class(&self, leap: bool) -> &[u16; 13] {
        if leap { &self.leap } else { &self.common }
    }

    /// Days before `month`, `None` outside 1..=12.
    pub fn days_before_month(&self, leap: bool, month: u8) -> Option<u16> {
        if month == 0 {
            return None;
        }
        self.for_class(leap).get(usize::from(month)).copied()
    }

    /// Last month starting before the 1-based `day_of_year`, `None` if the
    /// year has no such day.
    pub fn month_from_day_of_year(&self, leap: bool, day_of_year: u16) -> Option<u8> {
        if day_of_year == 0 || day_of_year > self.days_in_year[usize::from(leap)] {
            return None;
        }
        let table = self.for_class(leap);
        (JANUARY..=MONTHS_IN_YEAR)
            .rev()
            .find(|&m| table[usize::from(m)] < day_of_year)
    }
}

/// Conversions between the coordinate systems of one calendar family.
///
/// Every operation validates its input and returns a
/// [`CalendarError`] range violation rather than clamping.
pub trait Schema: fmt::Debug + Send + Sync {
    fn kernel(&self) -> &dyn Kernel;

    fn strategy(&self) -> Strategy;

    /// Days in `year` before the first of `month`.
    ///
    /// # Errors
    /// Returns `CalendarError` if `year` or `month` is out of range.
    fn count_days_in_year_before_month(&self, year: i32, month: u8) -> Result<u16, CalendarError>;

    /// Month containing `day_of_year`.
    ///
    /// # Errors
    /// Returns `CalendarError` if `year` or `day_of_year` is out of range.
    fn month_from_day_of_year(&self, year: i32, day_of_year: u16) -> Result<u8, CalendarError>;

    /// Day number of January 1st (or the family's first day) of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside the supported years.
    fn first_day_of_year(&self, year: i32) -> Result<DayNumber, CalendarError>;

    /// Year containing `day_number`.
    ///
    /// # Errors
    /// Returns `CalendarError::DayNumberOutOfRange` if the year would fall
    /// outside the supported years.
    fn year_from_day_number(&self, day_number: DayNumber) -> Result<i32, CalendarError>;

    fn id(&self) -> CalendarId {
        self.kernel().id()
    }

    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside the supported years.
    fn check_year(&self, year: i32) -> Result<(), CalendarError> {
        self.kernel().supported_years().check(self.id(), year).map(|_| ())
    }

    /// # Errors
    /// Returns the first range violation among year, month and day.
    fn check_date(&self, year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
        self.check_year(year)?;
        let max = self.kernel().count_days_in_month(year, month)?;
        if !(MIN_DAY..=max).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                calendar: self.id(),
                year,
                month,
                day,
                max,
            });
        }
        Ok(())
    }

    /// # Errors
    /// Returns the first range violation among year and day of year.
    fn check_ordinal(&self, year: i32, day_of_year: u16) -> Result<(), CalendarError> {
        self.check_year(year)?;
        let max = self.kernel().count_days_in_year(year);
        if day_of_year == 0 || day_of_year > max {
            return Err(CalendarError::DayOfYearOutOfRange {
                calendar: self.id(),
                year,
                day_of_year,
                max,
            });
        }
        Ok(())
    }

    /// 1-based day of the year of a calendar date.
    ///
    /// # Errors
    /// Returns `CalendarError` if the date is invalid.
    fn day_of_year_from_date(&self, year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
        self.check_date(year, month, day)?;
        Ok(self.count_days_in_year_before_month(year, month)? + u16::from(day))
    }

    /// `(month, day)` of the 1-based `day_of_year`.
    ///
    /// # Errors
    /// Returns `CalendarError` if the ordinal date is invalid.
    fn date_from_day_of_year(&self, year: i32, day_of_year: u16) -> Result<(u8, u8), CalendarError> {
        let month = self.month_from_day_of_year(year, day_of_year)?;
        let before = self.count_days_in_year_before_month(year, month)?;
        let day = u8::try_from(day_of_year - before).map_err(|_| CalendarError::DayOfYearOutOfRange {
            calendar: self.id(),
            year,
            day_of_year,
            max: self.kernel().count_days_in_year(year),
        })?;
        Ok((month, day))
    }

    /// # Errors
    /// Returns `CalendarError` if the date is invalid.
    fn day_number_from_date(&self, year: i32, month: u8, day: u8) -> Result<DayNumber, CalendarError> {
        let day_of_year = self.day_of_year_from_date(year, month, day)?;
        Ok(self.first_day_of_year(year)? + (i32::from(day_of_year) - 1))
    }

    /// # Errors
    /// Returns `CalendarError` if the ordinal date is invalid.
    fn day_number_from_ordinal(&self, year: i32, day_of_year: u16) -> Result<DayNumber, CalendarError> {
        self.check_ordinal(year, day_of_year)?;
        Ok(self.first_day_of_year(year)? + (i32::from(day_of_year) - 1))
    }

    /// # Errors
    /// Returns `CalendarError::DayNumberOutOfRange` if the date would fall
    /// outside the supported years.
    fn ordinal_from_day_number(&self, day_number: DayNumber) -> Result<OrdinalDate, CalendarError> {
        let year = self.year_from_day_number(day_number)?;
        let offset = day_number - self.first_day_of_year(year)?;
        let day_of_year = u16::try_from(offset + 1).map_err(|_| CalendarError::DayNumberOutOfRange {
            calendar: self.id(),
            day_number,
        })?;
        Ok(OrdinalDate::from_parts(self.id(), year, day_of_year))
    }

    /// # Errors
    /// Returns `CalendarError::DayNumberOutOfRange` if the date would fall
    /// outside the supported years.
    fn date_from_day_number(&self, day_number: DayNumber) -> Result<CalendarDate, CalendarError> {
        let ordinal = self.ordinal_from_day_number(day_number)?;
        let (month, day) = self.date_from_day_of_year(ordinal.year(), ordinal.day_of_year())?;
        Ok(CalendarDate::from_parts(self.id(), ordinal.year(), month, day))
    }
}

/// [`Schema`] of a calendar family whose kernel provides [`Formulae`].
pub struct CalendarSchema<K> {
    kernel: K,
    table:  Option<CumulativeTable>,
}

impl<K: Formulae> CalendarSchema<K> {
    /// Schema using the default strategy.
    pub fn new(kernel: K) -> Self {
        Self::with_strategy(kernel, Strategy::default())
    }

    /// Schema using `strategy`; `Lookup` precomputes the cumulative table here.
    pub fn with_strategy(kernel: K, strategy: Strategy) -> Self {
        let table = match strategy {
            Strategy::Arithmetic => None,
            Strategy::Lookup => {
                log::debug!("precomputing cumulative month table for {}", kernel.id());
                Some(CumulativeTable::from_kernel(&kernel))
            }
        };
        Self { kernel, table }
    }

    /// Precomputed table, present only with [`Strategy::Lookup`].
    pub const fn table(&self) -> Option<&CumulativeTable> {
        self.table.as_ref()
    }

    fn is_leap(&self, year: i32) -> bool {
        self.kernel.is_leap_year(year)
    }
}

impl<K: Formulae> fmt::Debug for CalendarSchema<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarSchema")
            .field("calendar", &self.kernel.id())
            .field("strategy", &self.strategy())
            .finish()
    }
}

impl<K: Formulae> Schema for CalendarSchema<K> {
    fn kernel(&self) -> &dyn Kernel {
        &self.kernel
    }

    fn strategy(&self) -> Strategy {
        if self.table.is_some() {
            Strategy::Lookup
        } else {
            Strategy::Arithmetic
        }
    }

    fn count_days_in_year_before_month(&self, year: i32, month: u8) -> Result<u16, CalendarError> {
        self.check_year(year)?;
        let max = self.kernel.count_months_in_year(year);
        let out_of_range = CalendarError::MonthOutOfRange {
            calendar: self.id(),
            year,
            month,
            max,
        };
        if month == 0 || month > max {
            return Err(out_of_range);
        }
        let leap = self.is_leap(year);
        let before = match &self.table {
            Some(table) => table.days_before_month(leap, month),
            None => self.kernel.days_in_year_before_month(leap, month),
        };
        before.ok_or(out_of_range)
    }

    fn month_from_day_of_year(&self, year: i32, day_of_year: u16) -> Result<u8, CalendarError> {
        self.check_ordinal(year, day_of_year)?;
        let leap = self.is_leap(year);
        let month = match &self.table {
            Some(table) => table.month_from_day_of_year(leap, day_of_year),
            None => self.kernel.month_from_day_of_year(leap, day_of_year),
        };
        month.ok_or(CalendarError::DayOfYearOutOfRange {
            calendar: self.id(),
            year,
            day_of_year,
            max: self.kernel.count_days_in_year(year),
        })
    }

    fn first_day_of_year(&self, year: i32) -> Result<DayNumber, CalendarError> {
        self.check_year(year)?;
        let days = self.kernel.days_before_year(year);
        i32::try_from(days)
            .map(DayNumber::new)
            .map_err(|_| CalendarError::YearOutOfRange {
                calendar: self.id(),
                year,
                min: self.kernel.supported_years().min(),
                max: self.kernel.supported_years().max(),
            })
    }

    fn year_from_day_number(&self, day_number: DayNumber) -> Result<i32, CalendarError> {
        let year = self.kernel.year_from_day_number(i64::from(day_number.get()));
        if self.kernel.supported_years().contains(year) {
            Ok(year)
        } else {
            Err(CalendarError::DayNumberOutOfRange {
                calendar: self.id(),
                day_number,
            })
        }
    }
}
