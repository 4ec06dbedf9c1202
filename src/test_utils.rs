//! Shorthand constructors for tests.

use crate::{CalendarDate, CalendarId, OrdinalDate};

pub fn gregorian(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(CalendarId::Gregorian, year, month, day)
        .expect("failed to construct Gregorian test date")
}

pub fn julian(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(CalendarId::Julian, year, month, day)
        .expect("failed to construct Julian test date")
}

pub fn islamic(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(CalendarId::TabularIslamic, year, month, day)
        .expect("failed to construct tabular Islamic test date")
}

pub fn ordinal(calendar: CalendarId, year: i32, day_of_year: u16) -> OrdinalDate {
    OrdinalDate::new(calendar, year, day_of_year).expect("failed to construct test ordinal date")
}
