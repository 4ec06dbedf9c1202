/// Number of months in every year of the shipped calendar families
pub const MONTHS_IN_YEAR: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for October
pub const OCTOBER: u8 = 10;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for Julian and Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common Julian or Gregorian year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a Julian or Gregorian leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Julian and Gregorian month lengths in a common year
/// (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Julian and Gregorian month lengths in a leap year
pub const DAYS_IN_MONTH_LEAP: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a Gregorian century that does not end on a 400-year boundary
pub(crate) const DAYS_IN_GREGORIAN_CENTURY: i64 = 36_524;
/// Days in a 4-year Julian cycle
pub(crate) const DAYS_IN_JULIAN_CYCLE: i64 = 1_461;

/// Day number of Julian 0001-01-01 (Gregorian 0000-12-30)
pub(crate) const JULIAN_EPOCH: i64 = -2;

/// Smallest year supported by the Julian and Gregorian kernels
pub const MIN_PROLEPTIC_YEAR: i32 = -999_998;
/// Largest year supported by the Julian and Gregorian kernels
pub const MAX_PROLEPTIC_YEAR: i32 = 999_999;

/// Days in a common tabular Islamic year
pub const ISLAMIC_DAYS_IN_COMMON_YEAR: u16 = 354;
/// Days in a tabular Islamic leap year
pub const ISLAMIC_DAYS_IN_LEAP_YEAR: u16 = 355;

/// Tabular Islamic month lengths in a common year, odd months have 30 days
pub const ISLAMIC_DAYS_IN_MONTH: [u8; 13] = [0, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];
/// Tabular Islamic month lengths in a leap year, Dhu al-Hijjah gains a day
pub const ISLAMIC_DAYS_IN_MONTH_LEAP: [u8; 13] =
    [0, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30];

/// Leap years repeat every 30 years
pub(crate) const ISLAMIC_LEAP_CYCLE: i32 = 30;
/// 11 leap years per cycle
pub(crate) const ISLAMIC_LEAPS_PER_CYCLE: i32 = 11;
/// Offset of the type II leap year rule, `(14 + 11y) mod 30 < 11`
pub(crate) const ISLAMIC_LEAP_OFFSET: i32 = 14;
/// Days in a 30-year tabular Islamic cycle
pub(crate) const DAYS_IN_ISLAMIC_CYCLE: i64 = 10_631;

/// Day number of 1 Muharram 1 AH (Julian 0622-07-16)
pub(crate) const ISLAMIC_EPOCH: i64 = 227_014;

/// Smallest year supported by the tabular Islamic kernel
pub const MIN_ISLAMIC_YEAR: i32 = 1;
/// Largest year supported by the tabular Islamic kernel
pub const MAX_ISLAMIC_YEAR: i32 = 9_999;

/// Year of the Gregorian reform
pub const GREGORIAN_REFORM_YEAR: i32 = 1582;
/// Last day of the Julian calendar in October 1582
pub const LAST_JULIAN_DAY: u8 = 4;
/// First day of the Gregorian calendar in October 1582
pub const FIRST_GREGORIAN_DAY: u8 = 15;
