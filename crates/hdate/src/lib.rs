//! # luach-hdate
//!
//! Hebrew and proleptic Gregorian calendar arithmetic on absolute day
//! numbers (day 1 = 1 January, 1 CE).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, HMonth, day)"] -->|"hebrew_to_abs()"| B["absolute day"]
//!     B -->|"abs_to_hebrew()"| A
//!     B -->|"GregorianDate::from_abs()"| C["GregorianDate"]
//!     C -->|".to_abs()"| B
//!     A -->|"HebrewDate::new()"| D["HebrewDate"]
//!     D -->|"yahrzeit() / birthday_or_anniversary()"| D
//!     E["elapsed_days() memo"] --> B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_hdate::{HMonth, HebrewDate, is_leap_year, yahrzeit};
//!
//! let hd = HebrewDate::new(5769, HMonth::Cheshvan, 15)?;
//! assert_eq!(hd.abs(), 733_359);
//! assert_eq!(hd.to_gregorian().to_string(), "2008-11-13");
//!
//! assert!(is_leap_year(5782));
//!
//! let death = HebrewDate::from_ymd(2014, 3, 2)?; // 30 Adar I 5774
//! assert_eq!(yahrzeit(5780, &death)?.to_string(), "30 Sh'vat 5780");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Leap cycle, elapsed-days memo, year and month lengths |
//! | `absolute` | Hebrew ↔ absolute day conversion, weekday anchoring |
//! | `greg` | Proleptic Gregorian calendar without a year 0 |
//! | `month` | `HMonth` names and month-name parsing |
//! | `date` | Validated `HebrewDate` with serde support |
//! | `molad` | Calculated molad of a month |
//! | `anniversary` | Yahrzeit and birthday observance rules |
//! | `gematriya` | Hebrew-letter numerals |
//! | `error` | Error types |

mod absolute;
mod anniversary;
mod date;
mod error;
mod gematriya;
mod greg;
mod molad;
mod month;
mod year;

pub use absolute::{abs_to_hebrew, day_on_or_before, hebrew_to_abs, weekday_of};
pub use anniversary::{birthday_or_anniversary, yahrzeit};
pub use date::HebrewDate;
pub use error::HDateError;
pub use gematriya::gematriya;
pub use greg::{
    GregorianDate, abs_to_gregorian, gregorian_days_in_month, gregorian_to_abs,
    is_gregorian_leap_year,
};
pub use molad::Molad;
pub use month::HMonth;
pub use year::{
    EPOCH, YearKind, days_in_month, days_in_year, elapsed_days, is_leap_year, long_cheshvan,
    months_in_year, short_kislev,
};
