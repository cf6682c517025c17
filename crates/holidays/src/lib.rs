//! # luach-holidays
//!
//! Rule engine for the Jewish holidays, fasts, special Shabbatot, Rosh
//! Chodesh and Israeli civil days of a Hebrew year.
//!
//! Every event carries [`HolidayFlags`] describing what kind of day it is
//! and whether it is observed only in Israel or only in the Diaspora.
//! Dates that depend on the weekday (fasts postponed off Shabbat, the
//! Shabbatot counted back from Pesach) are resolved per year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Hebrew year"] -->|"all_holidays_for_year()"| B["Vec&lt;HolidayEvent&gt;"]
//!     T["fixed + modern tables"] --> B
//!     S["luach-sedra"] -->|"Shabbat Shirah"| B
//!     B -->|"holidays_for_year(il)"| C["region filtered"]
//!     C -->|"holidays_on_date()"| D["one day"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_holidays::{HolidayFlags, holidays_for_year};
//!
//! for ev in holidays_for_year(5784, false)? {
//!     if ev.flags().contains(HolidayFlags::CHAG) {
//!         println!("{} {} {}", ev.date(), ev.desc(), ev.emoji());
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rules` | Per-year generation and region filtering |
//! | `table` | Fixed-date and modern holiday tables |
//! | `event` | `HolidayEvent`, emoji defaults and base names |
//! | `flags` | `HolidayFlags` bit set |
//! | `error` | Error types |

mod error;
mod event;
mod flags;
mod rules;
mod table;

pub use error::HolidayError;
pub use event::HolidayEvent;
pub use flags::HolidayFlags;
pub use rules::{all_holidays_for_year, holidays_for_year, holidays_on_date};
