//! # luach-hebcal
//!
//! Day-by-day Hebrew calendar generator. Walks an absolute-day range,
//! builds the holiday list, reading schedule and Omer bounds once per
//! Hebrew year, and merges them with candle-lighting times, study-cycle
//! citations, molad announcements and user events into one ordered
//! stream.
//!
//! Sun times, translations and the study cycles come from collaborators
//! behind the [`Zmanim`], [`Locale`] and [`StudyCycle`] traits; the
//! crate itself does no astronomy and ships no translation tables.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     O["CalOptions"] -->|"validate()"| R["day range + settings"]
//!     R --> G["HebrewCalendar::generate()"]
//!     H["luach-holidays"] --> G
//!     S["luach-sedra"] --> G
//!     Z["dyn Zmanim"] -->|"candles, fasts"| G
//!     C["dyn StudyCycle"] -->|"citations"| G
//!     G --> E["Vec&lt;CalEvent&gt;"]
//!     E -->|"records(dyn Locale)"| J["EventRecord"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_hebcal::{CalOptions, HebrewCalendar, Location};
//!
//! let opts = CalOptions::new()
//!     .with_year(5784)
//!     .with_hebrew_year(true)
//!     .with_sedrot(true)
//!     .with_location(Location::new("Chicago", 41.85003, -87.65005))
//!     .with_candle_lighting(true);
//! let calendar = HebrewCalendar::new().with_zmanim(&my_sun);
//! for ev in calendar.generate(&opts)? {
//!     println!("{} {}", ev.date().to_gregorian(), ev.render(&luach_hebcal::NoTranslation, "en"));
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | `HebrewCalendar` and the per-day merge |
//! | `options` | `CalOptions` builder and validation |
//! | `mask` | Effective event mask and candle parameters |
//! | `range` | Day range for a year, month or explicit span |
//! | `candles` | Candle lighting, Havdalah and fast boundaries |
//! | `event` | `CalEvent` and its rendering |
//! | `zmanim` | `Location` and the `Zmanim` trait |
//! | `cycle` | `StudyCycle` trait and citations |
//! | `locale` | `Locale` trait and in-memory translations |
//! | `error` | Error types |

mod calendar;
mod candles;
mod cycle;
mod error;
mod event;
mod locale;
mod mask;
mod options;
mod range;
mod zmanim;

pub use calendar::HebrewCalendar;
pub use cycle::{Citation, CycleKind, StudyCycle};
pub use error::{CalError, CycleError};
pub use event::{CalEvent, EventRecord};
pub use locale::{Locale, NoTranslation, Translations, translate};
pub use options::{CalOptions, UserEvent, Yahrzeit};
pub use zmanim::{
    ALOT_HASHACHAR, CHANUKAH_DUSK, Location, TZEIT_3_MEDIUM_STARS, TZEIT_3_SMALL_STARS, Zman,
    Zmanim,
};
