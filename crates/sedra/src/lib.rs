//! # luach-sedra
//!
//! Weekly Torah reading (parashat hashavua) schedule for Israel and the
//! Diaspora.
//!
//! A year is classified by whether it is a leap year, the weekday of Rosh
//! Hashana and the lengths of Cheshvan and Kislev. Each shape maps to one
//! of fifteen fixed tables giving, for every Shabbat of the year, a single
//! portion, two joined portions or a festival reading.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Hebrew year + region"] -->|"Sedra::new()"| B["Sedra"]
//!     B -->|"lookup(abs)"| C["Parsha"]
//!     B -->|"find_parsha_num(n)"| D["HebrewDate"]
//!     B -.->|"outside table"| E["neighbouring year's Sedra"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_sedra::{Parsha, Sedra};
//!
//! let sedra = Sedra::new(5781, false)?;
//! let parsha = sedra.lookup(hebrew_date.abs())?;
//! if let Parsha::Double(_) = parsha {
//!     println!("{parsha}"); // "Parashat Tazria-Metzora"
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sedra` | Per-year schedule, lookup and reverse lookup |
//! | `parsha` | Portion names and the `Parsha` reading type |
//! | `table` | The fifteen reading tables and their selection |
//! | `error` | Error types |

mod error;
mod parsha;
mod sedra;
mod table;

pub use error::SedraError;
pub use parsha::{PARSHIOT, PORTION_COUNT, Parsha, parsha_name, parsha_num_by_name};
pub use sedra::Sedra;
