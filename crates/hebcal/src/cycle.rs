//! Daily study cycles supplied by external collaborators.

use std::fmt;

use luach_hdate::HebrewDate;
use luach_holidays::HolidayFlags;
use serde::Serialize;

use crate::error::CycleError;

/// One of the daily study cycles the calendar can cite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CycleKind {
    /// Babylonian Talmud, one page a day.
    DafYomi,
    /// Two mishnayot a day.
    MishnaYomi,
    /// Jerusalem Talmud, one page a day.
    YerushalmiYomi,
}

impl CycleKind {
    /// Flag carried by events citing this cycle.
    pub fn flag(self) -> HolidayFlags {
        match self {
            Self::DafYomi => HolidayFlags::DAF_YOMI,
            Self::MishnaYomi => HolidayFlags::MISHNA_YOMI,
            Self::YerushalmiYomi => HolidayFlags::YERUSHALMI_YOMI,
        }
    }

    /// Human-readable cycle name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DafYomi => "Daf Yomi",
            Self::MishnaYomi => "Mishna Yomi",
            Self::YerushalmiYomi => "Yerushalmi Yomi",
        }
    }
}

impl fmt::Display for CycleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day's assignment within a study cycle, e.g. "Berachot 2" or
/// "Tevul Yom 4:2-3".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// Tractate or book.
    pub name: String,
    /// Page, chapter or verse reference within `name`.
    pub reference: String,
}

impl Citation {
    /// Creates a citation.
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.reference)
    }
}

/// Index of a daily study cycle.
///
/// The calendar only asks about days on or after
/// [`first_day`](StudyCycle::first_day); implementations still reject
/// earlier days with [`CycleError::NotStarted`].
pub trait StudyCycle {
    /// Which cycle this is.
    fn kind(&self) -> CycleKind;

    /// Absolute day on which the first cycle began.
    fn first_day(&self) -> i64;

    /// Assignment for `date`, or `None` on days with no study
    /// (Yerushalmi Yomi pauses on Yom Kippur and Tish'a B'Av).
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::NotStarted`] for a date before
    /// [`first_day`](StudyCycle::first_day).
    fn citation(&self, date: &HebrewDate) -> Result<Option<Citation>, CycleError>;
}
