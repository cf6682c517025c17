//! A single dated holiday occurrence.

use std::sync::LazyLock;

use luach_hdate::HebrewDate;
use regex::Regex;
use serde::Serialize;

use crate::flags::HolidayFlags;

/// Suffixes and prefixes stripped by [`HolidayEvent::basename`], applied in
/// order.
static BASENAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r" \d{4}$",
        r" \(CH''M\)$",
        r" \(observed\)$",
        r" \(Hoshana Raba\)$",
        r" [IV]+$",
        r": \d Candles?$",
        r": 8th Day$",
        r"^Erev ",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("basename pattern is valid"))
    .collect()
});

/// A holiday falling on a specific Hebrew date.
///
/// Produced fresh for each year by
/// [`all_holidays_for_year`](crate::all_holidays_for_year) and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayEvent {
    date: HebrewDate,
    desc: String,
    flags: HolidayFlags,
    emoji: Option<&'static str>,
    chol_hamoed_day: Option<i8>,
    chanukah_day: Option<u8>,
}

impl HolidayEvent {
    pub(crate) fn new(
        date: HebrewDate,
        desc: impl Into<String>,
        flags: HolidayFlags,
        emoji: Option<&'static str>,
    ) -> Self {
        Self {
            date,
            desc: desc.into(),
            flags,
            emoji,
            chol_hamoed_day: None,
            chanukah_day: None,
        }
    }

    pub(crate) fn with_chol_hamoed_day(mut self, day: Option<i8>) -> Self {
        self.chol_hamoed_day = day;
        self
    }

    pub(crate) fn with_chanukah_day(mut self, day: u8) -> Self {
        self.chanukah_day = Some(day);
        self
    }

    /// Date of the occurrence.
    pub fn date(&self) -> HebrewDate {
        self.date
    }

    /// Untranslated description, e.g. "Pesach III (CH''M)". Also the
    /// lookup key for translations.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Classification bits.
    pub fn flags(&self) -> HolidayFlags {
        self.flags
    }

    /// Day of Chol HaMoed (1-based); `-1` marks Hoshana Raba.
    pub fn chol_hamoed_day(&self) -> Option<i8> {
        self.chol_hamoed_day
    }

    /// Evenings of Chanukah already lit before this one: 0 for the first
    /// candle, 8 for the eighth day.
    pub fn chanukah_day(&self) -> Option<u8> {
        self.chanukah_day
    }

    /// Holiday-specific emoji, or a default derived from the flags.
    pub fn emoji(&self) -> &'static str {
        if let Some(emoji) = self.emoji {
            return emoji;
        }
        let f = self.flags;
        if f == HolidayFlags::SPECIAL_SHABBAT {
            "🕍"
        } else if f == HolidayFlags::ROSH_CHODESH {
            "🌒"
        } else if f == HolidayFlags::SHABBAT_MEVARCHIM
            || f == HolidayFlags::YOM_KIPPUR_KATAN | HolidayFlags::MINOR_FAST
        {
            ""
        } else {
            "✡️"
        }
    }

    /// Description without day numbers, years and similar qualifiers, so
    /// that every day of a multi-day holiday shares one name.
    ///
    /// ```ignore
    /// "Sukkot III (CH''M)" -> "Sukkot"
    /// "Chanukah: 3 Candles" -> "Chanukah"
    /// "Erev Yom Kippur" -> "Yom Kippur"
    /// ```
    pub fn basename(&self) -> String {
        BASENAME_PATTERNS
            .iter()
            .fold(self.desc.clone(), |name, re| re.replace_all(&name, "").into_owned())
    }

    /// True if the event is kept in the given region's calendar.
    pub fn observed_in(&self, il: bool) -> bool {
        self.flags.observed_in(il)
    }
}
