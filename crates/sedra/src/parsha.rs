//! Portion names and the reading of a single Shabbat.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of weekly portions in the annual cycle.
pub const PORTION_COUNT: u8 = 53;

/// Transliterated portion names; portion `n` is `PARSHIOT[n - 1]`.
#[rustfmt::skip]
pub const PARSHIOT: [&str; PORTION_COUNT as usize] = [
    "Bereshit", "Noach", "Lech-Lecha", "Vayera", "Chayei Sara", "Toldot",
    "Vayetzei", "Vayishlach", "Vayeshev", "Miketz", "Vayigash", "Vayechi",
    "Shemot", "Vaera", "Bo", "Beshalach", "Yitro", "Mishpatim", "Terumah",
    "Tetzaveh", "Ki Tisa", "Vayakhel", "Pekudei",
    "Vayikra", "Tzav", "Shmini", "Tazria", "Metzora", "Achrei Mot", "Kedoshim",
    "Emor", "Behar", "Bechukotai",
    "Bamidbar", "Nasso", "Beha'alotcha", "Sh'lach", "Korach", "Chukat", "Balak",
    "Pinchas", "Matot", "Masei",
    "Devarim", "Vaetchanan", "Eikev", "Re'eh", "Shoftim", "Ki Teitzei", "Ki Tavo",
    "Nitzavim", "Vayeilech", "Ha'Azinu",
];

/// Name of portion `number` (1-based), or `None` outside 1..=53.
pub fn parsha_name(number: u8) -> Option<&'static str> {
    PARSHIOT.get(usize::from(number).checked_sub(1)?).copied()
}

/// Looks up a portion number by its transliterated name, ignoring case.
///
/// ```ignore
/// assert_eq!(parsha_num_by_name("beshalach"), Some(16));
/// ```
pub fn parsha_num_by_name(name: &str) -> Option<u8> {
    let name = name.trim();
    PARSHIOT
        .iter()
        .position(|p| p.eq_ignore_ascii_case(name))
        .and_then(|idx| u8::try_from(idx + 1).ok())
}

/// What is read on a given Shabbat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parsha {
    /// A festival reading replaces the weekly portion.
    Chag,
    /// One portion, by 1-based number.
    Single(u8),
    /// Portion `n` joined with `n + 1`.
    Double(u8),
}

impl Parsha {
    /// Decodes a table entry: `-1` is a festival, other negative values
    /// are doubled portions, the rest 0-based single portions.
    pub(crate) fn from_entry(entry: i8) -> Self {
        match entry {
            -1 => Self::Chag,
            e if e < 0 => Self::Double(e.unsigned_abs() + 1),
            e => Self::Single(e.unsigned_abs() + 1),
        }
    }

    /// True if a festival reading displaces the portion.
    pub fn is_chag(&self) -> bool {
        matches!(self, Self::Chag)
    }

    /// 1-based portion numbers read; empty on a festival.
    pub fn nums(&self) -> Vec<u8> {
        match *self {
            Self::Chag => Vec::new(),
            Self::Single(n) => vec![n],
            Self::Double(n) => vec![n, n + 1],
        }
    }

    /// Portion names read; empty on a festival.
    pub fn names(&self) -> Vec<&'static str> {
        self.nums().into_iter().filter_map(parsha_name).collect()
    }
}

impl fmt::Display for Parsha {
    /// "Parashat Bereshit", "Parashat Matot-Masei"; festivals render empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_chag() {
            return Ok(());
        }
        write!(f, "Parashat {}", self.names().join("-"))
    }
}
