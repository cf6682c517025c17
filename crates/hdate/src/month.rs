//! Hebrew months, their names, and lenient month-name parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::HDateError;

/// A Hebrew month.
///
/// Numbering follows the biblical order starting at Nisan, so Tishrei
/// (the first month of the civil year) is 7. Adar II exists only in leap
/// years; in ordinary years the single Adar is represented as [`HMonth::Adar1`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum HMonth {
    Nisan = 1,
    Iyyar = 2,
    Sivan = 3,
    Tamuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shvat = 11,
    Adar1 = 12,
    Adar2 = 13,
}

#[rustfmt::skip]
const ALL_MONTHS: [HMonth; 13] = [
    HMonth::Nisan, HMonth::Iyyar, HMonth::Sivan, HMonth::Tamuz,
    HMonth::Av, HMonth::Elul, HMonth::Tishrei, HMonth::Cheshvan,
    HMonth::Kislev, HMonth::Tevet, HMonth::Shvat, HMonth::Adar1,
    HMonth::Adar2,
];

impl HMonth {
    /// Converts a month number (1 = Nisan ..= 13 = Adar II).
    ///
    /// # Errors
    ///
    /// Returns [`HDateError::InvalidMonthNumber`] outside 1..=13.
    pub fn from_number(month: u8) -> Result<Self, HDateError> {
        match month {
            1..=13 => Ok(ALL_MONTHS[usize::from(month - 1)]),
            _ => Err(HDateError::InvalidMonthNumber { month }),
        }
    }

    /// Returns the month number (1 = Nisan ..= 13 = Adar II).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the month with the next higher number, wrapping Adar II to Nisan.
    ///
    /// This is numeric succession, not calendar succession: the month after
    /// Elul is Tishrei in both, but the month after Adar I in an ordinary
    /// year is Nisan on the calendar and Adar II here.
    pub(crate) fn succ(self) -> Self {
        ALL_MONTHS[usize::from(self.number() % 13)]
    }

    /// English transliterated name ("Nisan", "Sh'vat", "Adar I", ...).
    ///
    /// This is the leap-year-agnostic name; use
    /// [`HebrewDate::month_name`](crate::HebrewDate::month_name) to get
    /// plain "Adar" in ordinary years.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nisan => "Nisan",
            Self::Iyyar => "Iyyar",
            Self::Sivan => "Sivan",
            Self::Tamuz => "Tamuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shvat => "Sh'vat",
            Self::Adar1 => "Adar I",
            Self::Adar2 => "Adar II",
        }
    }

    /// Hebrew name with vowel points ("תִשְׁרֵי", "אַדָר ב׳", ...).
    pub fn hebrew_name(self) -> &'static str {
        match self {
            Self::Nisan => "נִיסָן",
            Self::Iyyar => "אִיָיר",
            Self::Sivan => "סִיוָן",
            Self::Tamuz => "תַּמּוּז",
            Self::Av => "אָב",
            Self::Elul => "אֱלוּל",
            Self::Tishrei => "תִשְׁרֵי",
            Self::Cheshvan => "חֶשְׁוָן",
            Self::Kislev => "כִּסְלֵו",
            Self::Tevet => "טֵבֵת",
            Self::Shvat => "שְׁבָט",
            Self::Adar1 => "אַדָר א׳",
            Self::Adar2 => "אַדָר ב׳",
        }
    }
}

impl fmt::Display for HMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HMonth {
    type Err = HDateError;

    /// Parses English transliterations and Hebrew names.
    ///
    /// Apart from the two Adars, Hebrew months are unique by their first two
    /// letters. A bare "Adar" parses as Adar II, which
    /// [`HebrewDate::new`](crate::HebrewDate::new) folds into Adar I in
    /// ordinary years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_month_name(s).ok_or_else(|| HDateError::InvalidMonthName {
            name: s.to_string(),
        })
    }
}

/// Hebrew cantillation marks and vowel points.
fn is_hebrew_point(c: char) -> bool {
    ('\u{0591}'..='\u{05C7}').contains(&c) && c != '\u{05BE}'
}

fn parse_month_name(name: &str) -> Option<HMonth> {
    let lower: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&c| !is_hebrew_point(c))
        .collect();
    let mut chars = lower.chars();
    let first = chars.next()?;
    let second = chars.next();

    let month = match (first, second) {
        // "november" and friends
        ('n', Some('o')) => return None,
        ('n' | 'נ', _) => HMonth::Nisan,
        ('i', _) | ('א', Some('י')) => HMonth::Iyyar,
        ('e', _) | ('א', Some('ל')) => HMonth::Elul,
        ('c' | 'ח', _) => HMonth::Cheshvan,
        ('k' | 'כ', _) => HMonth::Kislev,
        ('s', Some('i')) | ('ס', _) => HMonth::Sivan,
        ('s', Some('h')) | ('ש', _) => HMonth::Shvat,
        ('t', Some('a')) | ('ת', Some('מ')) => HMonth::Tamuz,
        ('t', Some('i')) | ('ת', Some('ש')) => HMonth::Tishrei,
        ('t', Some('e')) | ('ט', _) => HMonth::Tevet,
        ('a', Some('v')) | ('א', Some('ב')) => HMonth::Av,
        ('a', Some('d')) | ('א', Some('ד')) => {
            if is_adar_rishon(&lower) {
                HMonth::Adar1
            } else {
                HMonth::Adar2
            }
        }
        _ => return None,
    };
    Some(month)
}

/// Adar I spellings end in `1`, a lone `i`, `a`, or `א`, optionally
/// followed by a geresh.
fn is_adar_rishon(lower: &str) -> bool {
    let trimmed = lower.strip_suffix('׳').unwrap_or(lower);
    let mut rev = trimmed.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('1' | 'a' | 'א'), _) => true,
        (Some('i'), Some(prev)) => prev != 'i',
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_roundtrip() {
        for n in 1..=13u8 {
            assert_eq!(HMonth::from_number(n).unwrap().number(), n);
        }
        assert!(HMonth::from_number(0).is_err());
        assert!(HMonth::from_number(14).is_err());
    }

    #[test]
    fn succ_wraps() {
        assert_eq!(HMonth::Elul.succ(), HMonth::Tishrei);
        assert_eq!(HMonth::Adar1.succ(), HMonth::Adar2);
        assert_eq!(HMonth::Adar2.succ(), HMonth::Nisan);
    }

    #[test]
    fn parse_english() {
        let cases = [
            ("Nisan", HMonth::Nisan),
            ("iyyar", HMonth::Iyyar),
            ("Sivan", HMonth::Sivan),
            ("Tammuz", HMonth::Tamuz),
            ("Av", HMonth::Av),
            ("ELUL", HMonth::Elul),
            ("Tishrei", HMonth::Tishrei),
            ("cheshvan", HMonth::Cheshvan),
            ("Kislev", HMonth::Kislev),
            ("Tevet", HMonth::Tevet),
            ("Shvat", HMonth::Shvat),
            ("Sh'vat", HMonth::Shvat),
        ];
        for (name, expected) in cases {
            assert_eq!(name.parse::<HMonth>().unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn parse_adar_variants() {
        assert_eq!("Adar".parse::<HMonth>().unwrap(), HMonth::Adar2);
        assert_eq!("Adar I".parse::<HMonth>().unwrap(), HMonth::Adar1);
        assert_eq!("Adar 1".parse::<HMonth>().unwrap(), HMonth::Adar1);
        assert_eq!("Adar1".parse::<HMonth>().unwrap(), HMonth::Adar1);
        assert_eq!("Adar II".parse::<HMonth>().unwrap(), HMonth::Adar2);
        assert_eq!("Adar 2".parse::<HMonth>().unwrap(), HMonth::Adar2);
    }

    #[test]
    fn parse_hebrew() {
        let cases = [
            ("ניסן", HMonth::Nisan),
            ("אייר", HMonth::Iyyar),
            ("סיון", HMonth::Sivan),
            ("תמוז", HMonth::Tamuz),
            ("אב", HMonth::Av),
            ("אלול", HMonth::Elul),
            ("תשרי", HMonth::Tishrei),
            ("חשון", HMonth::Cheshvan),
            ("כסלו", HMonth::Kislev),
            ("טבת", HMonth::Tevet),
            ("שבט", HMonth::Shvat),
            ("אדר א", HMonth::Adar1),
            ("אדר ב", HMonth::Adar2),
        ];
        for (name, expected) in cases {
            assert_eq!(name.parse::<HMonth>().unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn parse_own_hebrew_names() {
        for n in 1..=13u8 {
            let month = HMonth::from_number(n).unwrap();
            assert_eq!(month.hebrew_name().parse::<HMonth>().unwrap(), month);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("November".parse::<HMonth>().is_err());
        assert!("".parse::<HMonth>().is_err());
        assert!("xyz".parse::<HMonth>().is_err());
    }

    #[test]
    fn display_uses_english_name() {
        assert_eq!(HMonth::Shvat.to_string(), "Sh'vat");
        assert_eq!(HMonth::Adar2.to_string(), "Adar II");
    }
}
