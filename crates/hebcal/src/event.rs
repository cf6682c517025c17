//! Events produced by the calendar generator.

use chrono::NaiveTime;
use luach_hdate::{HebrewDate, Molad, gematriya};
use luach_holidays::{HolidayEvent, HolidayFlags};
use luach_sedra::Parsha;
use serde::Serialize;

use crate::cycle::{Citation, CycleKind};
use crate::locale::{Locale, translate};

const CANDLE_EMOJI: &str = "🕯️";
const HAVDALAH_EMOJI: &str = "✨";
const CHANUKAH_EMOJI: &str = "🕎";

/// Locale ids whose Hebrew dates render as "15th of Cheshvan, 5769".
const ENGLISH_LOCALES: &[&str] = &[
    "",
    "en",
    "sephardic",
    "ashkenazi",
    "ashkenazi_litvish",
    "ashkenazi_poylish",
    "ashkenazi_standard",
];

/// One entry of a generated calendar.
///
/// Every variant shares the projections [`date`](CalEvent::date),
/// [`flags`](CalEvent::flags), [`emoji`](CalEvent::emoji),
/// [`basename`](CalEvent::basename) and [`render`](CalEvent::render).
#[derive(Debug, Clone, PartialEq)]
pub enum CalEvent {
    /// A holiday, fast, special Shabbat or Rosh Chodesh.
    Holiday(HolidayEvent),
    /// A weekday Chanukah candle with its lighting time.
    ChanukahCandles { event: HolidayEvent, time: NaiveTime },
    /// Candle lighting before Shabbat or yom tov.
    CandleLighting {
        date: HebrewDate,
        time: NaiveTime,
        flags: HolidayFlags,
    },
    /// Havdalah at the end of Shabbat or yom tov.
    Havdalah {
        date: HebrewDate,
        time: NaiveTime,
        /// Fixed minutes after sunset, when configured that way.
        mins: Option<u32>,
        flags: HolidayFlags,
    },
    /// Start of a fast.
    FastBegins { event: HolidayEvent, time: NaiveTime },
    /// End of a fast.
    FastEnds { event: HolidayEvent, time: NaiveTime },
    /// Weekly Torah portion.
    Parsha {
        date: HebrewDate,
        parsha: Parsha,
        il: bool,
    },
    /// A day of the Omer, 1..=49.
    Omer { date: HebrewDate, day: u8 },
    /// A study-cycle assignment.
    Study {
        date: HebrewDate,
        kind: CycleKind,
        citation: Citation,
    },
    /// Announcement of the coming month's molad.
    Molad {
        date: HebrewDate,
        molad: Molad,
        month_name: &'static str,
    },
    /// The Hebrew date itself.
    HebrewDate(HebrewDate),
    /// A yahrzeit or user-defined event.
    User { date: HebrewDate, desc: String },
}

impl CalEvent {
    pub fn date(&self) -> HebrewDate {
        match self {
            Self::Holiday(event)
            | Self::ChanukahCandles { event, .. }
            | Self::FastBegins { event, .. }
            | Self::FastEnds { event, .. } => event.date(),
            Self::CandleLighting { date, .. }
            | Self::Havdalah { date, .. }
            | Self::Parsha { date, .. }
            | Self::Omer { date, .. }
            | Self::Study { date, .. }
            | Self::Molad { date, .. }
            | Self::HebrewDate(date)
            | Self::User { date, .. } => *date,
        }
    }

    pub fn flags(&self) -> HolidayFlags {
        match self {
            Self::Holiday(event)
            | Self::ChanukahCandles { event, .. }
            | Self::FastBegins { event, .. }
            | Self::FastEnds { event, .. } => event.flags(),
            Self::CandleLighting { flags, .. } | Self::Havdalah { flags, .. } => *flags,
            Self::Parsha { .. } => HolidayFlags::PARSHA_HASHAVUA,
            Self::Omer { .. } => HolidayFlags::OMER_COUNT,
            Self::Study { kind, .. } => kind.flag(),
            Self::Molad { .. } => HolidayFlags::MOLAD,
            Self::HebrewDate(_) => HolidayFlags::HEBREW_DATE,
            Self::User { .. } => HolidayFlags::USER_EVENT,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Holiday(event) => event.emoji(),
            Self::ChanukahCandles { .. } => CHANUKAH_EMOJI,
            Self::CandleLighting { .. } => CANDLE_EMOJI,
            Self::Havdalah { .. } => HAVDALAH_EMOJI,
            _ => "",
        }
    }

    /// Title without day counters or times, shared by related events.
    pub fn basename(&self) -> String {
        match self {
            Self::Holiday(event) | Self::ChanukahCandles { event, .. } => event.basename(),
            Self::CandleLighting { .. } => String::from("Candle lighting"),
            Self::Havdalah { .. } => String::from("Havdalah"),
            Self::FastBegins { .. } => String::from("Fast begins"),
            Self::FastEnds { .. } => String::from("Fast ends"),
            Self::Parsha { parsha, .. } => parsha.names().join("-"),
            Self::Omer { .. } => String::from("Omer"),
            Self::Study { citation, .. } => citation.to_string(),
            Self::Molad { month_name, .. } => format!("Molad {month_name}"),
            Self::HebrewDate(date) => date.to_string(),
            Self::User { desc, .. } => desc.clone(),
        }
    }

    /// Title in `locale`, looked up through `locales` and falling back to
    /// the English text.
    pub fn render(&self, locales: &dyn Locale, locale: &str) -> String {
        let tr = |key: &'static str| translate(locales, key, locale);
        match self {
            Self::Holiday(event) => translate(locales, event.desc(), locale).to_owned(),
            Self::ChanukahCandles { event, time } => format!(
                "{}: {}",
                translate(locales, event.desc(), locale),
                clock(*time)
            ),
            Self::CandleLighting { time, .. } => {
                format!("{}: {}", tr("Candle lighting"), clock(*time))
            }
            Self::Havdalah { time, mins, .. } => match mins {
                Some(mins) => format!("{} ({mins} min): {}", tr("Havdalah"), clock(*time)),
                None => format!("{}: {}", tr("Havdalah"), clock(*time)),
            },
            Self::FastBegins { time, .. } => format!("{}: {}", tr("Fast begins"), clock(*time)),
            Self::FastEnds { time, .. } => format!("{}: {}", tr("Fast ends"), clock(*time)),
            Self::Parsha { parsha, .. } => {
                let separator = if locale == "he" { "־" } else { "-" };
                let names: Vec<&str> = parsha
                    .names()
                    .into_iter()
                    .map(|name| translate(locales, name, locale))
                    .collect();
                format!("{} {}", tr("Parashat"), names.join(separator))
            }
            Self::Omer { day, .. } => {
                if ENGLISH_LOCALES.contains(&locale) {
                    format!("{} day of the Omer", ordinal(u32::from(*day)))
                } else if locale == "he" {
                    format!("{} בָּעוֹמֶר", gematriya(u32::from(*day)))
                } else {
                    format!("{day} {}", tr("day of the Omer"))
                }
            }
            Self::Study { citation, .. } => format!(
                "{} {}",
                translate(locales, &citation.name, locale),
                citation.reference
            ),
            Self::Molad {
                molad, month_name, ..
            } => format!(
                "{} {}: {molad}",
                tr("Molad"),
                translate(locales, month_name, locale)
            ),
            Self::HebrewDate(date) => {
                if ENGLISH_LOCALES.contains(&locale) {
                    format!(
                        "{} of {}, {}",
                        ordinal(u32::from(date.day())),
                        date.month_name(),
                        date.year()
                    )
                } else if locale == "he" {
                    date.render_hebrew()
                } else {
                    format!(
                        "{} {} {}",
                        date.day(),
                        translate(locales, date.month_name(), locale),
                        date.year()
                    )
                }
            }
            Self::User { desc, .. } => desc.clone(),
        }
    }

    /// Flat serialisable form, rendered in `locale`.
    pub fn to_record(&self, locales: &dyn Locale, locale: &str) -> EventRecord {
        let date = self.date();
        EventRecord {
            date: date.to_gregorian().to_string(),
            hdate: date,
            title: self.render(locales, locale),
            flags: self.flags(),
            emoji: self.emoji(),
        }
    }
}

/// One calendar line as written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Gregorian date, `YYYY-MM-DD`.
    pub date: String,
    pub hdate: HebrewDate,
    pub title: String,
    pub flags: HolidayFlags,
    pub emoji: &'static str,
}

/// 12-hour clock time without a suffix, e.g. "6:28".
fn clock(time: NaiveTime) -> String {
    time.format("%-I:%M").to_string()
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 22nd.
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{NoTranslation, Translations};
    use luach_hdate::HMonth;

    fn hd(year: i32, month: HMonth, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 29, 30, 101, 111]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            [
                "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd",
                "29th", "30th", "101st", "111th"
            ]
        );
    }

    #[test]
    fn clock_is_twelve_hour() {
        assert_eq!(clock(at(18, 28)), "6:28");
        assert_eq!(clock(at(5, 4)), "5:04");
        assert_eq!(clock(at(12, 0)), "12:00");
        assert_eq!(clock(at(0, 30)), "12:30");
    }

    #[test]
    fn hebrew_date_renders() {
        let ev = CalEvent::HebrewDate(hd(5781, HMonth::Sivan, 3));
        assert_eq!(ev.render(&NoTranslation, "en"), "3rd of Sivan, 5781");
        assert_eq!(ev.render(&NoTranslation, "he"), "ג׳ סִיוָן תשפ״א");
        assert_eq!(ev.basename(), "3 Sivan 5781");
        assert_eq!(ev.flags(), HolidayFlags::HEBREW_DATE);
        let hu = Translations::new().with("hu", "Sivan", "Sziván");
        assert_eq!(ev.render(&hu, "hu"), "3 Sziván 5781");
    }

    #[test]
    fn parsha_renders() {
        let ev = CalEvent::Parsha {
            date: hd(5783, HMonth::Tamuz, 26),
            parsha: Parsha::Double(42),
            il: false,
        };
        assert_eq!(ev.render(&NoTranslation, "en"), "Parashat Matot-Masei");
        assert_eq!(ev.basename(), "Matot-Masei");
        let he = Translations::new()
            .with("he", "Parashat", "פָּרָשַׁת")
            .with("he", "Matot", "מַּטּוֹת")
            .with("he", "Masei", "מַסְעֵי");
        assert_eq!(ev.render(&he, "he"), "פָּרָשַׁת מַּטּוֹת־מַסְעֵי");
    }

    #[test]
    fn timed_events_render() {
        let date = hd(5783, HMonth::Tishrei, 1);
        let candles = CalEvent::CandleLighting {
            date,
            time: at(18, 25),
            flags: HolidayFlags::LIGHT_CANDLES,
        };
        assert_eq!(candles.render(&NoTranslation, "en"), "Candle lighting: 6:25");
        assert_eq!(candles.emoji(), "🕯️");
        let havdalah = CalEvent::Havdalah {
            date,
            time: at(19, 35),
            mins: Some(50),
            flags: HolidayFlags::LIGHT_CANDLES_TZEIS,
        };
        assert_eq!(havdalah.render(&NoTranslation, "en"), "Havdalah (50 min): 7:35");
        let es = Translations::new().with("es", "Candle lighting", "Iluminación de velas");
        assert_eq!(candles.render(&es, "es"), "Iluminación de velas: 6:25");
    }

    #[test]
    fn omer_and_molad_render() {
        let omer = CalEvent::Omer {
            date: hd(5783, HMonth::Iyyar, 1),
            day: 15,
        };
        assert_eq!(omer.render(&NoTranslation, "en"), "15th day of the Omer");
        assert_eq!(omer.render(&NoTranslation, "he"), "ט״ו בָּעוֹמֶר");
        assert_eq!(omer.flags(), HolidayFlags::OMER_COUNT);

        let molad = CalEvent::Molad {
            date: hd(5783, HMonth::Nisan, 27),
            molad: Molad::new(5783, HMonth::Iyyar),
            month_name: "Iyyar",
        };
        assert_eq!(
            molad.render(&NoTranslation, "en"),
            "Molad Iyyar: Thu, 8 minutes and 13 chalakim after 14:00"
        );
        assert_eq!(molad.basename(), "Molad Iyyar");
    }

    #[test]
    fn record_serializes() {
        let ev = CalEvent::User {
            date: hd(5769, HMonth::Cheshvan, 15),
            desc: String::from("Yahrzeit"),
        };
        let record = ev.to_record(&NoTranslation, "en");
        assert_eq!(record.date, "2008-11-13");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "Yahrzeit");
        assert_eq!(json["flags"], "USER_EVENT");
        assert_eq!(json["emoji"], "");
    }
}
