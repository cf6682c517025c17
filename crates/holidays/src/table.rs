//! Fixed-date holidays and Israeli civil days.

use luach_hdate::HMonth::{self, *};

use crate::flags::HolidayFlags;

macro_rules! flags {
    ($($flag:ident)|+) => {
        HolidayFlags::from_bits_retain(0 $(| HolidayFlags::$flag.bits())+)
    };
}

pub(crate) const ROSH_HASHANA_EMOJI: &str = "🍏🍯";
pub(crate) const CHANUKAH_EMOJI: &str = "🕎";
pub(crate) const PURIM_EMOJI: &str = "🎭️📜";
pub(crate) const PURIM_KATAN_EMOJI: &str = "🎭️";
pub(crate) const SYNAGOGUE_EMOJI: &str = "🕍";
pub(crate) const ISRAEL_EMOJI: &str = "🇮🇱";
pub(crate) const ROSH_CHODESH_EMOJI: &str = "🌒";
pub(crate) const SUN_EMOJI: &str = "☀️";
const SEDER_EMOJI: &str = "🫓🍷";
const MATZAH_EMOJI: &str = "🫓";
const SUKKOT_EMOJI: &str = "🌿🍋";
const SHAVUOT_EMOJI: &str = "⛰️🌸";

/// A holiday on the same Hebrew date every year.
pub(crate) struct FixedHoliday {
    pub month: HMonth,
    pub day: u8,
    pub desc: &'static str,
    pub flags: HolidayFlags,
    pub emoji: Option<&'static str>,
    pub chol_hamoed_day: Option<i8>,
}

const fn fixed(
    month: HMonth,
    day: u8,
    desc: &'static str,
    flags: HolidayFlags,
    emoji: Option<&'static str>,
) -> FixedHoliday {
    FixedHoliday {
        month,
        day,
        desc,
        flags,
        emoji,
        chol_hamoed_day: None,
    }
}

const fn chm(
    month: HMonth,
    day: u8,
    desc: &'static str,
    flags: HolidayFlags,
    emoji: Option<&'static str>,
    chol_hamoed_day: i8,
) -> FixedHoliday {
    FixedHoliday {
        month,
        day,
        desc,
        flags,
        emoji,
        chol_hamoed_day: Some(chol_hamoed_day),
    }
}

const RH: Option<&str> = Some(ROSH_HASHANA_EMOJI);
const SEDER: Option<&str> = Some(SEDER_EMOJI);
const MATZAH: Option<&str> = Some(MATZAH_EMOJI);
const SUKKOT: Option<&str> = Some(SUKKOT_EMOJI);
const SHAVUOT: Option<&str> = Some(SHAVUOT_EMOJI);

#[rustfmt::skip]
pub(crate) const FIXED_HOLIDAYS: &[FixedHoliday] = &[
    fixed(Tishrei, 2, "Rosh Hashana II", flags!(CHAG | YOM_TOV_ENDS), RH),
    fixed(Tishrei, 9, "Erev Yom Kippur", flags!(EREV | LIGHT_CANDLES), None),
    fixed(Tishrei, 10, "Yom Kippur", flags!(CHAG | MAJOR_FAST | YOM_TOV_ENDS), None),
    fixed(Tishrei, 14, "Erev Sukkot", flags!(EREV | LIGHT_CANDLES), SUKKOT),

    fixed(Tishrei, 15, "Sukkot I", flags!(CHUL_ONLY | CHAG | LIGHT_CANDLES_TZEIS), SUKKOT),
    fixed(Tishrei, 16, "Sukkot II", flags!(CHUL_ONLY | CHAG | YOM_TOV_ENDS), SUKKOT),
    chm(Tishrei, 17, "Sukkot III (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), SUKKOT, 1),
    chm(Tishrei, 18, "Sukkot IV (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), SUKKOT, 2),
    chm(Tishrei, 19, "Sukkot V (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), SUKKOT, 3),
    chm(Tishrei, 20, "Sukkot VI (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), SUKKOT, 4),
    fixed(Tishrei, 22, "Shmini Atzeret", flags!(CHUL_ONLY | CHAG | LIGHT_CANDLES_TZEIS), None),
    fixed(Tishrei, 23, "Simchat Torah", flags!(CHUL_ONLY | CHAG | YOM_TOV_ENDS), None),

    fixed(Tishrei, 15, "Sukkot I", flags!(IL_ONLY | CHAG | YOM_TOV_ENDS), SUKKOT),
    chm(Tishrei, 16, "Sukkot II (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), SUKKOT, 1),
    chm(Tishrei, 17, "Sukkot III (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), SUKKOT, 2),
    chm(Tishrei, 18, "Sukkot IV (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), SUKKOT, 3),
    chm(Tishrei, 19, "Sukkot V (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), SUKKOT, 4),
    chm(Tishrei, 20, "Sukkot VI (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), SUKKOT, 5),
    fixed(Tishrei, 22, "Shmini Atzeret", flags!(IL_ONLY | CHAG | YOM_TOV_ENDS), None),

    chm(Tishrei, 21, "Sukkot VII (Hoshana Raba)", flags!(LIGHT_CANDLES | CHOL_HAMOED), SUKKOT, -1),
    fixed(Tevet, 10, "Asara B'Tevet", flags!(MINOR_FAST), None),
    fixed(Shvat, 15, "Tu BiShvat", flags!(MINOR_HOLIDAY), Some("🌳")),
    fixed(Adar2, 13, "Erev Purim", flags!(EREV | MINOR_HOLIDAY), Some(PURIM_EMOJI)),
    fixed(Adar2, 14, "Purim", flags!(MINOR_HOLIDAY), Some(PURIM_EMOJI)),
    fixed(Nisan, 14, "Erev Pesach", flags!(EREV | LIGHT_CANDLES), SEDER),

    fixed(Nisan, 15, "Pesach I", flags!(IL_ONLY | CHAG | YOM_TOV_ENDS), SEDER),
    chm(Nisan, 16, "Pesach II (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), MATZAH, 1),
    chm(Nisan, 17, "Pesach III (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), MATZAH, 2),
    chm(Nisan, 18, "Pesach IV (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), MATZAH, 3),
    chm(Nisan, 19, "Pesach V (CH''M)", flags!(IL_ONLY | CHOL_HAMOED), MATZAH, 4),
    chm(Nisan, 20, "Pesach VI (CH''M)", flags!(IL_ONLY | CHOL_HAMOED | LIGHT_CANDLES), MATZAH, 5),
    fixed(Nisan, 21, "Pesach VII", flags!(IL_ONLY | CHAG | YOM_TOV_ENDS), MATZAH),

    fixed(Nisan, 15, "Pesach I", flags!(CHUL_ONLY | CHAG | LIGHT_CANDLES_TZEIS), SEDER),
    fixed(Nisan, 16, "Pesach II", flags!(CHUL_ONLY | CHAG | YOM_TOV_ENDS), SEDER),
    chm(Nisan, 17, "Pesach III (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), MATZAH, 1),
    chm(Nisan, 18, "Pesach IV (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), MATZAH, 2),
    chm(Nisan, 19, "Pesach V (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED), MATZAH, 3),
    chm(Nisan, 20, "Pesach VI (CH''M)", flags!(CHUL_ONLY | CHOL_HAMOED | LIGHT_CANDLES), MATZAH, 4),
    fixed(Nisan, 21, "Pesach VII", flags!(CHUL_ONLY | CHAG | LIGHT_CANDLES_TZEIS), MATZAH),
    fixed(Nisan, 22, "Pesach VIII", flags!(CHUL_ONLY | CHAG | YOM_TOV_ENDS), MATZAH),

    fixed(Iyyar, 14, "Pesach Sheni", flags!(MINOR_HOLIDAY), None),
    fixed(Iyyar, 18, "Lag BaOmer", flags!(MINOR_HOLIDAY), Some("🔥")),
    fixed(Sivan, 5, "Erev Shavuot", flags!(EREV | LIGHT_CANDLES), SHAVUOT),
    fixed(Sivan, 6, "Shavuot", flags!(IL_ONLY | CHAG | YOM_TOV_ENDS), SHAVUOT),
    fixed(Sivan, 6, "Shavuot I", flags!(CHUL_ONLY | CHAG | LIGHT_CANDLES_TZEIS), SHAVUOT),
    fixed(Sivan, 7, "Shavuot II", flags!(CHUL_ONLY | CHAG | YOM_TOV_ENDS), SHAVUOT),
    fixed(Av, 15, "Tu B'Av", flags!(MINOR_HOLIDAY), Some("❤️")),
    fixed(Elul, 1, "Rosh Hashana LaBehemot", flags!(MINOR_HOLIDAY), Some("🐑")),
    fixed(Elul, 29, "Erev Rosh Hashana", flags!(EREV | LIGHT_CANDLES), RH),
];

/// Weekend handling for an Israeli civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Postpone {
    /// Observed on its date.
    Never,
    /// Saturday moves to Sunday.
    SaturdayToSunday,
    /// Friday and Saturday both move to Sunday.
    WeekendToSunday,
    /// Friday and Saturday move back to Thursday.
    WeekendToThursday,
}

/// An Israeli civil day, observed from `first_year` onwards.
pub(crate) struct ModernHoliday {
    pub first_year: i32,
    pub month: HMonth,
    pub day: u8,
    pub desc: &'static str,
    /// Also listed in the Diaspora calendar.
    pub chul: bool,
    pub suppress_emoji: bool,
    pub postpone: Postpone,
}

const fn modern(
    first_year: i32,
    month: HMonth,
    day: u8,
    desc: &'static str,
    chul: bool,
    suppress_emoji: bool,
    postpone: Postpone,
) -> ModernHoliday {
    ModernHoliday {
        first_year,
        month,
        day,
        desc,
        chul,
        suppress_emoji,
        postpone,
    }
}

#[rustfmt::skip]
pub(crate) const MODERN_HOLIDAYS: &[ModernHoliday] = &[
    modern(5727, Iyyar, 28, "Yom Yerushalayim", true, false, Postpone::Never),
    modern(5737, Kislev, 6, "Ben-Gurion Day", false, false, Postpone::WeekendToSunday),
    modern(5750, Shvat, 30, "Family Day", false, true, Postpone::Never),
    modern(5758, Cheshvan, 12, "Yitzhak Rabin Memorial Day", false, false, Postpone::WeekendToThursday),
    modern(5764, Iyyar, 10, "Herzl Day", false, false, Postpone::SaturdayToSunday),
    modern(5765, Tamuz, 29, "Jabotinsky Day", false, false, Postpone::SaturdayToSunday),
    modern(5769, Cheshvan, 29, "Sigd", true, true, Postpone::Never),
    modern(5777, Nisan, 10, "Yom HaAliyah", true, false, Postpone::Never),
    modern(5777, Cheshvan, 7, "Yom HaAliyah School Observance", false, false, Postpone::Never),
];
