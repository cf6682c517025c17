//! Year-level holiday generation.

use chrono::Weekday;
use luach_hdate::HMonth::{self, *};
use luach_hdate::{
    HebrewDate, day_on_or_before, hebrew_to_abs, is_leap_year, months_in_year, short_kislev,
};
use luach_sedra::Sedra;
use tracing::debug;

use crate::error::HolidayError;
use crate::event::HolidayEvent;
use crate::flags::HolidayFlags as F;
use crate::table::{
    CHANUKAH_EMOJI, FIXED_HOLIDAYS, ISRAEL_EMOJI, MODERN_HOLIDAYS, PURIM_EMOJI, PURIM_KATAN_EMOJI,
    Postpone, ROSH_CHODESH_EMOJI, ROSH_HASHANA_EMOJI, SUN_EMOJI, SYNAGOGUE_EMOJI,
};

/// Day offset of the solar cycle from the epoch of the Hebrew calendar.
const SOLAR_CYCLE_OFFSET: i64 = 1_373_429;
/// 28 Julian years, in days.
const SOLAR_CYCLE_DAYS: i64 = 10_227;
/// Day within the solar cycle on which Birkat Hachamah falls.
const SOLAR_CYCLE_BLESSING_DAY: i64 = 172;

fn shabbat_on_or_before(abs: i64) -> HebrewDate {
    HebrewDate::from_abs(day_on_or_before(Weekday::Sat, abs))
}

/// Month following `month` within Hebrew `year`; the last Adar wraps to
/// Nisan.
fn next_month(year: i32, month: HMonth) -> Result<HMonth, HolidayError> {
    if month.number() == months_in_year(year) {
        Ok(Nisan)
    } else {
        Ok(HMonth::from_number(month.number() + 1)?)
    }
}

fn month_name(year: i32, month: HMonth) -> Result<&'static str, HolidayError> {
    Ok(HebrewDate::new(year, month, 1)?.month_name())
}

/// Every holiday of Hebrew `year` for both regions, sorted by date and
/// then description.
///
/// Events that differ between Israel and the Diaspora appear twice,
/// tagged [`IL_ONLY`](F::IL_ONLY) and [`CHUL_ONLY`](F::CHUL_ONLY).
///
/// # Errors
///
/// Returns [`HolidayError::Date`] for a year below 1.
#[tracing::instrument]
pub fn all_holidays_for_year(year: i32) -> Result<Vec<HolidayEvent>, HolidayError> {
    let date = |month: HMonth, day: u8| HebrewDate::new(year, month, day);
    let mut events = Vec::with_capacity(128);

    for h in FIXED_HOLIDAYS {
        events.push(
            HolidayEvent::new(date(h.month, h.day)?, h.desc, h.flags, h.emoji)
                .with_chol_hamoed_day(h.chol_hamoed_day),
        );
    }

    let rosh_hashana = date(Tishrei, 1)?;
    let next_rosh_hashana = HebrewDate::new(year + 1, Tishrei, 1)?;
    let pesach = date(Nisan, 15)?;
    let pesach_abs = pesach.abs();
    let special = |date: HebrewDate, desc: &str| {
        HolidayEvent::new(date, desc, F::SPECIAL_SHABBAT, Some(SYNAGOGUE_EMOJI))
    };

    // around Rosh Hashana
    events.push(HolidayEvent::new(
        rosh_hashana,
        format!("Rosh Hashana {year}"),
        F::CHAG | F::LIGHT_CANDLES_TZEIS,
        Some(ROSH_HASHANA_EMOJI),
    ));
    events.push(special(shabbat_on_or_before(rosh_hashana.abs() + 7), "Shabbat Shuva"));
    let gedaliah = if rosh_hashana.weekday() == Weekday::Thu { 4 } else { 3 };
    events.push(HolidayEvent::new(
        date(Tishrei, gedaliah)?,
        "Tzom Gedaliah",
        F::MINOR_FAST,
        None,
    ));
    events.push(HolidayEvent::new(
        shabbat_on_or_before(next_rosh_hashana.abs() - 4),
        "Leil Selichot",
        F::MINOR_HOLIDAY,
        Some(SYNAGOGUE_EMOJI),
    ));

    // counted back from Pesach
    let pesach_weekday = pesach.weekday();
    events.push(special(shabbat_on_or_before(pesach_abs - 43), "Shabbat Shekalim"));
    events.push(special(shabbat_on_or_before(pesach_abs - 30), "Shabbat Zachor"));
    let esther = if pesach_weekday == Weekday::Tue { 33 } else { 31 };
    events.push(HolidayEvent::new(
        HebrewDate::from_abs(pesach_abs - esther),
        "Ta'anit Esther",
        F::MINOR_FAST,
        None,
    ));
    let shushan = if pesach_weekday == Weekday::Sun { 28 } else { 29 };
    events.push(HolidayEvent::new(
        HebrewDate::from_abs(pesach_abs - shushan),
        "Shushan Purim",
        F::MINOR_HOLIDAY,
        Some(PURIM_EMOJI),
    ));
    if pesach_weekday == Weekday::Sun {
        events.push(HolidayEvent::new(
            date(Adar2, 16)?,
            "Purim Meshulash",
            F::MINOR_HOLIDAY,
            None,
        ));
    }
    let ha_chodesh = shabbat_on_or_before(pesach_abs - 14);
    events.push(special(ha_chodesh.add_days(-7), "Shabbat Parah"));
    events.push(special(ha_chodesh, "Shabbat HaChodesh"));
    events.push(special(shabbat_on_or_before(pesach_abs - 1), "Shabbat HaGadol"));
    let bechorot = if pesach.prev().weekday() == Weekday::Sat {
        pesach.on_or_before(Weekday::Thu)
    } else {
        date(Nisan, 14)?
    };
    events.push(HolidayEvent::new(
        bechorot,
        "Ta'anit Bechorot",
        F::MINOR_FAST,
        None,
    ));

    if is_leap_year(year) {
        for (day, desc) in [(14, "Purim Katan"), (15, "Shushan Purim Katan")] {
            events.push(HolidayEvent::new(
                date(Adar1, day)?,
                desc,
                F::MINOR_HOLIDAY,
                Some(PURIM_KATAN_EMOJI),
            ));
        }
    }

    push_chanukah(year, &mut events)?;
    push_three_weeks(year, &mut events)?;
    push_modern(year, pesach, &mut events)?;
    push_rosh_chodesh(year, &mut events)?;
    push_yom_kippur_katan(year, &mut events)?;

    let shirah = Sedra::new(year, false)?.find_parsha_num(16)?;
    events.push(special(shirah, "Shabbat Shirah"));

    // the solar cycle may complete late in Adar II of a leap year
    let scan_start = if is_leap_year(year) {
        hebrew_to_abs(year, Adar2, 20)
    } else {
        hebrew_to_abs(year, Nisan, 1)
    };
    for abs in scan_start..scan_start + 41 {
        if (abs + SOLAR_CYCLE_OFFSET).rem_euclid(SOLAR_CYCLE_DAYS) == SOLAR_CYCLE_BLESSING_DAY {
            events.push(HolidayEvent::new(
                HebrewDate::from_abs(abs),
                "Birkat Hachamah",
                F::MINOR_HOLIDAY,
                Some(SUN_EMOJI),
            ));
        }
    }

    events.sort_by(|a, b| {
        a.date()
            .abs()
            .cmp(&b.date().abs())
            .then_with(|| a.desc().cmp(b.desc()))
    });
    debug!(year, count = events.len(), "generated holidays");
    Ok(events)
}

/// Holidays of Hebrew `year` observed in Israel (`il`) or the Diaspora.
///
/// # Errors
///
/// See [`all_holidays_for_year`].
pub fn holidays_for_year(year: i32, il: bool) -> Result<Vec<HolidayEvent>, HolidayError> {
    let mut events = all_holidays_for_year(year)?;
    events.retain(|ev| ev.observed_in(il));
    Ok(events)
}

/// Holidays falling on `date` in the given region.
///
/// # Errors
///
/// See [`all_holidays_for_year`].
pub fn holidays_on_date(date: &HebrewDate, il: bool) -> Result<Vec<HolidayEvent>, HolidayError> {
    let mut events = holidays_for_year(date.year(), il)?;
    events.retain(|ev| ev.date().abs() == date.abs());
    Ok(events)
}

fn push_chanukah(year: i32, events: &mut Vec<HolidayEvent>) -> Result<(), HolidayError> {
    let candles_flags = F::MINOR_HOLIDAY | F::CHANUKAH_CANDLES;
    let emoji = Some(CHANUKAH_EMOJI);

    events.push(
        HolidayEvent::new(
            HebrewDate::new(year, Kislev, 24)?,
            "Chanukah: 1 Candle",
            F::EREV | candles_flags,
            emoji,
        )
        .with_chanukah_day(0),
    );
    for candles in 2..=6u8 {
        events.push(
            HolidayEvent::new(
                HebrewDate::new(year, Kislev, 23 + candles)?,
                format!("Chanukah: {candles} Candles"),
                candles_flags,
                emoji,
            )
            .with_chanukah_day(candles - 1),
        );
    }

    let seventh = if short_kislev(year) {
        HebrewDate::new(year, Tevet, 1)?
    } else {
        HebrewDate::new(year, Kislev, 30)?
    };
    let eighth = seventh.next();
    events.push(HolidayEvent::new(seventh, "Chag HaBanot", F::MINOR_HOLIDAY, None));
    events.push(
        HolidayEvent::new(seventh, "Chanukah: 7 Candles", candles_flags, emoji).with_chanukah_day(6),
    );
    events.push(
        HolidayEvent::new(eighth, "Chanukah: 8 Candles", candles_flags, emoji).with_chanukah_day(7),
    );
    events.push(
        HolidayEvent::new(eighth.next(), "Chanukah: 8th Day", F::MINOR_HOLIDAY, emoji)
            .with_chanukah_day(8),
    );
    Ok(())
}

fn push_three_weeks(year: i32, events: &mut Vec<HolidayEvent>) -> Result<(), HolidayError> {
    let mut tammuz17 = HebrewDate::new(year, Tamuz, 17)?;
    if tammuz17.weekday() == Weekday::Sat {
        tammuz17 = tammuz17.next();
    }
    events.push(HolidayEvent::new(tammuz17, "Tzom Tammuz", F::MINOR_FAST, None));

    let mut av9 = HebrewDate::new(year, Av, 9)?;
    let mut title = String::from("Tish'a B'Av");
    if av9.weekday() == Weekday::Sat {
        av9 = av9.next();
        title.push_str(" (observed)");
    }
    let synagogue = Some(SYNAGOGUE_EMOJI);
    events.push(HolidayEvent::new(
        shabbat_on_or_before(av9.abs()),
        "Shabbat Chazon",
        F::SPECIAL_SHABBAT,
        synagogue,
    ));
    events.push(HolidayEvent::new(
        av9.prev(),
        "Erev Tish'a B'Av",
        F::EREV | F::MAJOR_FAST,
        None,
    ));
    events.push(HolidayEvent::new(av9, title, F::MAJOR_FAST, None));
    events.push(HolidayEvent::new(
        shabbat_on_or_before(av9.abs() + 7),
        "Shabbat Nachamu",
        F::SPECIAL_SHABBAT,
        synagogue,
    ));
    Ok(())
}

fn push_modern(
    year: i32,
    pesach: HebrewDate,
    events: &mut Vec<HolidayEvent>,
) -> Result<(), HolidayError> {
    let flag = Some(ISRAEL_EMOJI);

    // first observed in 1948
    if year >= 5708 {
        let day = match pesach.weekday() {
            Weekday::Sun => 2,
            Weekday::Sat => 3,
            _ if year < 5764 => 4,
            Weekday::Tue => 5,
            _ => 4,
        };
        let zikaron = HebrewDate::new(year, Iyyar, day)?;
        events.push(HolidayEvent::new(zikaron, "Yom HaZikaron", F::MODERN_HOLIDAY, flag));
        events.push(HolidayEvent::new(
            zikaron.next(),
            "Yom HaAtzma'ut",
            F::MODERN_HOLIDAY,
            flag,
        ));
    }

    // first observed in 1951; kept off Friday and Sunday
    if year >= 5711 {
        let mut shoah = HebrewDate::new(year, Nisan, 27)?;
        match shoah.weekday() {
            Weekday::Fri => shoah = shoah.prev(),
            Weekday::Sun => shoah = shoah.next(),
            _ => {}
        }
        events.push(HolidayEvent::new(shoah, "Yom HaShoah", F::MODERN_HOLIDAY, None));
    }

    for h in MODERN_HOLIDAYS.iter().filter(|h| year >= h.first_year) {
        let mut date = HebrewDate::new(year, h.month, h.day)?;
        let weekday = date.weekday();
        date = match (h.postpone, weekday) {
            (Postpone::WeekendToSunday, Weekday::Fri) => date.add_days(2),
            (Postpone::WeekendToSunday | Postpone::SaturdayToSunday, Weekday::Sat) => date.next(),
            (Postpone::WeekendToThursday, Weekday::Fri | Weekday::Sat) => {
                date.on_or_before(Weekday::Thu)
            }
            _ => date,
        };
        let mut flags = F::MODERN_HOLIDAY;
        if !h.chul {
            flags |= F::IL_ONLY;
        }
        let emoji = if h.suppress_emoji { None } else { flag };
        events.push(HolidayEvent::new(date, h.desc, flags, emoji));
    }
    Ok(())
}

fn push_rosh_chodesh(year: i32, events: &mut Vec<HolidayEvent>) -> Result<(), HolidayError> {
    let months = months_in_year(year);
    let emoji = Some(ROSH_CHODESH_EMOJI);

    for num in 1..=months {
        let month = HMonth::from_number(num)?;
        // Nisan follows the last Adar of the same year
        let prev = HMonth::from_number(if num == 1 { months } else { num - 1 })?;
        let desc = format!("Rosh Chodesh {}", month_name(year, month)?);

        if luach_hdate::days_in_month(prev, year) == 30 {
            events.push(HolidayEvent::new(
                HebrewDate::new(year, prev, 30)?,
                desc.clone(),
                F::ROSH_CHODESH,
                emoji,
            ));
            events.push(HolidayEvent::new(
                HebrewDate::new(year, month, 1)?,
                desc,
                F::ROSH_CHODESH,
                emoji,
            ));
        } else if month != Tishrei {
            events.push(HolidayEvent::new(
                HebrewDate::new(year, month, 1)?,
                desc,
                F::ROSH_CHODESH,
                emoji,
            ));
        }

        // Tishrei is never announced
        if month == Elul {
            continue;
        }
        let next = next_month(year, month)?;
        events.push(HolidayEvent::new(
            shabbat_on_or_before(HebrewDate::new(year, month, 29)?.abs()),
            format!("Shabbat Mevarchim Chodesh {}", month_name(year, next)?),
            F::SHABBAT_MEVARCHIM,
            None,
        ));
    }
    Ok(())
}

fn push_yom_kippur_katan(year: i32, events: &mut Vec<HolidayEvent>) -> Result<(), HolidayError> {
    // no fasting in Nisan, so the first one precedes Sivan
    for num in Iyyar.number()..=months_in_year(year) {
        let month = HMonth::from_number(num)?;
        let next = next_month(year, month)?;
        // skipped before Rosh Hashana, after Yom Kippur and during Chanukah
        if matches!(next, Tishrei | Cheshvan | Tevet) {
            continue;
        }
        let mut date = HebrewDate::new(year, month, 29)?;
        if matches!(date.weekday(), Weekday::Fri | Weekday::Sat) {
            date = date.on_or_before(Weekday::Thu);
        }
        events.push(HolidayEvent::new(
            date,
            format!("Yom Kippur Katan {}", month_name(year, next)?),
            F::MINOR_FAST | F::YOM_KIPPUR_KATAN,
            None,
        ));
    }
    Ok(())
}
