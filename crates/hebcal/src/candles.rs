//! Candle-lighting, Havdalah and fast-boundary events.

use chrono::{NaiveTime, Weekday};
use luach_hdate::{HMonth, HebrewDate};
use luach_holidays::{HolidayEvent, HolidayFlags as F};

use crate::event::CalEvent;
use crate::mask::{Candles, HavdalahTime};
use crate::zmanim::{ALOT_HASHACHAR, CHANUKAH_DUSK, TZEIT_3_MEDIUM_STARS, Zman, Zmanim};

fn time_of(
    zmanim: &dyn Zmanim,
    candles: &Candles<'_>,
    date: HebrewDate,
    zman: Zman,
) -> Option<NaiveTime> {
    zmanim.time(candles.location, date.to_gregorian(), zman)
}

/// Candle lighting or Havdalah on `date`, for Shabbat or for the holiday
/// `holiday` falling that day.
///
/// Friday is always candle lighting before sunset. Saturday, the second
/// night of yom tov and Chanukah after Shabbat use the Havdalah time; a
/// holiday ending that day is titled Havdalah.
pub(crate) fn candle_event(
    zmanim: &dyn Zmanim,
    candles: &Candles<'_>,
    date: HebrewDate,
    holiday: Option<&HolidayEvent>,
) -> Option<CalEvent> {
    let weekday = date.weekday();
    let mut at_havdalah = weekday == Weekday::Sat;
    let mut havdalah_title = false;
    let flags = match holiday {
        Some(ev) => {
            let flags = ev.flags();
            if weekday != Weekday::Fri {
                if flags.intersects(F::LIGHT_CANDLES_TZEIS | F::CHANUKAH_CANDLES) {
                    at_havdalah = true;
                } else if flags.contains(F::YOM_TOV_ENDS) {
                    at_havdalah = true;
                    havdalah_title = true;
                }
            }
            flags
        }
        None if weekday == Weekday::Sat => {
            havdalah_title = true;
            F::LIGHT_CANDLES_TZEIS
        }
        None => F::LIGHT_CANDLES,
    };

    let (zman, mins) = match (at_havdalah, candles.havdalah) {
        (false, _) => (Zman::SunsetOffset(candles.candle_mins), None),
        (true, HavdalahTime::Minutes(m)) => {
            (Zman::SunsetOffset(i32::try_from(m).unwrap_or(i32::MAX)), Some(m))
        }
        (true, HavdalahTime::Degrees(d)) => (Zman::Dusk(d), None),
    };
    let time = time_of(zmanim, candles, date, zman)?;
    Some(if havdalah_title {
        CalEvent::Havdalah {
            date,
            time,
            mins,
            flags,
        }
    } else {
        CalEvent::CandleLighting { date, time, flags }
    })
}

/// A weekday Chanukah candle with its time at dusk.
///
/// Returns `None` on Friday and Saturday, when the Chanukah candles are
/// lit with the Shabbat candle lighting or Havdalah, and where the sun
/// does not set.
pub(crate) fn chanukah_event(
    zmanim: &dyn Zmanim,
    candles: &Candles<'_>,
    event: &HolidayEvent,
) -> Option<CalEvent> {
    let date = event.date();
    if matches!(date.weekday(), Weekday::Fri | Weekday::Sat) {
        return None;
    }
    let time = time_of(zmanim, candles, date, Zman::Dusk(CHANUKAH_DUSK))?;
    Some(CalEvent::ChanukahCandles {
        event: event.clone(),
        time,
    })
}

/// Start and end of the fast `event`.
///
/// Tish'a B'Av begins at sunset on its eve and ends at nightfall; minor
/// fasts run from dawn to nightfall. A fast on Friday or on Erev Pesach
/// has no end event, since Shabbat or the seder follows. Yom Kippur gets
/// neither: its candle lighting and Havdalah mark it.
pub(crate) fn fast_start_end(
    zmanim: &dyn Zmanim,
    candles: &Candles<'_>,
    event: &HolidayEvent,
) -> (Option<CalEvent>, Option<CalEvent>) {
    let date = event.date();
    let desc = event.desc();
    let begins = |zman| {
        time_of(zmanim, candles, date, zman).map(|time| CalEvent::FastBegins {
            event: event.clone(),
            time,
        })
    };
    let ends = || {
        time_of(zmanim, candles, date, Zman::Dusk(TZEIT_3_MEDIUM_STARS)).map(|time| {
            CalEvent::FastEnds {
                event: event.clone(),
                time,
            }
        })
    };

    if desc == "Yom Kippur" {
        (None, None)
    } else if desc == "Erev Tish'a B'Av" {
        (begins(Zman::SunsetOffset(0)), None)
    } else if desc.starts_with("Tish'a B'Av") {
        (None, ends())
    } else {
        let erev_pesach = date.month() == HMonth::Nisan && date.day() == 14;
        let end = if date.weekday() == Weekday::Fri || erev_pesach {
            None
        } else {
            ends()
        };
        (begins(Zman::Dawn(ALOT_HASHACHAR)), end)
    }
}
