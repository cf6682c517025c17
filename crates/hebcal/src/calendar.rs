//! Day-by-day calendar generation.

use chrono::Weekday;
use luach_hdate::{HMonth, HebrewDate, Molad, hebrew_to_abs, months_in_year, yahrzeit};
use luach_holidays::{HolidayEvent, HolidayFlags as F, holidays_for_year};
use luach_sedra::Sedra;
use tracing::{debug, trace};

use crate::candles::{candle_event, chanukah_event, fast_start_end};
use crate::cycle::{CycleKind, StudyCycle};
use crate::error::CalError;
use crate::event::{CalEvent, EventRecord};
use crate::locale::{Locale, NoTranslation};
use crate::mask::{Candles, LIGHT_CANDLES_MASK, Settings};
use crate::options::CalOptions;
use crate::range;
use crate::zmanim::Zmanim;

type Timing<'z, 'c> = Option<(&'z dyn Zmanim, &'c Candles<'c>)>;

/// Calendar generator with its external collaborators.
///
/// Sun times, translations and study cycles are supplied by the caller;
/// the generator itself only does calendar arithmetic.
///
/// ```ignore
/// let calendar = HebrewCalendar::new()
///     .with_zmanim(&noaa)
///     .with_cycle(&daf_yomi);
/// let events = calendar.generate(&opts)?;
/// ```
pub struct HebrewCalendar<'a> {
    zmanim: Option<&'a dyn Zmanim>,
    locale: &'a dyn Locale,
    cycles: Vec<&'a dyn StudyCycle>,
}

impl Default for HebrewCalendar<'_> {
    fn default() -> Self {
        Self {
            zmanim: None,
            locale: &NoTranslation,
            cycles: Vec::new(),
        }
    }
}

impl<'a> HebrewCalendar<'a> {
    /// Creates a generator with no sun times, no translations and no study
    /// cycles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider of candle-lighting, Havdalah and fast times.
    pub fn with_zmanim(mut self, zmanim: &'a dyn Zmanim) -> Self {
        self.zmanim = Some(zmanim);
        self
    }

    /// Sets the translation tables used by [`records`](Self::records).
    pub fn with_locale(mut self, locale: &'a dyn Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Registers a study cycle. A later cycle of the same kind replaces an
    /// earlier one.
    pub fn with_cycle(mut self, cycle: &'a dyn StudyCycle) -> Self {
        self.cycles.retain(|c| c.kind() != cycle.kind());
        self.cycles.push(cycle);
        self
    }

    /// Generates every event of the range selected by `opts`, in date
    /// order.
    ///
    /// Within a day the order is fixed: the Hebrew date, holidays with
    /// their fast boundaries, user events and yahrzeits, the weekly
    /// portion, the Omer, study cycles, candle lighting or Havdalah, and
    /// the molad.
    ///
    /// # Errors
    ///
    /// Returns [`CalError`] if `opts` fails validation, if candle lighting
    /// is requested without a [`Zmanim`] provider, if a study cycle is
    /// requested without a registered provider, or if a year's tables
    /// cannot be built.
    #[tracing::instrument(skip_all)]
    pub fn generate(&self, opts: &CalOptions) -> Result<Vec<CalEvent>, CalError> {
        opts.validate()?;
        let range = range::resolve(opts)?;
        let settings = Settings::resolve(opts, range.early_years);
        let timing: Timing<'_, '_> = match (settings.candles.as_ref(), self.zmanim) {
            (Some(candles), Some(zmanim)) => Some((zmanim, candles)),
            (Some(_), None) => return Err(CalError::MissingZmanim),
            (None, _) => None,
        };
        let cycles = self.requested_cycles(&settings)?;
        debug!(
            start = range.start,
            end = range.end,
            mask = ?settings.mask,
            candles = timing.is_some(),
            "generating calendar"
        );

        let mut events = Vec::new();
        let mut year: Option<YearTables> = None;
        for abs in range.start..=range.end {
            let date = HebrewDate::from_abs(abs);
            let tables = match year.take() {
                Some(t) if t.year == date.year() => t,
                _ => YearTables::build(date.year(), &settings, opts)?,
            };
            let day = generate_day(date, &settings, timing, &tables, &cycles)?;
            if settings.add_hebrew_dates
                || (settings.add_hebrew_dates_for_events && !day.is_empty())
            {
                events.push(CalEvent::HebrewDate(date));
            }
            events.extend(day);
            year = Some(tables);
        }
        debug!(events = events.len(), "calendar generated");
        Ok(events)
    }

    /// Renders `events` in the locale named by `opts`.
    pub fn records(&self, events: &[CalEvent], opts: &CalOptions) -> Vec<EventRecord> {
        events
            .iter()
            .map(|ev| ev.to_record(self.locale, opts.locale()))
            .collect()
    }

    fn requested_cycles(
        &self,
        settings: &Settings<'_>,
    ) -> Result<Vec<&'a dyn StudyCycle>, CalError> {
        [
            (settings.daf_yomi, CycleKind::DafYomi),
            (settings.mishna_yomi, CycleKind::MishnaYomi),
            (settings.yerushalmi_yomi, CycleKind::YerushalmiYomi),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, kind)| {
            self.cycles
                .iter()
                .copied()
                .find(|c| c.kind() == kind)
                .ok_or(CalError::MissingCycle { kind })
        })
        .collect()
    }
}

/// Per-Hebrew-year state, rebuilt whenever the scan crosses Rosh Hashana.
struct YearTables {
    year: i32,
    holidays: Vec<HolidayEvent>,
    sedra: Option<Sedra>,
    omer: Option<(i64, i64)>,
    user: Vec<CalEvent>,
}

impl YearTables {
    fn build(year: i32, settings: &Settings<'_>, opts: &CalOptions) -> Result<Self, CalError> {
        let holidays = holidays_for_year(year, settings.il)?;
        let sedra = if settings.needs_sedra() {
            Some(Sedra::new(year, settings.il)?)
        } else {
            None
        };
        let omer = settings.omer.then(|| {
            (
                hebrew_to_abs(year, HMonth::Nisan, 16),
                hebrew_to_abs(year, HMonth::Sivan, 5),
            )
        });

        let mut user = Vec::with_capacity(opts.yahrzeits().len() + opts.user_events().len());
        for y in opts.yahrzeits() {
            match yahrzeit(year, &y.date) {
                Ok(date) => user.push(CalEvent::User {
                    date,
                    desc: y.name.clone(),
                }),
                Err(e) => debug!(name = %y.name, year, error = %e, "skipping yahrzeit"),
            }
        }
        for ev in opts.user_events() {
            // 30 Cheshvan and 30 Kislev exist only in some years
            match HebrewDate::new(year, ev.month, ev.day) {
                Ok(date) => user.push(CalEvent::User {
                    date,
                    desc: ev.desc.clone(),
                }),
                Err(e) => trace!(desc = %ev.desc, year, error = %e, "skipping user event"),
            }
        }

        debug!(year, holidays = holidays.len(), user = user.len(), "built year tables");
        Ok(Self {
            year,
            holidays,
            sedra,
            omer,
            user,
        })
    }
}

fn generate_day(
    date: HebrewDate,
    settings: &Settings<'_>,
    timing: Timing<'_, '_>,
    tables: &YearTables,
    cycles: &[&dyn StudyCycle],
) -> Result<Vec<CalEvent>, CalError> {
    let abs = date.abs();
    let weekday = date.weekday();
    let mut out = Vec::new();
    let mut candle_slot = None;

    for ev in tables.holidays.iter().filter(|ev| ev.date() == date) {
        push_holiday(ev, settings, timing, &mut out, &mut candle_slot);
    }
    out.extend(tables.user.iter().filter(|ev| ev.date() == date).cloned());

    if settings.daily_sedra || (settings.sedrot && weekday == Weekday::Sat) {
        if let Some(sedra) = &tables.sedra {
            let parsha = sedra.lookup(abs)?;
            if !parsha.is_chag() {
                out.push(CalEvent::Parsha {
                    date,
                    parsha,
                    il: settings.il,
                });
            }
        }
    }

    if let Some((begin, end)) = tables.omer {
        if (begin..=end).contains(&abs) {
            let day = u8::try_from(abs - begin + 1).unwrap_or(u8::MAX);
            out.push(CalEvent::Omer { date, day });
        }
    }

    for cycle in cycles {
        if abs < cycle.first_day() {
            continue;
        }
        if let Some(citation) = cycle.citation(&date)? {
            out.push(CalEvent::Study {
                date,
                kind: cycle.kind(),
                citation,
            });
        }
    }

    if candle_slot.is_none() && matches!(weekday, Weekday::Fri | Weekday::Sat) {
        if let Some((zmanim, candles)) = timing {
            candle_slot = candle_event(zmanim, candles, date, None);
        }
    }
    out.extend(candle_slot);

    if settings.molad
        && weekday == Weekday::Sat
        && date.month() != HMonth::Elul
        && (23..=29).contains(&date.day())
    {
        out.push(molad_event(date)?);
    }
    Ok(out)
}

/// Appends `ev` and its fast boundaries, and fills the day's candle slot
/// if the holiday lights candles.
fn push_holiday(
    ev: &HolidayEvent,
    settings: &Settings<'_>,
    timing: Timing<'_, '_>,
    out: &mut Vec<CalEvent>,
    candle_slot: &mut Option<CalEvent>,
) {
    let flags = ev.flags();
    if (!settings.yom_kippur_katan && flags.contains(F::YOM_KIPPUR_KATAN))
        || (settings.no_modern && flags.contains(F::MODERN_HOLIDAY))
    {
        return;
    }

    let major = flags.contains(F::MAJOR_FAST);
    let minor = flags.contains(F::MINOR_FAST);
    let show_fast = major || (minor && !settings.no_minor_fast);
    let (begins, ends) = match timing {
        Some((zmanim, candles)) if major || minor => fast_start_end(zmanim, candles, ev),
        _ => (None, None),
    };
    if show_fast {
        out.extend(begins);
    }

    if flags.intersects(settings.mask) {
        let mut event = CalEvent::Holiday(ev.clone());
        if let Some((zmanim, candles)) = timing {
            if flags.intersects(LIGHT_CANDLES_MASK) {
                if flags.contains(F::CHANUKAH_CANDLES) && !settings.no_holidays {
                    if let Some(timed) = chanukah_event(zmanim, candles, ev) {
                        event = timed;
                    }
                } else {
                    *candle_slot = candle_event(zmanim, candles, ev.date(), Some(ev));
                }
            }
        }
        if (settings.yom_kippur_katan && flags.contains(F::YOM_KIPPUR_KATAN))
            || !settings.no_holidays
        {
            out.push(event);
        }
    }

    if show_fast {
        out.extend(ends);
    }
}

/// Molad of the month following `date`'s month.
fn molad_event(date: HebrewDate) -> Result<CalEvent, CalError> {
    let year = date.year();
    let next = if date.month().number() == months_in_year(year) {
        HMonth::Nisan
    } else {
        HMonth::from_number(date.month().number() + 1)?
    };
    Ok(CalEvent::Molad {
        date,
        molad: Molad::new(year, next),
        month_name: HebrewDate::new(year, next, 1)?.month_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Citation;
    use crate::error::CycleError;
    use crate::zmanim::{Location, Zman};
    use chrono::NaiveTime;
    use luach_hdate::GregorianDate;

    struct FixedSun;

    impl Zmanim for FixedSun {
        fn time(&self, _: &Location, _: GregorianDate, zman: Zman) -> Option<NaiveTime> {
            let mins = match zman {
                Zman::SunsetOffset(m) => 18 * 60 + m,
                Zman::Dusk(deg) => 18 * 60 + (deg * 4.0).round() as i32,
                Zman::Dawn(_) => 5 * 60,
            };
            NaiveTime::from_hms_opt((mins / 60) as u32, (mins % 60) as u32, 0)
        }
    }

    /// Counts days since its first day; rests on the 10th of each month.
    struct Counter {
        first: i64,
    }

    impl StudyCycle for Counter {
        fn kind(&self) -> CycleKind {
            CycleKind::MishnaYomi
        }

        fn first_day(&self) -> i64 {
            self.first
        }

        fn citation(&self, date: &HebrewDate) -> Result<Option<Citation>, CycleError> {
            if date.abs() < self.first {
                return Err(CycleError::NotStarted {
                    kind: self.kind(),
                    abs: date.abs(),
                    first_day: self.first,
                });
            }
            if date.day() == 10 {
                return Ok(None);
            }
            Ok(Some(Citation::new(
                "Day",
                (date.abs() - self.first + 1).to_string(),
            )))
        }
    }

    fn hd(y: i32, m: HMonth, d: u8) -> HebrewDate {
        HebrewDate::new(y, m, d).unwrap()
    }

    fn titles(events: &[CalEvent]) -> Vec<String> {
        events.iter().map(|e| e.render(&NoTranslation, "en")).collect()
    }

    #[test]
    fn molad_after_last_adar_is_nisan() {
        // 5783 is not a leap year
        let date = hd(5783, HMonth::Adar1, 27);
        match molad_event(date).unwrap() {
            CalEvent::Molad {
                month_name, molad, ..
            } => {
                assert_eq!(month_name, "Nisan");
                assert_eq!(molad, Molad::new(5783, HMonth::Nisan));
            }
            other => panic!("unexpected {other:?}"),
        }
        match molad_event(hd(5784, HMonth::Adar1, 27)).unwrap() {
            CalEvent::Molad { month_name, .. } => assert_eq!(month_name, "Adar II"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn candles_without_zmanim_is_an_error() {
        let opts = CalOptions::new()
            .with_year(2022)
            .with_candle_lighting(true)
            .with_location(Location::new("Chicago", 41.85003, -87.65005));
        assert_eq!(
            HebrewCalendar::new().generate(&opts),
            Err(CalError::MissingZmanim)
        );
    }

    #[test]
    fn missing_cycle_provider() {
        let opts = CalOptions::new().with_year(2022).with_daf_yomi(true);
        assert_eq!(
            HebrewCalendar::new().generate(&opts),
            Err(CalError::MissingCycle {
                kind: CycleKind::DafYomi
            })
        );
    }

    #[test]
    fn cycle_starts_on_first_day_and_skips_rest_days() {
        let first = hd(5783, HMonth::Tishrei, 8);
        let counter = Counter { first: first.abs() };
        let opts = CalOptions::new()
            .with_range(hd(5783, HMonth::Tishrei, 5), hd(5783, HMonth::Tishrei, 12))
            .with_mishna_yomi(true)
            .with_no_holidays(true);
        let events = HebrewCalendar::new()
            .with_cycle(&counter)
            .generate(&opts)
            .unwrap();
        assert_eq!(titles(&events), ["Day 1", "Day 2", "Day 4", "Day 5"]);
        assert!(events.iter().all(|e| e.flags() == F::MISHNA_YOMI));
    }

    #[test]
    fn chanukah_on_weekday_carries_dusk_time() {
        let chicago = Location::new("Chicago", 41.85003, -87.65005);
        // 25 Kislev 5783 was Monday 19 December 2022
        let day = hd(5783, HMonth::Kislev, 25);
        let opts = CalOptions::new()
            .with_range(day, day)
            .with_location(chicago)
            .with_candle_lighting(true);
        let events = HebrewCalendar::new()
            .with_zmanim(&FixedSun)
            .generate(&opts)
            .unwrap();
        assert_eq!(titles(&events), ["Chanukah: 2 Candles: 6:24"]);
        assert_eq!(events[0].emoji(), "🕎");
    }

    #[test]
    fn chanukah_on_friday_uses_shabbat_candles() {
        let chicago = Location::new("Chicago", 41.85003, -87.65005);
        // 29 Kislev 5783 was Friday 23 December 2022
        let day = hd(5783, HMonth::Kislev, 29);
        let opts = CalOptions::new()
            .with_range(day, day)
            .with_location(chicago)
            .with_candle_lighting(true);
        let events = HebrewCalendar::new()
            .with_zmanim(&FixedSun)
            .generate(&opts)
            .unwrap();
        assert_eq!(titles(&events), ["Chanukah: 6 Candles", "Candle lighting: 5:42"]);
    }

    #[test]
    fn yom_kippur_katan_only_when_asked() {
        // Erev Rosh Chodesh Sivan 5784 fell on Thursday 6 June 2024
        let day = hd(5784, HMonth::Iyyar, 29);
        let opts = CalOptions::new().with_range(day, day);
        assert!(HebrewCalendar::new().generate(&opts).unwrap().is_empty());
        let opts = opts.with_yom_kippur_katan(true).with_no_holidays(true);
        let events = HebrewCalendar::new().generate(&opts).unwrap();
        assert_eq!(titles(&events), ["Yom Kippur Katan Sivan"]);
    }

    #[test]
    fn with_cycle_replaces_same_kind() {
        let a = Counter { first: 1 };
        let b = Counter { first: 2 };
        let cal = HebrewCalendar::new().with_cycle(&a).with_cycle(&b);
        assert_eq!(cal.cycles.len(), 1);
        assert_eq!(cal.cycles[0].first_day(), 2);
    }
}
