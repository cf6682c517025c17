//! Pure conversion functions: TOML config and CLI arguments -> crate API types.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

use luach_hdate::{GregorianDate, HMonth, HebrewDate};
use luach_hebcal::{CalOptions, UserEvent, Yahrzeit};

use crate::cli::CalendarArgs;
use crate::config::{CalendarToml, LuachConfig, UserEventToml, YahrzeitToml};

static GREGORIAN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d{1,4})-(\d{1,2})-(\d{1,2})$").expect("Gregorian date pattern is valid")
});

static HEBREW_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+(.+?)\s+(\d{1,4})$").expect("Hebrew date pattern is valid")
});

/// A date as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Gregorian(GregorianDate),
    Hebrew(HebrewDate),
}

impl DateInput {
    /// The Hebrew date of this input.
    pub fn hebrew(self) -> HebrewDate {
        match self {
            Self::Gregorian(g) => HebrewDate::from_gregorian(g),
            Self::Hebrew(h) => h,
        }
    }
}

/// Parses `YYYY-MM-DD` as a Gregorian date, or "day month year" such as
/// "15 Cheshvan 5769" or "30 Adar I 5774" as a Hebrew date.
pub fn parse_date(s: &str) -> Result<DateInput> {
    let s = s.trim();
    if let Some(c) = GREGORIAN_DATE.captures(s) {
        let year: i32 = c[1].parse().context("invalid Gregorian year")?;
        let month: u8 = c[2].parse().context("invalid Gregorian month")?;
        let day: u8 = c[3].parse().context("invalid Gregorian day")?;
        let date = GregorianDate::new(year, month, day)
            .with_context(|| format!("invalid Gregorian date: {s:?}"))?;
        return Ok(DateInput::Gregorian(date));
    }
    if let Some(c) = HEBREW_DATE.captures(s) {
        let day: u8 = c[1].parse().context("invalid Hebrew day")?;
        let month: HMonth = c[2]
            .parse()
            .with_context(|| format!("unknown Hebrew month: {:?}", &c[2]))?;
        let year: i32 = c[3].parse().context("invalid Hebrew year")?;
        let date = HebrewDate::new(year, month, day)
            .with_context(|| format!("invalid Hebrew date: {s:?}"))?;
        return Ok(DateInput::Hebrew(date));
    }
    bail!("unrecognised date {s:?}: expected YYYY-MM-DD or e.g. \"15 Cheshvan 5769\"")
}

/// Fails if the config asks for candle-lighting times, which need a sun
/// calculator this binary does not have.
pub fn reject_candle_options(cal: &CalendarToml) -> Result<()> {
    if cal.candle_lighting
        || cal.candle_lighting_mins.is_some()
        || cal.havdalah_mins.is_some()
        || cal.havdalah_deg.is_some()
    {
        bail!(
            "candle lighting is not supported by the luach binary: remove candle_lighting, \
             candle_lighting_mins, havdalah_mins and havdalah_deg from [calendar]"
        );
    }
    Ok(())
}

/// The `count` Hebrew years after `year`.
pub fn following_years(year: i32, count: u32) -> Result<RangeInclusive<i32>> {
    let count = i32::try_from(count).context("too many years requested")?;
    year.checked_add(1)
        .zip(year.checked_add(count))
        .map(|(first, last)| first..=last)
        .with_context(|| format!("{count} years after {year} is out of range"))
}

/// Builds a [`Yahrzeit`] from its TOML entry.
pub fn build_yahrzeit(y: &YahrzeitToml) -> Result<Yahrzeit> {
    let date = parse_date(&y.date)
        .with_context(|| format!("invalid date for yahrzeit {:?}", y.name))?
        .hebrew();
    Ok(Yahrzeit::new(&y.name, date))
}

/// Builds a [`UserEvent`] from its TOML entry.
pub fn build_user_event(e: &UserEventToml) -> Result<UserEvent> {
    let month: HMonth = e
        .month
        .parse()
        .with_context(|| format!("unknown month {:?} for event {:?}", e.month, e.desc))?;
    if !(1..=30).contains(&e.day) {
        bail!("day {} of event {:?} must be 1..=30", e.day, e.desc);
    }
    Ok(UserEvent::new(&e.desc, month, e.day))
}

/// Builds [`CalOptions`] from the TOML config, with CLI flags taking
/// precedence over file values.
pub fn build_cal_options(config: &LuachConfig, args: &CalendarArgs) -> Result<CalOptions> {
    let cal = &config.calendar;
    reject_candle_options(cal)?;

    let mut opts = CalOptions::new()
        .with_hebrew_year(cal.hebrew || args.hebrew)
        .with_num_years(cal.num_years)
        .with_il(cal.il || args.il)
        .with_sedrot(cal.sedrot || args.sedrot)
        .with_daily_sedra(cal.daily_sedra)
        .with_omer(cal.omer || args.omer)
        .with_molad(cal.molad || args.molad)
        .with_no_holidays(cal.no_holidays)
        .with_no_minor_fast(cal.no_minor_fast)
        .with_no_modern(cal.no_modern)
        .with_no_rosh_chodesh(cal.no_rosh_chodesh)
        .with_no_special_shabbat(cal.no_special_shabbat)
        .with_shabbat_mevarchim(cal.shabbat_mevarchim)
        .with_yom_kippur_katan(cal.yom_kippur_katan)
        .with_add_hebrew_dates(cal.add_hebrew_dates)
        .with_add_hebrew_dates_for_events(cal.add_hebrew_dates_for_events)
        .with_locale(&cal.locale);
    if let Some(year) = args.year.or(cal.year) {
        opts = opts.with_year(year);
    }
    if let Some(month) = args.month.or(cal.month) {
        opts = opts.with_month(month);
    }
    for y in &config.yahrzeits {
        opts = opts.with_yahrzeit(build_yahrzeit(y)?);
    }
    for e in &config.events {
        opts = opts.with_user_event(build_user_event(e)?);
    }
    opts.validate().context("invalid calendar configuration")?;
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn args() -> CalendarArgs {
        CalendarArgs {
            config: None,
            year: None,
            month: None,
            hebrew: false,
            il: false,
            sedrot: false,
            omer: false,
            molad: false,
            format: Format::Text,
        }
    }

    #[test]
    fn parse_gregorian_date() {
        let got = parse_date("2008-11-13").unwrap();
        assert_eq!(
            got,
            DateInput::Gregorian(GregorianDate::new(2008, 11, 13).unwrap())
        );
        assert_eq!(
            got.hebrew(),
            HebrewDate::new(5769, HMonth::Cheshvan, 15).unwrap()
        );
    }

    #[test]
    fn parse_hebrew_date() {
        assert_eq!(
            parse_date("15 Cheshvan 5769").unwrap(),
            DateInput::Hebrew(HebrewDate::new(5769, HMonth::Cheshvan, 15).unwrap())
        );
        assert_eq!(
            parse_date(" 30 Adar I 5774 ").unwrap().hebrew(),
            HebrewDate::new(5774, HMonth::Adar1, 30).unwrap()
        );
        assert_eq!(
            parse_date("10 Sh'vat 5784").unwrap().hebrew().month(),
            HMonth::Shvat
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("30 Kislev 5781").is_err());
        assert!(parse_date("15 Nosuchmonth 5769").is_err());
    }

    #[test]
    fn following_years_checks_overflow() {
        assert_eq!(following_years(5774, 3).unwrap(), 5775..=5777);
        assert!(following_years(5774, 0).unwrap().is_empty());
        assert!(following_years(5774, u32::MAX).is_err());
        let err = following_years(i32::MAX - 1, 5).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn candle_options_are_rejected() {
        let cfg: LuachConfig = toml::from_str("[calendar]\nhavdalah_mins = 50\n").unwrap();
        let err = build_cal_options(&cfg, &args()).unwrap_err();
        assert!(err.to_string().contains("candle lighting is not supported"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<LuachConfig>("[calendar]\nsedra = true\n").is_err());
    }

    #[test]
    fn cli_flags_override_config() {
        let cfg: LuachConfig = toml::from_str(
            r#"
            [calendar]
            year = 5783
            hebrew = true
            sedrot = true
            locale = "he"

            [[yahrzeit]]
            name = "Yahrzeit of Rivka"
            date = "30 Adar I 5774"

            [[event]]
            desc = "Anniversary"
            month = "Cheshvan"
            day = 30
            "#,
        )
        .unwrap();
        let mut args = args();
        args.year = Some(5784);
        args.omer = true;
        let opts = build_cal_options(&cfg, &args).unwrap();
        assert_eq!(opts.year(), Some(5784));
        assert!(opts.is_hebrew_year());
        assert!(opts.sedrot() && opts.omer());
        assert_eq!(opts.locale(), "he");
        assert_eq!(opts.yahrzeits().len(), 1);
        assert_eq!(opts.user_events()[0].month, HMonth::Cheshvan);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: LuachConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.calendar.num_years, 1);
        assert_eq!(cfg.calendar.locale, "en");
        let opts = build_cal_options(&cfg, &args()).unwrap();
        assert_eq!(opts.year(), None);
        assert!(!opts.is_hebrew_year());
    }
}
