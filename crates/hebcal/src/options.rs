//! Configuration for calendar generation.

use luach_hdate::{HMonth, HebrewDate};
use luach_holidays::HolidayFlags;

use crate::error::CalError;
use crate::range::{check_num_years, check_year};
use crate::zmanim::Location;

/// A yahrzeit to list every year on its observed date.
#[derive(Debug, Clone, PartialEq)]
pub struct Yahrzeit {
    /// Title of the generated event, e.g. "Yahrzeit of Rivka bat Avraham".
    pub name: String,
    /// Date of death.
    pub date: HebrewDate,
}

impl Yahrzeit {
    pub fn new(name: impl Into<String>, date: HebrewDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// A recurring event on a fixed Hebrew month and day.
///
/// Skipped in years where the day does not exist (Cheshvan 30, Kislev 30).
#[derive(Debug, Clone, PartialEq)]
pub struct UserEvent {
    /// Title of the generated event.
    pub desc: String,
    pub month: HMonth,
    pub day: u8,
}

impl UserEvent {
    pub fn new(desc: impl Into<String>, month: HMonth, day: u8) -> Self {
        Self {
            desc: desc.into(),
            month,
            day,
        }
    }
}

/// Declares `with_*` setters and getters for boolean feature toggles.
macro_rules! toggles {
    ($($(#[$doc:meta])* $field:ident => $setter:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $setter(mut self, on: bool) -> Self {
                self.$field = on;
                self
            }

            $(#[$doc])*
            pub fn $field(&self) -> bool {
                self.$field
            }
        )+
    };
}

/// Everything that controls one call to
/// [`HebrewCalendar::generate`](crate::HebrewCalendar::generate).
///
/// The range is, in order of precedence: an explicit
/// [`start`](CalOptions::with_range)/end pair; a Hebrew year and count; a
/// Gregorian year and count, optionally narrowed to one month. Without a
/// year the current one is used, which makes the output depend on the
/// clock.
///
/// # Example
///
/// ```ignore
/// let opts = CalOptions::new()
///     .with_year(5784)
///     .with_hebrew_year(true)
///     .with_sedrot(true)
///     .with_il(true);
/// opts.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalOptions {
    location: Option<Location>,
    year: Option<i32>,
    is_hebrew_year: bool,
    num_years: u32,
    month: Option<u8>,
    start: Option<HebrewDate>,
    end: Option<HebrewDate>,
    candle_lighting: bool,
    candle_lighting_mins: i32,
    havdalah_mins: Option<u32>,
    havdalah_deg: Option<f64>,
    sedrot: bool,
    daily_sedra: bool,
    il: bool,
    no_minor_fast: bool,
    no_modern: bool,
    no_rosh_chodesh: bool,
    shabbat_mevarchim: bool,
    no_special_shabbat: bool,
    no_holidays: bool,
    daf_yomi: bool,
    mishna_yomi: bool,
    yerushalmi_yomi: bool,
    omer: bool,
    molad: bool,
    add_hebrew_dates: bool,
    add_hebrew_dates_for_events: bool,
    yom_kippur_katan: bool,
    mask: Option<HolidayFlags>,
    locale: String,
    yahrzeits: Vec<Yahrzeit>,
    user_events: Vec<UserEvent>,
}

impl CalOptions {
    /// Diaspora holidays for the current Gregorian year, English titles,
    /// no candle lighting.
    pub fn new() -> Self {
        Self {
            location: None,
            year: None,
            is_hebrew_year: false,
            num_years: 1,
            month: None,
            start: None,
            end: None,
            candle_lighting: false,
            candle_lighting_mins: 18,
            havdalah_mins: None,
            havdalah_deg: None,
            sedrot: false,
            daily_sedra: false,
            il: false,
            no_minor_fast: false,
            no_modern: false,
            no_rosh_chodesh: false,
            shabbat_mevarchim: false,
            no_special_shabbat: false,
            no_holidays: false,
            daf_yomi: false,
            mishna_yomi: false,
            yerushalmi_yomi: false,
            omer: false,
            molad: false,
            add_hebrew_dates: false,
            add_hebrew_dates_for_events: false,
            yom_kippur_katan: false,
            mask: None,
            locale: String::from("en"),
            yahrzeits: Vec::new(),
            user_events: Vec::new(),
        }
    }

    /// Sets the location for candle lighting. A location in Israel also
    /// selects the Israeli schedule.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the Gregorian or Hebrew year to generate.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Interprets the year as a Hebrew year.
    pub fn with_hebrew_year(mut self, on: bool) -> Self {
        self.is_hebrew_year = on;
        self
    }

    /// Number of consecutive years to generate (default 1).
    pub fn with_num_years(mut self, n: u32) -> Self {
        self.num_years = n;
        self
    }

    /// Restricts a Gregorian year to one month (1..=12).
    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    /// Uses an explicit inclusive range instead of a year.
    pub fn with_range(mut self, start: HebrewDate, end: HebrewDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Sets only the start of the range; [`validate`](Self::validate)
    /// fails unless an end is also set.
    pub fn with_start(mut self, start: HebrewDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets only the end of the range.
    pub fn with_end(mut self, end: HebrewDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Minutes before sunset to light candles (default 18). The sign is
    /// ignored.
    pub fn with_candle_lighting_mins(mut self, mins: i32) -> Self {
        self.candle_lighting_mins = mins;
        self
    }

    /// Havdalah a fixed number of minutes after sunset, typically 42, 50
    /// or 72. Zero means unset.
    pub fn with_havdalah_mins(mut self, mins: u32) -> Self {
        self.havdalah_mins = Some(mins);
        self
    }

    /// Havdalah when the sun is `degrees` below the horizon. Zero means
    /// unset; the default is 8.5.
    pub fn with_havdalah_deg(mut self, degrees: f64) -> Self {
        self.havdalah_deg = Some(degrees);
        self
    }

    /// Filters holidays by an explicit flag mask instead of the feature
    /// toggles. Flags in the mask also switch on the matching features.
    pub fn with_mask(mut self, mask: HolidayFlags) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Locale id for rendered titles (default "en"; "he" renders Hebrew
    /// dates in Hebrew letters).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Adds a yahrzeit.
    pub fn with_yahrzeit(mut self, yahrzeit: Yahrzeit) -> Self {
        self.yahrzeits.push(yahrzeit);
        self
    }

    /// Adds a recurring user event.
    pub fn with_user_event(mut self, event: UserEvent) -> Self {
        self.user_events.push(event);
        self
    }

    toggles! {
        /// Candle-lighting and Havdalah times; requires a location.
        candle_lighting => with_candle_lighting;
        /// Weekly Torah portion on Saturdays.
        sedrot => with_sedrot;
        /// The coming Saturday's portion on every day.
        daily_sedra => with_daily_sedra;
        /// Israeli holiday and reading schedule.
        il => with_il;
        /// Suppresses minor fasts.
        no_minor_fast => with_no_minor_fast;
        /// Suppresses modern Israeli holidays.
        no_modern => with_no_modern;
        /// Suppresses Rosh Chodesh.
        no_rosh_chodesh => with_no_rosh_chodesh;
        /// Shabbat Mevarchim on the Saturday before Rosh Chodesh.
        shabbat_mevarchim => with_shabbat_mevarchim;
        /// Suppresses special Shabbatot and Shabbat Mevarchim.
        no_special_shabbat => with_no_special_shabbat;
        /// Suppresses all holidays.
        no_holidays => with_no_holidays;
        /// Daf Yomi citations.
        daf_yomi => with_daf_yomi;
        /// Mishna Yomi citations.
        mishna_yomi => with_mishna_yomi;
        /// Yerushalmi Yomi citations.
        yerushalmi_yomi => with_yerushalmi_yomi;
        /// Days of the Omer.
        omer => with_omer;
        /// Molad announcement on Shabbat Mevarchim.
        molad => with_molad;
        /// The Hebrew date on every day.
        add_hebrew_dates => with_add_hebrew_dates;
        /// The Hebrew date on days with other events.
        add_hebrew_dates_for_events => with_add_hebrew_dates_for_events;
        /// Yom Kippur Katan.
        yom_kippur_katan => with_yom_kippur_katan;
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn is_hebrew_year(&self) -> bool {
        self.is_hebrew_year
    }

    pub fn num_years(&self) -> u32 {
        self.num_years
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn start(&self) -> Option<HebrewDate> {
        self.start
    }

    pub fn end(&self) -> Option<HebrewDate> {
        self.end
    }

    pub fn candle_lighting_mins(&self) -> i32 {
        self.candle_lighting_mins
    }

    pub fn havdalah_mins(&self) -> Option<u32> {
        self.havdalah_mins
    }

    pub fn havdalah_deg(&self) -> Option<f64> {
        self.havdalah_deg
    }

    pub fn mask(&self) -> Option<HolidayFlags> {
        self.mask
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn yahrzeits(&self) -> &[Yahrzeit] {
        &self.yahrzeits
    }

    pub fn user_events(&self) -> &[UserEvent] {
        &self.user_events
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// - [`CalError::MissingLocation`] for candle lighting without a location.
    /// - [`CalError::ConflictingHavdalah`] when both Havdalah minutes and
    ///   degrees are non-zero.
    /// - [`CalError::UnpairedRange`] when only one end of the range is set.
    /// - [`CalError::InvalidRange`] when the range is reversed.
    /// - [`CalError::InvalidHebrewYear`] for a Hebrew year below 1.
    /// - [`CalError::InvalidMonth`] for a month outside 1..=12.
    pub fn validate(&self) -> Result<(), CalError> {
        if self.candle_lighting && self.location.is_none() {
            return Err(CalError::MissingLocation);
        }
        if let (Some(mins), Some(degrees)) = (self.havdalah_mins, self.havdalah_deg) {
            if mins != 0 && degrees != 0.0 {
                return Err(CalError::ConflictingHavdalah { mins, degrees });
            }
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) if start.abs() > end.abs() => {
                return Err(CalError::InvalidRange {
                    start: start.abs(),
                    end: end.abs(),
                });
            }
            (Some(_), None) | (None, Some(_)) => return Err(CalError::UnpairedRange),
            _ => {}
        }
        check_num_years(self.num_years)?;
        if let Some(year) = self.year {
            if self.is_hebrew_year && year < 1 {
                return Err(CalError::InvalidHebrewYear { year });
            }
            check_year(year, self.num_years)?;
        }
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(CalError::InvalidMonth { month });
            }
        }
        Ok(())
    }
}

impl Default for CalOptions {
    fn default() -> Self {
        Self::new()
    }
}
