use serde::Deserialize;

/// Top-level luach configuration, read from `luach.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Calendar generation settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Yahrzeits listed every year.
    #[serde(default, rename = "yahrzeit")]
    pub yahrzeits: Vec<YahrzeitToml>,

    /// Recurring events on a fixed Hebrew date.
    #[serde(default, rename = "event")]
    pub events: Vec<UserEventToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Gregorian or Hebrew year; the current year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub hebrew: bool,
    #[serde(default = "default_num_years")]
    pub num_years: u32,
    /// Gregorian month 1..=12; ignored for Hebrew years.
    #[serde(default)]
    pub month: Option<u8>,
    #[serde(default)]
    pub il: bool,
    #[serde(default)]
    pub sedrot: bool,
    #[serde(default)]
    pub daily_sedra: bool,
    #[serde(default)]
    pub omer: bool,
    #[serde(default)]
    pub molad: bool,
    #[serde(default)]
    pub no_holidays: bool,
    #[serde(default)]
    pub no_minor_fast: bool,
    #[serde(default)]
    pub no_modern: bool,
    #[serde(default)]
    pub no_rosh_chodesh: bool,
    #[serde(default)]
    pub no_special_shabbat: bool,
    #[serde(default)]
    pub shabbat_mevarchim: bool,
    #[serde(default)]
    pub yom_kippur_katan: bool,
    #[serde(default)]
    pub add_hebrew_dates: bool,
    #[serde(default)]
    pub add_hebrew_dates_for_events: bool,
    #[serde(default = "default_locale")]
    pub locale: String,

    // no zmanim provider in the binary: any of these is rejected in convert.rs
    #[serde(default)]
    pub candle_lighting: bool,
    #[serde(default)]
    pub candle_lighting_mins: Option<i32>,
    #[serde(default)]
    pub havdalah_mins: Option<u32>,
    #[serde(default)]
    pub havdalah_deg: Option<f64>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            year: None,
            hebrew: false,
            num_years: default_num_years(),
            month: None,
            il: false,
            sedrot: false,
            daily_sedra: false,
            omer: false,
            molad: false,
            no_holidays: false,
            no_minor_fast: false,
            no_modern: false,
            no_rosh_chodesh: false,
            no_special_shabbat: false,
            shabbat_mevarchim: false,
            yom_kippur_katan: false,
            add_hebrew_dates: false,
            add_hebrew_dates_for_events: false,
            locale: default_locale(),
            candle_lighting: false,
            candle_lighting_mins: None,
            havdalah_mins: None,
            havdalah_deg: None,
        }
    }
}

fn default_num_years() -> u32 {
    1
}
fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YahrzeitToml {
    pub name: String,
    /// Date of death, `YYYY-MM-DD` or e.g. "30 Adar I 5774".
    pub date: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEventToml {
    pub desc: String,
    /// Hebrew month name, e.g. "Cheshvan" or "Adar II".
    pub month: String,
    pub day: u8,
}
