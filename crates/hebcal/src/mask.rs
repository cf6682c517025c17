//! Resolution of options into the effective event mask and toggles.

use luach_holidays::HolidayFlags as F;

use crate::options::CalOptions;
use crate::zmanim::{Location, TZEIT_3_SMALL_STARS};

/// Holiday flags that produce a candle-lighting or Havdalah time.
pub(crate) const LIGHT_CANDLES_MASK: F = F::LIGHT_CANDLES
    .union(F::LIGHT_CANDLES_TZEIS)
    .union(F::CHANUKAH_CANDLES)
    .union(F::YOM_TOV_ENDS);

const DEFAULT_CANDLE_MINS: i32 = 18;

/// Israeli cities that light candles earlier than the usual 18 minutes.
#[rustfmt::skip]
const ISRAEL_CITY_OFFSETS: &[(&str, i32)] = &[
    ("Jerusalem", 40),
    ("Haifa", 30),
    ("Zichron Ya'akov", 30),
    ("Zichron Ya‘akov", 30),
    ("Zichron Ya’akov", 30),
    ("Zichron Yaakov", 30),
    ("Zikhron Ya'akov", 30),
    ("Zikhron Ya'aqov", 30),
    ("Zikhron Ya‘akov", 30),
    ("Zikhron Ya‘aqov", 30),
    ("Zikhron Ya’akov", 30),
    ("Zikhron Ya’aqov", 30),
    ("Zikhron Yaakov", 30),
];

/// When Havdalah is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum HavdalahTime {
    /// Minutes after sunset.
    Minutes(u32),
    /// Solar depression in degrees.
    Degrees(f64),
}

/// Candle-lighting parameters after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candles<'a> {
    pub location: &'a Location,
    /// Minutes relative to sunset; always negative.
    pub candle_mins: i32,
    pub havdalah: HavdalahTime,
}

impl<'a> Candles<'a> {
    fn resolve(opts: &CalOptions, location: &'a Location) -> Self {
        let mut mins = match opts.candle_lighting_mins() {
            0 => DEFAULT_CANDLE_MINS,
            m => m.abs(),
        };
        if location.is_israel() && mins == DEFAULT_CANDLE_MINS {
            if let Some(&(_, offset)) = ISRAEL_CITY_OFFSETS
                .iter()
                .find(|(name, _)| *name == location.name())
            {
                mins = offset;
            }
        }
        let havdalah = match (opts.havdalah_mins(), opts.havdalah_deg()) {
            (Some(m), _) if m != 0 => HavdalahTime::Minutes(m),
            (_, Some(d)) if d != 0.0 => HavdalahTime::Degrees(d.abs()),
            _ => HavdalahTime::Degrees(TZEIT_3_SMALL_STARS),
        };
        Self {
            location,
            candle_mins: -mins,
            havdalah,
        }
    }
}

/// Effective toggles for one generation run.
///
/// An explicit mask switches on every feature whose flag it contains and
/// cancels the matching suppressions; otherwise the mask is derived from
/// the toggles.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings<'a> {
    pub mask: F,
    pub il: bool,
    pub candles: Option<Candles<'a>>,
    pub sedrot: bool,
    pub daily_sedra: bool,
    pub omer: bool,
    pub molad: bool,
    pub daf_yomi: bool,
    pub mishna_yomi: bool,
    pub yerushalmi_yomi: bool,
    pub yom_kippur_katan: bool,
    pub no_holidays: bool,
    pub no_minor_fast: bool,
    pub no_modern: bool,
    pub no_rosh_chodesh: bool,
    pub no_special_shabbat: bool,
    pub shabbat_mevarchim: bool,
    pub add_hebrew_dates: bool,
    pub add_hebrew_dates_for_events: bool,
}

impl<'a> Settings<'a> {
    /// Resolves `opts`. `early_years` disables candle lighting for
    /// Gregorian years before 100.
    pub fn resolve(opts: &'a CalOptions, early_years: bool) -> Self {
        let il = opts.il() || opts.location().is_some_and(Location::is_israel);
        let candles = match opts.location() {
            Some(location) if opts.candle_lighting() && !early_years => {
                Some(Candles::resolve(opts, location))
            }
            _ => None,
        };
        let mut s = Settings {
            mask: F::empty(),
            il,
            candles,
            sedrot: opts.sedrot(),
            daily_sedra: opts.daily_sedra(),
            omer: opts.omer(),
            molad: opts.molad(),
            daf_yomi: opts.daf_yomi(),
            mishna_yomi: opts.mishna_yomi(),
            yerushalmi_yomi: opts.yerushalmi_yomi(),
            yom_kippur_katan: opts.yom_kippur_katan(),
            no_holidays: opts.no_holidays(),
            no_minor_fast: opts.no_minor_fast(),
            no_modern: opts.no_modern(),
            no_rosh_chodesh: opts.no_rosh_chodesh(),
            no_special_shabbat: opts.no_special_shabbat(),
            shabbat_mevarchim: opts.shabbat_mevarchim(),
            add_hebrew_dates: opts.add_hebrew_dates(),
            add_hebrew_dates_for_events: opts.add_hebrew_dates_for_events(),
        };
        s.mask = match opts.mask() {
            Some(mask) if !mask.is_empty() => {
                s.apply_explicit(mask);
                mask
            }
            _ => s.derive(),
        };
        s
    }

    fn apply_explicit(&mut self, m: F) {
        if m.contains(F::ROSH_CHODESH) {
            self.no_rosh_chodesh = false;
        }
        if m.contains(F::SPECIAL_SHABBAT) {
            self.no_special_shabbat = false;
        }
        if m.contains(F::MODERN_HOLIDAY) {
            self.no_modern = false;
        }
        if m.contains(F::MINOR_FAST) {
            self.no_minor_fast = false;
        }
        self.sedrot |= m.contains(F::PARSHA_HASHAVUA);
        self.daf_yomi |= m.contains(F::DAF_YOMI);
        self.omer |= m.contains(F::OMER_COUNT);
        self.shabbat_mevarchim |= m.contains(F::SHABBAT_MEVARCHIM);
        self.mishna_yomi |= m.contains(F::MISHNA_YOMI);
        self.yom_kippur_katan |= m.contains(F::YOM_KIPPUR_KATAN);
        self.yerushalmi_yomi |= m.contains(F::YERUSHALMI_YOMI);
    }

    fn derive(&self) -> F {
        let mut mask = F::empty();
        if !self.no_holidays {
            mask |= F::ROSH_CHODESH
                | F::YOM_TOV_ENDS
                | F::MINOR_FAST
                | F::SPECIAL_SHABBAT
                | F::MODERN_HOLIDAY
                | F::MAJOR_FAST
                | F::MINOR_HOLIDAY
                | F::EREV
                | F::CHOL_HAMOED
                | F::LIGHT_CANDLES
                | F::LIGHT_CANDLES_TZEIS
                | F::CHANUKAH_CANDLES;
        }
        if self.candles.is_some() {
            mask |= F::LIGHT_CANDLES | F::LIGHT_CANDLES_TZEIS | F::YOM_TOV_ENDS;
        }
        if self.no_rosh_chodesh {
            mask.remove(F::ROSH_CHODESH);
        }
        if self.no_modern {
            mask.remove(F::MODERN_HOLIDAY);
        }
        if self.no_minor_fast {
            mask.remove(F::MINOR_FAST);
        }
        // Shabbat Mevarchim stays off even if requested
        let no_special = self.no_special_shabbat;
        if no_special {
            mask.remove(F::SPECIAL_SHABBAT);
        }
        mask |= if self.il { F::IL_ONLY } else { F::CHUL_ONLY };
        for (on, flag) in [
            (self.sedrot, F::PARSHA_HASHAVUA),
            (self.daf_yomi, F::DAF_YOMI),
            (self.mishna_yomi, F::MISHNA_YOMI),
            (self.yerushalmi_yomi, F::YERUSHALMI_YOMI),
            (self.omer, F::OMER_COUNT),
            (self.shabbat_mevarchim && !no_special, F::SHABBAT_MEVARCHIM),
            (self.yom_kippur_katan, F::YOM_KIPPUR_KATAN),
        ] {
            if on {
                mask |= flag;
            }
        }
        mask
    }

    /// True if the coming Saturday's portion is needed.
    pub fn needs_sedra(&self) -> bool {
        self.sedrot || self.daily_sedra
    }
}
