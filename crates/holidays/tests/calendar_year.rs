use chrono::Weekday;
use luach_hdate::{GregorianDate, HMonth, HebrewDate};
use luach_holidays::{
    HolidayEvent, HolidayFlags, all_holidays_for_year, holidays_for_year, holidays_on_date,
};
use proptest::prelude::*;

fn on(events: &[HolidayEvent], desc: &str) -> GregorianDate {
    events
        .iter()
        .find(|ev| ev.desc() == desc)
        .unwrap_or_else(|| panic!("{desc} missing"))
        .date()
        .to_gregorian()
}

fn greg(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

#[test]
fn yearly_counts() {
    let cases = [
        (5783, false, 105),
        (5783, true, 108),
        (5782, false, 110),
        (5782, true, 113),
        (5784, false, 109),
        (5771, false, 110),
        (5720, true, 99),
        (3763, false, 98),
        (3762, false, 104),
        (2, false, 99),
        (1, false, 99),
    ];
    for (year, il, expected) in cases {
        let events = holidays_for_year(year, il).unwrap();
        assert_eq!(events.len(), expected, "year {year} il {il}");
    }
}

fn lines(events: &[HolidayEvent]) -> Vec<String> {
    events
        .iter()
        .map(|ev| format!("{} {}", ev.date().to_gregorian(), ev.desc()))
        .collect()
}

const DIASPORA_5771: &[&str] = &[
    "2010-09-09 Rosh Hashana 5771",
    "2010-09-10 Rosh Hashana II",
    "2010-09-11 Shabbat Shuva",
    "2010-09-12 Tzom Gedaliah",
    "2010-09-17 Erev Yom Kippur",
    "2010-09-18 Yom Kippur",
    "2010-09-22 Erev Sukkot",
    "2010-09-23 Sukkot I",
    "2010-09-24 Sukkot II",
    "2010-09-25 Sukkot III (CH''M)",
    "2010-09-26 Sukkot IV (CH''M)",
    "2010-09-27 Sukkot V (CH''M)",
    "2010-09-28 Sukkot VI (CH''M)",
    "2010-09-29 Sukkot VII (Hoshana Raba)",
    "2010-09-30 Shmini Atzeret",
    "2010-10-01 Simchat Torah",
    "2010-10-02 Shabbat Mevarchim Chodesh Cheshvan",
    "2010-10-08 Rosh Chodesh Cheshvan",
    "2010-10-09 Rosh Chodesh Cheshvan",
    "2010-11-04 Yom Kippur Katan Kislev",
    "2010-11-06 Shabbat Mevarchim Chodesh Kislev",
    "2010-11-06 Sigd",
    "2010-11-07 Rosh Chodesh Kislev",
    "2010-11-08 Rosh Chodesh Kislev",
    "2010-12-01 Chanukah: 1 Candle",
    "2010-12-02 Chanukah: 2 Candles",
    "2010-12-03 Chanukah: 3 Candles",
    "2010-12-04 Chanukah: 4 Candles",
    "2010-12-04 Shabbat Mevarchim Chodesh Tevet",
    "2010-12-05 Chanukah: 5 Candles",
    "2010-12-06 Chanukah: 6 Candles",
    "2010-12-07 Chag HaBanot",
    "2010-12-07 Chanukah: 7 Candles",
    "2010-12-07 Rosh Chodesh Tevet",
    "2010-12-08 Chanukah: 8 Candles",
    "2010-12-08 Rosh Chodesh Tevet",
    "2010-12-09 Chanukah: 8th Day",
    "2010-12-17 Asara B'Tevet",
    "2011-01-01 Shabbat Mevarchim Chodesh Sh'vat",
    "2011-01-05 Yom Kippur Katan Sh'vat",
    "2011-01-06 Rosh Chodesh Sh'vat",
    "2011-01-15 Shabbat Shirah",
    "2011-01-20 Tu BiShvat",
    "2011-01-29 Shabbat Mevarchim Chodesh Adar I",
    "2011-02-03 Yom Kippur Katan Adar I",
    "2011-02-04 Rosh Chodesh Adar I",
    "2011-02-05 Rosh Chodesh Adar I",
    "2011-02-18 Purim Katan",
    "2011-02-19 Shushan Purim Katan",
    "2011-03-03 Yom Kippur Katan Adar II",
    "2011-03-05 Shabbat Mevarchim Chodesh Adar II",
    "2011-03-05 Shabbat Shekalim",
    "2011-03-06 Rosh Chodesh Adar II",
    "2011-03-07 Rosh Chodesh Adar II",
    "2011-03-17 Ta'anit Esther",
    "2011-03-19 Erev Purim",
    "2011-03-19 Shabbat Zachor",
    "2011-03-20 Purim",
    "2011-03-21 Shushan Purim",
    "2011-03-26 Shabbat Parah",
    "2011-04-02 Shabbat HaChodesh",
    "2011-04-02 Shabbat Mevarchim Chodesh Nisan",
    "2011-04-04 Yom Kippur Katan Nisan",
    "2011-04-05 Rosh Chodesh Nisan",
    "2011-04-16 Shabbat HaGadol",
    "2011-04-18 Erev Pesach",
    "2011-04-18 Ta'anit Bechorot",
    "2011-04-19 Pesach I",
    "2011-04-20 Pesach II",
    "2011-04-21 Pesach III (CH''M)",
    "2011-04-22 Pesach IV (CH''M)",
    "2011-04-23 Pesach V (CH''M)",
    "2011-04-24 Pesach VI (CH''M)",
    "2011-04-25 Pesach VII",
    "2011-04-26 Pesach VIII",
    "2011-04-30 Shabbat Mevarchim Chodesh Iyyar",
    "2011-05-02 Yom HaShoah",
    "2011-05-04 Rosh Chodesh Iyyar",
    "2011-05-05 Rosh Chodesh Iyyar",
    "2011-05-09 Yom HaZikaron",
    "2011-05-10 Yom HaAtzma'ut",
    "2011-05-18 Pesach Sheni",
    "2011-05-22 Lag BaOmer",
    "2011-05-28 Shabbat Mevarchim Chodesh Sivan",
    "2011-06-01 Yom Yerushalayim",
    "2011-06-02 Yom Kippur Katan Sivan",
    "2011-06-03 Rosh Chodesh Sivan",
    "2011-06-07 Erev Shavuot",
    "2011-06-08 Shavuot I",
    "2011-06-09 Shavuot II",
    "2011-06-25 Shabbat Mevarchim Chodesh Tamuz",
    "2011-06-30 Yom Kippur Katan Tamuz",
    "2011-07-02 Rosh Chodesh Tamuz",
    "2011-07-03 Rosh Chodesh Tamuz",
    "2011-07-19 Tzom Tammuz",
    "2011-07-30 Shabbat Mevarchim Chodesh Av",
    "2011-07-31 Yom Kippur Katan Av",
    "2011-08-01 Rosh Chodesh Av",
    "2011-08-06 Shabbat Chazon",
    "2011-08-08 Erev Tish'a B'Av",
    "2011-08-09 Tish'a B'Av",
    "2011-08-13 Shabbat Nachamu",
    "2011-08-15 Tu B'Av",
    "2011-08-27 Shabbat Mevarchim Chodesh Elul",
    "2011-08-29 Yom Kippur Katan Elul",
    "2011-08-30 Rosh Chodesh Elul",
    "2011-08-31 Rosh Chodesh Elul",
    "2011-08-31 Rosh Hashana LaBehemot",
    "2011-09-24 Leil Selichot",
    "2011-09-28 Erev Rosh Hashana",
];

const ISRAEL_5720: &[&str] = &[
    "1959-10-03 Rosh Hashana 5720",
    "1959-10-04 Rosh Hashana II",
    "1959-10-05 Tzom Gedaliah",
    "1959-10-10 Shabbat Shuva",
    "1959-10-11 Erev Yom Kippur",
    "1959-10-12 Yom Kippur",
    "1959-10-16 Erev Sukkot",
    "1959-10-17 Sukkot I",
    "1959-10-18 Sukkot II (CH''M)",
    "1959-10-19 Sukkot III (CH''M)",
    "1959-10-20 Sukkot IV (CH''M)",
    "1959-10-21 Sukkot V (CH''M)",
    "1959-10-22 Sukkot VI (CH''M)",
    "1959-10-23 Sukkot VII (Hoshana Raba)",
    "1959-10-24 Shmini Atzeret",
    "1959-10-31 Shabbat Mevarchim Chodesh Cheshvan",
    "1959-11-01 Rosh Chodesh Cheshvan",
    "1959-11-02 Rosh Chodesh Cheshvan",
    "1959-11-28 Shabbat Mevarchim Chodesh Kislev",
    "1959-11-30 Yom Kippur Katan Kislev",
    "1959-12-01 Rosh Chodesh Kislev",
    "1959-12-02 Rosh Chodesh Kislev",
    "1959-12-25 Chanukah: 1 Candle",
    "1959-12-26 Chanukah: 2 Candles",
    "1959-12-26 Shabbat Mevarchim Chodesh Tevet",
    "1959-12-27 Chanukah: 3 Candles",
    "1959-12-28 Chanukah: 4 Candles",
    "1959-12-29 Chanukah: 5 Candles",
    "1959-12-30 Chanukah: 6 Candles",
    "1959-12-31 Chag HaBanot",
    "1959-12-31 Chanukah: 7 Candles",
    "1959-12-31 Rosh Chodesh Tevet",
    "1960-01-01 Chanukah: 8 Candles",
    "1960-01-01 Rosh Chodesh Tevet",
    "1960-01-02 Chanukah: 8th Day",
    "1960-01-10 Asara B'Tevet",
    "1960-01-23 Shabbat Mevarchim Chodesh Sh'vat",
    "1960-01-28 Yom Kippur Katan Sh'vat",
    "1960-01-30 Rosh Chodesh Sh'vat",
    "1960-02-13 Shabbat Shirah",
    "1960-02-13 Tu BiShvat",
    "1960-02-25 Yom Kippur Katan Adar",
    "1960-02-27 Shabbat Mevarchim Chodesh Adar",
    "1960-02-27 Shabbat Shekalim",
    "1960-02-28 Rosh Chodesh Adar",
    "1960-02-29 Rosh Chodesh Adar",
    "1960-03-10 Ta'anit Esther",
    "1960-03-12 Erev Purim",
    "1960-03-12 Shabbat Zachor",
    "1960-03-13 Purim",
    "1960-03-14 Shushan Purim",
    "1960-03-19 Shabbat Parah",
    "1960-03-26 Shabbat HaChodesh",
    "1960-03-26 Shabbat Mevarchim Chodesh Nisan",
    "1960-03-28 Yom Kippur Katan Nisan",
    "1960-03-29 Rosh Chodesh Nisan",
    "1960-04-09 Shabbat HaGadol",
    "1960-04-11 Erev Pesach",
    "1960-04-11 Ta'anit Bechorot",
    "1960-04-12 Pesach I",
    "1960-04-13 Pesach II (CH''M)",
    "1960-04-14 Pesach III (CH''M)",
    "1960-04-15 Pesach IV (CH''M)",
    "1960-04-16 Pesach V (CH''M)",
    "1960-04-17 Pesach VI (CH''M)",
    "1960-04-18 Pesach VII",
    "1960-04-23 Shabbat Mevarchim Chodesh Iyyar",
    "1960-04-25 Yom HaShoah",
    "1960-04-27 Rosh Chodesh Iyyar",
    "1960-04-28 Rosh Chodesh Iyyar",
    "1960-05-01 Yom HaZikaron",
    "1960-05-02 Yom HaAtzma'ut",
    "1960-05-11 Pesach Sheni",
    "1960-05-15 Lag BaOmer",
    "1960-05-21 Shabbat Mevarchim Chodesh Sivan",
    "1960-05-26 Yom Kippur Katan Sivan",
    "1960-05-27 Rosh Chodesh Sivan",
    "1960-05-31 Erev Shavuot",
    "1960-06-01 Shavuot",
    "1960-06-18 Shabbat Mevarchim Chodesh Tamuz",
    "1960-06-23 Yom Kippur Katan Tamuz",
    "1960-06-25 Rosh Chodesh Tamuz",
    "1960-06-26 Rosh Chodesh Tamuz",
    "1960-07-12 Tzom Tammuz",
    "1960-07-23 Shabbat Mevarchim Chodesh Av",
    "1960-07-24 Yom Kippur Katan Av",
    "1960-07-25 Rosh Chodesh Av",
    "1960-07-30 Shabbat Chazon",
    "1960-08-01 Erev Tish'a B'Av",
    "1960-08-02 Tish'a B'Av",
    "1960-08-06 Shabbat Nachamu",
    "1960-08-08 Tu B'Av",
    "1960-08-20 Shabbat Mevarchim Chodesh Elul",
    "1960-08-22 Yom Kippur Katan Elul",
    "1960-08-23 Rosh Chodesh Elul",
    "1960-08-24 Rosh Chodesh Elul",
    "1960-08-24 Rosh Hashana LaBehemot",
    "1960-09-17 Leil Selichot",
    "1960-09-21 Erev Rosh Hashana",
];

#[test]
fn full_year_diaspora_5771() {
    let events = holidays_for_year(5771, false).unwrap();
    assert_eq!(lines(&events), DIASPORA_5771);
}

#[test]
fn full_year_israel_5720() {
    let events = holidays_for_year(5720, true).unwrap();
    assert_eq!(lines(&events), ISRAEL_5720);
}

#[test]
fn diaspora_5784() {
    let events = holidays_for_year(5784, false).unwrap();
    assert_eq!(on(&events, "Rosh Hashana 5784"), greg(2023, 9, 16));
    assert_eq!(on(&events, "Tzom Gedaliah"), greg(2023, 9, 18));
    assert_eq!(on(&events, "Simchat Torah"), greg(2023, 10, 8));
    assert_eq!(on(&events, "Chanukah: 1 Candle"), greg(2023, 12, 7));
    assert_eq!(on(&events, "Shabbat Shirah"), greg(2024, 1, 27));
    assert_eq!(on(&events, "Purim Katan"), greg(2024, 2, 23));
    assert_eq!(on(&events, "Ta'anit Esther"), greg(2024, 3, 21));
    assert_eq!(on(&events, "Shabbat HaChodesh"), greg(2024, 4, 6));
    assert_eq!(on(&events, "Pesach VIII"), greg(2024, 4, 30));
    assert_eq!(on(&events, "Yom HaShoah"), greg(2024, 5, 6));
    assert_eq!(on(&events, "Yom HaZikaron"), greg(2024, 5, 13));
    assert_eq!(on(&events, "Yom Kippur Katan Nisan"), greg(2024, 4, 8));
    assert_eq!(on(&events, "Tish'a B'Av"), greg(2024, 8, 13));
    assert_eq!(on(&events, "Leil Selichot"), greg(2024, 9, 28));
    assert!(events.iter().all(|ev| ev.desc() != "Herzl Day"));
}

#[test]
fn israel_keeps_one_day_festivals() {
    let events = holidays_for_year(5784, true).unwrap();
    assert!(events.iter().all(|ev| ev.desc() != "Pesach VIII"));
    assert!(events.iter().all(|ev| ev.desc() != "Simchat Torah"));
    assert_eq!(on(&events, "Shavuot"), greg(2024, 6, 12));
    assert_eq!(on(&events, "Herzl Day"), greg(2024, 5, 19));
    assert!(events.iter().all(|ev| !ev.flags().contains(HolidayFlags::CHUL_ONLY)));
}

#[test]
fn events_on_a_single_day() {
    let date = HebrewDate::from_ymd(2023, 12, 13).unwrap();
    let events = holidays_on_date(&date, false).unwrap();
    let descs: Vec<&str> = events.iter().map(HolidayEvent::desc).collect();
    assert_eq!(
        descs,
        vec!["Chag HaBanot", "Chanukah: 7 Candles", "Rosh Chodesh Tevet"]
    );
}

#[test]
fn birkat_hachamah_every_28_years() {
    let found = |year| {
        all_holidays_for_year(year)
            .unwrap()
            .into_iter()
            .filter(|ev| ev.desc() == "Birkat Hachamah")
            .map(|ev| ev.date())
            .collect::<Vec<_>>()
    };
    assert_eq!(found(5769), vec![HebrewDate::from_ymd(2009, 4, 8).unwrap()]);
    assert_eq!(found(5965), vec![HebrewDate::new(5965, HMonth::Nisan, 19).unwrap()]);
    assert_eq!(found(5993), vec![HebrewDate::new(5993, HMonth::Adar2, 29).unwrap()]);
    assert!(found(5770).is_empty());
}

#[test]
fn serializes_with_flag_names() {
    let events = holidays_for_year(5784, false).unwrap();
    let yk = events.iter().find(|ev| ev.desc() == "Yom Kippur").unwrap();
    let json = serde_json::to_value(yk).unwrap();
    assert_eq!(json["desc"], "Yom Kippur");
    assert!(json["flags"].as_str().unwrap().contains("MAJOR_FAST"));
}

proptest! {
    #[test]
    fn every_event_falls_in_its_year(year in 3000i32..7000) {
        let start = HebrewDate::new(year, HMonth::Tishrei, 1).unwrap().abs();
        let end = HebrewDate::new(year + 1, HMonth::Tishrei, 1).unwrap().abs();
        for ev in all_holidays_for_year(year).unwrap() {
            prop_assert!((start..end).contains(&ev.date().abs()), "{} out of year", ev.desc());
        }
    }

    #[test]
    fn special_shabbatot_fall_on_saturday(year in 3000i32..7000) {
        for ev in all_holidays_for_year(year).unwrap() {
            if ev.flags() == HolidayFlags::SPECIAL_SHABBAT
                || ev.flags() == HolidayFlags::SHABBAT_MEVARCHIM
            {
                prop_assert_eq!(ev.date().weekday(), Weekday::Sat, "{}", ev.desc());
            }
        }
    }

    #[test]
    fn fasts_avoid_shabbat(year in 3000i32..7000) {
        for ev in all_holidays_for_year(year).unwrap() {
            if ev.flags().contains(HolidayFlags::MINOR_FAST) {
                prop_assert_ne!(ev.date().weekday(), Weekday::Sat, "{}", ev.desc());
            }
        }
    }
}
