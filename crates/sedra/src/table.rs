//! Precomputed reading tables, one per year shape.
//!
//! Entry `i` covers the `i`-th Shabbat counted from the first Shabbat on or
//! after Rosh Hashana. Non-negative entries are 0-based portion indices,
//! `X` marks a festival reading and `d(n)` joins portions `n` and `n + 1`.

use chrono::Weekday;
use luach_hdate::YearKind;

const X: i8 = -1;

const fn d(portion: i8) -> i8 {
    -portion
}

#[rustfmt::skip]
const SAT_SHORT: [i8; 51] = [
    X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38,
    39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const SAT_LONG: [i8; 51] = [
    X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38,
    39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const MON_SHORT: [i8; 50] = [
    51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39,
    40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const MON_LONG: [i8; 50] = [
    51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, X, 34, 35, 36, 37, d(38),
    40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const THU_NORMAL: [i8; 51] = [
    52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, d(21), 23, 24, X, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38,
    39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const THU_NORMAL_IL: [i8; 51] = [
    52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, d(21), 23, 24, X, 25, d(26), d(28), 30, 31, 32, 33, 34, 35, 36, 37, 38, 39,
    40, d(41), 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const THU_LONG: [i8; 51] = [
    52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39,
    40, d(41), 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const SAT_SHORT_LEAP: [i8; 55] = [
    X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
    38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const SAT_LONG_LEAP: [i8; 55] = [
    X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, X, 34, 35, 36,
    37, d(38), 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const MON_SHORT_LEAP: [i8; 54] = [
    51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, X, 34, 35, 36, 37,
    d(38), 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const MON_SHORT_LEAP_IL: [i8; 54] = [
    51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
    39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50),
];

#[rustfmt::skip]
const MON_LONG_LEAP: [i8; 55] = [
    51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, X, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
    38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const MON_LONG_LEAP_IL: [i8; 55] = [
    51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
    39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const THU_SHORT_LEAP: [i8; 55] = [
    52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, X, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
    39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
];

#[rustfmt::skip]
const THU_LONG_LEAP: [i8; 55] = [
    52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, X, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
    39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, d(50),
];

/// Identifies one of the fixed reading tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SedraTable {
    SatShort,
    SatLong,
    MonShort,
    MonLong,
    ThuNormal,
    ThuNormalIsrael,
    ThuLong,
    SatShortLeap,
    SatLongLeap,
    MonShortLeap,
    MonShortLeapIsrael,
    MonLongLeap,
    MonLongLeapIsrael,
    ThuShortLeap,
    ThuLongLeap,
}

impl SedraTable {
    /// Picks the table for a year shape, or `None` if no table covers it.
    ///
    /// Israel shares a table with the Diaspora unless the Diaspora's second
    /// festival day falls on a Shabbat and pushes the doubled portions.
    pub(crate) fn select(
        leap: bool,
        rosh_hashana: Weekday,
        kind: YearKind,
        il: bool,
    ) -> Option<Self> {
        use SedraTable::*;
        use Weekday::{Mon, Sat, Thu, Tue};
        use YearKind::{Complete, Deficient, Regular};

        let table = match (leap, rosh_hashana, kind) {
            (false, Sat, Deficient) => SatShort,
            (false, Sat, Complete) => SatLong,
            (false, Mon, Deficient) => MonShort,
            (false, Mon, Complete) | (false, Tue, Regular) if il => MonShort,
            (false, Mon, Complete) | (false, Tue, Regular) => MonLong,
            (false, Thu, Regular) if il => ThuNormalIsrael,
            (false, Thu, Regular) => ThuNormal,
            (false, Thu, Complete) => ThuLong,
            (true, Sat, Deficient) => SatShortLeap,
            (true, Sat, Complete) if il => SatShortLeap,
            (true, Sat, Complete) => SatLongLeap,
            (true, Mon, Deficient) if il => MonShortLeapIsrael,
            (true, Mon, Deficient) => MonShortLeap,
            (true, Mon, Complete) | (true, Tue, Regular) if il => MonLongLeapIsrael,
            (true, Mon, Complete) | (true, Tue, Regular) => MonLongLeap,
            (true, Thu, Deficient) => ThuShortLeap,
            (true, Thu, Complete) => ThuLongLeap,
            _ => return None,
        };
        Some(table)
    }

    pub(crate) fn entries(self) -> &'static [i8] {
        match self {
            Self::SatShort => &SAT_SHORT,
            Self::SatLong => &SAT_LONG,
            Self::MonShort => &MON_SHORT,
            Self::MonLong => &MON_LONG,
            Self::ThuNormal => &THU_NORMAL,
            Self::ThuNormalIsrael => &THU_NORMAL_IL,
            Self::ThuLong => &THU_LONG,
            Self::SatShortLeap => &SAT_SHORT_LEAP,
            Self::SatLongLeap => &SAT_LONG_LEAP,
            Self::MonShortLeap => &MON_SHORT_LEAP,
            Self::MonShortLeapIsrael => &MON_SHORT_LEAP_IL,
            Self::MonLongLeap => &MON_LONG_LEAP,
            Self::MonLongLeapIsrael => &MON_LONG_LEAP_IL,
            Self::ThuShortLeap => &THU_SHORT_LEAP,
            Self::ThuLongLeap => &THU_LONG_LEAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths() {
        assert_eq!(SedraTable::MonShort.entries().len(), 50);
        assert_eq!(SedraTable::SatLong.entries().len(), 51);
        assert_eq!(SedraTable::MonShortLeap.entries().len(), 54);
        assert_eq!(SedraTable::ThuLongLeap.entries().len(), 55);
    }

    #[test]
    fn doubled_entries_are_known_pairs() {
        let all = [
            SedraTable::SatShort,
            SedraTable::SatLong,
            SedraTable::MonShort,
            SedraTable::MonLong,
            SedraTable::ThuNormal,
            SedraTable::ThuNormalIsrael,
            SedraTable::ThuLong,
            SedraTable::SatShortLeap,
            SedraTable::SatLongLeap,
            SedraTable::MonShortLeap,
            SedraTable::MonShortLeapIsrael,
            SedraTable::MonLongLeap,
            SedraTable::MonLongLeapIsrael,
            SedraTable::ThuShortLeap,
            SedraTable::ThuLongLeap,
        ];
        for table in all {
            for &entry in table.entries() {
                if entry < -1 {
                    assert!(
                        [21, 26, 28, 31, 38, 41, 50].contains(&-entry),
                        "{table:?} has unexpected double {entry}"
                    );
                }
            }
        }
    }

    #[test]
    fn israel_variants() {
        use Weekday::*;
        use YearKind::*;
        let select = SedraTable::select;
        assert_eq!(select(false, Tue, Regular, true), Some(SedraTable::MonShort));
        assert_eq!(select(false, Tue, Regular, false), Some(SedraTable::MonLong));
        assert_eq!(select(true, Sat, Complete, true), Some(SedraTable::SatShortLeap));
        assert_eq!(select(false, Sat, Regular, false), None);
        assert_eq!(select(false, Wed, Regular, false), None);
    }
}
