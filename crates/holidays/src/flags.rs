//! Holiday classification bits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Independent facets of a calendar event.
    ///
    /// Every event carries a combination of these; the calendar generator
    /// filters events by intersecting them with a mask. Bit positions are
    /// stable and appear in serialized output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HolidayFlags: u32 {
        /// Chag, yom tov: work is forbidden.
        const CHAG = 1 << 0;
        /// Light candles before sundown.
        const LIGHT_CANDLES = 1 << 1;
        /// Last day of yom tov; havdalah at nightfall.
        const YOM_TOV_ENDS = 1 << 2;
        /// Observed only in the Diaspora (chutz la'aretz).
        const CHUL_ONLY = 1 << 3;
        /// Observed only in Israel.
        const IL_ONLY = 1 << 4;
        /// Light candles at nightfall (second night of yom tov).
        const LIGHT_CANDLES_TZEIS = 1 << 5;
        /// Chanukah candle lighting.
        const CHANUKAH_CANDLES = 1 << 6;
        /// Rosh Chodesh, the start of a Hebrew month.
        const ROSH_CHODESH = 1 << 7;
        /// Minor fasts such as Tzom Tammuz and Ta'anit Esther.
        const MINOR_FAST = 1 << 8;
        /// Shabbat Shekalim, Zachor and the other special Shabbatot.
        const SPECIAL_SHABBAT = 1 << 9;
        /// Weekly Torah portion on Saturdays.
        const PARSHA_HASHAVUA = 1 << 10;
        /// Daily page of Babylonian Talmud.
        const DAF_YOMI = 1 << 11;
        /// Days of the Omer.
        const OMER_COUNT = 1 << 12;
        /// Yom HaShoah, Yom HaAtzma'ut and other Israeli civil days.
        const MODERN_HOLIDAY = 1 << 13;
        /// Yom Kippur and Tish'a B'Av.
        const MAJOR_FAST = 1 << 14;
        /// The Shabbat before Rosh Chodesh.
        const SHABBAT_MEVARCHIM = 1 << 15;
        /// Molad announcement.
        const MOLAD = 1 << 16;
        /// Yahrzeit, birthday or other user-supplied date.
        const USER_EVENT = 1 << 17;
        /// Daily Hebrew date annotation.
        const HEBREW_DATE = 1 << 18;
        /// A holiday that is not major, modern, Rosh Chodesh or a fast.
        const MINOR_HOLIDAY = 1 << 19;
        /// Evening before a holiday.
        const EREV = 1 << 20;
        /// Chol HaMoed, the intermediate days of Pesach and Sukkot.
        const CHOL_HAMOED = 1 << 21;
        /// Daily Mishna study.
        const MISHNA_YOMI = 1 << 22;
        /// Yom Kippur Katan, the day before Rosh Chodesh.
        const YOM_KIPPUR_KATAN = 1 << 23;
        /// Daily page of Jerusalem Talmud.
        const YERUSHALMI_YOMI = 1 << 24;
    }
}

impl HolidayFlags {
    /// True if the event is kept in the given region's calendar.
    pub fn observed_in(self, il: bool) -> bool {
        if il {
            !self.contains(Self::CHUL_ONLY)
        } else {
            !self.contains(Self::IL_ONLY)
        }
    }
}
