//! Hebrew-letter numerals.

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

fn letters(value: u32) -> &'static str {
    match value {
        1 => "א",
        2 => "ב",
        3 => "ג",
        4 => "ד",
        5 => "ה",
        6 => "ו",
        7 => "ז",
        8 => "ח",
        9 => "ט",
        10 => "י",
        20 => "כ",
        30 => "ל",
        40 => "מ",
        50 => "נ",
        60 => "ס",
        70 => "ע",
        80 => "פ",
        90 => "צ",
        100 => "ק",
        200 => "ר",
        300 => "ש",
        _ => "ת",
    }
}

/// Splits a number into letter values, largest first.
///
/// 15 and 16 are written 9+6 and 9+7 to avoid spelling a divine name.
fn letter_values(number: u32) -> Vec<u32> {
    let mut values = Vec::new();
    let mut rest = number;
    while rest > 0 {
        if rest == 15 || rest == 16 {
            values.push(9);
            values.push(rest - 9);
            break;
        }
        if rest >= 400 {
            values.push(400);
            rest -= 400;
            continue;
        }
        let mut step = 100;
        let mut value = 400;
        while value > rest {
            if value == step {
                step /= 10;
            }
            value -= step;
        }
        values.push(value);
        rest -= value;
    }
    values
}

/// Converts a number to Hebrew letters (`5749` → "תשמ״ט", `3` → "ג׳").
///
/// The thousands digit is omitted for years of the current millennium
/// (5000–5999) and otherwise written before a geresh.
pub fn gematriya(number: u32) -> String {
    let mut out = String::new();
    let thousands = number / 1000;
    if thousands > 0 && thousands != 5 {
        for value in letter_values(thousands) {
            out.push_str(letters(value));
        }
        out.push(GERESH);
    }
    let values = letter_values(number % 1000);
    if let [single] = values.as_slice() {
        out.push_str(letters(*single));
        out.push(GERESH);
        return out;
    }
    let last = values.len().saturating_sub(1);
    for (idx, value) in values.iter().enumerate() {
        if idx == last {
            out.push(GERSHAYIM);
        }
        out.push_str(letters(*value));
    }
    out
}
