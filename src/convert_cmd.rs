//! Convert command: print a date in the other calendar.

use std::io::{self, Write};

use anyhow::Result;
use luach_hdate::HebrewDate;

use crate::cli::ConvertArgs;
use crate::convert::{self, DateInput};

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match convert::parse_date(&args.date)? {
        DateInput::Gregorian(g) => {
            let hd = HebrewDate::from_gregorian(g);
            writeln!(out, "{g} {} = {hd}", hd.weekday())?;
            writeln!(out, "{}", hd.render_hebrew())?;
        }
        DateInput::Hebrew(hd) => {
            writeln!(out, "{hd} = {} {}", hd.to_gregorian(), hd.weekday())?;
        }
    }
    Ok(())
}
