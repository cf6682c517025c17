//! Yahrzeit command: anniversaries of a date in the following years.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use luach_hdate::{birthday_or_anniversary, yahrzeit};

use crate::cli::YahrzeitArgs;
use crate::convert;

/// Run the yahrzeit command.
pub fn run(args: YahrzeitArgs) -> Result<()> {
    let _cmd = info_span!("yahrzeit").entered();
    let original = convert::parse_date(&args.date)?.hebrew();
    let kind = if args.birthday { "birthday" } else { "yahrzeit" };
    let years = convert::following_years(original.year(), args.years)?;
    info!(%original, years = args.years, kind, "listing anniversaries");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for year in years {
        let date = if args.birthday {
            birthday_or_anniversary(year, &original)
        } else {
            yahrzeit(year, &original)
        }
        .with_context(|| format!("no {kind} of {original} in {year}"))?;
        writeln!(out, "{year}: {date} = {}", date.to_gregorian())?;
    }
    Ok(())
}
