//! Startup banner shown in the default report mode.

use console::style;
use std::io::{self, Write};

const LOGO: &str = r" _____ _____ _____ _____ _____ _____
|   __|     |     |  _  |   __| __  |
|__   |   --|  +  |   __|   __|    -|
|_____|_____|_____|__|  |_____|__|__|";

/// Write the banner, followed by a blank line.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let mut lines = LOGO.lines().peekable();
    while let Some(line) = lines.next() {
        if lines.peek().is_some() {
            writeln!(out, "{}", style(line).cyan())?;
        } else {
            writeln!(
                out,
                "{} v{}",
                style(line).cyan(),
                env!("CARGO_PKG_VERSION")
            )?;
        }
    }
    writeln!(out)
}
