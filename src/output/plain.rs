//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::types::{Classification, Target, Verdict};
use console::style;
use std::io::{self, Write};

/// Print one report line per classified target.
pub fn print_report<W: Write>(out: &mut W, targets: &[Target], verbose: bool) -> io::Result<()> {
    for target in targets {
        if let Some(verdict) = target.verdict() {
            writeln!(out, "{}", report_line(target, verdict, verbose))?;
        }
    }
    Ok(())
}

/// Format the human-readable line for one target.
///
/// In verbose mode in-scope and excluded targets also name the matching line.
pub fn report_line(target: &Target, verdict: &Verdict, verbose: bool) -> String {
    let matching = if verbose {
        format!(", matching line: {}", verdict.matched)
    } else {
        String::new()
    };

    match verdict.classification {
        Classification::InScope => format!(
            "{} The target {} is in scope{}",
            style("[+]").green().bold(),
            target,
            matching
        ),
        Classification::Excluded => format!(
            "{} The target {} is explicitly excluded from the scope{}",
            style("[X]").red().bold(),
            target,
            matching
        ),
        Classification::OutOfScope => format!(
            "{} The target {} is out of scope.",
            style("[-]").yellow(),
            target
        ),
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
