//! Output formatting module.
//!
//! Exactly one mode renders the classified targets. Results always go to the
//! writer passed in (stdout in the binary); diagnostics go to stderr through
//! [`print_warning`] and [`print_error`] so machine-readable modes stay clean.

mod firewall;
mod greppable;
mod json_format;
mod plain;

pub use firewall::{firewall_rules, print_firewall};
pub use greppable::{print_greppable, print_list};
pub use json_format::{print_json, TargetReport};
pub use plain::{print_error, print_report, print_warning, report_line};

use crate::types::Target;
use std::io::{self, Write};

/// Which subset of targets a list mode prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    InScope,
    Excluded,
    OutOfScope,
    /// Excluded and out-of-scope targets.
    NotInScope,
}

/// Output mode. The modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Banner followed by a human-readable line per target.
    #[default]
    Report,
    /// iptables rules for excluded targets.
    Firewall,
    /// `target : state` lines.
    Greppable,
    /// Only targets matching the filter.
    List(ListFilter),
    /// JSON array of target reports.
    Json,
}

impl OutputMode {
    /// The banner is only shown in the default human-readable mode.
    pub fn shows_banner(self) -> bool {
        self == Self::Report
    }
}

/// Render `targets` in the given mode. Invalid targets are skipped.
pub fn render<W: Write>(
    out: &mut W,
    targets: &[Target],
    mode: OutputMode,
    verbose: bool,
) -> io::Result<()> {
    match mode {
        OutputMode::Report => print_report(out, targets, verbose),
        OutputMode::Firewall => print_firewall(out, targets),
        OutputMode::Greppable => print_greppable(out, targets),
        OutputMode::List(filter) => print_list(out, targets, filter),
        OutputMode::Json => print_json(out, targets),
    }
}
