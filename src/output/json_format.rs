//! JSON output formatting.

use crate::types::{Classification, Target};
use serde::Serialize;
use std::io::{self, Write};
use std::net::Ipv4Addr;

/// Serializable view of a classified target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetReport<'a> {
    pub target: &'a str,
    pub address: Ipv4Addr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<&'a str>,
    pub classification: Classification,
    pub matched: &'a str,
}

impl<'a> TargetReport<'a> {
    /// `None` for targets that were never classified.
    pub fn from_target(target: &'a Target) -> Option<Self> {
        let verdict = target.verdict()?;
        Some(Self {
            target: &target.identifier,
            address: target.address?,
            hostname: target.hostname.as_deref(),
            classification: verdict.classification,
            matched: &verdict.matched,
        })
    }
}

/// Print classified targets as a pretty-printed JSON array.
pub fn print_json<W: Write>(out: &mut W, targets: &[Target]) -> io::Result<()> {
    let reports: Vec<TargetReport<'_>> =
        targets.iter().filter_map(TargetReport::from_target).collect();
    serde_json::to_writer_pretty(&mut *out, &reports)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out)
}
