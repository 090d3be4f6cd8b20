//! Target and classification types.
//!
//! A [`Target`] is built from one line of user input. Literal IPv4 addresses
//! are used as-is, anything else is treated as a hostname and resolved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Matched text reported for targets that appear in neither list.
pub const OUT_OF_SCOPE_SOURCE: &str = "not in scope or exclusion files";

/// Error type for target resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    #[error("could not resolve '{host}': {reason}")]
    NameResolutionFailure { host: String, reason: String },
}

/// Scope state of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Matched a scope range and no exclusion range.
    InScope,
    /// Matched an exclusion range. Takes precedence over scope.
    Excluded,
    /// Matched neither list.
    OutOfScope,
}

impl Classification {
    /// True for the states listed by `--list-not`.
    pub fn is_not_in_scope(self) -> bool {
        matches!(self, Self::Excluded | Self::OutOfScope)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InScope => write!(f, "InScope"),
            Self::Excluded => write!(f, "Excluded"),
            Self::OutOfScope => write!(f, "OutOfScope"),
        }
    }
}

/// Outcome of classifying one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub classification: Classification,
    /// The scope/exclusion line that matched, or [`OUT_OF_SCOPE_SOURCE`].
    pub matched: String,
}

impl Verdict {
    pub fn new(classification: Classification, matched: impl Into<String>) -> Self {
        Self {
            classification,
            matched: matched.into(),
        }
    }

    pub fn out_of_scope() -> Self {
        Self::new(Classification::OutOfScope, OUT_OF_SCOPE_SOURCE)
    }
}

/// A single target to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The input exactly as given.
    pub identifier: String,
    /// Resolved address, `None` when resolution failed.
    pub address: Option<Ipv4Addr>,
    /// Set when the input was not a literal address.
    pub hostname: Option<String>,
    verdict: Option<Verdict>,
}

impl Target {
    /// Target for a literal address.
    pub fn literal(identifier: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            identifier: identifier.into(),
            address: Some(address),
            hostname: None,
            verdict: None,
        }
    }

    /// Target for a hostname; `address` is `None` when it did not resolve.
    pub fn hostname(identifier: impl Into<String>, address: Option<Ipv4Addr>) -> Self {
        let identifier = identifier.into();
        Self {
            hostname: Some(identifier.clone()),
            identifier,
            address,
            verdict: None,
        }
    }

    /// Parse `input` as a strict IPv4 literal.
    ///
    /// IPv6 literals are deliberately not accepted here; they are handed to
    /// the name resolver like any other hostname.
    pub fn parse_literal(input: &str) -> Option<Self> {
        input
            .parse::<Ipv4Addr>()
            .ok()
            .map(|addr| Self::literal(input, addr))
    }

    /// A target is valid once it has an address.
    pub fn is_valid(&self) -> bool {
        self.address.is_some()
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn classification(&self) -> Option<Classification> {
        self.verdict.as_ref().map(|v| v.classification)
    }

    /// Classify this target with `classify`, at most once.
    ///
    /// Invalid targets are left unclassified. A target that already has a
    /// verdict keeps it.
    pub fn classify_with<F>(&mut self, classify: F) -> Option<&Verdict>
    where
        F: FnOnce(Ipv4Addr) -> Verdict,
    {
        let address = self.address?;
        let verdict: &Verdict = self.verdict.get_or_insert_with(|| classify(address));
        Some(verdict)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = match self.address {
            Some(addr) => addr.to_string(),
            None => "None".to_string(),
        };
        match &self.hostname {
            Some(hostname) => write!(f, "{} ({})", address, hostname),
            None => write!(f, "{}", address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_ipv4() {
        let target = Target::parse_literal("10.0.0.5").unwrap();
        assert_eq!(target.address, Some(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(target.hostname, None);
        assert!(target.is_valid());
        assert_eq!(target.to_string(), "10.0.0.5");
    }

    #[test]
    fn test_ipv6_is_not_a_literal() {
        assert!(Target::parse_literal("::1").is_none());
        assert!(Target::parse_literal("2001:db8::1").is_none());
    }

    #[test]
    fn test_hostnames_are_not_literals() {
        assert!(Target::parse_literal("example.com").is_none());
        assert!(Target::parse_literal("10.0.0").is_none());
    }

    #[test]
    fn test_hostname_display() {
        let target = Target::hostname("db.internal", Some(Ipv4Addr::new(10, 0, 0, 9)));
        assert_eq!(target.to_string(), "10.0.0.9 (db.internal)");
    }

    #[test]
    fn test_unresolved_target_is_never_classified() {
        let mut target = Target::hostname("nowhere.invalid", None);
        assert!(!target.is_valid());
        assert!(target.classify_with(|_| Verdict::out_of_scope()).is_none());
        assert_eq!(target.classification(), None);
    }

    #[test]
    fn test_verdict_is_written_once() {
        let mut target = Target::parse_literal("10.0.0.5").unwrap();
        target.classify_with(|_| Verdict::new(Classification::Excluded, "10.0.0.5"));
        target.classify_with(|_| Verdict::out_of_scope());
        assert_eq!(target.classification(), Some(Classification::Excluded));
        assert_eq!(target.verdict().unwrap().matched, "10.0.0.5");
    }

    #[test]
    fn test_not_in_scope_states() {
        assert!(Classification::Excluded.is_not_in_scope());
        assert!(Classification::OutOfScope.is_not_in_scope());
        assert!(!Classification::InScope.is_not_in_scope());
    }
}
