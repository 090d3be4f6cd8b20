//! Address range expressions used in scope and exclusion files.
//!
//! Three notations are accepted:
//! - CIDR: `10.0.0.0/24` (host bits in the base address are ignored)
//! - Dash ranges: `10.0.0.1-10.0.0.50`, or the shorthand `10.0.0.1-50`
//!   where the end only gives the final octet
//! - Single addresses: `10.0.0.5`

use ipnetwork::Ipv4Network;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Error type for range parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("invalid range format: '{0}'")]
    InvalidFormat(String),
}

/// A parsed address range.
///
/// Membership is tested with [`AddressRange::contains`], which behaves the
/// same no matter which notation produced the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRange {
    /// A CIDR network.
    Cidr(Ipv4Network),
    /// An inclusive address interval.
    Interval { start: Ipv4Addr, end: Ipv4Addr },
    /// A single address.
    Single(Ipv4Addr),
}

impl AddressRange {
    /// Parse a range expression.
    ///
    /// A `/` selects CIDR notation. Otherwise the text is split on the first
    /// `-`; if the part after it has no `.`, it replaces the last octet of the
    /// start address. Text with neither is a single address.
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        let invalid = || RangeError::InvalidFormat(s.to_string());

        if s.contains('/') {
            let network: Ipv4Network = s.parse().map_err(|_| invalid())?;
            return Ok(Self::Cidr(network));
        }

        if let Some((start_str, rest)) = s.split_once('-') {
            let start: Ipv4Addr = start_str.parse().map_err(|_| invalid())?;
            let end: Ipv4Addr = if rest.contains('.') {
                rest.parse().map_err(|_| invalid())?
            } else {
                let base = start_str
                    .rsplit_once('.')
                    .map_or(start_str, |(base, _)| base);
                format!("{}.{}", base, rest)
                    .parse()
                    .map_err(|_| invalid())?
            };
            return Ok(Self::Interval { start, end });
        }

        s.parse::<Ipv4Addr>().map(Self::Single).map_err(|_| invalid())
    }

    /// Check whether `addr` falls inside this range.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        match self {
            Self::Cidr(network) => network.contains(addr),
            Self::Interval { start, end } => *start <= addr && addr <= *end,
            Self::Single(single) => *single == addr,
        }
    }

    /// True for intervals whose end sorts before their start. Such a range
    /// never matches anything.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Interval { start, end } if start > end)
    }
}

impl FromStr for AddressRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cidr(network) => write!(f, "{}", network),
            Self::Interval { start, end } => write!(f, "{}-{}", start, end),
            Self::Single(addr) => write!(f, "{}", addr),
        }
    }
}
