//! # Scoper - Target Scope Checker
//!
//! Scoper classifies IP addresses and hostnames against an in-scope list and
//! an exclusion list, and can print iptables rules that block the excluded
//! hosts.
//!
//! ## Features
//!
//! - **Range notations**: CIDR (`10.0.0.0/24`), dash ranges
//!   (`10.0.0.1-10.0.0.50` or `10.0.0.1-50`) and single addresses
//! - **Exclusions first**: an excluded address is never reported in scope
//! - **Hostname targets**: resolved to IPv4 before classification
//! - **Output modes**: human-readable report, greppable, filtered lists,
//!   JSON and firewall rules
//!
//! ## Example Usage
//!
//! ```rust
//! use scoper::scope::{RangeList, Scope};
//! use scoper::types::Classification;
//! use std::path::Path;
//!
//! let scope = Scope::new(
//!     RangeList::parse("10.0.0.0/24\n", Path::new("scope.txt")).unwrap(),
//!     RangeList::parse("10.0.0.5\n", Path::new("exclude.txt")).unwrap(),
//! );
//!
//! let verdict = scope.classify("10.0.0.5".parse().unwrap());
//! assert_eq!(verdict.classification, Classification::Excluded);
//! assert_eq!(verdict.matched, "10.0.0.5");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Address ranges, targets and classifications
//! - [`resolver`] - Literal parsing and hostname resolution
//! - [`scope`] - Scope/exclusion lists and the classifier
//! - [`registry`] - Ordered targets for one run
//! - [`output`] - Output modes and diagnostics
//! - [`config`] - Settings file and default paths
//! - [`cli`] - Argument parsing and the run driver

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod scope;
pub mod types;

// Re-export commonly used types
pub use error::{ConfigError, ScopeError};
pub use registry::TargetRegistry;
pub use resolver::{DnsResolver, NameResolver};
pub use scope::Scope;
pub use types::{AddressRange, Classification, Target, Verdict};
