//! Scope classification.
//!
//! Exclusions are checked first and always win. Within each list the first
//! matching line is the one reported.

use super::list::{ExclusionList, RangeList, ScopeList};
use crate::error::{ScopeError, ScopeResult};
use crate::output;
use crate::types::{Classification, Verdict};
use std::net::Ipv4Addr;
use std::path::Path;

/// Classify `addr` against the two lists.
pub fn classify(addr: Ipv4Addr, exclusions: &ExclusionList, scope: &ScopeList) -> Verdict {
    if let Some(entry) = exclusions.first_match(addr) {
        return Verdict::new(Classification::Excluded, entry.text.as_str());
    }
    if let Some(entry) = scope.first_match(addr) {
        return Verdict::new(Classification::InScope, entry.text.as_str());
    }
    Verdict::out_of_scope()
}

/// The loaded scope definition. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub scope: ScopeList,
    pub exclusions: ExclusionList,
}

impl Scope {
    pub fn new(scope: ScopeList, exclusions: ExclusionList) -> Self {
        Self { scope, exclusions }
    }

    /// Load both lists from disk.
    ///
    /// A missing scope file is fatal. A missing exclusion file is reported as
    /// a warning and treated as an empty list.
    pub fn load(scope_file: &Path, exclude_file: &Path) -> ScopeResult<Self> {
        let scope = RangeList::load_scope(scope_file)?;

        let exclusions = match RangeList::load_exclusions(exclude_file) {
            Ok(list) => list,
            Err(ScopeError::ExcludeFileMissing(path)) => {
                output::print_warning(&format!(
                    "exclude file {} not found - will not check for exclusions",
                    path.display()
                ));
                RangeList::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Self::new(scope, exclusions))
    }

    pub fn classify(&self, addr: Ipv4Addr) -> Verdict {
        classify(addr, &self.exclusions, &self.scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OUT_OF_SCOPE_SOURCE;

    fn lists(scope: &str, exclusions: &str) -> Scope {
        Scope::new(
            RangeList::parse(scope, Path::new("scope.txt")).unwrap(),
            RangeList::parse(exclusions, Path::new("exclude.txt")).unwrap(),
        )
    }

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_cidr_scope_with_single_exclusion() {
        let scope = lists("10.0.0.0/24\n", "10.0.0.5\n");

        assert_eq!(
            scope.classify(ip("10.0.0.5")),
            Verdict::new(Classification::Excluded, "10.0.0.5")
        );
        assert_eq!(
            scope.classify(ip("10.0.0.6")),
            Verdict::new(Classification::InScope, "10.0.0.0/24")
        );
        assert_eq!(scope.classify(ip("10.0.1.1")), Verdict::out_of_scope());
    }

    #[test]
    fn test_shorthand_range_scope() {
        let scope = lists("192.168.1.10-20\n", "");
        assert_eq!(
            scope.classify(ip("192.168.1.15")).classification,
            Classification::InScope
        );
        assert_eq!(
            scope.classify(ip("192.168.1.25")).classification,
            Classification::OutOfScope
        );
    }

    #[test]
    fn test_exclusion_beats_scope_regardless_of_order() {
        let scope = lists("10.0.0.0/8\n10.1.0.0/16\n", "10.1.2.0/24\n");
        for last in [0u8, 1, 77, 255] {
            let verdict = scope.classify(Ipv4Addr::new(10, 1, 2, last));
            assert_eq!(verdict.classification, Classification::Excluded);
            assert_eq!(verdict.matched, "10.1.2.0/24");
        }
    }

    #[test]
    fn test_out_of_scope_sentinel() {
        let scope = lists("10.0.0.0/24\n", "10.0.0.1-10\n");
        let verdict = scope.classify(ip("172.16.0.1"));
        assert_eq!(verdict.classification, Classification::OutOfScope);
        assert_eq!(verdict.matched, OUT_OF_SCOPE_SOURCE);
    }

    #[test]
    fn test_classification_is_stable() {
        let scope = lists("10.0.0.0/24\n", "10.0.0.5\n");
        for addr in ["10.0.0.5", "10.0.0.6", "8.8.8.8"] {
            assert_eq!(scope.classify(ip(addr)), scope.classify(ip(addr)));
        }
    }

    #[test]
    fn test_reports_first_matching_scope_line() {
        let scope = lists("10.0.0.1-50\n10.0.0.0/24\n", "");
        assert_eq!(scope.classify(ip("10.0.0.20")).matched, "10.0.0.1-50");
        assert_eq!(scope.classify(ip("10.0.0.60")).matched, "10.0.0.0/24");
    }

    #[test]
    fn test_missing_exclude_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let scope_file = dir.path().join("scope.txt");
        std::fs::write(&scope_file, "10.0.0.0/24\n").unwrap();

        let scope = Scope::load(&scope_file, &dir.path().join("exclude.txt")).unwrap();
        assert!(scope.exclusions.is_empty());
        assert_eq!(scope.scope.len(), 1);
    }

    #[test]
    fn test_missing_scope_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = Scope::load(
            &dir.path().join("scope.txt"),
            &dir.path().join("exclude.txt"),
        );
        assert!(matches!(result, Err(ScopeError::ScopeFileMissing(_))));
    }
}
