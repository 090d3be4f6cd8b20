//! Scope and exclusion list files.
//!
//! One range expression per line. Lines are trimmed and blank lines are
//! skipped; there is no comment syntax. Every line is parsed up front so a
//! malformed entry is reported before any target is classified.

use crate::error::{ScopeError, ScopeResult};
use crate::output;
use crate::types::AddressRange;
use std::fs;
use std::io;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One parsed line of a list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    /// The trimmed line as written, reported as the matching line.
    pub text: String,
    /// The parsed range.
    pub range: AddressRange,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// An ordered list of ranges. Order decides which line is reported when
/// several match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeList {
    entries: Vec<RangeEntry>,
}

/// Ranges that define what is in scope.
pub type ScopeList = RangeList;
/// Ranges that are excluded regardless of scope.
pub type ExclusionList = RangeList;

impl RangeList {
    /// Parse list content. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> ScopeResult<Self> {
        let mut entries = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }

            let line = idx + 1;
            let range = AddressRange::parse(text).map_err(|source| {
                ScopeError::InvalidRangeFormat {
                    path: path.to_path_buf(),
                    line,
                    source,
                }
            })?;

            if range.is_empty() {
                output::print_warning(&format!(
                    "{}:{}: range '{}' ends before it starts and will never match",
                    path.display(),
                    line,
                    text
                ));
            }

            entries.push(RangeEntry {
                text: text.to_string(),
                range,
                line,
            });
        }

        Ok(Self { entries })
    }

    /// Load the scope file. A missing file is [`ScopeError::ScopeFileMissing`].
    pub fn load_scope(path: &Path) -> ScopeResult<Self> {
        let list = Self::load(path, ScopeError::ScopeFileMissing)?;
        debug!("loaded {} scope entries from {}", list.len(), path.display());
        Ok(list)
    }

    /// Load the exclusion file. A missing file is
    /// [`ScopeError::ExcludeFileMissing`], which callers may treat as empty.
    pub fn load_exclusions(path: &Path) -> ScopeResult<Self> {
        let list = Self::load(path, ScopeError::ExcludeFileMissing)?;
        debug!(
            "loaded {} exclusion entries from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    fn load(path: &Path, missing: fn(PathBuf) -> ScopeError) -> ScopeResult<Self> {
        debug!("loading ranges from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => missing(path.to_path_buf()),
            _ => ScopeError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        Self::parse(&content, path)
    }

    /// First entry, in file order, whose range contains `addr`.
    pub fn first_match(&self, addr: Ipv4Addr) -> Option<&RangeEntry> {
        self.entries.iter().find(|entry| entry.range.contains(addr))
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn list(content: &str) -> ScopeResult<RangeList> {
        RangeList::parse(content, Path::new("scope.txt"))
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let list = list("\n  10.0.0.0/24  \n\n192.168.1.10-20\r\n   \n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].text, "10.0.0.0/24");
        assert_eq!(list.entries()[0].line, 2);
        assert_eq!(list.entries()[1].text, "192.168.1.10-20");
        assert_eq!(list.entries()[1].line, 4);
    }

    #[test]
    fn test_invalid_line_names_location() {
        let err = list("10.0.0.0/24\nnot-a-range\n").unwrap_err();
        match &err {
            ScopeError::InvalidRangeFormat { path, line, .. } => {
                assert_eq!(path, Path::new("scope.txt"));
                assert_eq!(*line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "scope.txt:2: invalid range format: 'not-a-range'"
        );
    }

    #[test]
    fn test_first_match_respects_file_order() {
        let list = list("10.0.0.0/8\n10.0.0.0/24\n10.0.0.5\n").unwrap();
        let hit = list.first_match(Ipv4Addr::new(10, 0, 0, 5)).unwrap();
        assert_eq!(hit.text, "10.0.0.0/8");
        assert!(list.first_match(Ipv4Addr::new(11, 0, 0, 1)).is_none());
    }

    #[test]
    fn test_load_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        assert!(matches!(
            RangeList::load_scope(&path),
            Err(ScopeError::ScopeFileMissing(p)) if p == path
        ));
        assert!(matches!(
            RangeList::load_exclusions(&path),
            Err(ScopeError::ExcludeFileMissing(p)) if p == path
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "10.0.0.5").unwrap();
        writeln!(file, "10.0.1.0/24").unwrap();

        let list = RangeList::load_scope(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.first_match(Ipv4Addr::new(10, 0, 1, 9)).is_some());
    }
}
