//! Target registry.
//!
//! Holds the targets of one run in input order, classifies the valid ones
//! against a [`Scope`] and hands them to the selected output mode.

use crate::output::{self, OutputMode};
use crate::resolver::{resolve_target, NameResolver};
use crate::scope::Scope;
use crate::types::{Classification, Target};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Ordered collection of targets for a single run.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl TargetRegistry {
    /// Expand the target argument into input lines.
    ///
    /// If `arg` names an existing file, each non-empty trimmed line of it is
    /// a target. Otherwise `arg` itself is the only target.
    pub fn read_inputs(arg: &str) -> io::Result<Vec<String>> {
        let path = Path::new(arg);
        if !path.is_file() {
            return Ok(vec![arg.to_string()]);
        }

        debug!("loading targets from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Resolve each input in order, one at a time.
    pub async fn resolve<I, S>(inputs: I, resolver: &dyn NameResolver) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets = Vec::new();
        for input in inputs {
            targets.push(resolve_target(input.as_ref(), resolver).await);
        }
        debug!("loaded {} targets", targets.len());
        Self { targets }
    }

    /// Classify every valid target. Unresolved targets are skipped.
    pub fn classify(&mut self, scope: &Scope) {
        for target in &mut self.targets {
            target.classify_with(|addr| scope.classify(addr));
        }

        debug!(
            "{} in scope, {} excluded, {} out of scope, {} unresolved",
            self.count(Classification::InScope),
            self.count(Classification::Excluded),
            self.count(Classification::OutOfScope),
            self.targets.iter().filter(|t| !t.is_valid()).count()
        );
    }

    /// Number of targets with the given classification.
    pub fn count(&self, state: Classification) -> usize {
        self.targets
            .iter()
            .filter(|t| t.classification() == Some(state))
            .count()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Render all classified targets in `mode`.
    pub fn render<W: Write>(&self, out: &mut W, mode: OutputMode, verbose: bool) -> io::Result<()> {
        output::render(out, &self.targets, mode, verbose)
    }
}

impl From<Vec<Target>> for TargetRegistry {
    fn from(targets: Vec<Target>) -> Self {
        Self { targets }
    }
}
