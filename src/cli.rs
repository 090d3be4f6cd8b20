//! Command-line interface definitions for Scoper.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use crate::banner::print_banner;
use crate::config::Settings;
use crate::output::{ListFilter, OutputMode};
use crate::registry::TargetRegistry;
use crate::resolver::NameResolver;
use crate::scope::Scope;
use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::io::Write;
use std::path::PathBuf;

/// Check whether target machines are in scope. Optionally generate iptables
/// rules for the excluded ones.
#[derive(Parser, Debug)]
#[command(name = "scoper")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check whether targets are in scope", long_about = None)]
#[command(group(ArgGroup::new("output").multiple(false)))]
pub struct Cli {
    /// IP address, hostname, or a file containing targets to check
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// File containing in-scope IP addresses or ranges [default: scope.txt]
    #[arg(short = 's', long, env = "SCOPE_FILE_PATH", value_name = "PATH")]
    pub scope_file: Option<PathBuf>,

    /// File containing excluded IP addresses or ranges [default: exclude.txt]
    #[arg(short = 'e', long, env = "EXCLUDE_FILE_PATH", value_name = "PATH")]
    pub exclude_file: Option<PathBuf>,

    /// Show the matching scope or exclusion line
    #[arg(short, long)]
    pub verbose: bool,

    /// Log loading and resolution details to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Path to a JSON settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generate iptables rules for excluded targets
    #[arg(short = 'f', long, alias = "fw", group = "output", help_heading = "Output")]
    pub firewall: bool,

    /// Output in greppable format
    #[arg(short = 'g', long, group = "output", help_heading = "Output")]
    pub greppable: bool,

    /// Only list in-scope targets
    #[arg(short = 'i', long, alias = "li", group = "output", help_heading = "Output")]
    pub list_in: bool,

    /// Only list excluded targets
    #[arg(short = 'x', long, alias = "le", group = "output", help_heading = "Output")]
    pub list_ex: bool,

    /// Only list out-of-scope targets
    #[arg(short = 'o', long, alias = "lo", group = "output", help_heading = "Output")]
    pub list_out: bool,

    /// Only list targets that are not in scope (excluded and out-of-scope)
    #[arg(short = 'n', long, alias = "ln", group = "output", help_heading = "Output")]
    pub list_not: bool,

    /// Output classified targets as JSON
    #[arg(short = 'j', long, group = "output", help_heading = "Output")]
    pub json: bool,
}

impl Cli {
    /// The output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.firewall {
            OutputMode::Firewall
        } else if self.greppable {
            OutputMode::Greppable
        } else if self.list_in {
            OutputMode::List(ListFilter::InScope)
        } else if self.list_ex {
            OutputMode::List(ListFilter::Excluded)
        } else if self.list_out {
            OutputMode::List(ListFilter::OutOfScope)
        } else if self.list_not {
            OutputMode::List(ListFilter::NotInScope)
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Report
        }
    }

    /// Run one classification pass, writing results to `out`.
    ///
    /// Fails if the settings or the scope file cannot be loaded, or if any
    /// list line is malformed. Unresolvable targets are only warned about.
    pub async fn execute<W: Write>(
        &self,
        resolver: &dyn NameResolver,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let settings = Settings::load(self.config.as_deref()).context("failed to load settings")?;
        let mode = self.output_mode();
        let verbose = self.verbose || settings.verbose;

        if mode.shows_banner() {
            print_banner(out)?;
        }

        let scope_file = settings.scope_file(self.scope_file.as_deref());
        let exclude_file = settings.exclude_file(self.exclude_file.as_deref());
        let scope = Scope::load(&scope_file, &exclude_file)?;

        let inputs = TargetRegistry::read_inputs(&self.target)
            .with_context(|| format!("failed to read targets from {}", self.target))?;
        let mut registry = TargetRegistry::resolve(inputs, resolver).await;
        registry.classify(&scope);

        registry.render(out, mode, verbose)?;
        out.flush()?;
        Ok(())
    }
}
