// Scoper - check targets against a scope definition

use clap::Parser;
use scoper::cli::Cli;
use scoper::output;
use scoper::resolver::DnsResolver;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let resolver = DnsResolver::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.execute(&resolver, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. `--debug` wins over `RUST_LOG`, which wins over the
/// warnings-only default.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("scoper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
