use minires_core::logging;
use std::io::Write;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout stays reserved for results.
    let file_logging = logging::init_logging().is_ok();
    if !file_logging {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        report_error(&err, file_logging, &mut std::io::stderr().lock());
        std::process::exit(1);
    }
}

/// Writes the error chain to `stderr` once. The log file gets a copy only when
/// logging goes to a file; otherwise the tracing event would land on stderr too.
fn report_error<W: Write>(err: &anyhow::Error, file_logging: bool, stderr: &mut W) {
    if file_logging {
        tracing::error!("{:#}", err);
    }
    let _ = writeln!(stderr, "minires error: {:#}", err);
}
