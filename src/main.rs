mod check;
mod cli;
mod config;
mod history;
mod management;
mod status;
mod threshold;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use crate::check::run_check;
use crate::cli::Cli;
use crate::history::FileHistoryStore;
use crate::management::HttpQueueStatusProvider;
use crate::status::CheckResult;

// Stdout belongs to the status line, so logs go to stderr and stay off
// unless asked for.
fn init_json_logging(verbose: bool) {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let default_filter = if verbose { "debug" } else { "off" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

fn finish(result: CheckResult) -> ExitCode {
    println!("{}", result.render());
    result.status.exit_code()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = error.print();
                return ExitCode::SUCCESS;
            }
            let rendered = error.to_string();
            let first_line = rendered.lines().next().unwrap_or("invalid arguments");
            return finish(CheckResult::unknown(first_line));
        }
    };

    init_json_logging(cli.verbose);

    let config = match cli.into_check_config() {
        Ok(config) => config,
        Err(error) => {
            log::error!("configuration error: {}", error);
            return finish(CheckResult::unknown(error.to_string()));
        }
    };

    let provider = match HttpQueueStatusProvider::new(&config) {
        Ok(provider) => provider,
        Err(error) => return finish(CheckResult::unknown(error.to_string())),
    };
    log::debug!(
        "check_starting url={} window={} tmp_dir={}",
        provider.url(),
        config.samples,
        config.tmp_dir.display()
    );

    let store = FileHistoryStore::new(&config.tmp_dir);
    finish(run_check(&config, &provider, &store).await)
}
