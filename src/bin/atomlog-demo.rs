#![deny(unsafe_code)]

//! Replays a fixed sequence of log calls against the process-wide sink.
//!
//! ```text
//! atomlog-demo [--level LEVEL] [--no-color] [--retries N]
//! ```

use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use logging::{
    Severity, SinkConfig, log_critical, log_custom, log_debug, log_error, log_if, log_info,
    log_warn,
};

/// Retries above this count trigger the conditional error.
const RETRY_LIMIT: u32 = 2;

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("atomlog-demo")
        .about("Emit a sample of every log call shape to stdout and stderr.")
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Minimum severity to emit: debug, info, warn, or error.")
                .value_parser(|value: &str| value.parse::<Severity>())
                .default_value("info"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Write warnings and errors without ANSI color sequences.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("retries")
                .long("retries")
                .value_name("N")
                .help("Retry count reported by the conditional record.")
                .value_parser(clap::value_parser!(u32))
                .default_value("3"),
        )
}

/// Settings collected from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DemoOptions {
    config: SinkConfig,
    retries: u32,
}

impl DemoOptions {
    fn from_matches(matches: &ArgMatches) -> Self {
        let threshold = matches
            .get_one::<Severity>("level")
            .copied()
            .unwrap_or_default();
        let retries = matches.get_one::<u32>("retries").copied().unwrap_or(0);
        Self {
            config: SinkConfig::new()
                .with_threshold(threshold)
                .with_color(!matches.get_flag("no-color")),
            retries,
        }
    }
}

fn parse_options<I, T>(args: I) -> Result<DemoOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = clap_command().try_get_matches_from(args)?;
    Ok(DemoOptions::from_matches(&matches))
}

fn replay(retries: u32) {
    log_debug!("resolved {} configuration sources", 3);
    log_info!("demo started");
    log_warn!("disk space below {}%", 20);
    log_error!("failed to open {}", "config.toml");
    log_custom!(Severity::Warn, "network latency high");
    log_critical!("system overheating");
    log_if!(
        retries > RETRY_LIMIT,
        Severity::Error,
        "exceeded retry limit: {retries} attempts"
    );

    #[cfg(feature = "tracing")]
    forward_tracing_event();
}

#[cfg(feature = "tracing")]
fn forward_tracing_event() {
    match logging::init_tracing() {
        Ok(()) => tracing::warn!("tracing bridge active"),
        Err(error) => log_warn!("tracing bridge unavailable: {error}"),
    }
}

fn main() -> ExitCode {
    let options = match parse_options(env::args_os()) {
        Ok(options) => options,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1));
        }
    };

    logging::apply_config(options.config);
    replay(options.retries);
    ExitCode::SUCCESS
}
