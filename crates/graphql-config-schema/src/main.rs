mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);

    let result = cli.generate.run().await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string());

            match parse_log_level(env_val.as_deref().ok()) {
                Ok(level) => level,
                Err(other) => {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{other}`"
                    ));
                    DEFAULT_LOG_LEVEL
                },
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

/// `None` (unset) selects the default level; unrecognized values are handed
/// back as the error.
fn parse_log_level(env_val: Option<&str>) -> Result<tracing::Level, String> {
    match env_val {
        Some("DEBUG" | "debug") => Ok(tracing::Level::DEBUG),
        Some("INFO" | "info") => Ok(tracing::Level::INFO),
        Some("TRACE" | "trace") => Ok(tracing::Level::TRACE),
        Some("VERBOSE" | "verbose") => Ok(tracing::Level::DEBUG),
        Some(other) => Err(other.to_string()),
        None => Ok(DEFAULT_LOG_LEVEL),
    }
}
