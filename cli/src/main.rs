//! CLI entrypoint for fact-counter
//!
//! This is the main binary that wires together all layers using
//! dependency injection. It owns the lifecycle of the diagnostic log and
//! the HTTP client.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use factcount_application::{CountWordUseCase, DiagnosticLogger, NoDiagnosticLogger};
use factcount_infrastructure::{
    ConfigLoader, FileConfig, FileDiagnosticLogger, NumbersApiFactSource,
};
use factcount_presentation::{Cli, ConsoleFormatter};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_TRACE_FILE: &str = "fact-counter.trace.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered trace lines are flushed
    let _trace_guard = init_tracing(cli.verbose, cli.trace_file.as_deref());
    install_panic_hook();

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    if cli.no_color || !config.output.color || config.output.format.is_machine_readable() {
        ConsoleFormatter::set_color_enabled(false);
    }

    let word = match cli.word {
        Some(w) => w,
        None => bail!("A word is required. Use --show-config to inspect configuration."),
    };

    // === Dependency Injection ===
    let source = NumbersApiFactSource::for_number(
        &config.fact.base_url,
        config.fact.number,
        config.fact.timeout(),
    )?;
    let logger = diagnostic_logger(&config);
    let use_case = CountWordUseCase::new(Arc::new(source))
        .with_logger(logger)
        .with_config(config.count_config());

    info!("Starting fact-counter");

    match use_case.execute(word).await {
        Ok(result) => {
            println!(
                "{}",
                ConsoleFormatter::render(&result, config.output.format)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", ConsoleFormatter::format_error(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Tracing filter for the `-v` count
fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Initialize tracing based on verbosity level, optionally mirrored to a file
fn init_tracing(verbose: u8, trace_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = verbosity_filter(verbose);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match trace_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| DEFAULT_TRACE_FILE.into());
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Send panic reports to tracing instead of stderr.
///
/// A panic on the counting path is already reported as an internal error and
/// written to the diagnostic log; the raw report is only shown with `-vv`.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        debug!("{}", info);
    }));
}

/// Build the diagnostic log collaborator; falls back to a no-op logger when
/// the file cannot be opened so counting still works.
fn diagnostic_logger(config: &FileConfig) -> Arc<dyn DiagnosticLogger> {
    if !config.log.enabled {
        return Arc::new(NoDiagnosticLogger);
    }

    match FileDiagnosticLogger::new(config.log.path(), config.log.logger_name.clone()) {
        Some(logger) => {
            info!("Diagnostic log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Diagnostic log disabled: could not open {}", config.log.path);
            Arc::new(NoDiagnosticLogger)
        }
    }
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(mode) = cli.mode {
        config.counting.mode = mode;
    }
    if let Some(number) = cli.number {
        config.fact.number = number;
    }
    if let Some(timeout) = cli.timeout {
        config.fact.timeout_seconds = timeout;
    }
    if let Some(path) = &cli.log_file {
        config.log.path = path.to_string_lossy().into_owned();
    }
    if cli.no_log {
        config.log.enabled = false;
    }
    if let Some(format) = cli.output {
        config.output.format = format.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcount_domain::{CountMode, FactError, OutputFormat};
    use std::io::{self, Write};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory sink for formatted tracing output
    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(verbose: u8) -> (impl tracing::Subscriber + Send + Sync, CapturedOutput) {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::registry()
            .with(verbosity_filter(verbose))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(move || writer.clone()),
            );
        (subscriber, output)
    }

    fn unreachable_source() -> NumbersApiFactSource {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        NumbersApiFactSource::for_number(&format!("http://{}", addr), 34, Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn test_failed_run_shows_only_classified_message_by_default() {
        let (subscriber, output) = capture(0);
        let _guard = tracing::subscriber::set_default(subscriber);
        let use_case = CountWordUseCase::new(Arc::new(unreachable_source()));

        let error = use_case.execute("just").await.unwrap_err();

        assert_eq!(error, FactError::ConnectionFailure);
        assert_eq!(output.contents(), "");
        assert!(ConsoleFormatter::format_error(&error).ends_with("Connection hang out"));
    }

    #[tokio::test]
    async fn test_failure_detail_is_shown_with_verbose() {
        let (subscriber, output) = capture(2);
        let _guard = tracing::subscriber::set_default(subscriber);
        let use_case = CountWordUseCase::new(Arc::new(unreachable_source()));

        let _ = use_case.execute("just").await;

        let contents = output.contents();
        assert!(contents.contains("Fact request to"));
        assert!(contents.contains("count_occurrences failed (connection_failure)"));
    }

    #[test]
    fn test_panic_report_needs_verbose() {
        install_panic_hook();
        for (verbose, shown) in [(0, false), (2, true)] {
            let (subscriber, output) = capture(verbose);
            tracing::subscriber::with_default(subscriber, || {
                let result: std::thread::Result<()> =
                    std::panic::catch_unwind(|| panic!("fact source exploded"));
                assert!(result.is_err());
            });
            assert_eq!(output.contents().contains("fact source exploded"), shown);
        }
        // restore the default hook
        let _ = std::panic::take_hook();
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "fact-counter",
            "--mode",
            "substring",
            "--number",
            "7",
            "--timeout",
            "2",
            "--log-file",
            "logs/diag.log",
            "-o",
            "count",
            "just",
        ]);
        let mut config = FileConfig::default();

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.counting.mode, CountMode::Substring);
        assert_eq!(config.fact.number, 7);
        assert_eq!(config.fact.timeout_seconds, 2);
        assert_eq!(config.log.path, "logs/diag.log");
        assert!(config.log.enabled);
        assert_eq!(config.output.format, OutputFormat::Count);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["fact-counter", "just"]);
        let mut config = FileConfig::default();
        config.fact.number = 99;

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.fact.number, 99);
        assert_eq!(config.counting.mode, CountMode::Token);
    }

    #[test]
    fn test_no_log_disables_diagnostic_log() {
        let cli = Cli::parse_from(["fact-counter", "--no-log", "just"]);
        let mut config = FileConfig::default();

        apply_cli_overrides(&mut config, &cli);

        assert!(!config.log.enabled);
    }
}
