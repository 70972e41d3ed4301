//! vscroll - Entry Point

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use vscroll::config::ResolvedConfig;
use vscroll::error::AppError;
use vscroll::logging::LoggingError;

/// vscroll - scroll through a long history in the terminal
#[derive(Parser, Debug)]
#[command(name = "vscroll")]
#[command(version)]
#[command(about = "Virtualized terminal viewer for long line histories")]
pub struct Args {
    /// Text file with one history entry per line (demo history if omitted)
    pub file: Option<PathBuf>,

    /// Number of demo lines to generate when no file is given
    #[arg(short, long)]
    pub demo: Option<usize>,

    /// Extra rows kept bound beyond the visible area
    #[arg(long)]
    pub overscan: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = resolve_config(&args, vscroll::logging::init)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let input_source = vscroll::source::detect_input_source(args.file, args.demo);
    let lines = input_source.load()?;

    let options = vscroll::view::ViewOptions::new(config.scroller_config(), config.row_metrics());
    vscroll::view::run_with_lines(lines, options)?;

    Ok(())
}

/// Defaults → Config File → Env Vars → CLI Args.
///
/// Logging starts as soon as the log path is known, so problems with the
/// environment overrides reach the log file.
fn resolve_config<F>(args: &Args, init_logging: F) -> Result<ResolvedConfig, AppError>
where
    F: FnOnce(&Path) -> Result<(), LoggingError>,
{
    let config_file = vscroll::config::load_config_with_precedence(args.config.clone())?;
    let merged = vscroll::config::merge_config(config_file);

    init_logging(&merged.log_file_path)?;

    let with_env = vscroll::config::apply_env_overrides(merged);
    Ok(vscroll::config::apply_cli_overrides(with_env, args.overscan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use vscroll::config::OVERSCAN_ENV_VAR;

    /// Collects formatted log lines and logging-init markers in order.
    #[derive(Clone, Default)]
    struct Journal(Arc<Mutex<Vec<String>>>);

    impl Journal {
        fn push(&self, entry: String) {
            self.0.lock().unwrap().push(entry);
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for Journal {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.push(String::from_utf8_lossy(buf).into_owned());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Journal {
        type Writer = Journal;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn args_without_config_file() -> Args {
        Args::parse_from(["vscroll", "--config", "/nonexistent/vscroll/config.toml"])
    }

    #[test]
    #[serial(vscroll_overscan)]
    fn invalid_env_overscan_is_logged_after_logging_starts() {
        std::env::set_var(OVERSCAN_ENV_VAR, "lots");
        let journal = Journal::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(journal.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let init_journal = journal.clone();
        let result = tracing::subscriber::with_default(subscriber, || {
            resolve_config(&args_without_config_file(), |path| {
                init_journal.push(format!("init {}", path.display()));
                Ok(())
            })
        });
        std::env::remove_var(OVERSCAN_ENV_VAR);

        let config = result.unwrap();
        assert_eq!(config.overscan, ResolvedConfig::default().overscan);

        let entries = journal.entries();
        let init = entries.iter().position(|e| e.starts_with("init "));
        let warning = entries.iter().position(|e| e.contains("Ignoring invalid"));
        assert!(
            matches!((init, warning), (Some(i), Some(w)) if i < w),
            "logging must start before the warning, got {entries:?}"
        );
    }

    #[test]
    #[serial(vscroll_overscan)]
    fn cli_overscan_wins_over_env() {
        std::env::set_var(OVERSCAN_ENV_VAR, "3");
        let args = Args::parse_from([
            "vscroll",
            "--config",
            "/nonexistent/vscroll/config.toml",
            "--overscan",
            "9",
        ]);

        let result = resolve_config(&args, |_| Ok(()));
        std::env::remove_var(OVERSCAN_ENV_VAR);

        assert_eq!(result.unwrap().overscan, 9);
    }

    #[test]
    #[serial(vscroll_overscan)]
    fn logging_failure_stops_resolution() {
        let result = resolve_config(&args_without_config_file(), |_| {
            Err(LoggingError::SubscriberAlreadySet)
        });

        assert!(matches!(
            result,
            Err(AppError::Logging(LoggingError::SubscriberAlreadySet))
        ));
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["vscroll", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["vscroll", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["vscroll"]);
        assert_eq!(args.file, None);
        assert_eq!(args.demo, None);
        assert_eq!(args.overscan, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["vscroll", "history.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("history.txt")));
    }

    #[test]
    fn test_demo_short_flag() {
        let args = Args::parse_from(["vscroll", "-d", "500"]);
        assert_eq!(args.demo, Some(500));
    }

    #[test]
    fn test_demo_rejects_negative() {
        let result = Args::try_parse_from(["vscroll", "--demo", "-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overscan_flag() {
        let args = Args::parse_from(["vscroll", "--overscan", "0"]);
        assert_eq!(args.overscan, Some(0));
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["vscroll", "--config", "/tmp/vscroll.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/vscroll.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from(["vscroll", "-d", "20", "--overscan", "6"]);
        assert_eq!(args.demo, Some(20));
        assert_eq!(args.overscan, Some(6));
    }
}
