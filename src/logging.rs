use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const MAX_LOG_SIZE: u64 = 1024 * 1024; // 1MB

/// Initialize logging for a component.
///
/// - `component_name`: Name of the binary (e.g., "tui", "cli")
/// - `to_file`: If true, logs go to a file in the data directory.
/// - `to_console`: If true, logs go to stdout. The TUI must pass false here;
///   console output corrupts the raw-mode terminal.
///
/// Returns a guard that must be kept alive for the duration of the program.
pub fn init_logging(
    component_name: &str,
    to_file: bool,
    to_console: bool,
) -> io::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        let log_dir = get_log_directory()?;
        fs::create_dir_all(&log_dir)?;

        let log_filename = format!("{}.log", component_name);
        let log_path = log_dir.join(&log_filename);

        // Truncate if over 1MB
        truncate_if_needed(&log_path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let (non_blocking_file, guard) = tracing_appender::non_blocking(BufWriter::new(file));

        if to_console {
            let file_layer = fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(io::stdout).with_ansi(true))
                .with(file_layer)
                .init();
        } else {
            let file_layer = fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        }

        tracing::info!("Logging to file: {}", log_path.display());

        Ok(Some(guard))
    } else if to_console {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();

        Ok(None)
    } else {
        // No sinks requested; leave the default no-op subscriber in place.
        Ok(None)
    }
}

/// Get the log directory path.
fn get_log_directory() -> io::Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME")
            .map_err(|_| io::Error::new(io::ErrorKind::NotFound, "HOME not set"))?;
        Ok(PathBuf::from(home).join(".local/share/claire-demo/logs"))
    }

    #[cfg(not(target_os = "macos"))]
    {
        use directories::ProjectDirs;
        let proj_dirs = ProjectDirs::from("", "", "claire-demo").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Failed to determine data directory")
        })?;
        Ok(proj_dirs.data_dir().join("logs"))
    }
}

/// Truncate the log file if it has grown past the size cap.
fn truncate_if_needed(path: &PathBuf) -> io::Result<()> {
    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > MAX_LOG_SIZE {
            File::create(path)?;
        }
    }
    Ok(())
}
