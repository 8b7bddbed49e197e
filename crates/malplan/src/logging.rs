use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "malplan.log";
/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Drop the partial line at the start of a tail read from the middle of a file
fn from_first_full_line(tail: &[u8]) -> &[u8] {
    match tail.iter().position(|&b| b == b'\n') {
        Some(newline) => &tail[newline + 1..],
        None => tail,
    }
}

/// Trim the log to its most recent `KEEP_SIZE` bytes once it passes `MAX_LOG_SIZE`
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    let file_size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if file_size <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(file_size - KEEP_SIZE))?;
        file.read_to_end(&mut tail)?;
    }

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(from_first_full_line(&tail))?;
    Ok(())
}

fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("malplan={level},malplan_core=warn");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize logging.
///
/// With a `log_dir`, logs are appended to `{log_dir}/malplan.log` through a
/// non-blocking writer; the returned guard must be held until exit so buffered
/// lines are flushed. Without one, logs go to stderr.
/// The level can be overridden with the `RUST_LOG` environment variable.
pub fn init_logging(log_dir: Option<&Path>, level: &str) -> color_eyre::Result<Option<WorkerGuard>> {
    let filter = env_filter(level);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?;
        return Ok(None);
    };

    fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "malplan logging initialized");
    Ok(Some(guard))
}
