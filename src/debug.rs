// Debug logging for termpong
// Routes `tracing` output to a file when the --debug flag is given

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

/// Where the debug log is written
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("termpong-debug.log")
}

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber and no file
/// - If enabled=true: Truncates the log file, writes a header and installs
///   a `tracing` subscriber that appends every event to it
///
/// The terminal belongs to the game, so nothing is ever logged to stderr.
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== termpong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    tracing::info!(path = %path.display(), "debug logging enabled");
    Ok(())
}
