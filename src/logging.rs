// Conditional logging macros - only active in debug builds

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR_NAME: &str = "wordle-game";
const LOG_FILE_NAME: &str = "wordle.log";

/// Default log location: `<data_local_dir>/wordle-game/wordle.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Route `log` output to `path`.
///
/// The terminal UI owns stdout, so logs always go to a file. `RUST_LOG`
/// overrides the default level.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(path: &Path, verbose: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let default_level = if verbose { "debug" } else { "info" };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();

    // A logger may already be installed (tests); keep the existing one
    if result.is_err() {
        log::warn!("logger already initialised, keeping existing logger");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_ends_with_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("wordle-game/wordle.log"));
        }
    }

    #[test]
    fn test_init_logging_creates_file() {
        let path = std::env::temp_dir()
            .join("wordle_game_log_test")
            .join("test.log");
        let _ = fs::remove_file(&path);
        init_logging(&path, true).unwrap();
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }
}
