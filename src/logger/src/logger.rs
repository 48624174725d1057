use std::io::Write;

use env_logger::{fmt::Color, Builder, Env};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{Level, LevelFilter};
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Environment variable used to override the verbosity filter (`env_logger` syntax).
pub const LOG_ENV_VAR: &str = "HEREDITY_LOG";

static INSTANCE: OnceCell<Logger> = OnceCell::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to wrap logger with the progress bar bridge")]
    Bridge(#[source] log::SetLoggerError),

    #[error("Logger was already initialized")]
    AlreadyInitialized,
}

/// Global logger handle. Keeps the `MultiProgress` that every progress bar of the program must be attached to,
/// so that log lines are printed above the bars instead of tearing through them.
#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {
    /// Initialize the global logger.
    /// # Arguments
    /// - `verbosity`: 0 = Error, 1 = Warn, 2 = Info, 3 = Debug, 4+ = Trace
    ///
    /// # Errors
    /// - if a global logger was already set, either by this method or by another crate.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let env = Env::default().filter(LOG_ENV_VAR);

        let logger = Builder::new().filter_level(Self::u8_to_loglevel(verbosity))
            .format(|buf, record| {
                // ---- Errors carry their source location.
                let (traceback, set_intensity) = match record.level() {
                    Level::Error => (
                        format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)),
                        true
                    ),
                    _ => (String::new(), false)
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .build();

        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger)
            .try_init()
            .map_err(LoggerError::Bridge)?;
        INSTANCE.set(Self{multi_pg}).map_err(|_| LoggerError::AlreadyInitialized)
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// Access the global `MultiProgress`. Returns `None` if `Logger::init()` was never called (e.g. library use,
    /// unit tests), in which case callers should fall back to hidden progress bars.
    pub fn multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level(){
        // Other tests of this binary may have set the logger first.
        let _ = Logger::init(0);
        for level in 0..u8::MAX {
            Logger::set_level(level);

            let expected_level = match level {
                0           => LevelFilter::Error,
                1           => LevelFilter::Warn,
                2           => LevelFilter::Info,
                3           => LevelFilter::Debug,
                4..=u8::MAX => LevelFilter::Trace
            };

            assert_eq!(log::max_level(), expected_level);
        }
    }

    #[test]
    fn double_init_is_an_error() {
        let _ = Logger::init(1);
        assert!(Logger::init(1).is_err());
    }
}
