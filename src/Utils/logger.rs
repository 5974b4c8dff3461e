//! Logging set-up for the binary and for hosts that do not bring their own logger
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger already initialised: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// terminal logger at `level`, plus a file logger when `log_file` is given.
/// Can only succeed once per process
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(level, Config::default(), File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::info;
    use tempfile::tempdir;

    #[test]
    fn test_file_logger_receives_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gsi.log");
        init_logger(LevelFilter::Info, Some(&path)).unwrap();
        info!("surface model logger online");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("surface model logger online"));

        // the global logger is set only once
        assert!(matches!(
            init_logger(LevelFilter::Info, None),
            Err(LoggerError::SetLogger(_))
        ));
    }
}
