use log::{debug, error};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process
        std::panic::catch_unwind(|| init_logger(true)).ok();
    }

    #[test]
    fn test_logger_initialization_normal() {
        std::panic::catch_unwind(|| init_logger(false)).ok();
    }

    #[test]
    fn test_log_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        log_error("Failed to read config", Some(&io_error));
    }

    #[test]
    fn test_log_error_without_source() {
        log_error("Something went wrong", None);
    }
}
