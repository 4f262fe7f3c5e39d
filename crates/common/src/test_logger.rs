use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Print logs of tests to stderr. Safe to call from every test, only the first
/// call installs the logger.
pub fn init_logger() {
    if log::max_level() != LevelFilter::Off {
        return;
    }
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    ) {
        eprintln!("test logger is not installed: {e}");
    }
}
