use std::fmt::Display;

/// Report a failed [`Result`] without consuming it.
///
/// For calls whose failure should not stop the caller, like registering bot
/// commands at startup.
pub trait LogError {
    fn log_error(&self) -> &Self;
    /// Same as [`LogError::log_error`], `context` is prepended to the error
    fn log_error_msg(&self, context: &str) -> &Self;
}

impl<T, E: Display> LogError for Result<T, E> {
    fn log_error(&self) -> &Self {
        if let Err(e) = self {
            log::error!("{e}");
        }
        self
    }
    fn log_error_msg(&self, context: &str) -> &Self {
        if let Err(e) = self {
            log::error!("{context}: {e}");
        }
        self
    }
}
