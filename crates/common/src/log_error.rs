use std::fmt::Display;

use log::Level;

/// Log the error side of a `Result` and pass it through unchanged
pub trait LogError {
    fn log_error_msg(&self, msg: &str) -> &Self;
    /// Same as [`LogError::log_error_msg`], but at [`Level::Warn`].
    ///
    /// Used by code that must not produce error records itself, like the
    /// job forwarding error records to telegram.
    fn log_warn_msg(&self, msg: &str) -> &Self;
}

impl<T, E> LogError for Result<T, E>
where
    E: Display,
{
    fn log_error_msg(&self, msg: &str) -> &Self {
        log_with_level(self, msg, Level::Error)
    }
    fn log_warn_msg(&self, msg: &str) -> &Self {
        log_with_level(self, msg, Level::Warn)
    }
}

fn log_with_level<'r, T, E: Display>(res: &'r Result<T, E>, msg: &str, level: Level) -> &'r Result<T, E> {
    if let Err(e) = res {
        log::log!(level, "{msg}: {e}")
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_error_passes_result_through() {
        crate::init_logger();

        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("boom".to_string());

        assert_eq!(ok.log_error_msg("failed"), &Ok(1));
        assert_eq!(err.log_error_msg("failed"), &Err("boom".to_string()));
        assert_eq!(err.log_warn_msg("failed"), &Err("boom".to_string()));
    }
}
