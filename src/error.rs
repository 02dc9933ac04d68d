use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellTuneError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type WellTuneResult<T> = Result<T, WellTuneError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> WellTuneResult<T>;
    fn with_context<F>(self, f: F) -> WellTuneResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> WellTuneResult<T> {
        self.map_err(|e| WellTuneError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> WellTuneResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WellTuneError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> WellTuneResult<T> {
        self.ok_or_else(|| WellTuneError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> WellTuneResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| WellTuneError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! welltune_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::WellTuneError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::WellTuneError::$error_type(format!($fmt, $($arg)*))
    };
}
