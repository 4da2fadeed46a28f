use log::error;
use std::process::exit;
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config: {0}")]
    Config(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code to report this error with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(e) => e.raw_os_error().unwrap_or(1),
            _ => 2,
        }
    }
}

/// Logs `msg` and terminates the process with `code`.
pub fn crash<S: AsRef<str>>(msg: S, code: i32) -> ! {
    error!("{}", msg.as_ref());
    exit(code);
}
