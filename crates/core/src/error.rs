use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigParse(String),
    IoError(std::io::Error),
    /// Connection-level fault: refused, DNS, timeout.
    Transport(String),
    /// The provider answered with a non-2xx status.
    Api { status: u16, body: String },
    /// Response body was not the JSON we expected.
    Parse(String),
    /// Deploy bundle could not be opened for upload.
    Bundle(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Api { status, body } => write!(f, "API error (HTTP {}): {}", status, body),
            Error::Parse(msg) => write!(f, "Response parse error: {}", msg),
            Error::Bundle(msg) => write!(f, "Deploy bundle error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
