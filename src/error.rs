//! Error types for the totp binary

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OtpError>;

#[derive(Error, Debug)]
pub enum OtpError {
    #[error("HMAC rejected the secret key")]
    InvalidKey,

    #[error("interval must be greater than zero")]
    ZeroInterval,

    #[error("time is before the unix epoch")]
    BeforeEpoch,

    #[error("open: {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse: {0}")]
    Read(#[from] io::Error),

    #[error("parse: invalid data provided")]
    NoProviders,

    #[error("config: {0}")]
    Config(String),

    #[error("config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl OtpError {
    /// Process exit status for errors that abort startup.
    pub fn exit_code(&self) -> i32 {
        match self {
            OtpError::NoProviders => 65,
            OtpError::Open { .. } => 66,
            OtpError::Read(_) => 74,
            OtpError::Config(_) | OtpError::Toml(_) => 78,
            OtpError::InvalidKey | OtpError::ZeroInterval | OtpError::BeforeEpoch => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_failures_have_distinct_exit_codes() {
        let open = OtpError::Open {
            path: PathBuf::from("missing.tsv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let codes = [
            OtpError::NoProviders.exit_code(),
            open.exit_code(),
            OtpError::Read(io::Error::new(io::ErrorKind::Other, "boom")).exit_code(),
            OtpError::Config(String::from("bad")).exit_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn open_error_names_the_path() {
        let err = OtpError::Open {
            path: PathBuf::from("secrets.tsv"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(err.to_string(), "open: secrets.tsv: No such file");
    }
}
