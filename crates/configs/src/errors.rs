use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }
}

/// Why a stored string did not convert into an unsigned integer.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("sign prefix not allowed on unsigned value")]
    UnsignedSign,
    #[error(transparent)]
    Int(#[from] ParseIntError),
}
