use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Decode(#[from] dashcrust_net::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("input is not valid hex")]
    BadHex,

    #[error("input of {len} bytes is not a whole number of 80 byte headers")]
    RaggedInput { len: usize },

    #[error("{count} headers do not fit in one headers2 message, maximum is {max}")]
    TooManyHeaders { count: usize, max: usize },
}
