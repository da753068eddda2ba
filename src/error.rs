use std::{io, path::PathBuf};

use thiserror::Error;

use crate::constants::REQUIRED_ENV_VARS;

/// Boxed cause carried by broker and client failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a single credential exchange can fail.
///
/// All variants are terminal for the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required environment variables are missing: {}", REQUIRED_ENV_VARS)]
    Configuration,

    #[error("unable to load AWS config")]
    ClientInit(#[source] BoxError),

    #[error("failed to read web identity token file {}", .path.display())]
    TokenRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to assume role with web identity")]
    Exchange(#[source] BoxError),
}
