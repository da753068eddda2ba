use std::{env, ffi::OsString, path::PathBuf};

use tracing::debug;

use crate::{
    constants::{
        AWS_DEFAULT_REGION_ENV, AWS_REGION_ENV, AWS_ROLE_ARN_ENV, AWS_WEB_IDENTITY_TOKEN_FILE_ENV,
    },
    error::{Error, Result},
};

/// Inputs required for a web identity federation call.
///
/// Built once per invocation from the environment; nothing downstream reads
/// the environment again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederationParameters {
    pub region: String,
    pub role_arn: String,
    pub token_path: PathBuf,
}

impl FederationParameters {
    /// Resolve parameters from the process environment
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| env::var_os(name))
    }

    /// Resolve parameters through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones. The token path is
    /// taken as raw OS bytes; region and role ARN must be valid UTF-8. On
    /// failure the error names every variable that was checked, not just the
    /// first missing one.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty_os = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let non_empty =
            |name: &str| non_empty_os(name).and_then(|value| value.into_string().ok());

        let region = non_empty(AWS_REGION_ENV)
            .inspect(|_| debug!("Region taken from {}", AWS_REGION_ENV))
            .or_else(|| {
                non_empty(AWS_DEFAULT_REGION_ENV)
                    .inspect(|_| debug!("Region taken from {}", AWS_DEFAULT_REGION_ENV))
            });
        let role_arn = non_empty(AWS_ROLE_ARN_ENV);
        let token_path = non_empty_os(AWS_WEB_IDENTITY_TOKEN_FILE_ENV).map(PathBuf::from);

        let (Some(region), Some(role_arn), Some(token_path)) = (region, role_arn, token_path)
        else {
            return Err(Error::Configuration);
        };

        debug!("Region: {}", region);
        debug!("Role ARN: {}", role_arn);
        debug!("Token file: {}", token_path.display());

        Ok(Self {
            region,
            role_arn,
            token_path,
        })
    }
}
