use std::{io, path::Path};

use tokio::fs;
use tracing::{debug, info};

use super::{
    AssumedRole, WebIdentityToken,
    broker::{BrokerConnector, IdentityBroker, WebIdentityRequest},
};
use crate::{
    config::FederationParameters,
    constants::ROLE_SESSION_NAME,
    display::format_expiration,
    error::{Error, Result},
};

/// Exchange the web identity token named by `params` for temporary credentials.
///
/// Runs client construction, token read and the STS call strictly in that
/// order. Any failure aborts the exchange; no partial result is returned.
pub async fn exchange<C>(connector: &C, params: FederationParameters) -> Result<AssumedRole>
where
    C: BrokerConnector,
{
    let FederationParameters {
        region,
        role_arn,
        token_path,
    } = params;

    let broker = connector.connect(&region).await.map_err(Error::ClientInit)?;

    let token = read_token(&token_path)
        .await
        .map_err(|source| Error::TokenRead {
            path: token_path.clone(),
            source,
        })?;

    let request = WebIdentityRequest {
        role_arn,
        role_session_name: ROLE_SESSION_NAME,
        token,
    };

    let assumed = broker
        .assume_role_with_web_identity(request)
        .await
        .map_err(Error::Exchange)?;

    info!("Assumed role: {}", assumed.identity.arn);
    info!(
        "Credentials expire at: {}",
        format_expiration(&assumed.credentials.expiration)
    );
    Ok(assumed)
}

/// Read the token file in full; it is never cached between exchanges
async fn read_token(path: &Path) -> io::Result<WebIdentityToken> {
    debug!("Reading web identity token from {}", path.display());

    let bytes = fs::read(path).await?;
    let token =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(WebIdentityToken::new(token))
}
