use async_trait::async_trait;

use super::{AssumedRole, WebIdentityToken};
use crate::error::BoxError;

/// A single AssumeRoleWithWebIdentity call.
///
/// The token is moved in so it is dropped as soon as the broker is done with it.
#[derive(Debug)]
pub struct WebIdentityRequest {
    pub role_arn: String,
    pub role_session_name: &'static str,
    pub token: WebIdentityToken,
}

/// Identity broker capable of federating a web identity token into a role session
#[async_trait]
pub trait IdentityBroker: Send + Sync {
    async fn assume_role_with_web_identity(
        &self,
        request: WebIdentityRequest,
    ) -> Result<AssumedRole, BoxError>;
}

/// Builds region-scoped brokers.
///
/// Implementations hold no per-exchange state, so one connector can serve
/// concurrent exchanges.
#[async_trait]
pub trait BrokerConnector: Send + Sync {
    type Broker: IdentityBroker;

    async fn connect(&self, region: &str) -> Result<Self::Broker, BoxError>;
}
