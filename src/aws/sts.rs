use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, retry::RetryConfig};
use aws_sdk_sts::Client as StsClient;
use tracing::{debug, info};

use super::{
    AssumedIdentity, AssumedRole, TemporaryCredentials,
    broker::{BrokerConnector, IdentityBroker, WebIdentityRequest},
};
use crate::error::BoxError;

/// Connects to the regional AWS STS endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct StsConnector;

#[async_trait]
impl BrokerConnector for StsConnector {
    type Broker = StsBroker;

    async fn connect(&self, region: &str) -> Result<StsBroker, BoxError> {
        if !is_valid_region(region) {
            return Err(format!("invalid region: {region}").into());
        }

        // AssumeRoleWithWebIdentity is unsigned, so no credential chain is loaded.
        // Endpoint overrides (AWS_ENDPOINT_URL_STS) still apply.
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
            .no_credentials()
            .load()
            .await;

        info!("Using region: {}", region);
        Ok(StsBroker {
            client: StsClient::new(&config),
        })
    }
}

/// STS-backed identity broker
#[derive(Debug, Clone)]
pub struct StsBroker {
    client: StsClient,
}

#[async_trait]
impl IdentityBroker for StsBroker {
    async fn assume_role_with_web_identity(
        &self,
        request: WebIdentityRequest,
    ) -> Result<AssumedRole, BoxError> {
        info!("Calling AWS STS AssumeRoleWithWebIdentity");
        debug!("Role ARN: {}", request.role_arn);
        debug!("Session name: {}", request.role_session_name);

        let response = self
            .client
            .assume_role_with_web_identity()
            .role_arn(request.role_arn)
            .role_session_name(request.role_session_name)
            .web_identity_token(request.token.expose())
            .send()
            .await?;

        let sts_creds = response
            .credentials()
            .ok_or("AWS STS returned no credentials")?;
        let user = response
            .assumed_role_user()
            .ok_or("AWS STS returned no assumed role user")?;

        let credentials = TemporaryCredentials {
            access_key_id: sts_creds.access_key_id().to_string(),
            secret_access_key: sts_creds.secret_access_key().to_string(),
            session_token: sts_creds.session_token().to_string(),
            expiration: *sts_creds.expiration(),
        };

        info!("Successfully obtained AWS credentials");
        Ok(AssumedRole {
            identity: AssumedIdentity {
                arn: user.arn().to_string(),
            },
            credentials,
        })
    }
}

/// Region identifiers are lowercase alphanumeric segments joined by `-`,
/// e.g. `us-east-1` or `us-gov-west-1`
fn is_valid_region(region: &str) -> bool {
    let parts: Vec<&str> = region.split('-').collect();

    parts.len() >= 3
        && parts.iter().all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_region() {
        assert!(is_valid_region("us-east-1"));
        assert!(is_valid_region("ap-northeast-1"));
        assert!(is_valid_region("us-gov-west-1"));
        assert!(is_valid_region("cn-north-1"));
        assert!(is_valid_region("eu-central-2"));
    }

    #[test]
    fn test_invalid_region() {
        assert!(!is_valid_region(""));
        assert!(!is_valid_region("useast1"));
        assert!(!is_valid_region("us-east"));
        assert!(!is_valid_region("US-EAST-1"));
        assert!(!is_valid_region("us-east-1 "));
        assert!(!is_valid_region("us--east-1"));
        assert!(!is_valid_region("us_east_1"));
        assert!(!is_valid_region("https://sts.amazonaws.com"));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_region() {
        let err = StsConnector.connect("not a region").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid region: not a region");
    }

    #[tokio::test]
    async fn test_connect_builds_client_for_region() {
        let broker = StsConnector.connect("eu-west-1").await.unwrap();
        assert_eq!(
            broker.client.config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );
    }
}
