use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;

use crate::error::EmbedError;

#[async_trait]
pub trait CallerIdentity {
    /// Returns the account id of the active credentials.
    async fn account_id(&self) -> Result<String, EmbedError>;
}

/// Caller identity backed by STS `GetCallerIdentity`.
pub struct Sts {
    client: Client,
}

impl Sts {
    pub fn new(shared_config: &SdkConfig) -> Sts {
        Sts {
            client: Client::new(shared_config),
        }
    }
}

#[async_trait]
impl CallerIdentity for Sts {
    async fn account_id(&self) -> Result<String, EmbedError> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| EmbedError::Identity(err.into_service_error().to_string()))?;

        output
            .account()
            .map(str::to_string)
            .ok_or_else(|| EmbedError::Identity("response carried no account id".to_string()))
    }
}
