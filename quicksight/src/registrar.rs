use async_trait::async_trait;
use aws_config::SdkConfig;
use email_address::EmailAddress;

use crate::client::assumed_role_client;
use crate::config::EmbedConfig;
use crate::error::EmbedError;

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyRegistered,
}

#[async_trait]
pub trait RegisterReader {
    /// Registers `email` as a reader under the configured role, treating a
    /// user that already exists as a success.
    async fn register_reader(
        &self,
        account_id: &str,
        email: &EmailAddress,
    ) -> Result<Registration, EmbedError>;
}

/// Registrar backed by QuickSight `RegisterUser`.
pub struct Registrar {
    shared_config: SdkConfig,
    config: EmbedConfig,
}

impl Registrar {
    pub fn new(shared_config: &SdkConfig, config: EmbedConfig) -> Registrar {
        Registrar {
            shared_config: shared_config.clone(),
            config,
        }
    }
}

#[async_trait]
impl RegisterReader for Registrar {
    async fn register_reader(
        &self,
        account_id: &str,
        email: &EmailAddress,
    ) -> Result<Registration, EmbedError> {
        let role_arn = self.config.role_arn(account_id);
        let client =
            assumed_role_client(&self.shared_config, &role_arn, &self.config.user_region).await;

        let result = client
            .register_user()
            .aws_account_id(account_id)
            .email(email.as_str())
            .iam_arn(&role_arn)
            .namespace(&self.config.namespace)
            .identity_type(self.config.identity_type.clone())
            .session_name(email.as_str())
            .user_role(self.config.user_role.clone())
            .send()
            .await;

        match result {
            Ok(_) => Ok(Registration::Created),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_resource_exists_exception() {
                    Ok(Registration::AlreadyRegistered)
                } else {
                    Err(EmbedError::Registration(err.to_string()))
                }
            }
        }
    }
}
