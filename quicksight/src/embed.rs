use std::fmt;

use async_trait::async_trait;
use aws_config::SdkConfig;
use email_address::EmailAddress;

use crate::client::assumed_role_client;
use crate::config::EmbedConfig;
use crate::error::EmbedError;

/// Where the embedded session lands inside the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPoint {
    Start,
    Dashboards,
    Analyses,
    Favorites,
    Dashboard(String),
    Analysis(String),
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPoint::Start => write!(f, "/start"),
            EntryPoint::Dashboards => write!(f, "/start/dashboards"),
            EntryPoint::Analyses => write!(f, "/start/analyses"),
            EntryPoint::Favorites => write!(f, "/start/favorites"),
            EntryPoint::Dashboard(id) => write!(f, "/dashboards/{}", id),
            EntryPoint::Analysis(id) => write!(f, "/analyses/{}", id),
        }
    }
}

#[async_trait]
pub trait IssueEmbedUrl {
    /// Mints a session embed URL for the registered user, scoped to `entry`.
    async fn session_embed_url(
        &self,
        account_id: &str,
        email: &EmailAddress,
        entry: &EntryPoint,
    ) -> Result<String, EmbedError>;
}

/// Issuer backed by QuickSight `GetSessionEmbedUrl`.
pub struct Issuer {
    shared_config: SdkConfig,
    config: EmbedConfig,
}

impl Issuer {
    pub fn new(shared_config: &SdkConfig, config: EmbedConfig) -> Issuer {
        Issuer {
            shared_config: shared_config.clone(),
            config,
        }
    }
}

#[async_trait]
impl IssueEmbedUrl for Issuer {
    async fn session_embed_url(
        &self,
        account_id: &str,
        email: &EmailAddress,
        entry: &EntryPoint,
    ) -> Result<String, EmbedError> {
        let role_arn = self.config.role_arn(account_id);
        let client = assumed_role_client(
            &self.shared_config,
            &role_arn,
            &self.config.dashboard_region,
        )
        .await;

        let output = client
            .get_session_embed_url()
            .aws_account_id(account_id)
            .entry_point(entry.to_string())
            .user_arn(self.config.user_arn(account_id, email))
            .send()
            .await
            .map_err(|err| EmbedError::Issuance(err.into_service_error().to_string()))?;

        output
            .embed_url()
            .map(str::to_string)
            .ok_or(EmbedError::MissingEmbedUrl)
    }
}
