use std::env;

use aws_sdk_quicksight::types::{IdentityType, UserRole};
use email_address::EmailAddress;

use crate::region;

/// Settings for the embed flow. Every field can be overridden through the
/// environment; the defaults reproduce the existing deployment.
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Name of the IAM role readers are registered under.
    pub role_name: String,
    pub namespace: String,
    pub identity_type: IdentityType,
    pub user_role: UserRole,
    /// Region segment of user ARNs. QuickSight keeps user identities in a
    /// single home region, independent of where users or dashboards live.
    pub identity_region: String,
    /// Region users are registered in.
    pub user_region: String,
    /// Region the dashboards are hosted in. May differ from the user region.
    pub dashboard_region: String,
}

impl EmbedConfig {
    pub fn from_env() -> EmbedConfig {
        let region = region::aws_region();
        EmbedConfig {
            role_name: env_or("QUICKSIGHT_ROLE_NAME", "qer"),
            namespace: env_or("QUICKSIGHT_NAMESPACE", "default"),
            identity_type: env_or("QUICKSIGHT_IDENTITY_TYPE", "IAM").as_str().into(),
            user_role: env_or("QUICKSIGHT_USER_ROLE", "READER").as_str().into(),
            identity_region: env_or("QUICKSIGHT_IDENTITY_REGION", "us-east-1"),
            user_region: region.clone(),
            dashboard_region: env_or("DASHBOARD_REGION", &region),
        }
    }

    /// ARN of the role assumed for both QuickSight calls.
    pub fn role_arn(&self, account_id: &str) -> String {
        format!("arn:aws:iam::{}:role/{}", account_id, self.role_name)
    }

    /// ARN of the registered user, addressed in its identity home region.
    pub fn user_arn(&self, account_id: &str, email: &EmailAddress) -> String {
        format!(
            "arn:aws:quicksight:{}:{}:user/{}/{}/{}",
            self.identity_region, account_id, self.namespace, self.role_name, email
        )
    }
}

fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::str::FromStr;

    fn config() -> EmbedConfig {
        EmbedConfig {
            role_name: "qer".to_string(),
            namespace: "default".to_string(),
            identity_type: IdentityType::Iam,
            user_role: UserRole::Reader,
            identity_region: "us-east-1".to_string(),
            user_region: "us-west-2".to_string(),
            dashboard_region: "us-west-2".to_string(),
        }
    }

    #[test]
    fn role_arn_concatenates_account_and_role() {
        assert_eq!(
            config().role_arn("123456789012"),
            "arn:aws:iam::123456789012:role/qer"
        );
    }

    #[test]
    fn user_arn_addresses_the_identity_region() {
        let email = EmailAddress::from_str("someone@mydomain.com").unwrap();
        assert_eq!(
            config().user_arn("123456789012", &email),
            "arn:aws:quicksight:us-east-1:123456789012:user/default/qer/someone@mydomain.com"
        );
    }

    #[test]
    #[serial]
    fn from_env_defaults_match_the_deployment() {
        for name in [
            "AWS_REGION",
            "QUICKSIGHT_ROLE_NAME",
            "QUICKSIGHT_NAMESPACE",
            "QUICKSIGHT_IDENTITY_TYPE",
            "QUICKSIGHT_USER_ROLE",
            "QUICKSIGHT_IDENTITY_REGION",
            "DASHBOARD_REGION",
        ] {
            env::remove_var(name);
        }

        let config = EmbedConfig::from_env();
        assert_eq!(config.role_name, "qer");
        assert_eq!(config.namespace, "default");
        assert_eq!(config.identity_type, IdentityType::Iam);
        assert_eq!(config.user_role, UserRole::Reader);
        assert_eq!(config.identity_region, "us-east-1");
        assert_eq!(config.user_region, "us-west-2");
        assert_eq!(config.dashboard_region, "us-west-2");
    }

    #[test]
    #[serial]
    fn from_env_overrides_take_precedence() {
        env::set_var("AWS_REGION", "eu-west-1");
        env::set_var("QUICKSIGHT_ROLE_NAME", "dashboard-reader");
        env::set_var("DASHBOARD_REGION", "us-east-2");

        let config = EmbedConfig::from_env();
        assert_eq!(config.role_name, "dashboard-reader");
        assert_eq!(config.user_region, "eu-west-1");
        assert_eq!(config.dashboard_region, "us-east-2");

        env::remove_var("AWS_REGION");
        env::remove_var("QUICKSIGHT_ROLE_NAME");
        env::remove_var("DASHBOARD_REGION");
    }
}
