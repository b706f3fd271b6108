use aws_config::sts::AssumeRoleProvider;
use aws_config::SdkConfig;
use aws_sdk_quicksight::config::Region;
use aws_sdk_quicksight::Client;

/// QuickSight client with credentials assumed for `role_arn`, pinned to
/// `region`. Registration and issuance may target different regions, so each
/// call site builds its own client.
pub(crate) async fn assumed_role_client(
    shared_config: &SdkConfig,
    role_arn: &str,
    region: &str,
) -> Client {
    let credentials = AssumeRoleProvider::builder(role_arn)
        .configure(shared_config)
        .build()
        .await;

    let config = aws_sdk_quicksight::config::Builder::from(shared_config)
        .credentials_provider(credentials)
        .region(Region::new(region.to_string()))
        .build();

    Client::from_conf(config)
}
