use std::str::FromStr;

use email_address::EmailAddress;
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use quicksight::{
    CallerIdentity, EmbedConfig, EntryPoint, IssueEmbedUrl, Issuer, RegisterReader, Registrar, Sts,
};
use response::{bad_request, ok, server_error};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let shared_config = aws_config::load_from_env().await;
    let config = EmbedConfig::from_env();
    let identity_ref = &Sts::new(&shared_config);
    let registrar_ref = &Registrar::new(&shared_config, config.clone());
    let issuer_ref = &Issuer::new(&shared_config, config);

    run(service_fn(move |event: Request| async move {
        handle(identity_ref, registrar_ref, issuer_ref, event).await
    }))
    .await?;
    Ok(())
}

async fn handle<I, R, U>(
    identity: &I,
    registrar: &R,
    issuer: &U,
    event: Request,
) -> Result<Response<Body>, Error>
where
    I: CallerIdentity,
    R: RegisterReader,
    U: IssueEmbedUrl,
{
    let params = event.query_string_parameters();

    let email = match params.first("email") {
        Some(email) => match EmailAddress::from_str(email) {
            Ok(email) => email,
            Err(err) => {
                return bad_request(
                    json!({ "message": format!("Email {} was not a proper email: {}", email, err) })
                        .to_string(),
                )
            }
        },
        _ => return bad_request(json!({ "message": "Email parameter missing" }).to_string()),
    };

    match params.first("dashboard") {
        Some(dashboard) => {
            let entry = EntryPoint::Dashboard(dashboard.to_string());
            match quicksight::session_url(identity, registrar, issuer, &email, &entry).await {
                Ok(url) => ok(url),
                Err(err) => {
                    tracing::error!(category = %err.category(), error = %err, "embed url request failed");
                    server_error(json!({ "message": err.to_string() }).to_string())
                }
            }
        }
        _ => bad_request(json!({ "message": "Dashboard parameter missing" }).to_string()),
    }
}
