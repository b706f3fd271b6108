pub mod config;
pub mod embed;
pub mod error;
pub mod identity;
pub mod region;
pub mod registrar;

mod client;

pub use config::EmbedConfig;
pub use embed::{EntryPoint, IssueEmbedUrl, Issuer};
pub use error::EmbedError;
pub use identity::{CallerIdentity, Sts};
pub use registrar::{RegisterReader, Registrar, Registration};

use email_address::EmailAddress;

/// Resolves the caller account, registers `email` as a reader and returns a
/// session embed URL for `entry`.
///
/// A reader that is already registered is not an error; any other failure in
/// the chain aborts it.
pub async fn session_url<I, R, U>(
    identity: &I,
    registrar: &R,
    issuer: &U,
    email: &EmailAddress,
    entry: &EntryPoint,
) -> Result<String, EmbedError>
where
    I: CallerIdentity,
    R: RegisterReader,
    U: IssueEmbedUrl,
{
    let account_id = identity.account_id().await?;

    match registrar.register_reader(&account_id, email).await? {
        Registration::Created => tracing::info!(%email, "registered reader"),
        Registration::AlreadyRegistered => tracing::info!(%email, "reader already registered"),
    }

    issuer.session_embed_url(&account_id, email, entry).await
}
