use thiserror::Error;

/// Failures surfaced by the embed flow, one variant per upstream step.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("caller identity lookup failed: {0}")]
    Identity(String),
    #[error("user registration failed: {0}")]
    Registration(String),
    #[error("embed url issuance failed: {0}")]
    Issuance(String),
    #[error("embed url missing from the service response")]
    MissingEmbedUrl,
}

impl EmbedError {
    /// Short classification string used for logging.
    pub fn category(&self) -> &'static str {
        match self {
            EmbedError::Identity(_) => "identity",
            EmbedError::Registration(_) => "registration",
            EmbedError::Issuance(_) | EmbedError::MissingEmbedUrl => "issuance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_upstream_text() {
        let err = EmbedError::Identity("InvalidClientTokenId".to_string());
        assert_eq!(
            err.to_string(),
            "caller identity lookup failed: InvalidClientTokenId"
        );
        assert_eq!(err.category(), "identity");
    }
}
