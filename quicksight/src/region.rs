use std::env;

/// Fallback when the runtime does not provide a region.
const DEFAULT_REGION: &str = "us-west-2";

/// Returns the active region. Lambda sets `AWS_REGION` for every invocation.
pub fn aws_region() -> String {
    match env::var("AWS_REGION") {
        Ok(region) if !region.is_empty() => region,
        _ => DEFAULT_REGION.to_string(),
    }
}
