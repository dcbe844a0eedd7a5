use crate::utils::error::{DeployError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> DeployError {
    DeployError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses a deployment (SCM) endpoint. Kudu only speaks http(s).
pub fn parse_scm_endpoint(field: &str, endpoint: &str) -> Result<Url> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(DeployError::MissingConfigError {
            field: field.to_string(),
        });
    }

    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("not a deployment endpoint URL ({})", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(
            field,
            endpoint,
            format!("deployment endpoints are reached over http or https, not '{}'", scheme),
        )),
    }
}

pub fn validate_war_path(field: &str, path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(invalid(field, path.escape_default(), "war path contains a NUL byte"));
    }
    Ok(())
}

/// Names and credentials sent to the host must carry at least one visible character.
pub fn validate_required_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeployError::MissingConfigError {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(field, value, format!("allowed range is {}..={}", min, max)));
    }
    Ok(())
}

/// The war location must be derivable: either an explicit file or a build final name.
pub fn validate_artifact_source(war_file: &str, final_name: &str) -> Result<()> {
    if war_file.trim().is_empty() && final_name.trim().is_empty() {
        return Err(DeployError::MissingConfigError {
            field: "final_name (or war_file)".to_string(),
        });
    }
    if !war_file.trim().is_empty() {
        validate_war_path("war_file", war_file)?;
    }
    Ok(())
}
