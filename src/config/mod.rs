pub mod toml_config;

use crate::core::publisher::DEFAULT_MAX_RETRY_TIMES;
use crate::domain::model::{DeployTarget, PublishingCredentials};
use crate::domain::ports::DeploySettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_scm_endpoint, validate_artifact_source, validate_range, validate_required_text, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use std::fmt;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 600;
pub const DEFAULT_BUILD_DIRECTORY: &str = "target";
pub const DEFAULT_CONTEXT_PATH: &str = "/";

#[cfg(feature = "cli")]
#[derive(Clone, Parser)]
#[command(name = "war-deploy")]
#[command(about = "Deploy a war file to a web app, retrying transient upload failures")]
pub struct CliConfig {
    /// War file to deploy; defaults to <build-directory>/<final-name>.war
    #[arg(long, default_value = "")]
    pub war_file: String,

    #[arg(long, default_value = DEFAULT_BUILD_DIRECTORY)]
    pub build_directory: String,

    /// Build final name, without the .war extension
    #[arg(long, default_value = "")]
    pub final_name: String,

    /// Context path the application is served under
    #[arg(long, default_value = DEFAULT_CONTEXT_PATH)]
    pub path: String,

    #[arg(long)]
    pub app_name: String,

    #[arg(long)]
    pub slot: Option<String>,

    /// Deployment (SCM) endpoint of the app, e.g. https://myapp.scm.azurewebsites.net
    #[arg(long)]
    pub scm_endpoint: String,

    #[arg(long)]
    pub default_host_name: Option<String>,

    #[arg(long)]
    pub username: String,

    #[arg(long, default_value = "", hide_default_value = true)]
    pub password: String,

    #[arg(long, default_value_t = DEFAULT_MAX_RETRY_TIMES)]
    pub max_attempts: u32,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Resolve and validate the war file without uploading")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("war_file", &self.war_file)
            .field("build_directory", &self.build_directory)
            .field("final_name", &self.final_name)
            .field("path", &self.path)
            .field("app_name", &self.app_name)
            .field("slot", &self.slot)
            .field("scm_endpoint", &self.scm_endpoint)
            .field("default_host_name", &self.default_host_name)
            .field("username", &self.username)
            .field("password", &"***")
            .field("max_attempts", &self.max_attempts)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn deploy_target(&self) -> Result<DeployTarget> {
        build_target(&TargetFields {
            app_name: &self.app_name,
            slot: self.slot.as_deref(),
            scm_endpoint: &self.scm_endpoint,
            default_host_name: self.default_host_name.as_deref(),
            username: &self.username,
            password: &self.password,
        })
    }
}

#[cfg(feature = "cli")]
impl DeploySettings for CliConfig {
    fn war_file(&self) -> &str {
        &self.war_file
    }

    fn build_directory(&self) -> &str {
        &self.build_directory
    }

    fn final_name(&self) -> &str {
        &self.final_name
    }

    fn context_path(&self) -> &str {
        &self.path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_target_fields(&TargetFields {
            app_name: &self.app_name,
            slot: self.slot.as_deref(),
            scm_endpoint: &self.scm_endpoint,
            default_host_name: self.default_host_name.as_deref(),
            username: &self.username,
            password: &self.password,
        })?;
        validate_artifact_source(&self.war_file, &self.final_name)?;
        validate_limits(self.max_attempts, self.timeout_seconds)
    }
}

/// Borrowed view of the target section shared by every configuration source.
pub(crate) struct TargetFields<'a> {
    pub app_name: &'a str,
    pub slot: Option<&'a str>,
    pub scm_endpoint: &'a str,
    pub default_host_name: Option<&'a str>,
    pub username: &'a str,
    pub password: &'a str,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn build_target(fields: &TargetFields<'_>) -> Result<DeployTarget> {
    let scm_endpoint = parse_scm_endpoint("scm_endpoint", fields.scm_endpoint)?;

    Ok(DeployTarget {
        app_name: fields.app_name.trim().to_string(),
        slot: non_blank(fields.slot),
        scm_endpoint,
        default_host_name: non_blank(fields.default_host_name),
        credentials: PublishingCredentials {
            username: fields.username.to_string(),
            password: fields.password.to_string(),
        },
    })
}

pub(crate) fn validate_target_fields(fields: &TargetFields<'_>) -> Result<()> {
    validate_required_text("app_name", fields.app_name)?;
    parse_scm_endpoint("scm_endpoint", fields.scm_endpoint)?;
    validate_required_text("username", fields.username)?;
    if fields.password.is_empty() {
        tracing::warn!("No publishing password configured; the upload will likely be rejected");
    }
    Ok(())
}

pub(crate) fn validate_limits(max_attempts: u32, timeout_seconds: u64) -> Result<()> {
    validate_range("max_attempts", max_attempts, 1, 10)?;
    validate_range("timeout_seconds", timeout_seconds, 1, 3600)
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::DeployError;

    fn cli(args: &[&str]) -> CliConfig {
        let mut argv = vec![
            "war-deploy",
            "--app-name",
            "shop",
            "--scm-endpoint",
            "https://shop.scm.example.net",
            "--username",
            "$shop",
        ];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let config = cli(&["--final-name", "shop-1.0"]);
        assert_eq!(config.war_file, "");
        assert_eq!(config.build_directory, "target");
        assert_eq!(config.path, "/");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.timeout_seconds, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_requires_artifact_source() {
        let config = cli(&[]);
        assert!(matches!(
            config.validate(),
            Err(DeployError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_cli_rejects_out_of_range_attempts() {
        let config = cli(&["--war-file", "app.war", "--max-attempts", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_deploy_target() {
        let config = cli(&[
            "--war-file",
            "app.war",
            "--slot",
            "staging",
            "--default-host-name",
            " ",
            "--password",
            "pw",
        ]);
        let target = config.deploy_target().unwrap();
        assert_eq!(target.app_name, "shop");
        assert_eq!(target.slot.as_deref(), Some("staging"));
        assert_eq!(target.default_host_name, None);
        assert_eq!(target.credentials.password, "pw");
        assert_eq!(
            target.to_string(),
            "deployment slot 'staging' of web app 'shop'"
        );
    }

    #[test]
    fn test_cli_debug_redacts_password() {
        let config = cli(&["--war-file", "app.war", "--password", "hunter2"]);
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
