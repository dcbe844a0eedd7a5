use crate::config::{
    build_target, validate_limits, validate_target_fields, TargetFields, DEFAULT_BUILD_DIRECTORY,
    DEFAULT_CONTEXT_PATH, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::publisher::DEFAULT_MAX_RETRY_TIMES;
use crate::domain::model::DeployTarget;
use crate::domain::ports::DeploySettings;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_artifact_source, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub artifact: ArtifactConfig,
    pub target: TargetConfig,
    pub deploy: Option<DeployConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default)]
    pub war_file: String,
    #[serde(default = "default_build_directory")]
    pub build_directory: String,
    #[serde(default)]
    pub final_name: String,
    #[serde(default = "default_context_path")]
    pub path: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub app_name: String,
    pub slot: Option<String>,
    pub scm_endpoint: String,
    pub default_host_name: Option<String>,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("app_name", &self.app_name)
            .field("slot", &self.slot)
            .field("scm_endpoint", &self.scm_endpoint)
            .field("default_host_name", &self.default_host_name)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    pub max_attempts: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

fn default_build_directory() -> String {
    DEFAULT_BUILD_DIRECTORY.to_string()
}

fn default_context_path() -> String {
    DEFAULT_CONTEXT_PATH.to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeployError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DeployError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeployError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn target_fields(&self) -> TargetFields<'_> {
        TargetFields {
            app_name: &self.target.app_name,
            slot: self.target.slot.as_deref(),
            scm_endpoint: &self.target.scm_endpoint,
            default_host_name: self.target.default_host_name.as_deref(),
            username: &self.target.username,
            password: &self.target.password,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_target_fields(&self.target_fields())?;
        validate_artifact_source(&self.artifact.war_file, &self.artifact.final_name)?;
        validate_limits(self.max_attempts(), self.timeout_seconds())
    }

    pub fn deploy_target(&self) -> Result<DeployTarget> {
        build_target(&self.target_fields())
    }

    pub fn max_attempts(&self) -> u32 {
        self.deploy
            .as_ref()
            .and_then(|d| d.max_attempts)
            .unwrap_or(DEFAULT_MAX_RETRY_TIMES)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.deploy
            .as_ref()
            .and_then(|d| d.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl DeploySettings for TomlConfig {
    fn war_file(&self) -> &str {
        &self.artifact.war_file
    }

    fn build_directory(&self) -> &str {
        &self.artifact.build_directory
    }

    fn final_name(&self) -> &str {
        &self.artifact.final_name
    }

    fn context_path(&self) -> &str {
        &self.artifact.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
