use crate::domain::model::{DeployTarget, PublishReport};
use crate::domain::ports::{DeploySettings, UploadActionProvider};
use crate::utils::error::{DeployError, Result};
use std::path::{Path, PathBuf};

/// Attempts made when no explicit budget is configured.
pub const DEFAULT_MAX_RETRY_TIMES: u32 = 3;

pub const FILE_IS_NOT_WAR: &str = "The deployment file is not a war typed file.";

/// Deploys a single war file to a [`DeployTarget`], retrying the upload a
/// bounded number of times.
pub struct WarPublisher<C: DeploySettings, P: UploadActionProvider> {
    settings: C,
    provider: P,
    max_attempts: u32,
}

impl<C: DeploySettings, P: UploadActionProvider> WarPublisher<C, P> {
    pub fn new(settings: C, provider: P) -> Self {
        Self {
            settings,
            provider,
            max_attempts: DEFAULT_MAX_RETRY_TIMES,
        }
    }

    /// Overrides the retry budget. At least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn resolve_war_file(&self) -> PathBuf {
        resolve_war_file(&self.settings)
    }

    pub fn resolve_context_path(&self) -> String {
        resolve_context_path(&self.settings)
    }

    pub async fn publish(&self, target: &DeployTarget) -> Result<PublishReport> {
        let war_file = self.resolve_war_file();
        validate_war_file(&war_file)?;

        let context_path = self.resolve_context_path();
        let action = self
            .provider
            .war_deploy_action(target, &war_file, &context_path);

        tracing::info!("Deploying the war file...");

        let mut failures = Vec::new();
        let mut attempts = 0;
        while attempts < self.max_attempts {
            attempts += 1;
            match action.execute().await {
                Ok(()) => {
                    tracing::info!("Successfully deployed the war file to {}", target);
                    if let Some(url) = target.app_url(&context_path) {
                        tracing::info!("Application is served at {}", url);
                    }
                    return Ok(PublishReport {
                        war_file,
                        context_path,
                        attempts,
                        failures,
                    });
                }
                Err(e) => {
                    tracing::debug!(
                        "Exception occurred when deploying war file to server: {}, retrying immediately ({}/{})",
                        e,
                        attempts,
                        self.max_attempts
                    );
                    failures.push(e.to_string());
                }
            }
        }

        Err(DeployError::DeploymentError { attempts })
    }
}

/// The configured war file when set, otherwise `<build_directory>/<final_name>.war`.
pub fn resolve_war_file<C: DeploySettings + ?Sized>(settings: &C) -> PathBuf {
    let war_file = settings.war_file();
    if !war_file.trim().is_empty() {
        return PathBuf::from(war_file);
    }
    Path::new(settings.build_directory()).join(format!("{}.war", settings.final_name()))
}

/// Trimmed context path without its leading `/`. Empty means the root context.
pub fn resolve_context_path<C: DeploySettings + ?Sized>(settings: &C) -> String {
    let path = settings.context_path().trim();
    path.strip_prefix('/').unwrap_or(path).to_string()
}

/// Rejects anything that is not an existing regular file with a `war` extension.
/// The extension is checked first, so a missing `deploy.txt` reports the type error.
/// The extension comes from [`Path::extension`], so a bare dotfile named `.war`
/// has none and is rejected as not a war.
pub fn validate_war_file(war_file: &Path) -> Result<()> {
    let is_war = war_file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("war"));
    if !is_war {
        return Err(DeployError::validation(FILE_IS_NOT_WAR));
    }

    if !war_file.is_file() {
        let absolute = std::path::absolute(war_file).unwrap_or_else(|_| war_file.to_path_buf());
        return Err(DeployError::validation(format!(
            "Failed to find the war file: '{}'",
            absolute.display()
        )));
    }

    Ok(())
}
