use crate::domain::model::DeployTarget;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// A bound, zero-argument upload. Each call is one attempt.
#[async_trait]
pub trait UploadAction: Send + Sync {
    async fn execute(&self) -> Result<()>;
}

pub trait UploadActionProvider: Send + Sync {
    fn war_deploy_action(
        &self,
        target: &DeployTarget,
        war_file: &Path,
        context_path: &str,
    ) -> Box<dyn UploadAction>;
}

/// The configuration values the publisher reads, and nothing more.
pub trait DeploySettings: Send + Sync {
    fn war_file(&self) -> &str;
    fn build_directory(&self) -> &str;
    fn final_name(&self) -> &str;
    fn context_path(&self) -> &str;
}
