pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::KuduWarDeployer;
pub use config::toml_config::TomlConfig;
pub use core::publisher::{WarPublisher, DEFAULT_MAX_RETRY_TIMES};
pub use domain::model::{DeployTarget, PublishReport, PublishingCredentials};
pub use domain::ports::{DeploySettings, UploadAction, UploadActionProvider};
pub use utils::error::{DeployError, Result};
