pub mod publisher;

pub use crate::domain::model::{DeployTarget, PublishReport, PublishingCredentials};
pub use crate::domain::ports::{DeploySettings, UploadAction, UploadActionProvider};
pub use crate::utils::error::Result;
