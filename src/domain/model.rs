use std::fmt;
use std::path::PathBuf;
use url::Url;

#[derive(Clone)]
pub struct PublishingCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for PublishingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishingCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Remote destination of a deployment. Built by the configuration layer and
/// passed through the publisher untouched.
#[derive(Debug, Clone)]
pub struct DeployTarget {
    pub app_name: String,
    pub slot: Option<String>,
    pub scm_endpoint: Url,
    pub default_host_name: Option<String>,
    pub credentials: PublishingCredentials,
}

impl DeployTarget {
    /// Public URL the application is served at once deployed under `context_path`.
    pub fn app_url(&self, context_path: &str) -> Option<String> {
        self.default_host_name
            .as_deref()
            .map(|host| format!("https://{}/{}", host.trim_end_matches('/'), context_path))
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(slot) => write!(f, "deployment slot '{}' of web app '{}'", slot, self.app_name),
            None => write!(f, "web app '{}'", self.app_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub war_file: PathBuf,
    pub context_path: String,
    pub attempts: u32,
    pub failures: Vec<String>,
}
