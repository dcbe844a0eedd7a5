use crate::adapters::kudu::{war_deploy_url, KuduWarDeployer};
use crate::core::publisher::{resolve_context_path, resolve_war_file, validate_war_file, WarPublisher};
use crate::core::{DeploySettings, DeployTarget, PublishReport};
use crate::utils::error::{DeployError, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// What a deployment would do, without contacting the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunPlan {
    pub war_file: PathBuf,
    pub context_path: String,
    pub upload_url: Url,
    pub war_size_bytes: u64,
}

/// Publishes through the Kudu adapter with the given retry budget and per-request timeout.
pub async fn run<C: DeploySettings>(
    settings: C,
    target: &DeployTarget,
    max_attempts: u32,
    timeout: Duration,
) -> Result<PublishReport> {
    let deployer = KuduWarDeployer::new(timeout)?;
    WarPublisher::new(settings, deployer)
        .with_max_attempts(max_attempts)
        .publish(target)
        .await
}

pub fn dry_run<C: DeploySettings + ?Sized>(settings: &C, target: &DeployTarget) -> Result<DryRunPlan> {
    let war_file = resolve_war_file(settings);
    validate_war_file(&war_file)?;
    let context_path = resolve_context_path(settings);
    let war_size_bytes = std::fs::metadata(&war_file)?.len();

    Ok(DryRunPlan {
        upload_url: war_deploy_url(&target.scm_endpoint, &context_path),
        war_file,
        context_path,
        war_size_bytes,
    })
}

pub fn print_dry_run(plan: &DryRunPlan, target: &DeployTarget, max_attempts: u32) {
    println!("🔍 Dry Run Analysis:");
    println!("  Target: {}", target);
    println!("  War file: {} ({} bytes)", plan.war_file.display(), plan.war_size_bytes);
    if plan.context_path.is_empty() {
        println!("  Context path: / (root)");
    } else {
        println!("  Context path: /{}", plan.context_path);
    }
    println!("  Upload URL: {}", plan.upload_url);
    println!("  Max attempts: {}", max_attempts);
    println!();
    println!("✅ Dry run complete. Nothing was uploaded.");
}

pub fn print_success(report: &PublishReport, target: &DeployTarget) {
    println!("✅ War file deployed to {}", target);
    if report.attempts > 1 {
        println!("🔁 Succeeded on attempt {}", report.attempts);
    }
    if let Some(url) = target.app_url(&report.context_path) {
        println!("🌐 {}", url);
    }
}

/// Logs and prints a failure, returning the process exit code for it.
pub fn report_failure(e: &DeployError) -> i32 {
    tracing::error!(
        "❌ Deployment failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    e.severity().exit_code()
}
