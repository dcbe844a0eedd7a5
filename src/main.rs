use clap::Parser;
use std::time::Duration;
use war_deploy::app::deploy;
use war_deploy::utils::{logger, validation::Validate};
use war_deploy::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init(config.verbose, config.json_logs);

    tracing::info!("Starting war-deploy CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(deploy::report_failure(&e));
    }

    let target = match config.deploy_target() {
        Ok(target) => target,
        Err(e) => std::process::exit(deploy::report_failure(&e)),
    };

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be uploaded");
        match deploy::dry_run(&config, &target) {
            Ok(plan) => deploy::print_dry_run(&plan, &target, config.max_attempts),
            Err(e) => std::process::exit(deploy::report_failure(&e)),
        }
        return Ok(());
    }

    let max_attempts = config.max_attempts;
    let timeout = Duration::from_secs(config.timeout_seconds);

    match deploy::run(config, &target, max_attempts, timeout).await {
        Ok(report) => deploy::print_success(&report, &target),
        Err(e) => std::process::exit(deploy::report_failure(&e)),
    }

    Ok(())
}
