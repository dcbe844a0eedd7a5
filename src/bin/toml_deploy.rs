use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use war_deploy::app::deploy;
use war_deploy::core::DeploySettings;
use war_deploy::utils::{logger, validation::Validate};
use war_deploy::TomlConfig;

#[derive(Parser)]
#[command(name = "toml-deploy")]
#[command(about = "Deploy a war file using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "deploy.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the war file from config
    #[arg(long)]
    war_file: Option<String>,

    /// Override the context path from config
    #[arg(long)]
    path: Option<String>,

    /// Override the retry budget from config
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Dry run - show what would be uploaded without contacting the host
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    logger::init(args.verbose, config.json_logs());

    tracing::info!("🚀 Starting TOML-based war deployment");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(war_file) = args.war_file.clone() {
        tracing::info!("🔧 War file overridden to: {}", war_file);
        config.artifact.war_file = war_file;
    }
    if let Some(path) = args.path.clone() {
        tracing::info!("🔧 Context path overridden to: {}", path);
        config.artifact.path = path;
    }
    if let Some(max_attempts) = args.max_attempts {
        tracing::info!("🔧 Max attempts overridden to: {}", max_attempts);
        config
            .deploy
            .get_or_insert_with(Default::default)
            .max_attempts = Some(max_attempts);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(deploy::report_failure(&e));
    }

    let target = match config.deploy_target() {
        Ok(target) => target,
        Err(e) => std::process::exit(deploy::report_failure(&e)),
    };

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        match deploy::dry_run(&config, &target) {
            Ok(plan) => deploy::print_dry_run(&plan, &target, config.max_attempts()),
            Err(e) => std::process::exit(deploy::report_failure(&e)),
        }
        return Ok(());
    }

    let max_attempts = config.max_attempts();
    let timeout = Duration::from_secs(config.timeout_seconds());

    match deploy::run(config, &target, max_attempts, timeout).await {
        Ok(report) => deploy::print_success(&report, &target),
        Err(e) => std::process::exit(deploy::report_failure(&e)),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  App: {}", config.target.app_name);
    if let Some(slot) = &config.target.slot {
        println!("  Slot: {}", slot);
    }
    println!("  SCM endpoint: {}", config.target.scm_endpoint);
    if config.war_file().trim().is_empty() {
        println!(
            "  War: {}/{}.war",
            config.build_directory(),
            config.final_name()
        );
    } else {
        println!("  War: {}", config.war_file());
    }
    println!("  Context path: {}", config.context_path());
    println!("  Max attempts: {}", config.max_attempts());
    println!("  Timeout: {}s", config.timeout_seconds());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
