use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use app_version_check::config::{CheckerConfig, log_path};
use app_version_check::version::lookups::itunes::DEFAULT_BASE_URL;
use app_version_check::{
    CheckOutcome, ComparisonMode, InfoPlist, ItunesLookup, VersionChecker, main_context,
};

#[derive(Parser)]
#[command(name = "app-version-check")]
#[command(version, about = "Check the App Store for a newer version of an app")]
struct Cli {
    /// Path to the app's Info.plist
    info_plist: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compare versions numerically instead of as plain strings
    #[arg(long)]
    semantic: bool,

    /// Log filter directive, e.g. "debug" or "app_version_check=trace"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(filter: &str) -> anyhow::Result<WorkerGuard> {
    let path = log_path();
    let dir = path.parent().context("log path has no parent directory")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let file_name = path.file_name().context("log path has no file name")?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn print_outcome(outcome: CheckOutcome) -> bool {
    match outcome {
        CheckOutcome::UpdateAvailable(report) => {
            println!(
                "Update available: {} -> {}",
                report.local_version, report.remote.version
            );
            println!("{}", report.remote.track_view_url);
            true
        }
        CheckOutcome::UpToDate(report) => {
            println!(
                "Up to date: {} (store: {})",
                report.local_version, report.remote.version
            );
            true
        }
        CheckOutcome::CheckFailed(e) => {
            eprintln!("Update check failed: {}", e);
            false
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_level)?;

    let mut config = match &cli.config {
        Some(path) => CheckerConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => CheckerConfig::default(),
    };
    if cli.semantic {
        config.comparison = ComparisonMode::Semantic;
    }
    info!("Checking {} with {:?}", cli.info_plist.display(), config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let (main, mut main_loop) = main_context();
    let checker = VersionChecker::new(
        Arc::new(InfoPlist::new(cli.info_plist)),
        Arc::new(ItunesLookup::with_timeout(
            DEFAULT_BASE_URL,
            Duration::from_millis(config.timeout_ms),
        )),
        main,
    )
    .with_comparison(config.comparison);

    let succeeded = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&succeeded);

    runtime.block_on(async move {
        checker.show_update_outcome(move |outcome| {
            flag.store(print_outcome(outcome), Ordering::SeqCst);
        });
        drop(checker);
        main_loop.run().await
    });

    if succeeded.load(Ordering::SeqCst) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
