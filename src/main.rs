use anyhow::Result;
use frameprobe::{
    browser::BrowserSession,
    config::Config,
    report::FpsReport,
    sampler,
    stats::FpsStats,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Load configuration
    let config_path = Config::config_path();
    let config = if config_path.exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };

    println!("Measuring rendering FPS: {}", config.target.url);
    println!("{}", "=".repeat(50));
    info!(
        url = %config.target.url,
        iterations = config.sampling.iterations,
        window_ms = config.sampling.window_ms,
        "starting measurement run"
    );

    let session = BrowserSession::launch(&config).await?;

    let samples = sampler::collect_samples(
        &session,
        config.sampling.iterations,
        config.sampling.window_ms,
    )
    .await?;

    let stats = FpsStats::from_samples(&samples)?;
    let report = FpsReport::from(&stats);
    report.write(&config.output.path)?;
    report.print_summary();
    info!(path = %config.output.path.display(), "report written");

    session.close().await?;
    Ok(())
}
