use anyhow::Context;
use findev_analysis::AnalysisConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AnalysisConfig::default();
    findev_analysis::run(&config)
        .with_context(|| format!("analysis of {} failed", config.input_path.display()))?;

    Ok(())
}
