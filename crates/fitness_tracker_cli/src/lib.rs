//! Package loading and the summary loop behind the `fitness-tracker` binary.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fitness_tracker::Package;
use fitness_tracker::config::{Config, DEFAULT_LOG_LEVEL};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

/// Log filter from the configured level, or `info` when it does not parse.
pub fn env_filter(cfg: &Config) -> EnvFilter {
    EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Package file to read: the command-line argument wins over the environment.
pub fn packages_path(arg: Option<OsString>, cfg: &Config) -> Option<PathBuf> {
    arg.map(PathBuf::from).or_else(|| cfg.packages_path.clone())
}

pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("installing metrics recorder")
}

/// Sensor readings used when no package file is given.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load a JSON array of `{"code": .., "data": [..]}` records.
pub fn load_packages(path: &Path) -> anyhow::Result<Vec<Package>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading packages from {}", path.display()))?;
    let packages: Vec<Package> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing packages in {}", path.display()))?;
    tracing::info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Write one summary line per package. Stops at the first invalid package.
pub fn run<W: Write>(packages: &[Package], out: &mut W) -> anyhow::Result<()> {
    for (i, package) in packages.iter().enumerate() {
        let training = package
            .read()
            .with_context(|| format!("package #{} ({})", i + 1, package.code))?;
        writeln!(out, "{}", training.show_training_info())?;
    }
    Ok(())
}
