use fitness_tracker::config::Config;
use fitness_tracker_cli::{
    default_packages, env_filter, install_metrics, load_packages, packages_path, run,
};

fn main() -> anyhow::Result<()> {
    let cfg = Config::from_env();

    // Logs go to stderr so stdout carries only summary lines.
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&cfg))
        .init();
    tracing::debug!("fitness-tracker: log filter: {}", cfg.log_level);

    let metrics = install_metrics()?;

    let packages = match packages_path(std::env::args_os().nth(1), &cfg) {
        Some(p) => load_packages(&p)?,
        None => default_packages(),
    };

    let stdout = std::io::stdout();
    run(&packages, &mut stdout.lock())?;

    tracing::debug!("fitness-tracker: metrics\n{}", metrics.render());
    Ok(())
}
