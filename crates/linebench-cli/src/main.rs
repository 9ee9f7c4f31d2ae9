// SPDX-License-Identifier: MIT OR Apache-2.0
//! linebench binary

use linebench_cli::{Args, BenchConfig, run};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse_from_os(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let config = match BenchConfig::from_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            info!("{}", Args::usage().trim_end());
            info!("Example: linebench ./data/mortality.csv --mode=isolated");
            return Ok(());
        }
        Err(e) => {
            warn!("{e}");
            return Ok(());
        }
    };

    info!("{}", config.summary());
    run(&config, &mut std::io::stdout().lock())
}
