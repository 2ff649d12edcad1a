use anyhow::Result;
use lendersql::config::{Config, DEFAULT_LOG_FILTER};
use std::io::{self, BufWriter};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // stdout carries the SQL, so logs go to stderr
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(
        blc = ?config.blc_csv,
        mca = ?config.mca_csv,
        schemas = ?config.schemas,
        "startup"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    lendersql::run(&config, &mut out)?;
    Ok(())
}
