mod cli;
mod error;
mod table;

use clap::Parser;
use cli::Cli;
use config::Config;
use std::io;
use tracing::debug;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.log_level_filter().as_trace().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };

    table::execute(&config.table, &cli.command, &mut io::stdout().lock())?;
    Ok(())
}
