mod config;
mod display;
mod input;
mod models;
mod report;
mod run;
mod store;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logger();

    let config = config::Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");
    let mut store = store::open(&config)?;

    let stdin = std::io::stdin();
    let mut prompter = input::Prompter::new(stdin.lock(), std::io::stdout());
    let today = chrono::Local::now().date_naive();

    run::run(&config, store.as_mut(), &mut prompter, today)?;
    Ok(())
}

/// Log to stderr so prompts and the report on stdout stay clean. `RUST_LOG`
/// overrides the default of warnings only.
fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
