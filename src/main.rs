use std::io;

use serene::config::AppConfig;
use serene::error::user_friendly_message;
use serene::session::{Console, Session};
use serene::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr and stay quiet unless SERENE_LOG asks for more
    let filter =
        EnvFilter::try_from_env("SERENE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default configuration");
        eprintln!("{}", user_friendly_message(&e));
        AppConfig::default()
    });

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::from_config(&config, console)?;
    session.run()
}
