use anyhow::Result;
use clap::Parser;

use ck_app::AppPaths;
use ck_core::ports::AppDirsPort;
use ck_platform::DirsAppDirsAdapter;

use clipkeep::bootstrap::{init_tracing_subscriber, resolve_config};
use clipkeep::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&dirs);

    // Tracing must be up before anything else logs.
    if let Err(err) = init_tracing_subscriber(&paths.logs_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = resolve_config(cli.config.as_deref(), &paths.config_path)?;
    tracing::debug!(?paths, "Resolved application paths");

    cli::execute(cli, config, paths).await
}
