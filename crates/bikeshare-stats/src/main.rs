mod bootstrap;
mod session;

use anyhow::Result;
use stats_core::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::load();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Bikeshare Stats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    if settings.is_non_interactive() {
        session::run_once(&settings)
    } else {
        session::run_interactive(&settings)
    }
}
