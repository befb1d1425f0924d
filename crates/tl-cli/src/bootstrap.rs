use std::path::Path;

use anyhow::Context;
use tl_config::TradelensConfig;

/// Load `.env` from the current directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<TradelensConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv_in(&cwd)?;
    TradelensConfig::load().context("failed to load tradelens configuration")
}

fn load_dotenv_in(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
