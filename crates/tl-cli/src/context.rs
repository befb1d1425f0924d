use std::path::Path;

use tl_config::{ThemeStore, TradelensConfig};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TradelensConfig,
    pub themes: ThemeStore,
}

impl AppContext {
    /// Open the theme store at `prefs_path`, or the user-level default.
    pub fn init(config: TradelensConfig, prefs_path: Option<&Path>) -> anyhow::Result<Self> {
        let fallback = config.general.default_theme;
        let themes = match prefs_path {
            Some(path) => ThemeStore::open(path, fallback),
            None => ThemeStore::open_default(fallback)?,
        };
        Ok(Self { config, themes })
    }
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TradelensConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TradelensConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_env_prefix(&env_keys, "TRADELENS_GEMINI") {
        warnings.push(
            "Gemini config appears default while TRADELENS_GEMINI* env vars exist. Use double underscores (example: TRADELENS_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if !config.gemini.is_configured() && env_keys.iter().any(|key| key == "GEMINI_API_KEY") {
        warnings.push(
            "GEMINI_API_KEY is set but not read. Export it as TRADELENS_GEMINI__API_KEY instead."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
