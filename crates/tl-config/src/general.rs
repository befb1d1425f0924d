//! General application configuration.

use serde::{Deserialize, Serialize};
use tl_core::enums::Theme;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Theme used when no preference has been saved yet.
    #[serde(default)]
    pub default_theme: Theme,

    /// Emit dashboard CSS classes on rendered insight markup.
    #[serde(default)]
    pub markup_classes: bool,
}
