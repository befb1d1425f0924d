use tl_config::ThemeStore;
use tl_core::enums::Theme;
use tl_core::responses::{ThemeEntry, ThemeResponse};

use crate::cli::{GlobalFlags, ThemeCommands};
use crate::context::AppContext;
use crate::output::output;

/// Handle `tlx theme`.
pub fn handle(
    action: &ThemeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ThemeCommands::Get => output(&theme_response(&ctx.themes), flags.format),
        ThemeCommands::Set { name } => {
            let theme = name.parse::<Theme>()?;
            ctx.themes.set(theme)?;
            output(&theme_response(&ctx.themes), flags.format)
        }
        ThemeCommands::List => output(&theme_entries(ctx.themes.theme()), flags.format),
    }
}

fn theme_response(store: &ThemeStore) -> ThemeResponse {
    let theme = store.theme();
    ThemeResponse {
        theme,
        css_class: theme.css_class(),
        dark: theme.is_dark(),
        path: store.path().display().to_string(),
    }
}

fn theme_entries(active: Theme) -> Vec<ThemeEntry> {
    Theme::ALL
        .iter()
        .map(|&theme| ThemeEntry {
            theme,
            dark: theme.is_dark(),
            active: theme == active,
        })
        .collect()
}
