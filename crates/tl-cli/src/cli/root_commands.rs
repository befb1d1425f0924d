use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List dashboard charts that support insights.
    Charts,
    /// Generate AI insights for a chart.
    Insight(InsightArgs),
    /// Render insight markup from a file or stdin.
    Render(RenderArgs),
    /// Theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InsightArgs {
    /// Chart id (see `tlx charts`).
    pub chart: String,

    /// Discard the first result and request a fresh one.
    #[arg(long)]
    pub regenerate: bool,

    /// Emit dashboard CSS classes on the rendered markup.
    #[arg(long)]
    pub classes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Input file; reads stdin when absent or `-`.
    pub file: Option<PathBuf>,

    /// Emit dashboard CSS classes on the rendered markup.
    #[arg(long)]
    pub classes: bool,
}

/// Theme preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the active theme.
    Get,
    /// Persist a new theme.
    Set { name: String },
    /// List available themes.
    List,
}
