use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Charts => commands::charts::handle(flags),
        Commands::Insight(args) => commands::insight::handle(&args, ctx, flags).await,
        Commands::Render(args) => commands::render::handle(&args, ctx, flags),
        Commands::Theme { action } => commands::theme::handle(&action, ctx, flags),
    }
}
