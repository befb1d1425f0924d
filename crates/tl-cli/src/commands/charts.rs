use tl_core::charts::catalog;
use tl_core::responses::ChartSummary;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `tlx charts`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = catalog().iter().map(ChartSummary::from).collect::<Vec<_>>();
    output(&summaries, flags.format)
}
