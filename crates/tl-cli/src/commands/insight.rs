use anyhow::Context;
use tl_core::charts::find_chart;
use tl_core::insight::InsightRequest;
use tl_core::responses::InsightResponse;
use tl_insights::{DialogState, DialogView, InsightDialog, InsightRequester, Transport};
use tl_markup::RenderOptions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InsightArgs;
use crate::context::AppContext;
use crate::output::output_markup;
use crate::progress::Progress;

/// Handle `tlx insight <chart>`.
///
/// Prints the settled dialog, then fails with the user-facing message if the
/// request did not produce text.
pub async fn handle(
    args: &InsightArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let chart = find_chart(&args.chart)?;
    let requester = InsightRequester::from_config(ctx.config.gemini.clone())
        .context("failed to build insight HTTP client")?;
    let options = RenderOptions {
        classes: args.classes || ctx.config.general.markup_classes,
    };

    let dialog = run_dialog(&requester, &chart.to_request(), args.regenerate).await;
    let response = insight_response(&chart.id, &dialog, options);
    output_markup(&response, response.html.as_deref(), flags.format)?;

    match response.error {
        Some(message) => anyhow::bail!(message),
        None => Ok(()),
    }
}

/// Open a dialog for `request` and wait for it to settle, regenerating once
/// when asked.
async fn run_dialog<T: Transport>(
    requester: &InsightRequester<T>,
    request: &InsightRequest,
    regenerate: bool,
) -> InsightDialog {
    let mut dialog = InsightDialog::new(&request.chart_title);

    if let Some(ticket) = dialog.open() {
        let progress = Progress::spinner(&format!("Generating {}", dialog.title()));
        let result = requester.request_insight(request).await;
        dialog.settle(ticket, result);
        finish(&progress, &dialog);
    }

    if regenerate && let Some(ticket) = dialog.regenerate() {
        let progress = Progress::spinner("Regenerating insights");
        let result = requester.request_insight(request).await;
        dialog.settle(ticket, result);
        finish(&progress, &dialog);
    }

    dialog
}

fn finish(progress: &Progress, dialog: &InsightDialog) {
    if dialog.state() == DialogState::Ready {
        progress.finish_ok("Insights ready");
    } else {
        progress.finish_err("Insights failed");
    }
}

fn insight_response(
    chart_id: &str,
    dialog: &InsightDialog,
    options: RenderOptions,
) -> InsightResponse {
    let (html, error) = match dialog.view(options) {
        DialogView::Markup(fragment) => (Some(fragment.into_string()), None),
        DialogView::Error(message) => (None, Some(message)),
        DialogView::Hidden | DialogView::Spinner => (None, None),
    };

    InsightResponse {
        chart: chart_id.to_string(),
        title: dialog.title(),
        state: dialog.state().to_string(),
        status: dialog.result().as_str().to_string(),
        raw: dialog.result().text().map(str::to_string),
        html,
        error,
    }
}
