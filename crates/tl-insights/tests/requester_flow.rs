//! Requester and dialog behaviour against a recording fake transport.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tl_config::GeminiConfig;
use tl_core::enums::ChartKind;
use tl_core::insight::{InsightRequest, InsightResult};
use tl_insights::{
    DialogState, DialogView, InsightDialog, InsightError, InsightRequester,
    MISSING_CREDENTIAL_MESSAGE, NO_INSIGHTS, REQUEST_FAILED_MESSAGE, Transport,
    TransportResponse,
};
use tl_markup::{RenderOptions, render_markup};

const SAMPLE_REPLY: &str =
    r#"{"candidates":[{"content":{"parts":[{"text":"**Key Trends**\n- Growth up"}]}}]}"#;

struct FakeTransport {
    calls: AtomicUsize,
    reply: Result<TransportResponse, String>,
    last_url: Mutex<Option<String>>,
    last_body: Mutex<Option<Value>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self::with(Ok(TransportResponse {
            status,
            body: body.to_string(),
        }))
    }

    fn failing(message: &str) -> Self {
        Self::with(Err(message.to_string()))
    }

    fn with(reply: Result<TransportResponse, String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply,
            last_url: Mutex::new(None),
            last_body: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        *self.last_body.lock().unwrap() = Some(body.clone());
        self.reply.clone().map_err(InsightError::Transport)
    }
}

fn configured() -> GeminiConfig {
    GeminiConfig {
        api_key: "test key/1".into(),
        endpoint: "https://example.test".into(),
        ..Default::default()
    }
}

fn request() -> InsightRequest {
    InsightRequest::new(
        "Import vs Export Trend",
        ChartKind::Line,
        vec![json!({"month": "Jan", "imports": 4200, "exports": 2400})],
    )
    .with_context("12-month rolling trade values")
}

#[tokio::test]
async fn text_reply_flows_into_renderer() {
    let requester = InsightRequester::new(FakeTransport::replying(200, SAMPLE_REPLY), configured());

    let result = requester.request_insight(&request()).await;
    assert_eq!(result, InsightResult::Text("**Key Trends**\n- Growth up".into()));

    let html = render_markup(result.text().unwrap());
    assert_eq!(html.as_str().matches("<strong>").count(), 1);
    assert!(html.as_str().contains("<strong>Key Trends</strong>"));
    assert_eq!(html.as_str().matches("<ul>").count(), 1);
    assert_eq!(html.as_str().matches("<li>").count(), 1);
    assert!(html.as_str().contains("<li>Growth up</li>"));
    assert_eq!(requester.transport().calls(), 1);
}

#[tokio::test]
async fn missing_credential_makes_no_call() {
    let requester = InsightRequester::new(
        FakeTransport::replying(200, SAMPLE_REPLY),
        GeminiConfig::default(),
    );

    let result = requester.request_insight(&request()).await;
    assert_eq!(result, InsightResult::Failure(MISSING_CREDENTIAL_MESSAGE.into()));
    assert_eq!(requester.transport().calls(), 0);
}

#[tokio::test]
async fn non_success_status_is_generic_failure() {
    let requester = InsightRequester::new(
        FakeTransport::replying(503, r#"{"error": "overloaded"}"#),
        configured(),
    );

    let result = requester.request_insight(&request()).await;
    assert_eq!(result, InsightResult::Failure(REQUEST_FAILED_MESSAGE.into()));
    assert_eq!(requester.transport().calls(), 1);
}

#[tokio::test]
async fn non_success_status_keeps_cause_for_logging() {
    let requester = InsightRequester::new(FakeTransport::replying(400, "bad key"), configured());

    let err = requester.try_request(&request()).await.unwrap_err();
    assert!(matches!(
        err,
        InsightError::Api { status: 400, ref message } if message == "bad key"
    ));
}

#[tokio::test]
async fn transport_error_is_generic_failure() {
    let requester = InsightRequester::new(FakeTransport::failing("connection reset"), configured());

    let result = requester.request_insight(&request()).await;
    assert_eq!(result, InsightResult::Failure(REQUEST_FAILED_MESSAGE.into()));
}

#[tokio::test]
async fn malformed_json_is_generic_failure() {
    let requester = InsightRequester::new(FakeTransport::replying(200, "<html>oops"), configured());

    let result = requester.request_insight(&request()).await;
    assert_eq!(result, InsightResult::Failure(REQUEST_FAILED_MESSAGE.into()));
}

#[tokio::test]
async fn degenerate_reply_falls_back_to_placeholder() {
    let requester =
        InsightRequester::new(FakeTransport::replying(200, r#"{"candidates": []}"#), configured());

    let result = requester.request_insight(&request()).await;
    assert_eq!(result, InsightResult::Text(NO_INSIGHTS.into()));
}

#[tokio::test]
async fn request_targets_model_with_encoded_key() {
    let requester = InsightRequester::new(FakeTransport::replying(200, SAMPLE_REPLY), configured());
    requester.request_insight(&request()).await;

    let url = requester.transport().last_url.lock().unwrap().clone().unwrap();
    assert_eq!(
        url,
        "https://example.test/v1/models/gemini-2.5-flash:generateContent?key=test%20key%2F1"
    );

    let body = requester.transport().last_body.lock().unwrap().clone().unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Chart: Import vs Export Trend"));
    assert!(prompt.contains("Context: 12-month rolling trade values"));
    assert!(prompt.contains("\"exports\": 2400"));
}

#[tokio::test]
async fn dialog_requests_once_and_regenerates_on_demand() {
    let requester = InsightRequester::new(FakeTransport::replying(200, SAMPLE_REPLY), configured());
    let req = request();
    let mut dialog = InsightDialog::new(&req.chart_title);

    let ticket = dialog.open().expect("first open starts a request");
    assert!(dialog.run(ticket, &requester, &req).await);
    assert_eq!(dialog.state(), DialogState::Ready);
    assert!(matches!(dialog.view(RenderOptions::default()), DialogView::Markup(_)));

    dialog.close();
    assert!(dialog.open().is_none());
    assert_eq!(requester.transport().calls(), 1);

    let ticket = dialog.regenerate().expect("ready dialog regenerates");
    assert!(dialog.run(ticket, &requester, &req).await);
    assert_eq!(requester.transport().calls(), 2);
}

#[tokio::test]
async fn dialog_shows_failure_without_retrying() {
    let requester = InsightRequester::new(FakeTransport::replying(500, ""), configured());
    let req = request();
    let mut dialog = InsightDialog::new(&req.chart_title);

    let ticket = dialog.open().unwrap();
    dialog.run(ticket, &requester, &req).await;

    assert_eq!(
        dialog.view(RenderOptions::default()),
        DialogView::Error(REQUEST_FAILED_MESSAGE.into())
    );
    assert_eq!(requester.transport().calls(), 1);
}

#[tokio::test]
async fn dialog_closed_while_loading_keeps_late_result() {
    let requester = InsightRequester::new(FakeTransport::replying(200, SAMPLE_REPLY), configured());
    let req = request();
    let mut dialog = InsightDialog::new(&req.chart_title);

    let ticket = dialog.open().unwrap();
    let pending = requester.request_insight(&req);
    dialog.close();
    assert_eq!(dialog.state(), DialogState::Closed);

    assert!(dialog.settle(ticket, pending.await));
    assert!(dialog.result().is_settled());
    assert!(dialog.open().is_none());
    assert_eq!(dialog.state(), DialogState::Ready);
    assert_eq!(requester.transport().calls(), 1);
}

#[tokio::test]
async fn dialog_unmounted_while_loading_drops_late_result() {
    let requester = InsightRequester::new(FakeTransport::replying(200, SAMPLE_REPLY), configured());
    let req = request();
    let mut dialog = InsightDialog::new(&req.chart_title);

    let ticket = dialog.open().unwrap();
    let pending = requester.request_insight(&req);
    dialog.unmount();

    assert!(!dialog.settle(ticket, pending.await));
    assert_eq!(dialog.result(), &InsightResult::Pending);
}
