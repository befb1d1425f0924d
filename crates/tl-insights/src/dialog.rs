//! Insights dialog state machine.
//!
//! ```text
//! closed → opening → loading → ready | failed
//!                  → ready | failed            (cached result)
//! ready | failed → loading                     (regenerate)
//! opening | loading | ready | failed → closed
//! ```
//!
//! The dialog owns a single [`InsightResult`] (initially `Pending`) and allows
//! one request in flight at a time. Each request is identified by a
//! [`RequestTicket`]; a result is applied only when it carries the ticket of
//! the in-flight request and the dialog is still mounted. Closing keeps the cached result, so reopening
//! shows it again without a new request.

use std::fmt;

use tl_core::insight::{InsightRequest, InsightResult};
use tl_markup::{MarkupFragment, RenderOptions, render_markup_with};

use crate::requester::InsightRequester;
use crate::transport::Transport;

/// Visible phase of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogState {
    Closed,
    Opening,
    Loading,
    Ready,
    Failed,
}

impl DialogState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Closed => &[Self::Opening],
            Self::Opening => &[Self::Loading, Self::Ready, Self::Failed, Self::Closed],
            Self::Loading => &[Self::Ready, Self::Failed, Self::Closed],
            Self::Ready | Self::Failed => &[Self::Loading, Self::Closed],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one request started by a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// What the dialog body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    Hidden,
    Spinner,
    Markup(MarkupFragment),
    Error(String),
}

/// One insights dialog attached to one chart.
#[derive(Debug)]
pub struct InsightDialog {
    chart_title: String,
    state: DialogState,
    result: InsightResult,
    in_flight: Option<u64>,
    next_ticket: u64,
    mounted: bool,
}

impl InsightDialog {
    #[must_use]
    pub fn new(chart_title: impl Into<String>) -> Self {
        Self {
            chart_title: chart_title.into(),
            state: DialogState::Closed,
            result: InsightResult::Pending,
            in_flight: None,
            next_ticket: 0,
            mounted: true,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("AI Insights: {}", self.chart_title)
    }

    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    #[must_use]
    pub const fn result(&self) -> &InsightResult {
        &self.result
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Open the dialog.
    ///
    /// Returns a ticket when the caller must start a request, which happens
    /// only when nothing is cached or in flight. Reopening with a cached or
    /// in-flight result returns `None`.
    pub fn open(&mut self) -> Option<RequestTicket> {
        if !self.mounted || self.state != DialogState::Closed {
            return None;
        }
        self.transition(DialogState::Opening);

        if self.in_flight.is_some() {
            self.transition(DialogState::Loading);
            return None;
        }
        match self.result {
            InsightResult::Text(_) => {
                self.transition(DialogState::Ready);
                None
            }
            InsightResult::Failure(_) => {
                self.transition(DialogState::Failed);
                None
            }
            InsightResult::Pending => Some(self.start()),
        }
    }

    /// Discard the current result and start a new request.
    ///
    /// Only allowed from `Ready` or `Failed` while nothing is in flight.
    pub fn regenerate(&mut self) -> Option<RequestTicket> {
        if !self.mounted
            || self.in_flight.is_some()
            || !matches!(self.state, DialogState::Ready | DialogState::Failed)
        {
            return None;
        }
        Some(self.start())
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` (and changes nothing) when the dialog is unmounted, the
    /// ticket is not the in-flight one, or `result` is still pending.
    pub fn settle(&mut self, ticket: RequestTicket, result: InsightResult) -> bool {
        if !self.mounted {
            tracing::debug!(ticket = ticket.0, "discarding result for unmounted dialog");
            return false;
        }
        if self.in_flight != Some(ticket.0) {
            tracing::warn!(
                ticket = ticket.0,
                in_flight = ?self.in_flight,
                "ignoring result for stale request"
            );
            return false;
        }
        if !result.is_settled() {
            return false;
        }

        let next = if matches!(result, InsightResult::Text(_)) {
            DialogState::Ready
        } else {
            DialogState::Failed
        };
        self.in_flight = None;
        self.result = result;
        if self.state == DialogState::Loading {
            self.transition(next);
        }
        true
    }

    /// Hide the dialog. Cached and in-flight results are kept.
    pub fn close(&mut self) {
        if self.state != DialogState::Closed {
            self.transition(DialogState::Closed);
        }
    }

    /// Mark the dialog as removed. Every later [`settle`](Self::settle) is a no-op.
    pub fn unmount(&mut self) {
        self.close();
        self.mounted = false;
    }

    /// Current body. Markup is rendered fresh from the cached text on each call.
    #[must_use]
    pub fn view(&self, options: RenderOptions) -> DialogView {
        match (self.state, &self.result) {
            (DialogState::Closed, _) => DialogView::Hidden,
            (DialogState::Ready, InsightResult::Text(raw)) => {
                DialogView::Markup(render_markup_with(raw, options))
            }
            (DialogState::Failed, InsightResult::Failure(message)) => {
                DialogView::Error(message.clone())
            }
            _ => DialogView::Spinner,
        }
    }

    /// Run a ticket to completion against `requester` and settle it.
    ///
    /// This borrows the dialog until the request finishes, so it cannot be
    /// closed or unmounted meanwhile. Callers that need to do that await
    /// [`InsightRequester::request_insight`] on their own and hand the result
    /// to [`settle`](Self::settle).
    pub async fn run<T: Transport>(
        &mut self,
        ticket: RequestTicket,
        requester: &InsightRequester<T>,
        request: &InsightRequest,
    ) -> bool {
        let result = requester.request_insight(request).await;
        self.settle(ticket, result)
    }

    fn start(&mut self) -> RequestTicket {
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        self.result = InsightResult::Pending;
        self.transition(DialogState::Loading);
        RequestTicket(self.next_ticket)
    }

    fn transition(&mut self, next: DialogState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid dialog transition {} -> {next}",
            self.state
        );
        tracing::debug!(chart = %self.chart_title, from = %self.state, to = %next, "dialog transition");
        self.state = next;
    }
}
