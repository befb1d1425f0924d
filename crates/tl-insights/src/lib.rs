//! # tl-insights
//!
//! AI insight summaries for dashboard charts.
//!
//! - [`InsightRequester`] builds the analysis prompt for a chart and sends it
//!   to a `generateContent` endpoint through a [`Transport`].
//! - [`InsightDialog`] is the per-chart dialog state machine that decides when
//!   a request starts, which result is current, and what the body shows.
//!
//! Errors never leave a request: they settle it as
//! [`InsightResult::Failure`](tl_core::insight::InsightResult::Failure) with a
//! user-facing message while the cause goes to `tracing`.

pub mod dialog;
pub mod prompt;
pub mod response;
pub mod transport;

mod error;
mod requester;

pub use dialog::{DialogState, DialogView, InsightDialog, RequestTicket};
pub use error::{InsightError, MISSING_CREDENTIAL_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use requester::InsightRequester;
pub use response::NO_INSIGHTS;
pub use transport::{HttpTransport, Transport, TransportResponse};
