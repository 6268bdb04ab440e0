//! Audit lifecycle: `idle -> fetching -> analyzing -> completed | error`.
//!
//! The controller is plain data so views can hold it in a signal and tests
//! can drive it directly. Every accepted scan bumps a generation counter;
//! results carrying an older generation are dropped.

use std::fmt;
use std::time::Duration;

use crate::error::AuditError;
use crate::report::{AuditReport, AuditService};
use crate::timer;

/// How long the "copied" check mark stays on a recommendation.
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisStep {
    #[default]
    Idle,
    Fetching,
    Analyzing,
    Completed,
    Error,
}

impl AnalysisStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStep::Idle => "idle",
            AnalysisStep::Fetching => "fetching",
            AnalysisStep::Analyzing => "analyzing",
            AnalysisStep::Completed => "completed",
            AnalysisStep::Error => "error",
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, AnalysisStep::Fetching | AnalysisStep::Analyzing)
    }

    /// Steps from which a new scan may be started.
    pub fn accepts_start(&self) -> bool {
        !self.is_in_flight()
    }
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handed out by [`AuditController::start`]; completions must present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditController {
    step: AnalysisStep,
    report: Option<AuditReport>,
    error: Option<String>,
    generation: u64,
}

impl AuditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AnalysisStep {
        self.step
    }

    pub fn report(&self) -> Option<&AuditReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.step.is_in_flight()
    }

    pub fn can_reset(&self) -> bool {
        matches!(self.step, AnalysisStep::Completed | AnalysisStep::Error)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            "Analyzing..."
        } else {
            "Start Full Scan"
        }
    }

    /// `idle|completed|error -> fetching`. Ignored while a scan is in flight
    /// or when the URL is blank.
    pub fn start(&mut self, url: &str) -> Option<RequestTicket> {
        let url = url.trim();
        if url.is_empty() || !self.step.accepts_start() {
            tracing::debug!(step = %self.step, "start ignored");
            return None;
        }

        self.generation += 1;
        self.step = AnalysisStep::Fetching;
        self.error = None;
        self.report = None;
        tracing::debug!(generation = self.generation, url, "scan started");

        Some(RequestTicket {
            generation: self.generation,
            url: url.to_string(),
        })
    }

    /// `fetching -> analyzing` once the request is on its way.
    pub fn mark_dispatched(&mut self, ticket: &RequestTicket) -> bool {
        if self.is_current(ticket) && self.step == AnalysisStep::Fetching {
            self.step = AnalysisStep::Analyzing;
            true
        } else {
            false
        }
    }

    /// `analyzing -> completed | error`. Returns false when the ticket is
    /// stale and the outcome was discarded.
    pub fn complete(&mut self, ticket: &RequestTicket, outcome: Result<AuditReport, AuditError>) -> bool {
        if !self.is_current(ticket) || !self.step.is_in_flight() {
            tracing::warn!(
                ticket = ticket.generation,
                current = self.generation,
                step = %self.step,
                "discarding stale audit result"
            );
            return false;
        }

        match outcome {
            Ok(report) => {
                tracing::debug!(score = report.overall_score, "scan completed");
                self.report = Some(report);
                self.error = None;
                self.step = AnalysisStep::Completed;
            }
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(error = %message, transient = err.is_transient(), "scan failed");
                self.report = None;
                // AuditError's Display never renders blank.
                self.error = Some(message);
                self.step = AnalysisStep::Error;
            }
        }
        true
    }

    /// `completed|error -> idle`. Not offered while in flight.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.generation += 1;
        self.step = AnalysisStep::Idle;
        self.report = None;
        self.error = None;
        true
    }

    /// Runs one whole scan against `service`. Views use the step-wise API
    /// instead because they cannot hold the controller across the await.
    pub async fn run(&mut self, service: &dyn AuditService, url: &str) -> bool {
        let Some(ticket) = self.start(url) else {
            return false;
        };
        self.mark_dispatched(&ticket);
        let outcome = service.request_audit(&ticket.url).await;
        self.complete(&ticket, outcome)
    }

    fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation
    }
}

/// Which recommendation currently shows the "copied" mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied: Option<String>,
    generation: u64,
}

/// Proof of a particular `mark` call; only that call's timer may clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyToken(u64);

impl CopyIndicator {
    pub fn mark(&mut self, id: &str) -> CopyToken {
        self.generation += 1;
        self.copied = Some(id.to_string());
        CopyToken(self.generation)
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.as_deref() == Some(id)
    }

    pub fn copied_id(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    /// Clears the mark unless a newer copy happened since `token` was issued.
    pub fn expire(&mut self, token: CopyToken) -> bool {
        if token.0 == self.generation && self.copied.is_some() {
            self.copied = None;
            true
        } else {
            false
        }
    }
}

/// Waits out `delay`, then hands `token` to `expire`. Returns whether the
/// mark was actually cleared.
pub async fn clear_copied_after(
    delay: Duration,
    token: CopyToken,
    mut expire: impl FnMut(CopyToken) -> bool,
) -> bool {
    timer::sleep(delay).await;
    expire(token)
}
