//! Display state for a generated plan.
//!
//! Tracks what the user currently sees: a plan, an inline error, or
//! nothing, plus whether any generation is still pending. Completed
//! responses always overwrite the state, so the most recently applied
//! response wins.

use crate::export::{self, PageLayout};
use crate::pdf::PdfDocument;
use crate::{Error, PlanResponse, Result};
use chrono::NaiveDate;

/// Handle for a generation started through [`PlanView::begin_generation`]
#[derive(Debug)]
#[must_use = "a pending generation must be completed with PlanView::apply"]
pub struct PendingGeneration {
    sequence: u64,
}

impl PendingGeneration {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// What the presentation layer is showing
#[derive(Clone, Debug, Default)]
pub struct PlanView {
    displayed: Option<PlanResponse>,
    error: Option<String>,
    pending: usize,
    issued: u64,
}

impl PlanView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a generation as in flight and clear any inline error
    pub fn begin_generation(&mut self) -> PendingGeneration {
        self.pending += 1;
        self.issued += 1;
        self.error = None;
        tracing::debug!("Generation #{} started ({} pending)", self.issued, self.pending);
        PendingGeneration {
            sequence: self.issued,
        }
    }

    /// Record the outcome of a generation
    ///
    /// A response without success status or without a result is shown as an
    /// inline error and clears any previously displayed plan.
    pub fn apply(&mut self, pending: PendingGeneration, response: PlanResponse) -> Result<()> {
        self.pending = self.pending.saturating_sub(1);

        if response.is_displayable() {
            tracing::debug!("Generation #{} displayed", pending.sequence);
            self.error = None;
            self.displayed = Some(response);
            return Ok(());
        }

        let message = response.failure_message();
        tracing::warn!("Generation #{} failed: {}", pending.sequence, message);
        self.displayed = None;
        self.error = Some(message.clone());
        Err(Error::Generation(message))
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn displayed(&self) -> Option<&PlanResponse> {
        self.displayed.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Export is offered only for a displayed plan with nothing pending
    pub fn can_export(&self) -> bool {
        self.displayed.is_some() && !self.is_loading()
    }

    /// Lay out the displayed plan as a PDF document
    pub fn export_pdf(&self, layout: &PageLayout, generated_on: NaiveDate) -> Result<PdfDocument> {
        if self.is_loading() {
            return Err(Error::ExportUnavailable(
                "a workout plan is still being generated".into(),
            ));
        }
        let response = self
            .displayed
            .as_ref()
            .ok_or_else(|| Error::ExportUnavailable("no workout plan to export".into()))?;

        export::layout_plan(response, layout, generated_on)
    }
}
