//! Per-session conversion context.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::conversion::{ConversionOutcome, ConversionRequest, TextGenerator, ValidatedRequest};
use crate::error::ConverterError;
use crate::history::{ConversionHistory, HistoryEntry, HistoryView};

/// What a submission needs after validation.
enum Step {
    Done(ConversionOutcome),
    Call(String),
}

fn plan(request: &ConversionRequest) -> Result<Step, ConverterError> {
    match request.validate()? {
        ValidatedRequest::Idle => Ok(Step::Done(ConversionOutcome::Idle)),
        ValidatedRequest::SameUnits => {
            warn!(
                "Same unit selected on both sides ({}), skipping conversion",
                request.from_unit
            );
            Ok(Step::Done(ConversionOutcome::same_units()))
        }
        ValidatedRequest::Ready { prompt } => {
            info!("Converting: {}", prompt);
            Ok(Step::Call(prompt))
        }
    }
}

/// Everything that lives for one interactive session: currently just the history.
#[derive(Debug, Default)]
pub struct ConversionSession {
    history: ConversionHistory,
}

impl ConversionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// Run one form submission.
    ///
    /// The generator is only called for a valid request with two different
    /// units. Its text is returned untouched and, when non-empty, recorded.
    pub async fn convert<G: TextGenerator>(
        &mut self,
        generator: &G,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, ConverterError> {
        let prompt = match plan(request)? {
            Step::Done(outcome) => return Ok(outcome),
            Step::Call(prompt) => prompt,
        };
        let result = generator.generate(&prompt).await?;
        Ok(self.record(request, result))
    }

    fn record(&mut self, request: &ConversionRequest, result: String) -> ConversionOutcome {
        let entry = if result.is_empty() {
            None
        } else {
            let entry = HistoryEntry::new(request.value, &request.from_unit, &result);
            self.history
                .record(entry.clone())
                .then(|| String::from(entry))
        };
        ConversionOutcome::Converted { result, entry }
    }
}

/// Tauri-managed wrapper around the session.
///
/// The lock is only taken to read or record history, never across the
/// provider call, so `history_view` answers while a conversion is in flight.
#[derive(Default)]
pub struct SessionState {
    session: Mutex<ConversionSession>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn convert<G: TextGenerator>(
        &self,
        generator: &G,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, ConverterError> {
        let prompt = match plan(request)? {
            Step::Done(outcome) => return Ok(outcome),
            Step::Call(prompt) => prompt,
        };
        let result = generator.generate(&prompt).await?;
        Ok(self.session.lock().await.record(request, result))
    }

    pub async fn history_view(&self) -> HistoryView {
        self.session.lock().await.history().view()
    }
}
