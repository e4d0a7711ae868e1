//! Read → normalize → write, with status reporting.
//!
//! The controller is the only place that decides what happens on failure:
//! the first error from a collaborator is reported and the run stops, so a
//! failed read never reaches the normalizer and a failed normalization never
//! reaches the writer.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use normalize::{normalize, normalize_traced};
use tracing::Level;

use crate::document::TextDocument;
use crate::error::PipelineError;
use crate::status::StatusSink;
use crate::store::TextStore;

/// Drives one normalization job over a [`TextStore`] and a [`StatusSink`].
#[derive(Debug)]
pub struct Controller<S, R> {
    store: S,
    sink: R,
    normalizer: Option<fn(&str) -> String>,
}

impl<S: TextStore, R: StatusSink> Controller<S, R> {
    pub fn new(store: S, sink: R) -> Self {
        Self {
            store,
            sink,
            normalizer: None,
        }
    }

    /// Replaces the normalizer used by [`run`](Self::run).
    pub fn with_normalizer(mut self, normalizer: fn(&str) -> String) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn into_parts(self) -> (S, R) {
        (self.store, self.sink)
    }

    /// Runs the whole job and returns the completed document.
    ///
    /// Every failure has already been reported to the sink when this returns
    /// `Err`.
    pub fn run(&mut self, input: &Path, output: &Path) -> Result<TextDocument, PipelineError> {
        self.sink.welcome();
        let mut document = TextDocument::new(input, output);

        self.sink.info(&format!("Reading file: {}", input.display()));
        let raw = self.read_input(input)?;
        self.sink.success("File read successfully.");
        self.sink.original_text(&raw);
        document.record_raw(raw);

        self.sink.separator();
        self.sink.info("Normalizing text...");
        let raw = document.raw_content().unwrap_or_default();
        let normalized = match run_normalizer(raw, self.normalizer) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "normalization aborted");
                self.sink
                    .error("An unexpected error occurred during normalization.");
                self.sink.error(&format!("Reason: {err}"));
                return Err(err);
            }
        };
        self.sink.success("Text normalized successfully.");
        self.sink.normalized_text(&normalized);
        document.record_normalized(normalized);

        self.sink.separator();
        self.sink
            .info(&format!("Writing normalized text to: {}", output.display()));
        let normalized = document.normalized_content().unwrap_or_default();
        if let Err(err) = self.store.write(output, normalized) {
            tracing::error!(error = %err, "write failed");
            self.sink.error("Failed to write output file.");
            self.sink.error(&format!("Reason: {err}"));
            return Err(err);
        }
        self.sink
            .success(&format!("Output written to: {}", output.display()));
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            "normalization job completed"
        );

        self.sink.done();
        Ok(document)
    }

    fn read_input(&mut self, input: &Path) -> Result<String, PipelineError> {
        match self.store.read(input) {
            Ok(raw) => {
                tracing::info!(path = %input.display(), bytes = raw.len(), "input loaded");
                Ok(raw)
            }
            Err(err) if err.is_empty_input() => {
                tracing::warn!(path = %input.display(), "input is blank");
                self.sink.warn(&format!("Input file is empty: {err}"));
                self.sink.warn("Nothing to normalize. Exiting.");
                Err(err)
            }
            Err(err) => {
                tracing::error!(error = %err, "read failed");
                self.sink.error("Failed to read input file.");
                self.sink.error(&format!("Reason: {err}"));
                Err(err)
            }
        }
    }
}

/// Runs the normalizer, turning a panic into [`PipelineError::Normalization`].
fn run_normalizer(
    raw: &str,
    normalizer: Option<fn(&str) -> String>,
) -> Result<String, PipelineError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        if let Some(normalizer) = normalizer {
            normalizer(raw)
        } else if tracing::enabled!(Level::DEBUG) {
            normalize_traced(raw).0
        } else {
            normalize(raw)
        }
    }));
    outcome.map_err(|payload| PipelineError::Normalization(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
