//! Failure reporting for produced callbacks.
//!
//! Every factory carries a [`DiagnosticSink`]: a collaborator that receives
//! a report whenever an upstream result arrives on the error channel. The
//! sink is an observable side effect, not part of the control-flow contract;
//! substituting one never changes what a callback forwards downstream.
//!
//! The plain factories use [`DefaultSink`], which emits through `tracing`
//! when that feature is enabled and falls back to standard error under
//! `std`. Tests inject a [`RecordingSink`] and inspect the captured
//! [`DiagnosticRecord`]s instead of scraping process output.

use crate::types::alloc_type::{format, Rc, String, Vec};
use crate::types::FieldMapping;
use core::cell::RefCell;
use core::fmt::Debug;

/// Receives one report per failed upstream result.
///
/// The three methods mirror the three report shapes the factories produce:
/// a failed single-field augmentation carries the destination field name, a
/// failed bulk augmentation carries the full mapping list, and a swallowed
/// passthrough failure carries the error itself. All three include the
/// accumulator's state at the time of failure.
///
/// Methods take `&self` so one sink can be shared across many callbacks;
/// stateful sinks use interior mutability.
pub trait DiagnosticSink {
    /// A single-field augmentation saw an upstream error.
    fn augment_failed(&self, field: &str, state: &dyn Debug);

    /// A bulk augmentation saw an upstream error.
    fn bulk_failed(&self, mappings: &[FieldMapping], state: &dyn Debug);

    /// A passthrough consumed an upstream error without forwarding it.
    fn error_swallowed(&self, error: &dyn Debug, state: &dyn Debug);
}

/// The sink used by the plain factories.
///
/// Emits through `tracing` when the `tracing` feature is enabled,
/// otherwise writes to standard error under `std`. On a bare `no_std`
/// build there is nowhere to report to and reports are discarded; inject a
/// sink of your own if that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSink;

impl DiagnosticSink for DefaultSink {
    fn augment_failed(&self, field: &str, state: &dyn Debug) {
        #[cfg(feature = "tracing")]
        tracing::error!(field = %field, state = ?state, "upstream failed before field could be set");
        #[cfg(all(feature = "std", not(feature = "tracing")))]
        {
            std::eprintln!("err @ {field}");
            std::eprintln!("{state:?}");
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = (field, state);
        }
    }

    fn bulk_failed(&self, mappings: &[FieldMapping], state: &dyn Debug) {
        #[cfg(feature = "tracing")]
        tracing::error!(mappings = ?mappings, state = ?state, "upstream failed before fields could be set");
        #[cfg(all(feature = "std", not(feature = "tracing")))]
        {
            std::eprintln!("err @ {mappings:?}");
            std::eprintln!("{state:?}");
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = (mappings, state);
        }
    }

    fn error_swallowed(&self, error: &dyn Debug, state: &dyn Debug) {
        #[cfg(feature = "tracing")]
        tracing::error!(error = ?error, state = ?state, "upstream error swallowed");
        #[cfg(all(feature = "std", not(feature = "tracing")))]
        {
            std::eprintln!("err {error:?}");
            std::eprintln!("{state:?}");
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = (error, state);
        }
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn augment_failed(&self, _field: &str, _state: &dyn Debug) {}

    fn bulk_failed(&self, _mappings: &[FieldMapping], _state: &dyn Debug) {}

    fn error_swallowed(&self, _error: &dyn Debug, _state: &dyn Debug) {}
}

/// Console-style sink writing two lines per report to standard error.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StderrSink {
    fn augment_failed(&self, field: &str, state: &dyn Debug) {
        std::eprintln!("err @ {field}");
        std::eprintln!("{state:?}");
    }

    fn bulk_failed(&self, mappings: &[FieldMapping], state: &dyn Debug) {
        std::eprintln!("err @ {mappings:?}");
        std::eprintln!("{state:?}");
    }

    fn error_swallowed(&self, error: &dyn Debug, state: &dyn Debug) {
        std::eprintln!("err {error:?}");
        std::eprintln!("{state:?}");
    }
}

/// One captured report.
///
/// States and errors are rendered with `Debug` at capture time, so records
/// stay inspectable after the accumulator has moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticRecord {
    AugmentFailed {
        field: String,
        state: String,
    },
    BulkFailed {
        mappings: Vec<FieldMapping>,
        state: String,
    },
    ErrorSwallowed {
        error: String,
        state: String,
    },
}

/// A sink that captures reports for later inspection.
///
/// Cloning yields a handle onto the same record list, so a test can keep
/// one handle while moving the other into a factory.
///
/// # Examples
///
/// ```
/// use callback_rail::diagnostics::{DiagnosticSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// sink.augment_failed("make", &"state");
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<DiagnosticRecord>>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all captured records, oldest first.
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.borrow().clone()
    }

    /// Removes and returns all captured records.
    pub fn take(&self) -> Vec<DiagnosticRecord> {
        core::mem::take(&mut *self.records.borrow_mut())
    }

    /// Returns the number of captured records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Returns true if nothing has been captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn augment_failed(&self, field: &str, state: &dyn Debug) {
        self.records
            .borrow_mut()
            .push(DiagnosticRecord::AugmentFailed {
                field: field.into(),
                state: format!("{state:?}"),
            });
    }

    fn bulk_failed(&self, mappings: &[FieldMapping], state: &dyn Debug) {
        self.records.borrow_mut().push(DiagnosticRecord::BulkFailed {
            mappings: mappings.to_vec(),
            state: format!("{state:?}"),
        });
    }

    fn error_swallowed(&self, error: &dyn Debug, state: &dyn Debug) {
        self.records
            .borrow_mut()
            .push(DiagnosticRecord::ErrorSwallowed {
                error: format!("{error:?}"),
                state: format!("{state:?}"),
            });
    }
}
