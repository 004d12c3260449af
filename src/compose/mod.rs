//! The three callback factories.
//!
//! Each factory closes over an [`Accumulator`](crate::types::Accumulator)
//! and a downstream [`Continuation`](crate::traits::Continuation), and
//! returns a named callback that intercepts one upstream error-first
//! result:
//!
//! - [`augment`]: merge the success payload into the accumulator under one
//!   field, forward errors.
//! - [`augment_bulk`]: project slots of a sequence-shaped payload onto
//!   several fields, forward errors.
//! - [`passthrough`]: forward the untouched accumulator on success, swallow
//!   errors after reporting them.
//!
//! What happens to the error channel is a named, inspectable
//! [`ErrorPolicy`] rather than an implicit difference in behavior.

pub mod augment;
pub mod bulk;
pub mod passthrough;

pub use augment::{augment, augment_with, Augment};
pub use bulk::{augment_bulk, augment_bulk_with, AugmentBulk};
pub use passthrough::{passthrough, passthrough_with, Passthrough};

/// What a produced callback does with an upstream error after reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// The error is forwarded to the downstream continuation.
    Forward,
    /// The error is consumed here; the downstream continuation never runs.
    ///
    /// This is the deliberate asymmetry of [`passthrough`]: a terminal
    /// report for fire-and-forget completions. Callers that need the error
    /// downstream must use a forwarding factory instead.
    Swallow,
}
