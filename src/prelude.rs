//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use callback_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`mappings!`](crate::mappings)
//! - **Factories**: [`augment`], [`augment_bulk`], [`passthrough`] and
//!   their explicit-sink variants
//! - **Types**: [`Accumulator`], [`FieldMapping`], [`ErrorPolicy`]
//! - **Traits**: [`Continuation`], [`DiagnosticSink`]
//!
//! # Examples
//!
//! ```
//! use callback_rail::prelude::*;
//!
//! let acc: Accumulator<i32> = Accumulator::new();
//! let mut cb = augment(acc.clone(), "answer", |outcome: Result<Accumulator<i32>, &str>| {
//!     assert!(outcome.is_ok());
//! });
//! cb.resume(Ok(42));
//!
//! assert_eq!(acc.get("answer"), Some(42));
//! ```

// Macros
pub use crate::mappings;

// Factories and their callback types
pub use crate::compose::{
    augment, augment_bulk, augment_bulk_with, augment_with, passthrough, passthrough_with,
    Augment, AugmentBulk, ErrorPolicy, Passthrough,
};

// Diagnostics
pub use crate::diagnostics::{DefaultSink, DiagnosticRecord, DiagnosticSink, NullSink, RecordingSink};

#[cfg(feature = "std")]
pub use crate::diagnostics::StderrSink;

// Core types and traits
pub use crate::traits::Continuation;
pub use crate::types::{Accumulator, FieldMapping, MappingVec};
