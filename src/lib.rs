//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `callback_rail::*` or pick focused pieces as needed.
//!
//! callback-rail wraps the error-first callback pattern: each factory
//! returns a callback that intercepts one upstream asynchronous result,
//! merges it into a shared [`Accumulator`], reports failures to a
//! diagnostic sink, and forwards control to a downstream continuation.
//!
//! # Examples
//!
//! ## Gathering One Field
//!
//! ```
//! use callback_rail::prelude::*;
//!
//! let profile: Accumulator<String> = Accumulator::new();
//! let mut on_loaded = augment(
//!     profile.clone(),
//!     "display_name",
//!     |outcome: Result<Accumulator<String>, &str>| {
//!         assert!(outcome.unwrap().contains("display_name"));
//!     },
//! );
//!
//! on_loaded.resume(Ok("Ada".to_string()));
//! assert_eq!(profile.get("display_name"), Some("Ada".to_string()));
//! ```
//!
//! ## Projecting a Bulk Result
//!
//! ```
//! use callback_rail::prelude::*;
//!
//! let car: Accumulator<&str> = Accumulator::new();
//! let mut on_row = augment_bulk(
//!     car.clone(),
//!     mappings![0 => "make", 1 => "colour", 2 => "year"],
//!     |outcome: Result<Accumulator<&str>, &str>| {
//!         assert!(outcome.is_ok());
//!     },
//! );
//!
//! on_row.resume(Ok(vec!["volvo", "blue", "2014"]));
//! assert_eq!(car.get("year"), Some("2014"));
//! ```
//!
//! ## Terminal Passthrough
//!
//! ```
//! use callback_rail::prelude::*;
//!
//! let acc: Accumulator<i32> = Accumulator::new();
//! let mut on_done = passthrough(acc.clone(), |outcome: Result<Accumulator<i32>, &str>| {
//!     // Never reached: passthrough swallows upstream errors after
//!     // reporting them.
//!     let _ = outcome;
//!     unreachable!();
//! });
//!
//! on_done.resume(Err("connection reset"));
//! assert!(acc.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The three callback factories and their error policies
pub mod compose;
/// Failure reporting sinks for produced callbacks
pub mod diagnostics;
/// Macro for building field-mapping lists
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for callback composition
pub mod traits;
/// Accumulator and field-mapping types
pub mod types;

/// Future adapters for composition at `.await` boundaries (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

// Re-export common items at root, but encourage using the prelude.
pub use compose::{
    augment, augment_bulk, augment_bulk_with, augment_with, passthrough, passthrough_with,
    Augment, AugmentBulk, ErrorPolicy, Passthrough,
};
pub use diagnostics::{DefaultSink, DiagnosticRecord, DiagnosticSink, NullSink, RecordingSink};
pub use traits::Continuation;
pub use types::{Accumulator, FieldMapping, FieldVec, MappingVec};

#[cfg(feature = "std")]
pub use diagnostics::StderrSink;
