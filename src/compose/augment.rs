//! Single-field augmentation.

use crate::compose::ErrorPolicy;
use crate::diagnostics::{DefaultSink, DiagnosticSink};
use crate::traits::Continuation;
use crate::types::alloc_type::String;
use crate::types::Accumulator;
use core::fmt::Debug;

/// Returns a callback that stores its success payload on `accumulator`
/// under `field`, then forwards the accumulator downstream.
///
/// On `Ok(value)`, the produced callback sets `accumulator[field] = value`
/// in place and resumes `downstream` with `Ok` of a handle to that same
/// accumulator (handle identity is preserved; see
/// [`Accumulator::ptr_eq`]). On `Err(error)`, it reports the field name and
/// the accumulator's current state to the default sink, leaves the
/// accumulator untouched, and resumes `downstream` with the error.
///
/// # Examples
///
/// ```
/// use callback_rail::prelude::*;
///
/// let profile: Accumulator<String> = Accumulator::new();
/// let mut on_loaded = augment(
///     profile.clone(),
///     "display_name",
///     |outcome: Result<Accumulator<String>, &str>| {
///         assert!(outcome.is_ok());
///     },
/// );
///
/// on_loaded.resume(Ok("Ada".to_string()));
/// assert_eq!(profile.get("display_name"), Some("Ada".to_string()));
/// ```
pub fn augment<V, K, C>(accumulator: Accumulator<V>, field: K, downstream: C) -> Augment<V, C>
where
    K: Into<String>,
{
    augment_with(accumulator, field, downstream, DefaultSink)
}

/// [`augment`] with an explicit [`DiagnosticSink`].
///
/// # Examples
///
/// ```
/// use callback_rail::prelude::*;
///
/// let acc: Accumulator<i32> = Accumulator::new();
/// let sink = RecordingSink::new();
/// let mut cb = augment_with(
///     acc.clone(),
///     "value",
///     |_: Result<Accumulator<i32>, &str>| {},
///     sink.clone(),
/// );
///
/// cb.resume(Err("unreachable"));
/// assert_eq!(sink.len(), 1);
/// ```
pub fn augment_with<V, K, C, S>(
    accumulator: Accumulator<V>,
    field: K,
    downstream: C,
    sink: S,
) -> Augment<V, C, S>
where
    K: Into<String>,
    S: DiagnosticSink,
{
    Augment {
        accumulator,
        field: field.into(),
        downstream,
        sink,
    }
}

/// Callback produced by [`augment`].
#[must_use = "callbacks do nothing until resumed"]
pub struct Augment<V, C, S = DefaultSink> {
    accumulator: Accumulator<V>,
    field: String,
    downstream: C,
    sink: S,
}

impl<V, C, S> Augment<V, C, S> {
    /// The destination field name.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The accumulator this callback writes to.
    #[inline]
    pub fn accumulator(&self) -> &Accumulator<V> {
        &self.accumulator
    }

    /// Always [`ErrorPolicy::Forward`].
    #[inline]
    pub fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy::Forward
    }
}

impl<V, E, C, S> Continuation<V, E> for Augment<V, C, S>
where
    V: Debug,
    C: Continuation<Accumulator<V>, E>,
    S: DiagnosticSink,
{
    fn resume(&mut self, outcome: Result<V, E>) {
        match outcome {
            Ok(value) => {
                self.accumulator.set(self.field.clone(), value);
                self.downstream.resume(Ok(self.accumulator.clone()));
            }
            Err(error) => {
                self.sink.augment_failed(&self.field, &self.accumulator);
                self.downstream.resume(Err(error));
            }
        }
    }
}
