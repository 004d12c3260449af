//! Bulk augmentation over sequence-shaped results.

use crate::compose::ErrorPolicy;
use crate::diagnostics::{DefaultSink, DiagnosticSink};
use crate::traits::Continuation;
use crate::types::alloc_type::Vec;
use crate::types::{Accumulator, FieldMapping, MappingVec};
use core::fmt::Debug;

/// Returns a callback that projects slots of a sequence-shaped success
/// payload onto named accumulator fields, then forwards the accumulator
/// downstream.
///
/// On `Ok(values)`, each mapping is applied in list order:
/// `accumulator[mapping.key] = values[mapping.index]`. An out-of-range
/// index is not validated; it clears the destination field, the same
/// observable outcome as reading an absent slot. When two mappings target
/// the same key, the later one wins. Afterwards `downstream` is resumed
/// with `Ok` of the same accumulator handle.
///
/// On `Err(error)`, the full mapping list and the accumulator's state are
/// reported to the sink and the error is forwarded downstream.
///
/// # Examples
///
/// ```
/// use callback_rail::prelude::*;
///
/// let car: Accumulator<&str> = Accumulator::new();
/// let mut on_row = augment_bulk(
///     car.clone(),
///     mappings![0 => "make", 1 => "colour"],
///     |outcome: Result<Accumulator<&str>, &str>| {
///         assert!(outcome.is_ok());
///     },
/// );
///
/// on_row.resume(Ok(vec!["volvo", "blue"]));
/// assert_eq!(car.get("make"), Some("volvo"));
/// assert_eq!(car.get("colour"), Some("blue"));
/// ```
pub fn augment_bulk<V, M, C>(
    accumulator: Accumulator<V>,
    mappings: M,
    downstream: C,
) -> AugmentBulk<V, C>
where
    M: IntoIterator,
    M::Item: Into<FieldMapping>,
{
    augment_bulk_with(accumulator, mappings, downstream, DefaultSink)
}

/// [`augment_bulk`] with an explicit [`DiagnosticSink`].
pub fn augment_bulk_with<V, M, C, S>(
    accumulator: Accumulator<V>,
    mappings: M,
    downstream: C,
    sink: S,
) -> AugmentBulk<V, C, S>
where
    M: IntoIterator,
    M::Item: Into<FieldMapping>,
    S: DiagnosticSink,
{
    AugmentBulk {
        accumulator,
        mappings: mappings.into_iter().map(Into::into).collect(),
        downstream,
        sink,
    }
}

/// Callback produced by [`augment_bulk`].
#[must_use = "callbacks do nothing until resumed"]
pub struct AugmentBulk<V, C, S = DefaultSink> {
    accumulator: Accumulator<V>,
    mappings: MappingVec,
    downstream: C,
    sink: S,
}

impl<V, C, S> AugmentBulk<V, C, S> {
    /// The mapping list, in application order.
    #[inline]
    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
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

impl<V, E, C, S> Continuation<Vec<V>, E> for AugmentBulk<V, C, S>
where
    V: Clone + Debug,
    C: Continuation<Accumulator<V>, E>,
    S: DiagnosticSink,
{
    fn resume(&mut self, outcome: Result<Vec<V>, E>) {
        match outcome {
            Ok(values) => {
                for mapping in &self.mappings {
                    match values.get(mapping.index) {
                        Some(value) => self.accumulator.set(mapping.key.clone(), value.clone()),
                        None => {
                            self.accumulator.unset(&mapping.key);
                        }
                    }
                }
                self.downstream.resume(Ok(self.accumulator.clone()));
            }
            Err(error) => {
                self.sink.bulk_failed(&self.mappings, &self.accumulator);
                self.downstream.resume(Err(error));
            }
        }
    }
}
