//! Pass the accumulator along, swallowing errors after reporting them.

use crate::compose::ErrorPolicy;
use crate::diagnostics::{DefaultSink, DiagnosticSink};
use crate::traits::Continuation;
use crate::types::Accumulator;
use core::fmt::Debug;

/// Returns a callback that forwards the unmodified accumulator on success
/// and swallows errors after reporting them.
///
/// Only the error channel of the upstream result is consulted. On
/// `Ok(())`, `downstream` is resumed with `Ok` of the same accumulator
/// handle, untouched. On `Err(error)`, the error and the accumulator's
/// state are reported to the sink and `downstream` is **not** resumed at
/// all; the error stops here. See [`ErrorPolicy::Swallow`].
///
/// # Examples
///
/// ```
/// use callback_rail::prelude::*;
///
/// let acc: Accumulator<i32> = Accumulator::new();
/// acc.set("ready", 1);
///
/// let mut on_done = passthrough(
///     acc.clone(),
///     |outcome: Result<Accumulator<i32>, &str>| {
///         assert_eq!(outcome.unwrap().get("ready"), Some(1));
///     },
/// );
///
/// on_done.resume(Ok(()));
/// ```
pub fn passthrough<V, C>(accumulator: Accumulator<V>, downstream: C) -> Passthrough<V, C> {
    passthrough_with(accumulator, downstream, DefaultSink)
}

/// [`passthrough`] with an explicit [`DiagnosticSink`].
pub fn passthrough_with<V, C, S>(
    accumulator: Accumulator<V>,
    downstream: C,
    sink: S,
) -> Passthrough<V, C, S>
where
    S: DiagnosticSink,
{
    Passthrough {
        accumulator,
        downstream,
        sink,
    }
}

/// Callback produced by [`passthrough`].
#[must_use = "callbacks do nothing until resumed"]
pub struct Passthrough<V, C, S = DefaultSink> {
    accumulator: Accumulator<V>,
    downstream: C,
    sink: S,
}

impl<V, C, S> Passthrough<V, C, S> {
    /// The accumulator this callback forwards.
    #[inline]
    pub fn accumulator(&self) -> &Accumulator<V> {
        &self.accumulator
    }

    /// Always [`ErrorPolicy::Swallow`].
    #[inline]
    pub fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy::Swallow
    }
}

impl<V, E, C, S> Continuation<(), E> for Passthrough<V, C, S>
where
    V: Debug,
    E: Debug,
    C: Continuation<Accumulator<V>, E>,
    S: DiagnosticSink,
{
    fn resume(&mut self, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => self.downstream.resume(Ok(self.accumulator.clone())),
            Err(error) => self.sink.error_swallowed(&error, &self.accumulator),
        }
    }
}
