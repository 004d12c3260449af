//! Future adapters expressing the callback policies over `Result` futures.
//!
//! These adapters apply the same merge-and-forward semantics as the
//! callback factories, but at `.await` boundaries instead of callback
//! boundaries. The error policies carry over unchanged: augmentation
//! adapters forward the error to the caller, the passthrough adapter
//! swallows it after reporting and resolves to `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! use callback_rail::async_ext::FutureCallbackExt;
//! use callback_rail::types::Accumulator;
//!
//! async fn load_profile() -> Option<Accumulator<String>> {
//!     let profile: Accumulator<String> = Accumulator::new();
//!
//!     fetch_display_name()
//!         .augment_into(profile.clone(), "display_name")
//!         .await
//!         .ok()
//! }
//! ```

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::diagnostics::{DefaultSink, DiagnosticSink};
use crate::types::alloc_type::{String, Vec};
use crate::types::{Accumulator, FieldMapping, MappingVec};

/// Extension trait adding accumulator composition to `Result` futures.
pub trait FutureCallbackExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Stores the future's success value on `accumulator` under `field`.
    ///
    /// Resolves to `Ok` of the same accumulator handle after the mutation,
    /// or reports and forwards the error.
    fn augment_into<K>(
        self,
        accumulator: Accumulator<T>,
        field: K,
    ) -> AugmentFuture<Self, T, DefaultSink>
    where
        K: Into<String>,
    {
        self.augment_into_with(accumulator, field, DefaultSink)
    }

    /// [`augment_into`](FutureCallbackExt::augment_into) with an explicit
    /// [`DiagnosticSink`].
    fn augment_into_with<K, S>(
        self,
        accumulator: Accumulator<T>,
        field: K,
        sink: S,
    ) -> AugmentFuture<Self, T, S>
    where
        K: Into<String>,
        S: DiagnosticSink,
    {
        AugmentFuture {
            inner: self,
            accumulator,
            field: field.into(),
            sink,
        }
    }

    /// Projects slots of the future's sequence-shaped success value onto
    /// named accumulator fields, in mapping order.
    fn augment_bulk_into<V, M>(
        self,
        accumulator: Accumulator<V>,
        mappings: M,
    ) -> AugmentBulkFuture<Self, V, DefaultSink>
    where
        Self: Future<Output = Result<Vec<V>, E>>,
        M: IntoIterator,
        M::Item: Into<FieldMapping>,
    {
        self.augment_bulk_into_with(accumulator, mappings, DefaultSink)
    }

    /// [`augment_bulk_into`](FutureCallbackExt::augment_bulk_into) with an
    /// explicit [`DiagnosticSink`].
    fn augment_bulk_into_with<V, M, S>(
        self,
        accumulator: Accumulator<V>,
        mappings: M,
        sink: S,
    ) -> AugmentBulkFuture<Self, V, S>
    where
        Self: Future<Output = Result<Vec<V>, E>>,
        M: IntoIterator,
        M::Item: Into<FieldMapping>,
        S: DiagnosticSink,
    {
        AugmentBulkFuture {
            inner: self,
            accumulator,
            mappings: mappings.into_iter().map(Into::into).collect(),
            sink,
        }
    }

    /// Resolves to the untouched accumulator on success; reports and
    /// swallows the error, resolving to `None`, on failure.
    ///
    /// The future's success value is discarded; only the error channel is
    /// consulted.
    fn passthrough_into<V>(
        self,
        accumulator: Accumulator<V>,
    ) -> PassthroughFuture<Self, V, DefaultSink> {
        self.passthrough_into_with(accumulator, DefaultSink)
    }

    /// [`passthrough_into`](FutureCallbackExt::passthrough_into) with an
    /// explicit [`DiagnosticSink`].
    fn passthrough_into_with<V, S>(
        self,
        accumulator: Accumulator<V>,
        sink: S,
    ) -> PassthroughFuture<Self, V, S>
    where
        S: DiagnosticSink,
    {
        PassthroughFuture {
            inner: self,
            accumulator,
            sink,
        }
    }
}

impl<F, T, E> FutureCallbackExt<T, E> for F where F: Future<Output = Result<T, E>> {}

pin_project! {
    /// Future created by [`FutureCallbackExt::augment_into`].
    #[must_use = "futures do nothing unless polled"]
    pub struct AugmentFuture<F, V, S> {
        #[pin]
        inner: F,
        accumulator: Accumulator<V>,
        field: String,
        sink: S,
    }
}

impl<F, V, E, S> Future for AugmentFuture<F, V, S>
where
    F: Future<Output = Result<V, E>>,
    V: Debug,
    S: DiagnosticSink,
{
    type Output = Result<Accumulator<V>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(value)) => {
                this.accumulator.set(this.field.clone(), value);
                Poll::Ready(Ok(this.accumulator.clone()))
            }
            Poll::Ready(Err(error)) => {
                this.sink.augment_failed(this.field, &*this.accumulator);
                Poll::Ready(Err(error))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

pin_project! {
    /// Future created by [`FutureCallbackExt::augment_bulk_into`].
    #[must_use = "futures do nothing unless polled"]
    pub struct AugmentBulkFuture<F, V, S> {
        #[pin]
        inner: F,
        accumulator: Accumulator<V>,
        mappings: MappingVec,
        sink: S,
    }
}

impl<F, V, E, S> Future for AugmentBulkFuture<F, V, S>
where
    F: Future<Output = Result<Vec<V>, E>>,
    V: Clone + Debug,
    S: DiagnosticSink,
{
    type Output = Result<Accumulator<V>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(values)) => {
                for mapping in this.mappings.iter() {
                    match values.get(mapping.index) {
                        Some(value) => this.accumulator.set(mapping.key.clone(), value.clone()),
                        None => {
                            this.accumulator.unset(&mapping.key);
                        }
                    }
                }
                Poll::Ready(Ok(this.accumulator.clone()))
            }
            Poll::Ready(Err(error)) => {
                this.sink.bulk_failed(this.mappings, &*this.accumulator);
                Poll::Ready(Err(error))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

pin_project! {
    /// Future created by [`FutureCallbackExt::passthrough_into`].
    #[must_use = "futures do nothing unless polled"]
    pub struct PassthroughFuture<F, V, S> {
        #[pin]
        inner: F,
        accumulator: Accumulator<V>,
        sink: S,
    }
}

impl<F, T, E, V, S> Future for PassthroughFuture<F, V, S>
where
    F: Future<Output = Result<T, E>>,
    V: Debug,
    E: Debug,
    S: DiagnosticSink,
{
    type Output = Option<Accumulator<V>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(_)) => Poll::Ready(Some(this.accumulator.clone())),
            Poll::Ready(Err(error)) => {
                this.sink.error_swallowed(&error, &*this.accumulator);
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
