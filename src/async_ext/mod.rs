//! Async extensions for callback composition (requires the `async` feature).

pub mod future_ext;

pub use future_ext::{AugmentBulkFuture, AugmentFuture, FutureCallbackExt, PassthroughFuture};
