//! Accumulator and field-mapping types.
//!
//! # Examples
//!
//! ```
//! use callback_rail::types::{Accumulator, FieldMapping};
//!
//! let acc: Accumulator<&str> = [("make", "volvo")].into_iter().collect();
//! assert_eq!(acc.get("make"), Some("volvo"));
//!
//! let mapping = FieldMapping::new(1, "colour");
//! assert_eq!(mapping.to_string(), "1 -> colour");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod field_mapping;

pub use accumulator::Accumulator;
pub use field_mapping::FieldMapping;

use alloc_type::String;

/// SmallVec-backed field storage for [`Accumulator`].
///
/// Uses inline storage for up to 4 entries; gathering a handful of fields
/// into one object is the common case and stays off the heap.
pub type FieldVec<V> = SmallVec<[(String, V); 4]>;

/// Ordered list of [`FieldMapping`]s applied by a bulk projection.
pub type MappingVec = SmallVec<[FieldMapping; 4]>;
