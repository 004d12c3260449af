use crate::types::alloc_type::String;
use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One (source index, destination key) pair of a bulk projection.
///
/// The index selects a slot of a sequence-shaped upstream result; the key
/// names the accumulator field that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldMapping {
    pub index: usize,
    pub key: String,
}

impl FieldMapping {
    #[inline]
    pub fn new<K: Into<String>>(index: usize, key: K) -> Self {
        Self {
            index,
            key: key.into(),
        }
    }
}

impl<K: Into<String>> From<(usize, K)> for FieldMapping {
    #[inline]
    fn from((index, key): (usize, K)) -> Self {
        Self::new(index, key)
    }
}

impl Display for FieldMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} -> {}", self.index, self.key)
    }
}
