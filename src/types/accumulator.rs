use crate::types::alloc_type::{Rc, String, Vec};
use crate::types::FieldVec;
use core::cell::RefCell;
use core::fmt;

/// A shared handle to an insertion-ordered, string-keyed field map.
///
/// An `Accumulator` is the object progressively enriched with new fields
/// across a chain of asynchronous results. Cloning the handle is cheap and
/// yields a view onto the *same* underlying map, which is what lets several
/// produced callbacks close over one accumulator and fill in disjoint
/// fields as their upstream results arrive.
///
/// The handle is single-threaded (`Rc`-backed): callbacks are expected to
/// fire on whatever cooperative context delivers the upstream result, never
/// in parallel.
///
/// # Examples
///
/// ```
/// use callback_rail::types::Accumulator;
///
/// let acc: Accumulator<i32> = Accumulator::new();
/// acc.set("answer", 42);
///
/// let view = acc.clone();
/// assert!(view.ptr_eq(&acc));
/// assert_eq!(view.get("answer"), Some(42));
/// ```
pub struct Accumulator<V> {
    fields: Rc<RefCell<FieldVec<V>>>,
}

impl<V> Accumulator<V> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: Rc::new(RefCell::new(FieldVec::new())),
        }
    }

    /// Sets `name` to `value`, overwriting any existing value.
    ///
    /// A replaced field keeps its original position; a new field is
    /// appended, so iteration order is first-insertion order.
    pub fn set<K: Into<String>>(&self, name: K, value: V) {
        let name = name.into();
        let mut fields = self.fields.borrow_mut();
        if let Some(entry) = fields.iter_mut().find(|entry| entry.0 == name) {
            entry.1 = value;
        } else {
            fields.push((name, value));
        }
    }

    /// Removes `name` and returns its value, if present.
    pub fn unset(&self, name: &str) -> Option<V> {
        let mut fields = self.fields.borrow_mut();
        let position = fields.iter().position(|entry| entry.0 == name)?;
        Some(fields.remove(position).1)
    }

    /// Returns a clone of the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<V>
    where
        V: Clone,
    {
        self.fields
            .borrow()
            .iter()
            .find(|entry| entry.0 == name)
            .map(|entry| entry.1.clone())
    }

    /// Returns true if a field named `name` is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.borrow().iter().any(|entry| entry.0 == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.borrow().len()
    }

    /// Returns true if no fields are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.borrow().is_empty()
    }

    /// Returns the field names in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.fields
            .borrow()
            .iter()
            .map(|entry| entry.0.clone())
            .collect()
    }

    /// Returns a copy of all fields in insertion order.
    pub fn snapshot(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.fields.borrow().iter().cloned().collect()
    }

    /// Returns true if both handles refer to the same underlying map.
    ///
    /// This is handle identity, not content equality: two accumulators
    /// built independently from the same entries compare equal with `==`
    /// but are not `ptr_eq`.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fields, &other.fields)
    }
}

impl<V> Clone for Accumulator<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            fields: Rc::clone(&self.fields),
        }
    }
}

impl<V> Default for Accumulator<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Accumulator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.borrow();
        let mut map = f.debug_map();
        for (name, value) in fields.iter() {
            map.entry(name, value);
        }
        map.finish()
    }
}

impl<V: PartialEq> PartialEq for Accumulator<V> {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.fields, &other.fields) {
            return true;
        }
        *self.fields.borrow() == *other.fields.borrow()
    }
}

impl<V: Eq> Eq for Accumulator<V> {}

impl<K: Into<String>, V> FromIterator<(K, V)> for Accumulator<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let acc = Self::new();
        for (name, value) in iter {
            acc.set(name, value);
        }
        acc
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Accumulator;
    use crate::types::alloc_type::String;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<V: Serialize> Serialize for Accumulator<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let fields = self.fields.borrow();
            let mut map = serializer.serialize_map(Some(fields.len()))?;
            for (name, value) in fields.iter() {
                map.serialize_entry(name, value)?;
            }
            map.end()
        }
    }

    impl<'de, V: Deserialize<'de>> Deserialize<'de> for Accumulator<V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct FieldsVisitor<V>(PhantomData<V>);

            impl<'de, V: Deserialize<'de>> Visitor<'de> for FieldsVisitor<V> {
                type Value = Accumulator<V>;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map of field names to values")
                }

                fn visit_map<A: MapAccess<'de>>(
                    self,
                    mut access: A,
                ) -> Result<Self::Value, A::Error> {
                    let acc = Accumulator::new();
                    while let Some((name, value)) = access.next_entry::<String, V>()? {
                        acc.set(name, value);
                    }
                    Ok(acc)
                }
            }

            deserializer.deserialize_map(FieldsVisitor(PhantomData))
        }
    }
}
