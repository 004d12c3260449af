//! Ergonomic macro for building field-mapping lists.

/// Builds a [`MappingVec`](crate::types::MappingVec) from `index => key`
/// pairs.
///
/// Pairs are kept in the order written, which is also the order a bulk
/// augmentation applies them in.
///
/// # Examples
///
/// ```
/// use callback_rail::mappings;
///
/// let list = mappings![0 => "make", 1 => "colour", 2 => "year"];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1].index, 1);
/// assert_eq!(list[1].key, "colour");
///
/// let empty = mappings![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! mappings {
    () => {
        $crate::types::MappingVec::new()
    };
    ($($index:expr => $key:expr),+ $(,)?) => {{
        let mut list = $crate::types::MappingVec::new();
        $(
            list.push($crate::types::FieldMapping::new($index, $key));
        )+
        list
    }};
}
