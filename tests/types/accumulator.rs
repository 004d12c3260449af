use callback_rail::types::Accumulator;

#[test]
fn test_new_is_empty() {
    let acc: Accumulator<i32> = Accumulator::new();
    assert!(acc.is_empty());
    assert_eq!(acc.len(), 0);
    assert_eq!(acc.get("anything"), None);
}

#[test]
fn test_set_and_get() {
    let acc = Accumulator::new();
    acc.set("make", "volvo");
    acc.set("colour", "blue");

    assert_eq!(acc.len(), 2);
    assert_eq!(acc.get("make"), Some("volvo"));
    assert_eq!(acc.get("colour"), Some("blue"));
    assert_eq!(acc.get("year"), None);
}

#[test]
fn test_replace_keeps_position() {
    let acc = Accumulator::new();
    acc.set("a", 1);
    acc.set("b", 2);
    acc.set("a", 3);

    assert_eq!(acc.len(), 2);
    assert_eq!(acc.get("a"), Some(3));
    assert_eq!(acc.keys(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_keys_in_insertion_order() {
    let acc = Accumulator::new();
    acc.set("third", 3);
    acc.set("first", 1);
    acc.set("second", 2);

    assert_eq!(
        acc.keys(),
        vec!["third".to_string(), "first".to_string(), "second".to_string()]
    );
}

#[test]
fn test_unset_returns_value() {
    let acc = Accumulator::new();
    acc.set("a", 1);
    acc.set("b", 2);

    assert_eq!(acc.unset("a"), Some(1));
    assert_eq!(acc.unset("a"), None);
    assert_eq!(acc.len(), 1);
    assert!(!acc.contains("a"));
    assert!(acc.contains("b"));
}

#[test]
fn test_unset_missing_key() {
    let acc: Accumulator<i32> = Accumulator::new();
    assert_eq!(acc.unset("ghost"), None);
}

#[test]
fn test_snapshot_copies_fields() {
    let acc = Accumulator::new();
    acc.set("a", 1);
    acc.set("b", 2);

    let snapshot = acc.snapshot();
    acc.set("a", 99);

    assert_eq!(snapshot, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
}

#[test]
fn test_clone_shares_the_underlying_map() {
    let acc = Accumulator::new();
    let view = acc.clone();

    view.set("written_through_view", 1);

    assert!(acc.ptr_eq(&view));
    assert_eq!(acc.get("written_through_view"), Some(1));
}

#[test]
fn test_ptr_eq_distinguishes_independent_accumulators() {
    let left: Accumulator<i32> = [("a", 1)].into_iter().collect();
    let right: Accumulator<i32> = [("a", 1)].into_iter().collect();

    assert!(!left.ptr_eq(&right));
    // Equal contents, different objects.
    assert_eq!(left, right);
}

#[test]
fn test_content_inequality() {
    let left: Accumulator<i32> = [("a", 1)].into_iter().collect();
    let right: Accumulator<i32> = [("a", 2)].into_iter().collect();

    assert_ne!(left, right);
}

#[test]
fn test_from_iterator_later_entries_win() {
    let acc: Accumulator<i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

    assert_eq!(acc.len(), 2);
    assert_eq!(acc.get("a"), Some(3));
    assert_eq!(acc.keys(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_debug_renders_fields() {
    let acc = Accumulator::new();
    acc.set("make", "volvo");

    let rendered = format!("{acc:?}");
    assert!(rendered.contains("make"));
    assert!(rendered.contains("volvo"));
}

#[test]
fn test_default_is_empty() {
    let acc: Accumulator<String> = Accumulator::default();
    assert!(acc.is_empty());
}

#[test]
fn test_grows_past_inline_storage() {
    let acc = Accumulator::new();
    for i in 0..32 {
        acc.set(format!("field_{i}"), i);
    }

    assert_eq!(acc.len(), 32);
    assert_eq!(acc.get("field_31"), Some(31));
}
