use callback_rail::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type Seen<V, E> = Rc<RefCell<Vec<Result<Accumulator<V>, E>>>>;

fn collect<V, E>() -> (Seen<V, E>, impl FnMut(Result<Accumulator<V>, E>)) {
    let seen: Seen<V, E> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |outcome| sink.borrow_mut().push(outcome))
}

#[test]
fn test_projects_slots_onto_fields_in_order() {
    let car: Accumulator<&str> = Accumulator::new();
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = augment_bulk(
        car.clone(),
        mappings![0 => "make", 1 => "colour", 2 => "year"],
        downstream,
    );
    callback.resume(Ok(vec!["volvo", "blue", "2014"]));

    assert_eq!(car.get("make"), Some("volvo"));
    assert_eq!(car.get("colour"), Some("blue"));
    assert_eq!(car.get("year"), Some("2014"));
    assert_eq!(
        car.keys(),
        vec!["make".to_string(), "colour".to_string(), "year".to_string()]
    );

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].as_ref().unwrap().ptr_eq(&car));
}

#[test]
fn test_colliding_keys_last_mapping_wins() {
    let acc: Accumulator<&str> = Accumulator::new();
    let (_seen, downstream) = collect::<&str, &str>();

    let mut callback = augment_bulk(acc.clone(), mappings![0 => "a", 1 => "a"], downstream);
    callback.resume(Ok(vec!["X", "Y"]));

    assert_eq!(acc.get("a"), Some("Y"));
    assert_eq!(acc.len(), 1);
}

#[test]
fn test_one_slot_may_feed_several_fields() {
    let acc: Accumulator<&str> = Accumulator::new();
    let (_seen, downstream) = collect::<&str, &str>();

    let mut callback = augment_bulk(acc.clone(), mappings![0 => "a", 0 => "b"], downstream);
    callback.resume(Ok(vec!["X"]));

    assert_eq!(acc.get("a"), Some("X"));
    assert_eq!(acc.get("b"), Some("X"));
}

#[test]
fn test_out_of_range_index_clears_destination() {
    let acc: Accumulator<&str> = Accumulator::new();
    acc.set("b", "stale");
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = augment_bulk(acc.clone(), mappings![0 => "a", 5 => "b"], downstream);
    callback.resume(Ok(vec!["X"]));

    assert_eq!(acc.get("a"), Some("X"));
    assert_eq!(acc.get("b"), None);
    assert!(!acc.contains("b"));

    // Still a success: nothing guards the bad index.
    assert!(seen.borrow()[0].is_ok());
}

#[test]
fn test_out_of_range_index_on_absent_key_is_harmless() {
    let acc: Accumulator<&str> = Accumulator::new();
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = augment_bulk(acc.clone(), mappings![3 => "a"], downstream);
    callback.resume(Ok(Vec::new()));

    assert!(acc.is_empty());
    assert!(seen.borrow()[0].is_ok());
}

#[test]
fn test_empty_mapping_list_forwards_untouched() {
    let acc: Accumulator<i32> = Accumulator::new();
    acc.set("kept", 1);
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = augment_bulk(acc.clone(), mappings![], downstream);
    callback.resume(Ok(vec![9, 9, 9]));

    assert_eq!(acc.snapshot(), vec![("kept".to_string(), 1)]);
    assert!(seen.borrow()[0].as_ref().unwrap().ptr_eq(&acc));
}

#[test]
fn test_tuple_mappings_are_accepted() {
    let acc: Accumulator<&str> = Accumulator::new();
    let (_seen, downstream) = collect::<&str, &str>();

    let mut callback = augment_bulk(acc.clone(), [(0usize, "make"), (1, "colour")], downstream);
    callback.resume(Ok(vec!["volvo", "blue"]));

    assert_eq!(acc.get("make"), Some("volvo"));
    assert_eq!(acc.get("colour"), Some("blue"));
}

#[test]
fn test_error_reports_mapping_list_and_state_then_forwards() {
    let acc: Accumulator<&str> = Accumulator::new();
    acc.set("existing", "kept");
    let sink = RecordingSink::new();
    let (seen, downstream) = collect::<&str, &str>();

    let mut callback = augment_bulk_with(
        acc.clone(),
        mappings![0 => "make", 1 => "colour"],
        downstream,
        sink.clone(),
    );
    callback.resume(Err("db down"));

    assert_eq!(acc.snapshot(), vec![("existing".to_string(), "kept")]);

    let seen = seen.borrow();
    assert!(matches!(seen[0], Err("db down")));

    let records = sink.records();
    assert_eq!(records.len(), 1);
    match &records[0] {
        DiagnosticRecord::BulkFailed { mappings, state } => {
            assert_eq!(mappings.len(), 2);
            assert_eq!(mappings[0], FieldMapping::new(0, "make"));
            assert_eq!(mappings[1], FieldMapping::new(1, "colour"));
            assert!(state.contains("existing"));
        }
        other => panic!("unexpected record: {other:?}"),
    }
}

#[test]
fn test_double_resume_is_double_effect() {
    let acc: Accumulator<&str> = Accumulator::new();
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = augment_bulk(acc.clone(), mappings![0 => "a"], downstream);
    callback.resume(Ok(vec!["first"]));
    callback.resume(Ok(vec!["second"]));

    assert_eq!(acc.get("a"), Some("second"));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_error_policy_is_forward() {
    let acc: Accumulator<i32> = Accumulator::new();
    let callback = augment_bulk(
        acc,
        mappings![0 => "a"],
        |_: Result<Accumulator<i32>, &str>| {},
    );

    assert_eq!(callback.error_policy(), ErrorPolicy::Forward);
    assert_eq!(callback.mappings().len(), 1);
}
