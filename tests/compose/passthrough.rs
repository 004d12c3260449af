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
fn test_success_forwards_same_untouched_accumulator() {
    let acc: Accumulator<i32> = Accumulator::new();
    acc.set("ready", 1);
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = passthrough(acc.clone(), downstream);
    callback.resume(Ok(()));

    assert_eq!(acc.snapshot(), vec![("ready".to_string(), 1)]);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].as_ref().unwrap().ptr_eq(&acc));
}

#[test]
fn test_error_is_swallowed_downstream_never_runs() {
    let acc: Accumulator<i32> = Accumulator::new();
    acc.set("partial", 9);
    let sink = RecordingSink::new();
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = passthrough_with(acc.clone(), downstream, sink.clone());
    callback.resume(Err("connection reset"));

    // The error stops here: zero downstream invocations, one report.
    assert!(seen.borrow().is_empty());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    match &records[0] {
        DiagnosticRecord::ErrorSwallowed { error, state } => {
            assert!(error.contains("connection reset"));
            assert!(state.contains("partial"));
        }
        other => panic!("unexpected record: {other:?}"),
    }
}

#[test]
fn test_success_does_not_report() {
    let acc: Accumulator<i32> = Accumulator::new();
    let sink = RecordingSink::new();
    let (_seen, downstream) = collect::<_, &str>();

    let mut callback = passthrough_with(acc, downstream, sink.clone());
    callback.resume(Ok(()));

    assert!(sink.is_empty());
}

#[test]
fn test_double_success_forwards_twice() {
    let acc: Accumulator<i32> = Accumulator::new();
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = passthrough(acc, downstream);
    callback.resume(Ok(()));
    callback.resume(Ok(()));

    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_error_after_success_still_swallowed() {
    let acc: Accumulator<i32> = Accumulator::new();
    let sink = RecordingSink::new();
    let (seen, downstream) = collect::<_, &str>();

    let mut callback = passthrough_with(acc, downstream, sink.clone());
    callback.resume(Ok(()));
    callback.resume(Err("late failure"));

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_error_policy_is_swallow() {
    let acc: Accumulator<i32> = Accumulator::new();
    let callback = passthrough(acc, |_: Result<Accumulator<i32>, &str>| {});

    assert_eq!(callback.error_policy(), ErrorPolicy::Swallow);
}
