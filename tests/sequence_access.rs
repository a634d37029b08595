//! Uniform access over sequential containers: returned by value, written
//! through an out-parameter, and the bare `Vec` special case.

use std::cell::RefCell;

use uniview::{
    AccessError, Accessor, ExposesSequenceByOutParam, ExposesSequenceByValue, IdEq, SeqByOutParam,
    SeqByValue, Shaped,
};

/// A reading that answers to the decimal rendering of its value.
#[derive(Debug, Clone, PartialEq)]
struct Signal(i32);

impl IdEq for Signal {
    fn id_eq(&self, id: &String) -> bool {
        self.0.to_string() == *id
    }
}

impl IdEq<u32> for Signal {
    fn id_eq(&self, id: &u32) -> bool {
        self.0 == *id as i32
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Container exposing `fn all(&self) -> &[Signal]`.
struct SignalLog {
    signals: Vec<Signal>,
}

impl ExposesSequenceByValue<Signal> for SignalLog {
    fn all(&self) -> &[Signal] {
        &self.signals
    }
}

impl<Id> Shaped<Signal, Id> for SignalLog {
    type Shape = SeqByValue;
}

/// Container exposing `fn all_into(&self, &mut Vec<Signal>)`, mutable behind
/// `&self` so contents can change while an accessor is alive.
struct PolledFeed {
    readings: RefCell<Vec<Signal>>,
}

impl PolledFeed {
    fn push(&self, signal: Signal) {
        self.readings.borrow_mut().push(signal);
    }
}

impl ExposesSequenceByOutParam<Signal> for PolledFeed {
    fn all_into(&self, out: &mut Vec<Signal>) {
        out.clone_from(&self.readings.borrow());
    }
}

impl<Id> Shaped<Signal, Id> for PolledFeed {
    type Shape = SeqByOutParam;
}

// =============================================================================
// Returned by value
// =============================================================================

#[test]
fn by_value_end_to_end() {
    let log = SignalLog {
        signals: vec![Signal(0), Signal(1)],
    };
    let view = Accessor::<Signal, SignalLog>::new(&log);

    assert_eq!(view.count(), 2);
    assert_eq!(view.all(), vec![Signal(0), Signal(1)]);
    assert_eq!(view.get(&"1".to_string()), Ok(Signal(1)));
}

#[test]
fn by_value_missing_id() {
    let log = SignalLog {
        signals: vec![Signal(0), Signal(1)],
    };
    let view = Accessor::<Signal, SignalLog>::new(&log);

    assert_eq!(
        view.get(&"7".to_string()),
        Err(AccessError::ObjectNotFound("7".to_string()))
    );
}

#[test]
fn by_value_snapshot_is_fresh_after_mutation() {
    let mut log = SignalLog {
        signals: vec![Signal(0)],
    };
    {
        let view = Accessor::<Signal, SignalLog>::new(&log);
        assert_eq!(view.count(), 1);
    }

    log.signals.push(Signal(1));

    let view = Accessor::<Signal, SignalLog>::new(&log);
    assert_eq!(view.all(), vec![Signal(0), Signal(1)]);
}

// =============================================================================
// Written through an out-parameter
// =============================================================================

#[test]
fn out_param_tracks_the_live_container() {
    let feed = PolledFeed {
        readings: RefCell::new(Vec::new()),
    };
    let view = Accessor::<Signal, PolledFeed>::new(&feed);

    assert_eq!(view.count(), 0);

    feed.push(Signal(0));
    feed.push(Signal(1));

    assert_eq!(view.count(), 2);
    assert_eq!(view.all(), vec![Signal(0), Signal(1)]);
    assert_eq!(view.get(&"1".to_string()), Ok(Signal(1)));
}

#[test]
fn out_param_overwrites_the_callers_buffer() {
    let feed = PolledFeed {
        readings: RefCell::new(vec![Signal(5)]),
    };
    let view = Accessor::<Signal, PolledFeed>::new(&feed);

    let mut out = vec![Signal(9), Signal(9), Signal(9)];
    view.all_into(&mut out);
    assert_eq!(out, vec![Signal(5)]);
}

// =============================================================================
// The container is the sequence
// =============================================================================

#[test]
fn raw_vec_is_read_directly() {
    let items = vec![Signal(0), Signal(1)];
    let view = Accessor::<Signal, Vec<Signal>>::new(&items);

    assert_eq!(view.count(), 2);
    assert_eq!(view.all(), items);
    assert_eq!(view.get(&"1".to_string()), Ok(Signal(1)));
    assert_eq!(
        view.get(&"oops".to_string()),
        Err(AccessError::ObjectNotFound("oops".to_string()))
    );
}

#[test]
fn custom_identifier_type() {
    let items = vec![Signal(3), Signal(4)];
    let view = Accessor::<Signal, Vec<Signal>, u32>::new(&items);

    assert_eq!(view.get(&4), Ok(Signal(4)));
    assert_eq!(view.get(&9), Err(AccessError::ObjectNotFound(9)));
}

// =============================================================================
// Ambiguity and idempotence
// =============================================================================

#[test]
fn duplicate_is_detected_even_when_not_adjacent() {
    let items = vec![Signal(1), Signal(2), Signal(3), Signal(1)];
    let view = Accessor::<Signal, Vec<Signal>>::new(&items);

    assert_eq!(
        view.get(&"1".to_string()),
        Err(AccessError::MultipleObjectsFound("1".to_string()))
    );
    // Unambiguous ids keep resolving.
    assert_eq!(view.get(&"2".to_string()), Ok(Signal(2)));
}

#[test]
fn repeated_reads_are_idempotent() {
    let log = SignalLog {
        signals: vec![Signal(0), Signal(1)],
    };
    let view = Accessor::<Signal, SignalLog>::new(&log);

    assert_eq!(view.count(), view.count());
    assert_eq!(view.all(), view.all());
}
