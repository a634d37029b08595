//! Uniform access over associative containers: returned by value, written
//! through an out-parameter, and the bare `BTreeMap` special case.
//!
//! Keys are unique, so `get` can miss but never be ambiguous, and snapshots
//! must flatten values in ascending key order.

use std::cell::RefCell;
use std::collections::BTreeMap;

use uniview::{
    AccessError, Accessor, ExposesMapByOutParam, ExposesMapByValue, MapByOutParam, MapByValue,
    Shaped,
};

// =============================================================================
// Fixtures
// =============================================================================

/// Container exposing `fn all(&self) -> &BTreeMap<String, i32>`.
struct Registry {
    entries: BTreeMap<String, i32>,
}

impl ExposesMapByValue<String, i32> for Registry {
    fn all(&self) -> &BTreeMap<String, i32> {
        &self.entries
    }
}

impl Shaped<i32, String> for Registry {
    type Shape = MapByValue;
}

/// Container exposing `fn all_into(&self, &mut BTreeMap<String, i32>)`.
struct PolledRegistry {
    entries: RefCell<BTreeMap<String, i32>>,
}

impl PolledRegistry {
    fn insert(&self, key: &str, value: i32) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }
}

impl ExposesMapByOutParam<String, i32> for PolledRegistry {
    fn all_into(&self, out: &mut BTreeMap<String, i32>) {
        out.clone_from(&self.entries.borrow());
    }
}

impl Shaped<i32, String> for PolledRegistry {
    type Shape = MapByOutParam;
}

// =============================================================================
// Returned by value
// =============================================================================

#[test]
fn by_value_keyed_lookup() {
    let registry = Registry {
        entries: BTreeMap::from([("0".to_string(), 111)]),
    };
    let view = Accessor::<i32, Registry>::new(&registry);

    assert_eq!(view.count(), 1);
    assert_eq!(view.get(&"0".to_string()), Ok(111));
    assert_eq!(
        view.get(&"missing".to_string()),
        Err(AccessError::ObjectNotFound("missing".to_string()))
    );
}

#[test]
fn by_value_snapshot_follows_key_order() {
    let registry = Registry {
        entries: BTreeMap::from([
            ("b".to_string(), 2),
            ("a".to_string(), 1),
            ("c".to_string(), 3),
        ]),
    };
    let view = Accessor::<i32, Registry>::new(&registry);

    assert_eq!(view.all(), vec![1, 2, 3]);
    assert_eq!(view.count(), view.all().len());
}

// =============================================================================
// Written through an out-parameter
// =============================================================================

#[test]
fn out_param_tracks_the_live_container() {
    let registry = PolledRegistry {
        entries: RefCell::new(BTreeMap::new()),
    };
    let view = Accessor::<i32, PolledRegistry>::new(&registry);

    assert_eq!(view.count(), 0);

    registry.insert("0", 222);
    assert_eq!(view.count(), 1);
    assert_eq!(view.get(&"0".to_string()), Ok(222));
}

#[test]
fn out_param_snapshot_overwrites_and_orders() {
    let registry = PolledRegistry {
        entries: RefCell::new(BTreeMap::from([
            ("y".to_string(), 20),
            ("x".to_string(), 10),
        ])),
    };
    let view = Accessor::<i32, PolledRegistry>::new(&registry);

    let mut out = vec![0; 5];
    view.all_into(&mut out);
    assert_eq!(out, vec![10, 20]);
}

// =============================================================================
// The container is the mapping
// =============================================================================

#[test]
fn raw_map_is_read_directly() {
    let entries = BTreeMap::from([("0".to_string(), 333)]);
    let view = Accessor::<i32, BTreeMap<String, i32>>::new(&entries);

    assert_eq!(view.count(), 1);
    assert_eq!(view.all(), vec![333]);
    assert_eq!(view.get(&"0".to_string()), Ok(333));
    assert_eq!(
        view.get(&"1".to_string()),
        Err(AccessError::ObjectNotFound("1".to_string()))
    );
}

#[test]
fn one_value_per_key() {
    let entries = BTreeMap::from([
        ("a".to_string(), 1),
        ("b".to_string(), 1), // same value, distinct key
    ]);
    let view = Accessor::<i32, BTreeMap<String, i32>>::new(&entries);

    assert_eq!(view.count(), 2);
    assert_eq!(view.all(), vec![1, 1]);
    // Keyed lookup stays unambiguous even with equal values.
    assert_eq!(view.get(&"a".to_string()), Ok(1));
}
