use std::sync::Arc;
use std::thread;

use ketama::{Continuum, Ketama, Point};

use crate::common::{ring_of, rnd_keys};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn ring_is_send_sync() {
    assert_send_sync::<Ketama>();
    assert_send_sync::<Continuum>();
    assert_send_sync::<Point>();
}

#[test]
fn concurrent_lookups_agree() {
    let ring = Arc::new(ring_of(&[
        ("10.0.0.1", 11211, 1),
        ("10.0.0.2", 11211, 2),
        ("10.0.0.3", 11211, 3),
    ]));
    let keys = Arc::new(rnd_keys(5000, 23));
    let baseline: Arc<Vec<String>> = Arc::new(
        keys.iter()
            .map(|k| ring.lookup(k).unwrap().to_string())
            .collect(),
    );

    let mut handles = Vec::new();
    for _ in 0..4 {
        let ring = ring.clone();
        let keys = keys.clone();
        let baseline = baseline.clone();
        handles.push(thread::spawn(move || {
            for (key, expect) in keys.iter().zip(baseline.iter()) {
                assert_eq!(ring.lookup(key).unwrap(), expect);
            }
        }));
    }
    for h in handles {
        h.join().expect("lookup thread");
    }
}
