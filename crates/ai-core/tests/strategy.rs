use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ai_core::{EvadeStrategy, Movement};

#[derive(Default)]
struct CountingMovement {
    moved: Duration,
}

impl Movement for CountingMovement {
    fn move_by(&mut self, elapsed: Duration) {
        self.moved += elapsed;
    }
}

struct Threshold {
    evade_below: Duration,
    evaded: u32,
}

impl EvadeStrategy for Threshold {
    fn need_to_evade(&self, elapsed: Duration) -> bool {
        elapsed < self.evade_below
    }

    fn evade(&mut self, _elapsed: Duration) {
        self.evaded += 1;
    }
}

#[test]
fn shared_movement_delegates_to_inner() {
    let shared = Rc::new(RefCell::new(CountingMovement::default()));
    let mut handle = Rc::clone(&shared);

    handle.move_by(Duration::from_millis(10));
    handle.move_by(Duration::from_millis(5));

    assert_eq!(shared.borrow().moved, Duration::from_millis(15));
}

#[test]
fn boxed_strategy_delegates_to_inner() {
    let mut boxed: Box<dyn EvadeStrategy> = Box::new(Threshold {
        evade_below: Duration::from_secs(1),
        evaded: 0,
    });

    assert!(boxed.need_to_evade(Duration::from_millis(500)));
    assert!(!boxed.need_to_evade(Duration::from_secs(2)));
    boxed.evade(Duration::ZERO);
}
