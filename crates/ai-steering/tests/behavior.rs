use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use ai_core::{ChaseStrategy, EvadeStrategy, Movement};
use ai_steering::{ChaseState, ChasingBehavior, EvadeState, EvadingBehavior};

const TICK: Duration = Duration::from_millis(16);

type Log = Rc<RefCell<Vec<&'static str>>>;

struct Scripted {
    active: Rc<Cell<bool>>,
    log: Log,
}

impl EvadeStrategy for Scripted {
    fn need_to_evade(&self, _elapsed: Duration) -> bool {
        self.active.get()
    }

    fn evade(&mut self, _elapsed: Duration) {
        self.log.borrow_mut().push("evade");
    }
}

impl ChaseStrategy for Scripted {
    fn target_detected(&self, _elapsed: Duration) -> bool {
        self.active.get()
    }

    fn chase(&mut self, _elapsed: Duration) {
        self.log.borrow_mut().push("chase");
    }
}

struct Walk {
    log: Log,
}

impl Movement for Walk {
    fn move_by(&mut self, _elapsed: Duration) {
        self.log.borrow_mut().push("move");
    }
}

fn parts() -> (Rc<Cell<bool>>, Log, Scripted, Walk) {
    let active = Rc::new(Cell::new(false));
    let log = Log::default();
    let strategy = Scripted {
        active: Rc::clone(&active),
        log: Rc::clone(&log),
    };
    let walk = Walk {
        log: Rc::clone(&log),
    };
    (active, log, strategy, walk)
}

#[test]
fn evading_behavior_switches_with_the_threat() {
    let (threat, log, strategy, walk) = parts();
    let mut behavior = EvadingBehavior::new(strategy, walk);
    assert_eq!(behavior.state(), EvadeState::Moving);

    assert_eq!(behavior.update(TICK), EvadeState::Moving);
    threat.set(true);
    assert_eq!(behavior.update(TICK), EvadeState::Evading);
    assert_eq!(behavior.update(TICK), EvadeState::Evading);
    threat.set(false);
    assert_eq!(behavior.update(TICK), EvadeState::Moving);

    assert_eq!(*log.borrow(), vec!["move", "evade", "evade", "move"]);
}

#[test]
fn chasing_behavior_switches_with_detection() {
    let (detected, log, strategy, walk) = parts();
    let mut behavior = ChasingBehavior::new(strategy, walk);
    assert_eq!(behavior.state(), ChaseState::Moving);

    detected.set(true);
    assert_eq!(behavior.update(TICK), ChaseState::Chasing);
    detected.set(false);
    assert_eq!(behavior.update(TICK), ChaseState::Moving);

    assert_eq!(*log.borrow(), vec!["chase", "move"]);
}
