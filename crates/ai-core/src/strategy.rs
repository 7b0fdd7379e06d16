//! Domain capabilities that behavior-tree leaves and steering behaviors drive.
//!
//! Implementations live with the host (see the `ai-steering` crate for reference
//! implementations). Leaves hold them by value; hosts that need to share one
//! strategy between several owners can hand out `Rc<RefCell<S>>`, which
//! implements every trait here by delegation.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Free movement used when nothing more urgent applies.
pub trait Movement {
    fn move_by(&mut self, elapsed: Duration);
}

pub trait EvadeStrategy {
    fn need_to_evade(&self, elapsed: Duration) -> bool;

    fn evade(&mut self, elapsed: Duration);
}

pub trait ChaseStrategy {
    fn target_detected(&self, elapsed: Duration) -> bool;

    fn chase(&mut self, elapsed: Duration);
}

impl<M: Movement + ?Sized> Movement for Box<M> {
    fn move_by(&mut self, elapsed: Duration) {
        (**self).move_by(elapsed)
    }
}

impl<M: Movement + ?Sized> Movement for Rc<RefCell<M>> {
    fn move_by(&mut self, elapsed: Duration) {
        self.borrow_mut().move_by(elapsed)
    }
}

impl<S: EvadeStrategy + ?Sized> EvadeStrategy for Box<S> {
    fn need_to_evade(&self, elapsed: Duration) -> bool {
        (**self).need_to_evade(elapsed)
    }

    fn evade(&mut self, elapsed: Duration) {
        (**self).evade(elapsed)
    }
}

impl<S: EvadeStrategy + ?Sized> EvadeStrategy for Rc<RefCell<S>> {
    fn need_to_evade(&self, elapsed: Duration) -> bool {
        self.borrow().need_to_evade(elapsed)
    }

    fn evade(&mut self, elapsed: Duration) {
        self.borrow_mut().evade(elapsed)
    }
}

impl<S: ChaseStrategy + ?Sized> ChaseStrategy for Box<S> {
    fn target_detected(&self, elapsed: Duration) -> bool {
        (**self).target_detected(elapsed)
    }

    fn chase(&mut self, elapsed: Duration) {
        (**self).chase(elapsed)
    }
}

impl<S: ChaseStrategy + ?Sized> ChaseStrategy for Rc<RefCell<S>> {
    fn target_detected(&self, elapsed: Duration) -> bool {
        self.borrow().target_detected(elapsed)
    }

    fn chase(&mut self, elapsed: Duration) {
        self.borrow_mut().chase(elapsed)
    }
}
