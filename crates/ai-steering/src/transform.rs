use std::cell::RefCell;
use std::rc::Rc;

use ai_core::Vector;

/// Position plus planar rotation (radians). Rotation is unused for 3D agents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform<V> {
    pub position: V,
    pub rotation: f32,
}

impl<V: Vector> Transform<V> {
    pub fn at(position: V) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }
}

/// Single-threaded shared handle to an agent's transform.
///
/// Strategies, sensors and the host all hold clones of the same handle.
#[derive(Debug, Clone)]
pub struct SharedTransform<V>(Rc<RefCell<Transform<V>>>);

impl<V: Vector> SharedTransform<V> {
    pub fn new(transform: Transform<V>) -> Self {
        Self(Rc::new(RefCell::new(transform)))
    }

    pub fn at(position: V) -> Self {
        Self::new(Transform::at(position))
    }

    pub fn get(&self) -> Transform<V> {
        *self.0.borrow()
    }

    pub fn position(&self) -> V {
        self.0.borrow().position
    }

    pub fn set_position(&self, position: V) {
        self.0.borrow_mut().position = position;
    }

    pub fn translate(&self, delta: V) {
        self.0.borrow_mut().position += delta;
    }

    pub fn rotation(&self) -> f32 {
        self.0.borrow().rotation
    }

    pub fn set_rotation(&self, rotation: f32) {
        self.0.borrow_mut().rotation = rotation;
    }

    /// `true` when both handles point at the same transform.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
