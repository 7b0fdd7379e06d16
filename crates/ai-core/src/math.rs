use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NORMALIZE_EPSILON: f32 = 1e-6;

/// Operations shared by [`Vec2`] and [`Vec3`] so steering code can be written once.
pub trait Vector:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + 'static
{
    const ZERO: Self;

    fn dot(self, other: Self) -> f32;

    /// Apply `f` to every component, in axis order.
    fn map(self, f: impl FnMut(f32) -> f32) -> Self;

    /// `true` when every component of `self` lies within `[min, max]`.
    fn within(self, min: Self, max: Self) -> bool;

    /// Planar heading in radians, for vectors that have one.
    fn heading(self) -> Option<f32> {
        None
    }

    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Unit-length copy of `self`; near-zero vectors are returned unchanged.
    fn normalized(self) -> Self {
        let len = self.length();
        if len <= NORMALIZE_EPSILON {
            self
        } else {
            self * (1.0 / len)
        }
    }

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vector for Vec2 {
    const ZERO: Self = Self::new(0.0, 0.0);

    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        let x = f(self.x);
        let y = f(self.y);
        Self { x, y }
    }

    fn within(self, min: Self, max: Self) -> bool {
        self.x >= min.x && self.x <= max.x && self.y >= min.y && self.y <= max.y
    }

    fn heading(self) -> Option<f32> {
        Some(self.y.atan2(self.x))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vector for Vec3 {
    const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        let x = f(self.x);
        let y = f(self.y);
        let z = f(self.z);
        Self { x, y, z }
    }

    fn within(self, min: Self, max: Self) -> bool {
        self.x >= min.x
            && self.x <= max.x
            && self.y >= min.y
            && self.y <= max.y
            && self.z >= min.z
            && self.z <= max.z
    }
}

macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }
    };
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Wrap an angle (radians) into `[-PI, PI]` with a single turn of correction.
pub fn wrap_angle(angle: f32) -> f32 {
    use core::f32::consts::{PI, TAU};

    if angle < -PI {
        angle + TAU
    } else if angle > PI {
        angle - TAU
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_folds_one_turn() {
        use core::f32::consts::PI;

        assert!((wrap_angle(PI + 0.5) - (-PI + 0.5)).abs() < 1e-5);
        assert!((wrap_angle(-PI - 0.5) - (PI - 0.5)).abs() < 1e-5);
        assert_eq!(wrap_angle(1.0), 1.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(-1.0, 1.0, 0.0), -1.0);
        assert_eq!(lerp(-1.0, 1.0, 1.0), 1.0);
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
    }
}
