/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Represents a 2D point or vector
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    /// The point at (0, 0)
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    /// Unit vector along the x axis
    #[inline]
    pub fn unit_x() -> Coord2 {
        Coord2(1.0, 0.0)
    }

    /// Unit vector along the y axis
    #[inline]
    pub fn unit_y() -> Coord2 {
        Coord2(0.0, 1.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Computes the dot product of this vector and another
    ///
    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    ///
    /// Computes the z component of the cross product of this vector and another (positive when `target` is
    /// anticlockwise from this vector)
    ///
    #[inline]
    pub fn cross(&self, target: &Coord2) -> f64 {
        self.0 * target.1 - self.1 * target.0
    }

    /// The squared length of this vector
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// The length of this vector
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        (*self - *target).magnitude()
    }

    ///
    /// Returns a vector pointing in the same direction with a length of 1
    ///
    /// The zero vector stays as the zero vector rather than becoming NaN.
    ///
    #[inline]
    pub fn to_unit_vector(&self) -> Coord2 {
        *self / (self.magnitude() + f64::MIN_POSITIVE)
    }

    /// The unit vector pointing from this point towards the target
    #[inline]
    pub fn direction_to(&self, target: &Coord2) -> Coord2 {
        (*target - *self).to_unit_vector()
    }

    /// Rotates this vector anticlockwise by 90 degrees
    #[inline]
    pub fn rotate_90(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }

    ///
    /// Rotates this vector anticlockwise by the specified angle in radians
    ///
    pub fn rotate(&self, radians: f64) -> Coord2 {
        let (sin, cos) = radians.sin_cos();

        Coord2(self.0 * cos - self.1 * sin, self.0 * sin + self.1 * cos)
    }

    ///
    /// The signed angle in radians needed to rotate this unit vector onto another unit vector
    ///
    pub fn angle_to(&self, target: &Coord2) -> f64 {
        test_assert!((self.magnitude_squared() - 1.0).abs() <= 1e-4);
        test_assert!((target.magnitude_squared() - 1.0).abs() <= 1e-4);

        f64::atan2(self.cross(target), self.dot(target))
    }

    ///
    /// Linearly interpolates between two points (`t = 0` is `from`, `t = 1` is `to`)
    ///
    #[inline]
    pub fn lerp(from: Coord2, to: Coord2, t: f64) -> Coord2 {
        from * (1.0 - t) + to * t
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul<Coord2> for f64 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: Coord2) -> Coord2 {
        rhs * self
    }
}

impl Div<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn div(self, rhs: f64) -> Coord2 {
        self * (1.0 / rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl AddAssign<Coord2> for Coord2 {
    #[inline]
    fn add_assign(&mut self, rhs: Coord2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl SubAssign<Coord2> for Coord2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}
