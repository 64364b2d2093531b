use std::ops::Mul;

use super::{common::FloatValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transforms/Transforms.html

/// An affine transform stored as a row-major 4x4 matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T>
where
    T: FloatValueType,
{
    m: [[T; 4]; 4],
}

impl<T> Transform<T>
where
    T: FloatValueType,
{
    /// Creates a new `Transform` from raw matrix rows.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        debug_assert!(!m.iter().flatten().any(|v| v.is_nan()));
        Self { m }
    }

    /// Returns the raw matrix rows.
    pub fn m(&self) -> &[[T; 4]; 4] {
        &self.m
    }

    /// Checks if this `Transform` is the identity transform.
    pub fn is_identity(&self) -> bool {
        self.m.iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, &v)| {
                if r == c {
                    v == T::one()
                } else {
                    v == T::zero()
                }
            })
        })
    }
}

impl<T> Default for Transform<T>
where
    T: FloatValueType,
{
    /// Creates a new identity `Transform`.
    fn default() -> Self {
        let o = T::one();
        let z = T::zero();
        Self::new([[o, z, z, z], [z, o, z, z], [z, z, o, z], [z, z, z, o]])
    }
}

impl<'a, T> Mul<Vec3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, other: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        let Vec3 { x, y, z } = other;
        Vec3::new(
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }
}

impl<'a, T> Mul<Point3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn mul(self, other: Point3<T>) -> Point3<T> {
        let m = &self.m;
        let Point3 { x, y, z } = other;
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3];
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3];
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];
        if wp == T::one() {
            Point3::new(xp, yp, zp)
        } else {
            Point3::new(xp, yp, zp) / wp
        }
    }
}
