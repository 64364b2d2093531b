use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: FloatValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl_container!(Point3 { x: 0, y: 1, z: 2 });
impl_op!(Add add Point3 + Vec3 = Point3 { x, y, z });
impl_op!(Sub sub Point3 - Vec3 = Point3 { x, y, z });
impl_op!(Sub sub Point3 - Point3 = Vec3 { x, y, z });
impl_assign_op!(AddAssign add_assign Point3 += Vec3 { x, y, z });
impl_assign_op!(SubAssign sub_assign Point3 -= Vec3 { x, y, z });

impl<T> Point3<T>
where
    T: FloatValueType,
{
    /// Calculates the distance between this `Point3` and another `Point3`.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }

    /// Calculates the squared distance between this `Point3` and another `Point3`.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }

    /// Linearly interpolates between this `Point3` and `other` per component.
    #[inline]
    pub fn lerp(&self, other: Self, t: Vec3<T>) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t.x,
            y: self.y + (other.y - self.y) * t.y,
            z: self.z + (other.z - self.z) * t.z,
        }
    }
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
