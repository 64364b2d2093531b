use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A surface normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: FloatValueType,
{
    /// The x component of the normal.
    pub x: T,
    /// The y component of the normal.
    pub y: T,
    /// The z component of the normal.
    pub z: T,
}

impl_container!(Normal { x: 0, y: 1, z: 2 });
impl_neg!(Normal { x, y, z });

impl<T> Normal<T>
where
    T: FloatValueType,
{
    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Returns this `Normal` scaled to unit length.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from(Vec3::from(*self).normalized())
    }

    /// Checks if all components are within `eps` of zero.
    #[inline]
    pub fn near_zero(&self, eps: T) -> bool {
        Vec3::from(*self).near_zero(eps)
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
