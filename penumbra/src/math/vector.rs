use super::{common::FloatValueType, normal::Normal, point::Point3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: FloatValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

impl_container!(Vec3 { x: 0, y: 1, z: 2 });
impl_op!(Add add Vec3 + Vec3 = Vec3 { x, y, z });
impl_op!(Sub sub Vec3 - Vec3 = Vec3 { x, y, z });
impl_assign_op!(AddAssign add_assign Vec3 += Vec3 { x, y, z });
impl_assign_op!(SubAssign sub_assign Vec3 -= Vec3 { x, y, z });
impl_neg!(Vec3 { x, y, z });

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Calculates the dot product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the dot product of this `Vec3` and a [Normal].
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        self.x * n.x + self.y * n.y + self.z * n.z
    }

    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    //
    // Always uses `f64` internally to avoid errors on "catastrophic cancellation".
    // http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        let v1x = self.x.to_f64().unwrap_or(f64::NAN);
        let v1y = self.y.to_f64().unwrap_or(f64::NAN);
        let v1z = self.z.to_f64().unwrap_or(f64::NAN);
        let v2x = other.x.to_f64().unwrap_or(f64::NAN);
        let v2y = other.y.to_f64().unwrap_or(f64::NAN);
        let v2z = other.z.to_f64().unwrap_or(f64::NAN);
        Self {
            x: T::from((v1y * v2z) - (v1z * v2y)).unwrap_or_else(T::nan),
            y: T::from((v1z * v2x) - (v1x * v2z)).unwrap_or_else(T::nan),
            z: T::from((v1x * v2y) - (v1y * v2x)).unwrap_or_else(T::nan),
        }
    }

    /// Returns the squared length of this `Vec3`.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Returns the length of this `Vec3`.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns this `Vec3` scaled to unit length.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.len()
    }

    /// Checks if all components are within `eps` of zero.
    #[inline]
    pub fn near_zero(&self, eps: T) -> bool {
        self.x.abs() < eps && self.y.abs() < eps && self.z.abs() < eps
    }

    /// Returns a unit `Vec3` perpendicular to this one.
    ///
    /// The component with the smallest magnitude is zeroed and the other two are swapped and
    /// negated so the result is stable for any non-zero input.
    pub fn orthogonal(&self) -> Self {
        let (ax, ay, az) = (self.x.abs(), self.y.abs(), self.z.abs());
        // Indices of the two larger components
        let (i, j) = if ax <= ay && ax <= az {
            (1, 2)
        } else if ay <= az {
            (2, 0)
        } else {
            (0, 1)
        };
        let f = T::one() / self[i].hypot(self[j]);
        let mut ret = Self::zeros();
        ret[i] = self[j] * f;
        ret[j] = -self[i] * f;
        ret
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
