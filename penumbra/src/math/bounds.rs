use super::{common::FloatValueType, point::Point3, ray::Ray, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: FloatValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds3<T>
where
    T: FloatValueType,
{
    /// Creates a new `Bounds3` spanning the two corners in any order.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns the vector from `p_min` to `p_max`.
    #[inline]
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Returns the center point of this `Bounds3`.
    #[inline]
    pub fn center(&self) -> Point3<T> {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        self.p_min + self.diagonal() * half
    }

    /// Checks if both corners are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        (0..3).all(|i| self.p_min[i].is_finite() && self.p_max[i].is_finite())
    }

    /// Checks if `p` is inside this `Bounds3`, borders included.
    #[inline]
    pub fn inside(&self, p: Point3<T>) -> bool {
        (0..3).all(|i| p[i] >= self.p_min[i] && p[i] <= self.p_max[i])
    }

    /// Returns the smallest `Bounds3` containing both this and `other`.
    #[inline]
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Finds the parametric entry and exit distances of `ray` through this `Bounds3`.
    ///
    /// The entry distance is negative when the ray starts inside. Returns `None` on a miss or
    /// when the overlap is entirely behind the ray origin or beyond `ray.t_max`.
    pub fn intersections(&self, ray: Ray<T>) -> Option<(T, T)> {
        let mut t0 = T::neg_infinity();
        let mut t1 = ray.t_max;
        for i in 0..3 {
            if ray.d[i] == T::zero() {
                // Parallel to the slab, only a hit if already between the planes
                if ray.o[i] < self.p_min[i] || ray.o[i] > self.p_max[i] {
                    return None;
                }
                continue;
            }
            let inv_d = T::one() / ray.d[i];
            let mut t_near = (self.p_min[i] - ray.o[i]) * inv_d;
            let mut t_far = (self.p_max[i] - ray.o[i]) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t0 = t0.max(t_near);
            t1 = t1.min(t_far);
            if t0 > t1 {
                return None;
            }
        }
        if t1 <= T::zero() {
            return None;
        }
        Some((t0, t1))
    }
}

#[cfg(test)]
mod tests {
    use super::Bounds3;
    use crate::math::{Point3, Ray, Vec3};

    #[test]
    fn new_sorts_corners() {
        let bb = Bounds3::new(Point3::new(1.0f32, 1.0, 1.0), Point3::new(0.0, 2.0, -1.0));
        assert_eq!(bb.p_min, Point3::new(0.0, 1.0, -1.0));
        assert_eq!(bb.p_max, Point3::new(1.0, 2.0, 1.0));
        assert_eq!(bb.center(), Point3::new(0.5, 1.5, 0.0));
    }

    #[test]
    fn intersections() {
        let bb = Bounds3::new(Point3::new(-1.0f32, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), f32::INFINITY);
        assert_eq!(bb.intersections(ray), Some((4.0, 6.0)));

        // Starting inside gives a negative entry
        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 1.0, 0.0), f32::INFINITY);
        assert_eq!(bb.intersections(ray), Some((-1.0, 1.0)));

        // Behind
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), f32::INFINITY);
        assert_eq!(bb.intersections(ray), None);

        // Parallel outside the slab
        let ray = Ray::new(Point3::new(-5.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0), f32::INFINITY);
        assert_eq!(bb.intersections(ray), None);
    }
}
