use super::{common::FloatValueType, vector::Vec3, Transform};

/// Creates a new `Transform` that is a translation by `delta`.
pub fn translation<T>(delta: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, z) = (T::one(), T::zero());
    Transform::new([
        [o, z, z, delta.x],
        [z, o, z, delta.y],
        [z, z, o, delta.z],
        [z, z, z, o],
    ])
}

/// Creates a new `Transform` that is a scaling by `x`, `y` and `z`.
pub fn scale<T>(x: T, y: T, z: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, n) = (T::one(), T::zero());
    Transform::new([
        [x, n, n, n],
        [n, y, n, n],
        [n, n, z, n],
        [n, n, n, o],
    ])
}
