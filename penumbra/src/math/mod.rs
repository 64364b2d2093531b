#[macro_use]
mod macros;

mod bounds;
mod common;
mod normal;
mod point;
mod ray;
mod spectrum;
mod transform;
pub mod transforms;
mod vector;

pub use bounds::Bounds3;
pub use common::FloatValueType;
pub use normal::Normal;
pub use point::Point3;
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use transform::Transform;
pub use vector::Vec3;
