mod implicit;
mod light;
mod normalize;
mod params;
mod registry;
mod sample_points;
mod setup;

pub use implicit::make_implicit_lights;
pub use light::{Light, LightSamplePoint, SAMPLE_BATCH_SIZE};
pub use normalize::normalize_lights;
pub use params::{LightParams, ParamError};
pub use registry::{LightHandle, LightRegistry};
pub use sample_points::generate_sample_points;
