mod director;
mod flags;
mod obscuration;
mod tracer;

pub use director::{pick_visibility, ShadowQuery, Visibility};
pub use flags::{SampleUsageFlags, SampleUse};
pub use obscuration::{par_light_obscuration, LightOutputs, ObscurationWorker, SurfacePoint};
pub use tracer::{trace_shadow_ray, ShadowOutcome};
