use super::{
    flags::{SampleUsageFlags, SampleUse},
    obscuration::SurfacePoint,
    tracer::{trace_shadow_ray, ShadowOutcome},
};
use crate::{
    lights::{Light, LightRegistry},
    math::{Point3, Ray, Spectrum, Vec3},
    penumbra_trace,
    world::{RayCaster, Shading},
};

use rand::Rng;

/// cos(89.99 deg), sample points seen at a grazing angle are not shot at.
const GRAZING_COS: f32 = 0.000_174_532_9;

/// Outcome of a single visibility draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Light doesn't cast shadows and the point is within its beam
    FillLightVisible,
    Obscured,
}

/// State of evaluating one light from one shaded point.
pub struct ShadowQuery<'a, W, R: ?Sized> {
    pub world: &'a W,
    pub registry: &'a LightRegistry,
    pub rng: &'a mut R,
    pub surface: &'a SurfacePoint,
    pub light: &'a Light,
    /// Unit vector from the surface point towards the light center
    pub to_light: Vec3<f32>,
    pub light_x: Vec3<f32>,
    pub light_y: Vec3<f32>,
    /// Filter color of the last visible draw
    pub intensity: Spectrum<f32>,
    pub iteration: u32,
    pub max_depth: u32,
}

// Picks an unused sample point facing the surface, returns the direction towards it
fn pick_sample_dir<W, R>(
    query: &mut ShadowQuery<'_, W, R>,
    flags: &mut SampleUsageFlags,
) -> Option<Vec3<f32>>
where
    R: Rng + ?Sized,
{
    let light = query.light;
    let samples = light.samples();
    let count = samples.len();
    // Flags sized for another light, or never sized at all
    if flags.active_len() != count {
        flags.reset(count);
    }
    let start = query.rng.gen_range(0..count);

    for _ in 0..2 {
        for k in (start..count).chain(0..start) {
            let used = flags.get(k);
            if used.intersects(SampleUse::SEEN | SampleUse::BACKFACE) {
                continue;
            }

            let sample = &samples[k];
            let dir = (sample.p - query.surface.p).normalized();
            let vs_surface = query.surface.n.map_or(1.0, |n| n.dot_v(dir));
            let vs_light = if sample.is_omnidirectional() {
                1.0
            } else {
                sample.n.dot_v(-dir)
            };

            if vs_light > GRAZING_COS && vs_surface > GRAZING_COS {
                flags.insert(k, SampleUse::SEEN);
                return Some(dir);
            }
            flags.insert(k, SampleUse::BACKFACE);
        }

        // Everything is used or backfacing, points shot at before can be used again
        if !flags.recycle_seen() {
            break;
        }
        penumbra_trace!("Recycling sample points of '{}'", light.name);
    }

    None
}

/// Draws a point on the light and checks if it can be seen from the surface point.
///
/// On [Visibility::Visible] the filter color of the shadow ray is stored in `query.intensity`.
pub fn pick_visibility<W, R>(
    query: &mut ShadowQuery<'_, W, R>,
    flags: &mut SampleUsageFlags,
) -> Visibility
where
    W: RayCaster + Shading,
    R: Rng + ?Sized,
{
    let light = query.light;
    let p = query.surface.p;

    let dir = if light.infinite {
        light.direction
    } else if light.sample_count() > 0 {
        match pick_sample_dir(query, flags) {
            Some(dir) => dir,
            None => {
                penumbra_trace!("No sample point of '{}' to shoot at", light.name);
                return Visibility::Obscured;
            }
        }
    } else {
        // Point on the disc the light presents towards the surface
        let r = light.radius * query.rng.gen::<f32>();
        let angle = std::f32::consts::TAU * query.rng.gen::<f32>();
        let target: Point3<f32> = light.position
            + query.light_x * (r * angle.cos())
            + query.light_y * (r * angle.sin());
        (target - p).normalized()
    };

    if -dir.dot(light.aim) < light.cos_half_angle() {
        return Visibility::Obscured;
    }

    if light.shadows == 0 {
        query.intensity = Spectrum::ones();
        return Visibility::FillLightVisible;
    }

    let tol = query.world.tolerance();
    let ray = Ray::new(p + dir * tol, dir, f32::INFINITY);
    penumbra_trace!(
        "Draw {} of '{}' shoots from {:?} towards {:?}",
        query.iteration,
        light.name,
        ray.o,
        dir
    );
    match trace_shadow_ray(query.world, query.registry, light, ray, query.max_depth) {
        ShadowOutcome::Visible(filter) => {
            query.intensity = filter;
            Visibility::Visible
        }
        ShadowOutcome::Obscured => Visibility::Obscured,
    }
}
