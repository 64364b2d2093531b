use super::{registry::LightRegistry, sample_points::generate_sample_points};
use crate::{
    config::Settings,
    error::SetupError,
    penumbra_debug, penumbra_info,
    world::{RayCaster, RegionBounds},
};

use rand::Rng;

/// Prepares registered lights for rendering.
///
/// Lights without a pre-set fraction get one relative to the brightest such light, leaving
/// headroom for half of the ambient term. Area lights with soft shadows get their sample points.
/// Returns the number of lights evaluated per shaded point, capped to `settings.max_lights`.
pub fn normalize_lights<W, R>(
    registry: &mut LightRegistry,
    world: &W,
    settings: &Settings,
    rng: &mut R,
) -> Result<usize, SetupError>
where
    W: RayCaster + RegionBounds,
    R: Rng + ?Sized,
{
    let mut max_intensity = 0.0f32;
    for (_, light) in registry.iter_mut().filter(|(_, l)| l.fraction <= 0.0) {
        if light.intensity <= 0.0 {
            light.intensity = 1.0;
        }
        max_intensity = max_intensity.max(light.intensity);
    }
    max_intensity *= 1.0 + settings.ambient_intensity * 0.5;

    for (_, light) in registry.iter_mut() {
        if light.fraction <= 0.0 {
            light.fraction = light.intensity / max_intensity;
        }
        if light.shadows > 1 && !light.infinite && light.sample_count() == 0 {
            generate_sample_points(light, world, settings, rng)?;
        }
    }

    penumbra_debug!(
        "Lighting: ambient {}%",
        (settings.ambient_intensity * 100.0) as i32
    );
    for (_, light) in registry.iter() {
        penumbra_debug!(
            "  {}: {:?}, aimed at {:?}",
            light.name,
            light.position,
            light.aim
        );
        penumbra_debug!(
            "  {}: {}, {}, {} lumens ({}%), half-angle {}, {} sample points",
            light.name,
            if light.is_visible() { "visible" } else { "invisible" },
            if light.shadows > 0 { "casts shadows" } else { "no shadows" },
            light.intensity,
            (light.fraction * 100.0) as i32,
            light.half_angle(),
            light.sample_count()
        );
    }

    let mut count = registry.len();
    if count > settings.max_lights {
        penumbra_info!("Number of lights limited to {}", settings.max_lights);
        count = settings.max_lights;
    }
    registry.set_active_count(count);

    Ok(count)
}
