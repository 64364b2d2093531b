use super::light::{Light, LightSamplePoint};
use crate::{
    config::Settings,
    error::SetupError,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
    penumbra_debug, penumbra_info, penumbra_warn,
    world::{Partition, RayCaster, RegionBounds, RegionId, ShotHandler},
};

use rand::Rng;
use std::collections::TryReserveError;

/// Probe rays start this far outside the light bounds.
const PROBE_OFFSET: f32 = 10.0;
/// Light surface closer than this to another partition is considered covered.
const ADJACENCY_TOLERANCE: f32 = 5.0;

/// Collects the boundary points of the light region along probe rays.
struct SampleCollector<'a> {
    region: RegionId,
    light: &'a mut Light,
}

impl<'a> SampleCollector<'a> {
    fn push(&mut self, ray: &Ray<f32>, dist: f32, n: Normal<f32>) -> Result<(), TryReserveError> {
        self.light.push_sample(LightSamplePoint {
            p: ray.point(dist),
            n,
        })
    }
}

fn adjacent(a: f32, b: f32) -> bool {
    (a - b).abs() < ADJACENCY_TOLERANCE
}

impl<'a> ShotHandler for SampleCollector<'a> {
    type Output = Result<(), TryReserveError>;

    fn hit(&mut self, ray: &Ray<f32>, partitions: &[Partition]) -> Self::Output {
        for (i, p) in partitions.iter().enumerate() {
            if p.region != self.region {
                continue;
            }

            // Surface touching another object won't emit in this direction
            let prev = i.checked_sub(1).map(|j| &partitions[j]);
            if prev.map_or(false, |prev| adjacent(prev.out_hit.dist, p.in_hit.dist)) {
                continue;
            }
            self.push(ray, p.in_hit.dist, p.in_hit.normal)?;

            let next = partitions.get(i + 1);
            if next.map_or(false, |next| adjacent(next.in_hit.dist, p.out_hit.dist)) {
                continue;
            }
            self.push(ray, p.out_hit.dist, p.out_hit.normal)?;
        }
        Ok(())
    }

    fn miss(&mut self, _ray: &Ray<f32>) -> Self::Output {
        Ok(())
    }
}

// Starts a probe outside one of the minimum faces of `bb` and aims it at the opposite face
fn probe_ray<R: Rng + ?Sized>(bb: &Bounds3<f32>, span: Vec3<f32>, rng: &mut R) -> Ray<f32> {
    let face = rng.gen_range(0..3);
    let mut o = Point3::zeros();
    let mut target = Point3::zeros();
    for axis in 0..3 {
        if axis == face {
            o[axis] = bb.p_min[axis] - PROBE_OFFSET;
            target[axis] = bb.p_max[axis];
        } else {
            o[axis] = bb.p_min[axis] + rng.gen::<f32>() * span[axis];
            target[axis] = bb.p_min[axis] + rng.gen::<f32>() * span[axis];
        }
    }
    Ray::new(o, (target - o).normalized(), f32::INFINITY)
}

/// Generates points on the surface of `light` by shooting random probe rays through its bounds.
///
/// Does nothing if the light already has sample points or no region. Returns the number of
/// points generated.
pub fn generate_sample_points<W, R>(
    light: &mut Light,
    world: &W,
    settings: &Settings,
    rng: &mut R,
) -> Result<usize, SetupError>
where
    W: RayCaster + RegionBounds,
    R: Rng + ?Sized,
{
    if light.sample_count() > 0 {
        return Ok(0);
    }
    let region = match light.region {
        Some(region) => region,
        None => return Ok(0),
    };

    penumbra_debug!("Generating sample points for '{}'", light.name);

    let bb = match world.region_bounds(region) {
        Ok(bb) => bb,
        Err(why) => {
            penumbra_warn!("Skipping sample points of '{}': {}", light.name, why);
            return Ok(0);
        }
    };
    penumbra_debug!("  bounds {:?} {:?}", bb.p_min, bb.p_max);

    let span = bb.diagonal();
    if span.x <= 0.0 && span.y <= 0.0 && span.z <= 0.0 {
        penumbra_info!("Small light '{}', treating as point source", light.name);
        return Ok(0);
    }

    let total_samples = settings.sample_batch_size * light.shadows as usize;
    let mut collector = SampleCollector { region, light };
    let mut probes = 0;
    while collector.light.sample_count() < total_samples && probes < settings.max_probe_rays {
        let ray = probe_ray(&bb, span, rng);
        world.shoot(ray, &mut collector)?;
        probes += 1;
    }

    let count = collector.light.sample_count();
    penumbra_debug!("  {} sample points from {} probes", count, probes);
    Ok(count)
}
