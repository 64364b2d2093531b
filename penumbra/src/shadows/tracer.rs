use crate::{
    lights::{Light, LightRegistry},
    math::{Point3, Ray, Spectrum},
    penumbra_error, penumbra_trace, penumbra_warn,
    world::{Partition, RayCaster, Shading, ShotHandler, Transparency},
};

/// Light carried by a filter color below this is considered fully attenuated.
const ENERGY_EPSILON: f32 = 0.01;

/// Result of tracing a shadow ray towards a light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShadowOutcome {
    /// Light reaches the ray origin attenuated by the filter color
    Visible(Spectrum<f32>),
    Obscured,
}

// Result of a single shot along the shadow ray
enum Hop {
    Done(ShadowOutcome),
    Continue {
        origin: Point3<f32>,
        filter: Spectrum<f32>,
    },
}

struct ShadowRayHandler<'a, W> {
    world: &'a W,
    registry: &'a LightRegistry,
    light: &'a Light,
    filter: Spectrum<f32>,
}

impl<'a, W> ShadowRayHandler<'a, W>
where
    W: RayCaster + Shading,
{
    fn transmission(&self, ray: &Ray<f32>, partition: &Partition) -> Spectrum<f32> {
        self.world
            .transmission(ray, partition)
            .clamped(0.0, 1.0)
    }

    fn visible(&self) -> Hop {
        Hop::Done(ShadowOutcome::Visible(self.filter))
    }
}

impl<'a, W> ShotHandler for ShadowRayHandler<'a, W>
where
    W: RayCaster + Shading,
{
    type Output = Hop;

    fn hit(&mut self, ray: &Ray<f32>, partitions: &[Partition]) -> Hop {
        let tol = self.world.tolerance();
        let light = self.light;

        // Air only attenuates, everything else up to the first partition that doesn't contain
        // the ray origin is skipped
        let mut air_seen = false;
        let mut first_valid = None;
        for p in partitions {
            if self.world.transparency(p.region) == Transparency::Air
                && Some(p.region) != light.region
            {
                air_seen = true;
                self.filter *= self.transmission(ray, p);
                continue;
            }
            if p.in_hit.dist >= tol || p.out_hit.dist >= tol * 10.0 {
                first_valid = Some(p);
                break;
            }
        }

        let p = match first_valid {
            Some(p) => p,
            None => {
                if light.is_invisible() || light.infinite || air_seen {
                    return self.visible();
                }
                match partitions.first() {
                    // Most likely the exit from the solid the ray started on
                    Some(first) if first.in_hit.dist <= tol => {
                        return Hop::Continue {
                            origin: ray.point(first.out_hit.dist),
                            filter: self.filter,
                        };
                    }
                    // Empty hit list or distances that don't compare
                    _ => {
                        penumbra_error!(
                            "Shadow ray from {:?} towards {:?} hit nothing past tolerance {}",
                            ray.o,
                            ray.d,
                            tol
                        );
                        return Hop::Done(ShadowOutcome::Obscured);
                    }
                }
            }
        };

        if Some(p.region) == light.region || self.registry.is_light_region(p.region) {
            return self.visible();
        }

        if light.is_invisible() && !light.infinite && p.in_hit.dist >= light.position.dist(ray.o)
        {
            return self.visible();
        }

        if !p.out_hit.dist.is_finite()
            || self.world.transparency(p.region) == Transparency::Opaque
        {
            return Hop::Done(ShadowOutcome::Obscured);
        }

        if self.filter.sum() < ENERGY_EPSILON {
            return Hop::Done(ShadowOutcome::Obscured);
        }

        self.filter *= self.transmission(ray, p);
        if self.filter.sum() < ENERGY_EPSILON {
            return Hop::Done(ShadowOutcome::Obscured);
        }

        Hop::Continue {
            origin: ray.point(p.out_hit.dist + tol),
            filter: self.filter,
        }
    }

    fn miss(&mut self, _ray: &Ray<f32>) -> Hop {
        if self.light.is_invisible() || self.light.infinite {
            self.visible()
        } else {
            Hop::Done(ShadowOutcome::Obscured)
        }
    }
}

/// Follows `ray` through transmissive regions until it reaches `light` or is blocked.
///
/// The returned filter color is the product of the transmittances along the way.
pub fn trace_shadow_ray<W>(
    world: &W,
    registry: &LightRegistry,
    light: &Light,
    ray: Ray<f32>,
    max_depth: u32,
) -> ShadowOutcome
where
    W: RayCaster + Shading,
{
    let mut origin = ray.o;
    let mut filter = Spectrum::ones();
    let mut depth = 0;
    loop {
        if depth > max_depth {
            penumbra_warn!(
                "Shadow ray towards '{}' exceeded {} hops",
                light.name,
                max_depth
            );
            return ShadowOutcome::Obscured;
        }

        let mut handler = ShadowRayHandler {
            world,
            registry,
            light,
            filter,
        };
        match world.shoot(Ray::new(origin, ray.d, ray.t_max), &mut handler) {
            Hop::Done(outcome) => {
                penumbra_trace!("Shadow ray towards '{}': {:?}", light.name, outcome);
                return outcome;
            }
            Hop::Continue {
                origin: next_origin,
                filter: next_filter,
            } => {
                origin = next_origin;
                filter = next_filter;
                depth += 1;
            }
        }
    }
}
