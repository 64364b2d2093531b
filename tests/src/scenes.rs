#[cfg(test)]
pub mod helpers {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use penumbra::{
        lights::{normalize_lights, LightRegistry},
        math::{Bounds3, Normal, Point3, Ray, Spectrum},
        shadows::{LightOutputs, ObscurationWorker, SurfacePoint},
        world::{
            BoundsError, Partition, RayCaster, ReferenceWorld, RegionBounds, RegionId, Shading,
            ShotHandler, Solid, Transparency,
        },
        Settings,
    };
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Wraps a [ReferenceWorld] and counts the rays shot into it.
    pub struct CountingWorld {
        pub inner: ReferenceWorld,
        shots: AtomicUsize,
    }

    impl CountingWorld {
        pub fn new(inner: ReferenceWorld) -> Self {
            Self {
                inner,
                shots: AtomicUsize::new(0),
            }
        }

        pub fn shots(&self) -> usize {
            self.shots.load(Ordering::Relaxed)
        }
    }

    impl RayCaster for CountingWorld {
        fn tolerance(&self) -> f32 {
            self.inner.tolerance()
        }

        fn shoot<H: ShotHandler>(&self, ray: Ray<f32>, handler: &mut H) -> H::Output {
            self.shots.fetch_add(1, Ordering::Relaxed);
            self.inner.shoot(ray, handler)
        }
    }

    impl Shading for CountingWorld {
        fn transparency(&self, region: RegionId) -> Transparency {
            self.inner.transparency(region)
        }

        fn transmission(&self, ray: &Ray<f32>, partition: &Partition) -> Spectrum<f32> {
            self.inner.transmission(ray, partition)
        }

        fn region_color(&self, region: RegionId) -> Option<Spectrum<f32>> {
            self.inner.region_color(region)
        }
    }

    impl RegionBounds for CountingWorld {
        fn region_bounds(&self, region: RegionId) -> Result<Bounds3<f32>, BoundsError> {
            self.inner.region_bounds(region)
        }
    }

    /// Axis-aligned slab spanning `[-half_width, half_width]` in x and y.
    pub fn slab(half_width: f32, z0: f32, z1: f32) -> Solid {
        Solid::Box(Bounds3::new(
            Point3::new(-half_width, -half_width, z0),
            Point3::new(half_width, half_width, z1),
        ))
    }

    /// Point on an upward facing opaque floor at the origin.
    pub fn floor_point() -> SurfacePoint {
        SurfacePoint {
            p: Point3::zeros(),
            n: Some(Normal::new(0.0, 0.0, 1.0)),
            transmit: 0.0,
        }
    }

    pub fn normalize<W>(registry: &mut LightRegistry, world: &W) -> usize
    where
        W: RayCaster + RegionBounds,
    {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        normalize_lights(registry, world, &settings, &mut rng).unwrap()
    }

    /// Evaluates the lights of `registry` from `surface` with a fresh worker.
    pub fn evaluate<W>(world: &W, registry: &LightRegistry, surface: &SurfacePoint) -> LightOutputs
    where
        W: RayCaster + Shading + RegionBounds,
    {
        let settings = Settings::default();
        let mut worker = ObscurationWorker::new(settings.seed, 0);
        let mut out = LightOutputs::new();
        worker.light_obscuration(world, registry, &settings, surface, &mut out);
        out
    }
}
