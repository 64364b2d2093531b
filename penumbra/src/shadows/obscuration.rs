use super::{
    director::{pick_visibility, ShadowQuery, Visibility},
    flags::SampleUsageFlags,
};
use crate::{
    config::Settings,
    lights::{LightHandle, LightRegistry},
    math::{Normal, Point3, Spectrum, Vec3},
    penumbra_trace,
    world::World,
};

use rand_pcg::Pcg32;
use rayon::prelude::*;

/// Shaded points handed to a single worker at once in [par_light_obscuration].
const WORK_CHUNK_SIZE: usize = 64;

/// A shaded point lights are evaluated from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfacePoint {
    pub p: Point3<f32>,
    /// Shading normal, `None` if the surface doesn't have one
    pub n: Option<Normal<f32>>,
    /// Transmittance of the surface, opaque surfaces don't see lights behind them
    pub transmit: f32,
}

/// Per-light results for one shaded point, indexed by the light's position in the registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightOutputs {
    /// Unit vector towards the light center
    pub to_light: Vec<Vec3<f32>>,
    /// Mean filter color of the shadow rays that reached the light
    pub intensity: Vec<Spectrum<f32>>,
    /// Handle of the light if any part of it is visible
    pub visible: Vec<Option<LightHandle>>,
    /// Fraction of the light that is visible
    pub fraction: Vec<f32>,
}

impl LightOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_len(len: usize) -> Self {
        let mut ret = Self::default();
        ret.resize(len);
        ret
    }

    pub fn len(&self) -> usize {
        self.fraction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fraction.is_empty()
    }

    // Sets the length to exactly `len` with every slot cleared
    fn reset(&mut self, len: usize) {
        self.to_light.clear();
        self.intensity.clear();
        self.visible.clear();
        self.fraction.clear();
        self.resize(len);
    }

    fn resize(&mut self, len: usize) {
        self.to_light.resize(len, Vec3::zeros());
        self.intensity.resize(len, Spectrum::zeros());
        self.visible.resize(len, None);
        self.fraction.resize(len, 0.0);
    }
}

/// Light evaluation state owned by a single rendering thread.
pub struct ObscurationWorker {
    rng: Pcg32,
    flags: SampleUsageFlags,
}

impl ObscurationWorker {
    /// Creates a new `ObscurationWorker` drawing from random stream `stream` of `seed`.
    pub fn new(seed: u64, stream: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, stream),
            flags: SampleUsageFlags::new(),
        }
    }

    /// Evaluates how much of each active light in `registry` is visible from `surface`.
    pub fn light_obscuration<W>(
        &mut self,
        world: &W,
        registry: &LightRegistry,
        settings: &Settings,
        surface: &SurfacePoint,
        out: &mut LightOutputs,
    ) where
        W: World,
    {
        let active_count = registry.active_count();
        // Slots of skipped or obscured lights stay cleared
        out.reset(active_count);
        self.flags.ensure_len(registry.max_sample_count());

        for (i, (handle, light)) in registry.iter().take(active_count).enumerate() {
            let to_light = if light.infinite {
                light.direction
            } else {
                (light.position - surface.p).normalized()
            };
            let light_x = to_light.orthogonal();
            let light_y = to_light.cross(light_x);

            if let Some(n) = surface.n {
                if surface.transmit <= 0.0 && n.dot_v(to_light) < 0.0 {
                    penumbra_trace!("'{}' is behind an opaque surface", light.name);
                    out.visible[i] = None;
                    continue;
                }
            }

            self.flags.reset(light.sample_count());

            let draws = if light.infinite || light.shadows == 0 {
                1
            } else {
                light.shadows
            };

            let mut query = ShadowQuery {
                world,
                registry,
                rng: &mut self.rng,
                surface,
                light,
                to_light,
                light_x,
                light_y,
                intensity: Spectrum::zeros(),
                iteration: 0,
                max_depth: settings.max_shadow_depth,
            };

            let mut visible_count = 0;
            let mut filter_sum = Spectrum::zeros();
            let mut fill_light = false;
            for draw in 0..draws {
                query.iteration = draw;
                match pick_visibility(&mut query, &mut self.flags) {
                    Visibility::Visible => {
                        visible_count += 1;
                        filter_sum += query.intensity;
                    }
                    Visibility::FillLightVisible => {
                        visible_count = draws;
                        fill_light = true;
                        break;
                    }
                    Visibility::Obscured => (),
                }
            }

            if visible_count == 0 {
                out.visible[i] = None;
                continue;
            }

            out.visible[i] = Some(handle);
            out.fraction[i] = visible_count as f32 / draws as f32;
            out.intensity[i] = if fill_light {
                Spectrum::ones()
            } else {
                filter_sum / visible_count as f32
            };
            out.to_light[i] = to_light;
        }
    }
}

/// Evaluates lights from each of `surfaces` in parallel.
///
/// Each chunk of points gets its own random stream so results don't depend on the thread
/// count.
pub fn par_light_obscuration<W>(
    world: &W,
    registry: &LightRegistry,
    settings: &Settings,
    surfaces: &[SurfacePoint],
) -> Vec<LightOutputs>
where
    W: World,
{
    surfaces
        .par_chunks(WORK_CHUNK_SIZE)
        .enumerate()
        .flat_map_iter(|(chunk_index, chunk)| {
            let mut worker = ObscurationWorker::new(settings.seed, chunk_index as u64);
            chunk
                .iter()
                .map(|surface| {
                    let mut out = LightOutputs::with_len(registry.active_count());
                    worker.light_obscuration(world, registry, settings, surface, &mut out);
                    out
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
