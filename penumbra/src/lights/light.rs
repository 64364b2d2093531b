use crate::{
    math::{Normal, Point3, Ray, Spectrum, Vec3},
    world::RegionId,
};

use std::collections::TryReserveError;

/// Sample points are allocated in batches of this many.
pub const SAMPLE_BATCH_SIZE: usize = crate::config::SAMPLE_BATCH_SIZE;

/// A point on the emitting surface of a light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSamplePoint {
    pub p: Point3<f32>,
    /// Zero for points usable from any direction
    pub n: Normal<f32>,
}

impl LightSamplePoint {
    /// Checks if this point has no meaningful normal and can be shot at from any angle.
    pub fn is_omnidirectional(&self) -> bool {
        self.n.near_zero(f32::EPSILON)
    }
}

/// An emitting region.
#[derive(Clone, Debug)]
pub struct Light {
    pub name: String,
    /// The region the light was set up from, `None` for implicit lights
    pub region: Option<RegionId>,
    pub position: Point3<f32>,
    pub radius: f32,
    /// Unit vector the light is aimed at
    pub aim: Vec3<f32>,
    /// Set when `aim` was given explicitly through a target
    pub explicit_aim: bool,
    half_angle: f32,
    cos_half_angle: f32,
    /// Unit vector towards an infinite light
    pub direction: Vec3<f32>,
    pub intensity: f32,
    pub color: Spectrum<f32>,
    /// Relative contribution in `[0, 1]`, values `<= 0` are computed on normalization
    pub fraction: f32,
    visible: bool,
    invisible: bool,
    pub infinite: bool,
    /// 0 disables shadow tests, 1 is a hard shadow and more are soft shadow samples
    pub shadows: u32,
    samples: Vec<LightSamplePoint>,
}

impl Light {
    /// Creates a new `Light` with the default parameters at `position`.
    pub fn new(name: &str, region: Option<RegionId>, position: Point3<f32>, radius: f32) -> Self {
        let mut ret = Self {
            name: name.into(),
            region,
            position,
            radius,
            aim: Vec3::new(0.0, 0.0, -1.0),
            explicit_aim: false,
            half_angle: 180.0,
            cos_half_angle: -1.0,
            direction: Vec3::new(0.0, 0.0, 1.0),
            intensity: 1.0,
            color: Spectrum::ones(),
            fraction: -1.0,
            visible: true,
            invisible: false,
            infinite: false,
            shadows: 1,
            samples: Vec::new(),
        };
        ret.update_direction();
        ret
    }

    /// Half-angle of the emission cone in degrees.
    pub fn half_angle(&self) -> f32 {
        self.half_angle
    }

    pub fn cos_half_angle(&self) -> f32 {
        self.cos_half_angle
    }

    /// Sets the half-angle of the emission cone in degrees, clamped to 180.
    pub fn set_half_angle(&mut self, degrees: f32) {
        self.half_angle = degrees.min(180.0);
        self.cos_half_angle = self.half_angle.to_radians().cos();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    /// Sets whether the light solid is rendered, keeping `invisible` as its negation.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.invisible = !visible;
    }

    /// Sets whether the light solid is hidden, keeping `visible` as its negation.
    pub fn set_invisible(&mut self, invisible: bool) {
        self.invisible = invisible;
        self.visible = !invisible;
    }

    /// Points `direction` from the origin towards `position`, or up if the light sits at the
    /// origin.
    pub fn update_direction(&mut self) {
        let v = Vec3::from(self.position);
        let len = v.len();
        self.direction = if len < f32::EPSILON.sqrt() {
            Vec3::new(0.0, 0.0, 1.0)
        } else {
            v / len
        };
    }

    pub fn samples(&self) -> &[LightSamplePoint] {
        &self.samples
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Checks if this light needs sample points generated before its soft shadows can be
    /// evaluated.
    pub fn needs_samples(&self) -> bool {
        self.shadows > 1 && !self.infinite && self.samples.is_empty()
    }

    /// Appends a sample point, growing the storage a batch at a time.
    pub fn push_sample(&mut self, sample: LightSamplePoint) -> Result<(), TryReserveError> {
        if self.samples.len() == self.samples.capacity() {
            self.samples.try_reserve_exact(SAMPLE_BATCH_SIZE)?;
        }
        self.samples.push(sample);
        Ok(())
    }

    /// Color of the light solid when a primary ray hits it.
    ///
    /// Plain cosine shading makes lights look dim, so the light is shaded with cos/2 + 0.5
    /// when the hit normal is within the beam and cos/2 when the beam points away.
    pub fn direct_view(&self, ray: &Ray<f32>, hit_normal: Normal<f32>) -> Spectrum<f32> {
        let f = (-hit_normal.dot_v(ray.d) * 0.5).max(0.0);
        let f = if self.aim.dot_n(hit_normal) < self.cos_half_angle {
            f * self.fraction
        } else {
            (f + 0.5) * self.fraction
        };
        self.color * f
    }
}
