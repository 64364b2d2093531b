//! Interfaces of the services the visibility engine consumes: ray casting, transmission-only
//! shading and region bounds.

mod reference;

pub use reference::{ReferenceWorld, Region, Solid};

use crate::math::{Bounds3, Normal, Ray, Spectrum};

use strum::{Display, EnumString};

/// Identifies a region (an object with its own material) in the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "region {}", self.0)
    }
}

/// One boundary crossing of a [Partition].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PartitionHit {
    /// Distance along the ray, negative if behind the origin
    pub dist: f32,
    /// Surface normal pointing out of the solid
    pub normal: Normal<f32>,
}

/// A span of a ray inside a single region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Partition {
    pub region: RegionId,
    pub in_hit: PartitionHit,
    pub out_hit: PartitionHit,
}

/// How light passes through a region, resolved once per region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Transparency {
    /// Blocks all light
    Opaque,
    /// Has a fixed transmittance
    Transmissive,
    /// Transmittance has to be evaluated per hit
    Procedural,
    /// Participating medium that only attenuates
    Air,
}

/// Receives the result of a [RayCaster::shoot].
pub trait ShotHandler {
    type Output;

    /// Called with the partitions along `ray`, ordered by entry distance.
    ///
    /// Ray casters should call [ShotHandler::miss] instead of passing an empty list.
    fn hit(&mut self, ray: &Ray<f32>, partitions: &[Partition]) -> Self::Output;
    /// Called when `ray` doesn't intersect anything.
    fn miss(&mut self, ray: &Ray<f32>) -> Self::Output;
}

pub trait RayCaster: Send + Sync {
    /// Distance under which two hits are considered the same point.
    fn tolerance(&self) -> f32;
    /// Intersects `ray` with the world and hands the result to `handler`.
    fn shoot<H: ShotHandler>(&self, ray: Ray<f32>, handler: &mut H) -> H::Output;
}

/// Restricted shading interface: only what light visibility needs.
pub trait Shading: Send + Sync {
    fn transparency(&self, region: RegionId) -> Transparency;
    /// Evaluates the transmittance through `partition` of `ray`.
    fn transmission(&self, ray: &Ray<f32>, partition: &Partition) -> Spectrum<f32>;
    /// Returns the material color of `region` if it has one.
    fn region_color(&self, _region: RegionId) -> Option<Spectrum<f32>> {
        None
    }
}

#[derive(Debug, PartialEq)]
pub enum BoundsError {
    UnknownRegion(RegionId),
    Unbounded(RegionId),
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::UnknownRegion(region) => write!(f, "Unknown {}", region),
            BoundsError::Unbounded(region) => write!(f, "Unbounded geometry in {}", region),
        }
    }
}

impl std::error::Error for BoundsError {}

pub trait RegionBounds {
    /// Returns the world space AABB of `region`.
    fn region_bounds(&self, region: RegionId) -> Result<Bounds3<f32>, BoundsError>;
}

/// Everything the visibility engine needs from the surrounding renderer.
pub trait World: RayCaster + Shading + RegionBounds {}

impl<W> World for W where W: RayCaster + Shading + RegionBounds {}
