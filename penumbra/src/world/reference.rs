use super::{
    BoundsError, Partition, PartitionHit, RayCaster, RegionBounds, RegionId, Shading, ShotHandler,
    Transparency,
};
use crate::math::{Bounds3, Normal, Point3, Ray, Spectrum, Vec3};

// A brute force world of analytic solids. Good enough to drive the visibility engine in tests
// and benchmarks, there's no acceleration structure.

#[derive(Copy, Clone, Debug)]
pub enum Solid {
    Sphere { center: Point3<f32>, radius: f32 },
    /// Axis-aligned box, infinite extents are allowed
    Box(Bounds3<f32>),
}

impl Solid {
    /// Returns the entry and exit hits of `ray` through this `Solid`.
    fn intersect(&self, ray: Ray<f32>) -> Option<(PartitionHit, PartitionHit)> {
        match *self {
            Solid::Sphere { center, radius } => {
                let oc = ray.o - center;
                let a = ray.d.len_sqr();
                let b = 2.0 * oc.dot(ray.d);
                let c = oc.len_sqr() - radius * radius;

                let discrim = b * b - 4.0 * a * c;
                if discrim < 0.0 {
                    return None;
                }
                let rd = discrim.sqrt();
                let q = if b < 0.0 {
                    -0.5 * (b - rd)
                } else {
                    -0.5 * (b + rd)
                };
                let (mut t0, mut t1) = if q == 0.0 { (0.0, 0.0) } else { (q / a, c / q) };
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                if t1 <= 0.0 || t0 > ray.t_max {
                    return None;
                }

                let normal_at = |t: f32| Normal::from((ray.point(t) - center) / radius);
                Some((
                    PartitionHit {
                        dist: t0,
                        normal: normal_at(t0),
                    },
                    PartitionHit {
                        dist: t1,
                        normal: normal_at(t1),
                    },
                ))
            }
            Solid::Box(bb) => {
                let (t0, t1) = bb.intersections(ray)?;
                Some((
                    PartitionHit {
                        dist: t0,
                        normal: box_normal(&bb, ray, t0),
                    },
                    PartitionHit {
                        dist: t1,
                        normal: box_normal(&bb, ray, t1),
                    },
                ))
            }
        }
    }

    fn bounds(&self) -> Bounds3<f32> {
        match *self {
            Solid::Sphere { center, radius } => Bounds3::new(
                center - Vec3::from(radius),
                center + Vec3::from(radius),
            ),
            Solid::Box(bb) => bb,
        }
    }
}

// Normal of the box face closest to the hit point
fn box_normal(bb: &Bounds3<f32>, ray: Ray<f32>, t: f32) -> Normal<f32> {
    if !t.is_finite() {
        return Normal::from(-ray.d);
    }
    let p = ray.point(t);
    let mut best = (f32::INFINITY, Normal::zeros());
    for axis in 0..3 {
        let mut n = Normal::zeros();
        let d_min = (p[axis] - bb.p_min[axis]).abs();
        if d_min < best.0 {
            n[axis] = -1.0;
            best = (d_min, n);
        }
        let mut n = Normal::zeros();
        let d_max = (p[axis] - bb.p_max[axis]).abs();
        if d_max < best.0 {
            n[axis] = 1.0;
            best = (d_max, n);
        }
    }
    best.1
}

#[derive(Clone, Debug)]
pub struct Region {
    pub name: String,
    pub solid: Solid,
    pub transparency: Transparency,
    /// Transmittance of non-opaque regions
    pub transmit: Spectrum<f32>,
    pub color: Option<Spectrum<f32>>,
}

impl Region {
    /// Creates a new opaque `Region`.
    pub fn opaque(name: &str, solid: Solid) -> Self {
        Self {
            name: name.into(),
            solid,
            transparency: Transparency::Opaque,
            transmit: Spectrum::zeros(),
            color: None,
        }
    }

    /// Creates a new `Region` with the given transparency and transmittance.
    pub fn transmissive(
        name: &str,
        solid: Solid,
        transparency: Transparency,
        transmit: Spectrum<f32>,
    ) -> Self {
        Self {
            name: name.into(),
            solid,
            transparency,
            transmit,
            color: None,
        }
    }
}

pub struct ReferenceWorld {
    regions: Vec<Region>,
    tolerance: f32,
}

impl ReferenceWorld {
    /// Creates a new empty `ReferenceWorld` with the given distance tolerance.
    pub fn new(tolerance: f32) -> Self {
        Self {
            regions: Vec::new(),
            tolerance,
        }
    }

    pub fn add_region(&mut self, region: Region) -> RegionId {
        self.regions.push(region);
        RegionId(self.regions.len() - 1)
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Default for ReferenceWorld {
    fn default() -> Self {
        Self::new(0.0005)
    }
}

impl RayCaster for ReferenceWorld {
    fn tolerance(&self) -> f32 {
        self.tolerance
    }

    fn shoot<H: ShotHandler>(&self, ray: Ray<f32>, handler: &mut H) -> H::Output {
        // Overlapping regions are reported as is, there's no boolean evaluation here
        let mut partitions: Vec<Partition> = self
            .regions
            .iter()
            .enumerate()
            .filter_map(|(i, r)| {
                r.solid
                    .intersect(ray)
                    .map(|(in_hit, out_hit)| Partition {
                        region: RegionId(i),
                        in_hit,
                        out_hit,
                    })
            })
            .collect();

        if partitions.is_empty() {
            handler.miss(&ray)
        } else {
            partitions.sort_by(|a, b| a.in_hit.dist.total_cmp(&b.in_hit.dist));
            handler.hit(&ray, &partitions)
        }
    }
}

impl Shading for ReferenceWorld {
    fn transparency(&self, region: RegionId) -> Transparency {
        self.region(region)
            .map_or(Transparency::Opaque, |r| r.transparency)
    }

    fn transmission(&self, _ray: &Ray<f32>, partition: &Partition) -> Spectrum<f32> {
        match self.region(partition.region) {
            Some(r) if r.transparency != Transparency::Opaque => r.transmit,
            _ => Spectrum::zeros(),
        }
    }

    fn region_color(&self, region: RegionId) -> Option<Spectrum<f32>> {
        self.region(region).and_then(|r| r.color)
    }
}

impl RegionBounds for ReferenceWorld {
    fn region_bounds(&self, region: RegionId) -> Result<Bounds3<f32>, BoundsError> {
        let bb = self
            .region(region)
            .ok_or(BoundsError::UnknownRegion(region))?
            .solid
            .bounds();
        if bb.is_finite() {
            Ok(bb)
        } else {
            Err(BoundsError::Unbounded(region))
        }
    }
}
