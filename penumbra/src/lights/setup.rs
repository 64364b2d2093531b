use super::{light::Light, params::LightParams};
use crate::{
    error::SetupError,
    math::Spectrum,
    penumbra_debug,
    world::{BoundsError, RegionBounds, RegionId, Shading},
};

impl Light {
    /// Creates a `Light` from `region` configured by the parameter string `params`.
    ///
    /// The light sits at the center of the region bounds with a radius of the smallest
    /// half-extent and takes the region color if it has one.
    pub fn from_region<W>(
        name: &str,
        region: RegionId,
        params: &str,
        world: &W,
    ) -> Result<Light, SetupError>
    where
        W: Shading + RegionBounds,
    {
        let params: LightParams = params.parse()?;

        let bb = match world.region_bounds(region) {
            Ok(bb) if bb.is_finite() => bb,
            Ok(_) | Err(BoundsError::Unbounded(_)) => {
                return Err(SetupError::UnboundedLight(name.into()))
            }
            Err(why) => return Err(SetupError::Bounds(why)),
        };

        let half_extents = bb.diagonal() * 0.5;
        let mut light = Light::new(
            name,
            Some(region),
            bb.center(),
            half_extents.min_comp(),
        );
        light.color = world.region_color(region).unwrap_or_else(Spectrum::ones);

        params.apply(&mut light)?;
        light.update_direction();

        penumbra_debug!(
            "Light '{}' at {:?} radius {} aim {:?}",
            light.name,
            light.position,
            light.radius,
            light.aim
        );

        Ok(light)
    }
}
