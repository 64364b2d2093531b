use super::{
    light::Light,
    registry::{LightHandle, LightRegistry},
};
use crate::math::{Point3, Spectrum, Transform};

// View space positions: left edge half up, right edge half up, behind and overhead
const IMPLICIT_LIGHT_POSITIONS: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, -0.5]];

/// Registers up to three white debug lights placed relative to the view.
///
/// The lights have no region, no shadows and emit in every direction.
pub fn make_implicit_lights(
    registry: &mut LightRegistry,
    count: usize,
    view_to_model: &Transform<f32>,
) -> Vec<LightHandle> {
    IMPLICIT_LIGHT_POSITIONS
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, &[x, y, z])| {
            let position = view_to_model * Point3::new(x, y, z);
            let mut light = Light::new(&format!("Implicit light {}", i), None, position, 0.1);
            light.color = Spectrum::ones();
            light.intensity = 1.0;
            light.set_invisible(true);
            light.shadows = 0;
            light.set_half_angle(180.0);
            registry.register(light)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::make_implicit_lights;
    use crate::{
        lights::LightRegistry,
        math::{transforms::translation, Point3, Transform, Vec3},
    };
    use approx::assert_relative_eq;

    #[test]
    fn placement() {
        let mut registry = LightRegistry::new();
        let handles = make_implicit_lights(&mut registry, 5, &Transform::default());
        assert_eq!(handles.len(), 3);

        let light = registry.get(handles[2]).unwrap();
        assert_eq!(light.name, "Implicit light 2");
        assert_eq!(light.position, Point3::new(0.0, 1.0, -0.5));
        assert!(light.is_invisible());
        assert_eq!(light.shadows, 0);
        assert_eq!(light.radius, 0.1);
        assert_eq!(light.region, None);
        assert_eq!(light.aim, Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(light.direction, Vec3::new(0.0, 1.0, -0.5).normalized());
    }

    #[test]
    fn transformed() {
        let mut registry = LightRegistry::new();
        let handles = make_implicit_lights(
            &mut registry,
            1,
            &translation(Vec3::new(0.0, 0.0, 10.0)),
        );
        assert_eq!(handles.len(), 1);
        let light = registry.get(handles[0]).unwrap();
        assert_relative_eq!(light.position, Point3::new(-1.0, 0.0, 11.0));

        registry.cleanup();
        assert!(registry.is_empty());
    }
}
