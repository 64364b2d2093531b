use super::light::Light;
use crate::{penumbra_debug, world::RegionId};

/// Stable reference to a registered [Light].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightHandle(usize);

impl LightHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Scene-scoped collection of lights.
///
/// Lights are iterated in registration order and that order defines the output index of each
/// light. Handles stay valid until their light is unregistered.
#[derive(Default)]
pub struct LightRegistry {
    lights: Vec<Option<Light>>,
    active_count: usize,
}

impl LightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, light: Light) -> LightHandle {
        penumbra_debug!("Registering light '{}'", light.name);
        self.lights.push(Some(light));
        LightHandle(self.lights.len() - 1)
    }

    /// Removes the light behind `handle`, returning it if it was still registered.
    pub fn unregister(&mut self, handle: LightHandle) -> Option<Light> {
        let light = self.lights.get_mut(handle.0)?.take()?;
        penumbra_debug!("Unregistered light '{}'", light.name);
        self.active_count = self.active_count.min(self.len());
        Some(light)
    }

    pub fn get(&self, handle: LightHandle) -> Option<&Light> {
        self.lights.get(handle.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: LightHandle) -> Option<&mut Light> {
        self.lights.get_mut(handle.0).and_then(Option::as_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LightHandle, &Light)> {
        self.lights
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (LightHandle(i), l)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (LightHandle, &mut Light)> {
        self.lights
            .iter_mut()
            .enumerate()
            .filter_map(|(i, l)| l.as_mut().map(|l| (LightHandle(i), l)))
    }

    pub fn len(&self) -> usize {
        self.lights.iter().filter(|l| l.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the largest sample point count among the registered lights.
    pub fn max_sample_count(&self) -> usize {
        self.iter()
            .map(|(_, l)| l.sample_count())
            .max()
            .unwrap_or(0)
    }

    /// Number of lights evaluated per shaded point, set when lights are normalized.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub(crate) fn set_active_count(&mut self, count: usize) {
        self.active_count = count.min(self.len());
    }

    /// Checks if `region` is the region of any registered light.
    pub fn is_light_region(&self, region: RegionId) -> bool {
        self.iter().any(|(_, l)| l.region == Some(region))
    }

    /// Drops implicit lights and lights whose solid isn't visible.
    ///
    /// The remaining lights have to be normalized again before rendering.
    pub fn cleanup(&mut self) {
        for slot in &mut self.lights {
            let drop = slot
                .as_ref()
                .map_or(false, |l| l.region.is_none() || !l.is_visible());
            if drop {
                if let Some(light) = slot.take() {
                    penumbra_debug!("Dropping light '{}'", light.name);
                }
            }
        }
        self.active_count = 0;
    }

    pub fn clear(&mut self) {
        self.lights.clear();
        self.active_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::LightRegistry;
    use crate::{
        lights::{Light, LightSamplePoint},
        math::{Normal, Point3},
        world::RegionId,
    };

    fn light(name: &str, region: Option<usize>) -> Light {
        Light::new(name, region.map(RegionId), Point3::zeros(), 1.0)
    }

    #[test]
    fn handles_are_stable() {
        let mut registry = LightRegistry::new();
        let a = registry.register(light("a", Some(0)));
        let b = registry.register(light("b", Some(1)));
        let c = registry.register(light("c", Some(2)));
        assert_eq!(registry.len(), 3);

        let removed = registry.unregister(b).unwrap();
        assert_eq!(removed.name, "b");
        assert!(registry.unregister(b).is_none());
        assert!(registry.get(b).is_none());
        assert_eq!(registry.get(a).unwrap().name, "a");
        assert_eq!(registry.get(c).unwrap().name, "c");

        let order: Vec<_> = registry.iter().map(|(h, l)| (h, l.name.clone())).collect();
        assert_eq!(order, vec![(a, "a".to_string()), (c, "c".to_string())]);
        assert!(registry.is_light_region(RegionId(2)));
        assert!(!registry.is_light_region(RegionId(1)));
    }

    #[test]
    fn max_sample_count() {
        let mut registry = LightRegistry::new();
        assert_eq!(registry.max_sample_count(), 0);
        registry.register(light("a", Some(0)));
        let b = registry.register(light("b", Some(1)));
        let sample = LightSamplePoint {
            p: Point3::zeros(),
            n: Normal::zeros(),
        };
        for _ in 0..5 {
            registry.get_mut(b).unwrap().push_sample(sample).unwrap();
        }
        assert_eq!(registry.max_sample_count(), 5);
    }

    #[test]
    fn cleanup() {
        let mut registry = LightRegistry::new();
        let kept = registry.register(light("kept", Some(0)));
        registry.register(light("implicit", None));
        let mut hidden = light("hidden", Some(1));
        hidden.set_invisible(true);
        registry.register(hidden);
        registry.set_active_count(3);
        assert_eq!(registry.active_count(), 3);

        registry.cleanup();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(kept).is_some());
        assert_eq!(registry.active_count(), 0);

        registry.clear();
        assert!(registry.is_empty());
    }
}
