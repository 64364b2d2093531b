#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use penumbra::{
        lights::{Light, LightRegistry},
        math::{Point3, Spectrum},
        world::{ReferenceWorld, Region, RegionId, Transparency},
    };

    use crate::scenes::helpers::{evaluate, floor_point, normalize, slab, CountingWorld};

    fn lamp_scene() -> (ReferenceWorld, RegionId) {
        let mut world = ReferenceWorld::default();
        let lamp = world.add_region(Region::opaque("lamp", slab(1.0, 10.0, 11.0)));
        (world, lamp)
    }

    #[test]
    fn fill_light_shoots_no_rays() {
        let world = CountingWorld::new(ReferenceWorld::default());
        let mut registry = LightRegistry::new();
        let mut light = Light::new("fill", None, Point3::new(0.0, 0.0, 10.0), 0.5);
        light.shadows = 0;
        let handle = registry.register(light);
        normalize(&mut registry, &world);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.fraction[0], 1.0);
        assert_eq!(out.visible[0], Some(handle));
        assert_eq!(out.intensity[0], Spectrum::ones());
        assert_eq!(world.shots(), 0);
    }

    #[test]
    fn filter_is_product_of_transmittances() {
        let (mut world, lamp) = lamp_scene();
        world.add_region(Region::transmissive(
            "pane",
            slab(20.0, 2.0, 2.5),
            Transparency::Transmissive,
            Spectrum::from(0.5),
        ));
        world.add_region(Region::transmissive(
            "tint",
            slab(20.0, 4.0, 4.5),
            Transparency::Procedural,
            Spectrum::new(0.8, 0.4, 1.0),
        ));
        let mut registry = LightRegistry::new();
        registry.register(Light::from_region("lamp", lamp, "", &world).unwrap());
        normalize(&mut registry, &world);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.fraction[0], 1.0);
        let expected = Spectrum::new(0.4, 0.2, 0.5);
        for c in 0..3 {
            assert!(out.intensity[0][c] <= expected[c] + 1e-6);
            assert_abs_diff_eq!(out.intensity[0][c], expected[c], epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_angle_beam_misses_point() {
        for shadows in [1, 4, 16] {
            let (world, lamp) = lamp_scene();
            let mut registry = LightRegistry::new();
            let params = format!("angle=0 target=5,0,0 shadows={}", shadows);
            registry.register(Light::from_region("spot", lamp, &params, &world).unwrap());
            normalize(&mut registry, &world);

            let out = evaluate(&world, &registry, &floor_point());
            assert_eq!(out.fraction[0], 0.0, "shadows={}", shadows);
            assert_eq!(out.visible[0], None);
        }
    }

    #[test]
    fn infinite_light_in_empty_world() {
        let world = ReferenceWorld::default();
        let mut registry = LightRegistry::new();
        let mut sun = Light::new("sun", None, Point3::new(3.0, 0.0, 4.0), 0.0);
        sun.infinite = true;
        sun.shadows = 8;
        registry.register(sun);
        normalize(&mut registry, &world);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.fraction[0], 1.0);
        assert_eq!(out.intensity[0], Spectrum::ones());
        assert_abs_diff_eq!(out.to_light[0].x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(out.to_light[0].z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn preset_samples_behind_wall() {
        let (mut world, lamp) = lamp_scene();
        world.add_region(Region::opaque("wall", slab(20.0, 5.0, 6.0)));

        let points: Vec<String> = (0..16)
            .map(|i| {
                let x = -0.75 + (i % 4) as f32 * 0.5;
                let y = -0.75 + (i / 4) as f32 * 0.5;
                format!("pt={},{},10", x, y)
            })
            .collect();
        let params = format!("shadows=16 {}", points.join(" "));

        let mut registry = LightRegistry::new();
        let handle = registry.register(Light::from_region("lamp", lamp, &params, &world).unwrap());
        normalize(&mut registry, &world);
        assert_eq!(registry.get(handle).unwrap().sample_count(), 16);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.fraction[0], 0.0);
        assert_eq!(out.visible[0], None);
    }

    #[test]
    fn soft_shadow_through_pane() {
        let (mut world, lamp) = lamp_scene();
        world.add_region(Region::transmissive(
            "pane",
            slab(20.0, 3.0, 4.0),
            Transparency::Transmissive,
            Spectrum::from(0.5),
        ));
        let mut registry = LightRegistry::new();
        let handle = registry.register(Light::from_region("lamp", lamp, "shadows=4", &world).unwrap());
        normalize(&mut registry, &world);
        assert!(registry.get(handle).unwrap().sample_count() > 0);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.fraction[0], 1.0);
        assert_eq!(out.visible[0], Some(handle));
        for c in 0..3 {
            assert_abs_diff_eq!(out.intensity[0][c], 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn all_samples_backfacing() {
        let (world, lamp) = lamp_scene();
        let world = CountingWorld::new(world);
        let params = "shadows=4 pn=0,0,10,0,0,1 pn=0.5,0,10,0,0,1 pn=0,0.5,10,0,0,1";
        let mut registry = LightRegistry::new();
        registry.register(Light::from_region("lamp", lamp, params, &world).unwrap());
        normalize(&mut registry, &world);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.fraction[0], 0.0);
        assert_eq!(out.visible[0], None);
        assert_eq!(world.shots(), 0);
    }

    #[test]
    fn outputs_follow_registry_order() {
        let world = ReferenceWorld::default();
        let mut registry = LightRegistry::new();
        let mut handles = Vec::new();
        for z in [10.0, -10.0, 20.0] {
            let mut light = Light::new("light", None, Point3::new(0.0, 0.0, z), 0.1);
            light.shadows = 0;
            handles.push(registry.register(light));
        }
        registry.unregister(handles[0]);
        assert_eq!(normalize(&mut registry, &world), 2);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.len(), 2);
        // Below the floor
        assert_eq!(out.visible[0], None);
        assert_eq!(out.visible[1], Some(handles[2]));
    }

    #[test]
    fn light_count_is_capped() {
        let world = ReferenceWorld::default();
        let mut registry = LightRegistry::new();
        for _ in 0..20 {
            let mut light = Light::new("light", None, Point3::new(0.0, 0.0, 10.0), 0.1);
            light.shadows = 0;
            registry.register(light);
        }
        assert_eq!(normalize(&mut registry, &world), 16);

        let out = evaluate(&world, &registry, &floor_point());
        assert_eq!(out.len(), 16);
        assert!(out.fraction.iter().all(|&f| f == 1.0));
    }
}
