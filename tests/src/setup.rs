#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use penumbra::{
        lights::{make_implicit_lights, normalize_lights, Light, LightRegistry},
        math::{transforms::translation, Bounds3, Point3, Spectrum, Vec3},
        shadows::par_light_obscuration,
        world::{ReferenceWorld, Region, Solid},
        SetupError, Settings,
    };
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::scenes::helpers::{floor_point, slab};

    #[test]
    fn scene_from_settings() {
        let settings = Settings::from_yaml(
            "ambient_intensity: 0.0\nsample_batch_size: 16\nmax_lights: 2\nseed: 17\n",
        )
        .unwrap();

        let mut world = ReferenceWorld::default();
        let mut lamp = Region::opaque(
            "lamp",
            Solid::Sphere {
                center: Point3::new(0.0, 0.0, 10.0),
                radius: 1.0,
            },
        );
        lamp.color = Some(Spectrum::new(1.0, 0.9, 0.8));
        let lamp = world.add_region(lamp);
        let spot = world.add_region(Region::opaque("spot", slab(0.5, 20.0, 21.0)));

        let mut registry = LightRegistry::new();
        let lamp = registry.register(Light::from_region("lamp", lamp, "b=200 s=2", &world).unwrap());
        let spot = registry.register(
            Light::from_region("spot", spot, "b=100 a=30 t=0,0,0 invisible=1", &world).unwrap(),
        );
        make_implicit_lights(&mut registry, 3, &translation(Vec3::new(0.0, 0.0, 5.0)));

        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let count = normalize_lights(&mut registry, &world, &settings, &mut rng).unwrap();
        assert_eq!(count, 2);

        let lamp_light = registry.get(lamp).unwrap();
        assert_eq!(lamp_light.color, Spectrum::new(1.0, 0.9, 0.8));
        assert_eq!(lamp_light.sample_count(), 2 * settings.sample_batch_size);
        // Ambient doesn't leave any headroom
        assert_abs_diff_eq!(lamp_light.fraction, 1.0);
        assert_abs_diff_eq!(registry.get(spot).unwrap().fraction, 0.5);

        let surfaces = vec![floor_point(); 3];
        let results = par_light_obscuration(&world, &registry, &settings, &surfaces);
        assert_eq!(results.len(), 3);
        for out in &results {
            assert_eq!(out.len(), 2);
            assert_eq!(out.visible[0], Some(lamp));
            assert_eq!(out.fraction[0], 1.0);
            assert_eq!(out.visible[1], Some(spot));
            assert_eq!(out.fraction[1], 1.0);
        }

        // Implicit and invisible lights don't outlive the view
        registry.cleanup();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(lamp).is_some());
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn unbounded_light_is_rejected() {
        let mut world = ReferenceWorld::default();
        let sky = world.add_region(Region::opaque(
            "sky",
            Solid::Box(Bounds3::new(
                Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, 100.0),
                Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            )),
        ));
        match Light::from_region("sky", sky, "", &world) {
            Err(SetupError::UnboundedLight(name)) => assert_eq!(name, "sky"),
            other => panic!("Expected an unbounded light error, got {:?}", other.map(|l| l.name)),
        }
    }
}
