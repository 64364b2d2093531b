use std::path::PathBuf;
use std::time::Instant;

use penumbra::{
    expect,
    lights::{make_implicit_lights, normalize_lights, Light, LightRegistry},
    logging::setup_logger,
    math::{transforms::translation, Bounds3, Normal, Point3, Spectrum, Vec3},
    shadows::{par_light_obscuration, SurfacePoint},
    world::{ReferenceWorld, Region, RegionId, Solid, Transparency},
    Settings,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const GRID_SIZE: usize = 256;

// Returns the world and its light regions with their parameters
fn build_world() -> (ReferenceWorld, Vec<(RegionId, &'static str)>) {
    let mut world = ReferenceWorld::default();
    let lamp = world.add_region(Region::opaque(
        "lamp",
        Solid::Box(Bounds3::new(
            Point3::new(-2.0, -2.0, 30.0),
            Point3::new(2.0, 2.0, 31.0),
        )),
    ));
    let globe = world.add_region(Region::opaque(
        "globe",
        Solid::Sphere {
            center: Point3::new(-20.0, 10.0, 25.0),
            radius: 1.5,
        },
    ));
    world.add_region(Region::opaque(
        "pillar",
        Solid::Box(Bounds3::new(
            Point3::new(-3.0, -3.0, 0.0),
            Point3::new(3.0, 3.0, 12.0),
        )),
    ));
    world.add_region(Region::transmissive(
        "window",
        Solid::Box(Bounds3::new(
            Point3::new(5.0, -20.0, 8.0),
            Point3::new(20.0, 20.0, 8.5),
        )),
        Transparency::Transmissive,
        Spectrum::new(0.7, 0.8, 0.9),
    ));
    world.add_region(Region::transmissive(
        "haze",
        Solid::Box(Bounds3::new(
            Point3::new(-50.0, -50.0, 15.0),
            Point3::new(50.0, 50.0, 20.0),
        )),
        Transparency::Air,
        Spectrum::from(0.95),
    ));

    let lights = vec![
        (lamp, "bright=1000 shadows=16"),
        (globe, "bright=300 shadows=4 angle=60 target=0,0,0"),
    ];
    (world, lights)
}

fn build_lights(world: &ReferenceWorld, lights: &[(RegionId, &str)]) -> LightRegistry {
    let mut registry = LightRegistry::new();
    for &(region, params) in lights {
        let name = world.region(region).map_or("light", |r| r.name.as_str());
        let light = expect!(
            Light::from_region(name, region, params, world),
            "Failed to set up light"
        );
        registry.register(light);
    }
    make_implicit_lights(&mut registry, 1, &translation(Vec3::new(0.0, 0.0, 50.0)));
    registry
}

fn floor_grid() -> Vec<SurfacePoint> {
    let step = 60.0 / GRID_SIZE as f32;
    (0..GRID_SIZE * GRID_SIZE)
        .map(|i| SurfacePoint {
            p: Point3::new(
                -30.0 + (i % GRID_SIZE) as f32 * step,
                -30.0 + (i / GRID_SIZE) as f32 * step,
                0.0,
            ),
            n: Some(Normal::new(0.0, 0.0, 1.0)),
            transmit: 0.0,
        })
        .collect()
}

fn main() {
    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => expect!(Settings::load(&path), "Failed to load settings"),
        None => Settings::default(),
    };
    if let Err(why) = setup_logger(settings.log_level, None) {
        panic!("{}", why);
    };

    let (world, lights) = build_world();
    let mut registry = build_lights(&world, &lights);

    let start = Instant::now();
    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let light_count = expect!(
        normalize_lights(&mut registry, &world, &settings, &mut rng),
        "Failed to normalize lights"
    );
    println!(
        "Setup of {} lights with {} sample points took {:4.1} ms",
        light_count,
        registry.max_sample_count(),
        start.elapsed().as_secs_f64() * 1e3
    );

    let surfaces = floor_grid();
    println!(
        "Evaluating {} points on {} threads",
        surfaces.len(),
        rayon::current_num_threads().min(num_cpus::get())
    );

    let start = Instant::now();
    let results = par_light_obscuration(&world, &registry, &settings, &surfaces);
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_point = (elapsed_ns as f64) * 1e-3 / (surfaces.len() as f64);
    println!(
        "Obscuration took {:4.1} ms total, {:0.4} us per point",
        elapsed_ms, us_per_point
    );

    for (i, (_, light)) in registry.iter().take(light_count).enumerate() {
        let mean_fraction =
            results.iter().map(|out| out.fraction[i]).sum::<f32>() / results.len() as f32;
        println!("  {}: mean visible fraction {:0.3}", light.name, mean_fraction);
    }
}
