//! End-to-end checks of the per-sample pipeline: camera ray, scene hit,
//! light + material importance sampling.

use lume_trace::{
    CameraConfig, Color, DiffuseLight, Hittable, HittableList, HittablePdf, Interval, Lambertian,
    Material, MixturePdf, Pdf, Ray, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Scene {
    world: HittableList,
    lights: HittableList,
    light: Arc<Sphere>,
}

/// A huge diffuse ground sphere with its top at the origin and a spherical
/// light of radiance `radiance` hovering above it.
fn scene(radiance: f32) -> Scene {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.5)));
    let emitter: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::splat(radiance)));

    let floor = Arc::new(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground).unwrap());
    let light = Arc::new(Sphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0, emitter).unwrap());

    let mut world = HittableList::new();
    world.add(floor);
    world.add(light.clone());

    let mut lights = HittableList::new();
    lights.add(light.clone());

    Scene { world, lights, light }
}

#[test]
fn direct_lighting_estimate_is_unbiased() {
    init_logging();

    let radiance = 9.0;
    let Scene { world, lights, light } = scene(radiance);

    // Look straight down at the ground below the light.
    let camera = CameraConfig::default()
        .with_position(Vec3::new(0.0, 1.5, 0.0), Vec3::ZERO, Vec3::Z)
        .with_lens(30.0, 0.0, 1.5)
        .with_aspect_ratio(1.0)
        .build()
        .unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let ray = camera.get_ray(0.5, 0.5, &mut rng);
    let rec = world.hit(&ray, Interval::from_min(0.001)).expect("camera ray should reach the ground");
    assert!(rec.p.length() < 1e-3);
    assert!((rec.normal - Vec3::Y).length() < 1e-3);

    let srec = rec
        .material
        .scatter(&ray, &rec, &mut rng)
        .expect("ground is diffuse");
    let light_pdf = HittablePdf::new(&lights, rec.p);
    let mixture = MixturePdf::new(&*srec.pdf, &light_pdf);

    let n = 40_000;
    let mut sum = Color::ZERO;
    for _ in 0..n {
        let direction = mixture.generate(&mut rng);
        let pdf = mixture.value(direction);
        if pdf <= 0.0 {
            continue;
        }

        let scattered = Ray::new(rec.p, direction, ray.time());
        let incoming = world
            .hit(&scattered, Interval::from_min(0.001))
            .map(|hit| hit.material.emitted(&hit, hit.u, hit.v, hit.p))
            .unwrap_or(Color::ZERO);

        sum += srec.attenuation * rec.material.scattering_pdf(&ray, &rec, &scattered) * incoming / pdf;
    }
    let estimate = sum / n as f32;

    // A Lambertian point under a sphere light of radiance L on its normal
    // reflects albedo * L * sin^2(theta_max).
    let sin2_theta_max = light.radius().powi(2) / (light.center() - rec.p).length_squared();
    let expected = 0.5 * radiance * sin2_theta_max;

    assert!(
        (estimate.x - expected).abs() / expected < 0.03,
        "estimate {estimate}, expected {expected}"
    );
    assert_eq!(estimate.x, estimate.y);
    assert_eq!(estimate.y, estimate.z);
}

#[test]
fn light_samples_from_ground_reach_the_light() {
    let Scene { world, light, .. } = scene(1.0);
    let mut rng = StdRng::seed_from_u64(8);

    for x in [-2.0, -0.5, 0.0, 0.7, 3.0] {
        let origin = Vec3::new(x, 0.0, 0.25);
        for _ in 0..200 {
            let d = light.random(origin, &mut rng);
            let rec = world
                .hit(&Ray::new_simple(origin, d), Interval::from_min(0.001))
                .expect("sampled direction should hit the scene");
            assert!(((rec.p - light.center()).length() - light.radius()).abs() < 1e-3);
            assert!(light.pdf_value(origin, d) > 0.0);
        }
    }
}

#[test]
fn parallel_sampling_matches_sequential() {
    init_logging();

    let Scene { world, .. } = scene(1.0);
    let camera = CameraConfig::default()
        .with_position(Vec3::new(0.0, 2.0, 8.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.2, 8.0)
        .with_aspect_ratio(4.0 / 3.0)
        .with_shutter(0.0, 1.0)
        .build()
        .unwrap();

    let (width, height) = (32_u32, 24_u32);
    let trace = |index: u32| {
        // One generator per sample keeps results independent of scheduling.
        let mut rng = StdRng::seed_from_u64(index as u64);
        let s = (index % width) as f32 / (width - 1) as f32;
        let t = (index / width) as f32 / (height - 1) as f32;
        let ray = camera.get_ray(s, t, &mut rng);
        assert!((0.0..=1.0).contains(&ray.time()));
        world.hit(&ray, Interval::from_min(0.001)).map(|rec| (rec.t, rec.front_face))
    };

    let parallel: Vec<_> = (0..width * height).into_par_iter().map(trace).collect();
    let sequential: Vec<_> = (0..width * height).map(trace).collect();

    assert_eq!(parallel, sequential);
    assert!(parallel.iter().any(Option::is_some));
}
