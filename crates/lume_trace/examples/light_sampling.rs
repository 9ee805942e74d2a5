//! Example: trace one sample per pixel through a sphere-lit scene.
//!
//! Run with: cargo run --example light_sampling -- [camera.json]
//!
//! The optional JSON file holds a `CameraConfig`; omitted fields use their
//! defaults. Prints a coarse ASCII image of the direct lighting estimate.

use std::env;
use std::error::Error;
use std::fs;
use std::sync::Arc;

use lume_trace::{
    CameraConfig, Color, DiffuseLight, Hittable, HittableList, HittablePdf, Interval, Lambertian,
    Material, MixturePdf, Pdf, Ray, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 24;
const LIGHT_SAMPLES: u32 = 16;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => serde_json::from_str::<CameraConfig>(&fs::read_to_string(path)?)?,
        None => CameraConfig::default()
            .with_position(Vec3::new(0.0, 2.0, 9.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
            .with_lens(35.0, 0.1, 9.0)
            .with_aspect_ratio(WIDTH as f32 / (2 * HEIGHT) as f32),
    };
    let camera = config.build()?;

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.6)));
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.7, 0.2, 0.2)));
    let light = Arc::new(Sphere::new(
        Vec3::new(-1.5, 4.0, 0.0),
        1.0,
        Arc::new(DiffuseLight::new(Color::splat(12.0))),
    )?);

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground)?));
    world.add(Arc::new(Sphere::new(Vec3::new(1.0, 1.0, 0.0), 1.0, red)?));
    world.add(light.clone());

    let mut lights = HittableList::new();
    lights.add(light);

    let mut rng = StdRng::seed_from_u64(0);
    let shades = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    for j in (0..HEIGHT).rev() {
        let row: String = (0..WIDTH)
            .map(|i| {
                let s = (i as f32 + 0.5) / WIDTH as f32;
                let t = (j as f32 + 0.5) / HEIGHT as f32;
                let ray = camera.get_ray(s, t, &mut rng);
                let luminance = direct_light(&ray, &world, &lights, &mut rng).dot(Vec3::splat(1.0 / 3.0));
                let index = (luminance.clamp(0.0, 0.999) * shades.len() as f32) as usize;
                shades[index]
            })
            .collect();
        println!("{row}");
    }

    Ok(())
}

/// Emitted plus one-bounce direct light seen along `ray`.
fn direct_light(ray: &Ray, world: &dyn Hittable, lights: &dyn Hittable, rng: &mut StdRng) -> Color {
    let Some(rec) = world.hit(ray, Interval::from_min(0.001)) else {
        return Color::ZERO;
    };

    let emitted = rec.material.emitted(&rec, rec.u, rec.v, rec.p);
    let Some(srec) = rec.material.scatter(ray, &rec, rng) else {
        return emitted;
    };

    let light_pdf = HittablePdf::new(lights, rec.p);
    let mixture = MixturePdf::new(&*srec.pdf, &light_pdf);

    let mut sum = Color::ZERO;
    for _ in 0..LIGHT_SAMPLES {
        let scattered = Ray::new(rec.p, mixture.generate(rng), ray.time());
        let pdf = mixture.value(scattered.direction());
        if pdf <= 0.0 {
            continue;
        }

        let incoming = world
            .hit(&scattered, Interval::from_min(0.001))
            .map(|hit| hit.material.emitted(&hit, hit.u, hit.v, hit.p))
            .unwrap_or(Color::ZERO);
        sum += srec.attenuation * rec.material.scattering_pdf(ray, &rec, &scattered) * incoming / pdf;
    }

    emitted + sum / LIGHT_SAMPLES as f32
}
