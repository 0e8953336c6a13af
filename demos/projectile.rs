//! Plot a projectile's flight onto a canvas and print it as PPM.
//!
//! Run with `cargo run --example projectile > flight.ppm`. An optional
//! argument is parsed as encoder parameters, e.g. `wrap=60`.

use radiant::physics::{Environment, Projectile};
use radiant::{point, vector, Canvas, Color, PpmConfig, PpmEncoder};

const WIDTH: usize = 900;
const HEIGHT: usize = 550;

fn main() -> anyhow::Result<()> {
    let parameters = std::env::args().nth(1).unwrap_or_default();
    let encoder = PpmEncoder::new(PpmConfig::from_parameters(&parameters)?);

    let start = Projectile::new(point(0.0, 1.0, 0.0), vector(1.0, 1.8, 0.0).normalize() * 11.25);
    let environment = Environment::new(vector(0.0, -0.1, 0.0), vector(-0.01, 0.0, 0.0));

    let mut canvas = Canvas::try_new(WIDTH, HEIGHT)?;
    let red = Color::new(1.0, 0.0, 0.0);
    let mut ticks = 0usize;

    for state in environment.trajectory(start) {
        // canvas y grows downward
        let x = state.position.x as i64;
        let y = HEIGHT as i64 - state.position.y as i64;
        canvas.write_pixel(x, y, red);
        ticks += 1;
    }

    eprintln!("projectile landed after {ticks} ticks");
    print!("{}", encoder.encode(&canvas));
    Ok(())
}
