//! Single-step projectile integrator.

use crate::numerics::Tuple;

/// A point mass with a position (point) and velocity (vector).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

impl Projectile {
    pub fn new(position: Tuple, velocity: Tuple) -> Self {
        Self { position, velocity }
    }
}

/// Constant accelerations applied on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

impl Environment {
    pub fn new(gravity: Tuple, wind: Tuple) -> Self {
        Self { gravity, wind }
    }

    /// Advance `projectile` by one unit of time.
    pub fn tick(&self, projectile: &Projectile) -> Projectile {
        Projectile {
            position: projectile.position + projectile.velocity,
            velocity: projectile.velocity + self.gravity + self.wind,
        }
    }

    /// Successive states after each tick, ending with the first state whose
    /// `y` is at or below zero.
    pub fn trajectory(&self, start: Projectile) -> Trajectory<'_> {
        Trajectory {
            environment: self,
            current: start,
            landed: false,
        }
    }
}

/// Iterator returned by [`Environment::trajectory`].
pub struct Trajectory<'a> {
    environment: &'a Environment,
    current: Projectile,
    landed: bool,
}

impl Iterator for Trajectory<'_> {
    type Item = Projectile;

    fn next(&mut self) -> Option<Projectile> {
        if self.landed {
            return None;
        }
        self.current = self.environment.tick(&self.current);
        self.landed = self.current.position.y <= 0.0;
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::{point, vector};

    fn environment() -> Environment {
        Environment::new(vector(0.0, -0.1, 0.0), vector(-0.01, 0.0, 0.0))
    }

    #[test]
    fn test_tick_keeps_point_and_vector_kinds() {
        let p = Projectile::new(point(0.0, 1.0, 0.0), vector(1.0, 1.0, 0.0));
        let next = environment().tick(&p);

        assert_eq!(next.position, point(1.0, 2.0, 0.0));
        assert_eq!(next.velocity, vector(0.99, 0.9, 0.0));
        assert!(next.position.is_point());
        assert!(next.velocity.is_vector());
    }

    #[test]
    fn test_trajectory_ends_on_landing() {
        let start = Projectile::new(point(0.0, 1.0, 0.0), vector(1.0, 1.0, 0.0).normalize());
        let states: Vec<Projectile> = environment().trajectory(start).collect();

        let (last, flight) = states.split_last().unwrap();
        assert!(last.position.y <= 0.0);
        assert!(flight.iter().all(|p| p.position.y > 0.0));
        // wind pushes against the initial x velocity
        assert!(flight.windows(2).all(|w| w[1].velocity.x < w[0].velocity.x));
    }
}
