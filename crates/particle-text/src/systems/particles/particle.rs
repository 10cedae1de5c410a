//! A single text particle and the per-frame force model.

use glam::Vec2;

use super::rng::Rng;
use crate::api::config::ParticleEffect;
use crate::core::mode::Mode;

/// One sampled ink point and its motion state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Rest position from the last sample. Never changes after seeding.
    pub origin: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Escape vector for the current disperse episode (explode effect).
    pub explode_velocity: Vec2,
}

impl Particle {
    /// Velocity multiplier applied every frame, in every mode.
    pub const DAMPING: f32 = 0.9;
    /// Spring constant toward origin for the spread effect.
    pub const SPREAD_SPRING: f32 = 0.5;
    /// Per-axis jitter amplitude while spreading.
    pub const SPREAD_JITTER: f32 = 1.0;
    /// Spring constant toward origin for the explode effect.
    pub const EXPLODE_SPRING: f32 = 0.01;
    /// Fraction of the escape vector added each frame while exploding.
    pub const EXPLODE_THRUST: f32 = 0.1;
    /// Escape speed range, drawn once per disperse episode.
    pub const EXPLODE_SPEED: (f32, f32) = (2.0, 7.0);

    /// A particle at rest on its origin.
    pub fn at(origin: Vec2) -> Self {
        Particle {
            origin,
            position: origin,
            velocity: Vec2::ZERO,
            explode_velocity: Vec2::ZERO,
        }
    }

    /// Force for this frame under the given effect and mode.
    pub fn driving_force(&self, effect: ParticleEffect, mode: Mode, rng: &mut Rng) -> Vec2 {
        match (effect, mode) {
            (_, Mode::Stop) => Vec2::ZERO,
            (ParticleEffect::Spread, Mode::Gather) => (self.origin - self.position) * Self::SPREAD_SPRING,
            (ParticleEffect::Spread, Mode::Disperse) => Vec2::new(
                rng.range(-Self::SPREAD_JITTER, Self::SPREAD_JITTER),
                rng.range(-Self::SPREAD_JITTER, Self::SPREAD_JITTER),
            ),
            (ParticleEffect::Explode, Mode::Gather) => (self.origin - self.position) * Self::EXPLODE_SPRING,
            (ParticleEffect::Explode, Mode::Disperse) => self.explode_velocity * Self::EXPLODE_THRUST,
        }
    }

    /// Add force, damp, then move. Damping runs even with zero force.
    pub fn integrate(&mut self, force: Vec2) {
        self.velocity += force;
        self.velocity *= Self::DAMPING;
        self.position += self.velocity;
    }

    /// Point the escape vector from `center` through the origin with a fresh random speed.
    pub fn aim_away_from(&mut self, center: Vec2, rng: &mut Rng) {
        let offset = self.origin - center;
        let angle = offset.y.atan2(offset.x);
        let speed = rng.range(Self::EXPLODE_SPEED.0, Self::EXPLODE_SPEED.1);
        self.explode_velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_at_rest() {
        let p = Particle::at(Vec2::new(8.0, 12.0));
        assert_eq!(p.position, p.origin);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.explode_velocity, Vec2::ZERO);
    }

    #[test]
    fn stop_has_no_force() {
        let mut rng = Rng::new(1);
        let mut p = Particle::at(Vec2::ZERO);
        p.position = Vec2::new(50.0, 50.0);
        p.explode_velocity = Vec2::new(3.0, 3.0);
        for effect in [ParticleEffect::Spread, ParticleEffect::Explode] {
            assert_eq!(p.driving_force(effect, Mode::Stop, &mut rng), Vec2::ZERO);
        }
    }

    #[test]
    fn gather_springs_toward_origin() {
        let mut rng = Rng::new(1);
        let mut p = Particle::at(Vec2::new(10.0, 10.0));
        p.position = Vec2::new(20.0, 6.0);
        assert_eq!(
            p.driving_force(ParticleEffect::Spread, Mode::Gather, &mut rng),
            Vec2::new(-5.0, 2.0)
        );
        let f = p.driving_force(ParticleEffect::Explode, Mode::Gather, &mut rng);
        assert!((f - Vec2::new(-0.1, 0.04)).length() < 1e-6);
    }

    #[test]
    fn explode_disperse_uses_escape_vector() {
        let mut rng = Rng::new(1);
        let mut p = Particle::at(Vec2::ZERO);
        p.explode_velocity = Vec2::new(4.0, -2.0);
        let f = p.driving_force(ParticleEffect::Explode, Mode::Disperse, &mut rng);
        assert!((f - Vec2::new(0.4, -0.2)).length() < 1e-6);
    }

    #[test]
    fn spread_disperse_jitter_is_bounded() {
        let mut rng = Rng::new(5);
        let p = Particle::at(Vec2::ZERO);
        for _ in 0..1000 {
            let f = p.driving_force(ParticleEffect::Spread, Mode::Disperse, &mut rng);
            assert!(f.x >= -1.0 && f.x < 1.0);
            assert!(f.y >= -1.0 && f.y < 1.0);
        }
    }

    #[test]
    fn integrate_damps_before_moving() {
        let mut p = Particle::at(Vec2::ZERO);
        p.velocity = Vec2::new(10.0, 0.0);
        p.integrate(Vec2::new(0.0, 10.0));
        assert!((p.velocity - Vec2::new(9.0, 9.0)).length() < 1e-6);
        assert!((p.position - Vec2::new(9.0, 9.0)).length() < 1e-6);
    }

    #[test]
    fn aim_points_away_from_center() {
        let mut rng = Rng::new(3);
        let mut p = Particle::at(Vec2::new(30.0, 10.0));
        p.aim_away_from(Vec2::new(20.0, 10.0), &mut rng);
        let speed = p.explode_velocity.length();
        assert!(speed >= 2.0 && speed < 7.0 + 1e-4);
        assert!(p.explode_velocity.x > 0.0);
        assert!(p.explode_velocity.y.abs() < 1e-5);
    }
}
