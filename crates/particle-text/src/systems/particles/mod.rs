//! Particle field: the live particle set plus mode and style.
//!
//! `ParticleField` is the simulator facade. Hosts reseed it from a sampled
//! topology, call [`ParticleField::advance_mode`] on the mode period and
//! [`ParticleField::step`] once per frame, then draw its [`DrawList`].

mod particle;
mod rng;

pub use particle::Particle;
pub use rng::Rng;

use glam::{UVec2, Vec2};

use crate::api::config::{ParticleConfig, SurfaceSize};
use crate::core::mode::{Mode, ModeCycle};
use crate::renderer::instance::{DrawCommand, DrawList};

/// Milliseconds between mode advances.
pub const MODE_PERIOD_MS: f32 = 1500.0;

pub struct ParticleField {
    pub particles: Vec<Particle>,
    config: ParticleConfig,
    surface: SurfaceSize,
    modes: ModeCycle,
    rng: Rng,
    draw_list: DrawList,
}

impl ParticleField {
    /// Create an empty field with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        ParticleField {
            particles: Vec::new(),
            config: ParticleConfig::default(),
            surface: SurfaceSize::default(),
            modes: ModeCycle::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
            draw_list: DrawList::new(),
        }
    }

    /// Replace the particle set and style wholesale. Mode is untouched.
    pub fn reseed(&mut self, topology: &[UVec2], config: ParticleConfig, surface: SurfaceSize) {
        self.particles.clear();
        self.particles
            .extend(topology.iter().map(|p| Particle::at(p.as_vec2())));
        self.config = config;
        self.surface = surface;
        self.draw_list.clear();
        log::debug!(
            "reseeded {} particles on {}x{} ({:?}, {:?})",
            self.particles.len(),
            surface.width,
            surface.height,
            self.config.effect,
            self.config.shape,
        );
    }

    /// Advance to the next mode. Entering disperse re-aims every escape vector.
    pub fn advance_mode(&mut self) -> Mode {
        let mode = self.modes.advance();
        if mode == Mode::Disperse {
            let center = self.surface.center();
            for p in &mut self.particles {
                p.aim_away_from(center, &mut self.rng);
            }
        }
        log::debug!("mode -> {}", mode.as_str());
        mode
    }

    /// Run one frame: apply forces, damp, integrate, and rebuild the draw list.
    pub fn step(&mut self) {
        let mode = self.modes.current();
        let effect = self.config.effect;
        let (shape, size) = (self.config.shape, self.config.size);

        self.draw_list.clear();
        for p in &mut self.particles {
            let force = p.driving_force(effect, mode, &mut self.rng);
            p.integrate(force);
            self.draw_list.push(DrawCommand::for_shape(shape, p.position, size));
        }
        self.draw_list.rebuild_instances();
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn center(&self) -> Vec2 {
        self.surface.center()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
