//! Drifting ghosts: two sprites gliding diagonally up and left

use crate::effect::ParticleEffect;
use crate::particle::{Particle, ParticleSystem};
use crate::rand::EffectRng;
use sleet_core::{Result, Vec2};
use sleet_render::{Canvas, DrawableCatalog, DrawableHandle, Viewport};

/// Size-tiered ghost drawables, smaller first
const GHOST_DRAWABLES: [&str; 2] = ["ghost0", "ghost1"];

/// Fixed population size
const GHOST_COUNT: usize = 2;

/// Scales a sampled tier speed into pixels per second of drift
const GHOST_DRIFT_SCALE: f32 = 50.0;

/// One ghost. The drift vector is fixed for the ghost's entire lifetime,
/// never re-randomized at respawn.
pub struct GhostParticle {
    pos: Vec2,
    drawable: DrawableHandle,
    drift_speed: f32,
}

impl GhostParticle {
    pub fn drift_speed(&self) -> f32 {
        self.drift_speed
    }
}

impl Particle for GhostParticle {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn drawable(&self) -> &DrawableHandle {
        &self.drawable
    }
}

/// A pair of ghosts drifting diagonally up-and-left forever.
pub struct GhostParticleSystem {
    system: ParticleSystem<GhostParticle>,
    rng: EffectRng,
}

impl GhostParticleSystem {
    /// Resolve the two ghost drawables and seed the fixed pair.
    pub fn new(catalog: &DrawableCatalog, viewport: Viewport, mut rng: EffectRng) -> Result<Self> {
        let drawables = [
            catalog.resolve(GHOST_DRAWABLES[0])?,
            catalog.resolve(GHOST_DRAWABLES[1])?,
        ];

        let mut system = ParticleSystem::new(viewport)?;
        system.set_virtual_width(viewport.width * 2.0)?;

        for _ in 0..GHOST_COUNT {
            let pos = Vec2::new(
                rng.range(0.0, system.virtual_width()),
                rng.range(0.0, viewport.height),
            );
            // Both ghosts may roll the same sprite; the overlap is part
            // of the effect.
            let tier = rng.index(drawables.len());
            let drift_speed = rng.tier_speed(tier) * GHOST_DRIFT_SCALE;
            system.push(GhostParticle {
                pos,
                drawable: drawables[tier].clone(),
                drift_speed,
            });
        }
        println!("[particles] Spawned {GHOST_COUNT} ghost(s)");

        Ok(Self { system, rng })
    }

    /// The current ghost pair, in draw order
    pub fn particles(&self) -> &[GhostParticle] {
        self.system.particles()
    }
}

impl ParticleEffect for GhostParticleSystem {
    fn record_tag(&self) -> &'static str {
        "particles-ghosts"
    }

    fn layer(&self) -> i32 {
        self.system.layer()
    }

    fn set_layer(&mut self, layer: i32) {
        self.system.set_layer(layer);
    }

    fn update(&mut self, dt: f32) {
        let viewport_height = self.system.viewport().height;
        let virtual_width = self.system.virtual_width();
        let virtual_height = self.system.virtual_height();

        for ghost in self.system.particles_mut() {
            ghost.pos.y -= ghost.drift_speed * dt;
            ghost.pos.x -= ghost.drift_speed * dt;
            // Drift never increases y, so this catches only ghosts that
            // are already below the viewport (seeded there or moved by
            // the host); airborne ghosts keep climbing unwrapped.
            if ghost.pos.y > viewport_height {
                ghost.pos.y %= virtual_height;
                ghost.pos.x = self.rng.range(0.0, virtual_width);
            }
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.system.draw(canvas);
    }
}
