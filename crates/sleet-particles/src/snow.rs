//! Falling snow: size-tiered flakes over a double-width domain

use crate::effect::ParticleEffect;
use crate::particle::{Particle, ParticleSystem};
use crate::rand::EffectRng;
use sleet_core::{Result, Vec2};
use sleet_render::{Canvas, DrawableCatalog, DrawableHandle, Viewport};

/// Size-tiered flake drawables, smallest first
const SNOW_DRAWABLES: [&str; 3] = ["snow0", "snow1", "snow2"];

/// Virtual-width units covered by one flake
const UNITS_PER_FLAKE: f32 = 10.0;

/// Scales a sampled tier speed into pixels per second of fall
const SNOW_GRAVITY: f32 = 10.0;

/// One snowflake. The tier drawable and fall speed are fixed at spawn;
/// only the position mutates afterwards.
#[derive(Debug)]
pub struct SnowParticle {
    pos: Vec2,
    drawable: DrawableHandle,
    fall_speed: f32,
}

impl SnowParticle {
    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }
}

impl Particle for SnowParticle {
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

/// Ambient snowfall.
///
/// Flakes fall straight down at tiered speeds; one that exits the bottom
/// of the viewport reappears at a wrapped depth and a fresh horizontal
/// position, keeping its drawable and speed.
#[derive(Debug)]
pub struct SnowParticleSystem {
    system: ParticleSystem<SnowParticle>,
    rng: EffectRng,
}

impl SnowParticleSystem {
    /// Resolve the three flake drawables and seed the initial population,
    /// one flake per ten units of virtual width.
    pub fn new(catalog: &DrawableCatalog, viewport: Viewport, mut rng: EffectRng) -> Result<Self> {
        let drawables = [
            catalog.resolve(SNOW_DRAWABLES[0])?,
            catalog.resolve(SNOW_DRAWABLES[1])?,
            catalog.resolve(SNOW_DRAWABLES[2])?,
        ];

        let mut system = ParticleSystem::new(viewport)?;
        system.set_virtual_width(viewport.width * 2.0)?;

        let flake_count = (system.virtual_width() / UNITS_PER_FLAKE) as usize;
        for _ in 0..flake_count {
            let pos = Vec2::new(
                rng.range(0.0, system.virtual_width()),
                rng.range(0.0, viewport.height),
            );
            let tier = rng.index(drawables.len());
            let fall_speed = rng.tier_speed(tier) * SNOW_GRAVITY;
            system.push(SnowParticle {
                pos,
                drawable: drawables[tier].clone(),
                fall_speed,
            });
        }
        println!("[particles] Spawned {flake_count} snowflake(s)");

        Ok(Self { system, rng })
    }

    /// The current flake population, in draw order
    pub fn particles(&self) -> &[SnowParticle] {
        self.system.particles()
    }
}

impl ParticleEffect for SnowParticleSystem {
    fn record_tag(&self) -> &'static str {
        "particles-snow"
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

        for flake in self.system.particles_mut() {
            flake.pos.y += flake.fall_speed * dt;
            if flake.pos.y > viewport_height {
                // Exited the bottom: wrapped depth, fresh horizontal spot
                flake.pos.y %= virtual_height;
                flake.pos.x = self.rng.range(0.0, virtual_width);
            }
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.system.draw(canvas);
    }
}
