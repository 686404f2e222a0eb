//! Drifting clouds: a fixed band moving slowly leftward forever

use crate::effect::ParticleEffect;
use crate::particle::{Particle, ParticleSystem};
use crate::rand::EffectRng;
use sleet_core::{Result, Vec2};
use sleet_render::{Canvas, DrawableCatalog, DrawableHandle, Viewport};

/// The single cloud drawable
const CLOUD_DRAWABLE: &str = "cloud";

/// Width of the cloud band's virtual domain. Not viewport-relative:
/// construction fails for viewports wider than this.
const CLOUD_VIRTUAL_WIDTH: f32 = 2000.0;

/// Fixed population size
const CLOUD_COUNT: usize = 15;

/// One cloud. Stored x is never wrapped in `update`; it drifts
/// unboundedly negative and the draw-time remap absorbs any magnitude.
#[derive(Debug)]
pub struct CloudParticle {
    pos: Vec2,
    drawable: DrawableHandle,
    drift_speed: f32,
}

impl CloudParticle {
    /// Horizontal speed; negative in practice, so clouds move left
    pub fn drift_speed(&self) -> f32 {
        self.drift_speed
    }
}

impl Particle for CloudParticle {
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

/// A band of clouds drifting horizontally with no vertical motion and
/// no respawn rule.
#[derive(Debug)]
pub struct CloudParticleSystem {
    system: ParticleSystem<CloudParticle>,
}

impl CloudParticleSystem {
    /// Resolve the cloud drawable and scatter the fixed population over
    /// the 2000-unit band.
    pub fn new(catalog: &DrawableCatalog, viewport: Viewport, mut rng: EffectRng) -> Result<Self> {
        let drawable = catalog.resolve(CLOUD_DRAWABLE)?;

        let mut system = ParticleSystem::new(viewport)?;
        system.set_virtual_width(CLOUD_VIRTUAL_WIDTH)?;

        for _ in 0..CLOUD_COUNT {
            let pos = Vec2::new(
                rng.range(0.0, system.virtual_width()),
                rng.range(0.0, system.virtual_height()),
            );
            let drift_speed = -(25.0 + rng.range(0.0, 30.0));
            system.push(CloudParticle {
                pos,
                drawable: drawable.clone(),
                drift_speed,
            });
        }
        println!("[particles] Spawned {CLOUD_COUNT} cloud(s)");

        Ok(Self { system })
    }

    /// The current cloud band, in draw order
    pub fn particles(&self) -> &[CloudParticle] {
        self.system.particles()
    }
}

impl ParticleEffect for CloudParticleSystem {
    fn record_tag(&self) -> &'static str {
        "particles-clouds"
    }

    fn layer(&self) -> i32 {
        self.system.layer()
    }

    fn set_layer(&mut self, layer: i32) {
        self.system.set_layer(layer);
    }

    fn update(&mut self, dt: f32) {
        for cloud in self.system.particles_mut() {
            cloud.pos.x += cloud.drift_speed * dt;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.system.draw(canvas);
    }
}
