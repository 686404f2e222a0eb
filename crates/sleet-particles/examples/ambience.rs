//! Drive all three ambient effects headlessly over a scrolling camera.
//!
//! Run with: cargo run -p sleet-particles --example ambience

use sleet_core::Vec2;
use sleet_particles::{
    CloudParticleSystem, EffectRng, GhostParticleSystem, ParticleEffect, SnowParticleSystem,
};
use sleet_render::{Canvas, DrawList, DrawableCatalog, Viewport};
use sleet_scene::{load_ambience_string, save_ambience_string, AmbienceFile};

const AMBIENCE: &str = r#"
[ambience]
name = "winter night"

[particles-snow]
layer = -100

[particles-clouds]
layer = -300
"#;

fn main() {
    let viewport = Viewport::new(640.0, 480.0);

    // A real host registers these after decoding the images with its own
    // texture system; dimensions are all the effects ever carry.
    let mut catalog = DrawableCatalog::new();
    catalog.register("snow0", 8, 8);
    catalog.register("snow1", 12, 12);
    catalog.register("snow2", 16, 16);
    catalog.register("ghost0", 32, 32);
    catalog.register("ghost1", 48, 48);
    catalog.register("cloud", 128, 64);

    let mut effects: Vec<Box<dyn ParticleEffect>> = vec![
        Box::new(
            SnowParticleSystem::new(&catalog, viewport, EffectRng::new(1)).expect("snow effect"),
        ),
        Box::new(
            GhostParticleSystem::new(&catalog, viewport, EffectRng::new(2)).expect("ghost effect"),
        ),
        Box::new(
            CloudParticleSystem::new(&catalog, viewport, EffectRng::new(3)).expect("cloud effect"),
        ),
    ];

    // Apply persisted layer settings; effects without a record keep
    // their compiled-in defaults.
    let ambience = load_ambience_string(AMBIENCE).expect("parse ambience");
    for effect in &mut effects {
        if let Some(record) = ambience.record(effect.record_tag()) {
            effect.apply_record(record);
        }
    }

    // Two seconds of frames under a rightward-scrolling camera.
    let mut canvas = DrawList::new();
    let dt = 1.0 / 60.0;
    for frame in 0..120u32 {
        canvas.set_translation(Vec2::new(frame as f32 * 4.0, 0.0));
        canvas.clear();
        for effect in &mut effects {
            effect.update(dt);
            effect.draw(&mut canvas);
        }
    }
    println!(
        "Final frame submitted {} draw call(s) across {} effect layer(s)",
        canvas.commands().len(),
        effects.len()
    );

    // Write the adjusted layers back out.
    let mut saved = AmbienceFile::new("winter night");
    for effect in &effects {
        saved.set_record(effect.record_tag(), effect.to_record());
    }
    println!("{}", save_ambience_string(&saved).expect("serialize ambience"));
}
