//! Particle capability and the shared wrap-and-draw base

use sleet_core::{Result, SleetError, Vec2};
use sleet_render::{layers, Canvas, DrawableHandle, TransformScope, Viewport};

/// The capability every effect particle exposes to the shared base.
///
/// Particles are plain data records — a position in virtual space plus
/// the drawable the host renders them with. Motion lives in the owning
/// effect, never in the particle.
pub trait Particle {
    fn pos(&self) -> Vec2;
    fn set_pos(&mut self, pos: Vec2);
    fn drawable(&self) -> &DrawableHandle;
}

/// Wrap `v` into `[0, m)`.
///
/// `%` alone yields negative remainders for negative `v`; the correction
/// keeps scrolled-past and long-drifted coordinates on the torus.
pub fn wrap(v: f32, m: f32) -> f32 {
    let r = v % m;
    if r < 0.0 {
        r + m
    } else {
        r
    }
}

/// Shared state and draw transform for one ambient effect.
///
/// Owns the particle collection (insertion order is draw order) and the
/// virtual domain it tiles. The per-frame `update` contract is left to
/// the owning effect; the base only remaps and submits.
#[derive(Debug)]
pub struct ParticleSystem<P: Particle> {
    viewport: Viewport,
    virtual_width: f32,
    virtual_height: f32,
    layer: i32,
    particles: Vec<P>,
}

impl<P: Particle> ParticleSystem<P> {
    /// Create an empty system whose virtual domain covers exactly the
    /// viewport, drawn on the default background band.
    ///
    /// The wrapping domain must be at least as large as what is visible,
    /// so a degenerate viewport is rejected up front.
    pub fn new(viewport: Viewport) -> Result<Self> {
        if !viewport.width.is_finite()
            || !viewport.height.is_finite()
            || viewport.width <= 0.0
            || viewport.height <= 0.0
        {
            return Err(SleetError::InvalidDomain(format!(
                "viewport {}x{} must be positive and finite",
                viewport.width, viewport.height
            )));
        }
        Ok(Self {
            viewport,
            virtual_width: viewport.width,
            virtual_height: viewport.height,
            layer: layers::LAYER_BACKGROUND1,
            particles: Vec::new(),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn virtual_width(&self) -> f32 {
        self.virtual_width
    }

    pub fn virtual_height(&self) -> f32 {
        self.virtual_height
    }

    /// Widen the tiling domain. Anything narrower than the viewport would
    /// show seams, so such widths are rejected.
    pub fn set_virtual_width(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() || width < self.viewport.width {
            return Err(SleetError::InvalidDomain(format!(
                "virtual width {width} must be finite and at least the viewport width {}",
                self.viewport.width
            )));
        }
        self.virtual_width = width;
        Ok(())
    }

    /// Deepen the tiling domain. Same floor as [`set_virtual_width`](Self::set_virtual_width).
    pub fn set_virtual_height(&mut self, height: f32) -> Result<()> {
        if !height.is_finite() || height < self.viewport.height {
            return Err(SleetError::InvalidDomain(format!(
                "virtual height {height} must be finite and at least the viewport height {}",
                self.viewport.height
            )));
        }
        self.virtual_height = height;
        Ok(())
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    pub fn particles(&self) -> &[P] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [P] {
        &mut self.particles
    }

    pub fn push(&mut self, particle: P) {
        self.particles.push(particle);
    }

    /// Remap every particle into wrapped viewport coordinates and submit
    /// one draw call per particle on the configured layer.
    ///
    /// The camera translation is read once, then zeroed for the scope of
    /// the pass so submitted positions land as absolute screen
    /// coordinates. A wrapped coordinate past the viewport edge gets one
    /// virtual extent subtracted, letting a partially visible tile cover
    /// the seam when the domain is not an exact viewport multiple.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let scroll = canvas.translation();
        let mut scope = TransformScope::new(canvas);
        scope.set_translation(Vec2::ZERO);

        for particle in &self.particles {
            let pos = particle.pos();
            let mut x = wrap(pos.x - scroll.x, self.virtual_width);
            let mut y = wrap(pos.y - scroll.y, self.virtual_height);
            if x > self.viewport.width {
                x -= self.virtual_width;
            }
            if y > self.viewport.height {
                y -= self.virtual_height;
            }
            scope.draw(particle.drawable(), Vec2::new(x, y), self.layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleet_render::{DrawableCatalog, DrawList};

    struct Dot {
        pos: Vec2,
        drawable: DrawableHandle,
    }

    impl Particle for Dot {
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

    const VIEWPORT: Viewport = Viewport::new(640.0, 480.0);

    fn system_with_dots(positions: &[(f32, f32)]) -> ParticleSystem<Dot> {
        let mut catalog = DrawableCatalog::new();
        let drawable = catalog.register("dot", 4, 4);

        let mut system = ParticleSystem::new(VIEWPORT).unwrap();
        system.set_virtual_width(1280.0).unwrap();
        for &(x, y) in positions {
            system.push(Dot {
                pos: Vec2::new(x, y),
                drawable: drawable.clone(),
            });
        }
        system
    }

    #[test]
    fn wrap_stays_in_range() {
        for v in [-10000.0, -481.0, -480.0, -1.0, 0.0, 1.0, 479.0, 480.0, 481.0, 10000.0] {
            let r = wrap(v, 480.0);
            assert!(r >= 0.0 && r < 480.0, "wrap({v}) = {r}");
        }
    }

    #[test]
    fn wrap_corrects_negative_remainders() {
        assert_eq!(wrap(-10.0, 480.0), 470.0);
        assert_eq!(wrap(-490.0, 480.0), 470.0);
        assert_eq!(wrap(10.0, 480.0), 10.0);
        assert_eq!(wrap(970.0, 480.0), 10.0);
    }

    #[test]
    fn rejects_degenerate_viewport() {
        assert!(ParticleSystem::<Dot>::new(Viewport::new(0.0, 480.0)).is_err());
        assert!(ParticleSystem::<Dot>::new(Viewport::new(640.0, 0.0)).is_err());
        assert!(ParticleSystem::<Dot>::new(Viewport::new(-640.0, 480.0)).is_err());
        assert!(ParticleSystem::<Dot>::new(Viewport::new(f32::NAN, 480.0)).is_err());
    }

    #[test]
    fn rejects_virtual_domain_smaller_than_viewport() {
        let mut system = ParticleSystem::<Dot>::new(VIEWPORT).unwrap();
        assert!(system.set_virtual_width(639.0).is_err());
        assert!(system.set_virtual_height(100.0).is_err());
        assert!(system.set_virtual_width(f32::INFINITY).is_err());

        // Exactly viewport-sized is the smallest legal domain
        assert!(system.set_virtual_width(640.0).is_ok());
        assert!(system.set_virtual_height(480.0).is_ok());
    }

    #[test]
    fn draw_remaps_against_scroll() {
        let system = system_with_dots(&[(100.0, 200.0)]);
        let mut list = DrawList::new();
        list.set_translation(Vec2::new(30.0, 20.0));
        system.draw(&mut list);

        let commands = list.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].pos, Vec2::new(70.0, 180.0));
    }

    #[test]
    fn seam_correction_pulls_back_one_tile() {
        // Wrapped x of 1000 exceeds the 640 viewport, so one virtual
        // width is subtracted and the dot sits off the left edge.
        let system = system_with_dots(&[(1000.0, 100.0)]);
        let mut list = DrawList::new();
        system.draw(&mut list);

        assert_eq!(list.commands()[0].pos, Vec2::new(-280.0, 100.0));
    }

    #[test]
    fn negative_scroll_wraps_correctly() {
        let system = system_with_dots(&[(10.0, 10.0)]);
        let mut list = DrawList::new();
        list.set_translation(Vec2::new(-50.0, -100.0));
        system.draw(&mut list);

        // 10 - (-50) = 60; 10 - (-100) = 110
        assert_eq!(list.commands()[0].pos, Vec2::new(60.0, 110.0));
    }

    #[test]
    fn cameras_one_domain_apart_draw_identically() {
        let positions = [(0.0, 0.0), (123.0, 45.0), (639.0, 479.0), (1200.0, 300.0)];
        let system = system_with_dots(&positions);

        let mut near = DrawList::new();
        near.set_translation(Vec2::new(123.0, 45.0));
        system.draw(&mut near);

        let mut far = DrawList::new();
        far.set_translation(Vec2::new(123.0 + 1280.0, 45.0 + 480.0));
        system.draw(&mut far);

        for (a, b) in near.commands().iter().zip(far.commands()) {
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn draw_leaves_no_translation_behind() {
        let system = system_with_dots(&[(5.0, 5.0), (700.0, 80.0)]);
        let mut list = DrawList::new();
        list.set_translation(Vec2::new(9.0, 9.0));
        system.draw(&mut list);

        assert_eq!(list.translation(), Vec2::new(9.0, 9.0));
    }

    #[test]
    fn draw_submits_in_insertion_order_on_layer() {
        let mut system = system_with_dots(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        system.set_layer(layers::LAYER_FOREGROUND);

        let mut list = DrawList::new();
        system.draw(&mut list);

        let xs: Vec<f32> = list.commands().iter().map(|c| c.pos.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert!(list.commands().iter().all(|c| c.layer == layers::LAYER_FOREGROUND));
    }

    #[test]
    fn default_domain_and_layer_follow_viewport() {
        let system = ParticleSystem::<Dot>::new(VIEWPORT).unwrap();
        assert_eq!(system.virtual_width(), 640.0);
        assert_eq!(system.virtual_height(), 480.0);
        assert_eq!(system.layer(), layers::LAYER_BACKGROUND1);
    }
}
