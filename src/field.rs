use std::num::NonZeroUsize;
use rand::Rng;
use tracing::debug;
use crate::canvas::CanvasConfig;
use crate::engine::Surface;
use crate::sprite::Sprite;

/// The population of flying sprites, in a stable index order.
pub struct SpriteField {
    sprites: Vec<Sprite>,
    image_count: NonZeroUsize,
}

impl SpriteField {
    pub fn new<R: Rng>(count: usize, canvas: &CanvasConfig, image_count: NonZeroUsize, rng: &mut R) -> SpriteField {
        let mut field = SpriteField { sprites: Vec::with_capacity(count), image_count };
        field.resize(count, canvas, rng);
        field
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Grows by appending fresh sprites or shrinks by dropping the tail.
    /// Sprites that stay are left untouched.
    pub fn resize<R: Rng>(&mut self, count: usize, canvas: &CanvasConfig, rng: &mut R) {
        let current = self.sprites.len();
        if count > current {
            let image_count = self.image_count;
            self.sprites.extend((current..count).map(|_| Sprite::new(canvas, image_count, rng)));
        } else {
            self.sprites.truncate(count);
        }
        if count != current {
            debug!(from = current, to = count, "resized sprite field");
        }
    }

    pub fn update_and_render<R: Rng, S: Surface>(
        &mut self,
        speed: f32,
        canvas: &CanvasConfig,
        paused: bool,
        rng: &mut R,
        surface: &mut S,
    ) {
        for sprite in self.sprites.iter_mut() {
            if !paused {
                sprite.advance(speed, canvas, rng);
            }
            let p = sprite.project(canvas);
            surface.draw_sprite(sprite.image(), p.x, p.y, p.size);
        }
    }
}
