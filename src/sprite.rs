use std::num::NonZeroUsize;
use rand::Rng;
use crate::canvas::CanvasConfig;
use crate::constants::*;

/// One flying image. `lateral` and `vertical` are offsets from the canvas center,
/// `depth` is the distance from the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    lateral: f32,
    vertical: f32,
    depth: f32,
    image: usize,
}

/// Screen placement of a sprite for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Sprite {
    pub fn new<R: Rng>(canvas: &CanvasConfig, image_count: NonZeroUsize, rng: &mut R) -> Self {
        let (lateral, vertical) = random_offsets(canvas, rng);
        Self {
            lateral,
            vertical,
            depth: rng.random_range(0.0..canvas.width() as f32),
            image: rng.random_range(0..image_count.get()),
        }
    }

    pub fn lateral(&self) -> f32 {
        self.lateral
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn image(&self) -> usize {
        self.image
    }

    /// Moves the sprite toward the viewer. Once it passes the near plane it is
    /// sent back to half the canvas width in depth at a fresh position.
    pub fn advance<R: Rng>(&mut self, speed: f32, canvas: &CanvasConfig, rng: &mut R) {
        self.depth -= speed;

        if self.depth < RECYCLE_DEPTH {
            self.depth = canvas.half_width();
            (self.lateral, self.vertical) = random_offsets(canvas, rng);
        }
    }

    /// Must run after `advance` in the same frame; depth is clamped to the near
    /// plane anyway so a zero depth is never divided by.
    pub fn project(&self, canvas: &CanvasConfig) -> Projection {
        let depth = self.depth.max(RECYCLE_DEPTH);
        let half_width = canvas.half_width();

        // Linear map of depth from [0, width / 2] onto [NEAR_SIZE, FAR_SIZE]
        let size = NEAR_SIZE + (depth / half_width) * (FAR_SIZE - NEAR_SIZE);

        Projection {
            x: (self.lateral / depth) * half_width,
            y: (self.vertical / depth) * canvas.half_height(),
            size: size.max(0.0),
        }
    }
}

fn random_offsets<R: Rng>(canvas: &CanvasConfig, rng: &mut R) -> (f32, f32) {
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;
    (rng.random_range(-w..=w), rng.random_range(-h..=h))
}

#[cfg(test)]
impl Sprite {
    pub(crate) fn at(lateral: f32, vertical: f32, depth: f32, image: usize) -> Self {
        Self { lateral, vertical, depth, image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_new_sprite_within_bounds() {
        let canvas = CanvasConfig::new(100, 50).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let sprite = Sprite::new(&canvas, pool(3), &mut rng);
            assert!((-100.0..=100.0).contains(&sprite.lateral()));
            assert!((-50.0..=50.0).contains(&sprite.vertical()));
            assert!((0.0..100.0).contains(&sprite.depth()));
            assert!(sprite.image() < 3);
        }
    }

    #[test]
    fn test_advance_decrements_depth() {
        let canvas = CanvasConfig::new(200, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut sprite = Sprite::at(10.0, -20.0, 50.0, 0);

        sprite.advance(4.0, &canvas, &mut rng);

        assert_eq!(sprite, Sprite::at(10.0, -20.0, 46.0, 0));
    }

    #[test]
    fn test_recycle_at_near_plane() {
        let canvas = CanvasConfig::new(200, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let mut sprite = Sprite::at(3.0, 4.0, 0.5, 2);

        sprite.advance(1.0, &canvas, &mut rng);

        assert_eq!(sprite.depth(), 100.0);
        assert!((-200.0..=200.0).contains(&sprite.lateral()));
        assert!((-100.0..=100.0).contains(&sprite.vertical()));
        assert_eq!(sprite.image(), 2, "image is never reassigned");
    }

    #[test]
    fn test_depth_stays_above_near_plane_after_advance() {
        let canvas = CanvasConfig::new(320, 240).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut sprites: Vec<Sprite> = (0..50).map(|_| Sprite::new(&canvas, pool(1), &mut rng)).collect();

        for frame in 0..400 {
            let speed = 1.0 + (frame % 20) as f32;
            for sprite in sprites.iter_mut() {
                sprite.advance(speed, &canvas, &mut rng);
                assert!(sprite.depth() >= RECYCLE_DEPTH);
            }
        }
    }

    #[test]
    fn test_projection() {
        let canvas = CanvasConfig::new(200, 100).unwrap();
        let sprite = Sprite::at(50.0, -25.0, 50.0, 0);

        let p = sprite.project(&canvas);

        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - (-25.0)).abs() < 1e-4);
        // Halfway between the near and the far plane
        assert!((p.size - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_size_range() {
        let canvas = CanvasConfig::new(200, 100).unwrap();

        let near = Sprite::at(0.0, 0.0, 1.0, 0).project(&canvas);
        let far = Sprite::at(0.0, 0.0, 100.0, 0).project(&canvas);
        let beyond = Sprite::at(0.0, 0.0, 199.0, 0).project(&canvas);

        assert!((near.size - 25.78).abs() < 1e-3);
        assert!((far.size - FAR_SIZE).abs() < 1e-4);
        assert_eq!(beyond.size, 0.0);
    }

    #[test]
    fn test_projection_clamps_zero_depth() {
        let canvas = CanvasConfig::new(200, 100).unwrap();
        let p = Sprite::at(10.0, 10.0, 0.0, 0).project(&canvas);

        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p.x, 1000.0);
    }
}
