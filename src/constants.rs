pub const FPS: u32 = 60;                       // Default target frames per second

pub const DEFAULT_SPEED: f32 = 4.0;            // Depth units per frame
pub const DEFAULT_COUNT: usize = 500;          // Number of flying sprites
pub const DEFAULT_WIDTH: i32 = 1280;           // Canvas width (pixels)
pub const DEFAULT_HEIGHT: i32 = 720;           // Canvas height (pixels)
pub const DEFAULT_RANDOMIZE_MODE: bool = false;
pub const DEFAULT_RANDOMIZE_N: f64 = 10.0;     // Max seconds between slow/normal flips
pub const DEFAULT_AUTOLOAD: bool = true;

// Panel ranges, also applied to command line overrides
pub const SPEED_RANGE: (f32, f32) = (1.0, 20.0);
pub const COUNT_RANGE: (usize, usize) = (50, 1000);
pub const COUNT_STEP: usize = 10;
pub const WIDTH_RANGE: (i32, i32) = (320, 1920);
pub const HEIGHT_RANGE: (i32, i32) = (240, 1080);
pub const RANDOMIZE_N_RANGE: (f64, f64) = (1.0, 300.0);

pub const SLOW_DIVISOR: f32 = 5.0;             // Effective speed is base / 5 while slowed
pub const RECYCLE_DEPTH: f32 = 1.0;            // Near plane: sprites below this depth are recycled
pub const NEAR_SIZE: f32 = 26.0;               // Render size at depth 0
pub const FAR_SIZE: f32 = 4.0;                 // Render size at depth width / 2

pub const DEFAULT_ASSETS_DIR: &str = "png";
pub const DEFAULT_SETTINGS_FILE: &str = "flying_settings.json";
