use std::num::NonZeroUsize;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flying_images::animation::AnimationLoop;
use flying_images::cli::Cli;
use flying_images::controls::Panel;
use flying_images::settings::SettingsStore;
use flying_images::texture_loader::load_sprite_pool;
use flying_images::window::{draw_panel, poll_commands, RaylibSurface};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // --- Settings: stored session, then command line overrides ---
    let mut store = SettingsStore::open(&cli.settings);
    let mut settings = store.settings().clone();
    if cli.apply(&mut settings) {
        store.update(|s| *s = settings.clone());
    }

    let (mut rl, thread) = raylib::init()
        .size(settings.width, settings.height)
        .title("Flying Images")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Sprite Images ---
    let textures = match load_sprite_pool(&mut rl, &thread, &cli.assets) {
        Ok(textures) => textures,
        Err(e) => {
            error!("{:#}", e);
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            d.draw_text(&format!("Error: {}", e), 20, 20, 20, Color::RED);
            drop(d);
            std::thread::sleep(Duration::from_secs(5));
            return Err(e);
        }
    };
    let image_count = NonZeroUsize::new(textures.len()).context("no sprite images loaded")?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut animation = AnimationLoop::new(
        settings.startup_values(),
        image_count,
        rng,
        Duration::from_secs_f64(rl.get_time()),
    );
    let mut panel = Panel::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = Duration::from_secs_f64(rl.get_time());

        for command in poll_commands(&rl) {
            let outcome = panel.apply(command, &mut animation, &mut settings, now);
            if outcome.resize_window {
                rl.set_window_size(settings.width, settings.height);
            }
            if outcome.persist {
                store.update(|s| *s = settings.clone());
            }
        }

        let mut d = rl.begin_drawing(&thread);
        animation.frame(now, &mut RaylibSurface::new(&mut d, &textures));
        if panel.visible {
            draw_panel(&mut d, &panel.lines(&settings));
        }
    }

    info!(path = %store.path().display(), "settings saved, bye");
    Ok(())
}
