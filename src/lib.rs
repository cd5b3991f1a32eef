//! Flying images screensaver: a perspective starfield of icon sprites flying
//! toward the viewer, with an optional randomized slow-motion mode.
//!
//! The simulation (`animation`, `field`, `sprite`, `scheduler`) draws through
//! the [`engine::Surface`] trait and takes its randomness and time from the
//! host, so it runs without a window. The raylib host lives behind the
//! `window` feature.

pub mod animation;
pub mod canvas;
pub mod cli;
pub mod constants;
pub mod controls;
pub mod engine;
pub mod error;
pub mod field;
pub mod scheduler;
pub mod settings;
pub mod sprite;
pub mod state;

#[cfg(feature = "window")]
pub mod texture_loader;
#[cfg(feature = "window")]
pub mod window;
