//! Browser client for local two-player Pong
//!
//! Canvas 2D rendering driven by `requestAnimationFrame`; the simulation
//! itself lives in `game_core`.
//! Note: everything but key mapping only compiles for the wasm32 target

pub mod input;
pub mod logging;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod hud;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::start;
