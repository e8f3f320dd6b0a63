//! Skyline engine crate.
//!
//! Renderer-agnostic scene model shared by the artwork and its hosts: geometry,
//! paints, the recorded draw stream, font measurement, logging and a CPU
//! rasterizer that plays a draw stream into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
