//! Skyline art: the decorative city background, drawn over a [`Surface`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use skyline_art::prelude::*;
//!
//! let mut list = DrawList::new();
//! render_background(&mut Painter::new(&mut list));
//!
//! let pixmap = Rasterizer::new(RasterConfig::default()).render(&mut list, None)?;
//! ```
//!
//! # Drawing onto another backend
//!
//! Implement [`Surface`] for your canvas type; every renderer in [`art`] and
//! [`render_background`] accept `&mut dyn Surface`:
//!
//! ```rust,ignore
//! struct MyCanvas { /* backend handle */ }
//!
//! impl Surface for MyCanvas {
//!     fn set_fill(&mut self, paint: Paint) { /* ... */ }
//!     // ...
//! }
//!
//! skyline_art::render_background(&mut MyCanvas::new());
//! ```

use skyline_engine::coords::Viewport;

pub mod art;
pub mod compose;
pub mod layout;
pub mod painter;
pub mod palette;
pub mod rng;
pub mod surface;

pub use compose::render_background;
pub use painter::Painter;
pub use surface::{Surface, TextAlign};

/// Extent of the background in logical pixels. Every placement fits inside it.
pub const CANVAS: Viewport = Viewport::new(900.0, 600.0);

/// Everything a host needs to draw and rasterize the background.
pub mod prelude {
    pub use crate::CANVAS;
    pub use crate::compose::render_background;
    pub use crate::layout::{Category, Decoration, background_plan};
    pub use crate::painter::Painter;
    pub use crate::rng::SeededRng;
    pub use crate::surface::{Surface, TextAlign};

    pub use skyline_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
    pub use skyline_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
    pub use skyline_engine::render::{RasterConfig, Rasterizer};
    pub use skyline_engine::scene::{DrawList, ZIndex};
    pub use skyline_engine::text::{FontId, FontSystem};
}
