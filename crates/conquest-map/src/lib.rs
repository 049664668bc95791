//! Top-down star-system map rendering.
//!
//! A render runs as an ordered list of [`Stage`]s. Composing a map walks the
//! stages and records a [`SystemMap`] display list; rasterizing replays that
//! list onto an RGBA canvas, later commands painting over earlier ones. The
//! [`MapRenderer`] wraps this with the template-load / PNG-save service.

mod error;
mod geometry;
mod layout;
mod palette;
mod raster;
mod render;
mod scene;

pub use error::MapError;
pub use geometry::{PixelPoint, PixelRect, rect_around};
pub use layout::{
    CAPTION_MARGIN, CAPTION_RISE, MapLayout, PLANET_DIAMETER, STAR_DIAMETER, STATION_SIZE,
};
pub use palette::{BodyColoring, Palette};
pub use raster::{paint, rasterize};
pub use render::{MapRenderer, RenderOptions};
pub use scene::{CaptionKind, DrawCommand, Stage, StagedCommand, SystemMap};
