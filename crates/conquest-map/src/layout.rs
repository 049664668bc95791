//! Canvas geometry: AU to pixel transform and marker sizes.

use conquest_config::MapConfig;
use conquest_system::AuPoint;

use crate::error::MapError;
use crate::geometry::PixelPoint;

/// Diameter of the star disc in pixels.
pub const STAR_DIAMETER: i32 = 32;
/// Diameter of a planet disc in pixels.
pub const PLANET_DIAMETER: i32 = 16;
/// Side of a station square in pixels.
pub const STATION_SIZE: i32 = 8;
/// Gap between a marker's edge and its caption.
pub const CAPTION_MARGIN: i32 = 2;
/// How far a caption's top edge sits above its anchor.
pub const CAPTION_RISE: i32 = 8;

/// A square `L x L` canvas at `S` pixels per AU, star at the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapLayout {
    canvas_length: u32,
    pixels_per_au: u32,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            canvas_length: 1024,
            pixels_per_au: 128,
        }
    }
}

impl MapLayout {
    pub fn new(canvas_length: u32, pixels_per_au: u32) -> Result<Self, MapError> {
        if canvas_length == 0 || canvas_length > i32::MAX as u32 {
            return Err(MapError::InvalidLayout(format!(
                "canvas length {canvas_length} out of range"
            )));
        }
        if pixels_per_au == 0 {
            return Err(MapError::InvalidLayout(
                "pixels per AU must be positive".to_string(),
            ));
        }
        Ok(Self {
            canvas_length,
            pixels_per_au,
        })
    }

    pub fn from_config(config: &MapConfig) -> Result<Self, MapError> {
        Self::new(config.canvas_length, config.pixels_per_au)
    }

    pub fn canvas_length(&self) -> u32 {
        self.canvas_length
    }

    pub fn pixels_per_au(&self) -> u32 {
        self.pixels_per_au
    }

    /// The star's pixel: `(L/2, L/2)`.
    pub fn center(&self) -> PixelPoint {
        let half = self.half();
        PixelPoint::new(half, half)
    }

    /// Map an AU position to its pixel.
    ///
    /// Each axis is scaled, bumped by one pixel when the fractional part of
    /// the AU value exceeds one half, offset to the center and truncated.
    pub fn pixels_from_au(&self, point: AuPoint) -> PixelPoint {
        PixelPoint::new(self.axis_to_pixel(point.x), self.axis_to_pixel(point.y))
    }

    /// Pixel diameter of a circle of radius `radius_au` centered on the star.
    pub fn diameter_px(&self, radius_au: f32) -> i32 {
        (radius_au * self.scale() * 2.0) as i32
    }

    /// Anchor for a belt caption: the far edge on the +x axis.
    pub fn belt_caption_anchor(&self, far_edge_au: f32) -> PixelPoint {
        let half = self.half();
        PixelPoint::new((far_edge_au * self.scale() + half as f32) as i32, half)
    }

    fn axis_to_pixel(&self, au: f32) -> i32 {
        let mut offset = au * self.scale();
        if au % 1.0 > 0.5 {
            offset += 1.0;
        }
        (self.half() as f32 + offset) as i32
    }

    fn half(&self) -> i32 {
        (self.canvas_length / 2) as i32
    }

    fn scale(&self) -> f32 {
        self.pixels_per_au as f32
    }
}
