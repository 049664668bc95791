//! The render call: template in, staged drawing, PNG out.

use std::path::{Path, PathBuf};

use conquest_config::MapConfig;
use conquest_system::StarSystem;
use image::{ImageFormat, RgbaImage};

use crate::error::MapError;
use crate::layout::MapLayout;
use crate::palette::Palette;
use crate::raster::rasterize;
use crate::scene::{CaptionKind, SystemMap};

/// Per-call render settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Simulated day at which body positions are evaluated.
    pub day: u32,
    /// Label stations instead of belts.
    pub show_stations: bool,
    /// Color bodies by subtype instead of by team.
    pub show_types: bool,
}

/// Renders star-system maps onto a template canvas from the data folder.
///
/// Holds no per-render state; every call works on its own canvas, so one
/// renderer can serve concurrent renders of different systems.
#[derive(Clone, Debug)]
pub struct MapRenderer {
    layout: MapLayout,
    data_dir: PathBuf,
    template: PathBuf,
}

impl MapRenderer {
    pub fn from_config(config: &MapConfig) -> Result<Self, MapError> {
        Ok(Self {
            layout: MapLayout::from_config(config)?,
            data_dir: config.data_dir.clone(),
            template: config.template_path(),
        })
    }

    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    pub fn template_path(&self) -> &Path {
        &self.template
    }

    /// Where a map named `file_name` is written.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// The display list for `system` without touching any pixels.
    pub fn compose(&self, system: &StarSystem, options: &RenderOptions) -> SystemMap {
        SystemMap::compose(&self.layout, system, options)
    }

    /// Render onto a blank canvas, without any file I/O.
    pub fn render(&self, system: &StarSystem, options: &RenderOptions) -> RgbaImage {
        let mut canvas = self.blank_template();
        self.render_onto(&mut canvas, system, options);
        canvas
    }

    /// Render onto an existing canvas of the layout's size.
    pub fn render_onto(
        &self,
        canvas: &mut RgbaImage,
        system: &StarSystem,
        options: &RenderOptions,
    ) {
        let map = self.compose(system, options);
        rasterize(&map, canvas);
        log::info!(
            "Rendered {:?} at day {}: {} draw commands, {} captions",
            system.name(),
            options.day,
            map.len(),
            [CaptionKind::Belt, CaptionKind::Planet, CaptionKind::Station]
                .into_iter()
                .map(|kind| map.captions(kind).len())
                .sum::<usize>()
        );
    }

    /// Load the template, render `system` onto it and save it as
    /// `file_name` in the data folder. Returns the written path.
    ///
    /// Nothing is written if the template cannot be loaded.
    pub fn create_system_map(
        &self,
        file_name: &str,
        system: &StarSystem,
        options: &RenderOptions,
    ) -> Result<PathBuf, MapError> {
        let mut canvas = self.load_template()?;
        self.render_onto(&mut canvas, system, options);

        let output = self.output_path(file_name);
        canvas
            .save_with_format(&output, ImageFormat::Png)
            .map_err(|source| MapError::Save {
                path: output.clone(),
                source,
            })?;
        log::info!("Saved map of {:?} to {}", system.name(), output.display());
        Ok(output)
    }

    /// Read the template and check it is `L x L`.
    pub fn load_template(&self) -> Result<RgbaImage, MapError> {
        let canvas = image::open(&self.template)
            .map_err(|source| MapError::TemplateLoad {
                path: self.template.clone(),
                source,
            })?
            .to_rgba8();

        let expected = self.layout.canvas_length();
        if canvas.width() != expected || canvas.height() != expected {
            return Err(MapError::TemplateSize {
                expected,
                width: canvas.width(),
                height: canvas.height(),
            });
        }
        log::debug!("Loaded canvas template {}", self.template.display());
        Ok(canvas)
    }

    /// An `L x L` canvas in the background color.
    pub fn blank_template(&self) -> RgbaImage {
        let length = self.layout.canvas_length();
        RgbaImage::from_pixel(length, length, Palette::BACKGROUND)
    }

    /// Write a blank template unless one already exists. Returns its path.
    pub fn write_blank_template(&self) -> Result<PathBuf, MapError> {
        if self.template.exists() {
            log::info!("Template {} already exists", self.template.display());
            return Ok(self.template.clone());
        }
        std::fs::create_dir_all(&self.data_dir).map_err(|source| MapError::DataDir {
            path: self.data_dir.clone(),
            source,
        })?;
        self.blank_template()
            .save_with_format(&self.template, ImageFormat::Png)
            .map_err(|source| MapError::Save {
                path: self.template.clone(),
                source,
            })?;
        log::info!("Wrote blank template to {}", self.template.display());
        Ok(self.template.clone())
    }
}
