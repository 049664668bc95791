//! Staged composition of a system map into an ordered display list.

use conquest_system::{Belt, Location, StarSystem};
use image::Rgba;

use crate::geometry::{PixelPoint, PixelRect, rect_around};
use crate::layout::{
    CAPTION_MARGIN, CAPTION_RISE, MapLayout, PLANET_DIAMETER, STAR_DIAMETER, STATION_SIZE,
};
use crate::palette::{BodyColoring, Palette};
use crate::render::RenderOptions;

/// Draw stages in paint order. Each stage is finished before the next starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Clear the canvas.
    Background,
    /// Belt rings, nearest first.
    Belts,
    /// The star.
    Star,
    /// Orbit rings, planets and stations, planet by planet.
    Bodies,
    /// Belt names.
    BeltCaptions,
    /// Planet names, plus station names in station-label mode.
    BodyCaptions,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Background,
        Stage::Belts,
        Stage::Star,
        Stage::Bodies,
        Stage::BeltCaptions,
        Stage::BodyCaptions,
    ];
}

/// What a caption labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionKind {
    Belt,
    Planet,
    Station,
}

/// A single paint operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas.
    Clear { color: Rgba<u8> },
    /// Filled disc inscribed in `bounds`.
    FillDisc { bounds: PixelRect, color: Rgba<u8> },
    /// One-pixel circle outline inscribed in `bounds`.
    Ring { bounds: PixelRect, color: Rgba<u8> },
    /// Filled rectangle.
    FillRect { bounds: PixelRect, color: Rgba<u8> },
    /// Text whose top-left corner is at `origin`.
    Caption {
        kind: CaptionKind,
        text: String,
        origin: PixelPoint,
        color: Rgba<u8>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct StagedCommand {
    pub stage: Stage,
    pub command: DrawCommand,
}

/// The display list for one render, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemMap {
    commands: Vec<StagedCommand>,
}

impl SystemMap {
    /// Walk every stage in order and record its draw commands.
    pub fn compose(layout: &MapLayout, system: &StarSystem, options: &RenderOptions) -> Self {
        let mut composer = Composer {
            layout,
            system,
            options,
            coloring: BodyColoring::from_show_types(options.show_types),
            belts: system.belts_by_near_edge(),
            map: SystemMap::default(),
        };
        for stage in Stage::ALL {
            let before = composer.map.commands.len();
            composer.draw_stage(stage);
            log::debug!(
                "stage {:?}: {} commands",
                stage,
                composer.map.commands.len() - before
            );
        }
        composer.map
    }

    pub fn commands(&self) -> &[StagedCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands belonging to one stage.
    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| c.stage == stage)
            .map(|c| &c.command)
    }

    /// Caption texts of the given kind, in paint order.
    pub fn captions(&self, kind: CaptionKind) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match &c.command {
                DrawCommand::Caption { kind: k, text, .. } if *k == kind => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, stage: Stage, command: DrawCommand) {
        self.commands.push(StagedCommand { stage, command });
    }
}

struct Composer<'a> {
    layout: &'a MapLayout,
    system: &'a StarSystem,
    options: &'a RenderOptions,
    coloring: BodyColoring,
    belts: Vec<&'a Belt>,
    map: SystemMap,
}

impl Composer<'_> {
    fn draw_stage(&mut self, stage: Stage) {
        match stage {
            Stage::Background => self.map.push(
                stage,
                DrawCommand::Clear {
                    color: Palette::BACKGROUND,
                },
            ),
            Stage::Belts => self.draw_belts(),
            Stage::Star => {
                let bounds = rect_around(self.layout.center(), STAR_DIAMETER);
                self.map.push(
                    stage,
                    DrawCommand::FillDisc {
                        bounds,
                        color: Palette::STAR,
                    },
                );
            }
            Stage::Bodies => {
                let system = self.system;
                for planet in system.planets() {
                    self.draw_planet(planet);
                }
            }
            Stage::BeltCaptions => {
                if !self.options.show_stations {
                    self.caption_belts();
                }
            }
            Stage::BodyCaptions => self.caption_bodies(),
        }
    }

    /// Fill to the far edge, then erase to the near edge, one belt at a time.
    fn draw_belts(&mut self) {
        let center = self.layout.center();
        for belt in &self.belts {
            self.map.push(
                Stage::Belts,
                DrawCommand::FillDisc {
                    bounds: rect_around(center, self.layout.diameter_px(belt.far_edge_au())),
                    color: Palette::belt(belt.near_edge_au()),
                },
            );
            self.map.push(
                Stage::Belts,
                DrawCommand::FillDisc {
                    bounds: rect_around(center, self.layout.diameter_px(belt.near_edge_au())),
                    color: Palette::BACKGROUND,
                },
            );
        }
    }

    fn draw_planet(&mut self, planet: &Location) {
        let orbit = rect_around(
            self.layout.center(),
            self.layout.diameter_px(planet.orbital_distance_au()),
        );
        let marker = DrawCommand::FillDisc {
            bounds: rect_around(self.position(planet), PLANET_DIAMETER),
            color: self.color(planet),
        };
        self.map.push(
            Stage::Bodies,
            DrawCommand::Ring {
                bounds: orbit,
                color: Palette::ORBIT,
            },
        );
        self.map.push(Stage::Bodies, marker);

        for station in planet.lagrange_locations() {
            let marker = DrawCommand::FillRect {
                bounds: rect_around(self.position(station), STATION_SIZE),
                color: self.color(station),
            };
            self.map.push(Stage::Bodies, marker);
        }
    }

    fn caption_belts(&mut self) {
        for belt in &self.belts {
            let anchor = self.layout.belt_caption_anchor(belt.far_edge_au());
            let command = caption(CaptionKind::Belt, belt.name(), anchor, 0);
            self.map.push(Stage::BeltCaptions, command);
        }
    }

    fn caption_bodies(&mut self) {
        let system = self.system;
        for planet in system.planets() {
            let command = caption(
                CaptionKind::Planet,
                planet.name(),
                self.position(planet),
                PLANET_DIAMETER / 2,
            );
            self.map.push(Stage::BodyCaptions, command);

            if !self.options.show_stations {
                continue;
            }
            for station in planet.lagrange_locations() {
                let command = caption(
                    CaptionKind::Station,
                    station.name(),
                    self.position(station),
                    STATION_SIZE / 2,
                );
                self.map.push(Stage::BodyCaptions, command);
            }
        }
    }

    fn position(&self, location: &Location) -> PixelPoint {
        self.layout
            .pixels_from_au(location.coordinates(self.options.day))
    }

    fn color(&self, location: &Location) -> Rgba<u8> {
        Palette::body(self.coloring, location.team(), location.sub_type())
    }
}

/// Caption to the upper right of `anchor`, clear of a marker `offset` wide.
fn caption(kind: CaptionKind, text: &str, anchor: PixelPoint, offset: i32) -> DrawCommand {
    DrawCommand::Caption {
        kind,
        text: text.to_string(),
        origin: PixelPoint::new(
            anchor.x.saturating_add(offset + CAPTION_MARGIN),
            anchor.y.saturating_sub(CAPTION_RISE),
        ),
        color: Palette::CAPTION,
    }
}
