//! Color policy: background, belts, star, orbits and body markers.

use conquest_system::{LocationSubType, Team};
use image::Rgba;

/// Belts starting at or inside this radius get the dense color.
const DENSE_BELT_LIMIT_AU: f32 = 2.0;

const NAVY: Rgba<u8> = Rgba([0, 0, 128, 255]);
const DARK_GOLDENROD: Rgba<u8> = Rgba([184, 134, 11, 255]);
const LIGHT_SKY_BLUE: Rgba<u8> = Rgba([135, 206, 250, 255]);
const LIGHT_GOLDENROD_YELLOW: Rgba<u8> = Rgba([250, 250, 210, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);
const ORANGE_RED: Rgba<u8> = Rgba([255, 69, 0, 255]);
const PURPLE: Rgba<u8> = Rgba([128, 0, 128, 255]);
const LIGHT_GRAY: Rgba<u8> = Rgba([211, 211, 211, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AQUA: Rgba<u8> = Rgba([0, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

const TEAM_COLORS: [(Team, Rgba<u8>); 2] = [(Team::Green, GREEN), (Team::Orange, ORANGE_RED)];

const SUBTYPE_COLORS: [(LocationSubType, Rgba<u8>); 7] = [
    (LocationSubType::PlanetHabitable, GREEN),
    (LocationSubType::PlanetGaseous, PURPLE),
    (LocationSubType::PlanetBarren, LIGHT_GRAY),
    (LocationSubType::StationMining, ORANGE_RED),
    (LocationSubType::StationFactoryParts, WHITE),
    (LocationSubType::StationFactoryRestores, WHITE),
    (LocationSubType::StationSupplyDepot, AQUA),
];

/// Which property decides a body marker's color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyColoring {
    /// By controlling team.
    #[default]
    Team,
    /// By planet or station subtype.
    SubType,
}

impl BodyColoring {
    pub fn from_show_types(show_types: bool) -> Self {
        if show_types {
            BodyColoring::SubType
        } else {
            BodyColoring::Team
        }
    }
}

/// The fixed map palette.
pub struct Palette;

impl Palette {
    pub const BACKGROUND: Rgba<u8> = NAVY;
    pub const STAR: Rgba<u8> = LIGHT_GOLDENROD_YELLOW;
    pub const ORBIT: Rgba<u8> = BLUE;
    pub const CAPTION: Rgba<u8> = WHITE;
    pub const DENSE_BELT: Rgba<u8> = DARK_GOLDENROD;
    pub const SPARSE_BELT: Rgba<u8> = LIGHT_SKY_BLUE;
    /// Returned for anything the lookup tables do not cover.
    pub const FALLBACK: Rgba<u8> = BLACK;

    /// Fill color for a belt, classified by its near edge.
    pub fn belt(near_edge_au: f32) -> Rgba<u8> {
        if near_edge_au <= DENSE_BELT_LIMIT_AU {
            Self::DENSE_BELT
        } else {
            Self::SPARSE_BELT
        }
    }

    pub fn team(team: Team) -> Rgba<u8> {
        lookup(&TEAM_COLORS, team)
    }

    pub fn sub_type(sub_type: LocationSubType) -> Rgba<u8> {
        lookup(&SUBTYPE_COLORS, sub_type)
    }

    /// Marker color for a body under the given coloring.
    pub fn body(coloring: BodyColoring, team: Team, sub_type: LocationSubType) -> Rgba<u8> {
        match coloring {
            BodyColoring::Team => Self::team(team),
            BodyColoring::SubType => Self::sub_type(sub_type),
        }
    }
}

fn lookup<K: PartialEq>(table: &[(K, Rgba<u8>)], key: K) -> Rgba<u8> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, color)| color)
        .unwrap_or(Palette::FALLBACK)
}
