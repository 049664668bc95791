//! End-to-end renders through the template and PNG service.

use std::ops::Range;
use std::path::Path;

use conquest_config::MapConfig;
use conquest_map::{CaptionKind, MapError, MapRenderer, Palette, RenderOptions};
use conquest_system::{
    Belt, CircularOrbit, LagrangePoint, Location, LocationSubType, StarSystem, Team,
};
use image::{Rgba, RgbaImage};

fn renderer_in(dir: &Path) -> MapRenderer {
    let config = MapConfig {
        data_dir: dir.to_path_buf(),
        ..MapConfig::default()
    };
    MapRenderer::from_config(&config).unwrap()
}

fn lone_planet() -> StarSystem {
    let mut system = StarSystem::new("Lone");
    system
        .add_planet(Location::planet(
            "Solitude",
            Team::Green,
            LocationSubType::PlanetHabitable,
            CircularOrbit::new(2.0, 200.0, 0.0),
        ))
        .unwrap();
    system
}

fn contested() -> StarSystem {
    let mut system = StarSystem::new("Contested");
    let planet = Location::planet(
        "Ares",
        Team::Orange,
        LocationSubType::PlanetBarren,
        CircularOrbit::fixed(1.0, 90.0),
    )
    .with_station(
        "Ares Depot",
        Team::Green,
        LocationSubType::StationSupplyDepot,
        LagrangePoint::L3,
    );
    system.add_planet(planet).unwrap();
    system
        .add_belt(Belt::new("Rubble", 2.5, 3.0).unwrap())
        .unwrap();
    system
}

fn has_color_in(image: &RgbaImage, x: Range<u32>, y: Range<u32>, color: Rgba<u8>) -> bool {
    y.clone()
        .flat_map(|py| x.clone().map(move |px| (px, py)))
        .any(|(px, py)| *image.get_pixel(px, py) == color)
}

#[test]
fn test_single_planet_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_in(dir.path());
    renderer.write_blank_template().unwrap();

    let output = renderer
        .create_system_map("lone.png", &lone_planet(), &RenderOptions::default())
        .unwrap();
    assert_eq!(output, dir.path().join("lone.png"));

    let image = image::open(&output).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (1024, 1024));

    // Planet marker centered 256 px right of the star, in the green team color.
    assert_eq!(*image.get_pixel(768, 512), Palette::team(Team::Green));
    // Orbit ring of radius 256 px.
    assert_eq!(*image.get_pixel(512, 768), Palette::ORBIT);
    assert_eq!(*image.get_pixel(256, 512), Palette::ORBIT);
    assert_eq!(*image.get_pixel(512, 256), Palette::ORBIT);
    // Inside the ring is empty space apart from the star.
    assert_eq!(*image.get_pixel(512, 512), Palette::STAR);
    assert_eq!(*image.get_pixel(640, 640), Palette::BACKGROUND);
    // The planet caption sits to the upper right of the marker.
    assert!(has_color_in(&image, 778..830, 504..512, Palette::CAPTION));

    let map = renderer.compose(&lone_planet(), &RenderOptions::default());
    assert_eq!(map.captions(CaptionKind::Planet), ["Solitude"]);
    assert!(map.captions(CaptionKind::Belt).is_empty());
    assert!(map.captions(CaptionKind::Station).is_empty());
}

#[test]
fn test_belt_ring_is_carved() {
    let renderer = MapRenderer::from_config(&MapConfig::default()).unwrap();
    let image = renderer.render(&contested(), &RenderOptions::default());

    // Between the edges: 2.75 AU on the -y axis.
    assert_eq!(*image.get_pixel(512, 512 - 352), Palette::SPARSE_BELT);
    // Inside the near edge the disc was erased back to background.
    assert_eq!(*image.get_pixel(512, 512 - 300), Palette::BACKGROUND);
    // Beyond the far edge nothing was drawn.
    assert_eq!(*image.get_pixel(512, 512 - 400), Palette::BACKGROUND);
}

#[test]
fn test_station_label_mode_swaps_captions() {
    let renderer = MapRenderer::from_config(&MapConfig::default()).unwrap();
    let system = contested();

    let default_map = renderer.compose(&system, &RenderOptions::default());
    assert_eq!(default_map.captions(CaptionKind::Belt), ["Rubble"]);
    assert!(default_map.captions(CaptionKind::Station).is_empty());

    let options = RenderOptions {
        show_stations: true,
        ..RenderOptions::default()
    };
    let station_map = renderer.compose(&system, &options);
    assert!(station_map.captions(CaptionKind::Belt).is_empty());
    assert_eq!(station_map.captions(CaptionKind::Station), ["Ares Depot"]);

    // The belt caption is painted at the far edge on the +x axis only by default.
    let labelled = renderer.render(&system, &RenderOptions::default());
    let unlabelled = renderer.render(&system, &options);
    let caption_box = (512 + 384 + 2)..(512 + 384 + 2 + 48);
    assert!(has_color_in(&labelled, caption_box.clone(), 504..512, Palette::CAPTION));
    assert!(!has_color_in(&unlabelled, caption_box, 504..512, Palette::CAPTION));
}

#[test]
fn test_type_coloring() {
    let renderer = MapRenderer::from_config(&MapConfig::default()).unwrap();
    let system = contested();
    let options = RenderOptions {
        show_types: true,
        ..RenderOptions::default()
    };

    // Planet fixed at 90 degrees: (0, 1) AU -> (512, 640).
    let by_team = renderer.render(&system, &RenderOptions::default());
    let by_type = renderer.render(&system, &options);
    assert_eq!(*by_team.get_pixel(512, 640), Palette::team(Team::Orange));
    assert_eq!(
        *by_type.get_pixel(512, 640),
        Palette::sub_type(LocationSubType::PlanetBarren)
    );

    // Station at L3: (0, -1) AU -> (512, 384).
    assert_eq!(*by_team.get_pixel(512, 384), Palette::team(Team::Green));
    assert_eq!(
        *by_type.get_pixel(512, 384),
        Palette::sub_type(LocationSubType::StationSupplyDepot)
    );
}

#[test]
fn test_render_is_repeatable() {
    let renderer = MapRenderer::from_config(&MapConfig::default()).unwrap();
    let system = contested();
    let options = RenderOptions {
        day: 17,
        ..RenderOptions::default()
    };
    assert_eq!(renderer.render(&system, &options), renderer.render(&system, &options));
}

#[test]
fn test_missing_template_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_in(dir.path());

    let err = renderer
        .create_system_map("lone.png", &lone_planet(), &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, MapError::TemplateLoad { .. }));
    assert!(!dir.path().join("lone.png").exists());
}

#[test]
fn test_wrong_template_size_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_in(dir.path());
    RgbaImage::new(640, 480)
        .save(renderer.template_path())
        .unwrap();

    let err = renderer
        .create_system_map("lone.png", &lone_planet(), &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        MapError::TemplateSize {
            expected: 1024,
            width: 640,
            height: 480
        }
    ));
    assert!(!dir.path().join("lone.png").exists());
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_in(dir.path());
    renderer.write_blank_template().unwrap();

    let err = renderer
        .create_system_map("no/such/dir/lone.png", &lone_planet(), &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, MapError::Save { .. }));
}

#[test]
fn test_blank_template_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_in(dir.path().join("data").as_path());
    let path = renderer.write_blank_template().unwrap();
    assert!(path.exists());

    let modified = std::fs::metadata(&path).unwrap().len();
    renderer.write_blank_template().unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), modified);
}

#[test]
fn test_concurrent_renders_are_independent() {
    let renderer = MapRenderer::from_config(&MapConfig::default()).unwrap();
    let systems = [lone_planet(), contested()];
    let expected: Vec<RgbaImage> = systems
        .iter()
        .map(|s| renderer.render(s, &RenderOptions::default()))
        .collect();

    let renderer = &renderer;
    std::thread::scope(|scope| {
        let handles: Vec<_> = systems
            .iter()
            .map(|s| scope.spawn(move || renderer.render(s, &RenderOptions::default())))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}
