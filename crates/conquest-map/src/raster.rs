//! Replays draw commands onto an RGBA canvas.
//!
//! Shapes are sampled at integer pixel coordinates and clipped to the canvas,
//! so degenerate or off-canvas geometry simply draws nothing.

use font8x8::UnicodeFonts;
use image::{Rgba, RgbaImage};

use crate::geometry::{PixelPoint, PixelRect};
use crate::scene::{DrawCommand, SystemMap};

const GLYPH_SIZE: i32 = 8;

/// Paint every command of `map` onto `canvas`, in order.
pub fn rasterize(map: &SystemMap, canvas: &mut RgbaImage) {
    for staged in map.commands() {
        paint(canvas, &staged.command);
    }
}

/// Paint a single command.
pub fn paint(canvas: &mut RgbaImage, command: &DrawCommand) {
    match command {
        DrawCommand::Clear { color } => {
            for pixel in canvas.pixels_mut() {
                *pixel = *color;
            }
        }
        DrawCommand::FillDisc { bounds, color } => fill_disc(canvas, bounds, *color),
        DrawCommand::Ring { bounds, color } => ring(canvas, bounds, *color),
        DrawCommand::FillRect { bounds, color } => fill_rect(canvas, bounds, *color),
        DrawCommand::Caption {
            text,
            origin,
            color,
            ..
        } => draw_text(canvas, text, *origin, *color),
    }
}

fn fill_disc(canvas: &mut RgbaImage, bounds: &PixelRect, color: Rgba<u8>) {
    if bounds.is_empty() {
        return;
    }
    let (cx, cy) = bounds.center();
    let radius = bounds.width as f32 / 2.0;
    let r2 = radius * radius;
    let inside = |x: i32, y: i32| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        dx * dx + dy * dy <= r2
    };
    let (w, h) = (bounds.width.saturating_add(1), bounds.height.saturating_add(1));
    for_each_in(canvas, bounds.x, bounds.y, w, h, inside, color);
}

fn ring(canvas: &mut RgbaImage, bounds: &PixelRect, color: Rgba<u8>) {
    if bounds.is_empty() {
        return;
    }
    let (cx, cy) = bounds.center();
    let radius = bounds.width as f32 / 2.0;
    let on_outline = |x: i32, y: i32| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        ((dx * dx + dy * dy).sqrt() - radius).abs() <= 0.5
    };
    let (w, h) = (bounds.width.saturating_add(3), bounds.height.saturating_add(3));
    let (x, y) = (bounds.x.saturating_sub(1), bounds.y.saturating_sub(1));
    for_each_in(canvas, x, y, w, h, on_outline, color);
}

fn fill_rect(canvas: &mut RgbaImage, bounds: &PixelRect, color: Rgba<u8>) {
    if bounds.is_empty() {
        return;
    }
    for_each_in(canvas, bounds.x, bounds.y, bounds.width, bounds.height, |_, _| true, color);
}

/// Draw `text` in 8x8 glyphs. Characters without a glyph still advance.
fn draw_text(canvas: &mut RgbaImage, text: &str, origin: PixelPoint, color: Rgba<u8>) {
    let mut pen_x = origin.x;
    for ch in text.chars() {
        let glyph = font8x8::BASIC_FONTS
            .get(ch)
            .or_else(|| font8x8::LATIN_FONTS.get(ch));
        if let Some(rows) = glyph {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1 << col) != 0 {
                        put(
                            canvas,
                            pen_x.saturating_add(col),
                            origin.y.saturating_add(row as i32),
                            color,
                        );
                    }
                }
            }
        }
        pen_x = pen_x.saturating_add(GLYPH_SIZE);
    }
}

/// Color each pixel of the clipped box `[x, x+w) x [y, y+h)` that `inside` accepts.
fn for_each_in(
    canvas: &mut RgbaImage,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    inside: impl Fn(i32, i32) -> bool,
    color: Rgba<u8>,
) {
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);
    let x0 = (x as i64).clamp(0, width);
    let y0 = (y as i64).clamp(0, height);
    let x1 = (x as i64 + w as i64).clamp(0, width);
    let y1 = (y as i64 + h as i64).clamp(0, height);
    for py in y0..y1 {
        for px in x0..x1 {
            if inside(px as i32, py as i32) {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn put(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect_around;
    use crate::scene::CaptionKind;

    const NAVY: Rgba<u8> = Rgba([0, 0, 128, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(64, 64, NAVY)
    }

    #[test]
    fn test_clear() {
        let mut image = RgbaImage::new(4, 4);
        paint(&mut image, &DrawCommand::Clear { color: RED });
        assert!(image.pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_disc_covers_center_not_corners() {
        let mut image = canvas();
        let bounds = rect_around(PixelPoint::new(32, 32), 16);
        paint(&mut image, &DrawCommand::FillDisc { bounds, color: RED });
        assert_eq!(*image.get_pixel(32, 32), RED);
        assert_eq!(*image.get_pixel(32 + 7, 32), RED);
        assert_eq!(*image.get_pixel(32, 32 - 7), RED);
        // Box corners lie outside the inscribed circle.
        assert_eq!(*image.get_pixel(24, 24), NAVY);
        assert_eq!(*image.get_pixel(32 + 10, 32), NAVY);
    }

    #[test]
    fn test_ring_is_hollow() {
        let mut image = canvas();
        let bounds = rect_around(PixelPoint::new(32, 32), 40);
        paint(&mut image, &DrawCommand::Ring { bounds, color: RED });
        assert_eq!(*image.get_pixel(32 + 20, 32), RED);
        assert_eq!(*image.get_pixel(32 - 20, 32), RED);
        assert_eq!(*image.get_pixel(32, 32 + 20), RED);
        assert_eq!(*image.get_pixel(32, 32), NAVY);
        assert_eq!(*image.get_pixel(32 + 10, 32), NAVY);
    }

    #[test]
    fn test_rect_fill_is_half_open() {
        let mut image = canvas();
        let bounds = rect_around(PixelPoint::new(10, 10), 8);
        paint(&mut image, &DrawCommand::FillRect { bounds, color: RED });
        assert_eq!(*image.get_pixel(6, 6), RED);
        assert_eq!(*image.get_pixel(13, 13), RED);
        assert_eq!(*image.get_pixel(14, 14), NAVY);
        assert_eq!(*image.get_pixel(5, 10), NAVY);
    }

    #[test]
    fn test_off_canvas_shapes_are_clipped() {
        let mut image = canvas();
        let huge = rect_around(PixelPoint::new(32, 32), 4000);
        paint(&mut image, &DrawCommand::FillDisc { bounds: huge, color: RED });
        assert!(image.pixels().all(|p| *p == RED));

        let mut image = canvas();
        let away = rect_around(PixelPoint::new(-500, 900), 8);
        paint(&mut image, &DrawCommand::FillRect { bounds: away, color: RED });
        paint(&mut image, &DrawCommand::Ring { bounds: away, color: RED });
        assert!(image.pixels().all(|p| *p == NAVY));
    }

    #[test]
    fn test_degenerate_shapes_draw_nothing() {
        let mut image = canvas();
        let empty = PixelRect::new(10, 10, 0, 0);
        let inverted = PixelRect::new(10, 10, -6, -6);
        for bounds in [empty, inverted] {
            paint(&mut image, &DrawCommand::FillDisc { bounds, color: RED });
            paint(&mut image, &DrawCommand::Ring { bounds, color: RED });
            paint(&mut image, &DrawCommand::FillRect { bounds, color: RED });
        }
        assert!(image.pixels().all(|p| *p == NAVY));
    }

    #[test]
    fn test_caption_draws_glyph_pixels() {
        let mut image = canvas();
        let command = DrawCommand::Caption {
            kind: CaptionKind::Planet,
            text: "T".to_string(),
            origin: PixelPoint::new(4, 4),
            color: WHITE,
        };
        paint(&mut image, &command);
        // Top bar of the 'T' glyph.
        assert_eq!(*image.get_pixel(4, 4), WHITE);
        assert_eq!(*image.get_pixel(9, 4), WHITE);
        // Nothing drawn above the origin row.
        assert!((0..64).all(|x| *image.get_pixel(x, 3) == NAVY));
    }

    #[test]
    fn test_caption_clipped_at_edge() {
        let mut image = canvas();
        let command = DrawCommand::Caption {
            kind: CaptionKind::Belt,
            text: "Kuiper Belt".to_string(),
            origin: PixelPoint::new(40, -4),
            color: WHITE,
        };
        paint(&mut image, &command);
        let drawn = image.pixels().filter(|p| **p == WHITE).count();
        assert!(drawn > 0);
    }
}
