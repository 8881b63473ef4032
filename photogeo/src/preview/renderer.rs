//! Final preview surface rendering.

use super::layout::{self, Rect};
use crate::raster::{Color, RasterBuffer};
use tracing::trace;

const BACKGROUND_COLOR: Color = Color::rgb(255, 255, 255);
const DIVIDER_COLOR: Color = Color::rgb(0, 120, 215);
const CAPTION_COLOR: Color = Color::rgb(128, 128, 128);

const NO_LOCATION_CAPTION: &str = "NO GPS DATA";
const CAPTION_SCALE: u32 = 2;

/// Renders the displayed preview surface.
///
/// Scales the photo (and the map, when present) into the computed
/// layout with a Triangle filter, letterboxed against a plain
/// background. Called again on every resize; each call produces a
/// fresh buffer and mutates nothing.
pub fn render(photo: &RasterBuffer, map: Option<&RasterBuffer>, width: u32, height: u32) -> RasterBuffer {
    let mut surface = RasterBuffer::filled(width, height, BACKGROUND_COLOR);
    if width == 0 || height == 0 {
        return surface;
    }

    let layout = layout::compute(width, height, map.is_some());
    trace!(width, height, map = map.is_some(), "rendering preview surface");

    draw_fitted(&mut surface, photo, layout.photo_area);

    if let (Some(map), Some(map_area)) = (map, layout.map_area) {
        draw_fitted(&mut surface, map, map_area);
    }

    if let Some(divider_y) = layout.divider_y {
        surface.draw_hline(
            0,
            width as i32 - 1,
            divider_y,
            layout::DIVIDER_THICKNESS,
            DIVIDER_COLOR,
        );
    }

    if let Some(caption_area) = layout.caption_area {
        draw_caption(&mut surface, caption_area);
    }

    surface
}

/// Scales `source` into `area` with aspect preserved and blits it
/// centered.
fn draw_fitted(surface: &mut RasterBuffer, source: &RasterBuffer, area: Rect) {
    let fitted = layout::fit(source.width(), source.height(), area);
    if fitted.width == 0 || fitted.height == 0 {
        return;
    }

    let scaled = source.scaled(fitted.width, fitted.height);
    surface.blit(&scaled, fitted.x, fitted.y);
}

fn draw_caption(surface: &mut RasterBuffer, area: Rect) {
    let glyph_height = crate::raster::font_height(CAPTION_SCALE);
    let text_y = area.y + (area.height.saturating_sub(glyph_height) / 2) as i32;
    surface.draw_text_centered(
        area.x + area.width as i32 / 2,
        text_y,
        NO_LOCATION_CAPTION,
        CAPTION_SCALE,
        CAPTION_COLOR,
    );
}
