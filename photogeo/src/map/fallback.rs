//! Offline fallback map graphic.
//!
//! Rendered when no tile in the grid could be fetched, so the preview
//! still shows where the photo was taken. The graphic is a gradient
//! backdrop with a faint grid, a compass motif, a location pin, and
//! the coordinate printed as text.

use crate::coord::GeoCoordinate;
use crate::raster::{Color, RasterBuffer};

const GRID_LINES: u32 = 6;

const GRID_COLOR: Color = Color::rgb(180, 200, 220);
const COMPASS_COLOR: Color = Color::rgb(70, 100, 140);
const NORTH_COLOR: Color = Color::rgb(200, 60, 60);
const TEXT_COLOR: Color = Color::rgb(40, 70, 110);

/// Renders the fallback graphic for the given location.
pub fn render(coordinate: GeoCoordinate, size: u32) -> RasterBuffer {
    let mut canvas = RasterBuffer::new(size, size);

    draw_gradient(&mut canvas);
    draw_grid(&mut canvas);
    draw_compass(&mut canvas);
    draw_captions(&mut canvas, coordinate);

    canvas
}

/// Vertical gradient from light gray-blue to a slightly warmer tint.
fn draw_gradient(canvas: &mut RasterBuffer) {
    let height = canvas.height();
    for y in 0..height {
        let shade = 200 + y * 40 / height;
        let color = Color::rgb(
            shade.min(255) as u8,
            (shade + 10).min(255) as u8,
            (shade + 20).min(255) as u8,
        );
        for x in 0..canvas.width() {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Faint square grid over the gradient.
fn draw_grid(canvas: &mut RasterBuffer) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    for i in 0..=GRID_LINES as i32 {
        let x = i * width / GRID_LINES as i32;
        let y = i * height / GRID_LINES as i32;
        canvas.draw_vline(x.min(width - 1), 0, height - 1, 1, GRID_COLOR);
        canvas.draw_hline(0, width - 1, y.min(height - 1), 1, GRID_COLOR);
    }
}

/// Compass ring with cardinal lines, north label, and location pin.
fn draw_compass(canvas: &mut RasterBuffer) {
    let cx = canvas.width() as i32 / 2;
    let cy = canvas.height() as i32 / 2 - 30;

    canvas.draw_ring(cx, cy, 40, 2, COMPASS_COLOR);
    canvas.draw_vline(cx, cy - 35, cy + 35, 2, COMPASS_COLOR);
    canvas.draw_hline(cx - 35, cx + 35, cy, 2, COMPASS_COLOR);
    canvas.draw_text_centered(cx, cy - 58, "N", 2, NORTH_COLOR);

    super::draw_marker(canvas, cx, cy);
}

/// Title caption and the coordinate in decimal degrees.
fn draw_captions(canvas: &mut RasterBuffer, coordinate: GeoCoordinate) {
    let cx = canvas.width() as i32 / 2;
    let bottom = canvas.height() as i32;

    canvas.draw_text_centered(cx, 14, "PHOTO LOCATION", 2, COMPASS_COLOR);

    let lat_line = format!(
        "LAT: {:.6} {}",
        coordinate.latitude.abs(),
        coordinate.lat_hemisphere()
    );
    let lon_line = format!(
        "LON: {:.6} {}",
        coordinate.longitude.abs(),
        coordinate.lon_hemisphere()
    );
    canvas.draw_text_centered(cx, bottom - 80, &lat_line, 3, TEXT_COLOR);
    canvas.draw_text_centered(cx, bottom - 50, &lon_line, 3, TEXT_COLOR);
}
