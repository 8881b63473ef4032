//! Preview layout computation.
//!
//! Pure geometry: given the client rectangle and whether a map was
//! composed, decide where the photo, the map, and the caption margin
//! go. Keeping this free of drawing makes the split and the aspect
//! math directly testable.

/// Divider line thickness between photo and map, in pixels.
pub const DIVIDER_THICKNESS: u32 = 2;

/// Bottom margin height reserved for the no-location caption.
pub const CAPTION_MARGIN: u32 = 30;

/// Axis-aligned rectangle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Placement of the preview surfaces within the client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayout {
    /// Area allotted to the photo.
    pub photo_area: Rect,
    /// Area allotted to the map, when one was composed.
    pub map_area: Option<Rect>,
    /// Top row of the divider line, when a map is present.
    pub divider_y: Option<i32>,
    /// Caption margin at the bottom, when no map is present.
    pub caption_area: Option<Rect>,
}

/// Computes the layout for the given client size.
///
/// With a map the client splits into a photo half on top and a map
/// half below, separated by a divider. Without one the photo takes
/// the full area minus a bottom caption margin.
pub fn compute(client_width: u32, client_height: u32, map_present: bool) -> PreviewLayout {
    if map_present {
        let mid = client_height / 2;
        let divider_top = mid.saturating_sub(DIVIDER_THICKNESS / 2);
        let map_top = (divider_top + DIVIDER_THICKNESS).min(client_height);

        PreviewLayout {
            photo_area: Rect::new(0, 0, client_width, divider_top),
            map_area: Some(Rect::new(
                0,
                map_top as i32,
                client_width,
                client_height - map_top,
            )),
            divider_y: Some(divider_top as i32),
            caption_area: None,
        }
    } else {
        let photo_height = client_height.saturating_sub(CAPTION_MARGIN);

        PreviewLayout {
            photo_area: Rect::new(0, 0, client_width, photo_height),
            map_area: None,
            divider_y: None,
            caption_area: Some(Rect::new(
                0,
                photo_height as i32,
                client_width,
                client_height - photo_height,
            )),
        }
    }
}

/// Fits a source image into an area with one uniform scale factor.
///
/// The scale is `min(area_w/src_w, area_h/src_h)`, so the result
/// preserves aspect ratio and never crops; the fitted rectangle is
/// centered within the area. Degenerate source or area dimensions
/// yield an empty rectangle at the area origin.
pub fn fit(src_width: u32, src_height: u32, area: Rect) -> Rect {
    if src_width == 0 || src_height == 0 || area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let scale = f64::min(
        area.width as f64 / src_width as f64,
        area.height as f64 / src_height as f64,
    );
    let fitted_width = ((src_width as f64 * scale).round() as u32).max(1);
    let fitted_height = ((src_height as f64 * scale).round() as u32).max(1);

    Rect::new(
        area.x + (area.width as i32 - fitted_width as i32) / 2,
        area.y + (area.height as i32 - fitted_height as i32) / 2,
        fitted_width,
        fitted_height,
    )
}
