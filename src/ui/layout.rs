use ratatui::layout::Rect;

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT: f32 = 2.0;

/// Largest centered area inside `area` that shows a `window` sized in pixels
/// without distortion. Fullscreen takes the whole area.
pub fn fit(area: Rect, window: (f32, f32), fullscreen: bool) -> Rect {
    if fullscreen || area.width == 0 || area.height == 0 {
        return area;
    }

    // Columns per row that keep pixels square
    let ratio = window.0 / window.1 * CELL_ASPECT;
    let mut width = f32::from(area.width);
    let mut height = width / ratio;
    if height > f32::from(area.height) {
        height = f32::from(area.height);
        width = height * ratio;
    }
    let width = (width.round() as u16).clamp(1, area.width);
    let height = (height.round() as u16).clamp(1, area.height);

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
