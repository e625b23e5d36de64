//! UI module for rendering the TUI

mod editor;
mod field_renderer;
mod layout;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (editor_area, preview_area) = layout::create_layout(area);

    editor::draw(frame, editor_area, app);
    preview::draw(frame, preview_area, app);

    layout::draw_status_bar(frame, app);
}
