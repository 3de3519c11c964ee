use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area of `height` rows ending right above `anchor`, indented by `x_offset`
///
/// Shrinks to fit the rows available above the anchor.
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let height = height.min(anchor.y);

    Rect {
        x: anchor.x + x_offset,
        y: anchor.y - height,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
