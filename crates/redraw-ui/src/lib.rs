//! Widgets and layout helpers on top of the redraw engine.
//!
//! Every widget takes coordinates relative to the current container's content
//! origin, so the same declaration scrolls with its container.

pub mod layout;

pub use layout::{RowLayout, VerticalLayout};

use redraw_core::*;

pub const BUTTON_FONT_FAMILY: &str = "Segoe UI";

/// Screen position of a point given relative to the current container.
pub fn absolute(ui: &Ui<'_>, relative: Vec2) -> Vec2 {
    ui.element_origin() + relative
}

fn absolute_rect(ui: &Ui<'_>, relative: Rect) -> Rect {
    relative.translate(ui.element_origin())
}

/// Push-button labelled with `label`, which also serves as its identity.
/// Returns true on the frame the button is clicked.
pub fn button(ui: &mut Ui<'_>, label: &str, font_size: f32, top_left: Vec2, size: Vec2) -> bool {
    button_with_id(ui, label, label, font_size, top_left, size).clicked
}

/// Push-button with an identity distinct from its label.
pub fn button_with_id(
    ui: &mut Ui<'_>,
    id: impl Into<ItemId>,
    label: &str,
    font_size: f32,
    top_left: Vec2,
    size: Vec2,
) -> Interaction {
    let top_left = absolute(ui, top_left);
    let bot_right = top_left + size;
    let state = ui.button_behavior(id, top_left, bot_right);
    if state.clipped {
        return state;
    }

    let rect = Rect::from_corners(top_left, bot_right);
    let (light, dark) = (Color::gray(247), Color::gray(221));
    let (start_color, end_color) = if state.pressed {
        (dark, light)
    } else {
        (light, dark)
    };
    ui.push_command(DrawCommand::FillGradient {
        rect,
        start_color,
        end_color,
        start: vec2(0.5, 0.0),
        end: vec2(0.5, 1.0),
    });

    let border = if state.hovered && !state.pressed {
        Color::gray(124)
    } else {
        Color::gray(165)
    };
    ui.push_command(DrawCommand::StrokeRect {
        rect,
        color: border,
        line_width: 1.0,
    });

    let params = TextParams::default()
        .with_font(BUTTON_FONT_FAMILY)
        .with_size(font_size);
    let text_width = ui.text_width(label, &params);
    ui.push_command(DrawCommand::Text {
        text: label.to_string(),
        anchor: top_left + vec2((size.x - text_width) / 2.0, (size.y - font_size) / 2.0),
        params,
    });

    state
}

pub fn text(ui: &mut Ui<'_>, text: impl Into<String>, top_left: Vec2, params: &TextParams) {
    let anchor = absolute(ui, top_left);
    ui.push_command(DrawCommand::Text {
        text: text.into(),
        anchor,
        params: params.clone(),
    });
}

pub fn fill_rect(ui: &mut Ui<'_>, rect: Rect, color: Color) {
    let rect = absolute_rect(ui, rect);
    ui.push_command(DrawCommand::FillRect { rect, color });
}

pub fn stroke_rect(ui: &mut Ui<'_>, rect: Rect, color: Color, line_width: f32) {
    let rect = absolute_rect(ui, rect);
    ui.push_command(DrawCommand::StrokeRect {
        rect,
        color,
        line_width,
    });
}

pub fn fill_ellipse(ui: &mut Ui<'_>, rect: Rect, color: Color) {
    let rect = absolute_rect(ui, rect);
    ui.push_command(DrawCommand::FillEllipse { rect, color });
}

pub fn stroke_ellipse(ui: &mut Ui<'_>, rect: Rect, color: Color, line_width: f32) {
    let rect = absolute_rect(ui, rect);
    ui.push_command(DrawCommand::StrokeEllipse {
        rect,
        color,
        line_width,
    });
}

/// Vertical two-stop gradient over `rect`.
pub fn vertical_gradient(ui: &mut Ui<'_>, rect: Rect, top: Color, bottom: Color) {
    let rect = absolute_rect(ui, rect);
    ui.push_command(DrawCommand::FillGradient {
        rect,
        start_color: top,
        end_color: bottom,
        start: vec2(0.5, 0.0),
        end: vec2(0.5, 1.0),
    });
}

/// Run `content` inside a clip region. `rect` is relative to the current
/// container.
pub fn container<R>(
    ui: &mut Ui<'_>,
    id: impl Into<ItemId>,
    rect: Rect,
    content: impl FnOnce(&mut Ui<'_>) -> R,
) -> R {
    ui.push_container(id, rect.top_left, rect.bot_right);
    let out = content(ui);
    ui.pop_container();
    out
}

/// [`container`] over a solid background. The background is drawn in the
/// parent's range, before the region is pushed.
pub fn container_with_background<R>(
    ui: &mut Ui<'_>,
    id: impl Into<ItemId>,
    rect: Rect,
    background: Color,
    content: impl FnOnce(&mut Ui<'_>) -> R,
) -> R {
    fill_rect(ui, rect, background);
    container(ui, id, rect, content)
}

/// Scrollable clip region. `content` returns the height of what it laid out;
/// the scrollbar is drawn over the content afterwards.
pub fn scroll_container(
    ui: &mut Ui<'_>,
    id: impl Into<ItemId>,
    rect: Rect,
    content: impl FnOnce(&mut Ui<'_>) -> f32,
) {
    container(ui, id, rect, |ui| {
        let content_height = content(ui);
        ui.scrollbar(content_height);
    });
}
