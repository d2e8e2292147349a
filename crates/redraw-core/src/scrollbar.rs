use crate::{Color, DrawCommand, Rect, Ui, vec2};

/// Thumb placement for a vertical scrollbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbGeometry {
    pub thumb: Rect,
    /// Distance the thumb can travel (viewport height minus thumb height).
    pub track_travel: f32,
    /// Largest valid scroll offset.
    pub max_scroll: f32,
}

/// Thumb geometry for a region, or `None` when the content fits.
pub fn thumb_geometry(
    region: Rect,
    scroll_y: f32,
    content_height: f32,
    width: f32,
    min_thumb: f32,
) -> Option<ThumbGeometry> {
    let viewport_height = region.height();
    if content_height <= 0.0 {
        return None;
    }
    let ratio = viewport_height / content_height;
    if ratio >= 1.0 {
        return None;
    }

    let thumb_height = (ratio * viewport_height).max(min_thumb);
    let track_travel = viewport_height - thumb_height;
    let y = (scroll_y / content_height) * track_travel;
    let top_left = vec2(region.bot_right.x - width, region.top_left.y + y);

    Some(ThumbGeometry {
        thumb: Rect::from_corners(top_left, top_left + vec2(width, thumb_height)),
        track_travel,
        max_scroll: content_height - viewport_height,
    })
}

impl Ui<'_> {
    /// Vertical scrollbar for the current container.
    ///
    /// Dragging the thumb or rolling the wheel over the region updates the
    /// container's retained `scroll_position`; either change asks the host
    /// for another frame so content drawn earlier this frame catches up.
    pub fn scrollbar(&mut self, content_height: f32) {
        let cfg = self.config.scrollbar.clone();
        let (region, scroll_y, id) = {
            let c = self.current_container();
            (c.rect, c.scroll_position.y, c.id.scrollbar())
        };

        let Some(geo) = thumb_geometry(region, scroll_y, content_height, cfg.width, cfg.min_thumb)
        else {
            return;
        };
        let clamp = |y: f32| y.clamp(0.0, geo.max_scroll);

        let was_pressed = self.is_pressed(&id);
        let state = self.button_behavior(&id, geo.thumb.top_left, geo.thumb.bot_right);
        let pointer = self.pointer();

        let drag_started = state.pressed && !was_pressed;
        if drag_started {
            self.current_container_mut().scroll_drag_offset.y = pointer.y - geo.thumb.top_left.y;
        }

        let thumb_color: Color = if state.pressed {
            let mut moved = false;
            if geo.track_travel > 0.0 {
                let c = self.current_container_mut();
                let before = c.scroll_position.y;
                let screen = pointer.y - c.rect.top_left.y - c.scroll_drag_offset.y;
                c.scroll_position.y = clamp(screen / geo.track_travel * content_height);
                moved = (c.scroll_position.y - before).abs() > 0.001;
            }
            // A re-run with an unmoved pointer lands on the same offset, so
            // this settles after one extra frame.
            if drag_started || moved {
                self.request_another_frame();
            }
            cfg.thumb_pressed
        } else if state.hovered {
            cfg.thumb_hovered
        } else {
            cfg.thumb
        };

        self.push_command(DrawCommand::FillRect {
            rect: Rect::from_corners(vec2(region.bot_right.x - cfg.width, region.top_left.y), region.bot_right),
            color: cfg.track,
        });
        self.push_command(DrawCommand::FillRect {
            rect: Rect::from_corners(
                vec2(geo.thumb.top_left.x + 2.0, geo.thumb.top_left.y),
                vec2(geo.thumb.bot_right.x - 1.0, geo.thumb.bot_right.y),
            ),
            color: thumb_color,
        });

        let wheel = self.wheel.y;
        if wheel != 0.0 && region.contains(pointer) {
            let c = self.current_container_mut();
            let before = c.scroll_position.y;
            c.scroll_position.y = clamp(before - wheel);
            if c.scroll_position.y != before {
                // Inner regions are declared first; stop outer ones from
                // scrolling with the same delta.
                self.wheel.y = 0.0;
            }
            self.request_another_frame();
        }
    }
}
