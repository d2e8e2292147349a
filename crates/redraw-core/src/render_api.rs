use crate::{Color, DrawCommand, Frame, Rect, TextParams};

/// Immediate 2D drawing surface a backend exposes to [`paint`].
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn set_clip(&mut self, rect: Rect);
    fn reset_clip(&mut self);
    fn draw(&mut self, cmd: &DrawCommand);
}

/// Draw a finished frame: every range in order, clipped to its rectangle.
pub fn paint(frame: &Frame, clear_color: Color, canvas: &mut impl Canvas) {
    canvas.clear(clear_color);
    for (range, commands) in frame.lists() {
        if commands.is_empty() {
            continue;
        }
        canvas.set_clip(range.clip);
        for cmd in commands {
            canvas.draw(cmd);
        }
        canvas.reset_clip();
    }
}

pub trait RenderBackend {
    fn configure_surface(&mut self, width: u32, height: u32);
    fn present(&mut self, frame: &Frame);
}

/// Width queries used for layout. Must agree with how the backend draws text.
pub trait TextMeasure {
    fn text_width(&self, text: &str, params: &TextParams) -> f32;
}

/// Fixed advance per character; for headless use and tests.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasure {
    /// Advance as a fraction of the font size.
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, params: &TextParams) -> f32 {
        text.chars().count() as f32 * params.font_size * self.advance
    }
}
