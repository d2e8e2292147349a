use bitflags::bitflags;

use crate::{Color, Rect, Vec2, vec2};

pub const DEFAULT_FONT_FAMILY: &str = "Calibri";
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

/// Font and color settings for a text draw, applied as one value.
///
/// ```rust
/// use redraw_core::*;
///
/// let heading = TextParams::default().with_size(22.0).bold();
/// let muted = TextParams {
///     color: Color::gray(120),
///     ..TextParams::default()
/// };
/// assert!(heading.style.contains(TextStyle::BOLD));
/// assert_eq!(muted.font_size, 16.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TextParams {
    pub font_family: String,
    pub font_size: f32,
    pub style: TextStyle,
    pub color: Color,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            style: TextStyle::empty(),
            color: Color::BLACK,
        }
    }
}

impl TextParams {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }
    pub fn bold(mut self) -> Self {
        self.style |= TextStyle::BOLD;
        self
    }
    pub fn italic(mut self) -> Self {
        self.style |= TextStyle::ITALIC;
        self
    }
}

/// One drawing instruction for the rendering backend.
///
/// All rectangles are absolute screen coordinates. Commands are never mutated
/// after being pushed into a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: f32,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    StrokeEllipse {
        rect: Rect,
        color: Color,
        line_width: f32,
    },
    /// Linear two-stop gradient filling `rect`.
    ///
    /// `start` and `end` are fractions (0..1) of the rect's size, measured from
    /// its top-left corner.
    FillGradient {
        rect: Rect,
        start_color: Color,
        end_color: Color,
        start: Vec2,
        end: Vec2,
    },
    /// Single line of text. `anchor` is the top of the line box; backends put
    /// the middle baseline at `anchor.y + font_size / 2`.
    Text {
        text: String,
        anchor: Vec2,
        params: TextParams,
    },
}

impl DrawCommand {
    /// Gradient endpoints resolved to screen space.
    pub fn gradient_points(&self) -> Option<(Vec2, Vec2)> {
        match self {
            DrawCommand::FillGradient {
                rect, start, end, ..
            } => {
                let size = rect.size();
                let at = |f: Vec2| {
                    rect.top_left + vec2(size.width * f.x, size.height * f.y)
                };
                Some((at(*start), at(*end)))
            }
            _ => None,
        }
    }

    /// Stroke rectangle inset by half the line width so the stroke stays
    /// inside the declared bounds.
    pub fn stroke_inset_rect(&self) -> Option<Rect> {
        match self {
            DrawCommand::StrokeRect {
                rect, line_width, ..
            } => {
                let half = vec2(line_width / 2.0, line_width / 2.0);
                Some(Rect::from_corners(rect.top_left + half, rect.bot_right - half))
            }
            _ => None,
        }
    }

    /// Text baseline position when drawn with a middle baseline.
    pub fn text_baseline(&self) -> Option<Vec2> {
        match self {
            DrawCommand::Text { anchor, params, .. } => {
                Some(vec2(anchor.x, anchor.y + params.font_size / 2.0))
            }
            _ => None,
        }
    }
}
