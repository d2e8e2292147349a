pub use crate::color::Color;
pub use crate::command::{DrawCommand, TextParams, TextStyle};
pub use crate::config::EngineConfig;
pub use crate::context::Ui;
pub use crate::engine::Engine;
pub use crate::frame::Frame;
pub use crate::geometry::{Rect, Size, Vec2, vec2};
pub use crate::id::ItemId;
pub use crate::interaction::Interaction;
pub use crate::render_api::{Canvas, RenderBackend, TextMeasure, paint};
