use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

/// Device state the engine reads during a frame.
///
/// Pointer position and button persist until the next input event. The wheel
/// delta is consumed by the frame it was delivered to and zeroed afterwards.
/// A positive `wheel.y` scrolls content towards its start (wheel rolled up).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub pointer: Vec2,
    pub pointer_down: bool,
    pub wheel: Vec2,
}

impl InputState {
    pub fn move_pointer(&mut self, to: Vec2) {
        self.pointer = to;
    }

    /// Only the primary button drives interaction.
    pub fn set_button(&mut self, button: PointerButton, down: bool) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.pointer_down = down;
        true
    }

    pub fn add_wheel(&mut self, delta: Vec2) {
        self.wheel = self.wheel + delta;
    }
}
