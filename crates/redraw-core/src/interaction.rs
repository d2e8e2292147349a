//! Hover/press/click resolution shared by every interactive primitive.
//!
//! Hover and press are single-owner: at most one identity is hovered and at
//! most one holds the press. Among elements under the pointer, the one
//! declared last wins, so declaring back-to-front gives the visually topmost
//! element priority.
//!
//! A press can only be claimed during the frame in which the button went down.
//! If nothing claims it, it stays unclaimed until release, so dragging a press
//! that started on empty space over a button never activates that button.
//! Likewise a press held by one element is never transferred to another.

use crate::{ItemId, Ui, Vec2};

/// Result of [`Ui::button_behavior`] for one element in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub pressed: bool,
    /// True only on the release frame, with the pointer still over the
    /// element that took the press.
    pub clicked: bool,
    /// The element lies entirely outside the current container.
    pub clipped: bool,
}

impl Interaction {
    pub const CLIPPED: Interaction = Interaction {
        hovered: false,
        pressed: false,
        clicked: false,
        clipped: true,
    };
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Press {
    /// Button up.
    #[default]
    Released,
    /// Button down, but nothing took the press when it started.
    Unclaimed,
    Held(ItemId),
}

#[derive(Debug, Default)]
pub(crate) struct Ownership {
    pub(crate) hovered: Option<ItemId>,
    pub(crate) press: Press,
}

impl Ownership {
    pub(crate) fn press_is_released(&self) -> bool {
        self.press == Press::Released
    }

    pub(crate) fn held(&self) -> Option<&ItemId> {
        match &self.press {
            Press::Held(id) => Some(id),
            _ => None,
        }
    }

    fn holds(&self, id: &ItemId) -> bool {
        self.held() == Some(id)
    }

    /// End-of-frame bookkeeping.
    pub(crate) fn resolve_press(&mut self, pointer_down: bool) {
        if !pointer_down {
            self.press = Press::Released;
        } else if self.press == Press::Released {
            self.press = Press::Unclaimed;
        }
    }
}

impl Ui<'_> {
    /// Hit-test an element and update hover/press ownership.
    ///
    /// Corners are absolute. Elements completely outside the current container
    /// are reported as clipped and never touch ownership; partial overlap is
    /// handled visually by the container's clip range only.
    pub fn button_behavior(
        &mut self,
        id: impl Into<ItemId>,
        top_left: Vec2,
        bot_right: Vec2,
    ) -> Interaction {
        let rect = crate::Rect::from_corners(top_left, bot_right);
        if !self.current_container().rect.intersects(&rect) {
            return Interaction::CLIPPED;
        }

        let id = id.into();
        let pointer_down = self.input.pointer_down;

        if rect.contains(self.input.pointer) {
            self.owner.hovered = Some(id.clone());
            if pointer_down && self.press_claimable {
                self.owner.press = Press::Held(id.clone());
            }
        }

        let hovered = self.owner.hovered.as_ref() == Some(&id);
        let pressed = self.owner.holds(&id);
        let clicked = !pointer_down && hovered && pressed;

        if clicked {
            log::debug!("'{}' clicked", id);
            // Application state usually changes in response; show it this frame.
            self.request_another_frame();
        }

        Interaction {
            hovered,
            pressed,
            clicked,
            clipped: false,
        }
    }

    pub fn is_hovered(&self, id: impl Into<ItemId>) -> bool {
        self.owner.hovered.as_ref() == Some(&id.into())
    }

    pub fn is_pressed(&self, id: impl Into<ItemId>) -> bool {
        self.owner.holds(&id.into())
    }
}
