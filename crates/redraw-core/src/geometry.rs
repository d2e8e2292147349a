use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

impl Vec2 {
    pub const ZERO: Vec2 = vec2(0.0, 0.0);
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        vec2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        vec2(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Size> for Vec2 {
    fn from(s: Size) -> Self {
        vec2(s.width, s.height)
    }
}

/// Axis-aligned rectangle in screen space, stored as its two corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Vec2,
    pub bot_right: Vec2,
}

impl Rect {
    pub const fn from_corners(top_left: Vec2, bot_right: Vec2) -> Self {
        Self {
            top_left,
            bot_right,
        }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_corners(vec2(x, y), vec2(x + w, y + h))
    }

    pub fn width(&self) -> f32 {
        self.bot_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.bot_right.y - self.top_left.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Strict containment: points on the edge are outside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.top_left.x
            && p.y > self.top_left.y
            && p.x < self.bot_right.x
            && p.y < self.bot_right.y
    }

    /// False only when the rectangles are strictly disjoint; shared edges count.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.top_left.x > self.bot_right.x
            || other.top_left.y > self.bot_right.y
            || other.bot_right.x < self.top_left.x
            || other.bot_right.y < self.top_left.y)
    }

    pub fn translate(&self, by: Vec2) -> Rect {
        Rect::from_corners(self.top_left + by, self.bot_right + by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_strict() {
        let r = Rect::from_xywh(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(vec2(50.0, 30.0)));
        assert!(!r.contains(vec2(10.0, 30.0)));
        assert!(!r.contains(vec2(110.0, 30.0)));
        assert!(!r.contains(vec2(50.0, 70.0)));
    }

    #[test]
    fn touching_rects_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        let c = Rect::from_xywh(10.5, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(c.intersects(&b));
    }
}
