use redraw_core::{Vec2, vec2};

/// Cursor that walks down a column, remembering how far it went.
///
/// The accumulated `total_height` is what a scroll container needs as its
/// content height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalLayout {
    pub cursor: Vec2,
    pub total_height: f32,
}

impl VerticalLayout {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            cursor: vec2(x, y),
            total_height: 0.0,
        }
    }

    /// Position for the next item, then move down by `by_y`.
    pub fn advance(&mut self, by_y: f32) -> Vec2 {
        let at = self.cursor;
        self.cursor.y += by_y;
        self.total_height += by_y;
        at
    }
}

/// Vertical layout with a fixed row height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    pub column: VerticalLayout,
    pub row_height: f32,
}

impl RowLayout {
    pub fn new(x: f32, y: f32, row_height: f32) -> Self {
        Self {
            column: VerticalLayout::new(x, y),
            row_height,
        }
    }

    pub fn advance(&mut self) -> Vec2 {
        self.column.advance(self.row_height)
    }

    pub fn total_height(&self) -> f32 {
        self.column.total_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_layout_accumulates() {
        let mut l = VerticalLayout::new(8.0, 4.0);
        assert_eq!(l.advance(20.0), vec2(8.0, 4.0));
        assert_eq!(l.advance(30.0), vec2(8.0, 24.0));
        assert_eq!(l.cursor, vec2(8.0, 54.0));
        assert_eq!(l.total_height, 50.0);
    }

    #[test]
    fn rows_are_evenly_spaced() {
        let mut rows = RowLayout::new(0.0, 10.0, 24.0);
        let ys: Vec<f32> = (0..3).map(|_| rows.advance().y).collect();
        assert_eq!(ys, vec![10.0, 34.0, 58.0]);
        assert_eq!(rows.total_height(), 72.0);
    }
}
