//! The fixed Moore-neighborhood direction ordering.

use std::fmt;

/// One of the 8 Moore-neighborhood directions.
///
/// The discriminant order is fixed and load-bearing: neighbor tables
/// store their 8 entries in exactly this order, and `Direction as
/// usize` indexes them. Row 0 is the TOP of the grid, so `Bottom` is
/// the fall direction (`row + 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Direction {
    /// Row above, column to the left.
    TopLeft = 0,
    /// Row above, same column.
    Top = 1,
    /// Row above, column to the right.
    TopRight = 2,
    /// Same row, column to the left.
    Left = 3,
    /// Same row, column to the right.
    Right = 4,
    /// Row below, column to the left.
    BottomLeft = 5,
    /// Row below, same column.
    Bottom = 6,
    /// Row below, column to the right.
    BottomRight = 7,
}

impl Direction {
    /// All 8 directions in table order.
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// The `(row, col)` offset of this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::BottomLeft => (1, -1),
            Direction::Bottom => (1, 0),
            Direction::BottomRight => (1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::TopLeft => "top-left",
            Direction::Top => "top",
            Direction::TopRight => "top-right",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::BottomLeft => "bottom-left",
            Direction::Bottom => "bottom",
            Direction::BottomRight => "bottom-right",
        };
        write!(f, "{name}")
    }
}
