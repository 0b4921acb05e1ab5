use crate::TermInt;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: TermInt,
    pub y: TermInt,
}

impl Point {
    pub const fn new(x: TermInt, y: TermInt) -> Self {
        Point { x, y }
    }

    /// The neighbouring cell in `dir`. Moving off the top or left edge of the
    /// terminal saturates at 0, which is a border cell anyway.
    pub fn step(self, dir: Direction) -> Point {
        match dir {
            Up => Point::new(self.x, self.y.saturating_sub(1)),
            Down => Point::new(self.x, self.y.saturating_add(1)),
            Left => Point::new(self.x.saturating_sub(1), self.y),
            Right => Point::new(self.x.saturating_add(1), self.y),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Size of the bordered frame. The interior is every cell strictly inside
/// the border: x in [1, width - 2], y in [1, height - 2].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: TermInt,
    pub height: TermInt,
}

impl Bounds {
    pub const fn new(width: TermInt, height: TermInt) -> Self {
        Bounds { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn in_interior(&self, p: Point) -> bool {
        p.x >= 1 && p.y >= 1 && p.x + 2 <= self.width && p.y + 2 <= self.height
    }

    pub fn interior(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.width, self.height);
        (1..h.saturating_sub(1)).flat_map(move |y| (1..w.saturating_sub(1)).map(move |x| Point::new(x, y)))
    }
}
