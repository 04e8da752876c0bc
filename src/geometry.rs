//! Axis-aligned rectangles in scene coordinates.
//!
//! The origin is the top-left corner of the 800×600 scene and `y` grows
//! downward.

/// Logical scene width shared by every game.
pub const SCREEN_WIDTH: i32 = 800;
/// Logical scene height shared by every game.
pub const SCREEN_HEIGHT: i32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True iff the rectangles overlap on both axes.  Shared edges do not
    /// count, and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Same-sized rectangle with its top-left corner at `(x, y)`.
    pub fn moved_to(&self, x: i32, y: i32) -> Rect {
        Rect { x, y, ..*self }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: (i32, i32), b: (i32, i32)) -> f64 {
    let dx = f64::from(a.0 - b.0);
    let dy = f64::from(a.1 - b.1);
    (dx * dx + dy * dy).sqrt()
}

