use crate::grid::Vector;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Cut across the height: top and bottom halves.
    Horizontal,
    /// Cut across the width: left and right halves.
    Vertical,
}

impl Axis {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn top(self) -> i32 {
        self.y
    }
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }
    pub const fn left(self) -> i32 {
        self.x
    }
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    pub const fn area(self) -> i64 {
        self.w as i64 * self.h as i64
    }

    pub const fn contains(self, pos: Vector) -> bool {
        pos.0 >= self.left() && pos.0 < self.right() && pos.1 >= self.top() && pos.1 < self.bottom()
    }

    pub const fn overlaps(self, other: Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Anchor a tunnel leaves from: center rounded down.
    pub const fn source_anchor(self) -> Vector {
        Vector(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Anchor a tunnel arrives at: center rounded up, so a return tunnel
    /// does not retrace the outbound one.
    pub const fn destination_anchor(self) -> Vector {
        Vector(self.x + (self.w + 1) / 2, self.y + (self.h + 1) / 2)
    }

    /// Whether `pos` lies on the outermost ring of the rectangle.
    pub const fn on_border(self, pos: Vector) -> bool {
        self.contains(pos)
            && (pos.0 == self.left()
                || pos.0 == self.right() - 1
                || pos.1 == self.top()
                || pos.1 == self.bottom() - 1)
    }

    /// Cut into two non-overlapping halves along `axis`, the first half taking
    /// `floor(extent * ratio)` cells. The offset is kept within `1..extent` so
    /// neither half is empty; `None` when the extent is too small to cut.
    #[allow(clippy::cast_possible_truncation)]
    pub fn split(self, axis: Axis, ratio: f64) -> Option<(Self, Self)> {
        let extent = match axis {
            Axis::Horizontal => self.h,
            Axis::Vertical => self.w,
        };
        if extent < 2 {
            return None;
        }
        let amt = ((f64::from(extent) * ratio).floor() as i32).clamp(1, extent - 1);
        Some(match axis {
            Axis::Horizontal => (
                Self::new(self.x, self.y, self.w, amt),
                Self::new(self.x, self.y + amt, self.w, self.h - amt),
            ),
            Axis::Vertical => (
                Self::new(self.x, self.y, amt, self.h),
                Self::new(self.x + amt, self.y, self.w - amt, self.h),
            ),
        })
    }
}
