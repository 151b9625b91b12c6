//! Binary space partitioning of a rectangle into candidate room areas.

use log::trace;
use rand::Rng;

use crate::rect::{Axis, Rect};

/// Bounds of the split ratio drawn by [`SquarishChooser`].
pub const MIN_RATIO: f64 = 0.3;
pub const MAX_RATIO: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BspTree {
    Leaf(Rect),
    Branch(Box<Self>, Box<Self>),
}

impl BspTree {
    /// Leaf rectangles, depth-first, left before right. Rooms are connected
    /// in this order.
    pub fn leaves(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Rect>) {
        match self {
            Self::Leaf(rect) => out.push(*rect),
            Self::Branch(left, right) => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn height(&self) -> u32 {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(left, right) => 1 + left.height().max(right.height()),
        }
    }

    /// Length of the shortest root-to-leaf path, in edges.
    pub fn min_height(&self) -> u32 {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(left, right) => 1 + left.min_height().min(right.min_height()),
        }
    }
}

/// Picks how a node is cut: the axis and a ratio in `(0, 1)`.
pub trait AxisChooser {
    fn choose(&mut self, rect: Rect, depth: u32) -> (Axis, f64);
}

impl<F> AxisChooser for F
where
    F: FnMut(Rect, u32) -> (Axis, f64),
{
    fn choose(&mut self, rect: Rect, depth: u32) -> (Axis, f64) {
        self(rect, depth)
    }
}

/// Default policy: cut across the longer side so halves stay close to
/// square, a coin flip for squares, ratio uniform in `[0.3, 0.7]`.
pub struct SquarishChooser<'r, R: Rng> {
    rng: &'r mut R,
}

impl<'r, R: Rng> SquarishChooser<'r, R> {
    pub const fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AxisChooser for SquarishChooser<'_, R> {
    fn choose(&mut self, rect: Rect, _depth: u32) -> (Axis, f64) {
        let axis = match rect.w.cmp(&rect.h) {
            std::cmp::Ordering::Greater => Axis::Vertical,
            std::cmp::Ordering::Less => Axis::Horizontal,
            std::cmp::Ordering::Equal => {
                if self.rng.gen_bool(0.5) {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                }
            }
        };
        (axis, self.rng.gen_range(MIN_RATIO..=MAX_RATIO))
    }
}

/// Recursively split `rect` until `depth` reaches zero.
///
/// If the chosen axis is too short to cut (a single cell), the other axis is
/// tried; a rectangle that is one cell in both directions ends as a leaf early.
pub fn partition(rect: Rect, depth: u32, chooser: &mut impl AxisChooser) -> BspTree {
    if depth == 0 {
        return BspTree::Leaf(rect);
    }

    let (axis, ratio) = chooser.choose(rect, depth);
    let halves = rect
        .split(axis, ratio)
        .or_else(|| rect.split(axis.flip(), ratio));

    match halves {
        Some((left, right)) => {
            trace!("split {rect:?} along {axis:?} at {ratio:.2}");
            BspTree::Branch(
                Box::new(partition(left, depth - 1, chooser)),
                Box::new(partition(right, depth - 1, chooser)),
            )
        }
        None => BspTree::Leaf(rect),
    }
}
